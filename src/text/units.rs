use crate::{effects::shimmer::Shimmer, foundation::core::Color};

/// Styled slice of a [`RichText`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Span {
    /// Span text.
    pub text: String,
    /// Color override; `None` uses the node color.
    pub color: Option<Color>,
    /// Highlight sweep over this span.
    pub shimmer: Option<Shimmer>,
}

impl Span {
    /// Unstyled span.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: None,
            shimmer: None,
        }
    }

    /// Span in a fixed color.
    pub fn colored(text: impl Into<String>, color: Color) -> Self {
        Self {
            color: Some(color),
            ..Self::plain(text)
        }
    }

    /// Span in the shimmer's base color with the sweep attached.
    pub fn shimmering(text: impl Into<String>, shimmer: Shimmer) -> Self {
        Self {
            text: text.into(),
            color: Some(shimmer.base_color),
            shimmer: Some(shimmer),
        }
    }
}

/// Text made of styled spans.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RichText {
    /// Spans in reading order.
    pub spans: Vec<Span>,
}

impl RichText {
    /// Append a span.
    pub fn span(mut self, span: Span) -> Self {
        self.spans.push(span);
        self
    }

    /// Concatenated text of all spans.
    pub fn plain_text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

impl From<&str> for RichText {
    fn from(s: &str) -> Self {
        Self::default().span(Span::plain(s))
    }
}

impl From<String> for RichText {
    fn from(s: String) -> Self {
        Self::default().span(Span::plain(s))
    }
}

/// Granularity of a staggered reveal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitBy {
    /// One unit per character, whitespace included.
    Chars,
    /// One unit per word; whitespace rides along with the preceding word.
    Words,
}

/// Independently animated slice of text.
#[derive(Clone, Debug, PartialEq)]
pub struct Unit {
    /// Text drawn for the unit.
    pub text: String,
    /// Index of the span the unit came from.
    pub span: usize,
    /// `true` when the unit has no visible glyphs.
    pub is_blank: bool,
}

/// Split `text` into render units. Concatenating the unit texts gives back the input; units never
/// straddle a span boundary.
pub fn split_units(text: &RichText, by: SplitBy) -> Vec<Unit> {
    let mut units = Vec::new();
    for (span_idx, span) in text.spans.iter().enumerate() {
        match by {
            SplitBy::Chars => {
                units.extend(span.text.chars().map(|c| Unit {
                    text: c.to_string(),
                    span: span_idx,
                    is_blank: c.is_whitespace(),
                }));
            }
            SplitBy::Words => {
                let mut current = String::new();
                let mut seen_space = false;
                for c in span.text.chars() {
                    if c.is_whitespace() {
                        seen_space = true;
                    } else if seen_space && current.chars().any(|ch| !ch.is_whitespace()) {
                        units.push(word_unit(std::mem::take(&mut current), span_idx));
                        seen_space = false;
                    }
                    current.push(c);
                }
                if !current.is_empty() {
                    units.push(word_unit(current, span_idx));
                }
            }
        }
    }
    units
}

fn word_unit(text: String, span: usize) -> Unit {
    let is_blank = text.chars().all(char::is_whitespace);
    Unit {
        text,
        span,
        is_blank,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/units.rs"]
mod tests;
