//! Staggered per-unit text reveals.
//!
//! A [`TextReveal`] splits its text once, at construction, and then maps any frame to the visual
//! state of every unit. Unit `i` starts at `start_from + i · stagger · fps`; the start is kept
//! fractional so distinct units never share a start unless the stagger is zero.

use std::f64::consts::PI;

use crate::{
    animation::{
        ease::Ease,
        spring::{SpringConfig, spring},
    },
    foundation::{
        core::{Color, Fps, Vec2},
        error::{ReelError, ReelResult},
        math::{Fnv1a64, Rng64, stable_hash64},
    },
    scene::{
        dsl::text_node,
        model::{FontRef, GlyphRun, TextNode},
    },
    text::units::{RichText, SplitBy, Unit, split_units},
};

/// Edge a sliding unit enters from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlideFrom {
    /// Enters moving down.
    Top,
    /// Enters moving up.
    Bottom,
    /// Enters moving right.
    Left,
    /// Enters moving left.
    Right,
}

impl SlideFrom {
    fn unit(self) -> Vec2 {
        match self {
            Self::Top => Vec2::new(0.0, -1.0),
            Self::Bottom => Vec2::new(0.0, 1.0),
            Self::Left => Vec2::new(-1.0, 0.0),
            Self::Right => Vec2::new(1.0, 0.0),
        }
    }
}

/// Per-unit animation applied by a [`TextReveal`].
#[derive(Clone, Debug, PartialEq)]
pub enum RevealKind {
    /// Fade in while rising `rise_px`.
    Fade {
        /// Seconds per unit.
        duration_s: f64,
        /// Progress curve; overshooting curves push the rise past its target.
        ease: Ease,
        /// Starting downward offset.
        rise_px: f64,
    },
    /// Fade in from a blur.
    Blur {
        /// Seconds per unit.
        duration_s: f64,
        /// Starting blur radius.
        max_blur_px: f64,
        /// Progress curve.
        ease: Ease,
    },
    /// Slide in from an edge.
    Slide {
        /// Entry edge.
        from: SlideFrom,
        /// Starting distance in pixels.
        distance: f64,
        /// Seconds per unit.
        duration_s: f64,
        /// Progress curve.
        ease: Ease,
    },
    /// Lift each unit along a half sine so a crest travels across the text.
    Wave {
        /// Crest height in pixels.
        amplitude: f64,
        /// Seconds per unit.
        duration_s: f64,
    },
    /// Drop in on an underdamped spring.
    Bounce {
        /// Starting height above the baseline.
        height: f64,
        /// Spring driving the drop.
        spring: SpringConfig,
    },
    /// Show random glyphs from `charset` before resolving to the real character.
    Scramble {
        /// Seconds a unit keeps scrambling.
        duration_s: f64,
        /// Substitute glyph pool.
        charset: String,
        /// Color of scrambled glyphs.
        scrambled_color: Color,
    },
}

impl RevealKind {
    /// Fade with a 20 px rise.
    pub fn fade(duration_s: f64, ease: Ease) -> Self {
        Self::Fade {
            duration_s,
            ease,
            rise_px: 20.0,
        }
    }

    /// Blur-to-sharp reveal starting at 10 px.
    pub fn blur(duration_s: f64) -> Self {
        Self::Blur {
            duration_s,
            max_blur_px: 10.0,
            ease: Ease::OutCubic,
        }
    }

    /// Half-second slide.
    pub fn slide(from: SlideFrom, distance: f64) -> Self {
        Self::Slide {
            from,
            distance,
            duration_s: 0.5,
            ease: Ease::OutCubic,
        }
    }

    /// Wave with the given crest height.
    pub fn wave(amplitude: f64) -> Self {
        Self::Wave {
            amplitude,
            duration_s: 0.6,
        }
    }

    /// Bouncy 30 px drop.
    pub fn bounce() -> Self {
        Self::Bounce {
            height: 30.0,
            spring: SpringConfig::new(8.0, 150.0),
        }
    }

    /// Scramble through `charset`.
    pub fn scramble(duration_s: f64, charset: impl Into<String>, scrambled_color: Color) -> Self {
        Self::Scramble {
            duration_s,
            charset: charset.into(),
            scrambled_color,
        }
    }

    /// Reject malformed parameters.
    pub fn validate(&self) -> ReelResult<()> {
        let positive = |name: &str, v: f64| {
            if v.is_finite() && v > 0.0 {
                Ok(())
            } else {
                Err(ReelError::validation(format!(
                    "{name} must be finite and > 0"
                )))
            }
        };
        let finite = |name: &str, v: f64| {
            if v.is_finite() {
                Ok(())
            } else {
                Err(ReelError::validation(format!("{name} must be finite")))
            }
        };
        match self {
            Self::Fade {
                duration_s,
                rise_px,
                ..
            } => {
                positive("fade.duration_s", *duration_s)?;
                finite("fade.rise_px", *rise_px)
            }
            Self::Blur {
                duration_s,
                max_blur_px,
                ..
            } => {
                positive("blur.duration_s", *duration_s)?;
                finite("blur.max_blur_px", *max_blur_px)
            }
            Self::Slide {
                distance,
                duration_s,
                ..
            } => {
                positive("slide.duration_s", *duration_s)?;
                finite("slide.distance", *distance)
            }
            Self::Wave {
                amplitude,
                duration_s,
            } => {
                positive("wave.duration_s", *duration_s)?;
                finite("wave.amplitude", *amplitude)
            }
            Self::Bounce { height, spring } => {
                spring.validate()?;
                finite("bounce.height", *height)
            }
            Self::Scramble {
                duration_s,
                charset,
                ..
            } => {
                positive("scramble.duration_s", *duration_s)?;
                if charset.chars().next().is_none() {
                    return Err(ReelError::validation("scramble.charset must be non-empty"));
                }
                Ok(())
            }
        }
    }
}

/// Visual state of one unit at one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UnitState {
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Offset from the laid-out position.
    pub offset: Vec2,
    /// Uniform scale.
    pub scale: f64,
    /// Rotation in radians.
    pub rotation_rad: f64,
    /// Blur radius.
    pub blur_px: f64,
    /// Substitute glyph while scrambling.
    pub glyph: Option<char>,
    /// Color override while scrambling.
    pub color: Option<Color>,
}

impl UnitState {
    /// Fully revealed.
    pub const SETTLED: Self = Self {
        opacity: 1.0,
        offset: Vec2::ZERO,
        scale: 1.0,
        rotation_rad: 0.0,
        blur_px: 0.0,
        glyph: None,
        color: None,
    };

    /// Not yet begun and without any offset.
    pub const HIDDEN: Self = Self {
        opacity: 0.0,
        ..Self::SETTLED
    };
}

/// Staggered reveal of a piece of text.
#[derive(Clone, Debug, PartialEq)]
pub struct TextReveal {
    id: String,
    text: RichText,
    split: SplitBy,
    start_from: f64,
    stagger_s: f64,
    kind: RevealKind,
    units: Vec<Unit>,
    seed: u64,
}

impl TextReveal {
    /// Split `text` by `split`; the reveal starts at frame 0 with a 0.03 s stagger.
    pub fn new(
        id: impl Into<String>,
        text: impl Into<RichText>,
        split: SplitBy,
        kind: RevealKind,
    ) -> Self {
        let id = id.into();
        let text = text.into();
        let units = split_units(&text, split);
        let seed = stable_hash64(0, &id);
        Self {
            id,
            text,
            split,
            start_from: 0.0,
            stagger_s: 0.03,
            kind,
            units,
            seed,
        }
    }

    /// Frame the first unit starts at.
    pub fn start_from(mut self, frame: f64) -> Self {
        self.start_from = frame;
        self
    }

    /// Seconds between consecutive unit starts.
    pub fn stagger(mut self, secs: f64) -> Self {
        self.stagger_s = secs;
        self
    }

    /// Element id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Source text.
    pub fn text(&self) -> &RichText {
        &self.text
    }

    /// Split granularity.
    pub fn split(&self) -> SplitBy {
        self.split
    }

    /// Animation kind.
    pub fn kind(&self) -> &RevealKind {
        &self.kind
    }

    /// Render units in order.
    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    /// Start frame of unit `i`. Never rounded.
    pub fn unit_start(&self, i: usize, fps: Fps) -> f64 {
        self.start_from + i as f64 * fps.secs_to_frames(self.stagger_s)
    }

    /// Start frame of the last unit, if there is one.
    pub fn last_unit_start(&self, fps: Fps) -> Option<f64> {
        self.units
            .len()
            .checked_sub(1)
            .map(|i| self.unit_start(i, fps))
    }

    /// Check parameters and that every unit starts before `scene_frames`.
    pub fn validate(&self, fps: Fps, scene_frames: u64) -> ReelResult<()> {
        self.kind
            .validate()
            .map_err(|e| ReelError::validation(format!("reveal '{}': {e}", self.id)))?;
        if !(self.start_from.is_finite() && self.start_from >= 0.0) {
            return Err(ReelError::validation(format!(
                "reveal '{}': start_from must be finite and >= 0",
                self.id
            )));
        }
        if !(self.stagger_s.is_finite() && self.stagger_s >= 0.0) {
            return Err(ReelError::validation(format!(
                "reveal '{}': stagger must be finite and >= 0",
                self.id
            )));
        }
        if let Some(last) = self.last_unit_start(fps)
            && last >= scene_frames as f64
        {
            return Err(ReelError::validation(format!(
                "reveal '{}': last unit starts at frame {last} past scene end {scene_frames}",
                self.id
            )));
        }
        Ok(())
    }

    /// State of unit `i` at `frame`.
    pub fn unit_state(&self, i: usize, frame: f64, fps: Fps) -> UnitState {
        let Some(unit) = self.units.get(i) else {
            return UnitState::HIDDEN;
        };
        let start = self.unit_start(i, fps);
        let elapsed = frame - start;
        if elapsed.is_nan() {
            return UnitState::HIDDEN;
        }
        let progress = |duration_s: f64| {
            let frames = fps.secs_to_frames(duration_s);
            if frames > 0.0 {
                (elapsed / frames).clamp(0.0, 1.0)
            } else if elapsed >= 0.0 {
                1.0
            } else {
                0.0
            }
        };

        match &self.kind {
            RevealKind::Fade {
                duration_s,
                ease,
                rise_px,
            } => {
                let e = ease.apply(progress(*duration_s));
                UnitState {
                    opacity: e.clamp(0.0, 1.0),
                    offset: Vec2::new(0.0, rise_px * (1.0 - e)),
                    ..UnitState::SETTLED
                }
            }
            RevealKind::Blur {
                duration_s,
                max_blur_px,
                ease,
            } => {
                let e = ease.apply(progress(*duration_s)).clamp(0.0, 1.0);
                UnitState {
                    opacity: e,
                    blur_px: max_blur_px * (1.0 - e),
                    ..UnitState::SETTLED
                }
            }
            RevealKind::Slide {
                from,
                distance,
                duration_s,
                ease,
            } => {
                let e = ease.apply(progress(*duration_s));
                UnitState {
                    opacity: e.clamp(0.0, 1.0),
                    offset: from.unit() * (distance * (1.0 - e)),
                    ..UnitState::SETTLED
                }
            }
            RevealKind::Wave {
                amplitude,
                duration_s,
            } => {
                let p = progress(*duration_s);
                UnitState {
                    opacity: (p * 3.0).min(1.0),
                    offset: Vec2::new(0.0, -amplitude * (PI * p).sin()),
                    ..UnitState::SETTLED
                }
            }
            RevealKind::Bounce { height, spring: cfg } => {
                let s = spring(frame, start, fps, *cfg);
                UnitState {
                    opacity: progress(0.2),
                    offset: Vec2::new(0.0, -height * (1.0 - s)),
                    scale: 0.6 + 0.4 * s,
                    ..UnitState::SETTLED
                }
            }
            RevealKind::Scramble {
                duration_s,
                charset,
                scrambled_color,
            } => {
                if elapsed < 0.0 {
                    return UnitState::HIDDEN;
                }
                if unit.is_blank || elapsed >= fps.secs_to_frames(*duration_s) {
                    return UnitState::SETTLED;
                }
                UnitState {
                    glyph: self.scramble_glyph(i, frame, charset),
                    color: Some(*scrambled_color),
                    ..UnitState::SETTLED
                }
            }
        }
    }

    /// Deterministic substitute glyph for unit `i` at `frame`.
    fn scramble_glyph(&self, i: usize, frame: f64, charset: &str) -> Option<char> {
        let n = charset.chars().count();
        if n == 0 {
            return None;
        }
        let mut h = Fnv1a64::new(self.seed);
        h.write_u64(i as u64);
        h.write_u64(frame.max(0.0).floor() as u64);
        let mut rng = Rng64::new(h.finish());
        charset.chars().nth(rng.next_index(n))
    }

    /// Glyph runs for every unit at `frame`. `secs` is the scene-local time that drives span
    /// shimmers.
    pub fn runs(&self, frame: f64, fps: Fps, base_color: Color) -> Vec<GlyphRun> {
        let secs = fps.frames_to_secs(frame);
        self.units
            .iter()
            .enumerate()
            .map(|(i, unit)| {
                let state = self.unit_state(i, frame, fps);
                let span = self.text.spans.get(unit.span);
                let color = state
                    .color
                    .or_else(|| span.and_then(|s| s.color))
                    .unwrap_or(base_color);
                GlyphRun {
                    text: state
                        .glyph
                        .map_or_else(|| unit.text.clone(), |c| c.to_string()),
                    color,
                    opacity: state.opacity,
                    offset: state.offset,
                    scale: state.scale,
                    rotation_rad: state.rotation_rad,
                    blur_px: state.blur_px,
                    highlight: span
                        .and_then(|s| s.shimmer.as_ref())
                        .map(|sh| sh.highlight(secs)),
                }
            })
            .collect()
    }

    /// Text payload at `frame`.
    pub fn text_node(&self, frame: f64, fps: Fps, font: FontRef, color: Color) -> TextNode {
        text_node(font, color, self.runs(frame, fps, color))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/reveal.rs"]
mod tests;
