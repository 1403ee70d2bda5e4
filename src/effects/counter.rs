use crate::animation::ease::Ease;

/// Number that counts from `from` to `to` over `duration_s`, starting `delay_s` in.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Counter {
    /// Start value.
    pub from: f64,
    /// End value.
    pub to: f64,
    /// Counting time in seconds.
    pub duration_s: f64,
    /// Seconds before counting starts.
    pub delay_s: f64,
    /// Easing of the count.
    pub ease: Ease,
    /// Shorten to `K`/`M`/`B` with one decimal.
    pub abbreviate: bool,
    /// Appended after the number.
    pub suffix: String,
}

impl Counter {
    /// Linear, unabbreviated count without a suffix.
    pub fn new(from: f64, to: f64, duration_s: f64) -> Self {
        Self {
            from,
            to,
            duration_s,
            delay_s: 0.0,
            ease: Ease::Linear,
            abbreviate: false,
            suffix: String::new(),
        }
    }

    /// Start counting `delay_s` seconds in.
    pub fn delay(mut self, delay_s: f64) -> Self {
        self.delay_s = delay_s;
        self
    }

    /// Counting curve.
    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    /// Abbreviate large values.
    pub fn abbreviated(mut self) -> Self {
        self.abbreviate = true;
        self
    }

    /// Suffix such as `"+"` or `"%"`.
    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Progress in `[0, 1]` at `secs`.
    pub fn progress_at(&self, secs: f64) -> f64 {
        let elapsed = secs - self.delay_s;
        if !elapsed.is_finite() || elapsed <= 0.0 {
            return 0.0;
        }
        if self.duration_s <= 0.0 || elapsed >= self.duration_s {
            return 1.0;
        }
        elapsed / self.duration_s
    }

    /// Current value at `secs`.
    pub fn value_at(&self, secs: f64) -> f64 {
        self.from + (self.to - self.from) * self.ease.apply(self.progress_at(secs))
    }

    /// Display string at `secs`, rounded to an integer before formatting.
    pub fn text_at(&self, secs: f64) -> String {
        format!(
            "{}{}",
            format_count(self.value_at(secs), self.abbreviate),
            self.suffix
        )
    }
}

const UNITS: [(f64, &str); 3] = [(1e9, "B"), (1e6, "M"), (1e3, "K")];

/// Format a count: `10M`, `50K`, `1.5K` when abbreviating, `12,345` otherwise.
pub fn format_count(value: f64, abbreviate: bool) -> String {
    let v = if value.is_finite() { value.round() } else { 0.0 };
    let sign = if v < 0.0 { "-" } else { "" };
    let v = v.abs();

    if abbreviate {
        for (i, &(scale, unit)) in UNITS.iter().enumerate() {
            if v < scale {
                continue;
            }
            let tenths = (v / scale * 10.0).round() / 10.0;
            // 999_950 rounds to 1000.0K; show it as 1M instead.
            if tenths >= 1000.0 && i > 0 {
                let (up_scale, up_unit) = UNITS[i - 1];
                return format!("{sign}{}{up_unit}", trim_tenths(v / up_scale));
            }
            return format!("{sign}{}{unit}", trim_tenths(v / scale));
        }
    }
    format!("{sign}{}", group_thousands(v as u64))
}

fn trim_tenths(x: f64) -> String {
    let s = format!("{x:.1}");
    match s.strip_suffix(".0") {
        Some(whole) => whole.to_owned(),
        None => s,
    }
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/effects/counter.rs"]
mod tests;
