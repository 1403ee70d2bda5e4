use std::f64::consts::PI;

use crate::{foundation::core::Color, scene::model::Highlight};

/// Highlight band sweeping across a text span, repeating every `duration_s`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Shimmer {
    /// Resting text color under the band.
    pub base_color: Color,
    /// Band color.
    pub highlight_color: Color,
    /// Seconds per sweep.
    pub duration_s: f64,
    /// Band width as a fraction of the span.
    pub band_width: f64,
}

impl Shimmer {
    /// Sweep with the default band width.
    pub fn new(base_color: Color, highlight_color: Color, duration_s: f64) -> Self {
        Self {
            base_color,
            highlight_color,
            duration_s,
            band_width: 0.3,
        }
    }

    /// Band center at `secs`, in `[-0.5, 1.5]`. The band enters from the left, crosses the span
    /// with an ease-in-out and leaves on the right before the next sweep starts.
    pub fn position(&self, secs: f64) -> f64 {
        if !(self.duration_s.is_finite() && self.duration_s > 0.0) || !secs.is_finite() {
            return -0.5;
        }
        let cycle = (secs / self.duration_s).rem_euclid(1.0);
        let eased = 0.5 - 0.5 * (PI * cycle).cos();
        -0.5 + 2.0 * eased
    }

    /// Highlight to attach to the span's glyph runs at `secs`.
    pub fn highlight(&self, secs: f64) -> Highlight {
        Highlight {
            color: self.highlight_color,
            position: self.position(secs),
            width: self.band_width,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/shimmer.rs"]
mod tests;
