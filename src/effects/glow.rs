use crate::{
    animation::{ambient::pulse, ease::Ease},
    foundation::core::{Color, Vec2},
    scene::model::GlowStyle,
};

/// Pulse swing around the base intensity.
const PULSE_SWING: f64 = 0.25;

/// Static or pulsating outer glow.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Glow {
    /// Glow color.
    pub color: Color,
    /// Base blur radius in pixels.
    pub intensity: f64,
    /// Pulse period in seconds; `None` keeps the glow static.
    pub pulse_duration_s: Option<f64>,
    /// Number of stacked shadow layers.
    pub layers: u32,
}

impl Glow {
    /// Static single-layer glow.
    pub fn new(color: Color, intensity: f64) -> Self {
        Self {
            color,
            intensity,
            pulse_duration_s: None,
            layers: 1,
        }
    }

    /// Pulsate with the given period.
    pub fn pulsing(self, period_s: f64) -> Self {
        Self {
            pulse_duration_s: Some(period_s),
            ..self
        }
    }

    /// Use `layers` stacked shadows.
    pub fn layers(self, layers: u32) -> Self {
        Self { layers, ..self }
    }

    /// Intensity at `secs`, oscillating ±25% around the base when pulsing.
    pub fn intensity_at(&self, secs: f64) -> f64 {
        match self.pulse_duration_s {
            Some(period) => pulse(secs, period, self.intensity * PULSE_SWING, self.intensity),
            None => self.intensity,
        }
    }

    /// Style for the visual tree at `secs`.
    pub fn style_at(&self, secs: f64) -> GlowStyle {
        self.style_with_intensity(self.intensity_at(secs))
    }

    fn style_with_intensity(&self, intensity: f64) -> GlowStyle {
        GlowStyle {
            color: self.color,
            radius_px: intensity.max(0.0),
            layers: self.layers.max(1),
            offset: Vec2::ZERO,
        }
    }
}

/// Glow that grows from nothing to full intensity, then optionally pulsates.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AnimatedGlow {
    /// Steady-state glow.
    pub glow: Glow,
    /// Seconds to reach full intensity.
    pub duration_s: f64,
    /// Start pulsating once fully grown.
    pub pulsate_after: bool,
}

impl AnimatedGlow {
    /// Grow-in glow; `glow.pulse_duration_s` is used once `pulsate_after` kicks in.
    pub fn new(glow: Glow, duration_s: f64, pulsate_after: bool) -> Self {
        Self {
            glow,
            duration_s,
            pulsate_after,
        }
    }

    /// Intensity `secs` after the glow mounted.
    pub fn intensity_at(&self, secs: f64) -> f64 {
        if !secs.is_finite() || secs <= 0.0 {
            return 0.0;
        }
        if self.duration_s > 0.0 && secs < self.duration_s {
            return self.glow.intensity * Ease::OutCubic.apply(secs / self.duration_s);
        }
        if self.pulsate_after {
            self.glow.intensity_at(secs - self.duration_s.max(0.0))
        } else {
            self.glow.intensity
        }
    }

    /// Style for the visual tree at `secs`.
    pub fn style_at(&self, secs: f64) -> GlowStyle {
        self.glow.style_with_intensity(self.intensity_at(secs))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/glow.rs"]
mod tests;
