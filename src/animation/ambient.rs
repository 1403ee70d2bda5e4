use std::f64::consts::{FRAC_PI_2, TAU};

/// Sinusoid sampled at a frame: `amplitude · sin(frequency · frame + phase_offset)`.
///
/// `frequency` is in radians per frame, so the period is `2π / frequency` frames.
pub fn ambient(frame: f64, frequency: f64, amplitude: f64, phase_offset: f64) -> f64 {
    amplitude * (frequency * frame + phase_offset).sin()
}

/// Wave shape of an [`Oscillator`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Wave {
    /// Starts at the offset, rising.
    Sin,
    /// Starts at the peak.
    Cos,
}

/// Decorative periodic motion around a resting value.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Oscillator {
    /// Wave shape.
    pub wave: Wave,
    /// Angular frequency in radians per frame.
    pub frequency: f64,
    /// Peak deviation from `offset`.
    pub amplitude: f64,
    /// Phase in radians.
    pub phase: f64,
    /// Resting value the wave oscillates around.
    pub offset: f64,
}

impl Oscillator {
    /// `amplitude · sin(frequency · frame)`.
    pub const fn sin(frequency: f64, amplitude: f64) -> Self {
        Self {
            wave: Wave::Sin,
            frequency,
            amplitude,
            phase: 0.0,
            offset: 0.0,
        }
    }

    /// `amplitude · cos(frequency · frame)`.
    pub const fn cos(frequency: f64, amplitude: f64) -> Self {
        Self {
            wave: Wave::Cos,
            frequency,
            amplitude,
            phase: 0.0,
            offset: 0.0,
        }
    }

    /// Shift the wave by a number of frames, so `sample(f)` behaves like the unshifted
    /// wave at `f + frames`.
    pub const fn shifted_by_frames(self, frames: f64) -> Self {
        Self {
            phase: self.phase + frames * self.frequency,
            ..self
        }
    }

    /// Oscillate around `offset` instead of 0.
    pub const fn around(self, offset: f64) -> Self {
        Self { offset, ..self }
    }

    /// Same wave mirrored around its offset.
    pub const fn inverted(self) -> Self {
        Self {
            amplitude: -self.amplitude,
            ..self
        }
    }

    /// Sample the wave at `frame`.
    pub fn sample(&self, frame: f64) -> f64 {
        let phase = match self.wave {
            Wave::Sin => self.phase,
            Wave::Cos => self.phase + FRAC_PI_2,
        };
        self.offset + ambient(frame, self.frequency, self.amplitude, phase)
    }

    /// Period in frames; infinite for a zero frequency.
    pub fn period_frames(&self) -> f64 {
        if self.frequency == 0.0 {
            f64::INFINITY
        } else {
            TAU / self.frequency.abs()
        }
    }
}

/// Pulse with a period given in seconds: `base + amplitude · sin(2π · secs / period_s)`.
///
/// A non-positive period disables the pulse and returns `base`.
pub fn pulse(secs: f64, period_s: f64, amplitude: f64, base: f64) -> f64 {
    if !(period_s.is_finite() && period_s > 0.0) {
        return base;
    }
    base + amplitude * (TAU * secs / period_s).sin()
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ambient.rs"]
mod tests;
