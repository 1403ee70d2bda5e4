//! Damped harmonic-oscillator progress curves.
//!
//! The curve is the analytic step response of `m·x'' + c·x' + k·x = k` starting at rest at 0,
//! sampled at `t = (frame - start) / fps` seconds. Because it is closed-form, sampling any frame is
//! O(1) and independent of every other frame.

use crate::foundation::{
    core::Fps,
    error::{ReelError, ReelResult},
};

const CRITICAL_EPS: f64 = 1e-9;
const MAX_MEASURE_FRAMES: u64 = 1_000_000;
const SETTLE_WINDOW_FRAMES: u32 = 20;

/// Physical constants of a spring.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SpringConfig {
    /// Damping coefficient `c`. Lower values overshoot more.
    pub damping: f64,
    /// Stiffness `k`. Higher values settle faster.
    pub stiffness: f64,
    /// Mass `m`.
    pub mass: f64,
    /// Clamp the curve at 1 instead of overshooting.
    pub overshoot_clamping: bool,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            damping: 10.0,
            stiffness: 100.0,
            mass: 1.0,
            overshoot_clamping: false,
        }
    }
}

impl SpringConfig {
    /// Spring with the given damping and stiffness and unit mass.
    pub const fn new(damping: f64, stiffness: f64) -> Self {
        Self {
            damping,
            stiffness,
            mass: 1.0,
            overshoot_clamping: false,
        }
    }

    /// Damping ratio `ζ = c / (2·√(k·m))`.
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    /// Reject constants that cannot produce a converging curve.
    pub fn validate(&self) -> ReelResult<()> {
        if !(self.damping.is_finite() && self.damping > 0.0) {
            return Err(ReelError::animation("spring damping must be finite and > 0"));
        }
        if !(self.stiffness.is_finite() && self.stiffness > 0.0) {
            return Err(ReelError::animation(
                "spring stiffness must be finite and > 0",
            ));
        }
        if !(self.mass.is_finite() && self.mass > 0.0) {
            return Err(ReelError::animation("spring mass must be finite and > 0"));
        }
        Ok(())
    }
}

/// Spring progress at `frame` for an animation that starts at `start_frame`.
///
/// Returns exactly 0 while `frame <= start_frame` and tends to 1 afterwards. Constants rejected by
/// [`SpringConfig::validate`] degrade to a hard step so the function stays total.
pub fn spring(frame: f64, start_frame: f64, fps: Fps, cfg: SpringConfig) -> f64 {
    let elapsed = frame - start_frame;
    if !elapsed.is_finite() || elapsed <= 0.0 {
        return 0.0;
    }
    if cfg.validate().is_err() {
        return 1.0;
    }

    let t = fps.frames_to_secs(elapsed);
    let p = step_response(t, cfg);
    if cfg.overshoot_clamping { p.min(1.0) } else { p }
}

/// Spring mapped onto `[from, to]`.
pub fn spring_between(
    frame: f64,
    start_frame: f64,
    fps: Fps,
    cfg: SpringConfig,
    from: f64,
    to: f64,
) -> f64 {
    from + (to - from) * spring(frame, start_frame, fps, cfg)
}

/// Number of frames until the spring stays within `threshold` of its target.
pub fn measure_spring(fps: Fps, cfg: SpringConfig, threshold: f64) -> ReelResult<u64> {
    cfg.validate()?;
    if !(threshold.is_finite() && threshold > 0.0) {
        return Err(ReelError::animation(
            "spring settle threshold must be finite and > 0",
        ));
    }

    let distance = |f: u64| (1.0 - spring(f as f64, 0.0, fps, cfg)).abs();

    let mut frame = 0u64;
    while distance(frame) >= threshold {
        frame += 1;
        if frame > MAX_MEASURE_FRAMES {
            return Err(ReelError::animation(
                "spring did not settle within the measurement limit",
            ));
        }
    }

    // Underdamped springs dip back out of the band; keep scanning until a full window stays in.
    let mut settled = frame;
    let mut quiet = 0u32;
    while quiet < SETTLE_WINDOW_FRAMES {
        frame += 1;
        if frame > MAX_MEASURE_FRAMES {
            return Err(ReelError::animation(
                "spring did not settle within the measurement limit",
            ));
        }
        if distance(frame) >= threshold {
            quiet = 0;
            settled = frame + 1;
        } else {
            quiet += 1;
        }
    }
    Ok(settled)
}

fn step_response(t: f64, cfg: SpringConfig) -> f64 {
    let omega0 = (cfg.stiffness / cfg.mass).sqrt();
    let zeta = cfg.damping_ratio();

    if (zeta - 1.0).abs() < CRITICAL_EPS {
        let envelope = (-omega0 * t).exp();
        return 1.0 - envelope * (1.0 + omega0 * t);
    }

    if zeta < 1.0 {
        let omega1 = omega0 * (1.0 - zeta * zeta).sqrt();
        let envelope = (-zeta * omega0 * t).exp();
        let (sin1, cos1) = (omega1 * t).sin_cos();
        1.0 - envelope * (cos1 + (zeta * omega0 / omega1) * sin1)
    } else {
        // Overdamped: expand cosh/sinh into two decaying exponentials to avoid overflow.
        let omega1 = omega0 * (zeta * zeta - 1.0).sqrt();
        let slow = ((-zeta * omega0 + omega1) * t).exp();
        let fast = ((-zeta * omega0 - omega1) * t).exp();
        let cosh_part = 0.5 * (slow + fast);
        let sinh_part = 0.5 * (slow - fast);
        1.0 - (cosh_part + (zeta * omega0 / omega1) * sinh_part)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/spring.rs"]
mod tests;
