use std::str::FromStr;

use crate::foundation::error::ReelError;

/// Easing curve applied to a normalized `[0, 1]` progress value.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    /// Identity.
    #[default]
    Linear,
    /// Quadratic ease-in.
    InQuad,
    /// Quadratic ease-out.
    OutQuad,
    /// Quadratic ease-in-out.
    InOutQuad,
    /// Cubic ease-in.
    InCubic,
    /// Cubic ease-out.
    OutCubic,
    /// Cubic ease-in-out.
    InOutCubic,
    /// Quartic ease-out (`power3.out`).
    OutQuart,
    /// Overshooting ease-out; the parameter is the overshoot amount (1.70158 is the classic value).
    OutBack(f64),
    /// Smoothstep `3t² - 2t³`.
    Smooth,
}

impl Ease {
    /// Apply the curve. Input is clamped to `[0, 1]` and the endpoints map exactly to 0 and 1;
    /// `OutBack` may leave `[0, 1]` in between.
    pub fn apply(self, t: f64) -> f64 {
        if t.is_nan() || t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
            Self::OutQuart => 1.0 - (1.0 - t).powi(4),
            Self::OutBack(s) => {
                let u = t - 1.0;
                1.0 + (s + 1.0) * u.powi(3) + s * u.powi(2)
            }
            Self::Smooth => t * t * (3.0 - 2.0 * t),
        }
    }
}

impl FromStr for Ease {
    type Err = ReelError;

    /// Accepts snake/camel names (`out_cubic`, `OutCubic`) and timeline-style names
    /// (`power2.out`, `back.out(1.4)`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim().to_ascii_lowercase();
        if raw.is_empty() {
            return Err(ReelError::validation("ease name must be non-empty"));
        }

        if let Some(rest) = raw.strip_prefix("back.out") {
            let overshoot = match rest.strip_prefix('(').and_then(|r| r.strip_suffix(')')) {
                Some(arg) => arg.trim().parse::<f64>().map_err(|_| {
                    ReelError::validation(format!("invalid back.out overshoot in '{s}'"))
                })?,
                None if rest.is_empty() => 1.70158,
                None => return Err(ReelError::validation(format!("unknown ease '{s}'"))),
            };
            if !overshoot.is_finite() || overshoot < 0.0 {
                return Err(ReelError::validation(
                    "back.out overshoot must be finite and >= 0",
                ));
            }
            return Ok(Self::OutBack(overshoot));
        }

        let key: String = raw.chars().filter(|c| *c != '_' && *c != '-').collect();
        match key.as_str() {
            "linear" | "none" => Ok(Self::Linear),
            "inquad" | "power1.in" => Ok(Self::InQuad),
            "outquad" | "power1.out" => Ok(Self::OutQuad),
            "inoutquad" | "power1.inout" => Ok(Self::InOutQuad),
            "incubic" | "power2.in" => Ok(Self::InCubic),
            "outcubic" | "power2.out" => Ok(Self::OutCubic),
            "inoutcubic" | "power2.inout" => Ok(Self::InOutCubic),
            "outquart" | "power3.out" => Ok(Self::OutQuart),
            "outback" => Ok(Self::OutBack(1.70158)),
            "smooth" | "smoothstep" => Ok(Self::Smooth),
            _ => Err(ReelError::validation(format!("unknown ease '{s}'"))),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
