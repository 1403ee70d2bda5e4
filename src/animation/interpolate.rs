use crate::{
    animation::{ease::Ease, lerp::Lerp},
    foundation::error::{ReelError, ReelResult},
};

/// What happens when the input falls outside the input range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Extrapolate {
    /// Keep extending the edge segment linearly.
    #[default]
    Extend,
    /// Hold the edge output value.
    Clamp,
    /// Return the input value unchanged.
    Identity,
}

/// Options shared by [`interpolate`] and [`Interpolator`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InterpolateOpts {
    /// Behaviour below the first input stop.
    pub left: Extrapolate,
    /// Behaviour above the last input stop.
    pub right: Extrapolate,
    /// Easing applied inside each segment. Extended values outside the range stay linear.
    pub ease: Ease,
}

impl InterpolateOpts {
    /// Clamp on both sides.
    pub const CLAMP: Self = Self {
        left: Extrapolate::Clamp,
        right: Extrapolate::Clamp,
        ease: Ease::Linear,
    };

    /// Same options with a different easing.
    pub fn with_ease(self, ease: Ease) -> Self {
        Self { ease, ..self }
    }
}

/// Map `value` from `input` onto `output` linearly (optionally eased).
///
/// Total over all inputs: a degenerate input range acts as a step at `input[0]`, and a NaN
/// input yields `output[0]`.
pub fn interpolate(value: f64, input: [f64; 2], output: [f64; 2], opts: InterpolateOpts) -> f64 {
    if value.is_nan() {
        return output[0];
    }
    let [in_lo, in_hi] = input;
    let [out_lo, out_hi] = output;

    if value < in_lo {
        match opts.left {
            Extrapolate::Clamp => return out_lo,
            Extrapolate::Identity => return value,
            Extrapolate::Extend => {}
        }
    }
    if value > in_hi {
        match opts.right {
            Extrapolate::Clamp => return out_hi,
            Extrapolate::Identity => return value,
            Extrapolate::Extend => {}
        }
    }

    let span = in_hi - in_lo;
    if span == 0.0 || !span.is_finite() {
        return if value < in_lo { out_lo } else { out_hi };
    }

    let t = (value - in_lo) / span;
    let te = if (0.0..=1.0).contains(&t) {
        opts.ease.apply(t)
    } else {
        t
    };
    f64::lerp(&out_lo, &out_hi, te)
}

/// Two-flag shorthand for [`interpolate`]: clamp or extend on each side, no easing.
pub fn clamp_interpolate(
    value: f64,
    input: [f64; 2],
    output: [f64; 2],
    clamp_left: bool,
    clamp_right: bool,
) -> f64 {
    let side = |clamp: bool| {
        if clamp {
            Extrapolate::Clamp
        } else {
            Extrapolate::Extend
        }
    };
    interpolate(
        value,
        input,
        output,
        InterpolateOpts {
            left: side(clamp_left),
            right: side(clamp_right),
            ease: Ease::Linear,
        },
    )
}

/// Multi-stop interpolation over a strictly increasing input range.
///
/// Ranges are validated once at construction; sampling is total.
#[derive(Clone, Debug, PartialEq)]
pub struct Interpolator {
    input: Vec<f64>,
    output: Vec<f64>,
    opts: InterpolateOpts,
}

impl Interpolator {
    /// Validate stops and build the interpolator.
    pub fn new(input: Vec<f64>, output: Vec<f64>, opts: InterpolateOpts) -> ReelResult<Self> {
        if input.len() < 2 {
            return Err(ReelError::animation(
                "interpolation input range needs at least two stops",
            ));
        }
        if input.len() != output.len() {
            return Err(ReelError::animation(format!(
                "interpolation input and output ranges differ in length ({} vs {})",
                input.len(),
                output.len()
            )));
        }
        if input.iter().chain(output.iter()).any(|v| !v.is_finite()) {
            return Err(ReelError::animation(
                "interpolation ranges must be finite",
            ));
        }
        if !input.windows(2).all(|w| w[0] < w[1]) {
            return Err(ReelError::animation(
                "interpolation input range must be strictly increasing",
            ));
        }
        Ok(Self {
            input,
            output,
            opts,
        })
    }

    /// Sample the interpolator at `value`.
    pub fn sample(&self, value: f64) -> f64 {
        let last = self.input.len() - 1;
        // Segment whose upper stop is the first stop above `value`, clamped to the edge segments.
        let idx = self
            .input
            .partition_point(|stop| *stop <= value)
            .clamp(1, last);
        let seg_opts = InterpolateOpts {
            left: if idx == 1 {
                self.opts.left
            } else {
                Extrapolate::Extend
            },
            right: if idx == last {
                self.opts.right
            } else {
                Extrapolate::Extend
            },
            ease: self.opts.ease,
        };
        interpolate(
            value,
            [self.input[idx - 1], self.input[idx]],
            [self.output[idx - 1], self.output[idx]],
            seg_opts,
        )
    }
}

/// Convenience wrapper around [`Interpolator`] for one-off multi-stop lookups.
pub fn interpolate_piecewise(
    value: f64,
    input: &[f64],
    output: &[f64],
    opts: InterpolateOpts,
) -> ReelResult<f64> {
    Ok(Interpolator::new(input.to_vec(), output.to_vec(), opts)?.sample(value))
}

#[cfg(test)]
#[path = "../../tests/unit/animation/interpolate.rs"]
mod tests;
