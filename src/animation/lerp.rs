/// Interpolation contract for animated value types.
///
/// Vectors use kurbo's inherent `Vec2::lerp`.
pub trait Lerp: Sized {
    /// Interpolate from `a` to `b` with factor `t` (not clamped; springs may overshoot).
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/lerp.rs"]
mod tests;
