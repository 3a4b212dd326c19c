//! Linear interpolation helpers.

#[inline]
/// Linearly interpolate between `a` and `b` with `t` clamped to `[0, 1]`.
///
/// A NaN `t` is treated as `0`.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    a + ((b - a) * t)
}
