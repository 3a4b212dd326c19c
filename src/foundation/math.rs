/// Divide `num` by `den`, yielding `0.0` when the denominator is zero or the
/// quotient is not finite.
///
/// Zero-size callout frames are a legal fallback result, so every offset ratio
/// taken against a frame dimension goes through here.
pub(crate) fn safe_ratio(num: f64, den: f64) -> f64 {
    if den == 0.0 {
        return 0.0;
    }
    let r = num / den;
    if r.is_finite() { r } else { 0.0 }
}

/// Clamp a possibly negative or NaN extent to a usable non-negative length.
pub(crate) fn non_negative(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.max(0.0) }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
