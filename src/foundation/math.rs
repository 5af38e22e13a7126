use crate::foundation::core::Point;

/// Clamp to `[0, 1]`. NaN maps to `0`.
pub fn clamp01(v: f64) -> f64 {
    if v > 0.0 { v.min(1.0) } else { 0.0 }
}

/// Squared distance from `p` to the closed segment `a..b`.
///
/// A zero-length segment degenerates to the squared distance between `p` and `a`.
pub fn dist2_point_to_segment(p: Point, a: Point, b: Point) -> f64 {
    let ab = b - a;
    let len2 = ab.hypot2();
    if len2 == 0.0 {
        return (p - a).hypot2();
    }
    let t = clamp01((p - a).dot(ab) / len2);
    (p - (a + ab * t)).hypot2()
}

/// Map a unit-range channel to `u8` by rounding half up.
pub(crate) fn unit_to_u8(v: f64) -> u8 {
    (v * 255.0 + 0.5).floor().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
