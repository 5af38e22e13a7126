use crate::foundation::core::Point;
use crate::foundation::math::clamp01;

/// Per-pixel alpha multiplier sampled at pixel centers.
///
/// Implementations must be pure functions of position. Any `Fn(Point) -> f64` closure
/// qualifies.
pub trait AlphaModulator {
    /// Multiplier for the pixel whose center is `p`.
    fn alpha_at(&self, p: Point) -> f64;
}

impl<F> AlphaModulator for F
where
    F: Fn(Point) -> f64,
{
    fn alpha_at(&self, p: Point) -> f64 {
        self(p)
    }
}

/// Alpha ramp along the axis `start -> end`, flat beyond both ends.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LinearGradient {
    /// Point where the ramp evaluates to `a0`.
    pub start: Point,
    /// Point where the ramp evaluates to `a1`.
    pub end: Point,
    /// Alpha at and before `start`.
    pub a0: f64,
    /// Alpha at and after `end`.
    pub a1: f64,
}

impl LinearGradient {
    /// Build a gradient between two points.
    pub fn new(start: Point, end: Point, a0: f64, a1: f64) -> Self {
        Self { start, end, a0, a1 }
    }

    /// Normalized projection of `p` on the gradient axis, clamped to `[0, 1]`.
    ///
    /// A zero-length axis always yields `0`.
    pub fn param(&self, p: Point) -> f64 {
        let axis = self.end - self.start;
        let len2 = axis.hypot2();
        if len2 == 0.0 {
            return 0.0;
        }
        clamp01((p - self.start).dot(axis) / len2)
    }
}

impl AlphaModulator for LinearGradient {
    fn alpha_at(&self, p: Point) -> f64 {
        self.a0 + (self.a1 - self.a0) * self.param(p)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/modulate.rs"]
mod tests;
