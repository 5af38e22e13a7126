//! Hard-edged coverage for capsules and discs.
//!
//! Membership is tested once per pixel at the pixel center `(x + 0.5, y + 0.5)`. Only the
//! shape's bounding box, grown by one pixel and clipped to the raster, is visited.

use crate::foundation::core::{Canvas, Point, Rect, Rgb8};
use crate::foundation::math::dist2_point_to_segment;
use crate::raster::modulate::AlphaModulator;
use crate::raster::pixmap::Pixmap;

/// Color, base alpha and optional per-pixel alpha multiplier for one draw call.
#[derive(Clone, Copy)]
pub struct Paint<'a> {
    /// Fill color.
    pub color: Rgb8,
    /// Base alpha, multiplied with the modulator output.
    pub alpha: f64,
    /// Optional position-dependent alpha multiplier; `None` means constant `1.0`.
    pub modulator: Option<&'a dyn AlphaModulator>,
}

impl<'a> Paint<'a> {
    /// Uniform paint without a modulator.
    pub fn solid(color: Rgb8, alpha: f64) -> Self {
        Self {
            color,
            alpha,
            modulator: None,
        }
    }

    /// Attach a modulator.
    pub fn with_modulator(mut self, modulator: &'a dyn AlphaModulator) -> Self {
        self.modulator = Some(modulator);
        self
    }

    /// Effective alpha at pixel center `p`.
    pub fn alpha_at(&self, p: Point) -> f64 {
        match self.modulator {
            Some(m) => self.alpha * m.alpha_at(p),
            None => self.alpha,
        }
    }
}

impl std::fmt::Debug for Paint<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Paint")
            .field("color", &self.color)
            .field("alpha", &self.alpha)
            .field("modulated", &self.modulator.is_some())
            .finish()
    }
}

/// How the round ends of a capsule are produced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapMode {
    /// Fill the body, then blend a disc at each endpoint with the same paint.
    ///
    /// Pixels under a cap are blended twice, which darkens translucent strokes near their ends.
    #[default]
    Overdraw,
    /// Blend every pixel of the capsule exactly once.
    Single,
}

/// Inclusive pixel rectangle visited by a fill.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelBounds {
    /// First column.
    pub x0: i64,
    /// First row.
    pub y0: i64,
    /// Last column (inclusive).
    pub x1: i64,
    /// Last row (inclusive).
    pub y1: i64,
}

impl PixelBounds {
    /// Grow `rect` by one pixel on each side (after rounding outward) and clip to `canvas`.
    pub fn from_rect(rect: Rect, canvas: Canvas) -> Self {
        Self {
            x0: (rect.x0.floor() as i64).saturating_sub(1).max(0),
            y0: (rect.y0.floor() as i64).saturating_sub(1).max(0),
            x1: (rect.x1.ceil() as i64)
                .saturating_add(1)
                .min(i64::from(canvas.width) - 1),
            y1: (rect.y1.ceil() as i64)
                .saturating_add(1)
                .min(i64::from(canvas.height) - 1),
        }
    }

    /// `true` when no pixel is covered.
    pub fn is_empty(&self) -> bool {
        self.x0 > self.x1 || self.y0 > self.y1
    }

    /// `true` when `(x, y)` lies inside.
    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= self.x0 && x <= self.x1 && y >= self.y0 && y <= self.y1
    }
}

/// Segment with width and round ends.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Capsule {
    /// First endpoint.
    pub a: Point,
    /// Second endpoint.
    pub b: Point,
    /// Stroke width; the capsule radius is half of it.
    pub width: f64,
}

impl Capsule {
    /// Build a capsule from its endpoints and stroke width.
    pub fn new(a: Point, b: Point, width: f64) -> Self {
        Self { a, b, width }
    }

    /// Half the stroke width.
    pub fn radius(&self) -> f64 {
        self.width / 2.0
    }

    /// Exact geometric bounds.
    pub fn bounds(&self) -> Rect {
        let r = self.radius();
        Rect::from_points(self.a, self.b).inflate(r, r)
    }

    /// `true` when the pixel center `p` is inside.
    pub fn contains(&self, p: Point) -> bool {
        let r = self.radius();
        dist2_point_to_segment(p, self.a, self.b) <= r * r
    }
}

/// Filled circle.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Disc {
    /// Center.
    pub center: Point,
    /// Radius.
    pub radius: f64,
}

impl Disc {
    /// Build a disc from its center and radius.
    pub fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Exact geometric bounds.
    pub fn bounds(&self) -> Rect {
        Rect::from_center_size(self.center, (2.0 * self.radius, 2.0 * self.radius))
    }

    /// `true` when the pixel center `p` is inside.
    pub fn contains(&self, p: Point) -> bool {
        (p - self.center).hypot2() <= self.radius * self.radius
    }
}

fn pixel_center(x: i64, y: i64) -> Point {
    Point::new(x as f64 + 0.5, y as f64 + 0.5)
}

fn blend_at(pixmap: &mut Pixmap, x: i64, y: i64, p: Point, paint: &Paint<'_>) -> bool {
    let alpha = paint.alpha_at(p);
    alpha > 0.0 && pixmap.blend(x, y, paint.color, alpha)
}

/// Fill a capsule into `pixmap`. Returns the number of blends performed.
pub fn fill_capsule(
    pixmap: &mut Pixmap,
    capsule: &Capsule,
    paint: &Paint<'_>,
    caps: CapMode,
) -> usize {
    let bounds = PixelBounds::from_rect(capsule.bounds(), pixmap.canvas());
    let mut blended = 0usize;

    if !bounds.is_empty() {
        for y in bounds.y0..=bounds.y1 {
            for x in bounds.x0..=bounds.x1 {
                let p = pixel_center(x, y);
                if capsule.contains(p) && blend_at(pixmap, x, y, p, paint) {
                    blended += 1;
                }
            }
        }
    }

    if caps == CapMode::Overdraw {
        let r = capsule.radius();
        blended += fill_disc(pixmap, &Disc::new(capsule.a, r), paint);
        blended += fill_disc(pixmap, &Disc::new(capsule.b, r), paint);
    }
    blended
}

/// Fill a disc into `pixmap`. Returns the number of blends performed.
pub fn fill_disc(pixmap: &mut Pixmap, disc: &Disc, paint: &Paint<'_>) -> usize {
    let bounds = PixelBounds::from_rect(disc.bounds(), pixmap.canvas());
    if bounds.is_empty() {
        return 0;
    }

    let r2 = disc.radius * disc.radius;
    let mut blended = 0usize;
    for y in bounds.y0..=bounds.y1 {
        let py = y as f64 + 0.5;
        let dy2 = (py - disc.center.y) * (py - disc.center.y);
        if dy2 > r2 {
            continue;
        }
        for x in bounds.x0..=bounds.x1 {
            let px = x as f64 + 0.5;
            let dx = px - disc.center.x;
            if dy2 + dx * dx <= r2 && blend_at(pixmap, x, y, Point::new(px, py), paint) {
                blended += 1;
            }
        }
    }
    blended
}

#[cfg(test)]
#[path = "../../tests/unit/raster/coverage.rs"]
mod tests;
