use crate::foundation::core::{Canvas, Rgb8};
use crate::foundation::error::SnapmarkResult;
use crate::raster::coverage::{CapMode, Capsule, Disc, Paint, fill_capsule, fill_disc};
use crate::raster::modulate::{AlphaModulator, LinearGradient};
use crate::raster::pixmap::Pixmap;

/// Stroked segment draw op.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LineOp {
    /// Geometry in pixel space.
    pub capsule: Capsule,
    /// Stroke color.
    pub color: Rgb8,
    /// Base alpha.
    pub alpha: f64,
    /// Optional alpha ramp applied per pixel.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gradient: Option<LinearGradient>,
    /// How the round ends are produced.
    #[serde(default)]
    pub caps: CapMode,
}

/// Filled circle draw op.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CircleOp {
    /// Geometry in pixel space.
    pub disc: Disc,
    /// Fill color.
    pub color: Rgb8,
    /// Fill alpha.
    pub alpha: f64,
}

/// One entry of a display list.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    /// Thick segment with round caps.
    Line(LineOp),
    /// Filled disc.
    Circle(CircleOp),
}

impl LineOp {
    fn paint(&self) -> Paint<'_> {
        let base = Paint::solid(self.color, self.alpha);
        match &self.gradient {
            Some(g) => base.with_modulator(g as &dyn AlphaModulator),
            None => base,
        }
    }
}

impl Shape {
    /// Blend this shape into `pixmap`, returning the number of blends performed.
    pub fn draw(&self, pixmap: &mut Pixmap) -> usize {
        match self {
            Shape::Line(op) => fill_capsule(pixmap, &op.capsule, &op.paint(), op.caps),
            Shape::Circle(op) => fill_disc(pixmap, &op.disc, &Paint::solid(op.color, op.alpha)),
        }
    }
}

/// Ordered display list over a fixed canvas. Later shapes layer over earlier ones.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Scene {
    /// Target raster size.
    pub canvas: Canvas,
    /// Shapes in paint order.
    pub shapes: Vec<Shape>,
}

impl Scene {
    /// Empty scene.
    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            shapes: Vec::new(),
        }
    }

    /// Append a draw op.
    pub fn push(&mut self, shape: Shape) -> &mut Self {
        self.shapes.push(shape);
        self
    }

    /// Replay the display list onto an existing pixmap.
    pub fn render_into(&self, pixmap: &mut Pixmap) {
        for (i, shape) in self.shapes.iter().enumerate() {
            let blended = shape.draw(pixmap);
            tracing::trace!(index = i, blended, "shape drawn");
        }
    }

    /// Replay the display list onto a fresh transparent pixmap.
    #[tracing::instrument(
        skip(self),
        fields(width = self.canvas.width, height = self.canvas.height, shapes = self.shapes.len())
    )]
    pub fn render(&self) -> SnapmarkResult<Pixmap> {
        let mut pixmap = Pixmap::new(self.canvas)?;
        self.render_into(&mut pixmap);
        Ok(pixmap)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
