//! The SnapAgent mark: a gradient hexagon, six inner connectors, a glowing core and three
//! orbiting nodes.
//!
//! Geometry is authored in a 40×40 design space and scaled uniformly to pixels.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::foundation::core::{Canvas, Point, Rgb8};
use crate::foundation::error::{SnapmarkError, SnapmarkResult};
use crate::raster::coverage::{CapMode, Capsule, Disc};
use crate::raster::modulate::LinearGradient;
use crate::scene::model::{CircleOp, LineOp, Scene, Shape};

/// Side of the square design space, in design units.
pub const DESIGN_SIZE: u32 = 40;

/// Default pixels per design unit (40 × 100 = 4000 px).
pub const DEFAULT_SCALE: u32 = 100;

/// Brand purple `#5f5bff`.
pub const DEFAULT_COLOR: Rgb8 = Rgb8::new(95, 91, 255);

const HEXAGON: [(f64, f64); 6] = [
    (20.0, 2.0),
    (35.5885, 11.0),
    (35.5885, 29.0),
    (20.0, 38.0),
    (4.41154, 29.0),
    (4.41154, 11.0),
];
const HEXAGON_WIDTH: f64 = 2.5;
const HEXAGON_RAMP: ((f64, f64), (f64, f64)) = ((4.0, 4.0), (36.0, 36.0));
const HEXAGON_RAMP_ALPHA: (f64, f64) = (0.9, 0.4);

const CONNECTORS: [((f64, f64), (f64, f64)); 6] = [
    ((20.0, 11.0), (20.0, 17.0)),
    ((20.0, 23.0), (20.0, 29.0)),
    ((14.8038, 14.0), (20.0, 17.0)),
    ((25.1962, 14.0), (20.0, 17.0)),
    ((14.8038, 26.0), (20.0, 23.0)),
    ((25.1962, 26.0), (20.0, 23.0)),
];
const CONNECTOR_WIDTH: f64 = 2.0;
const CONNECTOR_ALPHA: f64 = 0.8;

const CORE: (f64, f64) = (20.0, 20.0);
const CORE_RADIUS: f64 = 3.0;
const CORE_GLOW_RADIUS: f64 = 5.5;
const CORE_GLOW_ALPHA: f64 = 0.12;

const ORBITS: [(f64, f64); 3] = [(20.0, 2.0), (35.5, 29.0), (4.5, 29.0)];
const ORBIT_RADIUS: f64 = 1.5;
const ORBIT_GLOW_GROWTH: f64 = 1.3;
const ORBIT_GLOW_ALPHA: f64 = 0.16;

/// Render parameters for the logo.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogoConfig {
    /// Pixels per design unit; the canvas side is `40 * scale`.
    pub scale: u32,
    /// Color shared by every shape.
    pub color: Rgb8,
    /// Cap handling for the strokes.
    pub caps: CapMode,
}

impl Default for LogoConfig {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            color: DEFAULT_COLOR,
            caps: CapMode::default(),
        }
    }
}

impl LogoConfig {
    /// Parse a config from a JSON reader. Missing fields take their defaults.
    pub fn from_reader<R: std::io::Read>(r: R) -> SnapmarkResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| SnapmarkError::validation(format!("parse logo config JSON: {e}")))
    }

    /// Parse a config from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> SnapmarkResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            SnapmarkError::validation(format!("open logo config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Reject configurations that cannot produce an image.
    pub fn validate(&self) -> SnapmarkResult<()> {
        if self.scale == 0 {
            return Err(SnapmarkError::validation("scale must be > 0"));
        }
        self.canvas()?.rgba_len()?;
        Ok(())
    }

    /// Output canvas (`40 * scale` square).
    pub fn canvas(&self) -> SnapmarkResult<Canvas> {
        DESIGN_SIZE
            .checked_mul(self.scale)
            .map(Canvas::square)
            .ok_or_else(|| {
                SnapmarkError::validation(format!("scale {} overflows canvas size", self.scale))
            })
    }

    fn px(&self, (x, y): (f64, f64)) -> Point {
        let s = f64::from(self.scale);
        Point::new(x * s, y * s)
    }

    fn span(&self, units: f64) -> f64 {
        units * f64::from(self.scale)
    }
}

/// Build the logo display list for `cfg`.
#[tracing::instrument]
pub fn build_logo_scene(cfg: &LogoConfig) -> SnapmarkResult<Scene> {
    cfg.validate()?;
    let mut scene = Scene::new(cfg.canvas()?);
    let color = cfg.color;

    let ramp = LinearGradient::new(
        cfg.px(HEXAGON_RAMP.0),
        cfg.px(HEXAGON_RAMP.1),
        HEXAGON_RAMP_ALPHA.0,
        HEXAGON_RAMP_ALPHA.1,
    );
    for (i, &from) in HEXAGON.iter().enumerate() {
        let to = HEXAGON[(i + 1) % HEXAGON.len()];
        scene.push(Shape::Line(LineOp {
            capsule: Capsule::new(cfg.px(from), cfg.px(to), cfg.span(HEXAGON_WIDTH)),
            color,
            alpha: 1.0,
            gradient: Some(ramp),
            caps: cfg.caps,
        }));
    }

    for &(from, to) in &CONNECTORS {
        scene.push(Shape::Line(LineOp {
            capsule: Capsule::new(cfg.px(from), cfg.px(to), cfg.span(CONNECTOR_WIDTH)),
            color,
            alpha: CONNECTOR_ALPHA,
            gradient: None,
            caps: cfg.caps,
        }));
    }

    let node = |center: (f64, f64), radius_px: f64, alpha: f64| {
        Shape::Circle(CircleOp {
            disc: Disc::new(cfg.px(center), radius_px),
            color,
            alpha,
        })
    };

    scene.push(node(CORE, cfg.span(CORE_GLOW_RADIUS), CORE_GLOW_ALPHA));
    scene.push(node(CORE, cfg.span(CORE_RADIUS), 1.0));

    let orbit_radius = cfg.span(ORBIT_RADIUS);
    for &center in &ORBITS {
        scene.push(node(center, orbit_radius * ORBIT_GLOW_GROWTH, ORBIT_GLOW_ALPHA));
        scene.push(node(center, orbit_radius, 1.0));
    }

    tracing::debug!(shapes = scene.shapes.len(), "logo scene built");
    Ok(scene)
}

#[cfg(test)]
#[path = "../../tests/unit/scene/logo.rs"]
mod tests;
