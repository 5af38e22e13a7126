//! snapmark renders the SnapAgent logo to PNG with its own tiny rasterizer and encoder.
//!
//! # Pipeline overview
//!
//! 1. **Compose**: `LogoConfig -> Scene` (ordered display list of capsules and discs in pixel space)
//! 2. **Rasterize**: `Scene -> Pixmap` (hard-edged coverage at pixel centers, straight-alpha "over")
//! 3. **Encode**: `Pixmap -> PNG bytes` (IHDR, one zlib IDAT of unfiltered rows, IEND)
//!
//! Rendering is deterministic: identical configs produce byte-identical PNG output.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod encode;
mod foundation;
mod pipeline;
mod raster;
mod scene;

pub use encode::png::{PNG_SIGNATURE, encode_png, write_png, write_png_to};
pub use foundation::core::{Canvas, Point, Rect, Rgb8, Vec2};
pub use foundation::error::{SnapmarkError, SnapmarkResult};
pub use foundation::math::{clamp01, dist2_point_to_segment};
pub use pipeline::{ensure_parent_dir, export_logo_png, render_logo};
pub use raster::coverage::{CapMode, Capsule, Disc, Paint, PixelBounds, fill_capsule, fill_disc};
pub use raster::modulate::{AlphaModulator, LinearGradient};
pub use raster::pixmap::{Pixmap, StraightRgba8, over_straight};
pub use scene::logo::{DEFAULT_COLOR, DEFAULT_SCALE, DESIGN_SIZE, LogoConfig, build_logo_scene};
pub use scene::model::{CircleOp, LineOp, Scene, Shape};
