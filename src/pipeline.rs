use std::path::{Path, PathBuf};

use crate::encode::png::write_png;
use crate::foundation::error::SnapmarkResult;
use crate::raster::pixmap::Pixmap;
use crate::scene::logo::{LogoConfig, build_logo_scene};

/// Rasterize the logo described by `cfg` onto a transparent canvas.
pub fn render_logo(cfg: &LogoConfig) -> SnapmarkResult<Pixmap> {
    build_logo_scene(cfg)?.render()
}

/// Create the parent directory of `path` if it does not exist yet.
pub fn ensure_parent_dir(path: &Path) -> SnapmarkResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        use anyhow::Context as _;
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

/// Render the logo and write it as PNG to `path`.
///
/// Returns the absolute path of the written file.
#[tracing::instrument(skip(cfg), fields(scale = cfg.scale))]
pub fn export_logo_png(cfg: &LogoConfig, path: &Path) -> SnapmarkResult<PathBuf> {
    let scene = build_logo_scene(cfg)?;
    ensure_parent_dir(path)?;
    let pixmap = scene.render()?;
    write_png(path, &pixmap)?;

    let resolved = std::path::absolute(path)?;
    tracing::info!(path = %resolved.display(), "png written");
    Ok(resolved)
}
