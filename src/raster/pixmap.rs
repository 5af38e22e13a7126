use crate::foundation::core::{Canvas, Rgb8};
use crate::foundation::error::{SnapmarkError, SnapmarkResult};
use crate::foundation::math::{clamp01, unit_to_u8};

/// Straight (non-premultiplied) RGBA8 pixel.
pub type StraightRgba8 = [u8; 4];

/// Composite `color` at coverage `alpha` over `dst` with the straight-alpha "over" rule.
///
/// Returns `None` when the blend would not change anything observable: non-positive (or NaN)
/// alpha, or a zero resulting alpha.
pub fn over_straight(dst: StraightRgba8, color: Rgb8, alpha: f64) -> Option<StraightRgba8> {
    if alpha.is_nan() || alpha <= 0.0 {
        return None;
    }

    let src_a = clamp01(alpha);
    let dst_a = f64::from(dst[3]) / 255.0;
    let keep = dst_a * (1.0 - src_a);
    let out_a = src_a + keep;
    if out_a <= 0.0 {
        return None;
    }

    let src = color.to_unit();
    let mut out = [0u8; 4];
    for i in 0..3 {
        let d = f64::from(dst[i]) / 255.0;
        out[i] = unit_to_u8((src[i] * src_a + d * keep) / out_a);
    }
    out[3] = unit_to_u8(out_a);
    Some(out)
}

/// Row-major RGBA8 raster with straight alpha, transparent on creation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pixmap {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Pixmap {
    /// Allocate a fully transparent pixmap.
    ///
    /// Fails with a validation error when the buffer size overflows or the allocation
    /// cannot be satisfied.
    pub fn new(canvas: Canvas) -> SnapmarkResult<Self> {
        let len = canvas.rgba_len()?;
        let mut data = Vec::new();
        data.try_reserve_exact(len).map_err(|_| {
            SnapmarkError::validation(format!(
                "canvas {}x{} ({len} bytes) cannot be allocated",
                canvas.width, canvas.height
            ))
        })?;
        data.resize(len, 0);
        Ok(Self {
            width: canvas.width,
            height: canvas.height,
            data,
        })
    }

    /// Wrap existing RGBA8 bytes; the length must be exactly `width * height * 4`.
    pub fn from_rgba8(width: u32, height: u32, data: Vec<u8>) -> SnapmarkResult<Self> {
        let expected = Canvas { width, height }.rgba_len()?;
        if data.len() != expected {
            return Err(SnapmarkError::validation(format!(
                "rgba8 buffer for {width}x{height} must be {expected} bytes, got {}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Dimensions as a [`Canvas`].
    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: self.width,
            height: self.height,
        }
    }

    /// Raw row-major RGBA8 bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// One row of `width * 4` bytes. Panics if `y` is out of range.
    pub fn row(&self, y: u32) -> &[u8] {
        let stride = self.width as usize * 4;
        let start = y as usize * stride;
        &self.data[start..start + stride]
    }

    /// Read a pixel, or `None` outside the raster.
    pub fn pixel(&self, x: i64, y: i64) -> Option<StraightRgba8> {
        let idx = self.index(x, y)?;
        let p = &self.data[idx..idx + 4];
        Some([p[0], p[1], p[2], p[3]])
    }

    /// Composite `color` at coverage `alpha` onto pixel `(x, y)`.
    ///
    /// Out-of-bounds coordinates and non-positive alpha leave the raster untouched.
    /// Returns whether the pixel was written.
    pub fn blend(&mut self, x: i64, y: i64, color: Rgb8, alpha: f64) -> bool {
        let Some(idx) = self.index(x, y) else {
            return false;
        };
        let px = &mut self.data[idx..idx + 4];
        match over_straight([px[0], px[1], px[2], px[3]], color, alpha) {
            Some(out) => {
                px.copy_from_slice(&out);
                true
            }
            None => false,
        }
    }

    fn index(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return None;
        }
        Some((y as usize * self.width as usize + x as usize) * 4)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/pixmap.rs"]
mod tests;
