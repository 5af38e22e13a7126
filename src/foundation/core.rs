use std::fmt;
use std::str::FromStr;

use crate::foundation::error::{SnapmarkError, SnapmarkResult};

pub use kurbo::{Point, Rect, Vec2};

/// Pixel dimensions of a raster target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Square canvas of `side × side` pixels.
    pub fn square(side: u32) -> Self {
        Self {
            width: side,
            height: side,
        }
    }

    /// Size in bytes of an RGBA8 buffer covering this canvas.
    pub fn rgba_len(self) -> SnapmarkResult<usize> {
        (self.width as usize)
            .checked_mul(self.height as usize)
            .and_then(|v| v.checked_mul(4))
            .ok_or_else(|| {
                SnapmarkError::validation(format!(
                    "canvas {}x{} overflows addressable memory",
                    self.width, self.height
                ))
            })
    }
}

/// Straight 8-bit RGB color.
///
/// Parses from `#rrggbb` (the `#` is optional) or a comma separated `r,g,b` triple,
/// and serializes back to the hex form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    /// Build a color from its three channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels mapped to `[0, 1]`.
    pub fn to_unit(self) -> [f64; 3] {
        [
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        ]
    }
}

impl fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb8 {
    type Err = SnapmarkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if s.contains(',') {
            let parts: Vec<&str> = s.split(',').map(str::trim).collect();
            let [r, g, b] = parts.as_slice() else {
                return Err(SnapmarkError::validation(format!(
                    "rgb triple must have 3 components, got \"{s}\""
                )));
            };
            let channel = |c: &str| {
                c.parse::<u8>().map_err(|_| {
                    SnapmarkError::validation(format!("invalid rgb channel \"{c}\""))
                })
            };
            return Ok(Self::new(channel(*r)?, channel(*g)?, channel(*b)?));
        }

        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(SnapmarkError::validation(format!(
                "hex color must be #RRGGBB, got \"{s}\""
            )));
        }
        let byte = |pair: &str| {
            u8::from_str_radix(pair, 16)
                .map_err(|_| SnapmarkError::validation(format!("invalid hex byte \"{pair}\"")))
        };
        Ok(Self::new(
            byte(&hex[0..2])?,
            byte(&hex[2..4])?,
            byte(&hex[4..6])?,
        ))
    }
}

impl TryFrom<String> for Rgb8 {
    type Error = SnapmarkError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgb8> for String {
    fn from(value: Rgb8) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
