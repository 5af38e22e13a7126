use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use flate2::{Compression, Crc, write::ZlibEncoder};

use crate::foundation::error::{SnapmarkError, SnapmarkResult};
use crate::raster::pixmap::Pixmap;

/// Fixed 8-byte PNG file signature.
pub const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

const BIT_DEPTH: u8 = 8;
const COLOR_TYPE_RGBA: u8 = 6;
const FILTER_NONE: u8 = 0;
// PNG caps dimensions and chunk lengths at 2^31 - 1.
const PNG_U31_MAX: u32 = i32::MAX as u32;

/// Stream `pixmap` as an RGBA8 PNG into `out`.
///
/// Layout: signature, IHDR, a single IDAT holding the zlib stream (best compression) of
/// unfiltered scanlines, then IEND.
#[tracing::instrument(skip_all, fields(width = pixmap.width(), height = pixmap.height()))]
pub fn write_png_to<W: Write>(mut out: W, pixmap: &Pixmap) -> SnapmarkResult<()> {
    let (width, height) = (pixmap.width(), pixmap.height());
    if width == 0 || height == 0 {
        return Err(SnapmarkError::validation(format!(
            "png dimensions must be non-zero, got {width}x{height}"
        )));
    }
    if width > PNG_U31_MAX || height > PNG_U31_MAX {
        return Err(SnapmarkError::validation(format!(
            "png dimensions must not exceed {PNG_U31_MAX}, got {width}x{height}"
        )));
    }

    let idat = compress_scanlines(pixmap)?;
    tracing::debug!(raw = pixmap.data().len(), compressed = idat.len(), "idat ready");

    out.write_all(&PNG_SIGNATURE)?;
    write_chunk(&mut out, b"IHDR", &ihdr(width, height))?;
    write_chunk(&mut out, b"IDAT", &idat)?;
    write_chunk(&mut out, b"IEND", &[])?;
    out.flush()?;
    Ok(())
}

/// Encode `pixmap` into an in-memory PNG byte stream.
pub fn encode_png(pixmap: &Pixmap) -> SnapmarkResult<Vec<u8>> {
    let mut bytes = Vec::new();
    write_png_to(&mut bytes, pixmap)?;
    Ok(bytes)
}

/// Encode `pixmap` and write it to `path`, replacing any existing file.
pub fn write_png(path: &Path, pixmap: &Pixmap) -> SnapmarkResult<()> {
    let file = File::create(path)?;
    write_png_to(BufWriter::new(file), pixmap)
}

fn ihdr(width: u32, height: u32) -> [u8; 13] {
    let mut data = [0u8; 13];
    data[0..4].copy_from_slice(&width.to_be_bytes());
    data[4..8].copy_from_slice(&height.to_be_bytes());
    data[8] = BIT_DEPTH;
    data[9] = COLOR_TYPE_RGBA;
    // compression, filter and interlace methods stay 0
    data
}

fn compress_scanlines(pixmap: &Pixmap) -> SnapmarkResult<Vec<u8>> {
    let mut z = ZlibEncoder::new(Vec::new(), Compression::best());
    for y in 0..pixmap.height() {
        z.write_all(&[FILTER_NONE])?;
        z.write_all(pixmap.row(y))?;
    }
    Ok(z.finish()?)
}

fn write_chunk<W: Write>(out: &mut W, tag: &[u8; 4], data: &[u8]) -> SnapmarkResult<()> {
    let len = u32::try_from(data.len())
        .ok()
        .filter(|&n| n <= PNG_U31_MAX)
        .ok_or_else(|| {
            SnapmarkError::encode(format!(
                "{} chunk of {} bytes exceeds the png chunk length limit",
                String::from_utf8_lossy(tag),
                data.len()
            ))
        })?;

    let mut crc = Crc::new();
    crc.update(tag);
    crc.update(data);

    out.write_all(&len.to_be_bytes())?;
    out.write_all(tag)?;
    out.write_all(data)?;
    out.write_all(&crc.sum().to_be_bytes())?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
