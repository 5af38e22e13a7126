use super::*;
use crate::foundation::core::{Canvas, Rgb8};

struct RawChunk {
    tag: [u8; 4],
    data: Vec<u8>,
    crc: u32,
}

fn split_chunks(bytes: &[u8]) -> Vec<RawChunk> {
    assert_eq!(&bytes[..8], &PNG_SIGNATURE);
    let mut out = Vec::new();
    let mut at = 8;
    while at < bytes.len() {
        let len = u32::from_be_bytes(bytes[at..at + 4].try_into().unwrap()) as usize;
        let tag: [u8; 4] = bytes[at + 4..at + 8].try_into().unwrap();
        let data = bytes[at + 8..at + 8 + len].to_vec();
        let crc = u32::from_be_bytes(bytes[at + 8 + len..at + 12 + len].try_into().unwrap());
        out.push(RawChunk { tag, data, crc });
        at += 12 + len;
    }
    assert_eq!(at, bytes.len());
    out
}

fn sample() -> Pixmap {
    let mut pm = Pixmap::new(Canvas {
        width: 3,
        height: 2,
    })
    .unwrap();
    pm.blend(0, 0, Rgb8::new(255, 0, 0), 1.0);
    pm.blend(2, 1, Rgb8::new(0, 0, 255), 0.5);
    pm
}

#[test]
fn stream_is_signature_then_ihdr_idat_iend() {
    let bytes = encode_png(&sample()).unwrap();
    let chunks = split_chunks(&bytes);
    let tags: Vec<&[u8; 4]> = chunks.iter().map(|c| &c.tag).collect();
    assert_eq!(tags, [b"IHDR", b"IDAT", b"IEND"]);
    assert!(chunks[2].data.is_empty());
}

#[test]
fn ihdr_declares_rgba8_without_interlace() {
    let bytes = encode_png(&sample()).unwrap();
    let ihdr = &split_chunks(&bytes)[0].data;
    assert_eq!(ihdr.len(), 13);
    assert_eq!(&ihdr[0..4], &3u32.to_be_bytes());
    assert_eq!(&ihdr[4..8], &2u32.to_be_bytes());
    assert_eq!(&ihdr[8..], &[8, 6, 0, 0, 0]);
}

#[test]
fn chunk_crcs_cover_tag_and_data() {
    let bytes = encode_png(&sample()).unwrap();
    for chunk in split_chunks(&bytes) {
        let mut crc = Crc::new();
        crc.update(&chunk.tag);
        crc.update(&chunk.data);
        assert_eq!(crc.sum(), chunk.crc, "{}", String::from_utf8_lossy(&chunk.tag));
    }
    // IEND always carries the same well-known checksum.
    assert_eq!(&bytes[bytes.len() - 4..], &[0xAE, 0x42, 0x60, 0x82]);
}

#[test]
fn idat_inflates_to_filter_prefixed_rows() {
    use std::io::Read as _;

    let pm = sample();
    let bytes = encode_png(&pm).unwrap();
    let idat = &split_chunks(&bytes)[1].data;
    let mut raw = Vec::new();
    flate2::read::ZlibDecoder::new(idat.as_slice())
        .read_to_end(&mut raw)
        .unwrap();

    assert_eq!(raw.len(), 2 * (1 + 3 * 4));
    for (y, line) in raw.chunks_exact(1 + 3 * 4).enumerate() {
        assert_eq!(line[0], 0);
        assert_eq!(&line[1..], pm.row(y as u32));
    }
}

#[test]
fn encoding_is_deterministic() {
    let pm = sample();
    assert_eq!(encode_png(&pm).unwrap(), encode_png(&pm).unwrap());
}

#[test]
fn zero_sized_pixmaps_are_rejected() {
    let pm = Pixmap::new(Canvas {
        width: 0,
        height: 4,
    })
    .unwrap();
    let err = encode_png(&pm).unwrap_err();
    assert!(err.to_string().contains("non-zero"));
}

#[test]
fn io_failures_propagate() {
    struct Refuse;
    impl Write for Refuse {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("disk on fire"))
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    let err = write_png_to(Refuse, &sample()).unwrap_err();
    assert!(matches!(err, SnapmarkError::Io(_)));
    assert!(err.to_string().contains("disk on fire"));
}
