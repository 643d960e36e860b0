//! Binary PPM (P6) encoding and decoding.

use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use crate::compute::{Rgb, pixels_as_bytes};

/// Magic bytes identifying a binary PPM file.
pub const PPM_MAGIC: &[u8; 2] = b"P6";

/// Maximum channel value written to the header.
pub const PPM_MAX_VALUE: u32 = 255;

/// Errors from reading or writing PPM files.
#[derive(Debug, thiserror::Error)]
pub enum PpmError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Need {needed} pixels past the offset but only {available} are available")]
    InsufficientPixels { needed: usize, available: usize },
    #[error("Region {width}x{height} at ({x}, {y}) overflows the address space")]
    RegionOverflow {
        width: usize,
        height: usize,
        x: usize,
        y: usize,
    },
    #[error("Malformed PPM data: {0}")]
    Malformed(String),
}

impl PpmError {
    fn io(path: &Path, source: io::Error) -> Self {
        PpmError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Header text for a `width` x `height` image.
pub fn ppm_header(width: usize, height: usize) -> String {
    format!("P6\n{} {} {}\n", width, height, PPM_MAX_VALUE)
}

/// Write header and `pixels` to any writer.
///
/// `pixels` must hold exactly `width * height` entries.
pub fn encode_ppm<W: Write>(
    w: &mut W,
    pixels: &[Rgb],
    width: usize,
    height: usize,
) -> io::Result<()> {
    if width.checked_mul(height) != Some(pixels.len()) {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!(
                "Pixel count mismatch: {} pixels vs {}x{}",
                pixels.len(),
                width,
                height
            ),
        ));
    }
    w.write_all(ppm_header(width, height).as_bytes())?;
    w.write_all(pixels_as_bytes(pixels))?;
    Ok(())
}

/// Write a `width` x `height` image to `path`.
///
/// Output starts `width * y + x` elements into `pixels` and covers exactly
/// `width * height` pixels. The parent directory must exist. A partially
/// written file is removed on failure.
pub fn write_ppm<P: AsRef<Path>>(
    path: P,
    pixels: &[Rgb],
    width: usize,
    height: usize,
    (x, y): (usize, usize),
) -> Result<(), PpmError> {
    let path = path.as_ref();
    let overflow = || PpmError::RegionOverflow {
        width,
        height,
        x,
        y,
    };
    let start = width
        .checked_mul(y)
        .and_then(|row| row.checked_add(x))
        .ok_or_else(overflow)?;
    let needed = width.checked_mul(height).ok_or_else(overflow)?;
    let end = start.checked_add(needed).ok_or_else(overflow)?;
    let available = pixels.len().saturating_sub(start);
    if end > pixels.len() {
        return Err(PpmError::InsufficientPixels { needed, available });
    }
    let region = &pixels[start..end];

    let file = File::create(path).map_err(|e| PpmError::io(path, e))?;
    let mut writer = BufWriter::new(file);

    let result = encode_ppm(&mut writer, region, width, height).and_then(|()| writer.flush());
    if let Err(e) = result {
        drop(writer);
        if let Err(cleanup) = fs::remove_file(path) {
            log::warn!(
                "Failed to remove partial file {}: {}",
                path.display(),
                cleanup
            );
        }
        return Err(PpmError::io(path, e));
    }
    Ok(())
}

/// Read a P6 file with a max value of 255.
///
/// Returns `(width, height, pixels)`. Header comments are not supported.
pub fn read_ppm<P: AsRef<Path>>(path: P) -> Result<(usize, usize, Vec<Rgb>), PpmError> {
    let path = path.as_ref();
    let mut bytes = Vec::new();
    File::open(path)
        .and_then(|mut f| f.read_to_end(&mut bytes))
        .map_err(|e| PpmError::io(path, e))?;
    decode_ppm(&bytes)
}

/// Parse P6 bytes into `(width, height, pixels)`.
pub fn decode_ppm(bytes: &[u8]) -> Result<(usize, usize, Vec<Rgb>), PpmError> {
    let mut pos = 0;
    let mut fields = [0usize; 3];

    let magic = next_token(bytes, &mut pos)?;
    if magic != PPM_MAGIC {
        return Err(PpmError::Malformed("missing P6 magic".into()));
    }
    for field in &mut fields {
        let token = next_token(bytes, &mut pos)?;
        *field = std::str::from_utf8(token)
            .ok()
            .and_then(|s| s.parse().ok())
            .ok_or_else(|| {
                PpmError::Malformed(format!("bad header field {:?}", String::from_utf8_lossy(token)))
            })?;
    }
    let [width, height, max_value] = fields;
    if max_value != PPM_MAX_VALUE as usize {
        return Err(PpmError::Malformed(format!(
            "unsupported max value {}",
            max_value
        )));
    }

    // Exactly one whitespace byte separates the header from the raster
    if pos >= bytes.len() || !bytes[pos].is_ascii_whitespace() {
        return Err(PpmError::Malformed("truncated header".into()));
    }
    pos += 1;

    let body = &bytes[pos..];
    let expected = width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(3))
        .ok_or_else(|| PpmError::Malformed(format!("image size {}x{} overflows", width, height)))?;
    if body.len() != expected {
        return Err(PpmError::Malformed(format!(
            "raster size mismatch: {} bytes vs {} expected",
            body.len(),
            expected
        )));
    }

    let pixels = body
        .chunks_exact(3)
        .map(|c| Rgb::new(c[0], c[1], c[2]))
        .collect();
    Ok((width, height, pixels))
}

fn next_token<'a>(bytes: &'a [u8], pos: &mut usize) -> Result<&'a [u8], PpmError> {
    while *pos < bytes.len() && bytes[*pos].is_ascii_whitespace() {
        *pos += 1;
    }
    let start = *pos;
    while *pos < bytes.len() && !bytes[*pos].is_ascii_whitespace() {
        *pos += 1;
    }
    if start == *pos {
        return Err(PpmError::Malformed("unexpected end of header".into()));
    }
    Ok(&bytes[start..*pos])
}
