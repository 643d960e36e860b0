//! Row-major pixel storage.

use super::Rgb;

/// Fixed-size frame of pixels, row 0 at the top.
///
/// Indexing: `pixels[y * width + x]`.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<Rgb>,
}

impl PixelBuffer {
    /// Create a buffer with every pixel set to `fill`.
    pub fn filled(width: usize, height: usize, fill: Rgb) -> Self {
        Self {
            width,
            height,
            pixels: vec![fill; width * height],
        }
    }

    /// Create a black buffer.
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, Rgb::BLACK)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Rgb {
        self.pixels[y * self.width + x]
    }

    pub fn as_slice(&self) -> &[Rgb] {
        &self.pixels
    }
}
