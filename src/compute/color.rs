//! 8-bit RGB color value and named palette.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// RGB color with one byte per channel.
///
/// Layout is `#[repr(C)]` with no padding, so a `&[Rgb]` can be viewed as
/// interleaved `R, G, B` bytes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable, Serialize, Deserialize,
)]
#[repr(C)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::from_hex(0xffffff);

    /// Create a color from its three channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a packed `0xRRGGBB` integer.
    ///
    /// The upper byte is ignored.
    #[inline]
    pub const fn from_hex(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xff) as u8,
            g: ((rgb >> 8) & 0xff) as u8,
            b: (rgb & 0xff) as u8,
        }
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8; 3] {
        bytemuck::cast_ref(self)
    }
}

impl From<u32> for Rgb {
    fn from(rgb: u32) -> Self {
        Self::from_hex(rgb)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

/// View a pixel slice as raw interleaved bytes.
#[inline]
pub fn pixels_as_bytes(pixels: &[Rgb]) -> &[u8] {
    bytemuck::cast_slice(pixels)
}

/// Named colors.
pub mod palette {
    pub mod gruvbox {
        pub mod dark {
            use crate::compute::Rgb;

            pub const BG: Rgb = Rgb::from_hex(0x282828);
            pub const RED_DARK: Rgb = Rgb::from_hex(0xcc241d);
            pub const GREEN_DARK: Rgb = Rgb::from_hex(0x98971a);
        }
    }
}
