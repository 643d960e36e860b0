//! Animation output for metaball renders.
//!
//! Frames are written as binary PPM files, one per frame:
//!
//! ```text
//! <output_dir>/<prefix>-<index>.ppm
//!
//! Header (ASCII):
//!   "P6\n<width> <height> 255\n"
//!
//! Raster (width * height * 3 bytes):
//!   R, G, B per pixel, row-major, top row first
//! ```

mod driver;
mod naming;
mod ppm;

pub use driver::{
    AnimationDriver, RenderError, RenderSummary, frame_metaballs, interpolation_param,
    render_animation,
};
pub use naming::{decimal_digits, frame_file_name, pad_number};
pub use ppm::{
    PPM_MAGIC, PPM_MAX_VALUE, PpmError, decode_ppm, encode_ppm, ppm_header, read_ppm, write_ppm,
};
