//! Compute module - Color, math and field evaluation.

mod buffer;
mod color;
mod field;
mod math;

pub use buffer::*;
pub use color::*;
pub use field::*;
pub use math::*;
