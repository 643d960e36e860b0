//! Metaball field evaluation.
//!
//! Each pixel sums `FIELD_SCALE * radius / distance` over every metaball and
//! maps the raw sum through [`grayscale`]. Sums are not normalized, so most
//! of the frame saturates to white and only pixels more than
//! `FIELD_SCALE * radius` away from all balls show a gradient.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::{PixelBuffer, Rgb, Vec2, grayscale};

/// Scale applied to every `radius / distance` contribution.
pub const FIELD_SCALE: f32 = 10.0;

/// Substituted for a zero distance so the sum stays finite.
pub const MIN_DISTANCE: f32 = 1e-6;

/// Point source with a radius of influence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Metaball {
    pub center: Vec2,
    pub radius: f32,
}

impl Metaball {
    pub const fn new(x: f32, y: f32, radius: f32) -> Self {
        Self {
            center: Vec2::new(x, y),
            radius,
        }
    }

    /// Contribution of this ball at `(x, y)`.
    #[inline]
    pub fn influence(&self, x: f32, y: f32) -> f32 {
        let mut d = self.center.distance_to(Vec2::new(x, y));
        if d == 0.0 {
            d = MIN_DISTANCE;
        }
        FIELD_SCALE * self.radius / d
    }
}

/// Field value at integer pixel `(x, y)`.
#[inline]
pub fn field_sum(metaballs: &[Metaball], x: usize, y: usize) -> f32 {
    let (px, py) = (x as f32, y as f32);
    metaballs
        .iter()
        .fold(0.0, |sum, m| sum + m.influence(px, py))
}

/// Final color of pixel `(x, y)`.
#[inline]
pub fn evaluate_pixel(metaballs: &[Metaball], x: usize, y: usize) -> Rgb {
    grayscale(field_sum(metaballs, x, y))
}

/// Evaluate the field for every pixel of `buffer`, rows in parallel.
pub fn render_field_into(buffer: &mut PixelBuffer, metaballs: &[Metaball]) {
    let width = buffer.width;
    if width == 0 {
        return;
    }
    buffer
        .pixels
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, pixel) in row.iter_mut().enumerate() {
                *pixel = evaluate_pixel(metaballs, x, y);
            }
        });
}

/// Single-threaded variant of [`render_field_into`].
pub fn render_field_sequential(buffer: &mut PixelBuffer, metaballs: &[Metaball]) {
    let width = buffer.width;
    for (i, pixel) in buffer.pixels.iter_mut().enumerate() {
        *pixel = evaluate_pixel(metaballs, i % width, i / width);
    }
}
