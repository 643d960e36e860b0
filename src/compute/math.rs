//! Scalar and vector helpers: distance, interpolation and grayscale mapping.

use serde::{Deserialize, Serialize};

use super::Rgb;

/// 2D point in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    #[inline]
    pub fn distance_to(self, other: Vec2) -> f32 {
        distance(self.x, self.y, other.x, other.y)
    }
}

/// Euclidean distance between `(ax, ay)` and `(bx, by)`.
///
/// NaN and infinite inputs propagate.
#[inline]
pub fn distance(ax: f32, ay: f32, bx: f32, by: f32) -> f32 {
    let dx = ax - bx;
    let dy = ay - by;
    (dx * dx + dy * dy).sqrt()
}

/// Types that support component-wise linear interpolation.
pub trait Lerp: Copy {
    /// Unclamped `self + (end - self) * t`.
    fn lerp_between(self, end: Self, t: f32) -> Self;
}

impl Lerp for f32 {
    #[inline]
    fn lerp_between(self, end: Self, t: f32) -> Self {
        self + (end - self) * t
    }
}

impl Lerp for Vec2 {
    #[inline]
    fn lerp_between(self, end: Self, t: f32) -> Self {
        Vec2 {
            x: self.x.lerp_between(end.x, t),
            y: self.y.lerp_between(end.y, t),
        }
    }
}

impl Lerp for Rgb {
    /// Channels are interpolated in `f32` and truncated back to `u8`.
    #[inline]
    fn lerp_between(self, end: Self, t: f32) -> Self {
        #[inline]
        fn channel(s: u8, e: u8, t: f32) -> u8 {
            (s as f32 + (e as f32 - s as f32) * t) as u8
        }
        Rgb {
            r: channel(self.r, end.r, t),
            g: channel(self.g, end.g, t),
            b: channel(self.b, end.b, t),
        }
    }
}

/// Interpolate from `start` to `end` by `t`.
///
/// Returns `end` exactly for `t >= 1` and `start` exactly for `t <= 0`;
/// only interior values go through the formula.
#[inline]
pub fn lerp<T: Lerp>(t: f32, start: T, end: T) -> T {
    if t >= 1.0 {
        return end;
    }
    if t <= 0.0 {
        return start;
    }
    start.lerp_between(end, t)
}

/// Map a scalar onto the black-white axis.
///
/// Values are not normalized: anything `>= 1` is white.
#[inline]
pub fn grayscale(v: f32) -> Rgb {
    lerp(v, Rgb::BLACK, Rgb::WHITE)
}
