//! Metaballs - Animated implicit-surface field rendered to PPM frames.
//!
//! Four metaballs start just outside the corners of the frame and cross
//! diagonally over the course of the animation. Every pixel sums the
//! `radius / distance` influence of each ball and maps the raw sum onto a
//! black-white ramp.
//!
//! # Architecture
//!
//! - `schema`: Animation configuration and validation
//! - `compute`: Colors, interpolation and field evaluation
//! - `animation`: Frame driver and PPM output
//!
//! # Example
//!
//! ```rust,no_run
//! use metaballs::{
//!     animation::AnimationDriver,
//!     schema::AnimationConfig,
//! };
//!
//! let config = AnimationConfig {
//!     frame_count: 10,
//!     ..AnimationConfig::default()
//! };
//!
//! let mut driver = AnimationDriver::new(config).expect("valid config");
//! let summary = driver.run().expect("frames written");
//! println!("{}", summary);
//! ```

pub mod animation;
pub mod compute;
pub mod schema;

// Re-export commonly used types
pub use animation::{AnimationDriver, RenderError, RenderSummary, render_animation};
pub use compute::{Metaball, PixelBuffer, Rgb, Vec2};
pub use schema::{AnimationConfig, FailurePolicy};
