//! Configuration types for metaball animations.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::compute::{Metaball, Rgb, palette};

/// Number of metaballs the crossing motion is defined for.
pub const METABALL_COUNT: usize = 4;

/// How the driver reacts when a frame cannot be written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FailurePolicy {
    /// Stop at the first failed write and return the error.
    #[default]
    FailFast,
    /// Log a warning and continue with the next frame.
    SkipAndLog,
}

/// Top-level animation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// Frame width in pixels.
    pub width: usize,
    /// Frame height in pixels.
    pub height: usize,
    /// Number of frames to render.
    pub frame_count: u32,
    /// Directory receiving the frame files. Created if missing.
    pub output_dir: PathBuf,
    /// File name stem, frames are `<prefix>-<index>.ppm`.
    pub file_prefix: String,
    /// Minimum digits of the frame index in file names.
    pub frame_padding: usize,
    /// Initial fill of the pixel buffer.
    pub background: Rgb,
    /// Starting positions and radii. Ball `i` travels to the start of ball `3 - i`.
    pub metaballs: [Metaball; METABALL_COUNT],
    /// Reaction to failed frame writes.
    #[serde(default)]
    pub on_write_error: FailurePolicy,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self::with_size(400, 400)
    }
}

impl AnimationConfig {
    /// Default configuration for a `width` x `height` frame, with the
    /// metaballs placed 40 pixels outside each corner.
    pub fn with_size(width: usize, height: usize) -> Self {
        let (w, h) = (width as f32, height as f32);
        Self {
            width,
            height,
            frame_count: 160,
            output_dir: PathBuf::from("output"),
            file_prefix: "metaballs".to_string(),
            frame_padding: 3,
            background: palette::gruvbox::dark::GREEN_DARK,
            metaballs: [
                Metaball::new(-40.0, -40.0, 2.0),
                Metaball::new(-40.0, h + 40.0, 2.0),
                Metaball::new(w + 40.0, -40.0, 2.0),
                Metaball::new(w + 40.0, h + 40.0, 2.0),
            ],
            on_write_error: FailurePolicy::default(),
        }
    }

    /// Pixels per frame (width * height).
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidDimensions);
        }
        if self.frame_count == 0 {
            return Err(ConfigError::InvalidFrameCount);
        }
        if self.file_prefix.is_empty() {
            return Err(ConfigError::EmptyFilePrefix);
        }
        for (index, ball) in self.metaballs.iter().enumerate() {
            if !ball.radius.is_finite() || ball.radius <= 0.0 {
                return Err(ConfigError::InvalidRadius { index });
            }
            if !ball.center.x.is_finite() || !ball.center.y.is_finite() {
                return Err(ConfigError::InvalidPosition { index });
            }
        }
        Ok(())
    }
}

/// Configuration validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Frame dimensions (width, height) must be non-zero")]
    InvalidDimensions,
    #[error("Frame count must be non-zero")]
    InvalidFrameCount,
    #[error("File prefix must not be empty")]
    EmptyFilePrefix,
    #[error("Metaball {index} must have a positive finite radius")]
    InvalidRadius { index: usize },
    #[error("Metaball {index} must have a finite position")]
    InvalidPosition { index: usize },
}
