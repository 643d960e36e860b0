//! Animation driver: moves the metaballs, renders and writes every frame.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use super::naming::frame_file_name;
use super::ppm::{PpmError, write_ppm};
use crate::compute::{Metaball, PixelBuffer, lerp, render_field_into};
use crate::schema::{AnimationConfig, ConfigError, FailurePolicy, METABALL_COUNT};

/// Errors that abort an animation run.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("Cannot create output directory {}: {source}", path.display())]
    OutputDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to write frame {frame}")]
    Write {
        frame: u32,
        #[source]
        source: PpmError,
    },
}

/// Interpolation parameter for `frame`, in `[0, 1)`.
#[inline]
pub fn interpolation_param(frame: u32, frame_count: u32) -> f32 {
    frame as f32 / frame_count as f32
}

/// Metaball positions at parameter `p`.
///
/// Ball `i` moves from its own start toward the start of ball `3 - i`, so the
/// pairs 0/3 and 1/2 swap corners diagonally.
pub fn frame_metaballs(
    template: &[Metaball; METABALL_COUNT],
    p: f32,
) -> [Metaball; METABALL_COUNT] {
    let mut metaballs = *template;
    for (i, ball) in metaballs.iter_mut().enumerate() {
        let opposite = template[METABALL_COUNT - 1 - i].center;
        ball.center = lerp(p, template[i].center, opposite);
    }
    metaballs
}

/// Summary of a finished run.
#[derive(Debug, Clone)]
pub struct RenderSummary {
    /// Frames written successfully.
    pub frames_written: u32,
    /// Frames whose write failed and was skipped.
    pub frames_failed: u32,
    /// Wall time of the run.
    pub elapsed: Duration,
}

impl std::fmt::Display for RenderSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let secs = self.elapsed.as_secs_f32();
        write!(
            f,
            "{} frames written, {} failed in {:.2}s ({:.1} frames/s)",
            self.frames_written,
            self.frames_failed,
            secs,
            if secs > 0.0 {
                self.frames_written as f32 / secs
            } else {
                0.0
            }
        )
    }
}

/// Renders the animation frame by frame into a single reused buffer.
///
/// Usage:
/// ```ignore
/// let mut driver = AnimationDriver::new(AnimationConfig::default())?;
/// let summary = driver.run()?;
/// println!("{}", summary);
/// ```
pub struct AnimationDriver {
    config: AnimationConfig,
    buffer: PixelBuffer,
}

impl AnimationDriver {
    /// Validate `config` and allocate the pixel buffer, filled with the
    /// background color.
    pub fn new(config: AnimationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let buffer = PixelBuffer::filled(config.width, config.height, config.background);
        Ok(Self { config, buffer })
    }

    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    /// Current contents of the pixel buffer.
    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    /// Path of the file written for `frame`.
    pub fn frame_path(&self, frame: u32) -> PathBuf {
        self.config.output_dir.join(frame_file_name(
            &self.config.file_prefix,
            frame,
            self.config.frame_padding,
        ))
    }

    /// Render `frame` into the buffer.
    pub fn render_frame(&mut self, frame: u32) -> &PixelBuffer {
        let p = interpolation_param(frame, self.config.frame_count);
        let metaballs = frame_metaballs(&self.config.metaballs, p);
        render_field_into(&mut self.buffer, &metaballs);
        &self.buffer
    }

    /// Render `frame` and write it to [`Self::frame_path`].
    pub fn write_frame(&mut self, frame: u32) -> Result<PathBuf, PpmError> {
        let path = self.frame_path(frame);
        self.render_frame(frame);
        write_ppm(
            &path,
            self.buffer.as_slice(),
            self.buffer.width,
            self.buffer.height,
            (0, 0),
        )?;
        Ok(path)
    }

    /// Render and write every frame.
    ///
    /// Creates the output directory first. Write failures follow
    /// `config.on_write_error`.
    pub fn run(&mut self) -> Result<RenderSummary, RenderError> {
        let start = Instant::now();
        create_output_dir(&self.config.output_dir)?;

        log::info!(
            "Rendering {} frames of {}x{} into {}",
            self.config.frame_count,
            self.config.width,
            self.config.height,
            self.config.output_dir.display()
        );

        let mut frames_written = 0;
        let mut frames_failed = 0;

        for frame in 0..self.config.frame_count {
            match self.write_frame(frame) {
                Ok(path) => {
                    log::debug!("Wrote frame {} to {}", frame, path.display());
                    frames_written += 1;
                }
                Err(source) => match self.config.on_write_error {
                    FailurePolicy::FailFast => {
                        return Err(RenderError::Write { frame, source });
                    }
                    FailurePolicy::SkipAndLog => {
                        log::warn!("Skipping frame {}: {}", frame, source);
                        frames_failed += 1;
                    }
                },
            }
        }

        let summary = RenderSummary {
            frames_written,
            frames_failed,
            elapsed: start.elapsed(),
        };
        log::info!("{}", summary);
        Ok(summary)
    }
}

fn create_output_dir(path: &Path) -> Result<(), RenderError> {
    fs::create_dir_all(path).map_err(|source| RenderError::OutputDir {
        path: path.to_path_buf(),
        source,
    })
}

/// Render the animation described by `config`.
pub fn render_animation(config: AnimationConfig) -> Result<RenderSummary, RenderError> {
    AnimationDriver::new(config)?.run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::read_ppm;
    use crate::compute::{Rgb, Vec2, palette};
    use tempfile::tempdir;

    fn test_config(output_dir: &Path) -> AnimationConfig {
        AnimationConfig {
            frame_count: 4,
            output_dir: output_dir.to_path_buf(),
            ..AnimationConfig::with_size(24, 16)
        }
    }

    #[test]
    fn test_interpolation_param() {
        assert_eq!(interpolation_param(0, 160), 0.0);
        assert_eq!(interpolation_param(80, 160), 0.5);
        assert!(interpolation_param(159, 160) < 1.0);
    }

    #[test]
    fn test_frame_metaballs_start() {
        let config = AnimationConfig::default();
        assert_eq!(frame_metaballs(&config.metaballs, 0.0), config.metaballs);
    }

    #[test]
    fn test_frame_metaballs_cross_diagonally() {
        let config = AnimationConfig::default();
        let template = config.metaballs;

        // Halfway every ball sits at the frame center
        for ball in frame_metaballs(&template, 0.5) {
            assert_eq!(ball.center, Vec2::new(200.0, 200.0));
            assert_eq!(ball.radius, 2.0);
        }

        let end = frame_metaballs(&template, 1.0);
        assert_eq!(end[0].center, template[3].center);
        assert_eq!(end[1].center, template[2].center);
        assert_eq!(end[2].center, template[1].center);
        assert_eq!(end[3].center, template[0].center);
    }

    #[test]
    fn test_new_fills_background() {
        let dir = tempdir().unwrap();
        let driver = AnimationDriver::new(test_config(dir.path())).unwrap();

        assert_eq!(driver.buffer().len(), 24 * 16);
        assert!(
            driver
                .buffer()
                .pixels
                .iter()
                .all(|&p| p == palette::gruvbox::dark::GREEN_DARK)
        );
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let mut config = AnimationConfig::default();
        config.frame_count = 0;
        assert!(AnimationDriver::new(config).is_err());
    }

    #[test]
    fn test_render_frame_overwrites_buffer() {
        let dir = tempdir().unwrap();
        let mut driver = AnimationDriver::new(test_config(dir.path())).unwrap();

        let buffer = driver.render_frame(0);
        // Small frame: the four corner balls together saturate the corner
        assert_eq!(buffer.get(0, 0), Rgb::WHITE);
        assert!(
            buffer
                .pixels
                .iter()
                .all(|&p| p != palette::gruvbox::dark::GREEN_DARK)
        );
    }

    #[test]
    fn test_run_writes_all_frames() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("output");
        let config = test_config(&output);

        let summary = render_animation(config.clone()).unwrap();
        assert_eq!(summary.frames_written, 4);
        assert_eq!(summary.frames_failed, 0);

        for frame in 0..4 {
            let path = output.join(format!("metaballs-00{}.ppm", frame));
            let (w, h, pixels) = read_ppm(&path).unwrap();
            assert_eq!((w, h), (24, 16));

            let p = interpolation_param(frame, 4);
            let mut expected = PixelBuffer::new(24, 16);
            render_field_into(&mut expected, &frame_metaballs(&config.metaballs, p));
            assert_eq!(pixels, expected.pixels);
        }
        assert!(!output.join("metaballs-004.ppm").exists());
    }

    #[test]
    fn test_run_output_dir_is_a_file() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, b"").unwrap();

        let err = render_animation(test_config(&blocker)).unwrap_err();
        assert!(matches!(err, RenderError::OutputDir { .. }));
    }

    #[test]
    fn test_run_fail_fast_on_write_error() {
        let dir = tempdir().unwrap();
        let config = test_config(dir.path());

        // A directory occupying the first frame's path makes its write fail
        let mut driver = AnimationDriver::new(config).unwrap();
        fs::create_dir(driver.frame_path(0)).unwrap();

        let err = driver.run().unwrap_err();
        assert!(matches!(err, RenderError::Write { frame: 0, .. }));
        assert!(!driver.frame_path(1).exists());
    }

    #[test]
    fn test_run_skip_and_log_continues() {
        let dir = tempdir().unwrap();
        let config = AnimationConfig {
            on_write_error: FailurePolicy::SkipAndLog,
            ..test_config(dir.path())
        };

        let mut driver = AnimationDriver::new(config).unwrap();
        fs::create_dir(driver.frame_path(1)).unwrap();

        let summary = driver.run().unwrap();
        assert_eq!(summary.frames_written, 3);
        assert_eq!(summary.frames_failed, 1);
        assert!(driver.frame_path(3).is_file());
    }
}
