//! Configuration structures and constants for the rlsinfo-core library.
//!
//! `CoreConfig` is built once by the consumer (normally rlsinfo-cli) and passed
//! by reference into every component that needs it. Nothing in the core reads
//! ambient global state.

mod builder;

use crate::error::{CoreError, CoreResult};
use std::path::PathBuf;

pub use builder::CoreConfigBuilder;

// Default constants

/// Number of screenshots kept in the final report.
pub const DEFAULT_SCREENSHOT_COUNT: usize = 6;

/// Extra frames captured on top of the requested count so that dark or blank
/// frames can be discarded.
pub const SPARE_SCREENSHOTS: usize = 2;

/// JPEG quality of the disposable proxies used to rank frames.
/// Must be identical for every candidate of a run.
pub const DEFAULT_PROXY_QUALITY: u8 = 15;

/// Default binary names, resolved through `PATH`.
pub const DEFAULT_FFMPEG_BIN: &str = "ffmpeg";
pub const DEFAULT_MEDIAINFO_BIN: &str = "mediainfo";
pub const DEFAULT_OXIPNG_BIN: &str = "oxipng";

/// Main configuration structure for the rlsinfo-core library.
///
/// # Examples
///
/// ```rust,no_run
/// use rlsinfo_core::config::CoreConfigBuilder;
/// use std::path::PathBuf;
///
/// let config = CoreConfigBuilder::new()
///     .image_dir(PathBuf::from("/tmp/screens"))
///     .screenshot_count(4)
///     .optimise_png(true)
///     .build();
/// config.validate().unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct CoreConfig {
    /// Directory where screenshots are written
    pub image_dir: PathBuf,

    /// Optional directory for temporary files (defaults to `image_dir`)
    pub temp_dir: Option<PathBuf>,

    /// ffmpeg binary used for frame capture
    pub ffmpeg_path: PathBuf,

    /// mediainfo binary used for metadata and reports
    pub mediainfo_path: PathBuf,

    /// oxipng binary used when `optimise_png` is set
    pub oxipng_path: PathBuf,

    /// Number of screenshots kept after pruning
    pub screenshot_count: usize,

    /// JPEG quality (1-100) of the ranking proxies
    pub proxy_quality: u8,

    /// Run lossless PNG optimisation over the kept screenshots
    pub optimise_png: bool,
}

impl CoreConfig {
    /// Creates a configuration with defaults and the given screenshot directory.
    pub fn new(image_dir: PathBuf) -> Self {
        Self {
            image_dir,
            ..Self::default()
        }
    }

    /// Base directory for temporary files.
    #[must_use]
    pub fn temp_base_dir(&self) -> &PathBuf {
        self.temp_dir.as_ref().unwrap_or(&self.image_dir)
    }

    /// Rejects settings that would make a run fail before any capture work.
    pub fn validate(&self) -> CoreResult<()> {
        if self.screenshot_count == 0 {
            return Err(CoreError::Config(
                "screenshot count must be at least 1".to_string(),
            ));
        }
        if !(1..=100).contains(&self.proxy_quality) {
            return Err(CoreError::Config(format!(
                "proxy quality must be between 1 and 100, got {}",
                self.proxy_quality
            )));
        }
        if self.image_dir.as_os_str().is_empty() {
            return Err(CoreError::Config("image directory is not set".to_string()));
        }
        if self.image_dir.is_file() {
            return Err(CoreError::Config(format!(
                "image directory '{}' is a file",
                self.image_dir.display()
            )));
        }
        Ok(())
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            image_dir: PathBuf::from("."),
            temp_dir: None,
            ffmpeg_path: PathBuf::from(DEFAULT_FFMPEG_BIN),
            mediainfo_path: PathBuf::from(DEFAULT_MEDIAINFO_BIN),
            oxipng_path: PathBuf::from(DEFAULT_OXIPNG_BIN),
            screenshot_count: DEFAULT_SCREENSHOT_COUNT,
            proxy_quality: DEFAULT_PROXY_QUALITY,
            optimise_png: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CoreConfig::default();
        assert_eq!(config.screenshot_count, DEFAULT_SCREENSHOT_COUNT);
        assert_eq!(config.proxy_quality, DEFAULT_PROXY_QUALITY);
        assert!(!config.optimise_png);
    }

    #[test]
    fn test_validate_rejects_zero_screenshots() {
        let config = CoreConfig {
            screenshot_count: 0,
            ..CoreConfig::default()
        };
        assert!(matches!(config.validate(), Err(CoreError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_bad_quality() {
        let config = CoreConfig {
            proxy_quality: 0,
            ..CoreConfig::default()
        };
        assert!(config.validate().is_err());

        let config = CoreConfig {
            proxy_quality: 101,
            ..CoreConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_temp_base_defaults_to_image_dir() {
        let mut config = CoreConfig::new(PathBuf::from("/tmp/screens"));
        assert_eq!(config.temp_base_dir(), &PathBuf::from("/tmp/screens"));

        config.temp_dir = Some(PathBuf::from("/tmp/scratch"));
        assert_eq!(config.temp_base_dir(), &PathBuf::from("/tmp/scratch"));
    }
}
