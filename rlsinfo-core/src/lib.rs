//! Core library for building release info posts: mediainfo reports plus
//! representative screenshots uploaded to an image host.
//!
//! This crate provides release discovery (single files and DVD structures),
//! plain-text mediainfo reports, screenshot sampling with aspect-ratio
//! correction and detail-based pruning, and image host uploads.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use rlsinfo_core::{CoreConfig, discover_title, generate_screenshots, mediainfo_report};
//! use rlsinfo_core::external::MediaInfoProvider;
//! use std::path::{Path, PathBuf};
//!
//! let config = CoreConfig::new(PathBuf::from("/tmp/screens"));
//! config.validate().unwrap();
//!
//! let provider = MediaInfoProvider::new(&config.mediainfo_path);
//! let title = discover_title(Path::new("/releases/Movie.2010.1080p.mkv"), &provider).unwrap();
//!
//! let report = mediainfo_report(&config, &title).unwrap();
//! let screenshots = generate_screenshots(&config, &title).unwrap();
//! println!("{report}{} screenshots", screenshots.len());
//! ```

pub mod config;
pub mod discovery;
pub mod error;
pub mod external;
pub mod file_logging;
pub mod gallery;
pub mod processing;
pub mod report;
pub mod temp_files;
pub mod title;
pub mod upload;
pub mod utils;

// Re-exports for public API
pub use config::{CoreConfig, CoreConfigBuilder};
pub use discovery::discover_title;
pub use error::{CoreError, CoreResult};
pub use external::{FfmpegFrameCapturer, FrameCapturer, MediaInfoProvider, MetadataProvider};
pub use gallery::gallery_name;
pub use processing::{JpegProxyCompressor, ScreenshotSession};
pub use report::mediainfo_report;
pub use title::{ReleaseType, Segment, Title};
pub use upload::{HostCredentials, HttpUploader, ImageHost, ImageUploader};
pub use utils::{format_bytes, format_duration};

use std::path::PathBuf;

/// Generates `config.screenshot_count` screenshots for `title` with the
/// default collaborators: mediainfo for metadata, ffmpeg for capture and JPEG
/// proxies for ranking.
///
/// The configuration and the required binaries are checked before any
/// metadata is read or frame captured.
pub fn generate_screenshots(config: &CoreConfig, title: &Title) -> CoreResult<Vec<PathBuf>> {
    config.validate()?;
    external::check_dependency(&config.ffmpeg_path, "-version")?;
    if config.optimise_png {
        external::check_dependency(&config.oxipng_path, "--version")?;
    }
    let metadata = MediaInfoProvider::new(&config.mediainfo_path);
    let capturer = FfmpegFrameCapturer::new(&config.ffmpeg_path);
    let compressor = JpegProxyCompressor::new(config.proxy_quality);

    ScreenshotSession::new(config, &metadata, &capturer, &compressor)
        .generate_screenshots(title, config.screenshot_count)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_in(dir: &std::path::Path) -> CoreConfig {
        CoreConfigBuilder::new()
            .image_dir(dir.join("screens"))
            .ffmpeg_path(PathBuf::from("surely-no-ffmpeg-here"))
            .mediainfo_path(PathBuf::from("surely-no-mediainfo-here"))
            .build()
    }

    #[test]
    fn test_missing_ffmpeg_fails_before_capture() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        let title = Title::single(dir.path().join("movie.mkv"));

        match generate_screenshots(&config, &title) {
            Err(CoreError::DependencyNotFound(name)) => assert!(name.contains("ffmpeg")),
            other => panic!("Unexpected result: {:?}", other),
        }
        assert!(!config.image_dir.exists(), "no capture work may start");
    }

    #[cfg(unix)]
    #[test]
    fn test_missing_oxipng_fails_when_optimising() {
        let dir = tempfile::tempdir().unwrap();
        // `true` starts on every unix host and accepts any argument
        let config = CoreConfig {
            ffmpeg_path: PathBuf::from("true"),
            oxipng_path: PathBuf::from("surely-no-oxipng-here"),
            optimise_png: true,
            ..config_in(dir.path())
        };
        let title = Title::single(dir.path().join("movie.mkv"));

        match generate_screenshots(&config, &title) {
            Err(CoreError::DependencyNotFound(name)) => assert!(name.contains("oxipng")),
            other => panic!("Unexpected result: {:?}", other),
        }
    }
}
