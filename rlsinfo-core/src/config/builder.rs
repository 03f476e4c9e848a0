// ============================================================================
// rlsinfo-core/src/config/builder.rs
// ============================================================================
//
// CONFIGURATION BUILDER: Builder Pattern for CoreConfig
//
// Fluent construction of CoreConfig. Every field starts at its default, so a
// builder with no calls produces the same value as `CoreConfig::default()`.

use std::path::PathBuf;

use super::CoreConfig;

/// Builder for creating CoreConfig instances.
///
/// # Examples
///
/// ```rust
/// use rlsinfo_core::config::CoreConfigBuilder;
/// use std::path::PathBuf;
///
/// let config = CoreConfigBuilder::new()
///     .image_dir(PathBuf::from("/tmp/screens"))
///     .ffmpeg_path(PathBuf::from("/usr/local/bin/ffmpeg"))
///     .screenshot_count(8)
///     .build();
/// assert_eq!(config.screenshot_count, 8);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CoreConfigBuilder {
    config: CoreConfig,
}

impl CoreConfigBuilder {
    /// Creates a new CoreConfigBuilder with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the directory where screenshots are written.
    ///
    /// # Arguments
    ///
    /// * `image_dir` - Screenshot output directory, created on demand
    ///
    /// # Returns
    ///
    /// * Self for method chaining
    pub fn image_dir(mut self, image_dir: PathBuf) -> Self {
        self.config.image_dir = image_dir;
        self
    }

    /// Sets the temporary files directory.
    ///
    /// # Arguments
    ///
    /// * `temp_dir` - The directory for ranking proxies
    ///
    /// # Returns
    ///
    /// * Self for method chaining
    pub fn temp_dir(mut self, temp_dir: PathBuf) -> Self {
        self.config.temp_dir = Some(temp_dir);
        self
    }

    /// Sets the ffmpeg binary.
    pub fn ffmpeg_path(mut self, path: PathBuf) -> Self {
        self.config.ffmpeg_path = path;
        self
    }

    /// Sets the mediainfo binary.
    pub fn mediainfo_path(mut self, path: PathBuf) -> Self {
        self.config.mediainfo_path = path;
        self
    }

    /// Sets the oxipng binary.
    pub fn oxipng_path(mut self, path: PathBuf) -> Self {
        self.config.oxipng_path = path;
        self
    }

    /// Sets the number of screenshots kept after pruning.
    ///
    /// # Arguments
    ///
    /// * `count` - Final screenshot count; two spares are captured on top
    ///
    /// # Returns
    ///
    /// * Self for method chaining
    pub fn screenshot_count(mut self, count: usize) -> Self {
        self.config.screenshot_count = count;
        self
    }

    /// Sets the JPEG quality of the ranking proxies.
    pub fn proxy_quality(mut self, quality: u8) -> Self {
        self.config.proxy_quality = quality;
        self
    }

    /// Enables or disables oxipng optimisation of kept screenshots.
    pub fn optimise_png(mut self, enable: bool) -> Self {
        self.config.optimise_png = enable;
        self
    }

    /// Builds a CoreConfig instance from the builder.
    pub fn build(self) -> CoreConfig {
        self.config
    }
}
