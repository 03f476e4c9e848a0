// ============================================================================
// rlsinfo-core/src/external/mod.rs
// ============================================================================
//
// EXTERNAL TOOLS: Interactions with External CLI Tools
//
// This module encapsulates interactions with mediainfo and ffmpeg. The core
// algorithms only see the MetadataProvider and FrameCapturer traits; the
// concrete implementations here shell out to the real binaries.
//
// KEY COMPONENTS:
// - MetadataProvider / FrameCapturer: collaborator traits
// - MediaInfoProvider: mediainfo JSON based metadata
// - FfmpegFrameCapturer: single-frame capture through ffmpeg-sidecar
// - Dependency checking

use crate::error::{CoreError, CoreResult};
use crate::processing::geometry::{DisplayGeometry, VideoGeometry};

use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

/// Contains traits and implementations for spawning ffmpeg capture commands
pub mod ffmpeg_executor;

/// Contains mediainfo JSON parsing and the metadata provider
pub mod mediainfo_executor;

pub use ffmpeg_executor::{FfmpegFrameCapturer, FfmpegProcess, FfmpegSpawner, SidecarSpawner};
pub use mediainfo_executor::{MediaInfoProvider, get_mediainfo_text};

// ============================================================================
// COLLABORATOR TRAITS
// ============================================================================

/// Source of duration and video geometry for a media file.
///
/// Implementations must fail with `CoreError::MissingTrack` when the file has
/// no usable track and `CoreError::MissingField` when a field is absent or
/// unparseable.
pub trait MetadataProvider: Sync {
    /// Raw geometry of the first video track.
    fn geometry(&self, path: &Path) -> CoreResult<VideoGeometry>;

    /// Playback duration in seconds.
    fn duration(&self, path: &Path) -> CoreResult<f64>;
}

/// Captures a single frame of a video into an image file.
///
/// Implementations must scale the frame to `geometry` so every screenshot of a
/// title shares the same dimensions. Calls for different output paths may run
/// concurrently.
pub trait FrameCapturer: Sync {
    fn capture(
        &self,
        input: &Path,
        timestamp: f64,
        geometry: DisplayGeometry,
        output: &Path,
    ) -> CoreResult<()>;
}

// ============================================================================
// DEPENDENCY CHECKING
// ============================================================================

/// Checks that an external command can be started.
///
/// The command is run once with `version_arg` and its output discarded; only a
/// failure to start counts as missing.
///
/// # Arguments
///
/// * `cmd` - Binary name or path (e.g., "ffmpeg")
/// * `version_arg` - Argument that makes the binary exit quickly
///
/// # Returns
///
/// * `Ok(())` - If the command could be started
/// * `Err(CoreError::DependencyNotFound)` - If the command is not found
/// * `Err(CoreError::CommandStart)` - If the command exists but fails to start
pub fn check_dependency(cmd: &Path, version_arg: &str) -> CoreResult<()> {
    let result = Command::new(cmd)
        .arg(version_arg)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    match result {
        Ok(_) => {
            log::debug!("Found dependency: {}", cmd.display());
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::warn!("Dependency '{}' not found.", cmd.display());
            Err(CoreError::DependencyNotFound(cmd.display().to_string()))
        }
        Err(e) => {
            log::error!(
                "Failed to start dependency check command '{}': {}",
                cmd.display(),
                e
            );
            Err(CoreError::CommandStart(cmd.display().to_string(), e))
        }
    }
}
