//! MediaInfo integration for durations, video geometry and text reports.
//!
//! JSON output (`--Output=JSON`) feeds the screenshot pipeline; the plain text
//! output is what ends up in the release report.

use super::MetadataProvider;
use crate::error::{
    CoreError, CoreResult, command_failed_error, command_start_error, missing_field,
};
use crate::processing::geometry::VideoGeometry;

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::process::Command;

/// One track of a mediainfo JSON report. Only the fields rlsinfo reads are
/// declared; mediainfo emits every value as a string.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct MediaInfoTrack {
    #[serde(rename = "@type")]
    pub track_type: String,
    #[serde(rename = "Format")]
    pub format: Option<String>,
    #[serde(rename = "Duration")]
    pub duration: Option<String>,
    #[serde(rename = "Width")]
    pub width: Option<String>,
    #[serde(rename = "Height")]
    pub height: Option<String>,
    #[serde(rename = "PixelAspectRatio")]
    pub pixel_aspect_ratio: Option<String>,
    #[serde(rename = "DisplayAspectRatio")]
    pub display_aspect_ratio: Option<String>,
}

/// MediaInfo media container
#[derive(Debug, Clone, Deserialize)]
pub struct MediaInfoMedia {
    pub track: Vec<MediaInfoTrack>,
}

/// Root MediaInfo response structure
#[derive(Debug, Clone, Deserialize)]
pub struct MediaInfoResponse {
    pub media: MediaInfoMedia,
}

impl MediaInfoResponse {
    /// Parses the JSON printed by `mediainfo --Output=JSON`.
    pub fn from_json(json: &str, path: &Path) -> CoreResult<Self> {
        serde_json::from_str(json).map_err(|e| {
            CoreError::JsonParseError(format!(
                "Failed to parse mediainfo JSON output for {}: {}",
                path.display(),
                e
            ))
        })
    }

    /// First track of the given `@type` ("General", "Video", ...).
    pub fn track(&self, track_type: &str) -> Option<&MediaInfoTrack> {
        self.media.track.iter().find(|t| t.track_type == track_type)
    }

    /// Duration of the General track in seconds.
    pub fn duration(&self, path: &Path) -> CoreResult<f64> {
        let general = self.require_track("General", path)?;
        parse_field(general.duration.as_deref(), "Duration", path)
    }

    /// Geometry of the first Video track.
    pub fn video_geometry(&self, path: &Path) -> CoreResult<VideoGeometry> {
        let video = self.require_track("Video", path)?;
        Ok(VideoGeometry {
            width: parse_field(video.width.as_deref(), "Width", path)?,
            height: parse_field(video.height.as_deref(), "Height", path)?,
            pixel_aspect_ratio: parse_field(
                video.pixel_aspect_ratio.as_deref(),
                "PixelAspectRatio",
                path,
            )?,
            display_aspect_ratio: parse_field(
                video.display_aspect_ratio.as_deref(),
                "DisplayAspectRatio",
                path,
            )?,
        })
    }

    fn require_track(&self, track_type: &str, path: &Path) -> CoreResult<&MediaInfoTrack> {
        self.track(track_type).ok_or_else(|| CoreError::MissingTrack {
            track: track_type.to_string(),
            path: path.display().to_string(),
        })
    }
}

fn parse_field<T: std::str::FromStr>(value: Option<&str>, field: &str, path: &Path) -> CoreResult<T> {
    value
        .and_then(|v| v.trim().parse::<T>().ok())
        .ok_or_else(|| missing_field(field, path))
}

/// Runs mediainfo with the given arguments and returns stdout.
fn run_mediainfo(bin: &Path, args: &[&str], input_path: &Path) -> CoreResult<String> {
    log::debug!(
        "Running {} {:?} on: {}",
        bin.display(),
        args,
        input_path.display()
    );

    let output = Command::new(bin)
        .args(args)
        .arg(input_path)
        .output()
        .map_err(|e| command_start_error("mediainfo", e))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(command_failed_error(
            "mediainfo",
            output.status,
            stderr.to_string(),
        ));
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Gets the structured mediainfo report of a file.
pub fn get_media_info(bin: &Path, input_path: &Path) -> CoreResult<MediaInfoResponse> {
    let stdout = run_mediainfo(bin, &["--Output=JSON"], input_path)?;
    MediaInfoResponse::from_json(&stdout, input_path)
}

/// Gets the human readable mediainfo report of a file.
pub fn get_mediainfo_text(bin: &Path, input_path: &Path) -> CoreResult<String> {
    run_mediainfo(bin, &[], input_path)
}

/// `MetadataProvider` backed by the mediainfo binary.
#[derive(Debug, Clone)]
pub struct MediaInfoProvider {
    bin: PathBuf,
}

impl MediaInfoProvider {
    pub fn new(bin: impl Into<PathBuf>) -> Self {
        Self { bin: bin.into() }
    }
}

impl MetadataProvider for MediaInfoProvider {
    fn geometry(&self, path: &Path) -> CoreResult<VideoGeometry> {
        get_media_info(&self.bin, path)?.video_geometry(path)
    }

    fn duration(&self, path: &Path) -> CoreResult<f64> {
        get_media_info(&self.bin, path)?.duration(path)
    }
}
