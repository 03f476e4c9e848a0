// ============================================================================
// rlsinfo-core/src/error.rs
// ============================================================================
//
// ERROR HANDLING: Error Types for the rlsinfo Core Library
//
// One error enum covers every failure the core can surface. Configuration and
// metadata errors are fatal for a run; per-frame capture failures are absorbed
// by the screenshot session and never reach this type's callers.

use std::io;
use std::process::ExitStatus;
use thiserror::Error;

/// Errors produced by the rlsinfo core library.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to start {0}: {1}")]
    CommandStart(String, io::Error),

    #[error("Failed to wait for {0}: {1}")]
    CommandWait(String, io::Error),

    #[error("{0} exited with {1}: {2}")]
    CommandFailed(String, ExitStatus, String),

    #[error("Required dependency '{0}' was not found")]
    DependencyNotFound(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Path error: {0}")]
    PathError(String),

    #[error("No usable video files found")]
    NoFilesFound,

    #[error("No {track} track found in {path}")]
    MissingTrack { track: String, path: String },

    #[error("Field '{field}' missing or unparseable in {path}")]
    MissingField { field: String, path: String },

    #[error("Invalid video geometry: {0}")]
    InvalidGeometry(String),

    #[error("JSON parse error: {0}")]
    JsonParseError(String),

    #[error("Screenshot capture failed: {0}")]
    CaptureFailed(String),

    #[error("No screenshots could be captured for {0}")]
    NoFramesCaptured(String),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Upload to {host} failed: {message}")]
    Upload { host: String, message: String },

    #[error("Logging setup failed: {0}")]
    Logging(String),

    #[error("{0}")]
    OperationFailed(String),
}

/// Result alias used throughout the core library.
pub type CoreResult<T> = Result<T, CoreError>;

pub(crate) fn command_start_error(cmd: impl Into<String>, err: io::Error) -> CoreError {
    CoreError::CommandStart(cmd.into(), err)
}

pub(crate) fn command_wait_error(cmd: impl Into<String>, err: io::Error) -> CoreError {
    CoreError::CommandWait(cmd.into(), err)
}

pub(crate) fn command_failed_error(
    cmd: impl Into<String>,
    status: ExitStatus,
    stderr: impl Into<String>,
) -> CoreError {
    CoreError::CommandFailed(cmd.into(), status, stderr.into())
}

pub(crate) fn missing_field(field: &str, path: &std::path::Path) -> CoreError {
    CoreError::MissingField {
        field: field.to_string(),
        path: path.display().to_string(),
    }
}
