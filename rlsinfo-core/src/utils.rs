//! Utility functions for formatting and file operations.
//!
//! This module provides general-purpose helpers used throughout the
//! rlsinfo-core library: video file detection, duration and byte formatting,
//! and path manipulation.

use crate::error::{CoreError, CoreResult};
use std::path::{Path, PathBuf};

/// File extensions accepted as standalone video releases (case-insensitive).
pub const VIDEO_EXTENSIONS: [&str; 4] = ["mkv", "avi", "mp4", "ts"];

/// Checks if the given path is an existing video file rlsinfo can screenshot.
#[must_use]
pub fn is_video_file(path: &Path) -> bool {
    path.is_file() && has_extension(path, &VIDEO_EXTENSIONS)
}

/// Checks the extension of a path against a list (case-insensitive).
#[must_use]
pub fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|e| ext.eq_ignore_ascii_case(e)))
}

/// Formats seconds as HH:MM:SS (e.g., 3725.0 -> "01:02:05"). Returns "??:??:??" for invalid inputs.
#[must_use]
pub fn format_duration(seconds: f64) -> String {
    if seconds < 0.0 || !seconds.is_finite() {
        return "??:??:??".to_string();
    }

    let total_seconds = seconds as u64;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let secs = total_seconds % 60;
    format!("{hours:02}:{minutes:02}:{secs:02}")
}

/// Formats bytes with appropriate binary units (B, KiB, MiB, GiB).
#[must_use]
pub fn format_bytes(bytes: u64) -> String {
    const KIB: f64 = 1024.0;
    const MIB: f64 = KIB * 1024.0;
    const GIB: f64 = MIB * 1024.0;

    let bytes_f64 = bytes as f64;
    if bytes_f64 >= GIB {
        format!("{:.2} GiB", bytes_f64 / GIB)
    } else if bytes_f64 >= MIB {
        format!("{:.2} MiB", bytes_f64 / MIB)
    } else if bytes_f64 >= KIB {
        format!("{:.2} KiB", bytes_f64 / KIB)
    } else {
        format!("{bytes} B")
    }
}

/// Safely extracts filename from a path with consistent error handling.
/// Returns the filename as a String, or an error if the path has no filename component.
pub fn get_filename_safe(path: &Path) -> CoreResult<String> {
    Ok(path
        .file_name()
        .ok_or_else(|| CoreError::PathError(format!("Failed to get filename for {}", path.display())))?
        .to_string_lossy()
        .to_string())
}

/// Returns the largest of the given files. The first file wins ties.
///
/// Files whose size cannot be read are treated as empty.
#[must_use]
pub fn largest_file(files: &[PathBuf]) -> Option<&PathBuf> {
    let mut largest: Option<(&PathBuf, u64)> = None;
    for file in files {
        let size = std::fs::metadata(file).map(|m| m.len()).unwrap_or(0);
        match largest {
            Some((_, best)) if size <= best => {}
            _ => largest = Some((file, size)),
        }
    }
    largest.map(|(file, _)| file)
}
