//! Temporary directories and screenshot file naming.
//!
//! Ranking proxies live in a `tempfile::TempDir` so they are removed when the
//! pruning step finishes, including on early returns.

use crate::error::CoreResult;
use std::path::{Path, PathBuf};
use tempfile::{Builder as TempFileBuilder, TempDir};

/// Format of the timestamp embedded in screenshot file names.
pub const SCREENSHOT_STAMP_FORMAT: &str = "%Y-%m-%d %H-%M-%S";

/// Creates a temporary directory with prefix under `base`, creating `base` first.
/// Auto-cleaned when dropped.
pub fn create_temp_dir_in(base: &Path, prefix: &str) -> CoreResult<TempDir> {
    std::fs::create_dir_all(base)?;

    Ok(TempFileBuilder::new().prefix(prefix).tempdir_in(base)?)
}

/// Local wall-clock stamp shared by all screenshots of one session.
#[must_use]
pub fn screenshot_stamp() -> String {
    chrono::Local::now()
        .format(SCREENSHOT_STAMP_FORMAT)
        .to_string()
}

/// Path of the raw screenshot with the given session index.
#[must_use]
pub fn screenshot_path(dir: &Path, index: usize, stamp: &str) -> PathBuf {
    dir.join(format!("snapshot_{index} {stamp}.png"))
}
