use crate::error::{CoreError, CoreResult};

use log::LevelFilter;
use log4rs::{
    append::file::FileAppender,
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
};
use std::path::{Path, PathBuf};

/// Line format of the run log.
pub const LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} [{l}] {m}{n}";

/// Path of the log file for a run started at `timestamp` (`YYYYmmdd_HHMMSS`).
#[must_use]
pub fn log_file_path(log_dir: &Path, timestamp: &str) -> PathBuf {
    log_dir.join(format!("rlsinfo_run_{timestamp}.log"))
}

/// Routes all `log` output to `log_file`. Can only succeed once per process.
pub fn setup_file_logging(log_file: &Path, log_level: LevelFilter) -> CoreResult<()> {
    // Create log directory if it doesn't exist
    if let Some(parent) = log_file.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build(log_file)?;

    let config = Config::builder()
        .appender(Appender::builder().build("file", Box::new(file_appender)))
        .build(Root::builder().appender("file").build(log_level))
        .map_err(|e| CoreError::Logging(e.to_string()))?;

    log4rs::init_config(config).map_err(|e| CoreError::Logging(e.to_string()))?;

    Ok(())
}
