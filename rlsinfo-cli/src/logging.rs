// ============================================================================
// rlsinfo-cli/src/logging.rs
// ============================================================================
//
// LOGGING UTILITIES: console logging through env_logger, or a run log file
// through rlsinfo-core's log4rs setup when --log-dir is given.

use crate::error::{CliErrorContext, CliResult};

use log::LevelFilter;
use rlsinfo_core::file_logging::{log_file_path, setup_file_logging};
use std::path::Path;

/// Returns the current local timestamp formatted as "YYYYMMDD_HHMMSS".
///
/// # Example
/// ```
/// let log_filename = format!("rlsinfo_run_{}.log", rlsinfo_cli::logging::get_timestamp());
/// assert!(log_filename.starts_with("rlsinfo_run_"));
/// ```
pub fn get_timestamp() -> String {
    chrono::Local::now().format("%Y%m%d_%H%M%S").to_string()
}

/// Debug when verbose, info otherwise.
pub fn log_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Initializes logging for the run.
///
/// With a log directory all records go to `rlsinfo_run_{timestamp}.log` in it.
/// Otherwise env_logger writes to stderr, honouring `RUST_LOG` over `level`.
pub fn init_logging(log_dir: Option<&Path>, level: LevelFilter) -> CliResult<()> {
    match log_dir {
        Some(dir) => {
            let log_file = log_file_path(dir, &get_timestamp());
            setup_file_logging(&log_file, level)
                .cli_with_context(|| format!("Failed to set up file logging to {}", log_file.display()))?;
            log::info!("rlsinfo starting, logging to {}", log_file.display());
            if level == LevelFilter::Debug {
                log::info!("Debug level logging enabled");
            }
        }
        None => {
            env_logger::Builder::new()
                .filter_level(level)
                .parse_default_env()
                .format_timestamp(None)
                .init();
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_shape() {
        let stamp = get_timestamp();
        assert_eq!(stamp.len(), 15);
        assert_eq!(stamp.as_bytes()[8], b'_');
    }

    #[test]
    fn test_log_level() {
        assert_eq!(log_level(true), LevelFilter::Debug);
        assert_eq!(log_level(false), LevelFilter::Info);
    }
}
