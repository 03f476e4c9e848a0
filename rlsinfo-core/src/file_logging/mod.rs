//! File logging through log4rs for unattended runs.

pub mod setup;

pub use setup::{log_file_path, setup_file_logging};
