//! Main entry point for the rlsinfo CLI application.
//!
//! This handles command-line argument parsing, logging setup, and dispatching
//! to the appropriate command handlers.

use rlsinfo_cli::logging::{init_logging, log_level};
use rlsinfo_cli::output::print_error;
use rlsinfo_cli::{parse_cli, run};

use std::process::ExitCode;

fn main() -> ExitCode {
    let cli_args = parse_cli();

    let level = log_level(cli_args.verbose);
    if let Err(e) = init_logging(cli_args.log_dir.as_deref(), level) {
        print_error(&e.to_string());
        return ExitCode::FAILURE;
    }

    match run(cli_args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            print_error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}
