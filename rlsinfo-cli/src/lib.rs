// rlsinfo-cli/src/lib.rs
//
// Library portion of the rlsinfo CLI application.
// Contains argument definitions and command logic.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
pub mod output;

// Re-export items needed by the binary or integration tests
pub use cli::{Cli, Commands, CreateArgs, InfoArgs, ScreenshotArgs};
pub use commands::create::run_create;
pub use commands::info::run_info;
pub use commands::screenshots::run_screenshots;

use clap::Parser;

/// Parses the process arguments.
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Runs the selected command.
pub fn run(cli: Cli) -> error::CliResult<()> {
    match cli.command {
        Commands::Create(args) => run_create(args),
        Commands::Screenshots(args) => run_screenshots(args),
        Commands::Info(args) => run_info(args),
    }
}
