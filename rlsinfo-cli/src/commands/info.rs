// rlsinfo-cli/src/commands/info.rs
//
// Prints the mediainfo report of a release.

use super::{load_title, write_output};
use crate::cli::InfoArgs;
use crate::error::CliResult;
use crate::output;

use rlsinfo_core::CoreConfigBuilder;
use rlsinfo_core::mediainfo_report;

pub fn run_info(args: InfoArgs) -> CliResult<()> {
    let title = load_title(&args.input_path, &args.mediainfo_path)?;

    let config = CoreConfigBuilder::new()
        .mediainfo_path(args.mediainfo_path.clone())
        .build();
    let report = mediainfo_report(&config, &title)?;

    write_output(&report, args.output.as_deref())?;
    if let Some(path) = &args.output {
        output::print_success(&format!("Report written to {}", path.display()));
    }
    Ok(())
}
