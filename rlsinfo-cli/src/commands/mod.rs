//! Command implementations for the CLI.
//!
//! Each submodule contains the implementation of a specific command.

/// `create`: report plus uploaded screenshots.
pub mod create;
/// `info`: mediainfo report only.
pub mod info;
/// `screenshots`: generate screenshots only.
pub mod screenshots;

use crate::error::{CliErrorContext, CliResult};

use rlsinfo_core::external::{MediaInfoProvider, check_dependency};
use rlsinfo_core::{CoreError, Title, discover_title};
use std::fs;
use std::io::Write;
use std::path::Path;

/// Resolves `input` into a title, failing early on paths that do not exist.
pub(crate) fn load_title(input: &Path, mediainfo: &Path) -> CliResult<Title> {
    if !input.exists() {
        return Err(CoreError::PathError(format!(
            "Input path does not exist: {}",
            input.display()
        )));
    }
    check_dependency(mediainfo, "--version")?;

    let provider = MediaInfoProvider::new(mediainfo);
    let title = discover_title(input, &provider)?;
    log::info!(
        "Found {} release with {} segment(s) at {}",
        title.release_type(),
        title.segments().len(),
        title.root().display()
    );
    Ok(title)
}

/// Writes `text` to `output`, or to stdout when no file is given.
pub(crate) fn write_output(text: &str, output: Option<&Path>) -> CliResult<()> {
    match output {
        Some(path) => {
            fs::write(path, text).cli_with_context(|| format!("Failed to write {}", path.display()))?;
            log::info!("Wrote {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(text.as_bytes()).cli_context("Failed to write to stdout")?;
            stdout.flush().cli_context("Failed to write to stdout")?;
        }
    }
    Ok(())
}
