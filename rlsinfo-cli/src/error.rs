// ============================================================================
// rlsinfo-cli/src/error.rs
// ============================================================================
//
// CLI ERROR HANDLING: the CLI reports every failure as a CoreError, prefixed
// with what the command was doing when it failed.

use rlsinfo_core::{CoreError, CoreResult};

use std::fmt::Display;

/// Type alias for CLI results using CoreError.
pub type CliResult<T> = CoreResult<T>;

fn prefixed(context: impl Display, err: CoreError) -> CoreError {
    CoreError::OperationFailed(format!("{context}: {err}"))
}

/// Adds a message prefix to failed results, e.g. the file being written.
pub trait CliErrorContext<T> {
    fn cli_context(self, context: impl Display) -> CliResult<T>;

    /// Like `cli_context`, building the message only on failure.
    fn cli_with_context<C: Display>(self, f: impl FnOnce() -> C) -> CliResult<T>;
}

impl<T, E: Into<CoreError>> CliErrorContext<T> for Result<T, E> {
    fn cli_context(self, context: impl Display) -> CliResult<T> {
        self.map_err(|e| prefixed(context, e.into()))
    }

    fn cli_with_context<C: Display>(self, f: impl FnOnce() -> C) -> CliResult<T> {
        self.map_err(|e| prefixed(f(), e.into()))
    }
}
