// rlsinfo-cli/src/output.rs
//
// Terminal styling for the CLI. Status lines go to stderr so stdout carries
// only the release info or the screenshot paths.

use console::style;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::io::IsTerminal;
use std::time::Duration;

/// Print a section heading
pub fn print_heading(text: &str) {
    eprintln!("\n{}", style(format!("===== {} =====", text)).bold().cyan());
}

/// Print a label and value
pub fn print_info<T: std::fmt::Display>(label: &str, value: T) {
    eprintln!("  {}: {}", style(label).dim(), value);
}

/// Print a success message with green styling
pub fn print_success(message: &str) {
    eprintln!("{} {}", style("✓").green().bold(), message);
}

/// Print an error message with red styling
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("Error:").red().bold(), message);
}

/// Spinner shown while screenshots are captured and ranked.
///
/// Hidden when stderr is not a terminal.
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(spinner_style) = ProgressStyle::with_template("  {spinner:.cyan} {msg} ({elapsed})") {
        pb.set_style(spinner_style);
    }
    pb.set_message(message.to_string());

    if !std::io::stderr().is_terminal() {
        pb.set_draw_target(ProgressDrawTarget::hidden());
    }

    pb.enable_steady_tick(Duration::from_millis(120));
    pb
}
