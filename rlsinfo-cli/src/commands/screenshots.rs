// rlsinfo-cli/src/commands/screenshots.rs
//
// Generates screenshots for a release and prints where they were saved.

use super::load_title;
use crate::cli::ScreenshotArgs;
use crate::error::CliResult;
use crate::output;

use rlsinfo_core::external::check_dependency;
use rlsinfo_core::{CoreConfig, CoreConfigBuilder, Title, format_bytes, generate_screenshots};
use std::path::PathBuf;

/// Builds the core configuration from the command-line settings.
pub fn build_config(args: &ScreenshotArgs) -> CoreConfig {
    let mut builder = CoreConfigBuilder::new()
        .image_dir(args.image_dir.clone())
        .ffmpeg_path(args.tools.ffmpeg_path.clone())
        .mediainfo_path(args.tools.mediainfo_path.clone())
        .oxipng_path(args.tools.oxipng_path.clone())
        .screenshot_count(usize::from(args.count))
        .optimise_png(args.optimise);
    if let Some(temp_dir) = &args.temp_dir {
        builder = builder.temp_dir(temp_dir.clone());
    }
    builder.build()
}

/// Checks the binaries screenshot generation needs.
pub fn check_tools(config: &CoreConfig) -> CliResult<()> {
    check_dependency(&config.ffmpeg_path, "-version")?;
    if config.optimise_png {
        check_dependency(&config.oxipng_path, "--version")?;
    }
    Ok(())
}

/// Generates the screenshots for `title` behind a spinner.
pub fn capture(config: &CoreConfig, title: &Title) -> CliResult<Vec<PathBuf>> {
    let spinner = output::create_spinner(&format!(
        "Generating {} screenshot(s)",
        config.screenshot_count
    ));
    let result = generate_screenshots(config, title);
    spinner.finish_and_clear();

    let screenshots = result?;
    output::print_success(&format!(
        "Kept {} of {} screenshot(s) in {}",
        screenshots.len(),
        config.screenshot_count,
        config.image_dir.display()
    ));
    Ok(screenshots)
}

pub fn run_screenshots(args: ScreenshotArgs) -> CliResult<()> {
    let config = build_config(&args);
    config.validate()?;
    let title = load_title(&args.input_path, &config.mediainfo_path)?;
    check_tools(&config)?;

    let screenshots = capture(&config, &title)?;
    for path in &screenshots {
        let size = std::fs::metadata(path).map(|m| m.len()).unwrap_or(0);
        println!("{} ({})", path.display(), format_bytes(size));
    }
    Ok(())
}
