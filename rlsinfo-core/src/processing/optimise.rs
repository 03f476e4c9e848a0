//! Lossless PNG optimisation of the kept screenshots through oxipng.

use crate::error::{CoreResult, command_failed_error, command_start_error};

use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// oxipng arguments: optimisation level 2, strip safe metadata, alpha cleanup.
pub const OXIPNG_ARGS: [&str; 4] = ["-o", "2", "-s", "-a"];

/// Optimises one PNG in place.
pub fn optimise_png(oxipng: &Path, image: &Path) -> CoreResult<()> {
    log::debug!("Optimising {}", image.display());
    let output = Command::new(oxipng)
        .args(OXIPNG_ARGS)
        .arg(image)
        .stdin(Stdio::null())
        .output()
        .map_err(|e| command_start_error("oxipng", e))?;

    if !output.status.success() {
        return Err(command_failed_error(
            "oxipng",
            output.status,
            String::from_utf8_lossy(&output.stderr).to_string(),
        ));
    }
    Ok(())
}

/// Optimises every image concurrently and waits for all of them.
///
/// Failures leave the original file in place and are only logged. Returns the
/// number of images optimised successfully.
pub fn optimise_all(oxipng: &Path, images: &[PathBuf]) -> usize {
    let results: Vec<CoreResult<()>> = images
        .par_iter()
        .map(|image| optimise_png(oxipng, image))
        .collect();

    let mut optimised = 0;
    for (image, result) in images.iter().zip(results) {
        match result {
            Ok(()) => optimised += 1,
            Err(e) => log::warn!("PNG optimisation of {} failed: {}", image.display(), e),
        }
    }
    log::info!("Optimised {} of {} screenshots", optimised, images.len());
    optimised
}
