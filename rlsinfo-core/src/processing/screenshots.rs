//! Screenshot generation for a title.
//!
//! A `ScreenshotSession` ties the pieces together:
//! 1. resolve the display geometry of the title once;
//! 2. fetch every segment duration once and plan capture timestamps;
//! 3. capture the frames of each segment in parallel, keeping plan order;
//! 4. prune the candidates down to the requested count;
//! 5. optionally optimise the kept PNGs.

use crate::config::{CoreConfig, SPARE_SCREENSHOTS};
use crate::error::{CoreError, CoreResult};
use crate::external::{FrameCapturer, MetadataProvider};
use crate::processing::geometry::{DisplayGeometry, resolve_display_geometry};
use crate::processing::optimise::optimise_all;
use crate::processing::pruning::{CapturedFrame, Compressor, FramePruner};
use crate::processing::sampling::{Sample, plan_samples};
use crate::temp_files::{screenshot_path, screenshot_stamp};
use crate::title::{Segment, Title};
use crate::utils::format_duration;

use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// Generates screenshots for titles with a fixed set of collaborators.
pub struct ScreenshotSession<'a, M, F, C>
where
    M: MetadataProvider + ?Sized,
    F: FrameCapturer + ?Sized,
    C: Compressor + ?Sized,
{
    config: &'a CoreConfig,
    metadata: &'a M,
    capturer: &'a F,
    compressor: &'a C,
}

impl<'a, M, F, C> ScreenshotSession<'a, M, F, C>
where
    M: MetadataProvider + ?Sized,
    F: FrameCapturer + ?Sized,
    C: Compressor + ?Sized,
{
    pub fn new(config: &'a CoreConfig, metadata: &'a M, capturer: &'a F, compressor: &'a C) -> Self {
        Self {
            config,
            metadata,
            capturer,
            compressor,
        }
    }

    /// Captures `n_final + 2` candidate frames and returns the `n_final` most
    /// detailed ones, in chronological order.
    ///
    /// Fewer paths are returned when the title is too short to plan every
    /// sample or some captures fail.
    ///
    /// # Errors
    ///
    /// * `CoreError::Config` if `n_final` is zero or the title is too short
    /// * metadata errors of the geometry source or any segment
    /// * `CoreError::NoFramesCaptured` if every capture failed
    pub fn generate_screenshots(&self, title: &Title, n_final: usize) -> CoreResult<Vec<PathBuf>> {
        if n_final == 0 {
            return Err(CoreError::Config(
                "at least one screenshot must be requested".to_string(),
            ));
        }

        let geometry = self.display_geometry(title)?;
        let segments = self.segments(title)?;
        let durations: Vec<f64> = segments.iter().map(|s| s.duration_secs).collect();
        let runtime: f64 = durations.iter().sum();
        log::info!(
            "{} ({}, {} segment(s), runtime {}), screenshots at {}",
            title.root().display(),
            title.release_type(),
            segments.len(),
            format_duration(runtime),
            geometry
        );

        let plan = plan_samples(&durations, n_final + SPARE_SCREENSHOTS)?;

        std::fs::create_dir_all(&self.config.image_dir)?;
        let stamp = screenshot_stamp();

        let mut frames = Vec::with_capacity(plan.len());
        let mut next_index = 0;
        for (segment_index, segment) in segments.iter().enumerate() {
            let jobs: Vec<(Sample, PathBuf)> = plan
                .for_segment(segment_index)
                .map(|sample| {
                    let output = screenshot_path(&self.config.image_dir, next_index, &stamp);
                    next_index += 1;
                    (*sample, output)
                })
                .collect();
            if jobs.is_empty() {
                continue;
            }

            log::debug!(
                "Capturing {} frame(s) from {}",
                jobs.len(),
                segment.path.display()
            );
            let captured: Vec<Option<CapturedFrame>> = jobs
                .into_par_iter()
                .map(|(sample, output)| self.capture(&segment.path, sample, geometry, output))
                .collect();
            frames.extend(captured.into_iter().flatten());
        }

        if frames.is_empty() {
            return Err(CoreError::NoFramesCaptured(title.root().display().to_string()));
        }
        log::info!("Captured {} of {} planned frames", frames.len(), plan.len());

        let kept = FramePruner::new(self.compressor, self.config.temp_base_dir()).prune(frames, n_final)?;

        if self.config.optimise_png {
            optimise_all(&self.config.oxipng_path, &kept);
        }

        Ok(kept)
    }

    fn display_geometry(&self, title: &Title) -> CoreResult<DisplayGeometry> {
        let raw = match title.cached_geometry() {
            Some(geometry) => *geometry,
            None => self.metadata.geometry(title.geometry_source())?,
        };
        resolve_display_geometry(&raw)
    }

    fn segments(&self, title: &Title) -> CoreResult<Vec<Segment>> {
        title
            .segments()
            .iter()
            .map(|path| {
                Ok(Segment {
                    path: path.clone(),
                    duration_secs: self.metadata.duration(path)?,
                })
            })
            .collect()
    }

    fn capture(
        &self,
        input: &Path,
        sample: Sample,
        geometry: DisplayGeometry,
        output: PathBuf,
    ) -> Option<CapturedFrame> {
        match self.capturer.capture(input, sample.timestamp, geometry, &output) {
            Ok(()) => Some(CapturedFrame::new(sample.segment, sample.timestamp, output)),
            Err(e) => {
                log::warn!(
                    "Screenshot at {:.3}s of {} failed: {}",
                    sample.timestamp,
                    input.display(),
                    e
                );
                None
            }
        }
    }
}
