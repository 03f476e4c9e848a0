// rlsinfo-core/tests/common/mod.rs
//
// Test doubles for the screenshot pipeline collaborators.

#![allow(dead_code)]

use image::{Rgb, RgbImage};
use rlsinfo_core::error::{CoreError, CoreResult};
use rlsinfo_core::external::{FrameCapturer, MetadataProvider};
use rlsinfo_core::processing::{DisplayGeometry, VideoGeometry};
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

pub fn ntsc_widescreen() -> VideoGeometry {
    VideoGeometry {
        width: 720,
        height: 480,
        pixel_aspect_ratio: 1.333,
        display_aspect_ratio: 1.777,
    }
}

/// Metadata from fixed tables, counting how often each query is made.
pub struct FakeMetadata {
    pub geometry: Option<VideoGeometry>,
    pub durations: HashMap<PathBuf, f64>,
    pub geometry_calls: Mutex<Vec<PathBuf>>,
    pub duration_calls: Mutex<Vec<PathBuf>>,
}

impl FakeMetadata {
    pub fn new(geometry: Option<VideoGeometry>, durations: &[(&Path, f64)]) -> Self {
        Self {
            geometry,
            durations: durations
                .iter()
                .map(|(path, d)| (path.to_path_buf(), *d))
                .collect(),
            geometry_calls: Mutex::new(Vec::new()),
            duration_calls: Mutex::new(Vec::new()),
        }
    }
}

impl MetadataProvider for FakeMetadata {
    fn geometry(&self, path: &Path) -> CoreResult<VideoGeometry> {
        self.geometry_calls.lock().unwrap().push(path.to_path_buf());
        self.geometry.ok_or_else(|| CoreError::MissingTrack {
            track: "Video".to_string(),
            path: path.display().to_string(),
        })
    }

    fn duration(&self, path: &Path) -> CoreResult<f64> {
        self.duration_calls.lock().unwrap().push(path.to_path_buf());
        self.durations
            .get(path)
            .copied()
            .ok_or_else(|| CoreError::MissingField {
                field: "Duration".to_string(),
                path: path.display().to_string(),
            })
    }
}

/// One recorded capture request.
#[derive(Debug, Clone, PartialEq)]
pub struct CaptureCall {
    pub input: PathBuf,
    pub timestamp: f64,
    pub geometry: DisplayGeometry,
    pub output: PathBuf,
}

/// Writes small PNG frames instead of running ffmpeg.
///
/// Timestamps listed in `dark` produce flat black frames, timestamps in `fail`
/// produce an error and no file. Timestamps are matched after rounding.
#[derive(Default)]
pub struct FakeCapturer {
    pub dark: HashSet<u64>,
    pub fail: HashSet<u64>,
    pub fail_all: bool,
    pub calls: Mutex<Vec<CaptureCall>>,
}

impl FakeCapturer {
    pub fn with_dark(timestamps: &[u64]) -> Self {
        Self {
            dark: timestamps.iter().copied().collect(),
            ..Default::default()
        }
    }

    pub fn with_failures(timestamps: &[u64]) -> Self {
        Self {
            fail: timestamps.iter().copied().collect(),
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail_all: true,
            ..Default::default()
        }
    }

    /// Recorded calls sorted by input file, then timestamp.
    pub fn sorted_calls(&self) -> Vec<CaptureCall> {
        let mut calls = self.calls.lock().unwrap().clone();
        calls.sort_by(|a, b| {
            a.input
                .cmp(&b.input)
                .then(a.timestamp.total_cmp(&b.timestamp))
        });
        calls
    }
}

impl FrameCapturer for FakeCapturer {
    fn capture(
        &self,
        input: &Path,
        timestamp: f64,
        geometry: DisplayGeometry,
        output: &Path,
    ) -> CoreResult<()> {
        self.calls.lock().unwrap().push(CaptureCall {
            input: input.to_path_buf(),
            timestamp,
            geometry,
            output: output.to_path_buf(),
        });

        let key = timestamp.round() as u64;
        if self.fail_all || self.fail.contains(&key) {
            return Err(CoreError::CaptureFailed(format!("fake failure at {timestamp}")));
        }

        // Frames are written at a reduced size to keep the tests fast
        let (width, height) = (geometry.width / 4, geometry.height / 4);
        let frame = if self.dark.contains(&key) {
            RgbImage::from_pixel(width, height, Rgb([4, 4, 4]))
        } else {
            let seed = key as u32;
            RgbImage::from_fn(width, height, |x, y| {
                let v = (x.wrapping_mul(7919) ^ y.wrapping_mul(104_729) ^ seed.wrapping_mul(31)) as u8;
                Rgb([v, v.wrapping_add(x as u8), v.wrapping_mul(3)])
            })
        };
        frame
            .save(output)
            .map_err(|e| CoreError::CaptureFailed(e.to_string()))
    }
}
