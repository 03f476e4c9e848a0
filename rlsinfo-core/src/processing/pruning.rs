//! Frame selection by compressed size.
//!
//! Low-detail frames (dark scenes, black transitions, blurry pans) compress far
//! better than detailed ones. Every raw candidate is re-encoded as a very lossy
//! JPEG proxy and the candidates with the largest proxies are kept.

use crate::config::DEFAULT_PROXY_QUALITY;
use crate::error::{CoreError, CoreResult};
use crate::temp_files::create_temp_dir_in;

use image::codecs::jpeg::JpegEncoder;
use rayon::prelude::*;
use std::cmp::Reverse;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// Produces the disposable proxy used to rank a raw frame.
pub trait Compressor: Sync {
    /// Writes a proxy of `raw` into `proxy_dir` and returns its path.
    fn compress_for_ranking(&self, raw: &Path, proxy_dir: &Path) -> CoreResult<PathBuf>;
}

/// Re-encodes frames as JPEG at a fixed quality.
#[derive(Debug, Clone, Copy)]
pub struct JpegProxyCompressor {
    quality: u8,
}

impl JpegProxyCompressor {
    pub fn new(quality: u8) -> Self {
        Self { quality }
    }
}

impl Default for JpegProxyCompressor {
    fn default() -> Self {
        Self::new(DEFAULT_PROXY_QUALITY)
    }
}

impl Compressor for JpegProxyCompressor {
    fn compress_for_ranking(&self, raw: &Path, proxy_dir: &Path) -> CoreResult<PathBuf> {
        let stem = raw.file_stem().ok_or_else(|| {
            CoreError::PathError(format!("Frame path has no file name: {}", raw.display()))
        })?;
        let mut name = stem.to_os_string();
        name.push(".jpg");
        let proxy = proxy_dir.join(name);

        let rgb = image::open(raw)?.to_rgb8();
        let writer = BufWriter::new(File::create(&proxy)?);
        let mut encoder = JpegEncoder::new_with_quality(writer, self.quality);
        encoder.encode_image(&rgb)?;
        Ok(proxy)
    }
}

/// A raw screenshot produced by the capture step.
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedFrame {
    pub segment: usize,
    pub timestamp: f64,
    pub path: PathBuf,
    /// Size in bytes of the ranking proxy, set during pruning
    pub proxy_size: Option<u64>,
}

impl CapturedFrame {
    pub fn new(segment: usize, timestamp: f64, path: PathBuf) -> Self {
        Self {
            segment,
            timestamp,
            path,
            proxy_size: None,
        }
    }
}

/// Ranks captured frames and deletes the ones not worth keeping.
pub struct FramePruner<'a, C: Compressor + ?Sized> {
    compressor: &'a C,
    temp_base: &'a Path,
}

impl<'a, C: Compressor + ?Sized> FramePruner<'a, C> {
    /// `temp_base` is where the short-lived proxy directory is created.
    pub fn new(compressor: &'a C, temp_base: &'a Path) -> Self {
        Self {
            compressor,
            temp_base,
        }
    }

    /// Keeps the `n_final` frames with the largest proxies.
    ///
    /// Ties keep plan order. Kept paths are returned in plan order, so the
    /// result reads chronologically rather than largest first. Every other raw
    /// frame is deleted, as is every proxy. A frame whose proxy cannot be
    /// written ranks as size 0.
    ///
    /// # Errors
    ///
    /// * `CoreError::Config` if `n_final` is zero
    /// * `CoreError::Io` if the proxy directory cannot be created
    pub fn prune(&self, mut frames: Vec<CapturedFrame>, n_final: usize) -> CoreResult<Vec<PathBuf>> {
        if n_final == 0 {
            return Err(CoreError::Config(
                "at least one screenshot must be kept".to_string(),
            ));
        }
        if frames.is_empty() {
            return Ok(Vec::new());
        }

        let proxy_dir = create_temp_dir_in(self.temp_base, "rlsinfo_proxies_")?;

        frames.par_iter_mut().for_each(|frame| {
            frame.proxy_size = Some(self.proxy_size(&frame.path, proxy_dir.path()));
        });

        let keep = ranked_indices(&frames, n_final);
        let mut kept = Vec::with_capacity(keep.len());
        for (index, frame) in frames.into_iter().enumerate() {
            if keep.contains(&index) {
                log::debug!(
                    "Keeping {} (proxy {} bytes)",
                    frame.path.display(),
                    frame.proxy_size.unwrap_or(0)
                );
                kept.push(frame.path);
            } else {
                log::debug!(
                    "Discarding {} (proxy {} bytes)",
                    frame.path.display(),
                    frame.proxy_size.unwrap_or(0)
                );
                if let Err(e) = std::fs::remove_file(&frame.path) {
                    log::warn!("Could not remove {}: {}", frame.path.display(), e);
                }
            }
        }

        // proxy_dir is dropped here, which removes every proxy
        Ok(kept)
    }

    fn proxy_size(&self, raw: &Path, proxy_dir: &Path) -> u64 {
        let size = self
            .compressor
            .compress_for_ranking(raw, proxy_dir)
            .and_then(|proxy| Ok(std::fs::metadata(proxy)?.len()));
        match size {
            Ok(size) => size,
            Err(e) => {
                log::warn!("Could not compress {} for ranking: {}", raw.display(), e);
                0
            }
        }
    }
}

/// Indices of the `n_final` largest proxies, stable on ties.
fn ranked_indices(frames: &[CapturedFrame], n_final: usize) -> Vec<usize> {
    let mut order: Vec<usize> = (0..frames.len()).collect();
    order.sort_by_key(|&i| Reverse(frames[i].proxy_size.unwrap_or(0)));
    order.truncate(n_final);
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};
    use std::collections::HashMap;
    use std::fs;

    /// Writes proxies of a predetermined size.
    struct FixedSizes(HashMap<PathBuf, usize>);

    impl Compressor for FixedSizes {
        fn compress_for_ranking(&self, raw: &Path, proxy_dir: &Path) -> CoreResult<PathBuf> {
            let size = *self.0.get(raw).ok_or_else(|| {
                CoreError::OperationFailed(format!("no size for {}", raw.display()))
            })?;
            let proxy = proxy_dir.join(raw.file_name().unwrap()).with_extension("jpg");
            fs::write(&proxy, vec![0u8; size])?;
            Ok(proxy)
        }
    }

    fn frames_with_sizes(dir: &Path, sizes: &[usize]) -> (Vec<CapturedFrame>, FixedSizes) {
        let mut table = HashMap::new();
        let frames = sizes
            .iter()
            .enumerate()
            .map(|(i, &size)| {
                let path = dir.join(format!("snapshot_{i}.png"));
                fs::write(&path, b"raw").unwrap();
                table.insert(path.clone(), size);
                CapturedFrame::new(0, i as f64 * 10.0, path)
            })
            .collect();
        (frames, FixedSizes(table))
    }

    #[test]
    fn test_keeps_largest_in_plan_order() {
        let dir = tempfile::tempdir().unwrap();
        let (frames, sizes) = frames_with_sizes(dir.path(), &[500, 100, 900, 700, 50, 800]);
        let all: Vec<PathBuf> = frames.iter().map(|f| f.path.clone()).collect();

        let kept = FramePruner::new(&sizes, dir.path()).prune(frames, 4).unwrap();

        assert_eq!(kept, vec![all[0].clone(), all[2].clone(), all[3].clone(), all[5].clone()]);
        assert!(!all[1].exists());
        assert!(!all[4].exists());
        for path in &kept {
            assert!(path.exists());
        }
    }

    #[test]
    fn test_ties_prefer_earlier_frames() {
        let dir = tempfile::tempdir().unwrap();
        let (frames, sizes) = frames_with_sizes(dir.path(), &[300, 300, 300, 300]);
        let all: Vec<PathBuf> = frames.iter().map(|f| f.path.clone()).collect();

        let kept = FramePruner::new(&sizes, dir.path()).prune(frames, 2).unwrap();
        assert_eq!(kept, vec![all[0].clone(), all[1].clone()]);
    }

    #[test]
    fn test_fewer_candidates_than_requested() {
        let dir = tempfile::tempdir().unwrap();
        let (frames, sizes) = frames_with_sizes(dir.path(), &[10, 20, 30]);
        let kept = FramePruner::new(&sizes, dir.path()).prune(frames, 6).unwrap();
        assert_eq!(kept.len(), 3);
    }

    #[test]
    fn test_no_proxies_left_behind() {
        let dir = tempfile::tempdir().unwrap();
        let (frames, sizes) = frames_with_sizes(dir.path(), &[10, 20, 30, 40]);
        FramePruner::new(&sizes, dir.path()).prune(frames, 2).unwrap();

        let leftovers: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().path())
            .filter(|p| p.is_dir() || p.extension().is_some_and(|e| e == "jpg"))
            .collect();
        assert!(leftovers.is_empty(), "left behind: {leftovers:?}");
    }

    #[test]
    fn test_failed_proxy_ranks_last() {
        let dir = tempfile::tempdir().unwrap();
        let (mut frames, sizes) = frames_with_sizes(dir.path(), &[10, 20]);
        let orphan = dir.path().join("orphan.png");
        fs::write(&orphan, b"raw").unwrap();
        frames.insert(0, CapturedFrame::new(0, 0.0, orphan.clone()));

        let kept = FramePruner::new(&sizes, dir.path()).prune(frames, 2).unwrap();
        assert!(!kept.contains(&orphan));
        assert!(!orphan.exists());
    }

    #[test]
    fn test_zero_final_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let (frames, sizes) = frames_with_sizes(dir.path(), &[10]);
        assert!(matches!(
            FramePruner::new(&sizes, dir.path()).prune(frames, 0),
            Err(CoreError::Config(_))
        ));
    }

    #[test]
    fn test_jpeg_proxy_reflects_detail() {
        let dir = tempfile::tempdir().unwrap();
        let flat = dir.path().join("flat.png");
        let noisy = dir.path().join("noisy.png");

        RgbImage::from_pixel(320, 180, Rgb([8, 8, 8])).save(&flat).unwrap();
        RgbImage::from_fn(320, 180, |x, y| {
            let v = (x.wrapping_mul(7919) ^ y.wrapping_mul(104_729)) as u8;
            Rgb([v, v.wrapping_mul(3), v.wrapping_add(x as u8)])
        })
        .save(&noisy)
        .unwrap();

        let compressor = JpegProxyCompressor::default();
        let flat_proxy = compressor.compress_for_ranking(&flat, dir.path()).unwrap();
        let noisy_proxy = compressor.compress_for_ranking(&noisy, dir.path()).unwrap();

        assert_eq!(flat_proxy.extension().unwrap(), "jpg");
        let flat_size = fs::metadata(&flat_proxy).unwrap().len();
        let noisy_size = fs::metadata(&noisy_proxy).unwrap().len();
        assert!(noisy_size > flat_size, "{noisy_size} <= {flat_size}");
    }
}
