//! Screenshot generation: geometry, sampling, capture orchestration and pruning.
//!
//! This module organizes the steps of turning a title into a handful of
//! representative screenshots and exposes the session that runs them.

/// Display geometry correction for anamorphic video
pub mod geometry;

/// Capture timestamp planning across segments
pub mod sampling;

/// Proxy-based ranking and removal of low-detail frames
pub mod pruning;

/// Lossless PNG optimisation of kept screenshots
pub mod optimise;

/// Orchestration of a screenshot run
pub mod screenshots;

pub use geometry::{DisplayGeometry, VideoGeometry, resolve_display_geometry};
pub use pruning::{CapturedFrame, Compressor, FramePruner, JpegProxyCompressor};
pub use sampling::{Sample, SamplePlan, plan_samples};
pub use screenshots::ScreenshotSession;
