//! Screenshot timestamp planning across the segments of a title.
//!
//! Samples are spread evenly over a window of the title's total runtime that
//! skips the opening 5% (logos, titles) and everything past 60% (late plot
//! points, credits). A multi-segment title is treated as one continuous
//! timeline: the cursor keeps running across segment boundaries and is rebased
//! onto each following segment.

use crate::error::{CoreError, CoreResult};

/// Fraction of the runtime at which sampling starts.
pub const SAMPLE_WINDOW_START: f64 = 0.05;

/// Fraction of the runtime at which sampling stops.
pub const SAMPLE_WINDOW_END: f64 = 0.6;

/// One planned capture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Index of the segment within the title
    pub segment: usize,
    /// Offset into that segment, in seconds
    pub timestamp: f64,
}

/// Ordered capture plan for a title.
#[derive(Debug, Clone, PartialEq)]
pub struct SamplePlan {
    pub samples: Vec<Sample>,
    /// Distance between consecutive samples on the title timeline
    pub interval: f64,
}

impl SamplePlan {
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Samples that fall into one segment, in plan order.
    pub fn for_segment(&self, segment: usize) -> impl Iterator<Item = &Sample> {
        self.samples.iter().filter(move |s| s.segment == segment)
    }
}

/// Plans `total` capture timestamps over segments with the given durations.
///
/// The interval is floored to whole seconds. A plan with fewer than `total`
/// samples is returned when the segments run out first.
///
/// # Errors
///
/// * `CoreError::Config` if `total` is zero, a duration is negative or not a
///   number, or `total` is so large that the interval rounds down to zero
///
/// # Examples
///
/// ```rust
/// use rlsinfo_core::processing::sampling::plan_samples;
///
/// let plan = plan_samples(&[3600.0], 8).unwrap();
/// let stamps: Vec<f64> = plan.samples.iter().map(|s| s.timestamp.round()).collect();
/// assert_eq!(stamps, vec![180.0, 427.0, 674.0, 921.0, 1168.0, 1415.0, 1662.0, 1909.0]);
/// ```
pub fn plan_samples(durations: &[f64], total: usize) -> CoreResult<SamplePlan> {
    if total == 0 {
        return Err(CoreError::Config(
            "at least one screenshot must be requested".to_string(),
        ));
    }
    if let Some(bad) = durations.iter().find(|d| !d.is_finite() || **d < 0.0) {
        return Err(CoreError::Config(format!("invalid segment duration {bad}")));
    }

    let total_runtime: f64 = durations.iter().sum();
    let min_timestamp = total_runtime * SAMPLE_WINDOW_START;
    let max_timestamp = total_runtime * SAMPLE_WINDOW_END;
    let interval = ((max_timestamp - min_timestamp) / total as f64).floor();

    if interval <= 0.0 {
        return Err(CoreError::Config(format!(
            "{total} screenshots do not fit into a runtime of {total_runtime:.1}s"
        )));
    }

    log::debug!(
        "Sampling {} frames every {}s between {:.1}s and {:.1}s of {:.1}s",
        total,
        interval,
        min_timestamp,
        max_timestamp,
        total_runtime
    );

    let mut samples = Vec::with_capacity(total);
    let mut cursor = min_timestamp;

    for (segment, &duration) in durations.iter().enumerate() {
        while cursor < duration && samples.len() < total {
            samples.push(Sample {
                segment,
                timestamp: cursor,
            });
            cursor += interval;
        }
        if samples.len() == total {
            break;
        }
        cursor -= duration;
    }

    if samples.len() < total {
        log::warn!(
            "Only {} of {} screenshot timestamps could be planned",
            samples.len(),
            total
        );
    }

    Ok(SamplePlan { samples, interval })
}
