//! Display geometry correction for non-square pixels.
//!
//! Codecs report the stored pixel grid, which for anamorphic sources (DVDs,
//! some broadcast captures) is not the aspect ratio the picture is meant to be
//! shown at. Screenshots are scaled to the corrected geometry so they are not
//! visually squashed.

use crate::error::{CoreError, CoreResult};

/// Raw video track geometry as reported by the metadata provider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VideoGeometry {
    /// Stored pixel width
    pub width: u32,
    /// Stored pixel height
    pub height: u32,
    /// Pixel aspect ratio (1.0 for square pixels)
    pub pixel_aspect_ratio: f64,
    /// Display aspect ratio as a decimal (1.778 for 16:9)
    pub display_aspect_ratio: f64,
}

/// Aspect-ratio corrected frame size used for every screenshot of a title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayGeometry {
    pub width: u32,
    pub height: u32,
}

impl DisplayGeometry {
    /// Formats the geometry as an ffmpeg `scale` size, e.g. `853:480`.
    #[must_use]
    pub fn scale_arg(&self) -> String {
        format!("{}:{}", self.width, self.height)
    }
}

impl std::fmt::Display for DisplayGeometry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Computes the display geometry for a video track.
///
/// Square pixels keep the stored size. Otherwise the axis that is too small for
/// the display aspect ratio grows; neither axis ever shrinks below its stored
/// pixel count.
///
/// # Examples
///
/// ```rust
/// use rlsinfo_core::processing::geometry::{resolve_display_geometry, DisplayGeometry, VideoGeometry};
///
/// let ntsc_dvd = VideoGeometry {
///     width: 720,
///     height: 480,
///     pixel_aspect_ratio: 1.333,
///     display_aspect_ratio: 1.777,
/// };
/// let display = resolve_display_geometry(&ntsc_dvd).unwrap();
/// assert_eq!(display, DisplayGeometry { width: 853, height: 480 });
/// ```
pub fn resolve_display_geometry(geometry: &VideoGeometry) -> CoreResult<DisplayGeometry> {
    let VideoGeometry {
        width,
        height,
        pixel_aspect_ratio: par,
        display_aspect_ratio: dar,
    } = *geometry;

    if width == 0 || height == 0 {
        return Err(CoreError::InvalidGeometry(format!(
            "zero pixel dimension {width}x{height}"
        )));
    }
    if !par.is_finite() || par <= 0.0 {
        return Err(CoreError::InvalidGeometry(format!(
            "pixel aspect ratio {par} is not a positive number"
        )));
    }

    if (par - 1.0).abs() < f64::EPSILON {
        return Ok(DisplayGeometry { width, height });
    }

    if !dar.is_finite() || dar <= 0.0 {
        return Err(CoreError::InvalidGeometry(format!(
            "display aspect ratio {dar} is not a positive number"
        )));
    }

    let candidate_width = (f64::from(height) * dar).round() as u32;
    let display = if candidate_width >= width {
        DisplayGeometry {
            width: candidate_width,
            height,
        }
    } else {
        DisplayGeometry {
            width,
            height: (f64::from(width) / dar).round() as u32,
        }
    };

    log::debug!(
        "Display geometry {} (stored {}x{}, PAR {:.3}, DAR {:.3})",
        display,
        width,
        height,
        par,
        dar
    );
    Ok(display)
}
