//! The release being screenshotted and the files that make up its playback.

use crate::error::{CoreError, CoreResult};
use crate::processing::geometry::VideoGeometry;

use std::path::{Path, PathBuf};

/// Kind of release a title was discovered from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseType {
    /// One standalone video file
    Single,
    /// A `VIDEO_TS` structure whose main feature spans several VOB files
    Dvd,
}

impl std::fmt::Display for ReleaseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Single => write!(f, "single file"),
            Self::Dvd => write!(f, "DVD"),
        }
    }
}

/// A logical video release.
///
/// Always holds at least one segment. For a DVD the geometry source is the
/// primary IFO, which describes the picture of every main VOB.
#[derive(Debug, Clone, PartialEq)]
pub struct Title {
    release_type: ReleaseType,
    root: PathBuf,
    segments: Vec<PathBuf>,
    geometry_source: PathBuf,
    geometry: Option<VideoGeometry>,
}

impl Title {
    /// A title made of one video file, which is also its geometry source.
    pub fn single(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            release_type: ReleaseType::Single,
            root: path.clone(),
            segments: vec![path.clone()],
            geometry_source: path,
            geometry: None,
        }
    }

    /// A DVD title rooted at the folder containing `VIDEO_TS`.
    ///
    /// `vobs` must be in playback order and non-empty.
    pub fn dvd(root: impl Into<PathBuf>, primary_ifo: impl Into<PathBuf>, vobs: Vec<PathBuf>) -> CoreResult<Self> {
        let root = root.into();
        if vobs.is_empty() {
            return Err(CoreError::PathError(format!(
                "No VOB files found in {}",
                root.display()
            )));
        }
        Ok(Self {
            release_type: ReleaseType::Dvd,
            root,
            segments: vobs,
            geometry_source: primary_ifo.into(),
            geometry: None,
        })
    }

    /// Attaches already known geometry of the geometry source so it is not
    /// fetched again.
    #[must_use]
    pub fn with_geometry(mut self, geometry: VideoGeometry) -> Self {
        self.geometry = Some(geometry);
        self
    }

    pub fn release_type(&self) -> ReleaseType {
        self.release_type
    }

    /// The path the title was discovered from: the video file or the DVD folder.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Segment files in playback order.
    pub fn segments(&self) -> &[PathBuf] {
        &self.segments
    }

    pub fn geometry_source(&self) -> &Path {
        &self.geometry_source
    }

    pub fn cached_geometry(&self) -> Option<&VideoGeometry> {
        self.geometry.as_ref()
    }
}

/// One physical file of a title with its playback duration.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub path: PathBuf,
    pub duration_secs: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_title() {
        let title = Title::single("/media/Movie.2010.1080p.mkv");
        assert_eq!(title.release_type(), ReleaseType::Single);
        assert_eq!(title.segments(), &[PathBuf::from("/media/Movie.2010.1080p.mkv")]);
        assert_eq!(title.geometry_source(), Path::new("/media/Movie.2010.1080p.mkv"));
        assert!(title.cached_geometry().is_none());
    }

    #[test]
    fn test_dvd_title_requires_vobs() {
        let result = Title::dvd("/dvd", "/dvd/VIDEO_TS/VTS_01_0.IFO", Vec::new());
        assert!(matches!(result, Err(CoreError::PathError(_))));

        let vobs = vec![
            PathBuf::from("/dvd/VIDEO_TS/VTS_01_1.VOB"),
            PathBuf::from("/dvd/VIDEO_TS/VTS_01_2.VOB"),
        ];
        let title = Title::dvd("/dvd", "/dvd/VIDEO_TS/VTS_01_0.IFO", vobs.clone()).unwrap();
        assert_eq!(title.release_type(), ReleaseType::Dvd);
        assert_eq!(title.segments(), vobs.as_slice());
        assert_eq!(title.root(), Path::new("/dvd"));
    }
}
