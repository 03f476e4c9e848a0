//! Release discovery: turns an input path into a [`Title`].
//!
//! Three layouts are recognised:
//! - a video file (mkv, avi, mp4, ts), used as is;
//! - a DVD folder containing `VIDEO_TS`, reduced to its main feature VOBs;
//! - any other folder, reduced to the largest video file at its top level.

use crate::error::{CoreError, CoreResult};
use crate::external::MetadataProvider;
use crate::title::Title;
use crate::utils::{has_extension, is_video_file, largest_file};

use std::path::{Path, PathBuf};

/// Name of the DVD video folder.
pub const VIDEO_TS: &str = "VIDEO_TS";

/// Minimum size of a main feature VOB relative to the largest VOB.
pub const MAIN_VOB_SIZE_RATIO: f64 = 0.9;

/// Discovers the title described by `input`.
///
/// # Arguments
///
/// * `input` - A video file, a DVD folder or a folder holding a video file
/// * `metadata` - Used to pick the primary IFO of a DVD by duration
///
/// # Returns
///
/// * `Ok(Title)` - The discovered title
/// * `Err(CoreError::NoFilesFound)` - If a folder holds no video file
/// * `Err(CoreError::PathError)` - If the path is neither a video file nor a folder,
///   or a DVD has no IFO or VOB files
///
/// # Examples
///
/// ```rust,no_run
/// use rlsinfo_core::discovery::discover_title;
/// use rlsinfo_core::external::MediaInfoProvider;
/// use std::path::Path;
///
/// let provider = MediaInfoProvider::new("mediainfo");
/// match discover_title(Path::new("/releases/Movie.2010.DVD"), &provider) {
///     Ok(title) => println!("{} segment(s)", title.segments().len()),
///     Err(e) => println!("Error finding video files: {}", e),
/// }
/// ```
pub fn discover_title<M: MetadataProvider + ?Sized>(input: &Path, metadata: &M) -> CoreResult<Title> {
    if input.is_file() {
        if is_video_file(input) {
            log::debug!("Input is a single video file: {}", input.display());
            return Ok(Title::single(input));
        }
        return Err(CoreError::PathError(format!(
            "{} is not a supported video file",
            input.display()
        )));
    }

    if !input.is_dir() {
        return Err(CoreError::PathError(format!(
            "{} does not exist or is not a file or directory",
            input.display()
        )));
    }

    let video_ts = input.join(VIDEO_TS);
    if video_ts.is_dir() {
        log::debug!("Input is a DVD: {}", input.display());
        let primary_ifo = find_primary_ifo(&video_ts, metadata)?;
        let vobs = find_main_vobs(&video_ts)?;
        return Title::dvd(input, primary_ifo, vobs);
    }

    let videos: Vec<PathBuf> = list_files(input)?
        .into_iter()
        .filter(|path| is_video_file(path))
        .collect();
    let largest = largest_file(&videos).ok_or(CoreError::NoFilesFound)?;
    log::debug!("Using largest video file in folder: {}", largest.display());
    Ok(Title::single(largest.clone()))
}

/// Picks the IFO with the longest duration. IFOs without a readable duration
/// are skipped; the first IFO (by name) is used when none has one.
pub fn find_primary_ifo<M: MetadataProvider + ?Sized>(video_ts: &Path, metadata: &M) -> CoreResult<PathBuf> {
    let ifos = files_with_extension(video_ts, "ifo")?;
    let first = ifos.first().cloned().ok_or_else(|| {
        CoreError::PathError(format!("No IFO files found in {}", video_ts.display()))
    })?;

    let mut primary = first;
    let mut longest = 0.0_f64;
    for ifo in ifos {
        match metadata.duration(&ifo) {
            Ok(duration) if duration > longest => {
                longest = duration;
                primary = ifo;
            }
            Ok(_) => {}
            Err(e) => log::debug!("Skipping {}: {}", ifo.display(), e),
        }
    }

    log::debug!("Primary IFO: {} ({:.1}s)", primary.display(), longest);
    Ok(primary)
}

/// Returns the VOBs whose size is at least 90% of the largest VOB, sorted by
/// name so they are in playback order.
pub fn find_main_vobs(video_ts: &Path) -> CoreResult<Vec<PathBuf>> {
    let vobs = files_with_extension(video_ts, "vob")?;
    let largest = largest_file(&vobs)
        .ok_or_else(|| CoreError::PathError(format!("No VOB files found in {}", video_ts.display())))?;
    let largest_size = std::fs::metadata(largest)?.len();

    let mut main = Vec::new();
    for vob in &vobs {
        let size = std::fs::metadata(vob)?.len();
        if largest_size == 0 || size as f64 / largest_size as f64 >= MAIN_VOB_SIZE_RATIO {
            main.push(vob.clone());
        }
    }
    main.sort();
    Ok(main)
}

fn list_files(dir: &Path) -> CoreResult<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            path.is_file().then_some(path)
        })
        .collect();
    files.sort();
    Ok(files)
}

fn files_with_extension(dir: &Path, extension: &str) -> CoreResult<Vec<PathBuf>> {
    Ok(list_files(dir)?
        .into_iter()
        .filter(|path| has_extension(path, &[extension]))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::geometry::VideoGeometry;
    use std::collections::HashMap;
    use std::fs;

    struct DurationTable(HashMap<String, f64>);

    impl MetadataProvider for DurationTable {
        fn geometry(&self, path: &Path) -> CoreResult<VideoGeometry> {
            Err(CoreError::MissingTrack {
                track: "Video".to_string(),
                path: path.display().to_string(),
            })
        }

        fn duration(&self, path: &Path) -> CoreResult<f64> {
            let name = path.file_name().unwrap().to_string_lossy().to_string();
            self.0.get(&name).copied().ok_or(CoreError::MissingField {
                field: "Duration".to_string(),
                path: name,
            })
        }
    }

    fn no_durations() -> DurationTable {
        DurationTable(HashMap::new())
    }

    #[test]
    fn test_primary_ifo_is_longest() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["VIDEO_TS.IFO", "VTS_01_0.IFO", "VTS_02_0.IFO"] {
            fs::write(dir.path().join(name), b"ifo").unwrap();
        }
        let table = DurationTable(HashMap::from([
            ("VTS_01_0.IFO".to_string(), 95.0),
            ("VTS_02_0.IFO".to_string(), 5423.1),
        ]));
        let primary = find_primary_ifo(dir.path(), &table).unwrap();
        assert_eq!(primary, dir.path().join("VTS_02_0.IFO"));
    }

    #[test]
    fn test_primary_ifo_falls_back_to_first() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["VTS_02_0.IFO", "VTS_01_0.IFO"] {
            fs::write(dir.path().join(name), b"ifo").unwrap();
        }
        let primary = find_primary_ifo(dir.path(), &no_durations()).unwrap();
        assert_eq!(primary, dir.path().join("VTS_01_0.IFO"));
    }

    #[test]
    fn test_main_vobs_filtered_and_sorted() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("VTS_01_2.VOB"), vec![0u8; 1000]).unwrap();
        fs::write(dir.path().join("VTS_01_1.VOB"), vec![0u8; 950]).unwrap();
        fs::write(dir.path().join("VTS_01_3.VOB"), vec![0u8; 300]).unwrap();
        fs::write(dir.path().join("VTS_01_0.VOB"), vec![0u8; 20]).unwrap();

        let vobs = find_main_vobs(dir.path()).unwrap();
        assert_eq!(
            vobs,
            vec![dir.path().join("VTS_01_1.VOB"), dir.path().join("VTS_01_2.VOB")]
        );
    }

    #[test]
    fn test_no_vobs_is_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(find_main_vobs(dir.path()), Err(CoreError::PathError(_))));
    }

    #[test]
    fn test_unsupported_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("notes.txt");
        fs::write(&file, b"hello").unwrap();
        assert!(matches!(
            discover_title(&file, &no_durations()),
            Err(CoreError::PathError(_))
        ));
    }
}
