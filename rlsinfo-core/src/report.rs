//! Plain-text mediainfo report in BBCode `[mediainfo]` blocks.

use crate::config::CoreConfig;
use crate::error::CoreResult;
use crate::external::get_mediainfo_text;
use crate::title::{ReleaseType, Title};
use crate::utils::get_filename_safe;

use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static COMPLETE_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^(Complete name *:).*$").expect("static regex"));

/// Files whose mediainfo goes into the report: the video file, or for a DVD
/// the primary IFO followed by the first main VOB.
#[must_use]
pub fn report_files(title: &Title) -> Vec<PathBuf> {
    match title.release_type() {
        ReleaseType::Single => title.segments().iter().take(1).cloned().collect(),
        ReleaseType::Dvd => {
            let mut files = vec![title.geometry_source().to_path_buf()];
            files.extend(title.segments().first().cloned());
            files
        }
    }
}

/// Wraps one mediainfo text dump in a `[mediainfo]` block.
///
/// The `Complete name` line is reduced to `file_name` so local paths are not
/// published, and Windows line endings are normalised.
#[must_use]
pub fn mediainfo_block(mediainfo: &str, file_name: &str) -> String {
    let normalised = mediainfo.replace("\r\n", "\n");
    let renamed = COMPLETE_NAME_RE.replace_all(&normalised, |caps: &regex::Captures<'_>| {
        format!("{} {}", &caps[1], file_name)
    });
    format!("[mediainfo]\n{}\n[/mediainfo]\n\n", renamed.trim())
}

/// Builds the report for `title`, fetching each file's mediainfo with `fetch`.
pub fn build_report<F>(title: &Title, fetch: F) -> CoreResult<String>
where
    F: Fn(&Path) -> CoreResult<String>,
{
    let mut report = String::new();
    if title.release_type() == ReleaseType::Dvd {
        report.push_str(&format!(
            "[size=4][b]{}[/b][/size]\n\n",
            get_filename_safe(title.root())?
        ));
    }

    for file in report_files(title) {
        let name = get_filename_safe(&file)?;
        log::debug!("Collecting mediainfo of {}", file.display());
        report.push_str(&mediainfo_block(&fetch(&file)?, &name));
    }
    Ok(report)
}

/// Builds the report for `title` using the configured mediainfo binary.
pub fn mediainfo_report(config: &CoreConfig, title: &Title) -> CoreResult<String> {
    build_report(title, |file| get_mediainfo_text(&config.mediainfo_path, file))
}

#[cfg(test)]
mod tests {
    use super::*;

    const MEDIAINFO_TEXT: &str = "General\r\n\
Unique ID                                : 1234\r\n\
Complete name                            : /home/user/downloads/Movie.2010.1080p.mkv\r\n\
Format                                   : Matroska\r\n\
\r\n\
Video\r\n\
Format                                   : AVC\r\n";

    #[test]
    fn test_block_rewrites_complete_name() {
        let block = mediainfo_block(MEDIAINFO_TEXT, "Movie.2010.1080p.mkv");
        assert!(block.starts_with("[mediainfo]\nGeneral\n"));
        assert!(block.ends_with("Format                                   : AVC\n[/mediainfo]\n\n"));
        assert!(block.contains("Complete name                            : Movie.2010.1080p.mkv\n"));
        assert!(!block.contains("/home/user"));
        assert!(!block.contains('\r'));
    }

    #[test]
    fn test_single_report() {
        let title = Title::single("/media/Movie.2010.1080p.mkv");
        let report = build_report(&title, |path| {
            assert_eq!(path, Path::new("/media/Movie.2010.1080p.mkv"));
            Ok("General\nComplete name : /media/Movie.2010.1080p.mkv\n".to_string())
        })
        .unwrap();
        assert_eq!(
            report,
            "[mediainfo]\nGeneral\nComplete name : Movie.2010.1080p.mkv\n[/mediainfo]\n\n"
        );
    }

    #[test]
    fn test_dvd_report_has_header_and_two_blocks() {
        let title = Title::dvd(
            "/media/Some.Movie.1999.DVD",
            "/media/Some.Movie.1999.DVD/VIDEO_TS/VTS_01_0.IFO",
            vec![
                PathBuf::from("/media/Some.Movie.1999.DVD/VIDEO_TS/VTS_01_1.VOB"),
                PathBuf::from("/media/Some.Movie.1999.DVD/VIDEO_TS/VTS_01_2.VOB"),
            ],
        )
        .unwrap();

        let report = build_report(&title, |path| {
            Ok(format!("Complete name : {}\n", path.display()))
        })
        .unwrap();

        assert_eq!(
            report,
            "[size=4][b]Some.Movie.1999.DVD[/b][/size]\n\n\
             [mediainfo]\nComplete name : VTS_01_0.IFO\n[/mediainfo]\n\n\
             [mediainfo]\nComplete name : VTS_01_1.VOB\n[/mediainfo]\n\n"
        );
    }

    #[test]
    fn test_fetch_error_propagates() {
        let title = Title::single("/media/a.mkv");
        let result = build_report(&title, |_| {
            Err(crate::error::CoreError::OperationFailed("boom".to_string()))
        });
        assert!(result.is_err());
    }
}
