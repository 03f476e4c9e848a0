//! Gallery names for hosts that group uploads, derived from the release name.

use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

static SEPARATOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.\s_()\[\]]+").expect("static regex"));
static YEAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(19|20)\d{2}$").expect("static regex"));
static RESOLUTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\d{3,4}[pi]$").expect("static regex"));

/// Builds a gallery name such as `Movie Name (2010) - 1080p`.
///
/// The title is every word before the first year or resolution token. A year
/// in first position is treated as part of the title. Without any recognisable
/// title words the whole name is used.
#[must_use]
pub fn gallery_name(path: &Path) -> String {
    let name = if path.is_dir() || path.extension().is_none() {
        path.file_name()
    } else {
        path.file_stem()
    }
    .map(|n| n.to_string_lossy().to_string())
    .unwrap_or_default();

    let tokens: Vec<&str> = SEPARATOR_RE
        .split(&name)
        .filter(|token| !token.is_empty())
        .collect();

    let mut title = Vec::new();
    let mut year = None;
    let mut resolution = None;
    for (i, token) in tokens.iter().enumerate() {
        let is_year = i > 0 && YEAR_RE.is_match(token);
        let is_resolution = RESOLUTION_RE.is_match(token);

        if is_year && year.is_none() && resolution.is_none() {
            year = Some(*token);
        } else if is_resolution && resolution.is_none() {
            resolution = Some(token.to_lowercase());
        } else if year.is_none() && resolution.is_none() {
            title.push(*token);
        }
    }

    let mut gallery = if title.is_empty() {
        name.clone()
    } else {
        title.join(" ")
    };
    if let Some(year) = year {
        gallery.push_str(&format!(" ({year})"));
    }
    if let Some(resolution) = resolution {
        gallery.push_str(&format!(" - {resolution}"));
    }
    gallery
}
