// rlsinfo-core/tests/discovery_tests.rs

mod common;

use common::{FakeMetadata, ntsc_widescreen};
use rlsinfo_core::discovery::discover_title;
use rlsinfo_core::error::CoreError;
use rlsinfo_core::title::ReleaseType;
use std::fs::{self, File};
use std::path::PathBuf;
use tempfile::tempdir;

fn no_metadata() -> FakeMetadata {
    FakeMetadata::new(None, &[])
}

#[test]
fn test_single_video_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let video = dir.path().join("Movie.2010.1080p.MKV");
    File::create(&video)?;

    let title = discover_title(&video, &no_metadata())?;
    assert_eq!(title.release_type(), ReleaseType::Single);
    assert_eq!(title.segments(), &[video.clone()]);
    assert_eq!(title.geometry_source(), video.as_path());

    dir.close()?;
    Ok(())
}

#[test]
fn test_folder_uses_largest_video() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let input_dir = dir.path();

    fs::write(input_dir.join("sample.mkv"), vec![0u8; 100])?;
    fs::write(input_dir.join("feature.mp4"), vec![0u8; 5000])?;
    fs::write(input_dir.join("extras.ts"), vec![0u8; 800])?;
    fs::write(input_dir.join("cover.jpg"), vec![0u8; 90_000])?; // Not a video
    fs::create_dir(input_dir.join("subdir"))?;
    fs::write(input_dir.join("subdir").join("nested.mkv"), vec![0u8; 99_000])?; // Not searched

    let title = discover_title(input_dir, &no_metadata())?;
    assert_eq!(title.release_type(), ReleaseType::Single);
    assert_eq!(title.segments(), &[input_dir.join("feature.mp4")]);

    dir.close()?;
    Ok(())
}

#[test]
fn test_folder_without_videos() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    File::create(dir.path().join("document.txt"))?;
    fs::create_dir(dir.path().join("subdir"))?;

    match discover_title(dir.path(), &no_metadata()) {
        Err(CoreError::NoFilesFound) => {} // Expected error
        other => panic!("Unexpected result: {:?}", other),
    }

    dir.close()?;
    Ok(())
}

#[test]
fn test_dvd_structure() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let root = dir.path().join("Some.Movie.1999.NTSC.DVD");
    let video_ts = root.join("VIDEO_TS");
    fs::create_dir_all(&video_ts)?;

    for name in ["VIDEO_TS.IFO", "VTS_01_0.IFO", "VTS_02_0.IFO"] {
        File::create(video_ts.join(name))?;
    }
    fs::write(video_ts.join("VIDEO_TS.VOB"), vec![0u8; 10])?;
    fs::write(video_ts.join("VTS_01_1.VOB"), vec![0u8; 200])?;
    fs::write(video_ts.join("VTS_02_1.VOB"), vec![0u8; 1000])?;
    fs::write(video_ts.join("VTS_02_2.VOB"), vec![0u8; 1000])?;
    fs::write(video_ts.join("VTS_02_3.VOB"), vec![0u8; 920])?;

    let metadata = FakeMetadata::new(
        Some(ntsc_widescreen()),
        &[
            (video_ts.join("VTS_01_0.IFO").as_path(), 120.0),
            (video_ts.join("VTS_02_0.IFO").as_path(), 5400.0),
        ],
    );

    let title = discover_title(&root, &metadata)?;
    assert_eq!(title.release_type(), ReleaseType::Dvd);
    assert_eq!(title.root(), root.as_path());
    assert_eq!(title.geometry_source(), video_ts.join("VTS_02_0.IFO").as_path());
    let expected: Vec<PathBuf> = ["VTS_02_1.VOB", "VTS_02_2.VOB", "VTS_02_3.VOB"]
        .iter()
        .map(|name| video_ts.join(name))
        .collect();
    assert_eq!(title.segments(), expected.as_slice());

    dir.close()?;
    Ok(())
}

#[test]
fn test_nonexistent_path() {
    let non_existent_path = PathBuf::from("surely_this_does_not_exist_42_integration");
    match discover_title(&non_existent_path, &no_metadata()) {
        Err(CoreError::PathError(_)) => {} // Expected error type
        other => panic!("Unexpected result: {:?}", other),
    }
}
