// rlsinfo-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "rlsinfo: Release info creator",
    long_about = "Builds mediainfo reports and uploads representative screenshots for a video release."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    /// Optional: Write logs to a timestamped file in this directory instead of stderr
    #[arg(long, global = true, value_name = "LOG_DIR")]
    pub log_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Creates the full release info: mediainfo report plus uploaded screenshots
    Create(CreateArgs),
    /// Generates screenshots only and prints their paths
    Screenshots(ScreenshotArgs),
    /// Prints the mediainfo report only
    Info(InfoArgs),
}

/// Tool paths shared by every command.
#[derive(Args, Debug, Clone)]
pub struct ToolArgs {
    /// ffmpeg binary
    #[arg(long = "ffmpeg", value_name = "PATH", env = "RLSINFO_FFMPEG", default_value = "ffmpeg")]
    pub ffmpeg_path: PathBuf,

    /// mediainfo binary
    #[arg(long = "mediainfo", value_name = "PATH", env = "RLSINFO_MEDIAINFO", default_value = "mediainfo")]
    pub mediainfo_path: PathBuf,

    /// oxipng binary, used with --optimise
    #[arg(long = "oxipng", value_name = "PATH", env = "RLSINFO_OXIPNG", default_value = "oxipng")]
    pub oxipng_path: PathBuf,
}

/// Screenshot generation settings.
#[derive(Args, Debug, Clone)]
pub struct ScreenshotArgs {
    /// Video file, release folder or DVD folder (containing VIDEO_TS)
    #[arg(value_name = "INPUT_PATH")]
    pub input_path: PathBuf,

    /// Directory where screenshots are saved
    #[arg(long, value_name = "IMAGE_DIR", env = "RLSINFO_IMAGE_DIR")]
    pub image_dir: PathBuf,

    /// Optional: Directory for temporary files (defaults to IMAGE_DIR)
    #[arg(long, value_name = "TEMP_DIR")]
    pub temp_dir: Option<PathBuf>,

    /// Number of screenshots to keep
    #[arg(short = 'n', long, value_name = "COUNT", default_value_t = 6,
          value_parser = clap::value_parser!(u16).range(1..))]
    pub count: u16,

    /// Run oxipng over the kept screenshots
    #[arg(long, default_value_t = false)]
    pub optimise: bool,

    #[command(flatten)]
    pub tools: ToolArgs,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    #[command(flatten)]
    pub screenshots: ScreenshotArgs,

    /// Image host: ptpimg, imgbb or hdbimg
    #[arg(long, value_name = "HOST", env = "RLSINFO_IMAGE_HOST", default_value = "ptpimg")]
    pub host: String,

    /// ptpimg API key
    #[arg(long, value_name = "KEY", env = "RLSINFO_PTPIMG_API_KEY", hide_env_values = true)]
    pub ptpimg_api_key: Option<String>,

    /// imgbb API key
    #[arg(long, value_name = "KEY", env = "RLSINFO_IMGBB_API_KEY", hide_env_values = true)]
    pub imgbb_api_key: Option<String>,

    /// hdbimg user name
    #[arg(long, value_name = "USER", env = "RLSINFO_HDBIMG_USERNAME")]
    pub hdbimg_username: Option<String>,

    /// hdbimg passkey
    #[arg(long, value_name = "PASSKEY", env = "RLSINFO_HDBIMG_PASSKEY", hide_env_values = true)]
    pub hdbimg_passkey: Option<String>,

    /// Optional: Write the release info to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Video file, release folder or DVD folder (containing VIDEO_TS)
    #[arg(value_name = "INPUT_PATH")]
    pub input_path: PathBuf,

    /// mediainfo binary
    #[arg(long = "mediainfo", value_name = "PATH", env = "RLSINFO_MEDIAINFO", default_value = "mediainfo")]
    pub mediainfo_path: PathBuf,

    /// Optional: Write the report to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}
