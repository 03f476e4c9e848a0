// ============================================================================
// rlsinfo-core/src/external/ffmpeg_executor.rs
// ============================================================================
//
// FFMPEG EXECUTOR: Single-Frame Capture through ffmpeg
//
// Spawning is abstracted behind FfmpegSpawner so the capture command can be
// inspected in tests without running ffmpeg. FfmpegFrameCapturer builds one
// command per screenshot and blocks until that process exits.

use super::FrameCapturer;
use crate::error::{CoreError, CoreResult, command_failed_error, command_start_error, command_wait_error};
use crate::processing::geometry::DisplayGeometry;

use ffmpeg_sidecar::child::FfmpegChild as SidecarChild;
use ffmpeg_sidecar::command::FfmpegCommand;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;

/// Scene-change threshold passed to ffmpeg's `select` filter. Frames are only
/// emitted once the picture differs from the previous one by this much, which
/// skips over fades and static title cards near the requested timestamp.
pub const SCENE_CHANGE_THRESHOLD: &str = "0.01";

/// Scaler flags used when correcting the display geometry.
const SCALE_FLAGS: &str = "full_chroma_int+full_chroma_inp+accurate_rnd+spline";

// --- FFmpeg Execution Abstraction ---

/// Trait representing an active ffmpeg process instance.
pub trait FfmpegProcess {
    /// Waits for the command to complete and returns its exit status.
    fn wait(&mut self) -> CoreResult<ExitStatus>;
}

/// Trait representing something that can spawn an FfmpegProcess.
pub trait FfmpegSpawner: Sync {
    type Process: FfmpegProcess;
    /// Spawns the ffmpeg command, consuming the command object.
    fn spawn(&self, cmd: FfmpegCommand) -> CoreResult<Self::Process>;
}

// --- Concrete Implementation using ffmpeg-sidecar ---

/// Wrapper around `ffmpeg_sidecar::child::FfmpegChild` implementing `FfmpegProcess`.
pub struct SidecarProcess(SidecarChild);

impl FfmpegProcess for SidecarProcess {
    fn wait(&mut self) -> CoreResult<ExitStatus> {
        self.0
            .wait()
            .map_err(|e| command_wait_error("ffmpeg (sidecar)", e))
    }
}

/// Concrete implementation of `FfmpegSpawner` using `ffmpeg-sidecar`.
#[derive(Debug, Clone, Default)]
pub struct SidecarSpawner;

impl FfmpegSpawner for SidecarSpawner {
    type Process = SidecarProcess;

    fn spawn(&self, mut cmd: FfmpegCommand) -> CoreResult<Self::Process> {
        cmd.spawn()
            .map(SidecarProcess)
            .map_err(|e| command_start_error("ffmpeg (sidecar)", e))
    }
}

// --- Screenshot Capture ---

/// Builds the `-vf` filter chain: scene-change selection, then scaling to
/// the display geometry.
#[must_use]
pub fn capture_filter(geometry: DisplayGeometry) -> String {
    format!(
        "select=gt(scene\\,{}),scale={}:flags={}",
        SCENE_CHANGE_THRESHOLD,
        geometry.scale_arg(),
        SCALE_FLAGS
    )
}

/// Builds the ffmpeg command that writes one RGB PNG frame found at or after
/// `timestamp` seconds into `output`. Existing files are never overwritten.
pub fn build_capture_command(
    ffmpeg_path: &Path,
    input: &Path,
    timestamp: f64,
    geometry: DisplayGeometry,
    output: &Path,
) -> FfmpegCommand {
    let mut cmd = FfmpegCommand::new_with_path(ffmpeg_path);
    cmd.hide_banner();
    cmd.args(["-loglevel", "panic", "-nostdin", "-n"]);

    // Input seeking: jump before decoding
    let seek = format!("{timestamp:.3}");
    cmd.args(["-ss", seek.as_str()]);
    cmd.input(input);

    let filter = capture_filter(geometry);
    cmd.args(["-vf", filter.as_str()]);
    cmd.args(["-pix_fmt", "rgb24", "-r", "1", "-frames:v", "1"]);
    cmd.output(output);
    cmd
}

/// `FrameCapturer` that runs ffmpeg once per screenshot.
#[derive(Debug, Clone)]
pub struct FfmpegFrameCapturer<S: FfmpegSpawner = SidecarSpawner> {
    spawner: S,
    ffmpeg_path: PathBuf,
}

impl FfmpegFrameCapturer<SidecarSpawner> {
    pub fn new(ffmpeg_path: impl Into<PathBuf>) -> Self {
        Self::with_spawner(SidecarSpawner, ffmpeg_path)
    }
}

impl<S: FfmpegSpawner> FfmpegFrameCapturer<S> {
    pub fn with_spawner(spawner: S, ffmpeg_path: impl Into<PathBuf>) -> Self {
        Self {
            spawner,
            ffmpeg_path: ffmpeg_path.into(),
        }
    }
}

impl<S: FfmpegSpawner> FrameCapturer for FfmpegFrameCapturer<S> {
    fn capture(
        &self,
        input: &Path,
        timestamp: f64,
        geometry: DisplayGeometry,
        output: &Path,
    ) -> CoreResult<()> {
        let cmd = build_capture_command(&self.ffmpeg_path, input, timestamp, geometry, output);
        let args: Vec<String> = cmd
            .get_args()
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect();
        log::debug!("Executing command: {} {}", self.ffmpeg_path.display(), args.join(" "));

        let status = self.spawner.spawn(cmd)?.wait()?;
        if !status.success() {
            return Err(command_failed_error(
                "ffmpeg (screenshot)",
                status,
                format!("capture at {timestamp:.3}s of {} failed", input.display()),
            ));
        }
        if !output.is_file() {
            return Err(CoreError::CaptureFailed(format!(
                "ffmpeg produced no frame at {timestamp:.3}s of {}",
                input.display()
            )));
        }
        Ok(())
    }
}
