//! yt-dlp CLI engine
//!
//! Spawns the yt-dlp binary with a per-choice argument list and waits for it
//! to exit. Any failure is collapsed into a single engine error carrying the
//! most relevant stderr line.

use crate::config::Config;
use crate::engine::MediaEngine;
use crate::error::{Error, Result};
use crate::types::FetchPlan;
use async_trait::async_trait;
use std::ffi::OsString;
use std::path::PathBuf;
use tokio::process::Command;

/// Engine implementation backed by the yt-dlp command-line binary.
pub struct YtDlpEngine {
    /// Path to the yt-dlp binary
    binary_path: PathBuf,
    /// Path to the ffmpeg binary, handed to yt-dlp via --ffmpeg-location
    ffmpeg_path: PathBuf,
}

impl YtDlpEngine {
    /// Create an engine with explicit binary locations.
    pub fn new(binary_path: PathBuf, ffmpeg_path: PathBuf) -> Self {
        Self {
            binary_path,
            ffmpeg_path,
        }
    }

    /// Attempt to find yt-dlp in PATH.
    ///
    /// Uses the `which` crate to search the system PATH. Returns `None` if
    /// the binary is not found.
    pub fn from_path(ffmpeg_path: PathBuf) -> Option<Self> {
        which::which("yt-dlp")
            .ok()
            .map(|path| Self::new(path, ffmpeg_path))
    }

    /// Build an engine from the service configuration.
    ///
    /// Prefers an explicitly configured yt-dlp path, falling back to a PATH
    /// search. The ffmpeg location is taken from the configuration verbatim;
    /// its existence is checked per request, not here.
    pub fn from_config(config: &Config) -> Option<Self> {
        match &config.tools.ytdlp_path {
            Some(path) => Some(Self::new(path.clone(), config.tools.ffmpeg_path.clone())),
            None => Self::from_path(config.tools.ffmpeg_path.clone()),
        }
    }

    /// Build the yt-dlp argument list for one job.
    fn build_args(&self, source_url: &str, plan: &FetchPlan) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![
            "-o".into(),
            plan.output_template.clone().into(),
            "--no-playlist".into(),
            "--ffmpeg-location".into(),
            self.ffmpeg_path.as_os_str().to_os_string(),
            "-f".into(),
            plan.choice.format_selector().into(),
        ];

        if let Some(container) = plan.choice.merge_output_format() {
            args.push("--merge-output-format".into());
            args.push(container.into());
        }

        if let Some(pp) = plan.choice.audio_post_processing() {
            args.push("--extract-audio".into());
            args.push("--audio-format".into());
            args.push(pp.codec.into());
            args.push("--audio-quality".into());
            args.push(pp.quality.into());
        }

        args.push(source_url.into());
        args
    }
}

#[async_trait]
impl MediaEngine for YtDlpEngine {
    async fn fetch(&self, source_url: &str, plan: &FetchPlan) -> Result<()> {
        let args = self.build_args(source_url, plan);

        tracing::debug!(
            binary = %self.binary_path.display(),
            job_id = %plan.job_id,
            "invoking yt-dlp"
        );

        let output = Command::new(&self.binary_path)
            .args(&args)
            .output()
            .await
            .map_err(|e| Error::Engine(format!("failed to execute yt-dlp: {e}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::Engine(failure_message(&stderr, &output.status)));
        }

        Ok(())
    }

    fn name(&self) -> &'static str {
        "yt-dlp"
    }
}

/// Pick the most relevant failure message out of yt-dlp's stderr.
///
/// yt-dlp prints its diagnostic lines prefixed with "ERROR:"; the last one is
/// the terminal failure. Falls back to the last non-empty stderr line, then
/// to the exit status.
fn failure_message(stderr: &str, status: &std::process::ExitStatus) -> String {
    let last_error_line = stderr
        .lines()
        .rev()
        .find(|line| line.trim_start().starts_with("ERROR:"));

    if let Some(line) = last_error_line {
        return line.trim().to_string();
    }

    match stderr.lines().rev().find(|line| !line.trim().is_empty()) {
        Some(line) => line.trim().to_string(),
        None => format!("yt-dlp exited with {status}"),
    }
}
