//! Core request and plan types
//!
//! The one real policy decision in this service lives here: the mapping from
//! a choice code to the engine configuration (format selector, optional audio
//! post-processing, container override).

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use utoipa::ToSchema;
use uuid::Uuid;

/// Quality/format choice: closed enumeration selecting one of four
/// predefined download/transcode configurations.
///
/// Wire codes are `"1"` through `"4"`; anything else is rejected before a
/// plan is built.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Choice {
    /// "1" — worst available video + best compatible audio, else worst combined
    LowVideo,
    /// "2" — best video capped at 480p + best compatible audio
    MedVideo,
    /// "3" — best available video + best compatible audio
    HighVideo,
    /// "4" — best compatible audio stream only, transcoded to mp3 at 192 kbps
    AudioMp3,
}

impl Choice {
    /// All valid choices, in wire-code order.
    pub const ALL: [Choice; 4] = [
        Choice::LowVideo,
        Choice::MedVideo,
        Choice::HighVideo,
        Choice::AudioMp3,
    ];

    /// Parse a wire code. Returns `None` for anything outside `"1".."4"`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "1" => Some(Choice::LowVideo),
            "2" => Some(Choice::MedVideo),
            "3" => Some(Choice::HighVideo),
            "4" => Some(Choice::AudioMp3),
            _ => None,
        }
    }

    /// The wire code for this choice.
    pub fn code(&self) -> &'static str {
        match self {
            Choice::LowVideo => "1",
            Choice::MedVideo => "2",
            Choice::HighVideo => "3",
            Choice::AudioMp3 => "4",
        }
    }

    /// Format-selection expression handed to the engine.
    pub fn format_selector(&self) -> &'static str {
        match self {
            Choice::LowVideo => "worstvideo[ext=mp4]+bestaudio[ext=m4a]/worst[ext=mp4]",
            Choice::MedVideo => {
                "bestvideo[height<=480][ext=mp4]+bestaudio[ext=m4a]/best[height<=480][ext=mp4]"
            }
            Choice::HighVideo => "bestvideo[ext=mp4]+bestaudio[ext=m4a]/best[ext=mp4]",
            Choice::AudioMp3 => "bestaudio[ext=m4a]",
        }
    }

    /// Output container override for merged video streams.
    ///
    /// `None` for the audio choice, where the container is determined by the
    /// post-processing step instead.
    pub fn merge_output_format(&self) -> Option<&'static str> {
        match self {
            Choice::LowVideo | Choice::MedVideo | Choice::HighVideo => Some("mp4"),
            Choice::AudioMp3 => None,
        }
    }

    /// Audio extraction step applied after stream download, if any.
    pub fn audio_post_processing(&self) -> Option<AudioPostProcessing> {
        match self {
            Choice::AudioMp3 => Some(AudioPostProcessing {
                codec: "mp3",
                quality: "192K",
            }),
            _ => None,
        }
    }
}

/// Audio extraction settings applied by the engine after raw stream download.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AudioPostProcessing {
    /// Target codec (e.g. "mp3")
    pub codec: &'static str,
    /// Target quality/bitrate (e.g. "192K")
    pub quality: &'static str,
}

/// Resolved download configuration for a single job.
///
/// Built deterministically from a [`Choice`]; carries the per-job unique
/// identifier that keeps concurrent jobs from colliding on disk.
#[derive(Clone, Debug)]
pub struct FetchPlan {
    /// The choice the plan was built from
    pub choice: Choice,
    /// Per-job unique identifier embedded in the output filename
    pub job_id: Uuid,
    /// Engine output template: `%(title)s_{job_id}.%(ext)s` under the
    /// storage directory
    pub output_template: String,
}

impl FetchPlan {
    /// Build the plan for one job: fresh v4 identifier, output template
    /// embedding the media title and that identifier.
    pub fn new(choice: Choice, download_dir: &Path) -> Self {
        let job_id = Uuid::new_v4();
        let output_template = download_dir
            .join(format!("%(title)s_{job_id}.%(ext)s"))
            .to_string_lossy()
            .into_owned();

        Self {
            choice,
            job_id,
            output_template,
        }
    }
}

/// A completed job's artifact and its public URL.
#[derive(Clone, Debug)]
pub struct CompletedDownload {
    /// Final on-disk path of the artifact
    pub path: PathBuf,
    /// Publicly fetchable URL for the artifact
    pub download_url: String,
}
