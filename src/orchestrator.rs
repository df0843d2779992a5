//! Download orchestration
//!
//! One job in, one artifact and one public URL out. The orchestrator owns
//! the storage directory, the per-job identifier, the plan built from the
//! requested choice, and the filename finalization that the engine's own
//! post-processing can invalidate.

use crate::config::Config;
use crate::engine::MediaEngine;
use crate::error::{Error, Result};
use crate::types::{Choice, CompletedDownload, FetchPlan};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Drives the external engine to produce a single output file and a
/// publicly fetchable URL referencing it.
///
/// Holds no mutable state: concurrent jobs are isolated purely by the
/// uniqueness of the identifiers embedded in their output filenames.
pub struct DownloadOrchestrator {
    config: Arc<Config>,
    engine: Arc<dyn MediaEngine>,
}

impl DownloadOrchestrator {
    /// Create a new orchestrator over the given engine.
    pub fn new(config: Arc<Config>, engine: Arc<dyn MediaEngine>) -> Self {
        Self { config, engine }
    }

    /// Run one download job to completion.
    ///
    /// Ensures the storage directory exists, builds the plan for `choice`,
    /// invokes the engine (the call completes only when the engine finishes
    /// or fails), locates the produced artifact, applies the `.mp3`
    /// finalization rule for the audio choice, and builds the download URL.
    pub async fn download(&self, source_url: &str, choice: Choice) -> Result<CompletedDownload> {
        let dir = &self.config.download.download_dir;
        tokio::fs::create_dir_all(dir).await?;

        let plan = FetchPlan::new(choice, dir);

        tracing::info!(
            engine = self.engine.name(),
            choice = choice.code(),
            job_id = %plan.job_id,
            "starting download job"
        );

        self.engine.fetch(source_url, &plan).await?;

        let reported = self.locate_artifact(&plan).await?;
        let path = self.finalize_filename(reported, choice).await?;
        let download_url = self.public_url(&path)?;

        tracing::info!(
            job_id = %plan.job_id,
            path = %path.display(),
            "download job complete"
        );

        Ok(CompletedDownload { path, download_url })
    }

    /// Find the artifact whose filename embeds the plan's job identifier.
    ///
    /// The engine names the file itself (the title component is only known
    /// after extraction), so the identifier is the one part of the name this
    /// side controls.
    async fn locate_artifact(&self, plan: &FetchPlan) -> Result<PathBuf> {
        let marker = format!("_{}", plan.job_id);
        let dir = &self.config.download.download_dir;

        let mut entries = tokio::fs::read_dir(dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            let name = entry.file_name();
            if name.to_string_lossy().contains(&marker) {
                return Ok(entry.path());
            }
        }

        Err(Error::Engine(format!(
            "engine reported success but no output file exists for job {}",
            plan.job_id
        )))
    }

    /// Force the `.mp3` extension for audio jobs.
    ///
    /// The audio post-processing step changes the container after the engine
    /// computes its own filename, so the reported name cannot be trusted for
    /// this case. Video jobs pass through untouched.
    async fn finalize_filename(&self, path: PathBuf, choice: Choice) -> Result<PathBuf> {
        if choice != Choice::AudioMp3 {
            return Ok(path);
        }
        if path.extension().and_then(|e| e.to_str()) == Some("mp3") {
            return Ok(path);
        }

        let mp3_path = path.with_extension("mp3");
        if tokio::fs::try_exists(&mp3_path).await? {
            // Post-processor already wrote the transcoded file; the located
            // entry was the intermediate download.
            return Ok(mp3_path);
        }

        tokio::fs::rename(&path, &mp3_path).await?;
        Ok(mp3_path)
    }

    /// Build the public download URL for an artifact.
    ///
    /// Takes only the filename's base component, percent-encodes it, and
    /// appends it to the configured public base URL.
    fn public_url(&self, path: &Path) -> Result<String> {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| Error::Engine("artifact filename is not valid UTF-8".to_string()))?;

        let base = &self.config.download.public_base_url;
        let separator = if base.ends_with('/') { "" } else { "/" };

        Ok(format!("{base}{separator}{}", urlencoding::encode(name)))
    }
}
