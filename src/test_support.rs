//! Shared test helpers: a scriptable engine double and service fixtures.

// unwrap/expect are acceptable in test support for concise failure-on-error
#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::engine::MediaEngine;
use crate::error::{Error, Result};
use crate::types::FetchPlan;
use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// What the scripted engine should do when invoked.
enum Script {
    /// Write `{title}_{job_id}.{ext}` under the plan's directory
    Produce { title: String, ext: String },
    /// Succeed without writing anything
    WriteNothing,
    /// Fail with the given message
    Fail { message: String },
}

/// Engine double that follows a fixed script instead of shelling out.
pub(crate) struct ScriptedEngine {
    script: Script,
    calls: AtomicUsize,
}

impl ScriptedEngine {
    /// Engine that "downloads" a file with the given title and extension.
    pub(crate) fn succeeding(title: &str, ext: &str) -> Self {
        Self {
            script: Script::Produce {
                title: title.to_string(),
                ext: ext.to_string(),
            },
            calls: AtomicUsize::new(0),
        }
    }

    /// Engine that exits successfully without producing output.
    pub(crate) fn writing_nothing() -> Self {
        Self {
            script: Script::WriteNothing,
            calls: AtomicUsize::new(0),
        }
    }

    /// Engine that fails every job with the given message.
    pub(crate) fn failing(message: &str) -> Self {
        Self {
            script: Script::Fail {
                message: message.to_string(),
            },
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of times fetch() has been invoked.
    pub(crate) fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MediaEngine for ScriptedEngine {
    async fn fetch(&self, _source_url: &str, plan: &FetchPlan) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        match &self.script {
            Script::Produce { title, ext } => {
                // Expand the template the way the real engine would
                let dir = Path::new(&plan.output_template)
                    .parent()
                    .map(Path::to_path_buf)
                    .unwrap_or_default();
                let name = format!("{title}_{}.{ext}", plan.job_id);
                tokio::fs::write(dir.join(name), b"media bytes").await?;
                Ok(())
            }
            Script::WriteNothing => Ok(()),
            Script::Fail { message } => Err(Error::Engine(message.clone())),
        }
    }

    fn name(&self) -> &'static str {
        "scripted"
    }
}

/// Build a router plus config backed by a temp storage dir and the given
/// engine, for oneshot-style API tests. `configure` can override config
/// fields before the router is built.
pub(crate) fn create_test_router_with(
    engine: Arc<ScriptedEngine>,
    configure: impl FnOnce(&mut crate::Config),
) -> (axum::Router, tempfile::TempDir, Arc<crate::Config>) {
    let temp_dir = tempfile::tempdir().unwrap();

    let mut config = crate::Config::default();
    config.download.download_dir = temp_dir.path().join("downloads");
    config.download.public_base_url = "/downloads/".to_string();
    // A file that exists stands in for the ffmpeg binary
    config.tools.ffmpeg_path = temp_dir.path().join("ffmpeg");
    std::fs::create_dir_all(&config.download.download_dir).unwrap();
    std::fs::write(&config.tools.ffmpeg_path, b"").unwrap();

    configure(&mut config);

    let config = Arc::new(config);
    let orchestrator = Arc::new(crate::DownloadOrchestrator::new(config.clone(), engine));
    let router = crate::api::create_router(orchestrator, config.clone());

    (router, temp_dir, config)
}

/// Shorthand for [`create_test_router_with`] and an untouched config.
pub(crate) fn create_test_router(
    engine: Arc<ScriptedEngine>,
) -> (axum::Router, tempfile::TempDir, Arc<crate::Config>) {
    create_test_router_with(engine, |_| {})
}
