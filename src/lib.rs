//! # media-dl
//!
//! HTTP service that turns a video URL and a quality choice into a
//! downloadable media file. The heavy lifting (stream resolution, download,
//! merging, transcoding) is delegated to the external `yt-dlp` and `ffmpeg`
//! binaries; this crate is the orchestration layer around them.
//!
//! ## Design Philosophy
//!
//! media-dl is designed to be:
//! - **Thin** - One job per request, no queue, no job state; the HTTP
//!   response is the completion signal
//! - **Explicit** - Configuration is built once at startup and passed down,
//!   never read from ambient globals
//! - **Substitutable** - The external engine sits behind the [`MediaEngine`]
//!   trait so tests can script it
//!
//! ## Quick Start
//!
//! ```no_run
//! use media_dl::{Config, DownloadOrchestrator, YtDlpEngine};
//! use media_dl::api::start_api_server;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Arc::new(Config::from_env()?);
//!
//!     let engine = YtDlpEngine::from_config(&config)
//!         .ok_or("yt-dlp not found in PATH")?;
//!     let orchestrator = Arc::new(DownloadOrchestrator::new(
//!         config.clone(),
//!         Arc::new(engine),
//!     ));
//!
//!     // Serve until SIGTERM/SIGINT
//!     start_api_server(orchestrator, config).await?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// REST API module
pub mod api;
/// Configuration types
pub mod config;
/// External media engine seam (yt-dlp)
pub mod engine;
/// Error types
pub mod error;
/// Download orchestration
pub mod orchestrator;
/// Core request and plan types
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export commonly used types
pub use config::{ApiConfig, Config, DownloadConfig, ToolsConfig};
pub use engine::{MediaEngine, YtDlpEngine};
pub use error::{Error, Result, ToHttpStatus};
pub use orchestrator::DownloadOrchestrator;
pub use types::{Choice, CompletedDownload, FetchPlan};

/// Wait for a termination signal.
///
/// - **Unix:** listens for SIGTERM and SIGINT, with fallbacks if signal
///   registration fails.
/// - **Windows/other:** listens for Ctrl+C via `tokio::signal::ctrl_c()`.
///
/// Used by [`api::start_api_server`] to drive axum's graceful shutdown.
#[cfg(unix)]
pub async fn wait_for_signal() {
    use tokio::signal::unix::{SignalKind, signal};

    // Set up signal handlers - these may fail in restricted environments (containers, tests)
    let sigterm_result = signal(SignalKind::terminate());
    let sigint_result = signal(SignalKind::interrupt());

    match (sigterm_result, sigint_result) {
        (Ok(mut sigterm), Ok(mut sigint)) => {
            tokio::select! {
                _ = sigterm.recv() => {
                    tracing::info!("Received SIGTERM signal");
                }
                _ = sigint.recv() => {
                    tracing::info!("Received SIGINT signal (Ctrl+C)");
                }
            }
        }
        (Err(e), _) => {
            tracing::warn!(error = %e, "Could not register SIGTERM handler, waiting for SIGINT only");
            if let Ok(mut sigint) = signal(SignalKind::interrupt()) {
                sigint.recv().await;
                tracing::info!("Received SIGINT signal (Ctrl+C)");
            } else {
                tracing::error!("Could not register any signal handlers, using ctrl_c fallback");
                tokio::signal::ctrl_c().await.ok();
            }
        }
        (_, Err(e)) => {
            tracing::warn!(error = %e, "Could not register SIGINT handler, waiting for SIGTERM only");
            if let Ok(mut sigterm) = signal(SignalKind::terminate()) {
                sigterm.recv().await;
                tracing::info!("Received SIGTERM signal");
            } else {
                tracing::error!("Could not register any signal handlers, using ctrl_c fallback");
                tokio::signal::ctrl_c().await.ok();
            }
        }
    }
}

/// Wait for a termination signal (non-Unix fallback).
#[cfg(not(unix))]
pub async fn wait_for_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => {
            tracing::info!("Received Ctrl+C signal");
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C signal");
        }
    }
}
