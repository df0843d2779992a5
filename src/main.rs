//! media-dl service binary.
//!
//! Wires configuration, the yt-dlp engine, and the download orchestrator
//! together and serves the REST API until a termination signal arrives.

use media_dl::api::start_api_server;
use media_dl::{Config, DownloadOrchestrator, Error, YtDlpEngine};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> media_dl::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "media_dl=info,tower_http=info".into()),
        )
        .init();

    let config = Arc::new(Config::from_env()?);

    tokio::fs::create_dir_all(&config.download.download_dir).await?;
    tracing::info!(
        dir = %config.download.download_dir.display(),
        "Download directory ready"
    );

    let engine = YtDlpEngine::from_config(&config).ok_or_else(|| Error::Config {
        message: "yt-dlp executable not found in PATH".to_string(),
        key: None,
    })?;

    if !config.tools.ffmpeg_path.exists() {
        tracing::warn!(
            path = %config.tools.ffmpeg_path.display(),
            "ffmpeg not found at configured path, download requests will fail"
        );
    }

    let orchestrator = Arc::new(DownloadOrchestrator::new(config.clone(), Arc::new(engine)));

    start_api_server(orchestrator, config).await
}
