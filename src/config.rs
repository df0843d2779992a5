//! Configuration types for media-dl

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;
use utoipa::ToSchema;

/// Storage and URL configuration
///
/// Groups settings related to where artifacts land on disk and how their
/// public URLs are built. Used as a nested sub-config within [`Config`].
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct DownloadConfig {
    /// Directory where completed artifacts are stored (default: "./downloads")
    #[serde(default = "default_download_dir")]
    pub download_dir: PathBuf,

    /// Public base URL prefix used to build download URLs
    /// (default: "http://localhost:5000/downloads/")
    ///
    /// The artifact's percent-encoded filename is appended to this prefix.
    #[serde(default = "default_public_base_url")]
    pub public_base_url: String,
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            download_dir: default_download_dir(),
            public_base_url: default_public_base_url(),
        }
    }
}

/// External tool paths (ffmpeg, yt-dlp)
///
/// Used as a nested sub-config within [`Config`].
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ToolsConfig {
    /// Path to the ffmpeg executable (default: "./fm/bin/ffmpeg")
    ///
    /// Checked for existence at request time; a missing binary fails the
    /// request before any download is attempted.
    #[serde(default = "default_ffmpeg_path")]
    pub ffmpeg_path: PathBuf,

    /// Path to the yt-dlp executable (searched in PATH if None)
    #[serde(default)]
    pub ytdlp_path: Option<PathBuf>,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            ffmpeg_path: default_ffmpeg_path(),
            ytdlp_path: None,
        }
    }
}

/// API server configuration
///
/// Used as a nested sub-config within [`Config`].
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiConfig {
    /// Address to bind the HTTP server to (default: "0.0.0.0:5000")
    #[serde(default = "default_bind_address")]
    pub bind_address: SocketAddr,

    /// Enable CORS handling (default: true)
    #[serde(default = "default_true")]
    pub cors_enabled: bool,

    /// Allowed CORS origins, "*" for any (default: ["*"])
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,

    /// Serve Swagger UI at /swagger-ui (default: true)
    #[serde(default = "default_true")]
    pub swagger_ui: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            cors_enabled: true,
            cors_origins: default_cors_origins(),
            swagger_ui: true,
        }
    }
}

/// Main configuration for the media-dl service
///
/// Constructed once at process start and passed into the request handlers and
/// the download orchestrator. Fields are organized into logical sub-configs:
/// - [`download`](DownloadConfig) — storage directory, public base URL
/// - [`tools`](ToolsConfig) — external binary locations
/// - [`api`](ApiConfig) — bind address, CORS, Swagger UI
///
/// All sub-config fields are flattened for serialization, so the JSON format
/// stays flat (no nesting).
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct Config {
    /// Storage and URL settings
    #[serde(flatten)]
    pub download: DownloadConfig,

    /// External tool locations
    #[serde(flatten)]
    pub tools: ToolsConfig,

    /// API server settings
    #[serde(flatten)]
    pub api: ApiConfig,
}

impl Config {
    /// Build a configuration from the process environment.
    ///
    /// Only `PORT` is consulted (default 5000); everything else uses the
    /// field defaults. Returns a configuration error if `PORT` is set but
    /// not a valid port number.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.api.bind_address = bind_address_from_port(std::env::var("PORT").ok())?;
        Ok(config)
    }
}

/// Resolve the bind address from an optional `PORT` value.
fn bind_address_from_port(port: Option<String>) -> Result<SocketAddr> {
    let port: u16 = match port {
        Some(raw) => raw.parse().map_err(|_| Error::Config {
            message: format!("invalid PORT value: {raw}"),
            key: Some("PORT".to_string()),
        })?,
        None => 5000,
    };
    Ok(SocketAddr::from(([0, 0, 0, 0], port)))
}

fn default_download_dir() -> PathBuf {
    PathBuf::from("./downloads")
}

fn default_public_base_url() -> String {
    "http://localhost:5000/downloads/".to_string()
}

fn default_ffmpeg_path() -> PathBuf {
    PathBuf::from("./fm/bin/ffmpeg")
}

fn default_bind_address() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 5000))
}

fn default_true() -> bool {
    true
}

fn default_cors_origins() -> Vec<String> {
    vec!["*".to_string()]
}

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.download.download_dir, PathBuf::from("./downloads"));
        assert_eq!(
            config.download.public_base_url,
            "http://localhost:5000/downloads/"
        );
        assert_eq!(config.tools.ffmpeg_path, PathBuf::from("./fm/bin/ffmpeg"));
        assert_eq!(config.tools.ytdlp_path, None);
        assert_eq!(config.api.bind_address, "0.0.0.0:5000".parse().unwrap());
        assert!(config.api.cors_enabled);
        assert_eq!(config.api.cors_origins, vec!["*".to_string()]);
        assert!(config.api.swagger_ui);
    }

    #[test]
    fn test_bind_address_from_port() {
        assert_eq!(
            bind_address_from_port(None).unwrap(),
            "0.0.0.0:5000".parse::<SocketAddr>().unwrap()
        );
        assert_eq!(
            bind_address_from_port(Some("8080".to_string())).unwrap(),
            "0.0.0.0:8080".parse::<SocketAddr>().unwrap()
        );
    }

    #[test]
    fn test_bind_address_from_invalid_port() {
        let err = bind_address_from_port(Some("not-a-port".to_string())).unwrap_err();
        match err {
            Error::Config { key, .. } => assert_eq!(key.as_deref(), Some("PORT")),
            other => panic!("expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_json_uses_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config.download.download_dir, PathBuf::from("./downloads"));
        assert!(config.api.cors_enabled);
    }

    #[test]
    fn test_config_serde_round_trip() {
        let mut original = Config::default();
        original.download.download_dir = PathBuf::from("/srv/media");
        original.download.public_base_url = "https://media.example.com/downloads/".to_string();
        original.tools.ffmpeg_path = PathBuf::from("/usr/bin/ffmpeg");
        original.api.bind_address = "127.0.0.1:9000".parse().unwrap();
        original.api.swagger_ui = false;

        let json = serde_json::to_string(&original).unwrap();
        let restored: Config = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.download.download_dir, original.download.download_dir);
        assert_eq!(
            restored.download.public_base_url,
            original.download.public_base_url,
            "public_base_url must survive round-trip"
        );
        assert_eq!(restored.tools.ffmpeg_path, original.tools.ffmpeg_path);
        assert_eq!(restored.api.bind_address, original.api.bind_address);
        assert_eq!(restored.api.swagger_ui, original.api.swagger_ui);
    }

    #[test]
    fn test_flattened_serialization_stays_flat() {
        let config = Config::default();
        let value = serde_json::to_value(&config).unwrap();

        // Sub-configs are flattened; their fields live at the top level
        assert!(value.get("download_dir").is_some());
        assert!(value.get("ffmpeg_path").is_some());
        assert!(value.get("bind_address").is_some());
        assert!(value.get("download").is_none());
    }
}
