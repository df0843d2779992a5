//! Error types for media-dl
//!
//! This module provides error handling for the service, including:
//! - Domain-specific error variants (missing ffmpeg, validation, engine failure)
//! - HTTP status code mapping for API integration
//!
//! Engine failures are deliberately collapsed into a single variant carrying
//! the engine's message: the service does not distinguish network errors,
//! geo-restrictions, unsupported URLs, or merge failures from one another.
//! Every failure is terminal for the request that triggered it.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for media-dl operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for media-dl
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error with context about which setting is invalid
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable error message describing the configuration issue
        message: String,
        /// The configuration key that caused the error (e.g., "PORT")
        key: Option<String>,
    },

    /// The ffmpeg binary is absent at the configured location
    ///
    /// Checked before any download work begins; nothing is attempted when
    /// this fires.
    #[error("FFmpeg not found.")]
    FfmpegMissing {
        /// The location that was checked
        path: PathBuf,
    },

    /// Request payload missing required fields or carrying an invalid value
    #[error("{0}")]
    Validation(String),

    /// Any failure from the external engine, original message forwarded
    #[error("Download failed: {0}")]
    Engine(String),

    /// Requested artifact absent from storage
    #[error("File not found.")]
    FileNotFound,

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// API server error
    #[error("API server error: {0}")]
    ApiServer(String),
}

/// Convert errors to HTTP status codes for API responses
pub trait ToHttpStatus {
    /// Get the HTTP status code for this error
    fn status_code(&self) -> u16;
}

impl ToHttpStatus for Error {
    fn status_code(&self) -> u16 {
        match self {
            // 400 Bad Request - Client error (invalid input)
            Error::Validation(_) => 400,

            // 404 Not Found
            Error::FileNotFound => 404,

            // 500 Internal Server Error - Missing tooling and server-side issues
            Error::Config { .. } => 500,
            Error::FfmpegMissing { .. } => 500,
            Error::Engine(_) => 500,
            Error::Io(_) => 500,
            Error::ApiServer(_) => 500,
        }
    }
}
