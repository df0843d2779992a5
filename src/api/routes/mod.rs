//! Route handlers for the REST API
//!
//! Handlers are organized by domain:
//! - [`download`] — Download job submission
//! - [`files`] — Completed artifact retrieval
//! - [`system`] — Health and OpenAPI

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

mod download;
mod files;
mod system;

// Re-export all handlers so `routes::function_name` continues to work
pub use download::*;
pub use files::*;
pub use system::*;

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for POST /download
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct DownloadRequest {
    /// Source media URL to download from
    pub url: String,
    /// Quality/format choice code: "1" (low video), "2" (medium video),
    /// "3" (high video), "4" (mp3 audio)
    pub choice: String,
}

/// Response body for a completed download job
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct DownloadResponse {
    /// Publicly fetchable URL for the produced file
    pub download_url: String,
}
