//! Download job handler.

use super::DownloadResponse;
use crate::api::AppState;
use crate::error::Error;
use crate::types::Choice;
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// POST /download - Run one download job to completion
///
/// The request blocks until the external engine finishes or fails; the
/// response is the completion signal. Preconditions are checked in order:
/// ffmpeg present, required fields present, choice recognized.
#[utoipa::path(
    post,
    path = "/download",
    tag = "downloads",
    request_body = super::DownloadRequest,
    responses(
        (status = 200, description = "Download complete, URL returned", body = super::DownloadResponse),
        (status = 400, description = "Missing or invalid request fields"),
        (status = 500, description = "FFmpeg missing or download failed")
    )
)]
pub async fn start_download(
    State(state): State<AppState>,
    Json(payload): Json<serde_json::Value>,
) -> Response {
    // ffmpeg must be present before any work begins
    let ffmpeg = &state.config.tools.ffmpeg_path;
    if !ffmpeg.exists() {
        tracing::error!(path = %ffmpeg.display(), "ffmpeg binary not found");
        return Error::FfmpegMissing {
            path: ffmpeg.clone(),
        }
        .into_response();
    }

    let url = payload.get("url").and_then(|v| v.as_str());
    let choice_code = payload.get("choice").and_then(|v| v.as_str());

    let (url, choice_code) = match (url, choice_code) {
        (Some(url), Some(choice)) if !url.is_empty() => (url, choice),
        _ => {
            return Error::Validation(
                "Missing 'url' or 'choice' in request body.".to_string(),
            )
            .into_response();
        }
    };

    let choice = match Choice::from_code(choice_code) {
        Some(choice) => choice,
        None => {
            return Error::Validation("Invalid choice. Must be 1, 2, 3, or 4.".to_string())
                .into_response();
        }
    };

    match state.orchestrator.download(url, choice).await {
        Ok(completed) => (
            StatusCode::OK,
            Json(DownloadResponse {
                download_url: completed.download_url,
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, url, "download job failed");
            e.into_response()
        }
    }
}
