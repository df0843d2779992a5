//! Completed artifact retrieval handler.

use crate::api::AppState;
use crate::error::Error;
use axum::{
    body::Body,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use tokio_util::io::ReaderStream;

/// Reject names that could escape the storage directory.
///
/// Serving is strictly by flat filename; separators and parent-directory
/// segments are treated the same as a file that does not exist.
fn is_safe_filename(name: &str) -> bool {
    !name.is_empty()
        && !name.contains('/')
        && !name.contains('\\')
        && !name.contains('\0')
        && name != "."
        && name != ".."
}

/// GET /downloads/{filename} - Stream a completed artifact as an attachment
#[utoipa::path(
    get,
    path = "/downloads/{filename}",
    tag = "files",
    params(
        ("filename" = String, Path, description = "Artifact filename as produced by a download job")
    ),
    responses(
        (status = 200, description = "File contents (attachment)", content_type = "application/octet-stream"),
        (status = 404, description = "File not found")
    )
)]
pub async fn serve_file(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Response {
    if !is_safe_filename(&filename) {
        tracing::warn!(filename, "rejected unsafe filename");
        return Error::FileNotFound.into_response();
    }

    let path = state.config.download.download_dir.join(&filename);

    let file = match tokio::fs::File::open(&path).await {
        Ok(file) => file,
        Err(_) => return Error::FileNotFound.into_response(),
    };

    match file.metadata().await {
        Ok(metadata) if metadata.is_file() => {}
        _ => return Error::FileNotFound.into_response(),
    }

    let body = Body::from_stream(ReaderStream::new(file));
    let disposition = format!("attachment; filename=\"{}\"", filename.replace('"', ""));

    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/octet-stream".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    )
        .into_response()
}
