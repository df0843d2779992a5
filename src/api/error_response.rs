//! HTTP error response handling for the API
//!
//! Converts domain errors to HTTP responses with the status codes from
//! [`ToHttpStatus`] and the service's flat `{"error": <message>}` JSON body.

use crate::error::{Error, ToHttpStatus};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Implement IntoResponse for Error to automatically convert errors to HTTP responses
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status_code =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status_code, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
