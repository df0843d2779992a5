//! OpenAPI documentation and schema generation
//!
//! Defines the OpenAPI specification for the media-dl REST API using utoipa
//! for compile-time spec generation.

use utoipa::OpenApi;

/// OpenAPI documentation for the media-dl REST API
///
/// The spec can be accessed via:
/// - `/openapi.json` - JSON format OpenAPI specification
/// - `/swagger-ui` - Interactive Swagger UI documentation (if enabled)
#[derive(OpenApi)]
#[openapi(
    info(
        title = "media-dl REST API",
        version = "0.1.0",
        description = "REST API for downloading and transcoding media via yt-dlp and ffmpeg",
        license(name = "MIT OR Apache-2.0")
    ),
    servers(
        (url = "http://localhost:5000", description = "Local development server")
    ),
    paths(
        crate::api::routes::start_download,
        crate::api::routes::serve_file,
        crate::api::routes::health_check,
        crate::api::routes::openapi_spec,
    ),
    components(schemas(
        crate::api::routes::DownloadRequest,
        crate::api::routes::DownloadResponse,
    )),
    tags(
        (name = "downloads", description = "Download job submission"),
        (name = "files", description = "Completed artifact retrieval"),
        (name = "system", description = "Health and documentation")
    )
)]
pub struct ApiDoc;
