//! File streaming and download handlers.

use axum::Json;
use axum::body::Body;
use axum::extract::{Query, State};
use axum::http::{StatusCode, header};
use axum::response::Response;

use qcdocs_core::error::AppError;
use qcdocs_core::traits::store::StoredObject;
use qcdocs_core::types::object::file_name_of;

use crate::dto::request::{DownloadRequest, FileQuery};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /file?path=<key>
///
/// Streams the object inline with a one-hour public cache header.
pub async fn fetch_file(
    State(state): State<AppState>,
    Query(params): Query<FileQuery>,
) -> Result<Response, ApiError> {
    let path = params
        .path
        .filter(|p| !p.is_empty())
        .ok_or_else(|| AppError::validation("path query parameter is required"))?;

    let object = fetch(&state, &path).await?;

    let mut builder = Response::builder()
        .status(StatusCode::OK)
        .header(header::CACHE_CONTROL, "public, max-age=3600")
        .header(header::CONTENT_LENGTH, object.size);

    // Infer from the extension; for unknown extensions fall back to
    // whatever the store reported, if anything.
    let content_type = content_type_for(&path)
        .map(str::to_string)
        .or(object.content_type);
    if let Some(content_type) = content_type {
        builder = builder.header(header::CONTENT_TYPE, content_type);
    }

    builder
        .body(Body::from_stream(object.body))
        .map_err(|e| AppError::internal(format!("Response build failed: {e}")).into())
}

/// POST /file
///
/// Streams the object as an attachment, named after the key's last segment.
pub async fn download_file(
    State(state): State<AppState>,
    Json(req): Json<DownloadRequest>,
) -> Result<Response, ApiError> {
    let path = req
        .path
        .filter(|p| !p.is_empty())
        .ok_or_else(|| AppError::validation("path is required"))?;

    let object = fetch(&state, &path).await?;
    let filename = file_name_of(&path);

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "application/pdf")
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{filename}\""),
        )
        .header(header::CONTENT_LENGTH, object.size)
        .body(Body::from_stream(object.body))
        .map_err(|e| AppError::internal(format!("Response build failed: {e}")).into())
}

async fn fetch(state: &AppState, path: &str) -> Result<StoredObject, ApiError> {
    tracing::info!(%path, "Fetching object");
    state
        .store
        .get(path)
        .await?
        .ok_or_else(|| AppError::not_found(format!("File not found: {path}")).into())
}

/// Content type by extension; `None` for unrecognized extensions.
fn content_type_for(path: &str) -> Option<&'static str> {
    let lower = path.to_lowercase();
    if lower.ends_with(".jpg") || lower.ends_with(".jpeg") {
        Some("image/jpeg")
    } else if lower.ends_with(".png") {
        Some("image/png")
    } else if lower.ends_with(".gif") {
        Some("image/gif")
    } else if lower.ends_with(".pdf") {
        Some("application/pdf")
    } else {
        None
    }
}
