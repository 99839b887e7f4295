use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, StatusCode},
    response::Response,
};
use clipshelf_core::AppError;
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/thumbnail/{id}",
    tag = "thumbnails",
    params(
        ("id" = String, Path, description = "Video id (basename)")
    ),
    responses(
        (status = 200, description = "Thumbnail JPEG", content_type = "image/jpeg"),
        (status = 404, description = "No thumbnail for this id", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_thumbnail(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Response, HttpAppError> {
    let (path, size) = state.library.resolve_thumbnail(&id).await?;
    let stream = state.library.read_stream(&path, None).await?;

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "image/jpeg")
        .header(header::CONTENT_LENGTH, size.to_string())
        .body(Body::from_stream(stream))
        .map_err(|e| {
            HttpAppError(AppError::Internal(format!(
                "Failed to build response: {}",
                e
            )))
        })
}
