use crate::error::{ErrorResponse, HttpAppError};
use crate::range::parse_range;
use crate::state::AppState;
use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::Response,
};
use clipshelf_core::{media, AppError};
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/video/{id}",
    tag = "videos",
    params(
        ("id" = String, Path, description = "Video id (basename)"),
        ("Range" = Option<String>, Header, description = "Optional byte range, e.g. bytes=0-1023")
    ),
    responses(
        (status = 200, description = "Entire video, streamed"),
        (status = 206, description = "Requested byte window, streamed"),
        (status = 400, description = "Malformed Range header", body = ErrorResponse),
        (status = 404, description = "Video not found", body = ErrorResponse),
        (status = 416, description = "Range outside the file", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn stream_video(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<Response, HttpAppError> {
    let video = state.library.resolve(&id).await?;
    let content_type = media::content_type_for(Some(&video.extension));

    let range = parse_range(headers.get(header::RANGE), video.size)?;

    let response = match range {
        Some((start, end)) => {
            let stream = state
                .library
                .read_stream(&video.path, Some((start, end)))
                .await?;
            let window = end - start + 1;

            tracing::debug!(
                id = %id,
                start = start,
                end = end,
                size = video.size,
                "Serving partial content"
            );

            Response::builder()
                .status(StatusCode::PARTIAL_CONTENT)
                .header(header::CONTENT_TYPE, content_type)
                .header(header::ACCEPT_RANGES, "bytes")
                .header(
                    header::CONTENT_RANGE,
                    format!("bytes {}-{}/{}", start, end, video.size),
                )
                .header(header::CONTENT_LENGTH, window.to_string())
                .body(Body::from_stream(stream))
        }
        None => {
            let stream = state.library.read_stream(&video.path, None).await?;

            tracing::debug!(id = %id, size = video.size, "Serving full content");

            Response::builder()
                .status(StatusCode::OK)
                .header(header::CONTENT_TYPE, content_type)
                .header(header::ACCEPT_RANGES, "bytes")
                .header(header::CONTENT_LENGTH, video.size.to_string())
                .body(Body::from_stream(stream))
        }
    };

    response.map_err(|e| {
        HttpAppError(AppError::Internal(format!(
            "Failed to build response: {}",
            e
        )))
    })
}
