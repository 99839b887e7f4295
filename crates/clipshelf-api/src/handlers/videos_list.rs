use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use axum::{extract::State, Json};
use clipshelf_core::models::VideoSummary;
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/api/videos",
    tag = "videos",
    responses(
        (status = 200, description = "All stored videos, newest first", body = [VideoSummary]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn list_videos(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<VideoSummary>>, HttpAppError> {
    let entries = state.library.list().await?;

    let videos = entries
        .into_iter()
        .map(|entry| VideoSummary {
            url: format!("/video/{}", entry.basename),
            thumbnail_url: entry
                .has_thumbnail
                .then(|| format!("/thumbnail/{}", entry.basename)),
            id: entry.basename.clone(),
            display_name: entry.basename,
            filename: entry.filename,
            size: entry.size,
            created: entry.created,
            modified: entry.modified,
            has_thumbnail: entry.has_thumbnail,
        })
        .collect();

    Ok(Json(videos))
}
