use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use clipshelf_core::models::DeleteResponse;
use std::sync::Arc;

#[utoipa::path(
    delete,
    path = "/api/video/{id}",
    tag = "videos",
    params(
        ("id" = String, Path, description = "Video id (basename)")
    ),
    responses(
        (status = 200, description = "Video and thumbnail deleted", body = DeleteResponse),
        (status = 404, description = "Video not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn delete_video(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, HttpAppError> {
    state.library.delete(&id).await?;
    Ok(Json(DeleteResponse { success: true }))
}
