use crate::error::{ErrorResponse, HttpAppError, ValidatedJson};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use clipshelf_core::models::{RenameRequest, RenameResponse};
use std::sync::Arc;

#[utoipa::path(
    put,
    path = "/api/rename/{id}",
    tag = "videos",
    params(
        ("id" = String, Path, description = "Video id (basename)")
    ),
    request_body = RenameRequest,
    responses(
        (status = 200, description = "Video (and thumbnail, if any) renamed", body = RenameResponse),
        (status = 400, description = "Empty or invalid new name", body = ErrorResponse),
        (status = 404, description = "Video not found", body = ErrorResponse),
        (status = 409, description = "New name already taken", body = ErrorResponse),
        (status = 500, description = "Internal server error; the rename may be partially applied", body = ErrorResponse)
    )
)]
pub async fn rename_video(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<RenameRequest>,
) -> Result<Json<RenameResponse>, HttpAppError> {
    let (new_id, new_filename) = state.library.rename(&id, &request.new_name).await?;

    Ok(Json(RenameResponse {
        success: true,
        new_id,
        new_filename,
    }))
}
