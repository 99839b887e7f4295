use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use clipshelf_core::models::NameCheckResponse;
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/api/check-name/{name}",
    tag = "videos",
    params(
        ("name" = String, Path, description = "Candidate basename")
    ),
    responses(
        (status = 200, description = "Whether a video with this basename exists", body = NameCheckResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn check_name(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<NameCheckResponse>, HttpAppError> {
    let exists = state.library.name_exists(&name).await?;
    Ok(Json(NameCheckResponse { exists }))
}
