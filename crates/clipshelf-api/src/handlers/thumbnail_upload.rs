use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use axum::{
    extract::{Multipart, State},
    Json,
};
use clipshelf_core::models::ThumbnailUploadResponse;
use clipshelf_core::{media, AppError};
use clipshelf_processing::MediaValidator;
use std::sync::Arc;

#[utoipa::path(
    post,
    path = "/api/upload-thumbnail",
    tag = "thumbnails",
    request_body(content = inline(Object), content_type = "multipart/form-data",
        description = "Field 'file' with a jpg/jpeg/png image; text field 'videoId' naming the owning video"),
    responses(
        (status = 200, description = "Thumbnail attached", body = ThumbnailUploadResponse),
        (status = 400, description = "Missing file, missing videoId, or wrong image type", body = ErrorResponse),
        (status = 404, description = "Video not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn upload_thumbnail(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<ThumbnailUploadResponse>, HttpAppError> {
    let mut video_id = String::new();
    let mut image: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::InvalidInput(format!("Failed to read multipart: {}", e)))?
    {
        let field_name = field.name().map(|s| s.to_string()).unwrap_or_default();
        match field_name.as_str() {
            "file" => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let data = field.bytes().await.map_err(|e| {
                    AppError::InvalidInput(format!("Failed to read file data: {}", e))
                })?;
                image = Some((filename, data.to_vec()));
            }
            "videoId" => {
                video_id = field.text().await.map_err(|e| {
                    AppError::InvalidInput(format!("Failed to read videoId field: {}", e))
                })?;
            }
            other => {
                tracing::debug!(field = other, "Ignoring unknown multipart field");
            }
        }
    }

    let (filename, data) =
        image.ok_or_else(|| AppError::InvalidInput("No file provided".to_string()))?;
    if video_id.trim().is_empty() {
        return Err(AppError::InvalidInput("Missing videoId".to_string()).into());
    }

    let validator = MediaValidator::new(
        state.config.max_thumbnail_size_bytes,
        media::THUMBNAIL_SOURCE_EXTENSIONS
            .iter()
            .map(|s| s.to_string())
            .collect(),
    );
    validator.validate_file_size(data.len())?;
    validator.validate_extension(&filename)?;

    // The thumbnail belongs to a video; attaching one to a missing id is a 404.
    let video = state.library.resolve(video_id.trim()).await?;

    state.library.save_thumbnail(&video.basename, &data).await?;

    Ok(Json(ThumbnailUploadResponse {
        success: true,
        thumbnail_url: format!("/thumbnail/{}", video.basename),
    }))
}
