use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use axum::{
    extract::{Multipart, State},
    Json,
};
use clipshelf_core::models::UploadResponse;
use clipshelf_core::{media, AppError};
use clipshelf_processing::{MediaValidator, ThumbnailError};
use std::path::Path;
use std::sync::Arc;
use tempfile::NamedTempFile;
use tokio::io::AsyncWriteExt;

#[utoipa::path(
    post,
    path = "/api/upload",
    tag = "videos",
    request_body(content = inline(Object), content_type = "multipart/form-data",
        description = "Field 'file' with the video; optional text field 'name' with the desired basename"),
    responses(
        (status = 200, description = "Video uploaded", body = UploadResponse),
        (status = 400, description = "Missing file or invalid input", body = ErrorResponse),
        (status = 413, description = "File too large", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn upload_video(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, HttpAppError> {
    let mut desired_name = String::new();
    let mut original_filename: Option<String> = None;
    let mut staged: Option<(NamedTempFile, u64)> = None;

    while let Some(mut field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::InvalidInput(format!("Failed to read multipart: {}", e)))?
    {
        let field_name = field.name().map(|s| s.to_string()).unwrap_or_default();
        match field_name.as_str() {
            "file" => {
                if staged.is_some() {
                    return Err(AppError::InvalidInput(
                        "Multiple file fields are not allowed; send exactly one field named 'file'"
                            .to_string(),
                    )
                    .into());
                }
                original_filename = field.file_name().map(|s: &str| s.to_string());

                // Stage in the video directory so the final placement is a
                // same-filesystem rename, never a copy.
                let staging =
                    NamedTempFile::new_in(&state.config.video_dir).map_err(AppError::from)?;
                let mut out = tokio::fs::File::create(staging.path())
                    .await
                    .map_err(AppError::from)?;

                let mut written: u64 = 0;
                while let Some(chunk) = field.chunk().await.map_err(|e| {
                    AppError::InvalidInput(format!("Failed to read file data: {}", e))
                })? {
                    written += chunk.len() as u64;
                    out.write_all(&chunk).await.map_err(AppError::from)?;
                }
                out.sync_all().await.map_err(AppError::from)?;

                staged = Some((staging, written));
            }
            "name" => {
                desired_name = field.text().await.map_err(|e| {
                    AppError::InvalidInput(format!("Failed to read name field: {}", e))
                })?;
            }
            other => {
                tracing::debug!(field = other, "Ignoring unknown multipart field");
            }
        }
    }

    let (staged_file, size) =
        staged.ok_or_else(|| AppError::InvalidInput("No file provided".to_string()))?;
    let original_filename = original_filename.unwrap_or_default();

    let validator = MediaValidator::new(
        state.config.max_video_size_bytes,
        media::VIDEO_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
    );
    validator.validate_file_size(size as usize)?;
    validator.validate_extension(&original_filename)?;

    let filename = state
        .library
        .compute_upload_filename(&desired_name, &original_filename)
        .await?;
    let target = state.library.video_path(&filename);

    // The unique-name check and the final placement are two steps; a
    // concurrent upload can win the name in between. noclobber turns that
    // race into a retryable conflict instead of an overwrite.
    staged_file.persist_noclobber(&target).map_err(|e| {
        if e.error.kind() == std::io::ErrorKind::AlreadyExists {
            AppError::Conflict(format!("Name was taken concurrently: {}", filename))
        } else {
            AppError::Storage(format!("Failed to persist upload: {}", e.error))
        }
    })?;

    let video_id = filename
        .rsplit_once('.')
        .map(|(stem, _)| stem.to_string())
        .unwrap_or_else(|| filename.clone());

    tracing::info!(
        video_id = %video_id,
        filename = %filename,
        size_bytes = size,
        "Video uploaded"
    );

    let thumbnail_url = generate_thumbnail(&state, &video_id, &target).await;

    Ok(Json(UploadResponse {
        success: true,
        url: format!("/video/{}", video_id),
        video_id,
        filename,
        thumbnail_url,
    }))
}

/// Best-effort thumbnail extraction. Whatever goes wrong here is logged and
/// the upload still succeeds.
async fn generate_thumbnail(state: &AppState, video_id: &str, video_path: &Path) -> Option<String> {
    match state.thumbnailer.generate(video_path).await {
        Ok(bytes) => match state.library.save_thumbnail(video_id, &bytes).await {
            Ok(()) => Some(format!("/thumbnail/{}", video_id)),
            Err(e) => {
                tracing::warn!(error = %e, id = %video_id, "Failed to store generated thumbnail");
                None
            }
        },
        Err(ThumbnailError::Unavailable(reason)) => {
            tracing::debug!(reason = %reason, id = %video_id, "Thumbnail generation unavailable");
            None
        }
        Err(e) => {
            tracing::warn!(error = %e, id = %video_id, "Thumbnail generation failed");
            None
        }
    }
}
