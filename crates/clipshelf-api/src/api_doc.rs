//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::error;
use crate::handlers;
use clipshelf_core::models;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Clipshelf API",
        version = "0.1.0",
        description = "Single-user video library: disk-backed storage, JPEG thumbnails, and byte-range streaming."
    ),
    paths(
        handlers::videos_list::list_videos,
        handlers::check_name::check_name,
        handlers::video_rename::rename_video,
        handlers::video_stream::stream_video,
        handlers::thumbnail_get::get_thumbnail,
        handlers::video_upload::upload_video,
        handlers::thumbnail_upload::upload_thumbnail,
        handlers::video_delete::delete_video,
    ),
    components(schemas(
        models::VideoSummary,
        models::NameCheckResponse,
        models::RenameRequest,
        models::RenameResponse,
        models::UploadResponse,
        models::ThumbnailUploadResponse,
        models::DeleteResponse,
        error::ErrorResponse,
    )),
    tags(
        (name = "videos", description = "Video asset CRUD and streaming"),
        (name = "thumbnails", description = "Thumbnail retrieval and upload")
    )
)]
pub struct ApiDoc;
