//! Media-type tables: recognized video extensions and their MIME types.
//!
//! The extension set is fixed. A file whose extension is outside this set is
//! never treated as a video asset, and a basename is unique across the whole
//! set (a `clip.mp4` and a `clip.webm` cannot coexist).

/// Video file extensions recognized by the library (lookup is case-insensitive).
pub const VIDEO_EXTENSIONS: [&str; 10] = [
    "mp4", "webm", "ogg", "mov", "avi", "mkv", "flv", "wmv", "m4v", "3gp",
];

/// Thumbnails are always stored as JPEG files with this extension.
pub const THUMBNAIL_EXTENSION: &str = "jpg";

/// Accepted source formats for explicitly uploaded thumbnails.
pub const THUMBNAIL_SOURCE_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// True if `extension` (any case) is a recognized video extension.
pub fn is_video_extension(extension: &str) -> bool {
    let lower = extension.to_lowercase();
    VIDEO_EXTENSIONS.contains(&lower.as_str())
}

/// True if `extension` (any case) is an accepted thumbnail source format.
pub fn is_thumbnail_source_extension(extension: &str) -> bool {
    let lower = extension.to_lowercase();
    THUMBNAIL_SOURCE_EXTENSIONS.contains(&lower.as_str())
}

/// MIME type for a video file extension. Unknown or absent extensions fall
/// back to `video/mp4`.
pub fn content_type_for(extension: Option<&str>) -> &'static str {
    match extension.map(|e| e.to_lowercase()).as_deref() {
        Some("mp4") => "video/mp4",
        Some("webm") => "video/webm",
        Some("ogg") => "video/ogg",
        Some("mov") => "video/quicktime",
        Some("avi") => "video/x-msvideo",
        Some("mkv") => "video/x-matroska",
        Some("flv") => "video/x-flv",
        Some("wmv") => "video/x-ms-wmv",
        Some("m4v") => "video/x-m4v",
        Some("3gp") => "video/3gpp",
        _ => "video/mp4",
    }
}
