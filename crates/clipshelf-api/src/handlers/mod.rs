pub mod check_name;
pub mod thumbnail_get;
pub mod thumbnail_upload;
pub mod video_delete;
pub mod video_rename;
pub mod video_stream;
pub mod video_upload;
pub mod videos_list;
