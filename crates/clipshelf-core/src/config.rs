//! Application configuration, loaded from the environment with defaults
//! suitable for local single-user operation.

use std::env;
use std::path::PathBuf;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_VIDEO_DIR: &str = "videos";
const DEFAULT_THUMBNAIL_DIR: &str = "thumbnails";
const DEFAULT_MAX_VIDEO_SIZE_MB: usize = 2048;
const DEFAULT_MAX_THUMBNAIL_SIZE_MB: usize = 10;
const DEFAULT_THUMBNAIL_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_port: u16,
    pub video_dir: PathBuf,
    pub thumbnail_dir: PathBuf,
    pub max_video_size_bytes: usize,
    pub max_thumbnail_size_bytes: usize,
    pub cors_origins: Vec<String>,
    pub ffmpeg_path: String,
    pub thumbnails_enabled: bool,
    pub thumbnail_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        let cors_origins = env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Config {
            server_port: env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse()
                .unwrap_or(DEFAULT_PORT),
            video_dir: env::var("VIDEO_DIR")
                .unwrap_or_else(|_| DEFAULT_VIDEO_DIR.to_string())
                .into(),
            thumbnail_dir: env::var("THUMBNAIL_DIR")
                .unwrap_or_else(|_| DEFAULT_THUMBNAIL_DIR.to_string())
                .into(),
            max_video_size_bytes: env::var("MAX_VIDEO_SIZE_MB")
                .unwrap_or_else(|_| DEFAULT_MAX_VIDEO_SIZE_MB.to_string())
                .parse::<usize>()
                .unwrap_or(DEFAULT_MAX_VIDEO_SIZE_MB)
                * 1024
                * 1024,
            max_thumbnail_size_bytes: env::var("MAX_THUMBNAIL_SIZE_MB")
                .unwrap_or_else(|_| DEFAULT_MAX_THUMBNAIL_SIZE_MB.to_string())
                .parse::<usize>()
                .unwrap_or(DEFAULT_MAX_THUMBNAIL_SIZE_MB)
                * 1024
                * 1024,
            cors_origins,
            ffmpeg_path: env::var("FFMPEG_PATH").unwrap_or_else(|_| "ffmpeg".to_string()),
            thumbnails_enabled: env::var("THUMBNAILS_ENABLED")
                .unwrap_or_else(|_| "true".to_string())
                .to_lowercase()
                .parse()
                .unwrap_or(true),
            thumbnail_timeout_secs: env::var("THUMBNAIL_TIMEOUT_SECS")
                .unwrap_or_else(|_| DEFAULT_THUMBNAIL_TIMEOUT_SECS.to_string())
                .parse()
                .unwrap_or(DEFAULT_THUMBNAIL_TIMEOUT_SECS),
        })
    }
}
