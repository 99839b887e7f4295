//! Application initialization: wires configuration into state and routes.

pub mod routes;
pub mod server;

use crate::state::AppState;
use axum::Router;
use clipshelf_core::Config;
use clipshelf_processing::{FfmpegThumbnailer, NullThumbnailer, ThumbnailGenerator};
use clipshelf_storage::VideoLibrary;
use std::sync::Arc;
use std::time::Duration;

pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, Router), anyhow::Error> {
    let library = VideoLibrary::new(&config.video_dir, &config.thumbnail_dir).await?;

    let thumbnailer: Arc<dyn ThumbnailGenerator> = if config.thumbnails_enabled {
        Arc::new(FfmpegThumbnailer::new(
            config.ffmpeg_path.clone(),
            Duration::from_secs(config.thumbnail_timeout_secs),
        ))
    } else {
        tracing::info!("Thumbnail generation disabled");
        Arc::new(NullThumbnailer)
    };

    let state = Arc::new(AppState {
        library,
        thumbnailer,
        config: config.clone(),
    });

    let router = routes::setup_routes(&config, state.clone())?;

    Ok((state, router))
}
