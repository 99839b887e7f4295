//! Application state shared across handlers.

use clipshelf_core::Config;
use clipshelf_processing::ThumbnailGenerator;
use clipshelf_storage::VideoLibrary;
use std::sync::Arc;

pub struct AppState {
    pub library: VideoLibrary,
    pub thumbnailer: Arc<dyn ThumbnailGenerator>,
    pub config: Config,
}

fn _assert_app_state_send_sync() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}
    assert_send::<AppState>();
    assert_sync::<AppState>();
}
