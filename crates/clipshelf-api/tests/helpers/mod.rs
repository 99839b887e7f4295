#![allow(dead_code)] // Each test binary uses a different slice of these helpers

use axum_test::TestServer;
use clipshelf_core::Config;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test application: a full router over a throwaway storage directory.
pub struct TestApp {
    pub server: TestServer,
    pub video_dir: PathBuf,
    pub thumbnail_dir: PathBuf,
    _temp_dir: TempDir,
}

impl TestApp {
    /// Get the HTTP test client
    pub fn client(&self) -> &TestServer {
        &self.server
    }

    /// Place a video file directly in storage, bypassing the upload endpoint.
    pub fn write_video(&self, filename: &str, data: &[u8]) {
        std::fs::write(self.video_dir.join(filename), data).expect("write video fixture");
    }

    /// Place a thumbnail file directly in storage.
    pub fn write_thumbnail(&self, filename: &str, data: &[u8]) {
        std::fs::write(self.thumbnail_dir.join(filename), data).expect("write thumbnail fixture");
    }

    pub fn video_exists(&self, filename: &str) -> bool {
        self.video_dir.join(filename).exists()
    }

    pub fn thumbnail_exists(&self, filename: &str) -> bool {
        self.thumbnail_dir.join(filename).exists()
    }
}

fn create_test_config(video_dir: PathBuf, thumbnail_dir: PathBuf) -> Config {
    Config {
        server_port: 0,
        video_dir,
        thumbnail_dir,
        max_video_size_bytes: 10 * 1024 * 1024,
        max_thumbnail_size_bytes: 1024 * 1024,
        cors_origins: vec!["*".to_string()],
        ffmpeg_path: "ffmpeg".to_string(),
        // Tests must not depend on a local ffmpeg install; uploads degrade to
        // thumbnail-less videos, which is the contract under test anyway.
        thumbnails_enabled: false,
        thumbnail_timeout_secs: 5,
    }
}

/// Setup a test application with isolated storage directories
pub async fn setup_test_app() -> TestApp {
    setup_test_app_with(|config| config).await
}

/// Setup a test application, letting the caller adjust the config first
pub async fn setup_test_app_with(adjust: impl FnOnce(Config) -> Config) -> TestApp {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    let video_dir = temp_dir.path().join("videos");
    let thumbnail_dir = temp_dir.path().join("thumbnails");

    let config = adjust(create_test_config(video_dir.clone(), thumbnail_dir.clone()));

    let (_state, router) = clipshelf_api::setup::initialize_app(config)
        .await
        .expect("Failed to initialize app");
    let server = TestServer::new(router).expect("Failed to start test server");

    TestApp {
        server,
        video_dir,
        thumbnail_dir,
        _temp_dir: temp_dir,
    }
}
