//! Thumbnail generation behind a capability trait.
//!
//! The actual frame extraction is an out-of-process ffmpeg call with its own
//! timeout. Callers treat the whole capability as best-effort: an absent or
//! failing generator degrades to a video without a thumbnail.

use async_trait::async_trait;
use bytes::Bytes;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;

#[derive(Debug, thiserror::Error)]
pub enum ThumbnailError {
    #[error("Thumbnail generation unavailable: {0}")]
    Unavailable(String),

    #[error("Thumbnail generation failed: {0}")]
    Failed(String),

    #[error("Thumbnail generation timed out after {0:?}")]
    TimedOut(Duration),
}

#[async_trait]
pub trait ThumbnailGenerator: Send + Sync {
    /// Extract a JPEG thumbnail from the video at `video_path`.
    async fn generate(&self, video_path: &Path) -> Result<Bytes, ThumbnailError>;
}

/// Extracts one frame via the ffmpeg CLI, scaled to at most 640x360.
///
/// The first attempt seeks to the 1-second mark; clips shorter than that get
/// a retry at 0 seconds.
pub struct FfmpegThumbnailer {
    ffmpeg_path: String,
    timeout: Duration,
}

impl FfmpegThumbnailer {
    pub fn new(ffmpeg_path: impl Into<String>, timeout: Duration) -> Self {
        Self {
            ffmpeg_path: ffmpeg_path.into(),
            timeout,
        }
    }

    async fn run_ffmpeg(
        &self,
        seek_secs: &str,
        input: &Path,
        output: &Path,
    ) -> Result<bool, ThumbnailError> {
        let mut command = Command::new(&self.ffmpeg_path);
        command
            .arg("-y")
            .arg("-ss")
            .arg(seek_secs)
            .arg("-i")
            .arg(input)
            .arg("-vframes")
            .arg("1")
            .arg("-vf")
            .arg("scale=640:360:force_original_aspect_ratio=decrease")
            .arg("-q:v")
            .arg("2")
            .arg("-f")
            .arg("image2")
            .arg(output)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        match tokio::time::timeout(self.timeout, command.output()).await {
            Err(_) => Err(ThumbnailError::TimedOut(self.timeout)),
            Ok(Err(e)) if e.kind() == std::io::ErrorKind::NotFound => Err(
                ThumbnailError::Unavailable(format!("ffmpeg not found at '{}'", self.ffmpeg_path)),
            ),
            Ok(Err(e)) => Err(ThumbnailError::Failed(format!(
                "failed to spawn ffmpeg: {}",
                e
            ))),
            Ok(Ok(output)) => {
                if !output.status.success() {
                    tracing::debug!(
                        status = %output.status,
                        stderr = %String::from_utf8_lossy(&output.stderr),
                        "ffmpeg exited with failure"
                    );
                }
                Ok(output.status.success())
            }
        }
    }
}

#[async_trait]
impl ThumbnailGenerator for FfmpegThumbnailer {
    async fn generate(&self, video_path: &Path) -> Result<Bytes, ThumbnailError> {
        let output = tempfile::Builder::new()
            .suffix(".jpg")
            .tempfile()
            .map_err(|e| ThumbnailError::Failed(format!("failed to create temp file: {}", e)))?;
        let output_path = output.path().to_path_buf();

        // Seek to 1s first; a very short clip produces nothing there and gets
        // a second attempt at 0s.
        let mut ok = self.run_ffmpeg("1", video_path, &output_path).await?;
        let mut data = tokio::fs::read(&output_path).await.unwrap_or_default();

        if !ok || data.is_empty() {
            ok = self.run_ffmpeg("0", video_path, &output_path).await?;
            data = tokio::fs::read(&output_path).await.unwrap_or_default();
        }

        if !ok {
            return Err(ThumbnailError::Failed(
                "ffmpeg could not extract a frame".to_string(),
            ));
        }
        if data.is_empty() {
            return Err(ThumbnailError::Failed(
                "ffmpeg produced an empty thumbnail".to_string(),
            ));
        }

        tracing::debug!(
            video = %video_path.display(),
            size_bytes = data.len(),
            "Thumbnail extracted"
        );

        Ok(Bytes::from(data))
    }
}

/// Generator used when thumbnailing is disabled.
pub struct NullThumbnailer;

#[async_trait]
impl ThumbnailGenerator for NullThumbnailer {
    async fn generate(&self, _video_path: &Path) -> Result<Bytes, ThumbnailError> {
        Err(ThumbnailError::Unavailable(
            "thumbnail generation disabled".to_string(),
        ))
    }
}
