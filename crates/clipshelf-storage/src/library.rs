use bytes::Bytes;
use chrono::{DateTime, Utc};
use clipshelf_core::media;
use futures::Stream;
use std::io::SeekFrom;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use tokio::fs;
use tokio::io::{AsyncReadExt, AsyncSeekExt, AsyncWriteExt};
use tokio_util::io::ReaderStream;

pub type LibraryResult<T> = Result<T, LibraryError>;

#[derive(Debug, thiserror::Error)]
pub enum LibraryError {
    #[error("No video found for id: {0}")]
    NotFound(String),

    #[error("Invalid name: {0}")]
    InvalidName(String),

    #[error("Name already taken: {0}")]
    NameTaken(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// A video file located by the naming resolver.
#[derive(Debug, Clone)]
pub struct ResolvedVideo {
    pub path: PathBuf,
    pub filename: String,
    pub basename: String,
    /// Extension as stored on disk (case preserved)
    pub extension: String,
    pub size: u64,
}

/// One row of the library listing.
#[derive(Debug, Clone)]
pub struct VideoEntry {
    pub basename: String,
    pub filename: String,
    pub size: u64,
    pub created: Option<DateTime<Utc>>,
    pub modified: Option<DateTime<Utc>>,
    pub has_thumbnail: bool,
}

/// Disk-backed video library.
///
/// Identity is the basename: the filename minus its extension, unique across
/// the recognized extension set. Every lookup re-reads the directory, so
/// external mutation of the storage directory is tolerated at the cost of a
/// scan per request.
#[derive(Clone)]
pub struct VideoLibrary {
    video_dir: PathBuf,
    thumbnail_dir: PathBuf,
}

impl VideoLibrary {
    /// Create a library rooted at the given directories, creating them if
    /// they do not exist yet.
    pub async fn new(
        video_dir: impl Into<PathBuf>,
        thumbnail_dir: impl Into<PathBuf>,
    ) -> LibraryResult<Self> {
        let video_dir = video_dir.into();
        let thumbnail_dir = thumbnail_dir.into();

        fs::create_dir_all(&video_dir).await?;
        fs::create_dir_all(&thumbnail_dir).await?;

        Ok(VideoLibrary {
            video_dir,
            thumbnail_dir,
        })
    }

    /// Names become path segments, so separators and dot-dot sequences are
    /// rejected before any filesystem access.
    fn validate_basename(name: &str) -> LibraryResult<()> {
        if name.is_empty() {
            return Err(LibraryError::InvalidName(
                "name must not be empty".to_string(),
            ));
        }
        if name.contains('/') || name.contains('\\') || name.contains("..") || name.contains('\0')
        {
            return Err(LibraryError::InvalidName(format!(
                "name contains invalid characters: {}",
                name
            )));
        }
        Ok(())
    }

    fn split_filename(filename: &str) -> (&str, Option<&str>) {
        match filename.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => (stem, Some(ext)),
            _ => (filename, None),
        }
    }

    /// Scan the video directory for a file whose basename matches exactly.
    /// Only files with a recognized video extension participate.
    async fn find_entry(&self, basename: &str) -> LibraryResult<Option<ResolvedVideo>> {
        let mut dir = fs::read_dir(&self.video_dir).await?;
        while let Some(entry) = dir.next_entry().await? {
            if !entry.file_type().await?.is_file() {
                continue;
            }
            let name = entry.file_name();
            let Some(name) = name.to_str() else {
                continue;
            };
            let (stem, extension) = Self::split_filename(name);
            let Some(extension) = extension else {
                continue;
            };
            if !media::is_video_extension(extension) {
                continue;
            }
            if stem == basename {
                let meta = entry.metadata().await?;
                return Ok(Some(ResolvedVideo {
                    path: entry.path(),
                    filename: name.to_string(),
                    basename: stem.to_string(),
                    extension: extension.to_string(),
                    size: meta.len(),
                }));
            }
        }
        Ok(None)
    }

    /// Resolve a video id to its file, or `NotFound`.
    pub async fn resolve(&self, id: &str) -> LibraryResult<ResolvedVideo> {
        Self::validate_basename(id)?;
        self.find_entry(id)
            .await?
            .ok_or_else(|| LibraryError::NotFound(id.to_string()))
    }

    /// True iff a stored video's basename equals `basename` exactly
    /// (case-sensitive, extension-insensitive).
    pub async fn name_exists(&self, basename: &str) -> LibraryResult<bool> {
        Ok(self.find_entry(basename).await?.is_some())
    }

    /// Compute a collision-free filename for an upload.
    ///
    /// An empty `desired` keeps the original filename; otherwise the desired
    /// basename is combined with the original extension. On collision a
    /// `_1`, `_2`, ... suffix is appended to the basename, re-checking
    /// existence after every increment since the incremented name can itself
    /// collide with an earlier upload.
    pub async fn compute_upload_filename(
        &self,
        desired: &str,
        original_filename: &str,
    ) -> LibraryResult<String> {
        let desired = desired.trim();
        let (stem, extension) = Self::split_filename(original_filename);
        let base = if desired.is_empty() { stem } else { desired };
        Self::validate_basename(base)?;

        let mut candidate = base.to_string();
        let mut counter: u32 = 0;
        while self.name_exists(&candidate).await? {
            counter += 1;
            candidate = format!("{}_{}", base, counter);
        }

        Ok(match extension {
            Some(ext) => format!("{}.{}", candidate, ext),
            None => candidate,
        })
    }

    /// Absolute path a video filename would be stored under.
    pub fn video_path(&self, filename: &str) -> PathBuf {
        self.video_dir.join(filename)
    }

    /// Rename a video and its thumbnail to a new basename.
    ///
    /// The two renames are not atomic as a pair: when the thumbnail rename
    /// fails the video keeps its new name and the error surfaces to the
    /// caller, who must treat the operation as possibly partially applied.
    pub async fn rename(&self, id: &str, new_basename: &str) -> LibraryResult<(String, String)> {
        let new_basename = new_basename.trim();
        if new_basename.is_empty() {
            return Err(LibraryError::InvalidName(
                "name must not be empty".to_string(),
            ));
        }
        Self::validate_basename(new_basename)?;

        let video = self.resolve(id).await?;
        if self.name_exists(new_basename).await? {
            return Err(LibraryError::NameTaken(new_basename.to_string()));
        }

        let new_filename = format!("{}.{}", new_basename, video.extension);
        fs::rename(&video.path, self.video_path(&new_filename)).await?;

        let old_thumbnail = self.thumbnail_path(&video.basename);
        if fs::try_exists(&old_thumbnail).await.unwrap_or(false) {
            fs::rename(&old_thumbnail, self.thumbnail_path(new_basename)).await?;
        }

        tracing::info!(
            old_id = %id,
            new_id = %new_basename,
            new_filename = %new_filename,
            "Video renamed"
        );

        Ok((new_basename.to_string(), new_filename))
    }

    /// Delete a video and, best-effort, its thumbnail.
    pub async fn delete(&self, id: &str) -> LibraryResult<()> {
        let video = self.resolve(id).await?;
        fs::remove_file(&video.path).await?;

        let thumbnail = self.thumbnail_path(&video.basename);
        if fs::try_exists(&thumbnail).await.unwrap_or(false) {
            if let Err(e) = fs::remove_file(&thumbnail).await {
                tracing::warn!(
                    error = %e,
                    path = %thumbnail.display(),
                    "Failed to delete thumbnail; video already removed"
                );
            }
        }

        tracing::info!(id = %id, filename = %video.filename, "Video deleted");

        Ok(())
    }

    /// List all stored videos, newest-modified first.
    pub async fn list(&self) -> LibraryResult<Vec<VideoEntry>> {
        let mut entries = Vec::new();
        let mut dir = fs::read_dir(&self.video_dir).await?;
        while let Some(entry) = dir.next_entry().await? {
            if !entry.file_type().await?.is_file() {
                continue;
            }
            let name = entry.file_name();
            let Some(name) = name.to_str() else {
                continue;
            };
            let (stem, extension) = Self::split_filename(name);
            let Some(extension) = extension else {
                continue;
            };
            if !media::is_video_extension(extension) {
                continue;
            }

            let meta = entry.metadata().await?;
            entries.push(VideoEntry {
                basename: stem.to_string(),
                filename: name.to_string(),
                size: meta.len(),
                created: meta.created().ok().map(DateTime::<Utc>::from),
                modified: meta.modified().ok().map(DateTime::<Utc>::from),
                has_thumbnail: self.has_thumbnail(stem).await,
            });
        }

        entries.sort_by(|a, b| b.modified.cmp(&a.modified));
        Ok(entries)
    }

    /// Path of the thumbnail for a basename (always a `.jpg`).
    pub fn thumbnail_path(&self, basename: &str) -> PathBuf {
        self.thumbnail_dir
            .join(format!("{}.{}", basename, media::THUMBNAIL_EXTENSION))
    }

    pub async fn has_thumbnail(&self, basename: &str) -> bool {
        fs::try_exists(self.thumbnail_path(basename))
            .await
            .unwrap_or(false)
    }

    /// Locate an existing thumbnail, returning its path and size.
    pub async fn resolve_thumbnail(&self, basename: &str) -> LibraryResult<(PathBuf, u64)> {
        Self::validate_basename(basename)?;
        let path = self.thumbnail_path(basename);
        match fs::metadata(&path).await {
            Ok(meta) => Ok((path, meta.len())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(LibraryError::NotFound(basename.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Store thumbnail bytes as `<basename>.jpg`, replacing any existing one.
    pub async fn save_thumbnail(&self, basename: &str, data: &[u8]) -> LibraryResult<()> {
        Self::validate_basename(basename)?;
        let path = self.thumbnail_path(basename);

        let mut file = fs::File::create(&path).await?;
        file.write_all(data).await?;
        file.sync_all().await?;

        tracing::info!(
            path = %path.display(),
            size_bytes = data.len(),
            "Thumbnail stored"
        );

        Ok(())
    }

    /// Open a file and stream it back in chunks, optionally restricted to an
    /// inclusive byte window. The file is never buffered whole; the stream
    /// holds one chunk at a time.
    pub async fn read_stream(
        &self,
        path: &Path,
        range: Option<(u64, u64)>,
    ) -> LibraryResult<Pin<Box<dyn Stream<Item = std::io::Result<Bytes>> + Send>>> {
        let mut file = fs::File::open(path).await?;

        match range {
            Some((start, end)) => {
                file.seek(SeekFrom::Start(start)).await?;
                let window = end - start + 1;
                Ok(Box::pin(ReaderStream::new(file.take(window))))
            }
            None => Ok(Box::pin(ReaderStream::new(file))),
        }
    }
}
