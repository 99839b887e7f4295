//! Upload validation and thumbnail generation.

pub mod thumbnail;
pub mod validator;

pub use thumbnail::{FfmpegThumbnailer, NullThumbnailer, ThumbnailError, ThumbnailGenerator};
pub use validator::{MediaValidator, ValidationError};
