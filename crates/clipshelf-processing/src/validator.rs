/// Common validation errors for uploaded files
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("File too large: {size} bytes (max: {max} bytes)")]
    FileTooLarge { size: usize, max: usize },

    #[error("Invalid file extension: {extension} (allowed: {allowed:?})")]
    InvalidExtension {
        extension: String,
        allowed: Vec<String>,
    },

    #[error("Missing file extension (filename: {0})")]
    MissingExtension(String),

    #[error("Empty file")]
    EmptyFile,
}

/// Upload validator
///
/// Provides size and extension checks for uploaded files without coupling to
/// storage implementation details.
pub struct MediaValidator {
    max_file_size: usize,
    allowed_extensions: Vec<String>,
}

impl MediaValidator {
    pub fn new(max_file_size: usize, allowed_extensions: Vec<String>) -> Self {
        Self {
            max_file_size,
            allowed_extensions,
        }
    }

    /// Validate file size
    pub fn validate_file_size(&self, size: usize) -> Result<(), ValidationError> {
        if size == 0 {
            return Err(ValidationError::EmptyFile);
        }

        if size > self.max_file_size {
            return Err(ValidationError::FileTooLarge {
                size,
                max: self.max_file_size,
            });
        }

        Ok(())
    }

    /// Validate the filename's extension against the allowlist, returning it
    /// lowercased.
    pub fn validate_extension(&self, filename: &str) -> Result<String, ValidationError> {
        let extension = match filename.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => ext.to_lowercase(),
            _ => return Err(ValidationError::MissingExtension(filename.to_string())),
        };

        if !self.allowed_extensions.contains(&extension) {
            return Err(ValidationError::InvalidExtension {
                extension,
                allowed: self.allowed_extensions.clone(),
            });
        }

        Ok(extension)
    }
}
