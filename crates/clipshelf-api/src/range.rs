//! `Range` header parsing for the streaming endpoints.
//!
//! Parsing is defensive: a syntactically broken header is a 400, a
//! well-formed header whose window falls outside the file is a 416. Neither
//! ever propagates as a 500.

use axum::http::HeaderValue;
use clipshelf_core::AppError;

/// Parse an optional `Range` header against a file of `file_size` bytes.
///
/// Returns `None` when the whole file should be served, or the inclusive
/// `(start, end)` window for a 206 response. Only single ranges of the
/// `bytes` unit are supported; `bytes=<start>-`, `bytes=<start>-<end>`, and
/// the suffix form `bytes=-<len>` are all accepted.
pub fn parse_range(
    value: Option<&HeaderValue>,
    file_size: u64,
) -> Result<Option<(u64, u64)>, AppError> {
    let Some(value) = value else {
        return Ok(None);
    };
    if file_size == 0 {
        return Err(AppError::RangeNotSatisfiable { size: file_size });
    }
    let value = value
        .to_str()
        .map_err(|_| AppError::InvalidInput("invalid Range header".into()))?;
    let Some(range) = value.strip_prefix("bytes=") else {
        return Err(AppError::InvalidInput("invalid Range header".into()));
    };
    if range.contains(',') {
        return Err(AppError::InvalidInput(
            "multiple ranges not supported".into(),
        ));
    }

    let mut parts = range.splitn(2, '-');
    let start_part = parts.next().unwrap_or_default();
    let end_part = parts.next().unwrap_or_default();

    let (start, end) = if start_part.is_empty() {
        // Suffix form: the last <len> bytes.
        let suffix: u64 = end_part
            .parse()
            .map_err(|_| AppError::InvalidInput("invalid Range header".into()))?;
        if suffix == 0 {
            return Ok(None);
        }
        let start = file_size.saturating_sub(suffix);
        (start, file_size - 1)
    } else {
        let start: u64 = start_part
            .parse()
            .map_err(|_| AppError::InvalidInput("invalid Range header".into()))?;
        let end: u64 = if end_part.is_empty() {
            file_size - 1
        } else {
            end_part
                .parse()
                .map_err(|_| AppError::InvalidInput("invalid Range header".into()))?
        };
        (start, end)
    };

    if start > end || start >= file_size || end >= file_size {
        return Err(AppError::RangeNotSatisfiable { size: file_size });
    }

    Ok(Some((start, end)))
}
