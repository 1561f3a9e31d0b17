// crates/gazetteer-core/src/error.rs
use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, GazetteerError>;

/// Errors produced while loading a dataset.
///
/// Queries themselves never fail: empty or absent input normalizes to the
/// empty string, and non-matching queries return empty sequences.
#[derive(Debug, Error)]
pub enum GazetteerError {
    #[error("dataset not found: {0}")]
    NotFound(String),

    #[error("unsupported dataset format: {0}")]
    Unsupported(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[cfg(feature = "json")]
    #[error("failed to decode dataset: {0}")]
    Json(#[from] serde_json::Error),
}
