//! Error types for the sheet
//!
//! Reducer transitions never fail; errors only come from the edges:
//! - Loading configuration
//! - Upload intake from the host picker
//! - The host's save collaborator

use listing_draft::{BumpId, UploadError};
use listing_validation::ValidationIncomplete;

/// Main sheet error type
#[derive(Debug, thiserror::Error)]
pub enum SheetError {
    /// Draft not ready to save
    #[error("cannot save: {0}")]
    Incomplete(#[from] ValidationIncomplete),

    /// Upload rejected or picker failure
    #[error("upload failed: {0}")]
    Upload(#[from] UploadError),

    /// The host's save handler failed
    #[error("save failed: {0}")]
    Save(#[from] SaveError),

    /// Upload requested but the host supplied no file picker
    #[error("no file picker configured")]
    NoFilePicker,

    /// Upload targeted an order bump that no longer exists
    #[error("order bump not found: {0}")]
    UnknownBump(BumpId),
}

/// Errors reported by a host [`SaveHandler`](crate::host::SaveHandler)
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SaveError {
    /// The host refused the submission
    #[error("rejected: {0}")]
    Rejected(String),

    /// The host could not be reached
    #[error("unavailable: {0}")]
    Unavailable(String),
}

impl SaveError {
    /// Check if retrying might succeed
    #[inline]
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Unavailable(_))
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File could not be read
    #[error("cannot read config: {0}")]
    Io(#[from] std::io::Error),

    /// File is not valid configuration
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}
