//! Application layer errors.
//!
//! These errors represent failures while obtaining or parsing a workspace,
//! or while writing to an inventory store. Per the parse contract, missing
//! or malformed *optional* node fields are never errors — only whole-input
//! failures surface here.

use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Reading the workspace from a local file failed.
    #[error("Unable to read Structurizr JSON file '{path}': {reason}")]
    SourceRead { path: String, reason: String },

    /// Fetching the workspace from a URL failed.
    #[error("Unable to fetch Structurizr JSON from URL '{url}': {reason}")]
    Fetch { url: String, reason: String },

    /// The workspace document is not valid JSON.
    #[error("Invalid JSON in Structurizr source '{location}': {reason}")]
    InvalidJson { location: String, reason: String },

    /// Inventory store access failed (lock poisoned, etc.).
    #[error("Inventory store error")]
    StoreLockError,

    /// The inventory store was handed a child for a group it never saw.
    #[error("Unknown inventory group '{group}'")]
    UnknownGroup { group: String },

    /// The inventory store was handed a variable for a host it never saw.
    #[error("Unknown inventory host '{host}'")]
    UnknownHost { host: String },

    /// A cache store operation failed. Callers treat this as a miss.
    #[error("Cache error: {reason}")]
    Cache { reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::SourceRead { path, .. } => vec![
                format!("Failed to read: {}", path),
                "Check that the file exists and is readable".into(),
                "Relative paths resolve against the inventory config directory".into(),
            ],
            Self::Fetch { url, .. } => vec![
                format!("Failed to fetch: {}", url),
                "Check the URL and your network connectivity".into(),
            ],
            Self::InvalidJson { location, .. } => vec![
                format!("The document at '{}' is not a valid workspace export", location),
                "Re-export the workspace from Structurizr and try again".into(),
            ],
            Self::StoreLockError => vec![
                "The inventory store is locked".into(),
                "Try again in a moment".into(),
            ],
            Self::Cache { .. } => vec![
                "The cache could not be read or written".into(),
                "Check permissions on the cache directory".into(),
            ],
            _ => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::SourceRead { .. } | Self::Fetch { .. } | Self::InvalidJson { .. } => {
                ErrorCategory::Parse
            }
            Self::StoreLockError
            | Self::UnknownGroup { .. }
            | Self::UnknownHost { .. }
            | Self::Cache { .. } => ErrorCategory::Internal,
        }
    }
}
