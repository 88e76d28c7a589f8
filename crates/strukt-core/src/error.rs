//! Unified error handling for Strukt Core.
//!
//! This module provides a unified error type that wraps application errors,
//! with rich context and user-actionable suggestions.
//!
//! There is deliberately no domain error type: every domain operation
//! (property normalization, name sanitization, variable extraction) is
//! total — malformed optional input degrades to empty values instead of
//! failing.

use thiserror::Error;

use crate::application::ApplicationError;

/// Root error type for Strukt Core operations.
///
/// This enum wraps all possible errors that can occur when using
/// strukt-core, providing a unified interface for error handling.
#[derive(Debug, Error, Clone)]
pub enum StruktError {
    /// Errors from the application layer (source reading, store failures).
    #[error("Parse error: {0}")]
    Application(#[from] ApplicationError),

    /// Configuration or setup errors.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl StruktError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Application(e) => e.suggestions(),
            Self::Configuration { message } => vec![
                format!("Configuration issue: {}", message),
                "Check your inventory source file and try again".into(),
            ],
            Self::Internal { .. } => vec![
                "This appears to be a bug in Strukt".into(),
                "Please report this issue at: https://github.com/strukt-rs/strukt/issues".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Application(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Parse,
    NotFound,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type StruktResult<T> = Result<T, StruktError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_errors_categorize() {
        let err = StruktError::Configuration {
            message: "'source' option is required".into(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert!(!err.suggestions().is_empty());
    }

    #[test]
    fn application_errors_pass_through_category() {
        let err = StruktError::from(ApplicationError::InvalidJson {
            location: "workspace.json".into(),
            reason: "expected value at line 1".into(),
        });
        assert_eq!(err.category(), ErrorCategory::Parse);
    }
}
