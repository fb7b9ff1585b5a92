//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.
//!
//! Note the deliberately small surface: malformed input is never an error
//! (parsers degrade to a best-effort tree), and an existing target path is a
//! recorded skip, not a failure. What remains is I/O.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The source text could not be obtained at all.
    ///
    /// The only hard failure a caller ever sees from a parse workflow.
    #[error("cannot read source at {path}: {reason}")]
    SourceUnreadable { path: PathBuf, reason: String },

    /// A directory or file creation failed.
    ///
    /// Raised by `Filesystem` adapters; the materializer catches it per node
    /// and converts it into an `errors` tally entry.
    #[error("write failed at {path}: {reason}")]
    WriteFailed { path: PathBuf, reason: String },

    /// The reverse scanner could not traverse a directory.
    #[error("scan failed at {path}: {reason}")]
    ScanFailed { path: PathBuf, reason: String },

    /// Shared state access failed (lock poisoned, etc.).
    #[error("adapter state error")]
    LockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::SourceUnreadable { path, .. } => vec![
                format!("Could not read: {}", path.display()),
                "Check that the file exists and is readable".into(),
                "Run 'treeform init' to create a sample structure file".into(),
            ],
            Self::WriteFailed { path, .. } => vec![
                format!("Failed to write: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
            ],
            Self::ScanFailed { path, .. } => vec![
                format!("Failed to traverse: {}", path.display()),
                "Check that the directory exists and is readable".into(),
            ],
            Self::LockError => vec![
                "An adapter's internal lock was poisoned".into(),
                "Try again in a moment".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::SourceUnreadable { .. } => ErrorCategory::NotFound,
            Self::WriteFailed { .. } | Self::ScanFailed { .. } => ErrorCategory::Internal,
            Self::LockError => ErrorCategory::Internal,
        }
    }
}
