// ============================================================================
// domain/error.rs - DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (for retry logic)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("invalid node name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("'{name}' is a file and cannot have children")]
    NotADirectory { name: String },

    #[error("'{name}' is a directory and cannot carry content")]
    NotAFile { name: String },

    // ========================================================================
    // Constraint Violations
    // ========================================================================
    #[error("node handle {index} is out of bounds for this tree")]
    NodeOutOfBounds { index: usize },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidName { name, reason } => vec![
                format!("Node name '{}' is invalid: {}", name, reason),
                "Names must be non-empty and free of path separators".into(),
                "Nest entries with indentation or headings, not embedded slashes".into(),
            ],
            Self::NotADirectory { name } => vec![
                format!("'{}' was classified as a file", name),
                "Append '/' to the label to force a directory".into(),
            ],
            Self::NotAFile { name } => vec![
                format!("'{}' was classified as a directory", name),
                "Only file entries can carry fenced code content".into(),
            ],
            Self::NodeOutOfBounds { .. } => vec![
                "A node handle from another tree was used here".into(),
                "Handles are only valid for the tree that minted them".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidName { .. } | Self::NotADirectory { .. } | Self::NotAFile { .. } => {
                ErrorCategory::Validation
            }
            Self::NodeOutOfBounds { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
