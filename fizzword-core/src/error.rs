//! Error types for word replacement

use thiserror::Error;

/// Errors raised while validating input or building a configuration
///
/// Validation errors abort processing before any scanning happens, so a
/// caller never sees a partially replaced string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReplaceError {
    /// Input is absent, empty, or contains only whitespace
    #[error("input string cannot be null, empty, or whitespace-only")]
    InvalidInput,

    /// Input length falls outside the configured bounds
    #[error("input string length must be between {min} and {max} characters (got {length})")]
    InvalidLength {
        /// Length of the rejected input in characters
        length: usize,
        /// Inclusive lower bound
        min: usize,
        /// Inclusive upper bound
        max: usize,
    },

    /// Inconsistent configuration
    #[error("configuration error: {0}")]
    Config(String),
}

impl ReplaceError {
    /// Whether this error came from input validation rather than configuration
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ReplaceError::InvalidInput | ReplaceError::InvalidLength { .. }
        )
    }
}

/// Result type for word replacement operations
pub type Result<T> = std::result::Result<T, ReplaceError>;
