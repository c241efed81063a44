//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// No files matched the given patterns
    NoFilesFound,
    /// Invalid file pattern
    InvalidPattern(String),
    /// Configuration error
    ConfigError(String),
    /// An input was rejected by the replacer
    Rejected {
        /// Where the input came from
        source: String,
        /// Validation message from the core
        reason: String,
    },
    /// Every input failed under --keep-going
    NothingProcessed(usize),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NoFilesFound => write!(f, "No files found matching the provided patterns"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::Rejected { source, reason } => write!(f, "{source}: {reason}"),
            CliError::NothingProcessed(failed) => {
                write!(f, "No input could be processed ({failed} rejected)")
            }
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
