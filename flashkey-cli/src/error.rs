//! Error handling for the CLI application

use std::fmt;

use flashkey_core::KeywordError;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// File not found or inaccessible
    FileNotFound(String),
    /// Configuration error
    ConfigError(String),
    /// Keyword dictionary could not be loaded
    DictionaryError(String),
    /// Invalid command-line argument
    InvalidArgument(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::DictionaryError(msg) => write!(f, "Dictionary error: {msg}"),
            CliError::InvalidArgument(msg) => write!(f, "Invalid argument: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Wrap an engine argument error without repeating its prefix
    pub fn invalid_argument(error: KeywordError) -> Self {
        match error {
            KeywordError::InvalidArgument(msg) => CliError::InvalidArgument(msg),
            other => CliError::InvalidArgument(other.to_string()),
        }
    }
}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
