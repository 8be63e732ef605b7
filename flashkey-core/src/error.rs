//! Error types for keyword processing
//!
//! Every error is raised synchronously by the call that triggers it. The
//! engine performs no I/O of its own, so apart from dictionary loading there
//! are no transient failures.

use thiserror::Error;

/// Errors produced by the keyword engine and its dictionary loader
#[derive(Error, Debug)]
pub enum KeywordError {
    /// A keyword could not be inserted
    #[error("invalid keyword {keyword:?}: {reason}")]
    InvalidKeyword {
        /// The rejected keyword
        keyword: String,
        /// Why it was rejected
        reason: &'static str,
    },

    /// An argument was outside its valid domain
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A dictionary file could not be parsed
    #[error("malformed dictionary {path}: {reason}")]
    MalformedDictionary {
        /// The dictionary file path
        path: String,
        /// Parser diagnostic
        reason: String,
    },

    /// I/O error while reading a dictionary
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl KeywordError {
    pub(crate) fn empty_keyword() -> Self {
        KeywordError::InvalidKeyword {
            keyword: String::new(),
            reason: "keyword must not be empty",
        }
    }
}

/// Result type for keyword operations
pub type Result<T> = std::result::Result<T, KeywordError>;
