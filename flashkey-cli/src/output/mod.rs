//! Output formatting module

use std::io;
use std::str::FromStr;

use anyhow::Result;
use flashkey_core::{KeywordMatch, Replacement, SentenceMatch};
use serde::Serialize;

use crate::error::CliError;

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output the result for one input document
    fn write_document(&mut self, document: &Document) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text, one item per line
    Text,
    /// JSON array with one object per input
    Json,
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(CliError::ConfigError(format!(
                "unknown output format {other:?} (expected text or json)"
            ))),
        }
    }
}

/// Result of running a command over one input
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    /// Input name
    pub source: String,
    /// Command-specific payload
    #[serde(flatten)]
    pub body: Body,
}

/// Command-specific payload of a [`Document`]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Body {
    /// Extracted values
    Keywords {
        /// Values in text order
        keywords: Vec<String>,
    },
    /// Extracted values with character spans
    Matches {
        /// Matches in text order
        matches: Vec<KeywordMatch>,
    },
    /// Rewritten text
    Replaced {
        /// Text after replacement
        text: String,
        /// Substitutions made, positions in the original text
        replacements: Vec<Replacement>,
    },
    /// Sentences containing keywords
    Sentences {
        /// Matching sentences
        sentences: Vec<SentenceRecord>,
    },
    /// Dictionary listing
    Dictionary {
        /// One entry per distinct keyword
        entries: Vec<DictionaryEntry>,
    },
}

/// Owned form of a sentence match
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SentenceRecord {
    /// Sentence text including trailing delimiters
    pub text: String,
    /// Values found in the sentence
    pub keywords: Vec<String>,
}

impl From<SentenceMatch<'_>> for SentenceRecord {
    fn from(found: SentenceMatch<'_>) -> Self {
        Self {
            text: found.text.to_string(),
            keywords: found.keywords,
        }
    }
}

/// One dictionary keyword and its value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DictionaryEntry {
    /// Representative spelling
    pub keyword: String,
    /// Reported value
    pub value: String,
}

/// Create a formatter writing to stdout
///
/// `headers` makes the text formatter label each document, for multi-file runs.
pub fn stdout_formatter(
    format: OutputFormat,
    pretty_json: bool,
    headers: bool,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(io::stdout(), headers)),
        OutputFormat::Json => Box::new(JsonFormatter::new(io::stdout(), pretty_json)),
    }
}
