//! Single-pass keyword extraction and replacement
//!
//! This crate finds and replaces the keywords of an arbitrarily large
//! dictionary in one left-to-right pass over the text, with cost independent
//! of dictionary size. It is the classic alternative to compiling one huge
//! alternation regular expression.
//!
//! # Architecture
//!
//! - **Domain layer**: word-character set, CJK classification, the keyword
//!   trie and the exact / fuzzy scans over it
//! - **API layer**: configuration, the [`KeywordProcessor`] facade and
//!   dictionary file loading
//!
//! # Example
//!
//! ```rust
//! use flashkey_core::KeywordProcessor;
//!
//! let mut processor = KeywordProcessor::new();
//! processor.add_keyword_with_value("Big Apple", "New York").unwrap();
//! processor.add_keyword("Bay Area").unwrap();
//!
//! let found = processor.extract_keywords("I love big apple and Bay Area.");
//! assert_eq!(found, vec!["New York", "Bay Area"]);
//!
//! let replaced = processor.replace_keywords("I love Big Apple.");
//! assert_eq!(replaced, "I love New York.");
//! ```
//!
//! Offsets reported anywhere in this crate are character (code point)
//! indices into the original text.

#![warn(missing_docs)]

pub mod api;
pub mod domain;
pub mod error;

pub use api::{
    Config, ConfigBuilder, ExtractOptions, ExtractOptionsBuilder, KeywordEntry, KeywordMatch,
    KeywordProcessor, Replacement, SentenceMatch, Sentences,
};
pub use domain::{BoundarySet, DEFAULT_DELIMITERS};
pub use error::{KeywordError, Result};
