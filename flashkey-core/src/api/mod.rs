//! Public keyword API
//!
//! This module provides the interface used by the CLI and by library
//! callers, hiding the trie and scan internals.

mod config;
pub mod loader;
mod output;
mod processor;


pub use config::{Config, ConfigBuilder, ExtractOptions, ExtractOptionsBuilder};
pub use output::{KeywordEntry, KeywordMatch, Replacement, SentenceMatch};
pub use processor::{KeywordProcessor, Sentences};
