//! Input handling module

pub mod file_reader;
pub mod glob_resolver;

pub use file_reader::{FileReader, STDIN_SOURCE};
pub use glob_resolver::resolve_patterns;

use anyhow::Result;
use std::path::PathBuf;

/// Where a document comes from; contents are read on demand
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Standard input
    Stdin,
    /// A resolved file
    File(PathBuf),
}

impl Source {
    /// Resolve glob patterns, falling back to standard input when there are none
    pub fn resolve(patterns: &[String]) -> Result<Vec<Source>> {
        if patterns.is_empty() {
            log::debug!("Reading from standard input");
            return Ok(vec![Source::Stdin]);
        }
        Ok(resolve_patterns(patterns)?
            .into_iter()
            .map(Source::File)
            .collect())
    }

    /// Display name used in output records
    pub fn name(&self) -> String {
        match self {
            Source::Stdin => STDIN_SOURCE.to_string(),
            Source::File(path) => path.display().to_string(),
        }
    }

    /// Read the whole document
    pub fn read(&self) -> Result<String> {
        match self {
            Source::Stdin => FileReader::read_stdin(),
            Source::File(path) => FileReader::read_text(path),
        }
    }
}
