//! Configuration module
//!
//! An optional TOML file supplies defaults; command-line flags override it.
//!
//! ```toml
//! [processing]
//! case_sensitive = false
//! max_cost = 0
//! delimiters = ".!?。！？\n"
//! extra_word_chars = "-"
//! removed_word_chars = "_"
//!
//! [output]
//! default_format = "json"
//! pretty_json = true
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use flashkey_core::{Config, DEFAULT_DELIMITERS};
use serde::{Deserialize, Serialize};

use crate::error::CliError;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Processing configuration
    #[serde(default)]
    pub processing: ProcessingConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Processing-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct ProcessingConfig {
    /// Default case sensitivity for dictionary keywords
    pub case_sensitive: bool,

    /// Edit budget for `extract`
    pub max_cost: u32,

    /// Sentence delimiters, one per character
    pub delimiters: String,

    /// Characters added to the word-character set
    pub extra_word_chars: String,

    /// Characters removed from the word-character set
    pub removed_word_chars: String,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            case_sensitive: false,
            max_cost: 0,
            delimiters: DEFAULT_DELIMITERS.iter().collect(),
            extra_word_chars: String::new(),
            removed_word_chars: String::new(),
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
        }
    }
}

impl CliConfig {
    /// Load a configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CliError::FileNotFound(path.display().to_string()).into());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()).into())
    }

    /// Load `path` if given, otherwise use defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let config = Self::from_file(path)?;
                log::info!("Loaded configuration from {}", path.display());
                Ok(config)
            }
            None => Ok(Self::default()),
        }
    }

    /// Build the engine configuration, letting `case_sensitive` override the file
    pub fn engine_config(&self, case_sensitive: bool) -> Result<Config> {
        Config::builder()
            .case_sensitive(case_sensitive || self.processing.case_sensitive)
            .delimiters(self.processing.delimiters.chars())
            .add_word_chars(self.processing.extra_word_chars.chars())
            .remove_word_chars(self.processing.removed_word_chars.chars())
            .build()
            .map_err(|e| CliError::ConfigError(e.to_string()).into())
    }
}
