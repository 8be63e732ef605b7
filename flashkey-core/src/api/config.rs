//! Configuration API for keyword processing

use crate::domain::{BoundarySet, Segmenter, DEFAULT_DELIMITERS};
use crate::error::{KeywordError, Result};

/// Processor configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub(crate) case_sensitive: bool,
    pub(crate) delimiters: Vec<char>,
    pub(crate) word_chars: BoundarySet,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            case_sensitive: false,
            delimiters: DEFAULT_DELIMITERS.to_vec(),
            word_chars: BoundarySet::new(),
        }
    }
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Default case sensitivity for inserted keywords
    pub fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Sentence delimiters
    pub fn delimiters(&self) -> &[char] {
        &self.delimiters
    }

    /// Validate the configuration
    pub(crate) fn validate(&self) -> Result<()> {
        if self.delimiters.is_empty() {
            return Err(KeywordError::InvalidArgument(
                "delimiters must not be empty".into(),
            ));
        }
        Ok(())
    }

    pub(crate) fn segmenter(&self) -> Result<Segmenter> {
        Segmenter::new(self.delimiters.iter().copied())
    }
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    case_sensitive: Option<bool>,
    delimiters: Option<Vec<char>>,
    word_chars: Option<BoundarySet>,
    extra_word_chars: Vec<char>,
    removed_word_chars: Vec<char>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default case sensitivity
    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = Some(case_sensitive);
        self
    }

    /// Set the sentence delimiters
    pub fn delimiters(mut self, delimiters: impl IntoIterator<Item = char>) -> Self {
        self.delimiters = Some(delimiters.into_iter().collect());
        self
    }

    /// Replace the whole word-character set
    pub fn word_chars(mut self, word_chars: BoundarySet) -> Self {
        self.word_chars = Some(word_chars);
        self
    }

    /// Treat additional characters as word characters
    pub fn add_word_chars(mut self, chars: impl IntoIterator<Item = char>) -> Self {
        self.extra_word_chars.extend(chars);
        self
    }

    /// Treat characters as separators
    pub fn remove_word_chars(mut self, chars: impl IntoIterator<Item = char>) -> Self {
        self.removed_word_chars.extend(chars);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        let mut config = Config::default();

        if let Some(case_sensitive) = self.case_sensitive {
            config.case_sensitive = case_sensitive;
        }

        if let Some(delimiters) = self.delimiters {
            config.delimiters = delimiters;
        }

        if let Some(word_chars) = self.word_chars {
            config.word_chars = word_chars;
        }
        config.word_chars.extend(self.extra_word_chars);
        for ch in self.removed_word_chars {
            config.word_chars.discard(ch);
        }

        config.validate()?;
        Ok(config)
    }
}

/// Options for a single extraction call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractOptions {
    pub(crate) max_cost: u32,
}

impl ExtractOptions {
    /// Create an options builder
    pub fn builder() -> ExtractOptionsBuilder {
        ExtractOptionsBuilder::default()
    }

    /// Exact matching
    pub fn exact() -> Self {
        Self::default()
    }

    /// Fuzzy matching within `max_cost` edits
    pub fn fuzzy(max_cost: u32) -> Self {
        Self { max_cost }
    }

    /// Edit budget; zero means exact matching
    pub fn max_cost(&self) -> u32 {
        self.max_cost
    }
}

/// Builder for [`ExtractOptions`] accepting untrusted values
#[derive(Debug, Default)]
pub struct ExtractOptionsBuilder {
    max_cost: Option<i64>,
}

impl ExtractOptionsBuilder {
    /// Set the edit budget
    pub fn max_cost(mut self, max_cost: i64) -> Self {
        self.max_cost = Some(max_cost);
        self
    }

    /// Build the options
    pub fn build(self) -> Result<ExtractOptions> {
        let max_cost = match self.max_cost {
            None => 0,
            Some(cost) if cost < 0 => {
                return Err(KeywordError::InvalidArgument(format!(
                    "max_cost must be non-negative, got {cost}"
                )))
            }
            Some(cost) => u32::try_from(cost).map_err(|_| {
                KeywordError::InvalidArgument(format!("max_cost {cost} is too large"))
            })?,
        };
        Ok(ExtractOptions { max_cost })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(!config.case_sensitive());
        assert_eq!(config.delimiters(), DEFAULT_DELIMITERS);
        assert!(config.word_chars.contains('a'));
    }

    #[test]
    fn test_builder_overrides() {
        let config = Config::builder()
            .case_sensitive(true)
            .delimiters(['|'])
            .add_word_chars(['-'])
            .remove_word_chars(['_'])
            .build()
            .unwrap();

        assert!(config.case_sensitive());
        assert_eq!(config.delimiters(), &['|']);
        assert!(config.word_chars.contains('-'));
        assert!(!config.word_chars.contains('_'));
    }

    #[test]
    fn test_empty_delimiters_rejected() {
        let result = Config::builder().delimiters(std::iter::empty()).build();
        assert!(matches!(result, Err(KeywordError::InvalidArgument(_))));
    }

    #[test]
    fn test_extract_options() {
        assert_eq!(ExtractOptions::builder().build().unwrap().max_cost(), 0);
        assert_eq!(
            ExtractOptions::builder().max_cost(2).build().unwrap(),
            ExtractOptions::fuzzy(2)
        );
        assert!(matches!(
            ExtractOptions::builder().max_cost(-1).build(),
            Err(KeywordError::InvalidArgument(_))
        ));
    }
}
