//! Input and output records of the keyword API
//!
//! All positions are character (code point) indices into the original text.

use serde::{Deserialize, Serialize};

/// A keyword to insert
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordEntry {
    /// Text to look for
    pub keyword: String,
    /// Value reported on a match; defaults to the keyword
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Per-keyword override of the processor default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_sensitive: Option<bool>,
}

impl KeywordEntry {
    /// Entry whose value is the keyword itself
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            value: None,
            case_sensitive: None,
        }
    }

    /// Set the reported value
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Override case sensitivity
    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = Some(case_sensitive);
        self
    }

    /// The value reported on a match
    pub fn clean_name(&self) -> &str {
        self.value.as_deref().unwrap_or(&self.keyword)
    }
}

impl<K: Into<String>, V: Into<String>> From<(K, V)> for KeywordEntry {
    fn from((keyword, value): (K, V)) -> Self {
        KeywordEntry::new(keyword).value(value)
    }
}

/// An extracted keyword with its span
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordMatch {
    /// Value stored for the keyword
    pub value: String,
    /// First matched character
    pub start: usize,
    /// One past the last matched character
    pub end: usize,
}

/// A substitution made by `replace_keywords_with_spans`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Replacement {
    /// Text found in the input
    pub original: String,
    /// Text written in its place
    pub replacement: String,
    /// Start in the original text
    pub start: usize,
    /// End in the original text
    pub end: usize,
}

/// A segment that contained at least one keyword
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SentenceMatch<'t> {
    /// The segment, trailing delimiters included
    pub text: &'t str,
    /// Values found in the segment, in order
    pub keywords: Vec<String>,
}
