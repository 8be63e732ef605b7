//! Main keyword processor implementation

use std::borrow::Cow;
use std::collections::HashMap;
use std::path::Path;

use crate::api::loader;
use crate::api::{
    Config, ExtractOptions, KeywordEntry, KeywordMatch, Replacement, SentenceMatch,
};
use crate::domain::trie::Entries;
use crate::domain::{BoundarySet, CharText, FuzzyMatcher, Hit, Matcher, Segmenter, Trie};
use crate::error::{KeywordError, Result};

/// Keyword dictionary with extraction and replacement over text
///
/// Keywords can be added at any time between matching calls. Matching only
/// needs `&self`, so a processor can be shared across threads once built.
#[derive(Debug, Clone)]
pub struct KeywordProcessor {
    trie: Trie,
    word_chars: BoundarySet,
    case_sensitive: bool,
    segmenter: Segmenter,
}

impl KeywordProcessor {
    /// Create a case-insensitive processor with default settings
    pub fn new() -> Self {
        Self::from_valid_config(Config::default())
    }

    /// Create a processor with the given default case sensitivity
    pub fn with_case_sensitivity(case_sensitive: bool) -> Self {
        let mut processor = Self::new();
        processor.case_sensitive = case_sensitive;
        processor
    }

    /// Create a processor from a configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        let segmenter = config.segmenter()?;
        Ok(Self {
            trie: Trie::new(),
            word_chars: config.word_chars,
            case_sensitive: config.case_sensitive,
            segmenter,
        })
    }

    fn from_valid_config(config: Config) -> Self {
        Self {
            trie: Trie::new(),
            word_chars: config.word_chars,
            case_sensitive: config.case_sensitive,
            segmenter: Segmenter::default(),
        }
    }

    /// Default case sensitivity for new keywords
    pub fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Number of distinct keyword endpoints
    pub fn len(&self) -> usize {
        self.trie.len()
    }

    /// Whether no keyword has been added
    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }

    // ---- dictionary -------------------------------------------------------

    /// Add a keyword that reports itself
    pub fn add_keyword(&mut self, keyword: &str) -> Result<()> {
        self.add_keyword_entry(&KeywordEntry::new(keyword))
    }

    /// Add a keyword reporting `value`
    pub fn add_keyword_with_value(&mut self, keyword: &str, value: &str) -> Result<()> {
        self.add_keyword_entry(&KeywordEntry::new(keyword).value(value))
    }

    /// Add a keyword with full control over value and case sensitivity
    pub fn add_keyword_entry(&mut self, entry: &KeywordEntry) -> Result<()> {
        let case_sensitive = entry.case_sensitive.unwrap_or(self.case_sensitive);
        self.trie
            .insert(&entry.keyword, entry.clean_name(), case_sensitive)?;
        Ok(())
    }

    /// Add many keywords; nothing is inserted if any entry is invalid
    ///
    /// Returns the number of entries inserted.
    pub fn add_keywords_bulk<I>(&mut self, entries: I) -> Result<usize>
    where
        I: IntoIterator,
        I::Item: Into<KeywordEntry>,
    {
        let entries: Vec<KeywordEntry> = entries.into_iter().map(Into::into).collect();
        if let Some(bad) = entries.iter().find(|entry| entry.keyword.is_empty()) {
            return Err(KeywordError::InvalidKeyword {
                keyword: bad.keyword.clone(),
                reason: "keyword must not be empty",
            });
        }
        for entry in &entries {
            self.add_keyword_entry(entry)?;
        }
        tracing::debug!(
            inserted = entries.len(),
            keywords = self.trie.len(),
            nodes = self.trie.node_count(),
            "bulk insert"
        );
        Ok(entries.len())
    }

    /// Add `keyword -> value` pairs
    pub fn add_keywords_from_map<K, V>(
        &mut self,
        map: impl IntoIterator<Item = (K, V)>,
    ) -> Result<usize>
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.add_keywords_bulk(map)
    }

    /// Add `category -> [keywords]` groups; every keyword reports its category
    pub fn add_keywords_from_category_map<C, K>(
        &mut self,
        map: impl IntoIterator<Item = (C, Vec<K>)>,
    ) -> Result<usize>
    where
        C: Into<String>,
        K: Into<String>,
    {
        let mut entries = Vec::new();
        for (category, keywords) in map {
            let category = category.into();
            for keyword in keywords {
                entries.push(KeywordEntry::new(keyword).value(category.clone()));
            }
        }
        self.add_keywords_bulk(entries)
    }

    /// Load a dictionary file and add its keywords
    ///
    /// The processor is unchanged if the file cannot be read or parsed.
    pub fn add_keywords_from_file(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        let entries = loader::load_dictionary(path.as_ref())?;
        self.add_keywords_bulk(entries)
    }

    /// Value stored for an exact whole-word lookup
    pub fn get_keyword(&self, word: &str) -> Option<&str> {
        self.trie.lookup(word)
    }

    /// Whether `word` is a keyword
    pub fn contains_keyword(&self, word: &str) -> bool {
        self.get_keyword(word).is_some()
    }

    /// Lazily enumerate `(representative keyword, value)` pairs
    pub fn keywords(&self) -> Entries<'_> {
        self.trie.entries()
    }

    /// All keywords, one representative spelling per endpoint
    pub fn get_all_keywords(&self) -> HashMap<String, String> {
        self.keywords()
            .map(|(keyword, value)| (keyword, value.to_string()))
            .collect()
    }

    // ---- word characters --------------------------------------------------

    /// The live word-character set
    pub fn word_chars(&self) -> &BoundarySet {
        &self.word_chars
    }

    /// Mutable access to the word-character set; changes apply to the next call
    pub fn word_chars_mut(&mut self) -> &mut BoundarySet {
        &mut self.word_chars
    }

    /// Replace the word-character set
    pub fn set_word_chars(&mut self, word_chars: BoundarySet) {
        self.word_chars = word_chars;
    }

    // ---- matching ---------------------------------------------------------

    fn matcher(&self) -> Matcher<'_> {
        Matcher::new(&self.trie, &self.word_chars)
    }

    fn hits<'s>(&'s self, text: &CharText<'_>, options: &ExtractOptions) -> Vec<Hit<'s>> {
        FuzzyMatcher::new(self.matcher(), options.max_cost).find_all(text.chars())
    }

    /// Values of all keywords in `text`, left to right
    pub fn extract_keywords(&self, text: &str) -> Vec<String> {
        self.extract_with(text, &ExtractOptions::exact())
            .into_iter()
            .map(|found| found.value)
            .collect()
    }

    /// Keywords in `text` with their character spans
    pub fn extract_keywords_with_spans(&self, text: &str) -> Vec<KeywordMatch> {
        self.extract_with(text, &ExtractOptions::exact())
    }

    /// Values of keywords found within `max_cost` edits
    pub fn extract_keywords_fuzzy(&self, text: &str, max_cost: u32) -> Vec<String> {
        self.extract_with(text, &ExtractOptions::fuzzy(max_cost))
            .into_iter()
            .map(|found| found.value)
            .collect()
    }

    /// Extract with explicit options
    pub fn extract_with(&self, text: &str, options: &ExtractOptions) -> Vec<KeywordMatch> {
        let text = CharText::new(text);
        self.hits(&text, options)
            .into_iter()
            .map(|hit| KeywordMatch {
                value: hit.value.to_string(),
                start: hit.start,
                end: hit.end,
            })
            .collect()
    }

    /// Replace every keyword in `text` with its value
    pub fn replace_keywords(&self, text: &str) -> String {
        self.replace_keywords_with_spans(text).0
    }

    /// Replace keywords and report each substitution
    ///
    /// Spans refer to the original text.
    pub fn replace_keywords_with_spans(&self, text: &str) -> (String, Vec<Replacement>) {
        let chars = CharText::new(text);
        let hits = self.hits(&chars, &ExtractOptions::exact());

        let mut output = String::with_capacity(text.len());
        let mut replacements = Vec::with_capacity(hits.len());
        let mut cursor = 0;
        for hit in hits {
            output.push_str(chars.slice(cursor, hit.start));
            output.push_str(hit.value);
            replacements.push(Replacement {
                original: chars.slice(hit.start, hit.end).to_string(),
                replacement: hit.value.to_string(),
                start: hit.start,
                end: hit.end,
            });
            cursor = hit.end;
        }
        output.push_str(chars.slice(cursor, chars.len()));
        (output, replacements)
    }

    /// Segments of `text` that contain keywords, split at the configured
    /// delimiters
    pub fn extract_sentences<'p, 't>(&'p self, text: &'t str) -> Sentences<'p, 't> {
        Sentences {
            processor: self,
            segmenter: Cow::Borrowed(&self.segmenter),
            text,
            pos: 0,
        }
    }

    /// Like [`extract_sentences`](Self::extract_sentences) with explicit
    /// delimiters; an empty delimiter set is rejected
    pub fn extract_sentences_with<'p, 't>(
        &'p self,
        text: &'t str,
        delimiters: impl IntoIterator<Item = char>,
    ) -> Result<Sentences<'p, 't>> {
        Ok(Sentences {
            processor: self,
            segmenter: Cow::Owned(Segmenter::new(delimiters)?),
            text,
            pos: 0,
        })
    }
}

impl Default for KeywordProcessor {
    fn default() -> Self {
        Self::new()
    }
}

/// Lazy iterator over segments containing keywords
pub struct Sentences<'p, 't> {
    processor: &'p KeywordProcessor,
    segmenter: Cow<'p, Segmenter>,
    text: &'t str,
    pos: usize,
}

impl<'t> Iterator for Sentences<'_, 't> {
    type Item = SentenceMatch<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(segment) = self.segmenter.segment_at(self.text, self.pos) {
            self.pos += segment.len();

            let keywords = self.processor.extract_keywords(segment);
            if !keywords.is_empty() {
                return Some(SentenceMatch {
                    text: segment,
                    keywords,
                });
            }
        }
        None
    }
}
