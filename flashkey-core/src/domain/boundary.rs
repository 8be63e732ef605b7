//! Word-character set used for boundary decisions
//!
//! A character that is *not* in the set separates words. The default set is
//! ASCII letters, digits and underscore plus every Unicode alphabetic or
//! combining-mark character, so accented letters stay inside words.
//! Membership is stored as the default predicate plus explicit overrides,
//! which keeps the default set cheap while still behaving like an ordinary
//! mutable set.

use std::collections::HashSet;

use unicode_normalization::char::is_combining_mark;

use crate::domain::script::is_cjk;
use crate::error::{KeywordError, Result};

/// Default word-character predicate
#[inline]
pub fn is_default_word_char(ch: char) -> bool {
    if ch.is_ascii() {
        ch.is_ascii_alphanumeric() || ch == '_'
    } else {
        ch.is_alphabetic() || is_combining_mark(ch)
    }
}

/// Mutable set of word characters
///
/// Cloning yields an independent copy.
#[derive(Debug, Clone)]
pub struct BoundarySet {
    defaults: bool,
    added: HashSet<char>,
    removed: HashSet<char>,
}

impl Default for BoundarySet {
    fn default() -> Self {
        Self::new()
    }
}

impl BoundarySet {
    /// Create the default word-character set
    pub fn new() -> Self {
        Self {
            defaults: true,
            added: HashSet::new(),
            removed: HashSet::new(),
        }
    }

    /// Create a set with no word characters: every character separates words
    pub fn empty() -> Self {
        Self {
            defaults: false,
            added: HashSet::new(),
            removed: HashSet::new(),
        }
    }

    /// Check membership
    #[inline]
    pub fn contains(&self, ch: char) -> bool {
        if !self.removed.is_empty() && self.removed.contains(&ch) {
            return false;
        }
        if !self.added.is_empty() && self.added.contains(&ch) {
            return true;
        }
        self.defaults && is_default_word_char(ch)
    }

    /// Add a character; returns true if it was not already a member
    pub fn add(&mut self, ch: char) -> bool {
        let was_member = self.contains(ch);
        self.removed.remove(&ch);
        if !(self.defaults && is_default_word_char(ch)) {
            self.added.insert(ch);
        }
        !was_member
    }

    /// Remove a character, failing if it is not a member
    pub fn remove(&mut self, ch: char) -> Result<()> {
        if !self.contains(ch) {
            return Err(KeywordError::InvalidArgument(format!(
                "{ch:?} is not a word character"
            )));
        }
        self.discard(ch);
        Ok(())
    }

    /// Remove a character if present
    pub fn discard(&mut self, ch: char) {
        self.added.remove(&ch);
        if self.defaults && is_default_word_char(ch) {
            self.removed.insert(ch);
        }
    }

    /// Whether `ch` ends a word: not a word character, or CJK
    #[inline]
    pub fn breaks_word(&self, ch: char) -> bool {
        is_cjk(ch) || !self.contains(ch)
    }

    /// Iterate over every member, in code point order
    ///
    /// The default set covers a large part of Unicode, so this walks the
    /// whole code space lazily.
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        (0..=char::MAX as u32)
            .filter_map(char::from_u32)
            .filter(move |&ch| self.contains(ch))
    }
}

impl FromIterator<char> for BoundarySet {
    /// Build a set containing exactly the given characters
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut set = Self::empty();
        set.extend(iter);
        set
    }
}

impl Extend<char> for BoundarySet {
    fn extend<I: IntoIterator<Item = char>>(&mut self, iter: I) {
        for ch in iter {
            self.add(ch);
        }
    }
}
