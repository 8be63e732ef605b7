//! Exact longest-match scan
//!
//! One left-to-right pass. At each position the trie is walked as far as the
//! text allows, one character at a time, and the deepest terminal becomes the
//! candidate. A candidate is kept only if both of its sides are open (see
//! [`Matcher::accepts`]); kept matches never overlap.

use crate::domain::boundary::BoundarySet;
use crate::domain::trie::{NodeId, Trie};

/// A match in character (code point) coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit<'a> {
    /// Value stored for the matched keyword
    pub value: &'a str,
    /// First matched character
    pub start: usize,
    /// One past the last matched character
    pub end: usize,
}

/// Text decoded into characters, with byte offsets kept for slicing
#[derive(Debug)]
pub struct CharText<'t> {
    text: &'t str,
    chars: Vec<char>,
    offsets: Vec<usize>,
}

impl<'t> CharText<'t> {
    /// Decode `text`
    pub fn new(text: &'t str) -> Self {
        let mut chars = Vec::with_capacity(text.len());
        let mut offsets = Vec::with_capacity(text.len() + 1);
        for (offset, ch) in text.char_indices() {
            chars.push(ch);
            offsets.push(offset);
        }
        offsets.push(text.len());
        Self {
            text,
            chars,
            offsets,
        }
    }

    /// The decoded characters
    #[inline]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Number of characters
    #[inline]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Whether the text is empty
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Slice by character range
    pub fn slice(&self, start: usize, end: usize) -> &'t str {
        &self.text[self.offsets[start]..self.offsets[end]]
    }
}

/// Exact matcher over a trie and a word-character set
#[derive(Clone, Copy)]
pub struct Matcher<'a> {
    trie: &'a Trie,
    boundary: &'a BoundarySet,
}

impl<'a> Matcher<'a> {
    /// Create a matcher
    pub fn new(trie: &'a Trie, boundary: &'a BoundarySet) -> Self {
        Self { trie, boundary }
    }

    /// The trie being matched
    pub fn trie(&self) -> &'a Trie {
        self.trie
    }

    /// The word-character set in force
    pub fn boundary(&self) -> &'a BoundarySet {
        self.boundary
    }

    /// Whether a match may begin at `start`
    ///
    /// True at the start of text, after a breaker, or when the first matched
    /// character is itself a breaker.
    #[inline]
    pub fn left_open(&self, chars: &[char], start: usize) -> bool {
        start == 0
            || self.boundary.breaks_word(chars[start - 1])
            || chars
                .get(start)
                .is_some_and(|&ch| self.boundary.breaks_word(ch))
    }

    /// Whether a match may end at `end`
    ///
    /// True at the end of text, before a breaker, or when the last matched
    /// character is itself a breaker.
    #[inline]
    pub fn right_open(&self, chars: &[char], end: usize) -> bool {
        end == chars.len()
            || self.boundary.breaks_word(chars[end])
            || (end > 0 && self.boundary.breaks_word(chars[end - 1]))
    }

    /// Acceptance rule for a candidate span
    #[inline]
    pub fn accepts(&self, chars: &[char], start: usize, end: usize) -> bool {
        self.left_open(chars, start) && self.right_open(chars, end)
    }

    /// Deepest terminal reachable from `start`, as `(end, value)`
    pub fn longest_at(&self, chars: &[char], start: usize) -> Option<(usize, &'a str)> {
        let mut node = NodeId::ROOT;
        let mut best = None;
        for (pos, &ch) in chars.iter().enumerate().skip(start) {
            match self.trie.step(node, ch) {
                Some(next) => node = next,
                None => break,
            }
            if let Some(value) = self.trie.node(node).terminal() {
                best = Some((pos + 1, value));
            }
        }
        best
    }

    /// Scan with an arbitrary candidate finder
    ///
    /// `candidate(start)` proposes `(end, value)` for a position whose left
    /// side is open; accepted candidates advance the cursor past their end.
    pub fn scan_with<F>(&self, chars: &[char], mut candidate: F) -> Vec<Hit<'a>>
    where
        F: FnMut(usize) -> Option<(usize, &'a str)>,
    {
        let mut hits = Vec::new();
        let mut pos = 0;
        while pos < chars.len() {
            if self.left_open(chars, pos) {
                if let Some((end, value)) = candidate(pos) {
                    if end > pos && self.right_open(chars, end) {
                        hits.push(Hit {
                            value,
                            start: pos,
                            end,
                        });
                        pos = end;
                        continue;
                    }
                }
            }
            pos += 1;
        }
        hits
    }

    /// All accepted exact matches, left to right
    pub fn find_all(&self, chars: &[char]) -> Vec<Hit<'a>> {
        let hits = self.scan_with(chars, |start| self.longest_at(chars, start));
        tracing::trace!(chars = chars.len(), hits = hits.len(), "exact scan");
        hits
    }
}
