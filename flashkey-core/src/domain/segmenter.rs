//! Delimiter-run segmentation
//!
//! Text is cut into maximal runs free of delimiters, each followed by its
//! whole trailing delimiter run, so `"cool!!! ok"` yields `"cool!!!"` and
//! `" ok"`. Concatenating the segments reproduces the text.

use crate::error::{KeywordError, Result};

/// Default sentence delimiters
pub const DEFAULT_DELIMITERS: &[char] = &['.', '!', '?', '。', '！', '？', '\n'];

/// Splits text at delimiter runs
#[derive(Debug, Clone)]
pub struct Segmenter {
    delimiters: Vec<char>,
}

impl Default for Segmenter {
    fn default() -> Self {
        Self {
            delimiters: DEFAULT_DELIMITERS.to_vec(),
        }
    }
}

impl Segmenter {
    /// Create a segmenter; at least one delimiter is required
    pub fn new(delimiters: impl IntoIterator<Item = char>) -> Result<Self> {
        let mut list: Vec<char> = Vec::new();
        for ch in delimiters {
            if !list.contains(&ch) {
                list.push(ch);
            }
        }
        if list.is_empty() {
            return Err(KeywordError::InvalidArgument(
                "delimiter set must not be empty".into(),
            ));
        }
        Ok(Self { delimiters: list })
    }

    /// The delimiter characters
    pub fn delimiters(&self) -> &[char] {
        &self.delimiters
    }

    #[inline]
    fn is_delimiter(&self, ch: char) -> bool {
        self.delimiters.contains(&ch)
    }

    /// The segment of `text` starting at byte offset `pos`, if any
    pub fn segment_at<'t>(&self, text: &'t str, pos: usize) -> Option<&'t str> {
        let rest = text.get(pos..).filter(|rest| !rest.is_empty())?;

        let mut in_delimiters = false;
        let mut end = rest.len();
        for (offset, ch) in rest.char_indices() {
            if self.is_delimiter(ch) {
                in_delimiters = true;
            } else if in_delimiters {
                end = offset;
                break;
            }
        }
        Some(&rest[..end])
    }

    /// Lazily split `text`
    pub fn segments<'s, 't>(&'s self, text: &'t str) -> Segments<'s, 't> {
        Segments {
            segmenter: self,
            text,
            pos: 0,
        }
    }
}

/// Iterator over the segments of a text
pub struct Segments<'s, 't> {
    segmenter: &'s Segmenter,
    text: &'t str,
    pos: usize,
}

impl<'t> Iterator for Segments<'_, 't> {
    type Item = &'t str;

    fn next(&mut self) -> Option<Self::Item> {
        let segment = self.segmenter.segment_at(self.text, self.pos)?;
        self.pos += segment.len();
        Some(segment)
    }
}
