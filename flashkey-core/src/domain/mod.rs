//! Matching engine internals
//!
//! Pure, allocation-light algorithms with no I/O: the word-character set,
//! script classification, the keyword trie and the scans built on it.

pub mod boundary;
pub mod fuzzy;
pub mod matcher;
pub mod script;
pub mod segmenter;
pub mod trie;

pub use boundary::BoundarySet;
pub use fuzzy::{Candidate, FuzzyMatcher};
pub use matcher::{CharText, Hit, Matcher};
pub use script::is_cjk;
pub use segmenter::{Segmenter, DEFAULT_DELIMITERS};
pub use trie::{fold_char, NodeId, Trie};
