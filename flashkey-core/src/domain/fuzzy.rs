//! Bounded edit-distance matching over the keyword trie
//!
//! Levenshtein operations are scored while walking the trie instead of on
//! materialised strings:
//! - match (0): the text character follows an edge, folding as in exact mode
//! - substitution (1): any child, consuming one text character
//! - deletion (1): any child, consuming no text (keyword character missing)
//! - insertion (1): stay on the node, consuming one text character
//!
//! Insertion at the root only skips characters inside a word, so a hit never
//! starts on whitespace, punctuation or a CJK character it did not match.
//!
//! Every costed branch spends budget, so the search per position is finite.

use std::collections::HashMap;

use crate::domain::boundary::BoundarySet;
use crate::domain::matcher::{Hit, Matcher};
use crate::domain::trie::{NodeId, Trie};

/// Best keyword found from one start position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate<'a> {
    /// Value stored for the keyword
    pub value: &'a str,
    /// One past the last consumed text character
    pub end: usize,
    /// Edit cost incurred
    pub cost: u32,
}

impl Candidate<'_> {
    /// Lower cost wins, then the longer text span
    fn beats(&self, other: &Candidate<'_>) -> bool {
        self.cost < other.cost || (self.cost == other.cost && self.end > other.end)
    }
}

/// Fuzzy matcher sharing the exact matcher's boundary rule
#[derive(Clone, Copy)]
pub struct FuzzyMatcher<'a> {
    matcher: Matcher<'a>,
    max_cost: u32,
}

impl<'a> FuzzyMatcher<'a> {
    /// Create a fuzzy matcher with an edit budget
    pub fn new(matcher: Matcher<'a>, max_cost: u32) -> Self {
        Self { matcher, max_cost }
    }

    /// Lowest-cost keyword starting at `start`
    pub fn best_at(&self, chars: &[char], start: usize) -> Option<Candidate<'a>> {
        let mut search = Search {
            trie: self.matcher.trie(),
            boundary: self.matcher.boundary(),
            chars,
            start,
            max_cost: self.max_cost,
            cheapest: HashMap::new(),
            best: None,
        };
        search.visit(NodeId::ROOT, start, 0);
        search.best
    }

    /// All accepted fuzzy matches, left to right
    pub fn find_all(&self, chars: &[char]) -> Vec<Hit<'a>> {
        if self.max_cost == 0 {
            return self.matcher.find_all(chars);
        }
        let hits = self.matcher.scan_with(chars, |start| {
            self.best_at(chars, start)
                .map(|candidate| (candidate.end, candidate.value))
        });
        tracing::trace!(
            chars = chars.len(),
            max_cost = self.max_cost,
            hits = hits.len(),
            "fuzzy scan"
        );
        hits
    }
}

struct Search<'s, 'a> {
    trie: &'a Trie,
    boundary: &'a BoundarySet,
    chars: &'s [char],
    start: usize,
    max_cost: u32,
    /// Lowest cost seen per (node, position); a dearer revisit cannot do better
    cheapest: HashMap<(NodeId, usize), u32>,
    best: Option<Candidate<'a>>,
}

impl<'a> Search<'_, 'a> {
    fn visit(&mut self, node: NodeId, pos: usize, cost: u32) {
        if let Some(best) = &self.best {
            if cost > best.cost {
                return;
            }
        }
        match self.cheapest.get(&(node, pos)) {
            Some(&seen) if seen <= cost => return,
            _ => {
                self.cheapest.insert((node, pos), cost);
            }
        }

        if pos > self.start {
            if let Some(value) = self.trie.node(node).terminal() {
                let candidate = Candidate {
                    value,
                    end: pos,
                    cost,
                };
                if self.best.as_ref().map_or(true, |best| candidate.beats(best)) {
                    self.best = Some(candidate);
                }
            }
        }

        let affordable = cost < self.max_cost;

        if let Some(&ch) = self.chars.get(pos) {
            let matched = self.trie.step(node, ch);
            if let Some(next) = matched {
                self.visit(next, pos + 1, cost);
            }
            if affordable {
                for child in self.trie.children(node) {
                    if Some(child) != matched {
                        self.visit(child, pos + 1, cost + 1);
                    }
                }
                if node != NodeId::ROOT || !self.boundary.breaks_word(ch) {
                    self.visit(node, pos + 1, cost + 1);
                }
            }
        }

        if affordable {
            for child in self.trie.children(node) {
                self.visit(child, pos, cost + 1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::matcher::CharText;

    fn fuzzy_values(words: &[&str], text: &str, max_cost: u32) -> Vec<String> {
        let mut trie = Trie::new();
        for word in words {
            trie.insert(word, word, false).unwrap();
        }
        let boundary = BoundarySet::new();
        let text = CharText::new(text);
        let matcher = Matcher::new(&trie, &boundary);
        FuzzyMatcher::new(matcher, max_cost)
            .find_all(text.chars())
            .into_iter()
            .map(|hit| hit.value.to_string())
            .collect()
    }

    #[test]
    fn test_deletion() {
        assert_eq!(fuzzy_values(&["機器學習"], "我喜歡機器習", 1), vec!["機器學習"]);
        assert!(fuzzy_values(&["機器學習"], "我喜歡機器習", 0).is_empty());
    }

    #[test]
    fn test_substitution() {
        assert_eq!(fuzzy_values(&["人工智慧"], "這是人工智障應用", 1), vec!["人工智慧"]);
        assert_eq!(
            fuzzy_values(&["iPhone 15"], "New iPhone 1S is here", 1),
            vec!["iPhone 15"]
        );
    }

    #[test]
    fn test_insertion() {
        assert_eq!(fuzzy_values(&["colour"], "the colouur red", 1), vec!["colour"]);
        assert!(fuzzy_values(&["colour"], "the colouuur red", 1).is_empty());
    }

    #[test]
    fn test_leading_insertion() {
        assert_eq!(fuzzy_values(&["apple"], "I ate xapple", 1), vec!["apple"]);
        assert!(fuzzy_values(&["apple"], "I ate xapple", 0).is_empty());
        assert!(fuzzy_values(&["apple"], "I ate xyapple", 1).is_empty());
    }

    #[test]
    fn test_leading_insertion_skips_no_breaker() {
        let mut trie = Trie::new();
        trie.insert("apple", "apple", false).unwrap();
        trie.insert("機器學習", "機器學習", false).unwrap();
        let boundary = BoundarySet::new();
        let matcher = Matcher::new(&trie, &boundary);
        let fuzzy = FuzzyMatcher::new(matcher, 1);

        let chars: Vec<char> = "I ate apple".chars().collect();
        let spans: Vec<_> = fuzzy.find_all(&chars).iter().map(|h| (h.start, h.end)).collect();
        assert_eq!(spans, vec![(6, 11)]);

        let chars: Vec<char> = "我喜歡機器學習".chars().collect();
        let spans: Vec<_> = fuzzy.find_all(&chars).iter().map(|h| (h.start, h.end)).collect();
        assert_eq!(spans, vec![(3, 7)]);
    }

    #[test]
    fn test_leading_insertion_span_starts_at_word() {
        let mut trie = Trie::new();
        trie.insert("apple", "apple", false).unwrap();
        let boundary = BoundarySet::new();
        let chars: Vec<char> = "xapple".chars().collect();
        let matcher = Matcher::new(&trie, &boundary);
        let hits = FuzzyMatcher::new(matcher, 1).find_all(&chars);
        assert_eq!(hits.len(), 1);
        assert_eq!((hits[0].start, hits[0].end), (0, 6));
    }

    #[test]
    fn test_budget_is_respected() {
        assert!(fuzzy_values(&["keyword"], "a kezwxrd here", 1).is_empty());
        assert_eq!(fuzzy_values(&["keyword"], "a kezwxrd here", 2), vec!["keyword"]);
    }

    #[test]
    fn test_exact_match_costs_nothing() {
        let mut trie = Trie::new();
        trie.insert("rust", "rust", false).unwrap();
        let boundary = BoundarySet::new();
        let chars: Vec<char> = "rust".chars().collect();
        let matcher = Matcher::new(&trie, &boundary);
        let candidate = FuzzyMatcher::new(matcher, 2).best_at(&chars, 0).unwrap();
        assert_eq!(candidate.cost, 0);
        assert_eq!(candidate.end, 4);
    }

    #[test]
    fn test_candidate_ordering() {
        let cheap = Candidate {
            value: "a",
            end: 2,
            cost: 0,
        };
        let long = Candidate {
            value: "b",
            end: 5,
            cost: 1,
        };
        assert!(cheap.beats(&long));
        let longer_same_cost = Candidate {
            value: "c",
            end: 3,
            cost: 0,
        };
        assert!(longer_same_cost.beats(&cheap));
    }
}
