//! Arena-backed keyword trie
//!
//! Nodes live in a single `Vec` and are addressed by [`NodeId`]. A
//! case-insensitive insertion points the lower- and upper-case edge of a
//! character at the same child, so one node can have several parents and the
//! store is a DAG rather than a tree. Nodes are never removed.
//!
//! Edges accumulate across insertions; terminal payloads are last-write-wins.
//! Inserting `"us"` case-insensitively and then `"US"` case-sensitively makes
//! both land on the same endpoint, and the second value replaces the first
//! for every spelling.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

use smallvec::SmallVec;

use crate::error::{KeywordError, Result};

/// Index of a node in the arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    /// The root node
    pub const ROOT: NodeId = NodeId(0);

    #[inline]
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// Outgoing edge
#[derive(Debug, Clone, Copy)]
struct Edge {
    target: NodeId,
    /// Created by a case-insensitive insertion: the edge also accepts any
    /// character whose per-character fold equals the label.
    folds: bool,
}

/// Trie node
#[derive(Debug, Default, Clone)]
pub struct Node {
    edges: HashMap<char, Edge>,
    /// Edge labels in creation order, for deterministic traversal
    labels: SmallVec<[char; 2]>,
    terminal: Option<String>,
}

impl Node {
    /// The value stored at this node, if it ends a keyword
    #[inline]
    pub fn terminal(&self) -> Option<&str> {
        self.terminal.as_deref()
    }
}

/// Fold a single character for case-insensitive comparison
///
/// Characters whose lower-case form is longer than one code point (such as
/// `İ`) fold to themselves, so a fold never changes how many characters the
/// text has.
#[inline]
pub fn fold_char(ch: char) -> char {
    if ch.is_ascii() {
        return ch.to_ascii_lowercase();
    }
    single(ch.to_lowercase()).unwrap_or(ch)
}

fn single(mut iter: impl Iterator<Item = char>) -> Option<char> {
    let first = iter.next()?;
    match iter.next() {
        None => Some(first),
        Some(_) => None,
    }
}

/// Edge labels a case-insensitive insertion of `ch` creates
///
/// Lower case first, then upper case, then the literal character when it is
/// neither (title-case letters). Multi-character case mappings are skipped.
fn case_labels(ch: char) -> SmallVec<[char; 3]> {
    let mut labels = SmallVec::new();
    let candidates = [
        single(ch.to_lowercase()),
        single(ch.to_uppercase()),
        Some(ch),
    ];
    for label in candidates.into_iter().flatten() {
        if !labels.contains(&label) {
            labels.push(label);
        }
    }
    labels
}

/// Keyword trie
#[derive(Debug, Clone)]
pub struct Trie {
    nodes: Vec<Node>,
    terminals: usize,
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl Trie {
    /// Create a trie holding only the root
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::default()],
            terminals: 0,
        }
    }

    /// Number of distinct terminal nodes
    pub fn len(&self) -> usize {
        self.terminals
    }

    /// Whether no keyword has been inserted
    pub fn is_empty(&self) -> bool {
        self.terminals == 0
    }

    /// Number of allocated nodes, root included
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Access a node
    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    fn alloc(&mut self) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node::default());
        id
    }

    /// Insert a keyword, storing `value` at its endpoint
    ///
    /// Returns the number of endpoints written. That is one except when
    /// earlier case-sensitive insertions split the case variants of a prefix
    /// across different nodes, in which case every variant gets the value.
    pub fn insert(&mut self, keyword: &str, value: &str, case_sensitive: bool) -> Result<usize> {
        if keyword.is_empty() {
            return Err(KeywordError::empty_keyword());
        }

        let mut frontier: SmallVec<[NodeId; 2]> = SmallVec::new();
        frontier.push(NodeId::ROOT);

        for ch in keyword.chars() {
            let labels: SmallVec<[char; 3]> = if case_sensitive {
                SmallVec::from_slice(&[ch])
            } else {
                case_labels(ch)
            };

            let mut next: SmallVec<[NodeId; 2]> = SmallVec::new();
            for &node in &frontier {
                let mut targets: SmallVec<[NodeId; 2]> = SmallVec::new();
                for label in &labels {
                    if let Some(edge) = self.nodes[node.index()].edges.get(label) {
                        if !targets.contains(&edge.target) {
                            targets.push(edge.target);
                        }
                    }
                }
                let primary = match targets.first() {
                    Some(&id) => id,
                    None => {
                        let id = self.alloc();
                        targets.push(id);
                        id
                    }
                };

                let current = &mut self.nodes[node.index()];
                for &label in &labels {
                    match current.edges.entry(label) {
                        Entry::Occupied(mut slot) => {
                            if !case_sensitive {
                                slot.get_mut().folds = true;
                            }
                        }
                        Entry::Vacant(slot) => {
                            slot.insert(Edge {
                                target: primary,
                                folds: !case_sensitive,
                            });
                            current.labels.push(label);
                        }
                    }
                }

                for target in targets {
                    if !next.contains(&target) {
                        next.push(target);
                    }
                }
            }
            frontier = next;
        }

        for &node in &frontier {
            let slot = &mut self.nodes[node.index()].terminal;
            if slot.is_none() {
                self.terminals += 1;
            }
            *slot = Some(value.to_string());
        }
        Ok(frontier.len())
    }

    /// Follow the edge for one text character
    ///
    /// The literal label wins; otherwise a folding edge labelled with the
    /// character's fold is taken.
    #[inline]
    pub fn step(&self, from: NodeId, ch: char) -> Option<NodeId> {
        let edges = &self.nodes[from.index()].edges;
        if let Some(edge) = edges.get(&ch) {
            return Some(edge.target);
        }
        let folded = fold_char(ch);
        if folded == ch {
            return None;
        }
        edges
            .get(&folded)
            .filter(|edge| edge.folds)
            .map(|edge| edge.target)
    }

    /// Distinct children of a node, in edge creation order
    pub fn children(&self, from: NodeId) -> SmallVec<[NodeId; 4]> {
        let node = &self.nodes[from.index()];
        let mut out: SmallVec<[NodeId; 4]> = SmallVec::new();
        for label in &node.labels {
            let target = node.edges[label].target;
            if !out.contains(&target) {
                out.push(target);
            }
        }
        out
    }

    /// Walk a whole word from the root
    pub fn lookup(&self, word: &str) -> Option<&str> {
        let mut node = NodeId::ROOT;
        for ch in word.chars() {
            node = self.step(node, ch)?;
        }
        self.node(node).terminal()
    }

    /// Lazily enumerate `(representative keyword, value)` pairs
    pub fn entries(&self) -> Entries<'_> {
        let mut visited = HashSet::new();
        visited.insert(NodeId::ROOT);
        Entries {
            trie: self,
            stack: vec![(NodeId::ROOT, String::new())],
            visited,
        }
    }
}

/// Depth-first iterator over distinct terminal nodes
///
/// A node reachable through several case-variant paths is expanded once, via
/// the first path found; that path becomes the representative keyword.
pub struct Entries<'a> {
    trie: &'a Trie,
    stack: Vec<(NodeId, String)>,
    visited: HashSet<NodeId>,
}

impl<'a> Iterator for Entries<'a> {
    type Item = (String, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let trie = self.trie;
        while let Some((id, path)) = self.stack.pop() {
            let node = trie.node(id);

            // The earliest label claims a shared child
            let mut fresh: SmallVec<[(char, NodeId); 4]> = SmallVec::new();
            for &label in &node.labels {
                let target = node.edges[&label].target;
                if self.visited.insert(target) {
                    fresh.push((label, target));
                }
            }
            // Push in reverse so the earliest label is explored first
            for &(label, target) in fresh.iter().rev() {
                let mut child_path = path.clone();
                child_path.push(label);
                self.stack.push((target, child_path));
            }

            if let Some(value) = node.terminal() {
                return Some((path, value));
            }
        }
        None
    }
}
