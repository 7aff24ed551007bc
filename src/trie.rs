//! Prefix tree over the dictionary.
//!
//! Nodes live in a single arena and refer to their children by [`NodeId`].
//! Each edge is one board cell, so the pair "qu" occupies a single edge
//! labelled `q`. Dropping or clearing the trie frees every node at once.

use crate::word::normalize_word;
use crate::ALPHABET_SIZE;

/// Handle to a node in a [`Trie`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    /// The root node, present in every trie.
    pub const ROOT: Self = Self(0);

    fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone, Default)]
struct Node {
    children: [Option<NodeId>; ALPHABET_SIZE],
    word: Option<Box<str>>,
}

/// Dictionary prefix tree.
///
/// Built single-threaded, then shared read-only between search workers.
#[derive(Debug, Clone)]
pub struct Trie {
    nodes: Vec<Node>,
    words: usize,
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

/// Edge index for a lowercase ASCII letter.
#[inline]
fn edge(letter: u8) -> Option<usize> {
    letter.is_ascii_lowercase().then(|| (letter - b'a') as usize)
}

impl Trie {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::default()],
            words: 0,
        }
    }

    /// Build a trie from raw dictionary words, skipping inadmissible ones.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self::new();
        trie.extend(words);
        trie
    }

    /// Validate and insert a word.
    ///
    /// Returns `true` if the word was admissible and not yet present.
    pub fn insert(&mut self, raw: &str) -> bool {
        let Some(word) = normalize_word(raw) else {
            return false;
        };

        let bytes = word.as_bytes();
        let mut current = NodeId::ROOT;
        let mut i = 0;
        while i < bytes.len() {
            let letter = bytes[i];
            current = self.child_or_insert(current, letter);
            // the qu cube: `u` after `q` shares the `q` edge
            i += if letter == b'q' { 2 } else { 1 };
        }

        let node = &mut self.nodes[current.index()];
        if node.word.is_some() {
            return false;
        }
        node.word = Some(word.into_boxed_str());
        self.words += 1;
        true
    }

    fn child_or_insert(&mut self, parent: NodeId, letter: u8) -> NodeId {
        let slot = (letter - b'a') as usize;
        if let Some(child) = self.nodes[parent.index()].children[slot] {
            return child;
        }
        let child = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node::default());
        self.nodes[parent.index()].children[slot] = Some(child);
        child
    }

    /// Follow the edge labelled `letter` out of `node`.
    ///
    /// `None` means no dictionary word continues with that letter; a letter
    /// outside `a..=z` never has an edge. A `node` this trie does not hold
    /// (one kept across [`Trie::clear`], say) has no edges either.
    #[inline]
    pub fn child(&self, node: NodeId, letter: u8) -> Option<NodeId> {
        self.node(node)?.children[edge(letter)?]
    }

    /// The word ending exactly at `node`, if any.
    #[inline]
    pub fn word_at(&self, node: NodeId) -> Option<&str> {
        self.node(node)?.word.as_deref()
    }

    #[inline]
    pub fn is_word(&self, node: NodeId) -> bool {
        self.word_at(node).is_some()
    }

    #[inline]
    fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Whether the dictionary holds `word` after normalization.
    pub fn contains(&self, word: &str) -> bool {
        let Some(word) = normalize_word(word) else {
            return false;
        };
        let bytes = word.as_bytes();
        let mut current = NodeId::ROOT;
        let mut i = 0;
        while i < bytes.len() {
            match self.child(current, bytes[i]) {
                Some(next) => current = next,
                None => return false,
            }
            i += if bytes[i] == b'q' { 2 } else { 1 };
        }
        self.is_word(current)
    }

    /// Number of distinct words stored.
    pub fn len(&self) -> usize {
        self.words
    }

    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Number of nodes in the arena, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Drop every word, leaving only an empty root.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.nodes.push(Node::default());
        self.words = 0;
    }
}

impl<S: AsRef<str>> Extend<S> for Trie {
    fn extend<I: IntoIterator<Item = S>>(&mut self, words: I) {
        for word in words {
            self.insert(word.as_ref());
        }
    }
}
