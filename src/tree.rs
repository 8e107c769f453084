//! Character trie implementation.
//!
//! This module contains the main [`Trie`] implementation and its
//! construction-time [`TrieConfig`].

use crate::iter::Words;
use crate::node::Children;
use crate::stats::{self, TrieStats};

/// Configuration for a [`Trie`], fixed at construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TrieConfig {
    /// Fold every character to lowercase before any lookup, insertion, or
    /// comparison, on both insert and query paths.
    pub case_insensitive: bool,
}

/// An insertion-ordered character trie.
///
/// Words are stored character-by-character along shared paths from the root.
/// Each node keeps its children in first-insertion order, so enumeration is
/// deterministic given insertion order rather than alphabetical.
///
/// ## Features
///
/// - **Exact membership**: [`contains`](Trie::contains) matches only whole
///   stored words, never bare prefixes of longer words.
/// - **Prefix queries**: [`has_prefix`](Trie::has_prefix) follows a path
///   without requiring a word to end there.
/// - **Lazy enumeration**: [`words`](Trie::words) and
///   [`words_with_prefix`](Trie::words_with_prefix) walk the tree on demand;
///   taking a few items never materializes the rest.
/// - **Optional case folding**: a trie built with
///   `TrieConfig { case_insensitive: true }` folds characters to lowercase on
///   every operation.
///
/// The trie is not internally synchronized; `&mut self` on
/// [`insert`](Trie::insert) serializes mutation against reads statically.
///
/// ## Examples
///
/// ```rust
/// use wordtrie::Trie;
///
/// let mut trie = Trie::new();
/// trie.insert("test");
/// trie.insert("testing");
/// trie.insert("this");
/// trie.insert("thisAndThat");
///
/// assert!(trie.contains("test"));
/// assert!(!trie.contains("tes"));
/// assert!(trie.has_prefix("tes"));
///
/// let th_words: Vec<String> = trie.words_with_prefix("th").collect();
/// assert_eq!(th_words, ["this", "thisAndThat"]);
/// ```
///
/// Case-insensitive lookups:
///
/// ```rust
/// use wordtrie::{Trie, TrieConfig};
///
/// let mut trie = Trie::with_config(TrieConfig { case_insensitive: true });
/// trie.insert("Test");
///
/// assert!(trie.contains("TEST"));
/// assert_eq!(trie.words().collect::<Vec<_>>(), ["test"]);
/// ```
#[derive(Clone, Debug)]
pub struct Trie {
    root: Children,
    config: TrieConfig,
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

fn fold(case_insensitive: bool, ch: char) -> char {
    if case_insensitive && ch.is_uppercase() {
        // Single-char mapping only; multi-char lowercase expansions keep
        // their leading char.
        ch.to_lowercase().next().unwrap_or(ch)
    } else {
        ch
    }
}

impl Trie {
    /// Create a new empty case-sensitive trie.
    pub fn new() -> Self {
        Self::with_config(TrieConfig::default())
    }

    /// Create a new empty trie with the given configuration.
    pub fn with_config(config: TrieConfig) -> Self {
        Self {
            root: Children::default(),
            config,
        }
    }

    /// Whether this trie folds characters to lowercase on every operation.
    pub fn case_insensitive(&self) -> bool {
        self.config.case_insensitive
    }

    /// Insert a word, creating nodes lazily along its path.
    ///
    /// Re-inserting a stored word is a no-op beyond re-asserting its
    /// end-of-word marker, and inserting the empty string is a complete
    /// no-op: no node is created and nothing becomes queryable. Insertion
    /// cannot fail for any finite input.
    pub fn insert(&mut self, word: &str) {
        let case_insensitive = self.config.case_insensitive;
        let mut children = &mut self.root;
        let mut chars = word.chars().peekable();
        while let Some(ch) = chars.next() {
            let ch = fold(case_insensitive, ch);
            let last = chars.peek().is_none();
            children = &mut children.find_or_insert(ch, last).children;
        }
    }

    /// Whether `word` exactly matches a stored word.
    ///
    /// A path that is a strict prefix of a longer stored word does not
    /// match. `contains("")` is `false` unconditionally: no empty word is
    /// representable. Note the asymmetry with [`has_prefix`](Trie::has_prefix),
    /// where the empty prefix is trivially satisfied.
    pub fn contains(&self, word: &str) -> bool {
        let mut children = &self.root;
        let mut end_of_word = false;
        for ch in word.chars() {
            let ch = fold(self.config.case_insensitive, ch);
            match children.find(ch) {
                Some(node) => {
                    end_of_word = node.end_of_word;
                    children = &node.children;
                }
                None => return false,
            }
        }
        end_of_word
    }

    /// Whether some stored word starts with `prefix`.
    ///
    /// No word needs to end at the prefix; only the path must exist.
    /// `has_prefix("")` is always `true`, even on an empty trie.
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.descend(prefix).is_some()
    }

    /// Lazily enumerate every stored word.
    ///
    /// Equivalent to [`words_with_prefix`](Trie::words_with_prefix) with an
    /// empty prefix. Each call starts a fresh traversal.
    pub fn words(&self) -> Words<'_> {
        self.words_with_prefix("")
    }

    /// Lazily enumerate the stored words starting with `prefix`, in
    /// pre-order with siblings visited in first-insertion order.
    ///
    /// An unknown prefix yields an empty iterator. In case-insensitive mode
    /// the yielded words are the folded forms that were stored.
    pub fn words_with_prefix(&self, prefix: &str) -> Words<'_> {
        let mut path = String::new();
        let mut children = &self.root;
        for ch in prefix.chars() {
            let ch = fold(self.config.case_insensitive, ch);
            match children.find(ch) {
                Some(node) => {
                    path.push(node.value);
                    children = &node.children;
                }
                None => return Words::empty(),
            }
        }
        Words::new(children, path)
    }

    /// Number of stored words. Walks the whole tree: O(nodes).
    pub fn len(&self) -> usize {
        self.stats().num_words
    }

    /// Whether no word has been stored.
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Gather aggregate counters for the tree in a single walk.
    pub fn stats(&self) -> TrieStats {
        stats::collect(&self.root)
    }

    fn descend(&self, prefix: &str) -> Option<&Children> {
        let mut children = &self.root;
        for ch in prefix.chars() {
            let ch = fold(self.config.case_insensitive, ch);
            children = &children.find(ch)?.children;
        }
        Some(children)
    }
}
