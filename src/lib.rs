//! An insertion-ordered character trie for word and prefix queries.
//!
//! A [`Trie`] stores words character-by-character along shared paths,
//! supporting exact membership, prefix queries, and lazy enumeration of
//! stored words. Siblings at every level stay in first-insertion order, so
//! enumeration is deterministic given the order of insertions rather than
//! alphabetical.
//!
//! # Example
//!
//! ```rust
//! use wordtrie::Trie;
//!
//! let mut trie = Trie::new();
//! trie.insert("test");
//! trie.insert("testing");
//! trie.insert("this");
//! trie.insert("thisAndThat");
//!
//! assert!(trie.contains("test"));
//! assert!(!trie.contains("tes"));
//! assert!(trie.has_prefix("tes"));
//!
//! for word in trie.words_with_prefix("th") {
//!     println!("{word}");
//! }
//! ```

pub mod iter;
mod node;
pub mod stats;
pub mod tree;

pub use iter::Words;
pub use stats::TrieStats;
pub use tree::{Trie, TrieConfig};
