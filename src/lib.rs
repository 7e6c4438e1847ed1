//! # Char Trie
//!
//! A mutable prefix tree whose edges are single characters.
//!
//! Keys are non-empty strings, treated as sequences of `char`. The trie supports
//! insertion, lookup, deletion with pruning of nodes that no longer serve a key,
//! prefix enumeration and longest-prefix-of-string queries.
//!
//! ## Features
//!
//! - **Deterministic order**: siblings are kept in the order their character was
//!   first inserted, so every enumeration is repeatable
//! - **Pruning deletes**: removing a key drops every node left with no value and
//!   no children, without recursion
//! - **Prefix Views**: borrowed views of the subtrie below a prefix, with lookup
//!   and lazy iteration
//! - **Word queries**: suffix counting, prefix existence and the longest common
//!   prefix of a set of strings
//!
//! ## Example
//!
//! ```rust
//! use char_trie::{Trie, WordQueries};
//!
//! let mut trie = Trie::new();
//! trie.insert("apple", 1).unwrap();
//! trie.insert("application", 2).unwrap();
//!
//! assert_eq!(trie.get("apple").unwrap(), Some(&1));
//! assert_eq!(trie.keys_with_prefix("app"), vec!["apple", "application"]);
//! assert!(trie.has_prefix("appl"));
//! ```

pub mod node;
mod prefix_view;
mod trie;
mod util;
mod words;

// Re-export public types
pub use crate::node::TrieNode;
pub use crate::prefix_view::{PrefixView, PrefixViewIter};
pub use crate::trie::Trie;
pub use crate::words::{find_longest_common_word, WordQueries};

/// Target used for all `tracing` events emitted by this crate.
pub const LOG_TARGET: &str = "char_trie";

/// Errors that can occur in trie operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TrieError {
    /// An argument broke the operation's contract, e.g. an empty key
    #[error("illegal argument for {operation}: {argument} {reason}")]
    InvalidArgument {
        operation: &'static str,
        argument: &'static str,
        reason: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, TrieError>;
