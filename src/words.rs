//! Word queries built on top of the public `Trie` API.
//!
//! Nothing here reaches into the trie's internals: suffix counting enumerates
//! `keys()`, and the prefix walks only read nodes through `Trie::root`.

use crate::node::TrieNode;
use crate::util::require_non_empty;
use crate::{Result, Trie, TrieError};

/// Extra queries over the words stored in a trie.
pub trait WordQueries {
    /// Counts the stored keys that end with `pattern`.
    ///
    /// The empty pattern matches every key.
    fn count_words_with_suffix(&self, pattern: &str) -> usize;

    /// Returns `true` if a path for `prefix` exists in the trie.
    ///
    /// Only the path is checked, not whether any value sits on or below it. The
    /// empty prefix always exists.
    fn has_prefix(&self, prefix: &str) -> bool;
}

impl<V> WordQueries for Trie<V> {
    fn count_words_with_suffix(&self, pattern: &str) -> usize {
        self.keys()
            .iter()
            .filter(|word| word.ends_with(pattern))
            .count()
    }

    fn has_prefix(&self, prefix: &str) -> bool {
        let mut node = self.root();
        for ch in prefix.chars() {
            match node.child(ch) {
                Some(child) => node = child,
                None => return false,
            }
        }
        true
    }
}

/// Finds the longest prefix shared by every string in `strings`.
///
/// The strings are loaded into a fresh trie, which is then walked from the root
/// for as long as the current node has exactly one child and ends no string.
///
/// # Examples
///
/// ```
/// use char_trie::find_longest_common_word;
///
/// assert_eq!(find_longest_common_word(&["flower", "flow", "flight"]).unwrap(), "fl");
/// assert_eq!(find_longest_common_word(&["dog", "racecar", "car"]).unwrap(), "");
/// assert!(find_longest_common_word::<&str>(&[]).is_err());
/// ```
pub fn find_longest_common_word<S: AsRef<str>>(strings: &[S]) -> Result<String> {
    if strings.is_empty() {
        return Err(TrieError::InvalidArgument {
            operation: "find_longest_common_word",
            argument: "strings",
            reason: "must be a non-empty list",
        });
    }
    for string in strings {
        require_non_empty("find_longest_common_word", "string", string.as_ref())?;
    }

    let mut trie = Trie::new();
    for (index, string) in strings.iter().enumerate() {
        trie.insert(string.as_ref(), index)?;
    }

    let mut prefix = String::new();
    let mut node: &TrieNode<usize> = trie.root();
    while node.child_count() == 1 && node.value().is_none() {
        match node.children().next() {
            Some((ch, child)) => {
                prefix.push(ch);
                node = child;
            }
            None => break,
        }
    }

    Ok(prefix)
}
