//! Prefix view into a trie.
//!
//! This module provides the `PrefixView` type, a borrowed window onto the subtrie
//! below a key prefix, and the depth-first iterator used for every key enumeration.

use std::fmt;

use crate::node::TrieNode;
use crate::Trie;

/// A lightweight view into a subtrie defined by a key prefix.
///
/// Lookups through the view take full keys; keys that do not start with the
/// view's prefix are never found.
///
/// # Examples
///
/// ```
/// use char_trie::Trie;
///
/// let mut trie = Trie::new();
/// trie.insert("hello", 1).unwrap();
/// trie.insert("help", 2).unwrap();
/// trie.insert("world", 3).unwrap();
///
/// let view = trie.view_subtrie("hel");
/// assert!(view.contains_key("hello"));
/// assert!(!view.contains_key("world"));
///
/// let keys: Vec<String> = view.iter().map(|(key, _)| key).collect();
/// assert_eq!(keys, vec!["hello", "help"]);
/// ```
pub struct PrefixView<'a, V> {
    /// The key prefix defining this view
    prefix: String,

    /// The subtrie node at the prefix, if the path exists
    subtrie_node: Option<&'a TrieNode<V>>,
}

/// A depth-first iterator over `(key, value)` pairs.
///
/// A node's own entry is yielded before the entries below it, and siblings are
/// visited in the order their character was first inserted.
pub struct PrefixViewIter<'a, V> {
    /// Nodes still to visit, each with the full key that leads to it
    stack: Vec<(&'a TrieNode<V>, String)>,
}

impl<'a, V> PrefixView<'a, V> {
    /// Creates a new prefix view for the given trie and prefix.
    pub fn new(trie: &'a Trie<V>, prefix: &str) -> Self {
        PrefixView {
            prefix: prefix.to_string(),
            subtrie_node: trie.root().descend(prefix),
        }
    }

    /// Returns the prefix of this view.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns `true` if the path for the prefix exists in the trie, whether or not
    /// any value sits on or below it.
    pub fn exists(&self) -> bool {
        self.subtrie_node.is_some()
    }

    /// Returns the number of values stored under the prefix.
    pub fn len(&self) -> usize {
        self.subtrie_node.map_or(0, TrieNode::subtree_size)
    }

    /// Returns `true` if no value is stored under the prefix.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if the full `key` lies under the prefix and holds a value.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Looks up the full `key`, which must start with the view's prefix.
    pub fn get(&self, key: &str) -> Option<&'a V> {
        let rest = key.strip_prefix(self.prefix.as_str())?;
        self.subtrie_node?.descend(rest).and_then(TrieNode::value)
    }

    /// Iterates over the entries under the prefix in traversal order.
    pub fn iter(&self) -> PrefixViewIter<'a, V> {
        PrefixViewIter::new(self.subtrie_node, self.prefix.clone())
    }
}

impl<V> fmt::Debug for PrefixView<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrefixView")
            .field("prefix", &self.prefix)
            .field("exists", &self.exists())
            .field("len", &self.len())
            .finish()
    }
}

impl<'a, V> IntoIterator for &PrefixView<'a, V> {
    type Item = (String, &'a V);
    type IntoIter = PrefixViewIter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, V> PrefixViewIter<'a, V> {
    pub(crate) fn new(start: Option<&'a TrieNode<V>>, key: String) -> Self {
        PrefixViewIter {
            stack: start.map(|node| (node, key)).into_iter().collect(),
        }
    }
}

impl<'a, V> Iterator for PrefixViewIter<'a, V> {
    type Item = (String, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, key)) = self.stack.pop() {
            // Push in reverse so the first sibling is popped first
            for (ch, child) in node.children.iter().rev() {
                let mut child_key = String::with_capacity(key.len() + ch.len_utf8());
                child_key.push_str(&key);
                child_key.push(*ch);
                self.stack.push((child, child_key));
            }

            if let Some(value) = node.value() {
                return Some((key, value));
            }
        }

        None
    }
}
