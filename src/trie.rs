//! The main trie implementation.
//!
//! This module contains the `Trie` type, which provides the primary API for working
//! with the character trie.

use tracing::trace;

use crate::node::TrieNode;
use crate::prefix_view::{PrefixView, PrefixViewIter};
use crate::util::require_non_empty;
use crate::{Result, LOG_TARGET};

/// A mutable prefix tree keyed by characters.
///
/// Each edge of the tree is labelled with a single `char`, so a stored key is the
/// concatenation of the edge labels from the root to a node that carries a value.
/// Siblings are kept in the order their character was first inserted under the
/// parent, which makes every enumeration deterministic.
///
/// The empty string is never a key: every operation that takes a key rejects it
/// with [`TrieError::InvalidArgument`](crate::TrieError::InvalidArgument).
#[derive(Debug, Clone)]
pub struct Trie<V> {
    /// The root node of the trie. It never holds a value.
    pub(crate) root: TrieNode<V>,

    /// The number of values stored in the trie
    size: usize,
}

/// What `take` has to do once the key is known to hold a value.
enum Removal {
    /// The terminal node still has children; only its value goes.
    ClearValue,
    /// The branch below `depth` serves no other key and is cut off whole.
    CutBranch { depth: usize },
}

impl<V> Trie<V> {
    /// Creates a new, empty trie.
    ///
    /// # Examples
    ///
    /// ```
    /// use char_trie::Trie;
    ///
    /// let trie = Trie::<i32>::new();
    /// assert!(trie.is_empty());
    /// ```
    pub fn new() -> Self {
        Trie {
            root: TrieNode::new(),
            size: 0,
        }
    }

    /// Returns the number of keys currently holding a value.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the trie contains no values.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Read-only access to the root node.
    ///
    /// The root never carries a value; its children are the first characters of
    /// the stored keys.
    pub fn root(&self) -> &TrieNode<V> {
        &self.root
    }

    /// Stores `value` under `key`, creating any missing nodes along the path.
    ///
    /// The last write wins. Writing `None` creates the path but does not register
    /// the key; writing `None` over a present value clears it without pruning.
    ///
    /// # Examples
    ///
    /// ```
    /// use char_trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.put("apple", Some(1)).unwrap();
    /// trie.put("app", None).unwrap();
    ///
    /// assert_eq!(trie.len(), 1);
    /// assert_eq!(trie.get("app").unwrap(), None);
    /// ```
    pub fn put(&mut self, key: &str, value: Option<V>) -> Result<()> {
        require_non_empty("put", "key", key)?;
        self.store(key, value);
        Ok(())
    }

    /// Inserts `value` under `key`, returning the value it replaced, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use char_trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// assert_eq!(trie.insert("hello", 1).unwrap(), None);
    /// assert_eq!(trie.insert("hello", 2).unwrap(), Some(1));
    /// assert_eq!(trie.len(), 1);
    /// ```
    pub fn insert(&mut self, key: &str, value: V) -> Result<Option<V>> {
        require_non_empty("insert", "key", key)?;
        Ok(self.store(key, Some(value)))
    }

    fn store(&mut self, key: &str, value: Option<V>) -> Option<V> {
        let mut created = 0usize;
        let mut node = &mut self.root;
        for ch in key.chars() {
            node = node.children.entry(ch).or_insert_with(|| {
                created += 1;
                TrieNode::new()
            });
        }

        match (node.value.is_some(), value.is_some()) {
            (false, true) => self.size += 1,
            (true, false) => self.size -= 1,
            _ => {}
        }
        let previous = std::mem::replace(&mut node.value, value);

        trace!(target: LOG_TARGET, key, created, size = self.size, "Stored key");
        previous
    }

    /// Retrieves a reference to the value stored for the given key, if any.
    ///
    /// A missing path and a path that ends in a node without a value both read
    /// as `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use char_trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.insert("hello", 42).unwrap();
    ///
    /// assert_eq!(trie.get("hello").unwrap(), Some(&42));
    /// assert_eq!(trie.get("hell").unwrap(), None);
    /// assert!(trie.get("").is_err());
    /// ```
    pub fn get(&self, key: &str) -> Result<Option<&V>> {
        require_non_empty("get", "key", key)?;
        Ok(self.root.descend(key).and_then(TrieNode::value))
    }

    /// Returns `true` if the trie holds a value for the given key.
    pub fn contains_key(&self, key: &str) -> Result<bool> {
        require_non_empty("contains_key", "key", key)?;
        Ok(self.root.descend(key).and_then(TrieNode::value).is_some())
    }

    /// Deletes the value stored under `key` and prunes the nodes left serving no
    /// other key.
    ///
    /// Returns `true` only if a value was present to delete.
    ///
    /// # Examples
    ///
    /// ```
    /// use char_trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.insert("apple", 1).unwrap();
    /// trie.insert("app", 2).unwrap();
    ///
    /// assert!(trie.delete("apple").unwrap());
    /// assert!(!trie.delete("apple").unwrap());
    /// assert_eq!(trie.keys(), vec!["app".to_string()]);
    /// ```
    pub fn delete(&mut self, key: &str) -> Result<bool> {
        require_non_empty("delete", "key", key)?;
        Ok(self.take(key).is_some())
    }

    /// Removes `key` from the trie, returning its value if one was present.
    ///
    /// Pruning is the same as for [`delete`](Trie::delete).
    pub fn remove(&mut self, key: &str) -> Result<Option<V>> {
        require_non_empty("remove", "key", key)?;
        Ok(self.take(key))
    }

    fn take(&mut self, key: &str) -> Option<V> {
        let removed = match self.plan_removal(key)? {
            Removal::ClearValue => self.root.descend_mut(key).and_then(|node| node.value.take()),
            Removal::CutBranch { depth } => {
                let (offset, ch) = key.char_indices().nth(depth)?;
                let branch = self.root.descend_mut(&key[..offset])?.children.shift_remove(&ch)?;
                trace!(target: LOG_TARGET, key, depth, "Pruned branch");
                Self::terminal_value(branch)
            }
        };

        if removed.is_some() {
            self.size -= 1;
        }
        removed
    }

    /// Walks `key` read-only and decides how much of its path has to go.
    ///
    /// Returns `None` when the path is missing or ends without a value. The cut
    /// depth is the deepest node on the path, excluding the terminal, that still
    /// serves another key (it has a value or more than one child); the root always
    /// qualifies.
    fn plan_removal(&self, key: &str) -> Option<Removal> {
        let mut node = &self.root;
        let mut keep_depth = 0;
        for (depth, ch) in key.chars().enumerate() {
            if node.value.is_some() || node.children.len() > 1 {
                keep_depth = depth;
            }
            node = node.children.get(&ch)?;
        }
        node.value.as_ref()?;

        if node.is_leaf() {
            Some(Removal::CutBranch { depth: keep_depth })
        } else {
            Some(Removal::ClearValue)
        }
    }

    /// Unwinds a detached single-path branch down to its terminal value.
    fn terminal_value(mut branch: TrieNode<V>) -> Option<V> {
        while let Some((_, child)) = branch.children.pop() {
            branch = child;
        }
        branch.value.take()
    }

    /// Returns the longest prefix of `s` that is a stored key, or `""` if none is.
    ///
    /// # Examples
    ///
    /// ```
    /// use char_trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.insert("app", 1).unwrap();
    /// trie.insert("apple", 2).unwrap();
    ///
    /// assert_eq!(trie.longest_prefix_of("application").unwrap(), "app");
    /// assert_eq!(trie.longest_prefix_of("apples").unwrap(), "apple");
    /// assert_eq!(trie.longest_prefix_of("banana").unwrap(), "");
    /// ```
    pub fn longest_prefix_of<'s>(&self, s: &'s str) -> Result<&'s str> {
        require_non_empty("longest_prefix_of", "s", s)?;

        let mut node = &self.root;
        let mut longest = 0;
        for (offset, ch) in s.char_indices() {
            match node.children.get(&ch) {
                Some(child) => node = child,
                None => break,
            }
            if node.value.is_some() {
                longest = offset + ch.len_utf8();
            }
        }

        Ok(&s[..longest])
    }

    /// Creates a view of the subtrie at the given key prefix.
    ///
    /// # Examples
    ///
    /// ```
    /// use char_trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.insert("hello", 1).unwrap();
    /// trie.insert("help", 2).unwrap();
    ///
    /// let view = trie.view_subtrie("hel");
    /// assert!(view.exists());
    /// assert_eq!(view.len(), 2);
    /// assert_eq!(view.get("help"), Some(&2));
    /// ```
    pub fn view_subtrie(&self, prefix: &str) -> PrefixView<'_, V> {
        PrefixView::new(self, prefix)
    }

    /// Returns every stored key starting with `prefix`, in traversal order.
    ///
    /// A key is reported before the keys that extend it; siblings follow the order
    /// in which their character was first inserted. The empty prefix matches every
    /// key.
    pub fn keys_with_prefix(&self, prefix: &str) -> Vec<String> {
        self.view_subtrie(prefix).iter().map(|(key, _)| key).collect()
    }

    /// Returns every stored key, in the same order as `keys_with_prefix("")`.
    pub fn keys(&self) -> Vec<String> {
        self.keys_with_prefix("")
    }

    /// Iterates over all `(key, value)` pairs in traversal order.
    pub fn iter(&self) -> PrefixViewIter<'_, V> {
        PrefixViewIter::new(Some(&self.root), String::new())
    }
}

impl<V> Default for Trie<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, V> IntoIterator for &'a Trie<V> {
    type Item = (String, &'a V);
    type IntoIter = PrefixViewIter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TrieError;

    fn sample() -> Trie<u32> {
        let mut trie = Trie::new();
        for (key, value) in [("apple", 1), ("app", 2), ("banana", 3), ("bat", 4)].iter() {
            trie.insert(key, *value).unwrap();
        }
        trie
    }

    /// Counts nodes that serve no key, anywhere below the root.
    fn useless_nodes<V>(node: &TrieNode<V>) -> usize {
        node.children()
            .map(|(_, child)| useless_nodes(child) + if child.value().is_none() && child.is_leaf() { 1 } else { 0 })
            .sum()
    }

    #[test]
    fn test_new_trie() {
        let trie: Trie<u32> = Trie::new();
        assert!(trie.is_empty());
        assert_eq!(trie.len(), 0);
        assert!(trie.keys().is_empty());
        assert!(trie.root().is_leaf());
    }

    #[test]
    fn test_get_nonexistent() {
        let trie: Trie<u32> = Trie::new();
        assert_eq!(trie.get("hello").unwrap(), None);
    }

    #[test]
    fn test_insert_and_get() {
        let mut trie = Trie::new();
        trie.put("hello", Some(42)).unwrap();

        assert_eq!(trie.len(), 1);
        assert_eq!(trie.get("hello").unwrap(), Some(&42));
        assert_eq!(trie.get("world").unwrap(), None);
        assert_eq!(trie.get("hell").unwrap(), None);
        assert_eq!(trie.get("hellos").unwrap(), None);
        assert!(trie.contains_key("hello").unwrap());
        assert!(!trie.contains_key("hell").unwrap());
        assert!(trie.contains_key("").is_err());
    }

    #[test]
    fn test_insert_replace() {
        let mut trie = Trie::new();
        trie.put("hello", Some(42)).unwrap();
        trie.put("hello", Some(100)).unwrap();

        assert_eq!(trie.len(), 1);
        assert_eq!(trie.get("hello").unwrap(), Some(&100));
        assert_eq!(trie.insert("hello", 7).unwrap(), Some(100));
    }

    #[test]
    fn test_put_none_creates_path_without_key() {
        let mut trie: Trie<u32> = Trie::new();
        trie.put("ghost", None).unwrap();

        assert!(trie.is_empty());
        assert_eq!(trie.get("ghost").unwrap(), None);
        assert!(trie.keys().is_empty());
        assert!(trie.root().descend("ghost").is_some());
    }

    #[test]
    fn test_put_none_over_value_clears_it() {
        let mut trie = sample();
        trie.put("app", None).unwrap();

        assert_eq!(trie.len(), 3);
        assert_eq!(trie.get("app").unwrap(), None);
        assert_eq!(trie.get("apple").unwrap(), Some(&1));
    }

    #[test]
    fn test_prefix_and_extension_coexist() {
        let mut trie = Trie::new();
        trie.insert("alphabet", 1).unwrap();
        trie.insert("alpha", 2).unwrap();

        assert_eq!(trie.get("alphabet").unwrap(), Some(&1));
        assert_eq!(trie.get("alpha").unwrap(), Some(&2));
        assert_eq!(trie.len(), 2);
    }

    #[test]
    fn test_empty_key_is_rejected_without_mutation() {
        let mut trie = sample();

        for err in vec![
            trie.put("", Some(9)).unwrap_err(),
            trie.insert("", 9).unwrap_err(),
            trie.get("").unwrap_err(),
            trie.delete("").unwrap_err(),
            trie.remove("").unwrap_err(),
            trie.longest_prefix_of("").unwrap_err(),
        ] {
            assert!(matches!(err, TrieError::InvalidArgument { .. }));
        }
        assert_eq!(trie.len(), 4);
        assert_eq!(trie.keys(), sample().keys());
    }

    #[test]
    fn test_delete_keeps_valued_ancestor() {
        let mut trie = Trie::new();
        trie.insert("apple", 1).unwrap();
        trie.insert("app", 2).unwrap();

        assert!(trie.delete("apple").unwrap());
        assert_eq!(trie.keys(), vec!["app".to_string()]);
        assert_eq!(trie.get("app").unwrap(), Some(&2));
        // "l" and "e" are gone, "app" is now a leaf
        assert!(trie.root().descend("app").unwrap().is_leaf());
        assert_eq!(useless_nodes(trie.root()), 0);
    }

    #[test]
    fn test_delete_interior_key_keeps_children() {
        let mut trie = sample();

        assert!(trie.delete("app").unwrap());
        assert_eq!(trie.get("app").unwrap(), None);
        assert_eq!(trie.get("apple").unwrap(), Some(&1));
        assert!(trie.root().descend("app").is_some());
        assert_eq!(trie.len(), 3);
    }

    #[test]
    fn test_delete_prunes_up_to_branching_node() {
        let mut trie = sample();

        assert!(trie.delete("banana").unwrap());
        // "ba" still branches to "bat"
        let ba = trie.root().descend("ba").unwrap();
        assert_eq!(ba.child_count(), 1);
        assert!(ba.child('n').is_none());

        assert!(trie.delete("bat").unwrap());
        assert!(trie.root().child('b').is_none());
        assert_eq!(useless_nodes(trie.root()), 0);
    }

    #[test]
    fn test_delete_last_key_empties_root() {
        let mut trie = Trie::new();
        trie.insert("solo", 1).unwrap();

        assert!(trie.delete("solo").unwrap());
        assert!(trie.is_empty());
        assert!(trie.root().is_leaf());
    }

    #[test]
    fn test_delete_missing() {
        let mut trie = sample();

        assert!(!trie.delete("cat").unwrap());
        assert!(!trie.delete("ap").unwrap());
        assert!(!trie.delete("apples").unwrap());
        assert_eq!(trie.len(), 4);
        assert!(trie.root().descend("ap").is_some());
    }

    #[test]
    fn test_delete_twice() {
        let mut trie = sample();

        assert!(trie.delete("bat").unwrap());
        let keys = trie.keys();
        assert!(!trie.delete("bat").unwrap());
        assert_eq!(trie.keys(), keys);
        assert_eq!(trie.len(), 3);
    }

    #[test]
    fn test_delete_path_without_value_is_noop() {
        let mut trie: Trie<u32> = Trie::new();
        trie.put("ghost", None).unwrap();

        assert!(!trie.delete("ghost").unwrap());
        // Unvalued paths are not pruned by a failed delete
        assert!(trie.root().descend("ghost").is_some());
    }

    #[test]
    fn test_remove_returns_value() {
        let mut trie = sample();

        assert_eq!(trie.remove("banana").unwrap(), Some(3));
        assert_eq!(trie.remove("banana").unwrap(), None);
        assert_eq!(trie.remove("app").unwrap(), Some(2));
        assert_eq!(trie.len(), 2);
    }

    #[test]
    fn test_delete_preserves_sibling_order() {
        let mut trie = Trie::new();
        for (i, key) in ["ca", "cb", "cc", "cd"].iter().enumerate() {
            trie.insert(key, i).unwrap();
        }

        assert!(trie.delete("cb").unwrap());
        assert_eq!(trie.keys(), vec!["ca", "cc", "cd"]);
    }

    #[test]
    fn test_longest_prefix_of() {
        let trie = sample();

        assert_eq!(trie.longest_prefix_of("applesauce").unwrap(), "apple");
        assert_eq!(trie.longest_prefix_of("application").unwrap(), "app");
        assert_eq!(trie.longest_prefix_of("ap").unwrap(), "");
        assert_eq!(trie.longest_prefix_of("batman").unwrap(), "bat");
        assert_eq!(trie.longest_prefix_of("zebra").unwrap(), "");
    }

    #[test]
    fn test_longest_prefix_of_multibyte() {
        let mut trie = Trie::new();
        trie.insert("naï", 1).unwrap();
        trie.insert("日本", 2).unwrap();

        assert_eq!(trie.longest_prefix_of("naïve").unwrap(), "naï");
        assert_eq!(trie.longest_prefix_of("日本語").unwrap(), "日本");
    }

    #[test]
    fn test_keys_traversal_order() {
        let trie = sample();

        assert_eq!(trie.keys(), vec!["app", "apple", "banana", "bat"]);
        assert_eq!(trie.keys_with_prefix("ba"), vec!["banana", "bat"]);
        assert_eq!(trie.keys_with_prefix("app"), vec!["app", "apple"]);
        assert_eq!(trie.keys_with_prefix(""), trie.keys());
        assert!(trie.keys_with_prefix("c").is_empty());
    }

    #[test]
    fn test_iter_yields_values() {
        let trie = sample();

        let entries: Vec<(String, u32)> = trie.iter().map(|(k, v)| (k, *v)).collect();
        assert_eq!(
            entries,
            vec![
                ("app".to_string(), 2),
                ("apple".to_string(), 1),
                ("banana".to_string(), 3),
                ("bat".to_string(), 4),
            ]
        );
        assert_eq!((&trie).into_iter().count(), trie.len());
    }
}
