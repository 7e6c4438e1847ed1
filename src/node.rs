//! Node implementation for the character trie.
//!
//! This module contains the `TrieNode` structure that forms the backbone of the
//! trie. Every node is exclusively owned by its parent; the root is owned by the
//! `Trie` itself.

use indexmap::IndexMap;

/// A single node of the trie.
///
/// A node maps characters to the child nodes that continue some stored key, and
/// optionally carries a value. The presence of a value, not the absence of
/// children, is what marks "a key ends here", so a node can be both a terminal
/// key and an interior node (e.g. "app" inside "apple").
///
/// Nodes are read-only outside of this crate; all mutation goes through `Trie`.
#[derive(Debug)]
pub struct TrieNode<V> {
    /// Child nodes keyed by the next character, in order of first insertion
    pub(crate) children: IndexMap<char, TrieNode<V>>,

    /// The value stored at this node, if any
    pub(crate) value: Option<V>,
}

impl<V> TrieNode<V> {
    /// Creates a new node with no value and no children
    pub(crate) fn new() -> Self {
        TrieNode {
            children: IndexMap::new(),
            value: None,
        }
    }

    /// Returns the value stored at this node, if any.
    pub fn value(&self) -> Option<&V> {
        self.value.as_ref()
    }

    /// Returns the child reached by `ch`, if any.
    pub fn child(&self, ch: char) -> Option<&TrieNode<V>> {
        self.children.get(&ch)
    }

    /// Iterates over the children of this node in sibling order.
    pub fn children(&self) -> impl Iterator<Item = (char, &TrieNode<V>)> + '_ {
        self.children.iter().map(|(ch, child)| (*ch, child))
    }

    /// Returns the number of direct children.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Returns whether this node is a leaf node (has no children)
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns the number of values stored in this subtree
    pub fn subtree_size(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];

        while let Some(node) = pending.pop() {
            if node.value.is_some() {
                count += 1;
            }
            pending.extend(node.children.values());
        }

        count
    }

    /// Follows `path` from this node, returning the node it ends at.
    pub(crate) fn descend(&self, path: &str) -> Option<&TrieNode<V>> {
        let mut current = self;
        for ch in path.chars() {
            current = current.children.get(&ch)?;
        }
        Some(current)
    }

    pub(crate) fn descend_mut(&mut self, path: &str) -> Option<&mut TrieNode<V>> {
        let mut current = self;
        for ch in path.chars() {
            current = current.children.get_mut(&ch)?;
        }
        Some(current)
    }

    /// A childless copy of this node, carrying a clone of its value.
    fn shell(&self) -> Self
    where
        V: Clone,
    {
        TrieNode {
            children: IndexMap::new(),
            value: self.value.clone(),
        }
    }
}

// Paths are as deep as keys are long, so cloning and dropping walk an explicit
// stack instead of recursing once per character.
impl<V: Clone> Clone for TrieNode<V> {
    fn clone(&self) -> Self {
        // (source node, next child to copy, edge into source, copy being filled)
        let mut stack = vec![(self, 0usize, '\0', self.shell())];
        let mut finished = None;

        while let Some((source, next, _, _)) = stack.last_mut() {
            let source: &TrieNode<V> = *source;
            match source.children.get_index(*next) {
                Some((&ch, child)) => {
                    *next += 1;
                    stack.push((child, 0, ch, child.shell()));
                }
                None => {
                    if let Some((_, _, ch, copy)) = stack.pop() {
                        match stack.last_mut() {
                            Some(parent) => {
                                parent.3.children.insert(ch, copy);
                            }
                            None => finished = Some(copy),
                        }
                    }
                }
            }
        }

        finished.unwrap_or_default()
    }
}

impl<V> Drop for TrieNode<V> {
    fn drop(&mut self) {
        let mut pending: Vec<TrieNode<V>> = std::mem::take(&mut self.children)
            .into_iter()
            .map(|(_, child)| child)
            .collect();

        while let Some(mut node) = pending.pop() {
            pending.extend(
                std::mem::take(&mut node.children)
                    .into_iter()
                    .map(|(_, child)| child),
            );
        }
    }
}

impl<V> Default for TrieNode<V> {
    fn default() -> Self {
        Self::new()
    }
}
