// crates/countrycodes-core/src/trie.rs

//! # Prefix Trie
//!
//! A compressed (radix) trie over byte strings. Every edge carries a
//! non-empty label, and siblings never share a first byte, so walking a
//! prefix is a binary search per level plus a slice compare.
//!
//! Payloads are generic. Inserting the same key twice keeps both payloads
//! in insertion order; nothing is ever overwritten.
//!
//! Traversal is pre-order: a node's own payloads first, then its children
//! in ascending order of their first byte. For UTF-8 keys this is plain
//! lexicographic order of the keys.

use std::slice;

#[derive(Debug, Clone)]
pub struct PrefixTrie<T> {
    root: Node<T>,
    len: usize,
}

#[derive(Debug, Clone)]
struct Node<T> {
    values: Vec<T>,
    /// Sorted by `label[0]`.
    edges: Vec<Edge<T>>,
}

#[derive(Debug, Clone)]
struct Edge<T> {
    label: Box<[u8]>,
    node: Node<T>,
}

impl<T> Default for Node<T> {
    fn default() -> Self {
        Self {
            values: Vec::new(),
            edges: Vec::new(),
        }
    }
}

impl<T> Default for PrefixTrie<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn common_prefix_len(a: &[u8], b: &[u8]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}

impl<T> Node<T> {
    fn edge_index(&self, first: u8) -> Result<usize, usize> {
        self.edges.binary_search_by_key(&first, |e| e.label[0])
    }

    fn insert(&mut self, key: &[u8], value: T) {
        let Some(&first) = key.first() else {
            self.values.push(value);
            return;
        };

        match self.edge_index(first) {
            Ok(i) => {
                let edge = &mut self.edges[i];
                let shared = common_prefix_len(&edge.label, key);
                if shared < edge.label.len() {
                    edge.split(shared);
                }
                edge.node.insert(&key[shared..], value);
            }
            Err(i) => {
                let mut node = Node::default();
                node.values.push(value);
                self.edges.insert(
                    i,
                    Edge {
                        label: key.into(),
                        node,
                    },
                );
            }
        }
    }

    #[cfg(test)]
    fn count_nodes(&self) -> usize {
        1 + self.edges.iter().map(|e| e.node.count_nodes()).sum::<usize>()
    }
}

impl<T> Edge<T> {
    /// Cut the label at `at` (0 < at < label.len()), pushing the current
    /// node one level down behind the remaining tail.
    fn split(&mut self, at: usize) {
        debug_assert!(at > 0 && at < self.label.len());
        let tail: Box<[u8]> = self.label[at..].into();
        let head: Box<[u8]> = self.label[..at].into();
        let lower = std::mem::take(&mut self.node);

        self.label = head;
        self.node = Node {
            values: Vec::new(),
            edges: vec![Edge {
                label: tail,
                node: lower,
            }],
        };
    }
}

impl<T> PrefixTrie<T> {
    pub fn new() -> Self {
        Self {
            root: Node::default(),
            len: 0,
        }
    }

    /// Total number of stored payloads (not distinct keys).
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn insert(&mut self, key: &str, value: T) {
        self.root.insert(key.as_bytes(), value);
        self.len += 1;
    }

    /// Payloads stored under exactly `key`, in insertion order.
    pub fn get(&self, key: &str) -> &[T] {
        let mut node = &self.root;
        let mut rest = key.as_bytes();

        while let Some(&first) = rest.first() {
            let Ok(i) = node.edge_index(first) else {
                return &[];
            };
            let edge = &node.edges[i];
            if !rest.starts_with(&edge.label) {
                return &[];
            }
            rest = &rest[edge.label.len()..];
            node = &edge.node;
        }
        &node.values
    }

    /// Whether any stored key starts with `prefix`.
    pub fn contains_prefix(&self, prefix: &str) -> bool {
        self.subtree(prefix.as_bytes()).is_some()
    }

    /// Every payload whose key starts with `prefix`, in traversal order.
    pub fn iter_prefix(&self, prefix: &str) -> PrefixIter<'_, T> {
        PrefixIter {
            stack: self.subtree(prefix.as_bytes()).into_iter().collect(),
            current: Default::default(),
        }
    }

    /// Callback flavour of [`PrefixTrie::iter_prefix`].
    pub fn visit_prefix<F>(&self, prefix: &str, mut visit: F)
    where
        F: FnMut(&T),
    {
        for value in self.iter_prefix(prefix) {
            visit(value);
        }
    }

    /// Node whose subtree holds exactly the keys starting with `prefix`.
    /// A prefix that ends in the middle of an edge selects that edge's node.
    fn subtree(&self, prefix: &[u8]) -> Option<&Node<T>> {
        let mut node = &self.root;
        let mut rest = prefix;

        while let Some(&first) = rest.first() {
            let edge = &node.edges[node.edge_index(first).ok()?];
            let shared = common_prefix_len(&edge.label, rest);
            if shared == rest.len() {
                return Some(&edge.node);
            }
            if shared < edge.label.len() {
                return None;
            }
            rest = &rest[shared..];
            node = &edge.node;
        }
        // Only the root can be empty; an empty trie has no keys at all.
        (!node.values.is_empty() || !node.edges.is_empty()).then_some(node)
    }
}

/// Pre-order iterator over a subtree. See the module docs for the order.
pub struct PrefixIter<'a, T> {
    stack: Vec<&'a Node<T>>,
    current: slice::Iter<'a, T>,
}

impl<'a, T> Iterator for PrefixIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(value) = self.current.next() {
                return Some(value);
            }
            let node = self.stack.pop()?;
            self.current = node.values.iter();
            self.stack.extend(node.edges.iter().rev().map(|e| &e.node));
        }
    }
}
