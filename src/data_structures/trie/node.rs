// Copyright (c) 2025 Prefix Matches Authors
//
// Licensed under the MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Node implementation for the R-way trie.
//!
//! Each node owns a fixed fan-out of [`RADIX`] child slots, one per lowercase
//! letter. Ownership flows strictly from parent to child, so the structure is
//! a tree by construction.

/// Size of the alphabet: one child slot per letter `a..=z`.
pub const RADIX: usize = 26;

/// Maps a character to its child slot, or `None` if it is outside `a..=z`.
#[inline]
pub(crate) fn slot(c: char) -> Option<usize> {
    if c.is_ascii_lowercase() {
        Some((c as u8 - b'a') as usize)
    } else {
        None
    }
}

/// A node in the R-way trie.
#[derive(Debug, Default)]
pub struct TrieNode {
    /// Edge label reaching this node; `None` for the root
    pub character: Option<char>,

    /// Length of the word ending here, if any
    pub terminal_length: Option<usize>,

    /// Child slots indexed by `character - 'a'`
    pub children: [Option<Box<TrieNode>>; RADIX],
}

impl TrieNode {
    /// Creates an empty root node.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty node reached through `character`.
    pub fn with_character(character: char) -> Self {
        Self {
            character: Some(character),
            ..Self::default()
        }
    }

    /// Whether a word ends at this node.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.terminal_length.is_some()
    }

    /// Whether this node has at least one child.
    #[inline]
    pub fn has_children(&self) -> bool {
        self.children.iter().any(Option::is_some)
    }

    /// Returns the child for `c`, if present.
    pub fn child(&self, c: char) -> Option<&TrieNode> {
        slot(c).and_then(|i| self.children[i].as_deref())
    }

    /// Iterates over present children in alphabetical order.
    pub fn children(&self) -> impl Iterator<Item = &TrieNode> {
        self.children.iter().filter_map(Option::as_deref)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_bounds() {
        assert_eq!(slot('a'), Some(0));
        assert_eq!(slot('z'), Some(RADIX - 1));
        assert_eq!(slot('A'), None);
        assert_eq!(slot('{'), None);
        assert_eq!(slot('é'), None);
    }

    #[test]
    fn test_children_in_alphabetical_order() {
        let mut node = TrieNode::new();
        for c in ['q', 'b', 'x'] {
            node.children[slot(c).unwrap()] = Some(Box::new(TrieNode::with_character(c)));
        }

        let labels: Vec<char> = node.children().filter_map(|n| n.character).collect();
        assert_eq!(labels, vec!['b', 'q', 'x']);
        assert!(node.has_children());
        assert!(!node.is_terminal());
        assert!(node.child('q').is_some());
        assert!(node.child('c').is_none());
        assert!(node.child('Q').is_none());
    }
}
