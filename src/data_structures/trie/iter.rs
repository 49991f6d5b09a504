// Copyright (c) 2025 Prefix Matches Authors
//
// Licensed under the MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Breadth-first word enumeration.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use super::node::TrieNode;

/// Lazy breadth-first iterator over the words stored beneath a node.
///
/// Every frontier entry carries the path spelled so far. A node is yielded
/// only when terminal, but its children are queued regardless, in
/// alphabetical order. The iterator borrows the trie, so the tree cannot be
/// mutated while a traversal is alive.
#[derive(Debug, Clone)]
pub struct Words<'a> {
    frontier: VecDeque<(&'a TrieNode, String)>,
}

impl<'a> Words<'a> {
    /// Starts a traversal at `node`, seeding the accumulated path with `path`.
    pub(crate) fn rooted_at(node: &'a TrieNode, path: String) -> Self {
        let mut frontier = VecDeque::new();
        frontier.push_back((node, path));
        Self { frontier }
    }

    /// An iterator that yields nothing.
    pub(crate) fn empty() -> Self {
        Self {
            frontier: VecDeque::new(),
        }
    }
}

impl Iterator for Words<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        while let Some((node, path)) = self.frontier.pop_front() {
            for child in node.children() {
                if let Some(c) = child.character {
                    let mut next = String::with_capacity(path.len() + 1);
                    next.push_str(&path);
                    next.push(c);
                    self.frontier.push_back((child, next));
                }
            }

            if node.is_terminal() {
                tracing::trace!(word = %path, queued = self.frontier.len(), "emitting word");
                return Some(path);
            }
        }
        None
    }
}

impl FusedIterator for Words<'_> {}
