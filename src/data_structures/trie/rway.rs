// Copyright (c) 2025 Prefix Matches Authors
//
// Licensed under the MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! R-way trie over the lowercase Latin alphabet.

use tracing::{debug, trace};

use super::error::{TrieError, TrieResult};
use super::iter::Words;
use super::node::{slot, TrieNode};
use super::{Trie, Tuple, WordIter};

/// In-memory word store with one child slot per letter `a..=z`.
///
/// Nodes are allocated lazily along insertion paths and unlinked again when a
/// deletion leaves them without children and without a word ending on them.
#[derive(Debug, Default)]
pub struct RWayTrie {
    /// The root node; never terminal
    root: TrieNode,

    /// Number of terminal nodes
    size: usize,
}

impl RWayTrie {
    /// Creates an empty trie.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts the first `length` characters of `term`.
    ///
    /// # Arguments
    ///
    /// * `term` - The backing string.
    /// * `length` - Number of characters of `term` to store.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The word is present afterwards.
    /// * `Err(TrieError)` - The arguments were rejected; nothing was changed.
    pub fn insert(&mut self, term: &str, length: usize) -> TrieResult<()> {
        if term.is_empty() || length == 0 {
            return Err(TrieError::EmptyTerm);
        }

        let end = match term.char_indices().nth(length) {
            Some((offset, _)) => offset,
            None if term.chars().count() == length => term.len(),
            None => {
                return Err(TrieError::LengthOutOfRange {
                    term: term.to_string(),
                    length,
                })
            }
        };
        let path = Self::path(&term[..end])?;

        let mut created = 0usize;
        let mut node = &mut self.root;
        for &(i, c) in &path {
            node = &mut **node.children[i].get_or_insert_with(|| {
                created += 1;
                Box::new(TrieNode::with_character(c))
            });
        }

        let is_new = !node.is_terminal();
        node.terminal_length = Some(length);
        if is_new {
            self.size += 1;
        }

        debug!(
            word = &term[..end],
            created_nodes = created,
            is_new,
            size = self.size,
            "inserted word"
        );
        Ok(())
    }

    /// Lazily enumerates every stored word breadth-first.
    ///
    /// Each call starts a fresh traversal.
    pub fn words(&self) -> Words<'_> {
        Words::rooted_at(&self.root, String::new())
    }

    /// Lazily enumerates every stored word beginning with `prefix`.
    ///
    /// The traversal is rooted at the node `prefix` leads to and yields full
    /// words, the prefix itself included when it is stored.
    pub fn words_with_prefix(&self, prefix: &str) -> TrieResult<Words<'_>> {
        let path = Self::path(prefix)?;
        Ok(match self.descend(&path) {
            Some(node) => Words::rooted_at(node, prefix.to_string()),
            None => Words::empty(),
        })
    }

    /// Removes every word.
    pub fn clear(&mut self) {
        self.root = TrieNode::new();
        self.size = 0;
        debug!("cleared trie");
    }

    /// Number of allocated nodes, root included.
    #[cfg(test)]
    pub(crate) fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children());
        }
        count
    }

    /// Resolves `word` to its child slots, rejecting characters outside `a..=z`.
    fn path(word: &str) -> TrieResult<Vec<(usize, char)>> {
        word.chars()
            .map(|c| {
                slot(c)
                    .map(|i| (i, c))
                    .ok_or_else(|| TrieError::invalid_character(word, c))
            })
            .collect()
    }

    /// Follows `path` from the root, stopping at the first missing edge.
    fn descend(&self, path: &[(usize, char)]) -> Option<&TrieNode> {
        path.iter()
            .try_fold(&self.root, |node, &(i, _)| node.children[i].as_deref())
    }

    /// Clears the word at the end of `path` below `node`, then unlinks each
    /// node on the way back up that is left childless and non-terminal.
    ///
    /// Returns whether a word was removed.
    fn remove_recursive(node: &mut TrieNode, path: &[(usize, char)]) -> bool {
        let Some((&(i, c), rest)) = path.split_first() else {
            return node.terminal_length.take().is_some();
        };

        let Some(child) = node.children[i].as_deref_mut() else {
            return false;
        };

        let removed = Self::remove_recursive(child, rest);
        if removed && !child.is_terminal() && !child.has_children() {
            trace!(character = %c, depth = rest.len(), "pruning node");
            node.children[i] = None;
        }
        removed
    }
}

impl Trie for RWayTrie {
    fn add(&mut self, tuple: Tuple<'_>) -> TrieResult<()> {
        self.insert(tuple.term(), tuple.weight())
    }

    fn contains(&self, word: &str) -> TrieResult<bool> {
        let path = Self::path(word)?;
        Ok(self.descend(&path).is_some_and(TrieNode::is_terminal))
    }

    fn delete(&mut self, word: &str) -> TrieResult<bool> {
        let path = Self::path(word)?;
        let removed = Self::remove_recursive(&mut self.root, &path);
        if removed {
            self.size -= 1;
            debug!(word, size = self.size, "deleted word");
        }
        Ok(removed)
    }

    fn words(&self) -> WordIter<'_> {
        Box::new(RWayTrie::words(self))
    }

    fn words_with_prefix(&self, prefix: &str) -> TrieResult<WordIter<'_>> {
        Ok(Box::new(RWayTrie::words_with_prefix(self, prefix)?))
    }

    fn size(&self) -> usize {
        self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trie_with(words: &[&str]) -> RWayTrie {
        let mut trie = RWayTrie::new();
        for word in words {
            trie.add(Tuple::from_term(word)).unwrap();
        }
        trie
    }

    #[test]
    fn test_add_different_tuples() {
        let trie = trie_with(&["tupleone", "tupletwo"]);
        assert_eq!(trie.size(), 2);
    }

    #[test]
    fn test_add_same_tuple_twice() {
        let trie = trie_with(&["tupleone", "tupleone"]);
        assert_eq!(trie.size(), 1);
    }

    #[test]
    fn test_add_rejects_bad_arguments() {
        let mut trie = RWayTrie::new();

        assert_eq!(trie.insert("", 0), Err(TrieError::EmptyTerm));
        assert_eq!(trie.insert("abc", 0), Err(TrieError::EmptyTerm));
        assert_eq!(
            trie.insert("abc", 4),
            Err(TrieError::LengthOutOfRange {
                term: "abc".to_string(),
                length: 4,
            })
        );
        assert!(matches!(
            trie.insert("abCd", 4),
            Err(TrieError::InvalidCharacter { character: 'C', .. })
        ));

        // Rejected calls must not allocate anything
        assert_eq!(trie.size(), 0);
        assert!(!trie.root.has_children());
    }

    #[test]
    fn test_insert_prefix_of_backing_term() {
        let mut trie = RWayTrie::new();
        trie.insert("tupleone", 7).unwrap();

        assert!(trie.contains("tupleon").unwrap());
        assert!(!trie.contains("tupleone").unwrap());
        assert_eq!(trie.words().collect::<Vec<_>>(), vec!["tupleon"]);
    }

    #[test]
    fn test_contains() {
        let trie = trie_with(&["tupleone"]);

        assert!(trie.contains("tupleone").unwrap());
        assert!(!trie.contains("tupleono").unwrap());
        assert!(!trie.contains("tuple").unwrap());
        assert!(!trie.contains("").unwrap());
        assert!(trie.contains("Tupleone").is_err());
    }

    #[test]
    fn test_delete() {
        let mut trie = trie_with(&["tuple"]);

        assert!(!trie.delete("adfsa").unwrap());
        assert!(!trie.delete("tupl").unwrap());
        assert!(trie.contains("tuple").unwrap());

        assert!(trie.delete("tuple").unwrap());
        assert!(!trie.contains("tuple").unwrap());
        assert!(!trie.delete("tuple").unwrap());
        assert_eq!(trie.size(), 0);
        assert!(!trie.root.has_children());
    }

    #[test]
    fn test_failed_delete_leaves_structure() {
        let mut trie = trie_with(&["tuple", "tupxy"]);
        let nodes = trie.node_count();
        assert_eq!(nodes, 8);

        for word in ["tupl", "tuplex", "zzz", "tu", ""] {
            assert!(!trie.delete(word).unwrap());
            assert_eq!(trie.node_count(), nodes);
        }
        assert_eq!(trie.size(), 2);
    }

    #[test]
    fn test_delete_prunes_only_unshared_branch() {
        let mut trie = trie_with(&["tup", "tuple", "tupxy"]);

        assert!(trie.delete("tuple").unwrap());

        let tup = trie
            .root
            .child('t')
            .and_then(|n| n.child('u'))
            .and_then(|n| n.child('p'))
            .unwrap();
        assert!(tup.is_terminal());
        assert!(tup.child('l').is_none());
        assert!(tup.child('x').and_then(|n| n.child('y')).is_some());
        assert_eq!(trie.words().collect::<Vec<_>>(), vec!["tup", "tupxy"]);
    }

    #[test]
    fn test_delete_keeps_node_with_children() {
        let mut trie = trie_with(&["tup", "tuple"]);

        assert!(trie.delete("tup").unwrap());
        assert!(trie.contains("tuple").unwrap());
        assert!(!trie.contains("tup").unwrap());
        assert_eq!(trie.size(), 1);
    }

    #[test]
    fn test_words() {
        let trie = trie_with(&["tupletwo", "tupleone", "tuplethree", "tupleone"]);
        let words: Vec<String> = trie.words().collect();
        assert_eq!(words, vec!["tupleone", "tupletwo", "tuplethree"]);
    }

    #[test]
    fn test_words_breadth_first_order() {
        let trie = trie_with(&["bca", "ab", "b", "abc", "a"]);
        let words: Vec<String> = trie.words().collect();
        assert_eq!(words, vec!["a", "b", "ab", "abc", "bca"]);
    }

    #[test]
    fn test_words_with_prefix() {
        let trie = trie_with(&["tupleone", "tupletwo", "tuplethree", "other"]);

        let words: Vec<String> = trie.words_with_prefix("tuple").unwrap().collect();
        assert_eq!(words, vec!["tupleone", "tupletwo", "tuplethree"]);

        assert_eq!(trie.words_with_prefix("abc").unwrap().next(), None);
        assert!(trie.words_with_prefix("TUP").is_err());
    }

    #[test]
    fn test_words_with_prefix_includes_stored_prefix() {
        let trie = trie_with(&["tupleone", "tuple"]);
        let words: Vec<String> = trie.words_with_prefix("tuple").unwrap().collect();
        assert_eq!(words, vec!["tuple", "tupleone"]);
    }

    #[test]
    fn test_words_restartable() {
        let trie = trie_with(&["weqis", "weqosx", "skqm", "weqiox"]);
        let first: Vec<String> = trie.words().collect();
        let second: Vec<String> = trie.words().collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), trie.size());
    }

    #[test]
    fn test_clear() {
        let mut trie = trie_with(&["abc", "abd"]);
        trie.clear();
        assert!(trie.is_empty());
        assert_eq!(trie.words().next(), None);
    }
}
