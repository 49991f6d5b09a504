// Copyright (c) 2025 Prefix Matches Authors
//
// Licensed under the MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Integration tests for the prefix dictionary.

use prefix_matches_lib::config::source::SourceConfig;
use prefix_matches_lib::data_structures::trie::{RWayTrie, Trie, TrieError, Tuple};
use prefix_matches_lib::dictionary::{DictionaryError, PrefixMatches};
use prefix_matches_lib::source::WordSource;

const WORDS: &str = "\
The mock mocks mockery mocking mockingbird
mocked 1984 mock-up moccasin Mocha
";

/// Load a small word file end to end and query it.
#[test]
fn test_load_file_and_query() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("words.txt");
    std::fs::write(&path, WORDS).unwrap();

    let text = WordSource::new(&path).parse().unwrap();
    let mut dictionary = PrefixMatches::new();
    // "1984" and "mock-up" are not words
    assert_eq!(dictionary.add(&text).unwrap(), 9);
    assert_eq!(dictionary.size(), 9);

    let matches: Vec<String> = dictionary.words_with_prefix("mock").unwrap().collect();
    assert_eq!(matches, vec!["mock", "mocks", "mocked"]);

    let matches: Vec<String> = dictionary
        .words_with_prefix_limited("moc", 18)
        .unwrap()
        .collect();
    assert_eq!(
        matches,
        vec![
            "mock",
            "mocha",
            "mocks",
            "mocked",
            "mockery",
            "mocking",
            "moccasin",
            "mockingbird"
        ]
    );
}

/// Without case folding, capitalised words are rejected by the trie.
#[test]
fn test_load_without_case_folding() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("words.txt");
    std::fs::write(&path, "alpha Beta").unwrap();

    let words = WordSource::with_config(&path, &SourceConfig { fold_case: false })
        .words()
        .unwrap();
    let mut dictionary = PrefixMatches::new();

    let err = dictionary.add_terms(&words).unwrap_err();
    assert_eq!(
        err,
        DictionaryError::InvalidArgument(TrieError::InvalidCharacter {
            word: "Beta".to_string(),
            character: 'B',
        })
    );
}

/// Deleting a stored prefix of another word leaves the longer word intact.
#[test]
fn test_delete_shared_prefix() {
    let mut trie = RWayTrie::new();
    trie.add(Tuple::from_term("tuple")).unwrap();
    trie.add(Tuple::from_term("tuples")).unwrap();

    assert!(!trie.delete("tupl").unwrap());
    assert!(trie.delete("tuple").unwrap());
    assert!(trie.contains("tuples").unwrap());
    assert_eq!(trie.words().collect::<Vec<_>>(), vec!["tuples"]);

    assert!(trie.delete("tuples").unwrap());
    assert!(trie.is_empty());
    assert_eq!(trie.words_with_prefix("t").unwrap().next(), None);
}

/// Enumeration is repeatable and independent of insertion order.
#[test]
fn test_enumeration_independent_of_insertion_order() {
    let mut forward = PrefixMatches::new();
    forward.add("weqis weqosx skqm weqiox").unwrap();

    let mut backward = PrefixMatches::new();
    backward.add("weqiox skqm weqosx weqis").unwrap();

    let a: Vec<String> = forward.words().collect();
    let b: Vec<String> = backward.words().collect();
    assert_eq!(a, b);
    assert_eq!(a, vec!["skqm", "weqis", "weqiox", "weqosx"]);
    assert_eq!(forward.words().collect::<Vec<_>>(), a);
}

/// Short prefixes never match, whatever is stored.
#[test]
fn test_short_prefix_never_matches() {
    let mut dictionary = PrefixMatches::new();
    dictionary.add("weqis weqosx skqm weqiox").unwrap();

    let mut matches = dictionary.words_with_prefix_limited("w", 4).unwrap();
    assert!(!matches.has_next());
    assert_eq!(matches.try_next(), Err(DictionaryError::EndOfSequence));
}
