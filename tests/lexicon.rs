//! Validates lexicon construction and prefix range queries

use squarefill::{Lexicon, SquareError};

fn lexicon(words: &[&str]) -> Lexicon {
    match Lexicon::build(words.iter().map(|w| (*w).to_owned())) {
        Ok(lex) => lex,
        Err(err) => unreachable!("lexicon should build: {err}"),
    }
}

#[test]
fn test_build_sorts_and_deduplicates() {
    let lex = lexicon(&["wed", "cat", "ore", "cat", "are"]);
    assert_eq!(lex.words(), ["are", "cat", "ore", "wed"]);
    assert_eq!(lex.len(), 4);
    assert_eq!(lex.word_len(), 3);
}

#[test]
fn test_prefix_range_is_contiguous_and_sorted() {
    let lex = lexicon(&["oat", "cat", "ore", "own", "are"]);
    assert_eq!(lex.matching("o"), ["oat", "ore", "own"]);
    assert_eq!(lex.prefix_range("o"), 2..5);
    assert_eq!(lex.matching("or"), ["ore"]);
}

#[test]
fn test_full_word_prefix_matches_exactly() {
    let lex = lexicon(&["cat", "cow", "car"]);
    assert_eq!(lex.matching("cat"), ["cat"]);
    assert_eq!(lex.position("cow"), Some(2));
    assert_eq!(lex.position("cab"), None);
}

#[test]
fn test_empty_prefix_matches_everything() {
    let lex = lexicon(&["cat", "are"]);
    assert_eq!(lex.matching(""), ["are", "cat"]);
}

#[test]
fn test_prefix_longer_than_word_length_matches_nothing() {
    let lex = lexicon(&["cat", "are"]);
    assert!(lex.matching("cats").is_empty());
    assert!(lex.prefix_range("cats").is_empty());
}

#[test]
fn test_empty_lexicon_queries_return_empty() {
    let lex = lexicon(&[]);
    assert!(lex.is_empty());
    assert_eq!(lex.word_len(), 0);
    assert!(lex.matching("a").is_empty());
}

#[test]
fn test_mixed_lengths_rejected() {
    let words = ["cat", "dog", "ox"].map(str::to_owned);
    let result = Lexicon::build(words);
    assert!(matches!(result, Err(SquareError::MixedLengths { .. })));
}

#[test]
fn test_uppercase_rejected() {
    let words = ["Cat", "dog"].map(str::to_owned);
    let result = Lexicon::build(words);
    assert!(matches!(result, Err(SquareError::InvalidWord { .. })));
}

#[test]
fn test_non_letter_characters_rejected() {
    let words = ["ca-", "dog"].map(str::to_owned);
    let result = Lexicon::build(words);
    assert!(matches!(result, Err(SquareError::InvalidWord { .. })));
}
