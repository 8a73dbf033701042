//! Validates backtracking search semantics against hand-checked lexicons

use squarefill::{Lexicon, Square, find_squares};

fn lexicon(words: &[&str]) -> Lexicon {
    match Lexicon::build(words.iter().map(|w| (*w).to_owned())) {
        Ok(lex) => lex,
        Err(err) => unreachable!("lexicon should build: {err}"),
    }
}

fn assert_square_is_valid(square: &Square, lex: &Lexicon, babbage: bool) {
    let rows = square.rows();
    let columns = square.columns();
    assert_eq!(rows.len(), lex.word_len());
    assert_eq!(columns.len(), lex.word_len());

    // Every line of the grid reads as a lexicon word
    for word in rows.iter().chain(columns.iter()) {
        assert!(
            lex.position(word).is_some(),
            "'{word}' is not a lexicon word"
        );
    }

    if babbage {
        assert_eq!(rows, columns.as_slice());
    } else {
        // No word appears twice among the combined row and column words
        let mut all: Vec<&String> = rows.iter().chain(columns.iter()).collect();
        all.sort();
        let distinct = all.len();
        all.dedup();
        assert_eq!(all.len(), distinct, "a word was reused within the square");
    }
}

// The lexicon admits exactly one completion of the cat/cow seed pair:
//
//   c a t
//   o r e     columns: cow, are, ted
//   w e d
//
// The oat branch dead-ends (no word starts with "aa"), exercising undo.
#[test]
fn test_unique_completion_is_found() {
    let lex = lexicon(&["cat", "cow", "oat", "ore", "are", "wed", "ted"]);
    let mut search = find_squares(&lex, "cat", "cow", false);

    let Some(square) = search.next() else {
        unreachable!("the cat/cow seed pair admits a square");
    };
    assert_eq!(square.rows(), ["cat", "ore", "wed"]);
    assert_eq!(square.columns(), ["cow", "are", "ted"]);
    assert_square_is_valid(&square, &lex, false);

    assert!(search.next().is_none());
    assert!(search.next().is_none());
}

// Adding wet/tet opens a second completion; candidates are tried in sorted
// order, so wed precedes wet.
#[test]
fn test_all_completions_enumerated_in_order() {
    let lex = lexicon(&[
        "cat", "cow", "oat", "ore", "are", "wed", "wet", "ted", "tet",
    ]);
    let squares: Vec<Square> = find_squares(&lex, "cat", "cow", false).collect();

    assert_eq!(squares.len(), 2);
    let expected_first = ["cat", "ore", "wed"].map(str::to_owned);
    let expected_second = ["cat", "ore", "wet"].map(str::to_owned);
    assert_eq!(squares.first().map(Square::rows), Some(expected_first.as_slice()));
    assert_eq!(squares.get(1).map(Square::rows), Some(expected_second.as_slice()));
    for square in &squares {
        assert_square_is_valid(square, &lex, false);
    }
}

#[test]
fn test_search_is_deterministic() {
    let lex = lexicon(&[
        "cat", "cow", "oat", "ore", "are", "wed", "wet", "ted", "tet",
    ]);
    let first: Vec<Square> = find_squares(&lex, "cat", "cow", false).collect();
    let second: Vec<Square> = find_squares(&lex, "cat", "cow", false).collect();
    assert_eq!(first, second);
}

#[test]
fn test_no_solution_is_a_silent_exhaustion() {
    let lex = lexicon(&["cat", "cow"]);
    assert!(find_squares(&lex, "cat", "cow", false).next().is_none());
}

#[test]
fn test_corner_letter_mismatch_exhausts_immediately() {
    let lex = lexicon(&["cat", "wed"]);
    assert!(find_squares(&lex, "cat", "wed", false).next().is_none());
}

#[test]
fn test_seeds_outside_the_lexicon_exhaust_immediately() {
    let lex = lexicon(&["cat", "cow"]);
    assert!(find_squares(&lex, "car", "cow", false).next().is_none());
    assert!(find_squares(&lex, "cat", "car", false).next().is_none());
}

#[test]
fn test_equal_seeds_violate_reuse_for_larger_squares() {
    let lex = lexicon(&["cat", "cow", "oat", "ore", "are", "wed", "ted"]);
    assert!(find_squares(&lex, "cat", "cat", false).next().is_none());
}

// A 1x1 square reads the same across and down, so the shared seed word is
// not a reuse violation
#[test]
fn test_single_letter_square_is_trivial() {
    let lex = lexicon(&["a", "b", "c"]);
    let mut search = find_squares(&lex, "b", "b", false);
    assert_eq!(search.next().map(|s| s.rows().to_vec()), Some(vec!["b".to_owned()]));
    assert!(search.next().is_none());
}

#[test]
fn test_empty_lexicon_exhausts_immediately() {
    let lex = lexicon(&[]);
    assert!(find_squares(&lex, "cat", "cow", false).next().is_none());
}

// Babbage square over bit/ice/tee:
//
//   b i t
//   i c e     rows equal columns by construction
//   t e e
//
// The irk distractor dead-ends (no word starts with "tk").
#[test]
fn test_babbage_square_reuses_rows_as_columns() {
    let lex = lexicon(&["bit", "ice", "irk", "tee"]);
    let mut search = find_squares(&lex, "bit", "bit", true);

    let Some(square) = search.next() else {
        unreachable!("the bit seed admits a Babbage square");
    };
    assert_eq!(square.rows(), ["bit", "ice", "tee"]);
    assert_square_is_valid(&square, &lex, true);
    assert!(search.next().is_none());
}

#[test]
fn test_babbage_requires_equal_seeds() {
    let lex = lexicon(&["bit", "ice", "irk", "tee"]);
    assert!(find_squares(&lex, "bit", "ice", true).next().is_none());
}
