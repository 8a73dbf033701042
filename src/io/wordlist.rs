//! Newline-delimited word-list loading

use crate::io::error::{Result, SquareError};
use std::path::Path;

/// Word list read from disk, filtered to one word length
#[derive(Clone, Debug)]
pub struct LoadedWords {
    /// Lines present in the file before length filtering
    pub total: usize,
    /// Words of the requested length, in file order
    pub words: Vec<String>,
}

/// Read a word list and keep the words of the requested length
///
/// One word per line; surrounding whitespace is trimmed and blank lines are
/// dropped from the total. Character validation is left to lexicon
/// construction so bad input is reported, not silently discarded.
///
/// # Errors
///
/// Returns [`SquareError::WordListLoad`] when the file cannot be read.
pub fn load_words(path: &Path, word_len: usize) -> Result<LoadedWords> {
    let contents =
        std::fs::read_to_string(path).map_err(|source| SquareError::WordListLoad {
            path: path.to_path_buf(),
            source,
        })?;

    let lines: Vec<&str> = contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    let total = lines.len();
    let words = lines
        .into_iter()
        .filter(|word| word.len() == word_len)
        .map(str::to_owned)
        .collect();

    Ok(LoadedWords { total, words })
}
