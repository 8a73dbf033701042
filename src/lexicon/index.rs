use crate::io::error::{Result, SquareError};
use std::ops::Range;

/// Immutable sorted index over words of a single fixed length
///
/// Words are stored sorted and deduplicated, so every prefix query resolves
/// to one contiguous run of the backing vector. The index is read-only after
/// construction and can be shared freely across independent searches.
#[derive(Clone, Debug, Default)]
pub struct Lexicon {
    words: Vec<String>,
    word_len: usize,
}

impl Lexicon {
    /// Build an index from an arbitrary collection of words
    ///
    /// Sorts and deduplicates the input. Every word must consist of lowercase
    /// ASCII letters and share the length of the first word observed. An
    /// empty collection yields an empty index with word length zero.
    ///
    /// # Errors
    ///
    /// Returns [`SquareError::InvalidWord`] when a word contains a character
    /// outside `'a'..='z'`, and [`SquareError::MixedLengths`] when a word's
    /// length differs from the first word's.
    pub fn build(words: impl IntoIterator<Item = String>) -> Result<Self> {
        let mut words: Vec<String> = words.into_iter().collect();
        let word_len = words.first().map_or(0, String::len);

        for word in &words {
            if !word.bytes().all(|b| b.is_ascii_lowercase()) {
                return Err(SquareError::InvalidWord { word: word.clone() });
            }
            if word.len() != word_len {
                return Err(SquareError::MixedLengths {
                    word: word.clone(),
                    expected: word_len,
                    actual: word.len(),
                });
            }
        }

        words.sort();
        words.dedup();
        Ok(Self { words, word_len })
    }

    /// Length shared by every indexed word (and the side of any square)
    pub const fn word_len(&self) -> usize {
        self.word_len
    }

    /// Number of indexed words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Test whether the index holds no words
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All indexed words in sorted order
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Word stored at a given index position
    pub fn word(&self, id: usize) -> Option<&str> {
        self.words.get(id).map(String::as_str)
    }

    /// Index position of a word, if present
    pub fn position(&self, word: &str) -> Option<usize> {
        self.words
            .binary_search_by(|probe| probe.as_str().cmp(word))
            .ok()
    }

    /// Index range of every word starting with the given prefix
    ///
    /// Binary searches for the first word >= prefix, then scans forward while
    /// the prefix still matches. The run is contiguous because the backing
    /// vector is sorted; a prefix longer than the word length matches nothing.
    pub fn prefix_range(&self, prefix: &str) -> Range<usize> {
        let start = self.words.partition_point(|w| w.as_str() < prefix);
        let mut end = start;
        while self.words.get(end).is_some_and(|w| w.starts_with(prefix)) {
            end += 1;
        }
        start..end
    }

    /// Every word starting with the given prefix, in sorted order
    pub fn matching(&self, prefix: &str) -> &[String] {
        self.words.get(self.prefix_range(prefix)).unwrap_or(&[])
    }

    /// Letter at a fixed position of an indexed word
    pub(crate) fn letter(&self, id: usize, position: usize) -> Option<u8> {
        self.words
            .get(id)
            .and_then(|w| w.as_bytes().get(position))
            .copied()
    }
}
