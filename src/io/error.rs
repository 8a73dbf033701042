//! Error types for lexicon construction and the square hunt

use std::fmt;
use std::path::PathBuf;

/// Main error type for all word-square operations
#[derive(Debug)]
pub enum SquareError {
    /// A word contains a character outside lowercase ASCII letters
    InvalidWord {
        /// The offending word
        word: String,
    },

    /// A word's length disagrees with the rest of the lexicon
    MixedLengths {
        /// The offending word
        word: String,
        /// Length established by the first observed word
        expected: usize,
        /// Length of the offending word
        actual: usize,
    },

    /// No words of the requested length survived filtering
    EmptyLexicon {
        /// The requested word length
        word_len: usize,
    },

    /// No seed pair could be drawn from the lexicon
    ///
    /// Occurs when every sampled letter run is too thin to supply two
    /// distinct words sharing an initial letter.
    SeedSelection {
        /// Number of re-picks tried before giving up
        attempts: usize,
    },

    /// The attempt cap ran out before the square quota was met
    QuotaUnmet {
        /// Squares found so far
        found: usize,
        /// Squares requested
        requested: usize,
        /// Seeded searches attempted
        attempts: usize,
    },

    /// Failed to read the word-list file
    WordListLoad {
        /// Path to the word list
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Command-line parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWord { word } => {
                write!(f, "Word '{word}' contains characters outside 'a'..='z'")
            }
            Self::MixedLengths {
                word,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Word '{word}' has length {actual}, expected {expected} like the rest of the lexicon"
                )
            }
            Self::EmptyLexicon { word_len } => {
                write!(f, "No words of length {word_len} available")
            }
            Self::SeedSelection { attempts } => {
                write!(f, "No usable seed pair found after {attempts} picks")
            }
            Self::QuotaUnmet {
                found,
                requested,
                attempts,
            } => {
                write!(
                    f,
                    "Found {found} of {requested} squares after {attempts} seeded searches"
                )
            }
            Self::WordListLoad { path, source } => {
                write!(f, "Failed to read word list '{}': {source}", path.display())
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
        }
    }
}

impl std::error::Error for SquareError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::WordListLoad { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for word-square results
pub type Result<T> = std::result::Result<T, SquareError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> SquareError {
    SquareError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_offending_word() {
        let err = SquareError::MixedLengths {
            word: "ox".to_owned(),
            expected: 3,
            actual: 2,
        };
        let message = err.to_string();
        assert!(message.contains("'ox'"));
        assert!(message.contains("length 2"));
        assert!(message.contains("expected 3"));
    }

    #[test]
    fn test_word_list_load_exposes_source() {
        let err = SquareError::WordListLoad {
            path: PathBuf::from("missing.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(std::error::Error::source(&err).is_some());
    }
}
