//! Constrained word-square generation using prefix-range backtracking
//!
//! The system indexes a fixed-length word list for prefix queries, then fills
//! an n-by-n grid of letters so that every row and every column reads as a
//! word from the list. Rows and columns are extended alternately, each new
//! word constrained by the letters the perpendicular words have already fixed.

#![forbid(unsafe_code)]

/// Input/output operations, CLI driver, and error handling
pub mod io;
/// Sorted fixed-length word index with prefix range queries
pub mod lexicon;
/// Backtracking search for completed word squares
pub mod search;

pub use io::error::{Result, SquareError};
pub use lexicon::Lexicon;
pub use search::{Square, SquareSearch, find_squares};
