//! Backtracking search over the lexicon for completed word squares
//!
//! This module contains the square-filling machinery:
//! - Depth-first filling with explicit undo on backtrack
//! - Seed selection and retry orchestration
//! - The completed square representation

/// Seed-pair selection and quota-driven retry loop
pub mod assembler;
/// Depth-first square filling with explicit state restoration
pub mod backtracker;
/// Completed square representation
pub mod square;

pub use assembler::{Attempt, SquareAssembler};
pub use backtracker::{SquareSearch, find_squares};
pub use square::Square;
