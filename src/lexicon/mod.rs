//! Word list indexing
//!
//! The index is built once from an in-memory word collection and stays
//! immutable for the lifetime of every search that borrows it.

/// Sorted word storage and prefix range queries
pub mod index;

pub use index::Lexicon;
