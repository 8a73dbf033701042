//! Input/output operations and error handling
//!
//! Everything outside the core search lives here: word-list loading, CLI
//! orchestration, progress reporting, and text rendering of found squares.

/// Command-line interface and hunt orchestration
pub mod cli;
/// Defaults and defensive limits
pub mod configuration;
/// Error types shared across the crate
pub mod error;
/// Hunt progress reporting
pub mod progress;
/// Text-grid rendering of found squares
pub mod render;
/// Word-list file loading
pub mod wordlist;
