//! Defaults and defensive limits for the square hunt

/// Default word length, and so the side of each square
pub const DEFAULT_WORD_LENGTH: usize = 6;

/// Fixed seed for reproducible hunts
pub const DEFAULT_SEED: u64 = 12_345;

/// Default number of squares across the rendered grid
pub const DEFAULT_GRID_COLUMNS: usize = 1;

/// Default number of squares down the rendered grid
pub const DEFAULT_GRID_ROWS: usize = 1;

// A letter run with a single word cannot supply a distinct pair
/// Cap on seed re-picks before seed selection gives up
pub const MAX_SEED_ATTEMPTS: usize = 64;

// Bounds hunts over lexicons that admit few or no squares
/// Cap on seeded searches before the hunt is abandoned
pub const MAX_SEARCH_ATTEMPTS: usize = 10_000;
