//! Hunt progress reporting

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static HUNT_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Squares: [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress display for one square hunt
///
/// Tracks quota completion on the bar and reports the seed pair of the most
/// recent attempt in the message area.
pub struct ProgressManager {
    bar: Option<ProgressBar>,
    attempts: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager with no active bar
    pub const fn new() -> Self {
        Self {
            bar: None,
            attempts: 0,
        }
    }

    /// Start tracking a hunt for `quota` squares
    pub fn initialize(&mut self, quota: usize) {
        let bar = ProgressBar::new(quota as u64);
        bar.set_style(HUNT_STYLE.clone());
        self.bar = Some(bar);
        self.attempts = 0;
    }

    /// Report one seeded attempt and whether it produced a square
    pub fn note_attempt(&mut self, seed_row: &str, seed_col: &str, found: bool) {
        self.attempts += 1;
        if let Some(ref bar) = self.bar {
            if found {
                bar.inc(1);
            }
            let attempts = self.attempts;
            bar.set_message(format!("{seed_row}/{seed_col} ({attempts} tried)"));
        }
    }

    /// Clear the hunt display
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            let attempts = self.attempts;
            bar.finish_with_message(format!("done in {attempts} attempts"));
        }
    }
}
