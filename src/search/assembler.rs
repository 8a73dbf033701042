use crate::io::configuration::{MAX_SEARCH_ATTEMPTS, MAX_SEED_ATTEMPTS};
use crate::io::error::{Result, SquareError};
use crate::lexicon::Lexicon;
use crate::search::backtracker::find_squares;
use crate::search::square::Square;
use rand::Rng;

/// Outcome of one seeded search attempt
#[derive(Clone, Debug)]
pub struct Attempt {
    /// Seed word anchoring row zero
    pub seed_row: String,
    /// Seed word anchoring column zero
    pub seed_col: String,
    /// Completed square, when the seeds admitted one
    pub square: Option<Square>,
}

/// Repeatedly seeds the backtracker with random word pairs until a quota of
/// completed squares has been met
///
/// The random generator is passed in explicitly so a fixed seed reproduces
/// the same hunt; all search-internal ordering is deterministic anyway.
pub struct SquareAssembler<'a, R: Rng> {
    lexicon: &'a Lexicon,
    rng: R,
    babbage: bool,
}

impl<'a, R: Rng> SquareAssembler<'a, R> {
    /// Create an assembler over an already-built lexicon
    pub const fn new(lexicon: &'a Lexicon, rng: R, babbage: bool) -> Self {
        Self {
            lexicon,
            rng,
            babbage,
        }
    }

    /// Pick the seed words for one search attempt
    ///
    /// The first word is uniform over the lexicon; the second is a distinct
    /// word drawn from the run of words sharing the first word's initial
    /// letter, so the shared corner cell is consistent. The Babbage variant
    /// needs only one word, used for both roles.
    ///
    /// # Errors
    ///
    /// Returns [`SquareError::SeedSelection`] when no letter run wide enough
    /// to pair turns up within the re-pick budget, and
    /// [`SquareError::EmptyLexicon`] when there are no words at all.
    pub fn pick_seeds(&mut self) -> Result<(String, String)> {
        if self.lexicon.is_empty() {
            return Err(SquareError::EmptyLexicon {
                word_len: self.lexicon.word_len(),
            });
        }

        for _ in 0..MAX_SEED_ATTEMPTS {
            let first_id = self.rng.random_range(0..self.lexicon.len());
            let Some(first) = self.lexicon.word(first_id) else {
                continue;
            };
            if self.babbage {
                return Ok((first.to_owned(), first.to_owned()));
            }

            // Words sharing the initial letter sit in one contiguous run
            let initial: String = first.chars().take(1).collect();
            let run = self.lexicon.prefix_range(&initial);
            if run.len() < 2 {
                continue;
            }

            // Draw from the run with the first word's slot skipped, so the
            // second word is distinct without rejection sampling
            let offset = self.rng.random_range(0..run.len() - 1);
            let mut second_id = run.start + offset;
            if second_id >= first_id {
                second_id += 1;
            }
            let Some(second) = self.lexicon.word(second_id) else {
                continue;
            };
            return Ok((first.to_owned(), second.to_owned()));
        }

        Err(SquareError::SeedSelection {
            attempts: MAX_SEED_ATTEMPTS,
        })
    }

    /// Run one seeded search, consuming at most one completed square
    ///
    /// # Errors
    ///
    /// Propagates seed selection failures; an attempt whose seeds admit no
    /// square is a normal outcome recorded with `square: None`.
    pub fn attempt(&mut self) -> Result<Attempt> {
        let (seed_row, seed_col) = self.pick_seeds()?;
        let square = find_squares(self.lexicon, &seed_row, &seed_col, self.babbage).next();
        Ok(Attempt {
            seed_row,
            seed_col,
            square,
        })
    }

    /// Retry seeded searches until `quota` squares have been found
    ///
    /// Invokes `on_attempt` after every attempt, successful or not, for
    /// progress reporting. The attempt cap is a defensive bound for lexicons
    /// that admit few or no squares.
    ///
    /// # Errors
    ///
    /// Returns [`SquareError::QuotaUnmet`] when the attempt cap is exhausted
    /// before the quota is met, and propagates seed selection failures.
    pub fn collect_squares(
        &mut self,
        quota: usize,
        mut on_attempt: impl FnMut(&Attempt),
    ) -> Result<Vec<Square>> {
        let mut squares = Vec::with_capacity(quota);
        let mut attempts = 0;

        while squares.len() < quota {
            if attempts >= MAX_SEARCH_ATTEMPTS {
                return Err(SquareError::QuotaUnmet {
                    found: squares.len(),
                    requested: quota,
                    attempts,
                });
            }
            attempts += 1;

            let attempt = self.attempt()?;
            on_attempt(&attempt);
            if let Some(square) = attempt.square {
                squares.push(square);
            }
        }

        Ok(squares)
    }
}
