//! Command-line interface for hunting and rendering word squares

use crate::io::configuration::{
    DEFAULT_GRID_COLUMNS, DEFAULT_GRID_ROWS, DEFAULT_SEED, DEFAULT_WORD_LENGTH,
};
use crate::io::error::{Result, SquareError, invalid_parameter};
use crate::io::progress::ProgressManager;
use crate::io::render::render_grid;
use crate::io::wordlist::load_words;
use crate::lexicon::Lexicon;
use crate::search::assembler::SquareAssembler;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "squarefill")]
#[command(
    author,
    version,
    about = "Fill word squares from a fixed-length word list"
)]
/// Command-line arguments for the word-square filler
pub struct Cli {
    /// Newline-delimited word list, one lowercase word per line
    #[arg(value_name = "WORDLIST")]
    pub wordlist: PathBuf,

    /// Word length, and so the side of each square
    #[arg(short = 'n', long, default_value_t = DEFAULT_WORD_LENGTH)]
    pub length: usize,

    /// Squares across the rendered grid
    #[arg(short, long, default_value_t = DEFAULT_GRID_COLUMNS)]
    pub columns: usize,

    /// Squares down the rendered grid
    #[arg(short, long, default_value_t = DEFAULT_GRID_ROWS)]
    pub rows: usize,

    /// Random seed for reproducible seed-word selection
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Require row words to equal column words
    #[arg(short, long)]
    pub babbage: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Orchestrates one hunt: load, index, search to quota, render
pub struct SquareProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl SquareProcessor {
    /// Create a processor from parsed CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Run the hunt and print the rendered grid
    ///
    /// # Errors
    ///
    /// Returns an error when parameters fail validation, the word list
    /// cannot be read or indexed, no words of the requested length exist,
    /// or the attempt cap runs out before the quota is met.
    // Rendered squares go to stdout; counts are user feedback on stderr
    #[allow(clippy::print_stdout, clippy::print_stderr)]
    pub fn process(&mut self) -> Result<()> {
        self.validate()?;

        let loaded = load_words(&self.cli.wordlist, self.cli.length)?;
        if !self.cli.quiet {
            eprintln!("Read in a word list of {} words.", loaded.total);
            eprintln!(
                "There remain {} words of length {}.",
                loaded.words.len(),
                self.cli.length
            );
        }

        let lexicon = Lexicon::build(loaded.words)?;
        if lexicon.is_empty() {
            return Err(SquareError::EmptyLexicon {
                word_len: self.cli.length,
            });
        }

        let quota = self.cli.rows * self.cli.columns;
        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(quota);
        }

        let rng = StdRng::seed_from_u64(self.cli.seed);
        let mut assembler = SquareAssembler::new(&lexicon, rng, self.cli.babbage);
        let progress = &mut self.progress_manager;
        let squares = assembler.collect_squares(quota, |attempt| {
            if let Some(pm) = progress.as_mut() {
                pm.note_attempt(&attempt.seed_row, &attempt.seed_col, attempt.square.is_some());
            }
        })?;

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        print!("{}", render_grid(&squares, self.cli.columns));
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.cli.length == 0 {
            return Err(invalid_parameter(
                "length",
                &self.cli.length,
                &"word length must be at least 1",
            ));
        }
        if self.cli.rows == 0 || self.cli.columns == 0 {
            return Err(invalid_parameter(
                "rows/columns",
                &format!("{}x{}", self.cli.rows, self.cli.columns),
                &"the display grid needs at least one square",
            ));
        }
        Ok(())
    }
}
