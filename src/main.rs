//! CLI entry point for the word-square filler

use clap::Parser;
use squarefill::io::cli::{Cli, SquareProcessor};

fn main() -> squarefill::Result<()> {
    let cli = Cli::parse();
    let mut processor = SquareProcessor::new(cli);
    processor.process()
}
