//! Command-line arguments.

use clap::Parser;

/// Vocabulary flashcards for German learners.
#[derive(Parser, Debug, Default)]
#[command(name = "wortschatz", version, about)]
pub struct Cli {
    /// Print the number of unique terms across all sources and exit
    #[arg(long)]
    pub count: bool,
}
