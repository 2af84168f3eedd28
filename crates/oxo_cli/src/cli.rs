//! Command-line interface for the board classifier.

use clap::Parser;

/// oxo - classify noughts-and-crosses board encodings
#[derive(Parser, Debug)]
#[command(name = "oxo")]
#[command(about = "Classify noughts-and-crosses board encodings", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Board encodings to classify: nine characters of X, O and _ per board
    pub boards: Vec<String>,

    /// Render each board as a 3x3 grid before its classification
    #[arg(short, long)]
    pub debug: bool,

    /// Emit one JSON object per board instead of the bare state name
    #[arg(long)]
    pub json: bool,
}
