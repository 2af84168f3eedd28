//! oxo - classify noughts-and-crosses boards from the command line.
//!
//! Each argument is classified independently; one result is printed per
//! line to stdout, in argument order. Diagnostics go to stderr so the
//! result stream stays clean.

#![warn(missing_docs)]

mod cli;
mod output;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use oxo_core::classify;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env before the filter reads the environment
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    debug!(boards = cli.boards.len(), "classifying boards");

    for board in &cli.boards {
        let board = board.as_str();
        let state = classify(board);
        debug!(board, %state, "board classified");

        if cli.debug {
            println!("{}", output::grid(board));
        }
        if cli.json {
            println!("{}", serde_json::to_string(&output::Record { board, state })?);
        } else {
            println!("{state}");
        }
    }

    Ok(())
}
