//! Command-line interface for rewind.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Rewind - tic-tac-toe with move history and time travel
#[derive(Parser, Debug)]
#[command(name = "rewind")]
#[command(about = "Tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Path to a TOML config file (defaults to ./rewind.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Show the latest move first
        #[arg(long)]
        descending: bool,
    },

    /// Apply a sequence of cells (1-9) and print the resulting game
    Replay {
        /// Cells to play, numbered 1-9 row by row
        cells: Vec<usize>,

        /// Step to move the cursor to after replaying
        #[arg(long)]
        jump: Option<usize>,

        /// Show the latest move first
        #[arg(long)]
        descending: bool,

        /// Print a JSON report instead of text
        #[arg(long)]
        json: bool,

        /// Path to a TOML config file (defaults to ./rewind.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}
