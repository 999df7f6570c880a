//! Rewind - Unified CLI

use anyhow::{Context, Result};
use clap::Parser;
use rewind::cli::{Cli, Command};
use rewind::{RewindConfig, logging, replay, tui};
use std::path::PathBuf;
use tracing::info;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { config, descending } => run_play(config, descending).await,
        Command::Replay {
            cells,
            jump,
            descending,
            json,
            config,
        } => run_replay(cells, jump, descending, json, config),
    }
}

fn load_config(path: Option<PathBuf>, descending: bool) -> Result<RewindConfig> {
    let cwd = std::env::current_dir().context("Failed to read working directory")?;
    let config = RewindConfig::load(path.as_deref(), &cwd)?;
    Ok(config.with_descending(descending))
}

/// Run the interactive game
async fn run_play(config: Option<PathBuf>, descending: bool) -> Result<()> {
    let config = load_config(config, descending)?;
    logging::init_file_logging(config.logging())?;

    tui::run_tui(*config.history().order()).await
}

/// Replay cells and print the result
fn run_replay(
    cells: Vec<usize>,
    jump: Option<usize>,
    descending: bool,
    json: bool,
    config: Option<PathBuf>,
) -> Result<()> {
    let config = load_config(config, descending)?;
    logging::init_stderr_logging(config.logging());

    info!(moves = cells.len(), "Replaying game");
    let report = replay::replay(&cells, jump, *config.history().order());

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("Failed to encode report")?
        );
    } else {
        print!("{}", report.to_text());
    }

    Ok(())
}
