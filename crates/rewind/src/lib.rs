//! Rewind - terminal tic-tac-toe with move history and time travel.
//!
//! # Architecture
//!
//! - **Game**: [`rewind_tictactoe`] holds the rules and the history store
//! - **TUI**: [`tui`] renders the store and forwards keys into it
//! - **Replay**: [`replay`] prints the same views for a scripted game
//! - **Config**: [`RewindConfig`] loaded from TOML

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
mod config;
pub mod logging;
pub mod replay;
pub mod tui;

pub use config::{
    ConfigError, DEFAULT_CONFIG_FILE, HistorySettings, LoggingSettings, RewindConfig,
};
pub use replay::ReplayReport;
