//! Terminal UI for rewind.

mod app;
mod input;
mod ui;

pub use app::{App, AppAction, Focus};
pub use input::{digit_cell, move_cursor};
pub use ui::draw;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use rewind_tictactoe::SortOrder;
use std::io;
use tokio::time::{Duration, sleep};
use tracing::{error, info, instrument, warn};

/// Runs the interactive game until the user quits.
///
/// Sets up the terminal, drives the event loop, and restores the terminal
/// on exit even when the loop fails.
#[instrument]
pub async fn run_tui(order: SortOrder) -> Result<()> {
    info!("Starting rewind TUI");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut terminal = restore_on_error(enter_terminal, leave_terminal)?;

    let res = run_app(&mut terminal, App::new(order)).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }

    info!("TUI closed");
    res
}

/// Runs `setup`, calling `restore` before handing back a failure.
fn restore_on_error<T>(setup: impl FnOnce() -> Result<T>, restore: impl FnOnce()) -> Result<T> {
    setup().inspect_err(|_| restore())
}

fn enter_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    Terminal::new(CrosstermBackend::new(stdout)).context("Failed to create terminal")
}

/// Best-effort teardown after a failed setup.
fn leave_terminal() {
    if let Err(err) = execute!(io::stdout(), LeaveAlternateScreen) {
        warn!(error = %err, "Failed to leave alternate screen");
    }
    if let Err(err) = disable_raw_mode() {
        warn!(error = %err, "Failed to disable raw mode");
    }
}

/// Event loop: draw, poll for a key, hand it to the app.
#[instrument(skip_all)]
async fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
            && app.handle_key(key) == AppAction::Quit
        {
            return Ok(());
        }

        sleep(Duration::from_millis(10)).await;
    }
}
