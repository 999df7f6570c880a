//! Headless replay of a move sequence.
//!
//! Cells are numbered 1-9 as on the keypad prompt of the terminal UI.
//! Moves the game would ignore are skipped the same way.

use derive_getters::Getters;
use rewind_tictactoe::{GameHistory, MoveOutcome, SortOrder};
use serde::Serialize;
use tracing::{debug, instrument};

/// Summary of a replayed game at its final cursor.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct ReplayReport {
    /// Cell contents in row-major order (`"X"`, `"O"` or `null`).
    board: Vec<Option<String>>,
    /// Text grid with empty cells numbered 1-9.
    #[serde(skip)]
    grid: String,
    /// Status line, e.g. `Next player: O`.
    status: String,
    /// Winning mark, if any.
    winner: Option<String>,
    /// Winning cells numbered 1-9.
    line: Vec<usize>,
    /// Cursor after replaying.
    cursor: usize,
    /// Label of the sort control.
    sort: String,
    /// Move list labels in display order, the current step prefixed by `>`.
    moves: Vec<String>,
    /// Cells that were ignored, numbered as given.
    skipped: Vec<usize>,
}

/// Applies `cells` (1-9), then jumps to `jump` if given.
#[instrument]
pub fn replay(cells: &[usize], jump: Option<usize>, order: SortOrder) -> ReplayReport {
    let mut history = GameHistory::with_order(order);
    let mut skipped = Vec::new();

    for &cell in cells {
        match history.apply_index(cell.wrapping_sub(1)) {
            MoveOutcome::Applied { .. } => {}
            MoveOutcome::Rejected(reason) => {
                debug!(cell, %reason, "Skipping move");
                skipped.push(cell);
            }
        }
    }

    if let Some(step) = jump
        && !history.jump_to(step)
    {
        debug!(step, "Ignoring jump outside history");
    }

    report(&history, skipped)
}

fn report(history: &GameHistory, skipped: Vec<usize>) -> ReplayReport {
    let outcome = history.outcome();

    ReplayReport {
        board: history
            .board()
            .squares()
            .iter()
            .map(|sq| sq.player().map(|p| p.to_string()))
            .collect(),
        grid: history.board().display(),
        status: history.status().to_string(),
        winner: outcome.winner().map(|p| p.to_string()),
        line: outcome
            .line()
            .into_iter()
            .flatten()
            .map(|pos| pos.to_index() + 1)
            .collect(),
        cursor: history.cursor(),
        sort: history.order().toggle_label().to_string(),
        moves: history
            .move_list()
            .iter()
            .map(|entry| {
                let marker = if entry.is_current { '>' } else { ' ' };
                format!("{} {}", marker, entry.label())
            })
            .collect(),
        skipped,
    }
}

impl ReplayReport {
    /// Renders the report as plain text.
    pub fn to_text(&self) -> String {
        let mut out = self.grid.clone();

        out.push_str("\n\n");
        out.push_str(&self.status);
        out.push('\n');
        out.push_str(&format!("[{}]\n", self.sort));
        for entry in &self.moves {
            out.push_str(entry);
            out.push('\n');
        }
        if !self.skipped.is_empty() {
            let cells: Vec<String> = self.skipped.iter().map(|c| c.to_string()).collect();
            out.push_str(&format!("Ignored cells: {}\n", cells.join(", ")));
        }
        out
    }
}
