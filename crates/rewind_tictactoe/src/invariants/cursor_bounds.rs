//! Cursor invariant: the cursor always points at a recorded snapshot.

use super::super::GameHistory;
use super::Invariant;

/// Invariant: `0 <= cursor < len`.
pub struct CursorInBoundsInvariant;

impl Invariant<GameHistory> for CursorInBoundsInvariant {
    fn holds(history: &GameHistory) -> bool {
        history.cursor < history.snapshots.len()
    }

    fn description() -> &'static str {
        "Cursor points at a recorded snapshot"
    }
}
