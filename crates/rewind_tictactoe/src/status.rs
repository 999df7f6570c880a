//! Derived game status.

use super::{Player, Position};
use serde::Serialize;

/// Status of the game at the current cursor.
///
/// Always recomputed from the history; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::Display)]
pub enum GameStatus {
    /// Moves are still accepted.
    #[display("Next player: {to_move}")]
    InProgress {
        /// The mark placed by the next move.
        to_move: Player,
    },
    /// A line is complete.
    #[display("Winner: {winner}")]
    Won {
        /// The winning mark.
        winner: Player,
        /// The winning cells.
        line: [Position; 3],
    },
    /// Every cell is filled without a completed line.
    #[display("Draw game: Nobody wins")]
    Draw,
}

impl GameStatus {
    /// The winning cells, empty unless the game is won.
    pub fn highlighted(&self) -> &[Position] {
        match self {
            GameStatus::Won { line, .. } => line.as_slice(),
            _ => &[],
        }
    }
}
