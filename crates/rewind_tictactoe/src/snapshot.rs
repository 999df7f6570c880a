//! Immutable board snapshots recorded in the history.

use super::{Board, Player, Position, Square};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A board together with the cell changed to produce it.
///
/// The initial snapshot has no changed cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
pub struct Snapshot {
    board: Board,
    #[getter(skip)]
    changed: Option<Position>,
}

impl Snapshot {
    /// The all-empty starting board.
    pub fn initial() -> Self {
        Self {
            board: Board::new(),
            changed: None,
        }
    }

    /// The cell changed to produce this snapshot.
    pub fn changed(&self) -> Option<Position> {
        self.changed
    }

    /// Builds the snapshot that follows this one when `mark` is placed at `pos`.
    ///
    /// Callers check that `pos` is empty.
    pub(crate) fn next(&self, pos: Position, mark: Player) -> Self {
        let mut board = self.board.clone();
        board.set(pos, Square::Occupied(mark));
        Self {
            board,
            changed: Some(pos),
        }
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::initial()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_leaves_original_untouched() {
        let start = Snapshot::initial();
        let next = start.next(Position::Center, Player::X);

        assert_eq!(start.board(), &Board::new());
        assert_eq!(start.changed(), None);
        assert_eq!(next.board().get(Position::Center), Square::Occupied(Player::X));
        assert_eq!(next.changed(), Some(Position::Center));
    }
}
