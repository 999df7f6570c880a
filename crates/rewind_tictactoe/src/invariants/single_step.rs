//! Single-step invariant: each snapshot fills exactly one empty cell.

use super::super::{GameHistory, Position};
use super::Invariant;

/// Invariant: snapshot 0 is the empty board, and snapshot `k` differs from
/// snapshot `k - 1` only in its changed cell, which was empty before.
pub struct SingleStepInvariant;

impl Invariant<GameHistory> for SingleStepInvariant {
    fn holds(history: &GameHistory) -> bool {
        let snapshots = history.snapshots();

        let Some(first) = snapshots.first() else {
            return false;
        };
        if first.changed().is_some() || first.board().occupied() != 0 {
            return false;
        }

        snapshots.windows(2).all(|pair| {
            let (before, after) = (&pair[0], &pair[1]);
            let Some(changed) = after.changed() else {
                return false;
            };

            before.board().is_empty(changed)
                && !after.board().is_empty(changed)
                && Position::ALL
                    .iter()
                    .filter(|pos| **pos != changed)
                    .all(|pos| before.board().get(*pos) == after.board().get(*pos))
        })
    }

    fn description() -> &'static str {
        "Each snapshot fills exactly one previously empty cell"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Snapshot};

    #[test]
    fn test_played_game_holds() {
        let history = GameHistory::replay([0, 4, 1, 3, 2]);
        assert!(SingleStepInvariant::holds(&history));
    }

    #[test]
    fn test_erasing_a_mark_violates() {
        let mut history = GameHistory::replay([4]);
        // Built from the empty board, so the X at the center disappears.
        let erased = Snapshot::initial().next(Position::TopLeft, Player::O);
        history.snapshots.push(erased);
        assert!(!SingleStepInvariant::holds(&history));
    }

    #[test]
    fn test_non_empty_start_violates() {
        let mut history = GameHistory::new();
        history.snapshots[0] = Snapshot::initial().next(Position::Center, Player::X);
        assert!(!SingleStepInvariant::holds(&history));
    }
}
