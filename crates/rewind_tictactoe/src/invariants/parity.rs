//! Parity invariant: odd steps place X, even steps place O.

use super::super::{GameHistory, Player, Square};
use super::Invariant;

/// Invariant: the cell changed at step `k` holds the mark of the player
/// to move at step `k - 1`.
pub struct ParityInvariant;

impl Invariant<GameHistory> for ParityInvariant {
    fn holds(history: &GameHistory) -> bool {
        history
            .snapshots()
            .iter()
            .enumerate()
            .skip(1)
            .all(|(step, snapshot)| match snapshot.changed() {
                Some(pos) => {
                    snapshot.board().get(pos) == Square::Occupied(Player::for_step(step - 1))
                }
                None => false,
            })
    }

    fn description() -> &'static str {
        "Marks alternate by step parity (X on odd steps, O on even steps)"
    }
}
