//! Draw detection logic for tic-tac-toe.

use super::super::BOARD_SIZE;
use super::win::Outcome;

/// A game at `step` is drawn when every move has been played and no line
/// is complete.
pub fn is_draw(step: usize, outcome: &Outcome) -> bool {
    step == BOARD_SIZE && !outcome.is_decided()
}

#[cfg(test)]
mod tests {
    use super::super::super::{Board, Player, Position, Square};
    use super::super::win::evaluate;
    use super::*;

    #[test]
    fn test_draw_detection() {
        let mut board = Board::new();
        // X O X / O X X / O X O
        let marks = [
            Player::X,
            Player::O,
            Player::X,
            Player::O,
            Player::X,
            Player::X,
            Player::O,
            Player::X,
            Player::O,
        ];
        for (pos, mark) in Position::ALL.into_iter().zip(marks) {
            board.set(pos, Square::Occupied(mark));
        }

        assert_eq!(board.occupied(), BOARD_SIZE);
        assert!(is_draw(BOARD_SIZE, &evaluate(&board)));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::TopCenter, Square::Occupied(Player::X));
        board.set(Position::TopRight, Square::Occupied(Player::X));

        assert!(!is_draw(BOARD_SIZE, &evaluate(&board)));
    }

    #[test]
    fn test_not_draw_before_last_step() {
        assert!(!is_draw(BOARD_SIZE - 1, &Outcome::NoWinner));
    }
}
