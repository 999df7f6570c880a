//! Game history store with time-travel navigation.
//!
//! The store keeps the minimal source of truth: the recorded snapshots, a
//! cursor into them and the presentation order of the move list. Whose turn
//! it is, whether the game is decided and the move list itself are derived
//! on every read.
//!
//! Moves branch on overwrite: playing from an earlier cursor discards the
//! snapshots after it before appending the new one.

use super::invariants::{HistoryInvariants, InvariantSet, InvariantViolation};
use super::moves::{MoveEntry, SortOrder};
use super::rules::{self, Outcome};
use super::snapshot::Snapshot;
use super::status::GameStatus;
use super::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Why a move was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Rejection {
    /// The raw index is not a board cell.
    #[display("Cell index {} is outside the board", _0)]
    OutOfBounds(usize),

    /// A line is already complete on the current board.
    #[display("Game is already decided")]
    GameDecided,

    /// The target cell already holds a mark.
    #[display("Square {} is already occupied", _0)]
    Occupied(Position),
}

/// Result of a move request.
///
/// A rejected move leaves the store untouched; callers are free to ignore
/// the outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move was recorded as `step`.
    Applied {
        /// Index of the new snapshot.
        step: usize,
        /// The mark that was placed.
        mark: Player,
    },
    /// The move was ignored.
    Rejected(Rejection),
}

impl MoveOutcome {
    /// True if the move was recorded.
    pub fn is_applied(&self) -> bool {
        matches!(self, MoveOutcome::Applied { .. })
    }
}

/// A stored history that breaks the history invariants.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display(
    "Invalid game history: {}",
    violations.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
)]
pub struct InvalidHistory {
    /// Every invariant the history breaks.
    pub violations: Vec<InvariantViolation>,
}

/// Linear move history with a movable cursor.
///
/// Deserializing checks the [`HistoryInvariants`], so a loaded history
/// always has a starting board and a cursor inside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawHistory")]
pub struct GameHistory {
    pub(crate) snapshots: Vec<Snapshot>,
    pub(crate) cursor: usize,
    order: SortOrder,
}

#[derive(Deserialize)]
struct RawHistory {
    snapshots: Vec<Snapshot>,
    cursor: usize,
    order: SortOrder,
}

impl TryFrom<RawHistory> for GameHistory {
    type Error = InvalidHistory;

    fn try_from(raw: RawHistory) -> Result<Self, Self::Error> {
        let history = Self {
            snapshots: raw.snapshots,
            cursor: raw.cursor,
            order: raw.order,
        };
        HistoryInvariants::check_all(&history)
            .map(|()| history)
            .map_err(|violations| InvalidHistory { violations })
    }
}

impl GameHistory {
    /// Creates a history holding only the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self::with_order(SortOrder::default())
    }

    /// Creates an empty history with the given move list order.
    #[instrument]
    pub fn with_order(order: SortOrder) -> Self {
        Self {
            snapshots: vec![Snapshot::initial()],
            cursor: 0,
            order,
        }
    }

    /// Builds a history by applying raw cell indices in sequence.
    ///
    /// Rejected indices are skipped, as they would be interactively.
    #[instrument(skip(indices))]
    pub fn replay(indices: impl IntoIterator<Item = usize>) -> Self {
        let mut history = Self::new();
        let applied = indices
            .into_iter()
            .filter(|index| history.apply_index(*index).is_applied())
            .count();
        debug!(applied, "History replayed");
        history
    }

    /// Places the next mark at `pos`.
    ///
    /// Ignored when the game is already decided or the cell is occupied.
    #[instrument(skip(self), fields(cursor = self.cursor))]
    pub fn apply_move(&mut self, pos: Position) -> MoveOutcome {
        let current = self.current();

        if rules::evaluate(current.board()).is_decided() {
            debug!("Move ignored, game decided");
            return MoveOutcome::Rejected(Rejection::GameDecided);
        }

        if !current.board().is_empty(pos) {
            debug!("Move ignored, square occupied");
            return MoveOutcome::Rejected(Rejection::Occupied(pos));
        }

        let mark = self.to_move();
        let next = current.next(pos, mark);

        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(next);
        self.cursor = self.snapshots.len() - 1;

        debug!(step = self.cursor, %mark, "Move applied");

        debug_assert_eq!(HistoryInvariants::check_all(&*self), Ok(()));

        MoveOutcome::Applied {
            step: self.cursor,
            mark,
        }
    }

    /// Places the next mark at a raw cell index (0-8).
    #[instrument(skip(self))]
    pub fn apply_index(&mut self, index: usize) -> MoveOutcome {
        match Position::from_index(index) {
            Some(pos) => self.apply_move(pos),
            None => {
                debug!("Move ignored, index out of bounds");
                MoveOutcome::Rejected(Rejection::OutOfBounds(index))
            }
        }
    }

    /// Moves the cursor to `step` without touching the snapshots.
    ///
    /// Returns `false` and does nothing if `step` is not a recorded step.
    #[instrument(skip(self), fields(cursor = self.cursor, len = self.snapshots.len()))]
    pub fn jump_to(&mut self, step: usize) -> bool {
        if step >= self.snapshots.len() {
            debug!("Jump ignored, step out of range");
            return false;
        }
        self.cursor = step;
        debug!("Cursor moved");
        true
    }

    /// Flips the move list order.
    #[instrument(skip(self))]
    pub fn toggle_order(&mut self) {
        self.order = self.order.toggle();
        debug!(order = ?self.order, "Move list order toggled");
    }

    /// The snapshot under the cursor.
    pub fn current(&self) -> &Snapshot {
        &self.snapshots[self.cursor]
    }

    /// The board under the cursor.
    pub fn board(&self) -> &Board {
        self.current().board()
    }

    /// Current step.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of recorded snapshots, including the empty board.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false: the empty board is never removed.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// All recorded snapshots, oldest first.
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// Presentation order of the move list.
    pub fn order(&self) -> SortOrder {
        self.order
    }

    /// The mark placed by the next move, from cursor parity alone.
    pub fn to_move(&self) -> Player {
        Player::for_step(self.cursor)
    }

    /// Evaluates the board under the cursor.
    pub fn outcome(&self) -> Outcome {
        rules::evaluate(self.board())
    }

    /// Derives the game status at the cursor.
    pub fn status(&self) -> GameStatus {
        let outcome = self.outcome();
        match outcome {
            Outcome::Win { mark, line } => GameStatus::Won { winner: mark, line },
            Outcome::NoWinner if rules::is_draw(self.cursor, &outcome) => GameStatus::Draw,
            Outcome::NoWinner => GameStatus::InProgress {
                to_move: self.to_move(),
            },
        }
    }

    /// One entry per snapshot, in the current [`SortOrder`].
    pub fn move_list(&self) -> Vec<MoveEntry> {
        let entries = self
            .snapshots
            .iter()
            .enumerate()
            .map(|(step, snapshot)| MoveEntry {
                step,
                changed: snapshot.changed(),
                is_current: step == self.cursor,
            });

        match self.order {
            SortOrder::Ascending => entries.collect(),
            SortOrder::Descending => entries.rev().collect(),
        }
    }
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new()
    }
}
