//! Pure tic-tac-toe game logic with a time-travel move history.
//!
//! # Architecture
//!
//! - **Rules**: [`evaluate`] checks the eight fixed lines of a [`Board`]
//! - **History**: [`GameHistory`] records one [`Snapshot`] per move and a
//!   cursor that can jump back and forth between them
//! - **Views**: [`GameStatus`] and [`MoveEntry`] are derived from the history
//!   on every read
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{GameHistory, GameStatus, Player, Position};
//!
//! let mut history = GameHistory::new();
//! for pos in [Position::TopLeft, Position::Center, Position::TopCenter] {
//!     history.apply_move(pos);
//! }
//! assert_eq!(history.status(), GameStatus::InProgress { to_move: Player::O });
//!
//! history.jump_to(0);
//! assert_eq!(history.to_move(), Player::X);
//! assert_eq!(history.len(), 4);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod history;
pub mod invariants;
mod moves;
mod position;
pub mod rules;
mod snapshot;
mod status;
mod types;

pub use history::{GameHistory, InvalidHistory, MoveOutcome, Rejection};
pub use moves::{MoveEntry, SortOrder};
pub use position::Position;
pub use rules::{LINES, Outcome, evaluate};
pub use snapshot::Snapshot;
pub use status::GameStatus;
pub use types::{BOARD_SIZE, Board, Player, Square};
