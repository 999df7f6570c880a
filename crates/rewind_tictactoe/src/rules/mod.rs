//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board). Rules are separated from
//! history storage so the store can re-run them on every read.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::{LINES, Outcome, evaluate};
