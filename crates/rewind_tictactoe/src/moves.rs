//! Move list view types: entries and their ordering.

use super::Position;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Direction in which the move list is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Game start first.
    #[default]
    Ascending,
    /// Latest move first.
    Descending,
}

impl SortOrder {
    /// Flips between `Ascending` and `Descending`.
    #[instrument]
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Label of the control that flips the order.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Ascending => "Sort descending",
            Self::Descending => "Sort ascending",
        }
    }
}

/// One entry of the move list, pointing at a history step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveEntry {
    /// The history step this entry jumps to.
    pub step: usize,
    /// The cell changed at that step (`None` for the game start).
    pub changed: Option<Position>,
    /// Whether the cursor currently sits on this step.
    pub is_current: bool,
}

impl MoveEntry {
    /// Human-readable label, e.g. `Go to move #3 (2, 1)`.
    ///
    /// Coordinates are 1-based (row, column).
    pub fn label(&self) -> String {
        match self.changed {
            Some(pos) if self.step > 0 => format!(
                "Go to move #{} ({}, {})",
                self.step,
                pos.row() + 1,
                pos.col() + 1
            ),
            _ => "Go to game start".to_string(),
        }
    }
}

impl std::fmt::Display for MoveEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_is_identity() {
        assert_eq!(SortOrder::Ascending.toggle().toggle(), SortOrder::Ascending);
        assert_eq!(SortOrder::Ascending.toggle(), SortOrder::Descending);
    }

    #[test]
    fn test_toggle_label_names_the_other_order() {
        assert_eq!(SortOrder::Ascending.toggle_label(), "Sort descending");
        assert_eq!(SortOrder::Descending.toggle_label(), "Sort ascending");
    }

    #[test]
    fn test_labels() {
        let start = MoveEntry {
            step: 0,
            changed: None,
            is_current: true,
        };
        let third = MoveEntry {
            step: 3,
            changed: Some(Position::MiddleLeft),
            is_current: false,
        };
        assert_eq!(start.label(), "Go to game start");
        assert_eq!(third.to_string(), "Go to move #3 (2, 1)");
    }
}
