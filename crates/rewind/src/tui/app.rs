//! Application state and key handling.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use rewind_tictactoe::{GameHistory, MoveOutcome, Position, SortOrder};
use tracing::{debug, info, instrument};

use super::input::{digit_cell, move_cursor};

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys move the move list selection.
    Moves,
}

impl Focus {
    /// Switches to the other pane.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::Moves,
            Self::Moves => Self::Board,
        }
    }
}

/// What the event loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Keep running.
    Continue,
    /// Leave the event loop.
    Quit,
}

/// Main application state.
///
/// Owns the only [`GameHistory`] of the session. The board cursor and the
/// list selection are UI state only.
#[derive(Debug)]
pub struct App {
    history: GameHistory,
    focus: Focus,
    board_cursor: Position,
    selected_step: usize,
}

impl App {
    /// Creates a new application with an empty game.
    #[instrument]
    pub fn new(order: SortOrder) -> Self {
        Self {
            history: GameHistory::with_order(order),
            focus: Focus::default(),
            board_cursor: Position::Center,
            selected_step: 0,
        }
    }

    /// The game history.
    pub fn history(&self) -> &GameHistory {
        &self.history
    }

    /// Pane with keyboard focus.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Highlighted board cell.
    pub fn board_cursor(&self) -> Position {
        self.board_cursor
    }

    /// History step highlighted in the move list.
    pub fn selected_step(&self) -> usize {
        self.selected_step
    }

    /// Handles a key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        if key.kind == KeyEventKind::Release {
            return AppAction::Continue;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                info!("User quit");
                return AppAction::Quit;
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = self.focus.toggle();
                debug!(focus = ?self.focus, "Focus switched");
            }
            KeyCode::Char('s') | KeyCode::Char('S') => self.history.toggle_order(),
            code => {
                if let Some(pos) = digit_cell(code) {
                    self.board_cursor = pos;
                    self.play(pos);
                } else {
                    match self.focus {
                        Focus::Board => self.handle_board_key(code),
                        Focus::Moves => self.handle_moves_key(code),
                    }
                }
            }
        }

        AppAction::Continue
    }

    fn handle_board_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.board_cursor),
            arrow => self.board_cursor = move_cursor(self.board_cursor, arrow),
        }
    }

    fn handle_moves_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up => self.shift_selection(-1),
            KeyCode::Down => self.shift_selection(1),
            KeyCode::Home => {
                if let Some(first) = self.history.move_list().first() {
                    self.selected_step = first.step;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                if self.history.jump_to(self.selected_step) {
                    debug!(step = self.selected_step, "Jumped");
                }
            }
            _ => {}
        }
    }

    /// Moves the selection one row up or down in displayed order.
    fn shift_selection(&mut self, delta: isize) {
        let list = self.history.move_list();
        let Some(row) = list.iter().position(|e| e.step == self.selected_step) else {
            self.selected_step = self.history.cursor();
            return;
        };
        let target = row
            .checked_add_signed(delta)
            .filter(|r| *r < list.len())
            .unwrap_or(row);
        self.selected_step = list[target].step;
    }

    fn play(&mut self, pos: Position) {
        match self.history.apply_move(pos) {
            MoveOutcome::Applied { step, mark } => {
                debug!(step, %mark, %pos, "Move played");
                self.selected_step = step;
            }
            MoveOutcome::Rejected(reason) => {
                debug!(%reason, %pos, "Move ignored");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(app: &mut App, code: KeyCode) -> AppAction {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_enter_plays_at_board_cursor() {
        let mut app = App::new(SortOrder::Ascending);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.history().cursor(), 1);
        assert_eq!(app.history().current().changed(), Some(Position::Center));
        assert_eq!(app.selected_step(), 1);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new(SortOrder::Ascending);
        assert_eq!(press(&mut app, KeyCode::Char('q')), AppAction::Quit);
        assert_eq!(press(&mut app, KeyCode::Esc), AppAction::Quit);
        assert_eq!(press(&mut app, KeyCode::Left), AppAction::Continue);
    }

    #[test]
    fn test_selection_clamps_at_list_ends() {
        let mut app = App::new(SortOrder::Ascending);
        press(&mut app, KeyCode::Char('5'));
        press(&mut app, KeyCode::Tab);

        press(&mut app, KeyCode::Down);
        assert_eq!(app.selected_step(), 1);
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Up);
        assert_eq!(app.selected_step(), 0);
    }
}
