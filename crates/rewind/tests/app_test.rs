//! Tests for key handling and rendering of the terminal UI.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend};
use rewind::tui::{App, AppAction, Focus, draw};
use rewind_tictactoe::{Board, GameStatus, Player, Position, SortOrder, Square};

fn press(app: &mut App, code: KeyCode) -> AppAction {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn play_cells(app: &mut App, cells: &str) {
    for c in cells.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn render(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
    terminal.draw(|f| draw(f, app)).unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[test]
fn test_digits_play_cells() {
    let mut app = App::new(SortOrder::Ascending);
    play_cells(&mut app, "15");

    let board = app.history().board();
    assert_eq!(board.get(Position::TopLeft), Square::Occupied(Player::X));
    assert_eq!(board.get(Position::Center), Square::Occupied(Player::O));
    assert_eq!(app.board_cursor(), Position::Center);
}

#[test]
fn test_arrows_then_enter_plays_selected_cell() {
    let mut app = App::new(SortOrder::Ascending);
    press(&mut app, KeyCode::Up);
    press(&mut app, KeyCode::Left);
    press(&mut app, KeyCode::Enter);

    assert_eq!(
        app.history().board().get(Position::TopLeft),
        Square::Occupied(Player::X)
    );
}

#[test]
fn test_key_release_is_ignored() {
    let mut app = App::new(SortOrder::Ascending);
    let mut release = KeyEvent::new(KeyCode::Char('5'), KeyModifiers::NONE);
    release.kind = KeyEventKind::Release;

    assert_eq!(app.handle_key(release), AppAction::Continue);
    assert_eq!(app.history().len(), 1);
}

#[test]
fn test_jump_back_through_move_list() {
    let mut app = App::new(SortOrder::Ascending);
    play_cells(&mut app, "159");

    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focus(), Focus::Moves);
    press(&mut app, KeyCode::Home);
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.history().cursor(), 0);
    assert_eq!(app.history().board(), &Board::new());
    assert_eq!(app.history().len(), 4);
    assert_eq!(
        app.history().status(),
        GameStatus::InProgress { to_move: Player::X }
    );
}

#[test]
fn test_descending_list_navigation() {
    let mut app = App::new(SortOrder::Descending);
    play_cells(&mut app, "159");
    press(&mut app, KeyCode::Tab);

    // Latest move is on top; Down walks toward the game start.
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.history().cursor(), 2);
}

#[test]
fn test_move_after_jump_discards_future() {
    let mut app = App::new(SortOrder::Ascending);
    play_cells(&mut app, "159");

    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Up);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.history().cursor(), 2);

    press(&mut app, KeyCode::Tab);
    play_cells(&mut app, "3");

    assert_eq!(app.history().len(), 4);
    assert_eq!(app.history().board().get(Position::BottomRight), Square::Empty);
    assert_eq!(
        app.history().board().get(Position::TopRight),
        Square::Occupied(Player::X)
    );
}

#[test]
fn test_sort_key_toggles_order_only() {
    let mut app = App::new(SortOrder::Ascending);
    play_cells(&mut app, "15");
    let before = app.history().clone();

    press(&mut app, KeyCode::Char('s'));
    assert_eq!(app.history().order(), SortOrder::Descending);
    assert_eq!(app.history().snapshots(), before.snapshots());
    assert_eq!(app.history().cursor(), before.cursor());

    press(&mut app, KeyCode::Char('s'));
    assert_eq!(app.history(), &before);
}

#[test]
fn test_won_game_screen() {
    let mut app = App::new(SortOrder::Ascending);
    play_cells(&mut app, "14253");

    let screen = render(&app);
    assert!(screen.contains("Winner: X"));
    assert!(screen.contains("Go to move #5 (1, 3)"));

    // Further moves are ignored.
    play_cells(&mut app, "9");
    assert_eq!(app.history().len(), 6);
}

#[test]
fn test_descending_screen_shows_ascending_toggle() {
    let mut app = App::new(SortOrder::Descending);
    play_cells(&mut app, "5");

    let screen = render(&app);
    assert!(screen.contains("[s] Sort ascending"));
    let latest = screen.find("Go to move #1 (2, 2)").unwrap();
    let start = screen.find("Go to game start").unwrap();
    assert!(latest < start);
}
