//! Tests for the headless replay command.

use rewind::replay::replay;
use rewind_tictactoe::SortOrder;

#[test]
fn test_replay_text_for_won_game() {
    let report = replay(&[1, 5, 2, 4, 3], None, SortOrder::Ascending);

    assert_eq!(report.status(), "Winner: X");
    assert_eq!(report.winner(), &Some("X".to_string()));
    assert_eq!(report.line(), &vec![1, 2, 3]);
    assert_eq!(
        report.to_text(),
        "\
X|X|X
-+-+-
O|O|6
-+-+-
7|8|9

Winner: X
[Sort descending]
  Go to game start
  Go to move #1 (1, 1)
  Go to move #2 (2, 2)
  Go to move #3 (1, 2)
  Go to move #4 (2, 1)
> Go to move #5 (1, 3)
"
    );
}

#[test]
fn test_replay_with_jump_shows_earlier_board() {
    let report = replay(&[1, 5, 2, 4, 3], Some(2), SortOrder::Descending);

    assert_eq!(report.status(), "Next player: X");
    assert_eq!(*report.cursor(), 2);
    assert!(report.line().is_empty());
    assert_eq!(report.moves().len(), 6);
    assert_eq!(report.moves()[0], "  Go to move #5 (1, 3)");
    assert_eq!(report.moves()[3], "> Go to move #2 (2, 2)");
    assert_eq!(report.sort(), "Sort ascending");
}

#[test]
fn test_replay_draw() {
    let report = replay(&[1, 2, 3, 4, 6, 7, 5, 9, 8], None, SortOrder::Ascending);
    assert_eq!(report.status(), "Draw game: Nobody wins");
    assert_eq!(report.winner(), &None);
}

#[test]
fn test_moves_after_win_are_reported_as_ignored() {
    let report = replay(&[1, 5, 2, 4, 3, 9], None, SortOrder::Ascending);
    assert_eq!(report.skipped(), &vec![9]);
    assert!(report.to_text().ends_with("Ignored cells: 9\n"));
}

#[test]
fn test_replay_json_report() {
    let report = replay(&[5], Some(7), SortOrder::Ascending);
    let json: serde_json::Value = serde_json::to_value(&report).unwrap();

    assert_eq!(json["cursor"], 1);
    assert_eq!(json["board"][4], "X");
    assert!(json["board"][0].is_null());
    assert_eq!(json["status"], "Next player: O");
}
