//! Keyboard mapping and cursor movement.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tictactoe_engine::Position;

/// Cursor direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards the top row.
    Up,
    /// Towards the bottom row.
    Down,
    /// Towards the left column.
    Left,
    /// Towards the right column.
    Right,
}

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor.
    Cursor(Direction),
    /// Play the cell under the cursor.
    SelectCursor,
    /// Play a specific cell.
    Select(Position),
    /// Start the next round.
    Restart,
    /// Leave the game.
    Quit,
    /// Key has no binding.
    Ignore,
}

/// Maps a key press to an [`Action`].
///
/// Digits follow the board's reading order: `1` is top-left, `9` bottom-right.
pub fn action_for_key(key: KeyEvent) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Action::Quit,
            _ => Action::Ignore,
        };
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Action::Cursor(Direction::Up),
        KeyCode::Down | KeyCode::Char('j') => Action::Cursor(Direction::Down),
        KeyCode::Left | KeyCode::Char('h') => Action::Cursor(Direction::Left),
        KeyCode::Right | KeyCode::Char('l') => Action::Cursor(Direction::Right),
        KeyCode::Enter | KeyCode::Char(' ') => Action::SelectCursor,
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|d| Position::from_index(d as usize - 1))
            .map_or(Action::Ignore, Action::Select),
        KeyCode::Char('r') | KeyCode::Char('R') => Action::Restart,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Action::Quit,
        _ => Action::Ignore,
    }
}

/// Moves the cursor one cell, stopping at the board edge.
pub fn move_cursor(cursor: Position, direction: Direction) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match direction {
        Direction::Up => (row.saturating_sub(1), col),
        Direction::Down => ((row + 1).min(2), col),
        Direction::Left => (row, col.saturating_sub(1)),
        Direction::Right => (row, (col + 1).min(2)),
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_digits_select_in_reading_order() {
        assert_eq!(
            action_for_key(key(KeyCode::Char('1'))),
            Action::Select(Position::TopLeft)
        );
        assert_eq!(
            action_for_key(key(KeyCode::Char('5'))),
            Action::Select(Position::Center)
        );
        assert_eq!(
            action_for_key(key(KeyCode::Char('9'))),
            Action::Select(Position::BottomRight)
        );
        assert_eq!(action_for_key(key(KeyCode::Char('0'))), Action::Ignore);
    }

    #[test]
    fn test_control_c_quits() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(action_for_key(ctrl_c), Action::Quit);
        assert_eq!(action_for_key(key(KeyCode::Char('c'))), Action::Ignore);
    }

    #[test]
    fn test_cursor_moves_and_stops_at_edges() {
        assert_eq!(move_cursor(Position::Center, Direction::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, Direction::Right), Position::MiddleRight);
        assert_eq!(move_cursor(Position::TopLeft, Direction::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, Direction::Left), Position::TopLeft);
        assert_eq!(
            move_cursor(Position::BottomRight, Direction::Down),
            Position::BottomRight
        );
        assert_eq!(
            move_cursor(Position::BottomRight, Direction::Right),
            Position::BottomRight
        );
    }
}
