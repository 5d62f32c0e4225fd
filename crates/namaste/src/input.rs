//! Keyboard mapping and cursor movement.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use namaste_tictactoe::{Player, Position};

use crate::app::{App, AppAction, Modal, Screen};

/// Cursor movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward row 0.
    Up,
    /// Toward row 2.
    Down,
    /// Toward column 0.
    Left,
    /// Toward column 2.
    Right,
}

/// Moves cursor one square, stopping at the board edge.
pub fn move_cursor(cursor: Position, direction: Direction) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match direction {
        Direction::Up => (row.saturating_sub(1), col),
        Direction::Down => ((row + 1).min(2), col),
        Direction::Left => (row, col.saturating_sub(1)),
        Direction::Right => (row, (col + 1).min(2)),
    };
    Position::from_index(row * 3 + col).unwrap_or(cursor)
}

fn arrow(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Up => Some(Direction::Up),
        KeyCode::Down => Some(Direction::Down),
        KeyCode::Left => Some(Direction::Left),
        KeyCode::Right => Some(Direction::Right),
        _ => None,
    }
}

/// Maps a key press to an action for the app's current screen and modal.
pub fn map_key(app: &App, key: KeyEvent) -> Option<AppAction> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(AppAction::Quit);
    }

    match app.screen() {
        Screen::Splash => Some(AppAction::SkipSplash),
        Screen::Welcome => match key.code {
            KeyCode::Up | KeyCode::Char('k') => Some(AppAction::MenuUp),
            KeyCode::Down | KeyCode::Char('j') => Some(AppAction::MenuDown),
            KeyCode::Enter | KeyCode::Char(' ') => Some(AppAction::MenuSelect),
            KeyCode::Char('1') => Some(AppAction::StartSingle),
            KeyCode::Char('2') => Some(AppAction::StartSeries),
            KeyCode::Char('3') | KeyCode::Char('q') | KeyCode::Esc => Some(AppAction::Quit),
            _ => None,
        },
        Screen::Game => map_game_key(app, key.code),
    }
}

fn map_game_key(app: &App, code: KeyCode) -> Option<AppAction> {
    match code {
        KeyCode::Esc => return Some(AppAction::Home),
        KeyCode::Char('q') => return Some(AppAction::Quit),
        _ => {}
    }

    match app.modal() {
        Some(Modal::StartingPlayer { .. }) => match code {
            KeyCode::Char('x') | KeyCode::Char('X') => Some(AppAction::ChooseStarter(Player::X)),
            KeyCode::Char('o') | KeyCode::Char('O') => Some(AppAction::ChooseStarter(Player::O)),
            _ => None,
        },
        Some(Modal::GameResult(_)) | Some(Modal::SeriesWinner(_)) => match code {
            KeyCode::Enter | KeyCode::Char(' ') => Some(AppAction::Continue),
            KeyCode::Char('n') => Some(AppAction::NewSeries),
            _ => None,
        },
        None => match code {
            KeyCode::Char(c) if c.is_ascii_digit() => {
                Position::from_key(c).map(AppAction::Place)
            }
            KeyCode::Enter | KeyCode::Char(' ') => Some(AppAction::PlaceAtCursor),
            KeyCode::Char('r') => Some(AppAction::ResetGame),
            KeyCode::Char('n') => Some(AppAction::NewSeries),
            other => arrow(other).map(AppAction::MoveCursor),
        },
    }
}
