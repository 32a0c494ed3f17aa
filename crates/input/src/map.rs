//! Key mapping from terminal events to game commands.

use crate::types::{Command, Direction, Screen};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, ModifierKeyCode};

/// Map keyboard input to a command for the screen currently shown.
pub fn handle_key_event(screen: Screen, key: KeyEvent) -> Option<Command> {
    if key.kind == KeyEventKind::Release || key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    match screen {
        Screen::MainMenu => match key.code {
            KeyCode::Char('p') | KeyCode::Char('P') => Some(Command::SelectPlay),
            KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::SelectRules),
            KeyCode::Char('l') | KeyCode::Char('L') => Some(Command::SelectLeaderboard),
            _ => None,
        },

        Screen::Rules | Screen::Leaderboard => match key.code {
            KeyCode::Esc => Some(Command::BackToMenu),
            _ => None,
        },

        Screen::NameEntry => match key.code {
            KeyCode::Esc => Some(Command::BackToMenu),
            KeyCode::Enter => Some(Command::ConfirmName),
            KeyCode::Backspace => Some(Command::NameBackspace),
            KeyCode::Char(c) if !c.is_control() => Some(Command::NameAppend(c)),
            _ => None,
        },

        Screen::Playing | Screen::Paused | Screen::GameOver | Screen::Completed => {
            if is_pause_key(key.code) {
                return Some(Command::TogglePause);
            }
            match key.code {
                KeyCode::Char(' ') => Some(Command::Restart),
                KeyCode::Esc => Some(Command::QuitToMenu),
                code => turn_direction(code).map(Command::Turn),
            }
        }
    }
}

// Shift arrives as its own key only when the terminal reports modifier keys.
fn is_pause_key(code: KeyCode) -> bool {
    matches!(
        code,
        KeyCode::Tab
            | KeyCode::Modifier(ModifierKeyCode::LeftShift)
            | KeyCode::Modifier(ModifierKeyCode::RightShift)
    )
}

fn turn_direction(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Up => Some(Direction::Up),
        KeyCode::Down => Some(Direction::Down),
        KeyCode::Left => Some(Direction::Left),
        KeyCode::Right => Some(Direction::Right),
        KeyCode::Char(c) => Direction::from_str(c.encode_utf8(&mut [0; 4])),
        _ => None,
    }
}

/// Check if key should quit the game.
///
/// Ctrl+C quits anywhere; `q` only on the main menu, where it cannot be a
/// typed name character.
pub fn should_quit(screen: Screen, key: KeyEvent) -> bool {
    if key.kind == KeyEventKind::Release {
        return false;
    }
    (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        || (screen == Screen::MainMenu
            && matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q')))
}
