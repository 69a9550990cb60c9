//! Key mapping from terminal events to user actions.

use crate::types::UserAction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map keyboard input to user actions.
///
/// `Up` is never produced here; the drop clock issues it.
pub fn handle_key_event(key: KeyEvent) -> Option<UserAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    match key.code {
        KeyCode::Char(' ') | KeyCode::Enter => Some(UserAction::Start),

        // Movement
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(UserAction::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(UserAction::Right),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(UserAction::Down),

        // Rotation
        KeyCode::Up | KeyCode::Char('r') | KeyCode::Char('R') => Some(UserAction::Action),

        KeyCode::Char('p') | KeyCode::Char('P') => Some(UserAction::Pause),
        KeyCode::Char('c') | KeyCode::Char('C') => Some(UserAction::Terminate),

        _ => None,
    }
}

/// Whether the event comes from a held key (auto-repeat)
pub fn is_hold(key: &KeyEvent) -> bool {
    key.kind == KeyEventKind::Repeat
}

/// Release events carry no action.
pub fn is_release(key: &KeyEvent) -> bool {
    key.kind == KeyEventKind::Release
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
