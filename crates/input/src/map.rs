//! Key mapping from terminal events to controls.

use crate::types::Control;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to a control.
pub fn handle_key_event(key: KeyEvent) -> Option<Control> {
    if should_quit(key) {
        return Some(Control::Exit);
    }
    match key.code {
        // Movement
        KeyCode::Up | KeyCode::Char('w' | 'W' | 'k' | 'K') => Some(Control::Up),
        KeyCode::Down | KeyCode::Char('s' | 'S' | 'j' | 'J') => Some(Control::Down),
        KeyCode::Left | KeyCode::Char('a' | 'A' | 'h' | 'H') => Some(Control::Left),
        KeyCode::Right | KeyCode::Char('d' | 'D' | 'l' | 'L') => Some(Control::Right),

        KeyCode::Char('p' | 'P') => Some(Control::Pause),
        KeyCode::Char('x' | 'X') | KeyCode::Esc => Some(Control::Exit),

        _ => None,
    }
}

/// Keys that always end the session, whatever the game does with other input.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
