//! Key mapping from terminal events to logical keys.

use crate::types::Key;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, ModifierKeyCode};

/// Map a terminal key code to a logical key.
pub fn map_key(code: KeyCode) -> Option<Key> {
    match code {
        // Movement / menu navigation
        KeyCode::Up
        | KeyCode::Char('w')
        | KeyCode::Char('W')
        | KeyCode::Char('k')
        | KeyCode::Char('K') => Some(Key::Up),
        KeyCode::Down
        | KeyCode::Char('s')
        | KeyCode::Char('S')
        | KeyCode::Char('j')
        | KeyCode::Char('J') => Some(Key::Down),
        KeyCode::Left
        | KeyCode::Char('a')
        | KeyCode::Char('A')
        | KeyCode::Char('h')
        | KeyCode::Char('H') => Some(Key::Left),
        KeyCode::Right
        | KeyCode::Char('d')
        | KeyCode::Char('D')
        | KeyCode::Char('l')
        | KeyCode::Char('L') => Some(Key::Right),

        // Speed modifier (only reported by terminals with keyboard enhancement)
        KeyCode::Modifier(ModifierKeyCode::LeftShift | ModifierKeyCode::RightShift) => {
            Some(Key::Focus)
        }

        // Actions
        KeyCode::Char('x') | KeyCode::Char('X') => Some(Key::Bomb),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(Key::Pause),
        KeyCode::Enter | KeyCode::Char('z') | KeyCode::Char('Z') | KeyCode::Char(' ') => {
            Some(Key::Confirm)
        }
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(Key::Back),

        _ => None,
    }
}

/// Ctrl+C: the terminal equivalent of closing the window.
pub fn is_quit_event(key: KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Whether the event carries Shift, which counts as holding the speed modifier.
pub fn implies_focus(key: KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::SHIFT)
}
