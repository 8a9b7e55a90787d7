//! Key mapping from terminal events to game input events.

use crate::types::{InputEvent, Key};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a key code to a logical key binding.
pub fn map_key_code(code: KeyCode) -> Option<Key> {
    match code {
        // Player 1
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Key::LeftUp),
        KeyCode::Char('a') | KeyCode::Char('A') => Some(Key::LeftDown),

        // Player 2
        KeyCode::Char('p') | KeyCode::Char('P') => Some(Key::RightUp),
        KeyCode::Char('l') | KeyCode::Char('L') => Some(Key::RightDown),

        // New match
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Key::Restart),

        _ => None,
    }
}

/// Check if key should close the game.
///
/// `q` steers player 1, so closing uses Esc or Ctrl-C instead.
pub fn should_close(key: KeyEvent) -> bool {
    key.code == KeyCode::Esc
        || (matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
            && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Map a key event to a game input event.
///
/// Auto-repeat is reported as another key-down so that terminals without
/// release events can keep a key "held" (see [`crate::KeyReleaseTracker`]).
pub fn map_key_event(key: KeyEvent) -> Option<InputEvent> {
    if key.kind != KeyEventKind::Release && should_close(key) {
        return Some(InputEvent::Close);
    }

    let mapped = map_key_code(key.code)?;
    match key.kind {
        KeyEventKind::Press | KeyEventKind::Repeat => Some(InputEvent::KeyDown(mapped)),
        KeyEventKind::Release => Some(InputEvent::KeyUp(mapped)),
    }
}

/// Map any terminal event to a game input event.
pub fn map_event(event: Event) -> Option<InputEvent> {
    match event {
        Event::Key(key) => map_key_event(key),
        _ => None,
    }
}
