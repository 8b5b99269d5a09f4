//! Key bindings
//!
//! Translates crossterm key events into game events.

use crate::game::GameEvent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a key press to a game event
///
/// Returns `None` for keys the game does not use and for key releases and
/// repeats reported by some terminals.
#[must_use]
pub fn map_key(key: KeyEvent) -> Option<GameEvent> {
    // Only process key press events (fixes Windows double-input bug)
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(GameEvent::Quit)
        }
        KeyCode::Esc => Some(GameEvent::Quit),
        KeyCode::Enter => Some(GameEvent::Submit),
        KeyCode::Backspace => Some(GameEvent::Backspace),
        KeyCode::Char(' ') => Some(GameEvent::RestartRequest),
        KeyCode::Char(c) if c.is_ascii_alphabetic() => Some(GameEvent::Letter(c)),
        _ => None,
    }
}
