//! Mapping from terminal events to game events.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::types::{GameEvent, Viewport};

/// Translate one crossterm event.
///
/// Only a left-button release and a close key mean anything to the game;
/// everything else (moves, drags, other keys, resizes) maps to `None`.
pub fn map_event(event: &Event, viewport: Viewport) -> Option<GameEvent> {
    match event {
        Event::Key(key) if is_close_key(*key) => Some(GameEvent::Close),
        Event::Mouse(mouse) => map_mouse(*mouse, viewport),
        _ => None,
    }
}

/// Pointer release in cell coordinates -> logical pixel position.
pub fn map_mouse(mouse: MouseEvent, viewport: Viewport) -> Option<GameEvent> {
    match mouse.kind {
        MouseEventKind::Up(MouseButton::Left) => Some(GameEvent::PointerRelease(
            viewport.cell_to_logical(mouse.column, mouse.row),
        )),
        _ => None,
    }
}

/// Check if key should close the game (the terminal's close box).
pub fn is_close_key(key: KeyEvent) -> bool {
    if key.kind == KeyEventKind::Release {
        return false;
    }
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
