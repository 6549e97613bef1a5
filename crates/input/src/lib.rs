//! Terminal input module (engine-facing).
//!
//! This module is independent of the renderer. It maps `crossterm` events
//! into [`crate::types::GameEvent`]: left mouse button releases become pointer
//! releases in logical pixel coordinates, and the close keys stand in for
//! the window's close box.

pub mod map;

pub use tui_memory_types as types;

pub use map::{is_close_key, map_event, map_mouse};
