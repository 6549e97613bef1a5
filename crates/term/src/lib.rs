//! Terminal "game window" module.
//!
//! The terminal stands in for the game window. Rendering goes through three
//! small stages:
//!
//! - [`Canvas`]: a 500x400 logical-pixel raster implementing
//!   [`tui_memory_core::Surface`]; the game draws into it
//! - [`FrameBuffer`]: styled character cells sampled from the canvas
//! - [`TerminalRenderer`]: flushes changed cells to the real terminal
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep the game's coordinate system independent of the terminal size
//! - Only write what changed between frames

pub mod canvas;
pub mod fb;
pub mod renderer;

pub use tui_memory_assets as assets;
pub use tui_memory_core as core;
pub use tui_memory_types as types;

pub use canvas::Canvas;
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb, HALF_BLOCK};
pub use renderer::TerminalRenderer;
pub use types::Viewport;
