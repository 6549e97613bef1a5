//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the rules and state of the memory game. It has no
//! dependency on the terminal, on image decoding, or on the wall clock:
//!
//! - **Deterministic**: same seed produces the same board
//! - **Testable**: time is passed in as milliseconds, drawing goes through a trait
//! - **Portable**: any [`Surface`] can display it (terminal, headless)
//!
//! # Module Structure
//!
//! - [`tile`]: one grid cell, its bounds and covered/revealed state
//! - [`board`]: the 4x4 grid, face dealing, hit-testing, win detection
//! - [`game_loop`]: per-frame sequencing and pair resolution
//! - [`rng`]: seedable LCG and pair dealing
//! - [`pacing`]: 60 FPS frame budget
//! - [`surface`]: the drawing trait plus a recording implementation
//! - [`snapshot`]: read-only state copies
//!
//! # Game Rules
//!
//! - 16 tiles hide 8 faces, each exactly twice
//! - Clicking a covered tile reveals it; two revealed tiles form a turn
//! - Equal faces stay revealed; different faces flip back after 500ms
//! - The score is whole seconds since start; the game ends when all tiles
//!   are revealed
//!
//! # Example
//!
//! ```
//! use tui_memory_core::{Board, GameLoop, RecordingSurface, RunState, SimpleRng};
//! use tui_memory_types::{GameEvent, ImageId, Sprite};
//!
//! let cover = Sprite::new(ImageId::COVER, 100, 100);
//! let faces = ImageId::faces().map(|id| Sprite::new(id, 100, 100));
//! let board = Board::initialize(cover, faces, &mut SimpleRng::new(12345));
//!
//! let mut game = GameLoop::new(board);
//! let mut surface = RecordingSurface::new();
//!
//! let click = GameEvent::PointerRelease(game.board().tile_center(0).unwrap());
//! let state = game.frame([click], 16, &mut surface);
//!
//! assert_eq!(state, RunState::Playing);
//! assert_eq!(game.board().revealed_count(), 1);
//! ```

pub mod board;
pub mod game_loop;
pub mod pacing;
pub mod rng;
pub mod snapshot;
pub mod surface;
pub mod tile;

pub use tui_memory_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_loop::{GameLoop, PairOutcome, RunState, StopReason};
pub use pacing::FramePacer;
pub use rng::{deal_pairs, SimpleRng};
pub use snapshot::GameSnapshot;
pub use surface::{DrawCommand, RecordingSurface, Surface};
pub use tile::Tile;
