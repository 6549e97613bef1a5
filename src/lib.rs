//! TUI Memory (workspace facade crate).
//!
//! Re-exports the workspace crates under short names
//! (`tui_memory::{assets,core,input,term,types}`) and holds the pieces only
//! the binary needs: environment configuration and log setup.

pub mod config;
pub mod logging;

pub use tui_memory_assets as assets;
pub use tui_memory_core as core;
pub use tui_memory_input as input;
pub use tui_memory_term as term;
pub use tui_memory_types as types;
