//! Write a placeholder `image0.bmp` .. `image8.bmp` set.
//!
//! Usage: `make-assets [DIR]`. Without an argument the images go to
//! `MEMORY_ASSET_DIR`, or the working directory if that is unset, which is
//! where the game looks for them.

use std::path::PathBuf;

use anyhow::{Context, Result};

use tui_memory::assets::write_placeholder_set;
use tui_memory::config::GameConfig;

fn main() -> Result<()> {
    let dir = match std::env::args_os().nth(1) {
        Some(arg) => PathBuf::from(arg),
        None => GameConfig::from_env().asset_dir,
    };

    let written = write_placeholder_set(&dir)
        .with_context(|| format!("failed to write placeholder images to {}", dir.display()))?;
    for path in &written {
        println!("wrote {}", path.display());
    }
    Ok(())
}
