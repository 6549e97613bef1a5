use crate::game_loop::RunState;
use crate::types::{ImageId, TILE_COUNT};

/// Read-only copy of the game state, in row-major tile order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub revealed: [bool; TILE_COUNT],
    pub faces: [ImageId; TILE_COUNT],
    pub score: u32,
    pub matched_pairs: u32,
    pub pending: u8,
    pub mismatch_pending: bool,
    pub state: RunState,
}

impl GameSnapshot {
    pub fn revealed_count(&self) -> usize {
        self.revealed.iter().filter(|&&r| r).count()
    }

    /// Whether a click would currently be accepted
    pub fn playable(&self) -> bool {
        self.state.is_playing() && !self.mismatch_pending && self.pending < 2
    }
}
