//! Frame pacing.
//!
//! Caps the loop at a target frame rate: every frame gets a fixed time
//! budget, and whatever part of the budget the frame did not use is waited
//! out by the caller (the terminal shell waits inside its event poll so input
//! keeps arriving while it sleeps).

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct FramePacer {
    budget: Duration,
    last_tick: Instant,
    frames: u64,
}

impl FramePacer {
    pub fn new(fps: u32, now: Instant) -> Self {
        let budget = Duration::from_secs(1) / fps.max(1);
        Self {
            budget,
            last_tick: now,
            frames: 0,
        }
    }

    pub fn budget(&self) -> Duration {
        self.budget
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Time left in the current frame's budget (zero once it is used up).
    pub fn remaining(&self, now: Instant) -> Duration {
        self.budget
            .saturating_sub(now.saturating_duration_since(self.last_tick))
    }

    /// Mark the start of a new frame. Returns the length of the frame that
    /// just ended.
    pub fn tick(&mut self, now: Instant) -> Duration {
        let elapsed = now.saturating_duration_since(self.last_tick);
        self.last_tick = now;
        self.frames += 1;
        elapsed
    }
}
