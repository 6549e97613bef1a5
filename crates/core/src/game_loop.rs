//! Game loop module - turn logic and per-frame sequencing
//!
//! Each frame runs the same fixed steps:
//!
//! 1. input (close request stops immediately, pointer releases reveal tiles)
//! 2. render
//! 3. clock/score update
//! 4. pending pair resolution
//! 5. completion check
//!
//! Time is passed in by the caller as milliseconds since the game started, so
//! the whole state machine is deterministic under test.
//!
//! A mismatched pair is not resolved with a blocking sleep. The loop enters a
//! timed `MismatchPending` state and keeps rendering and honoring close
//! requests; pointer releases are discarded until the pair flips back.

use arrayvec::ArrayVec;
use tracing::{debug, info};

use crate::board::Board;
use crate::snapshot::GameSnapshot;
use crate::surface::Surface;
use crate::types::{
    GameEvent, Point, Rgb, TileIndex, MISMATCH_DELAY_MS, PAIR_COUNT, SCORE_POSITION,
};

/// Why the loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StopReason {
    /// The player asked to close the game
    Closed,
    /// Every pair was found
    Completed,
}

/// Top-level loop state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RunState {
    Playing,
    Stopped(StopReason),
}

impl RunState {
    pub fn is_playing(&self) -> bool {
        matches!(self, RunState::Playing)
    }
}

/// How a pair of selected tiles was settled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairOutcome {
    /// Same face; both stay revealed
    Matched,
    /// Different faces; both were flipped back after the delay
    Mismatched,
}

/// The game: board, pending selection, clock and run state
#[derive(Debug, Clone)]
pub struct GameLoop {
    board: Board,
    /// Revealed but unresolved tiles, in click order
    pending: ArrayVec<TileIndex, 2>,
    /// Set while a mismatched pair is waiting to flip back
    mismatch_since_ms: Option<u64>,
    /// Whole seconds since start; never decreases
    score: u32,
    matched_pairs: u32,
    state: RunState,
}

impl GameLoop {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            pending: ArrayVec::new(),
            mismatch_since_ms: None,
            score: 0,
            matched_pairs: 0,
            state: RunState::Playing,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn matched_pairs(&self) -> u32 {
        self.matched_pairs
    }

    pub fn pending(&self) -> &[TileIndex] {
        &self.pending
    }

    pub fn mismatch_pending(&self) -> bool {
        self.mismatch_since_ms.is_some()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let tiles = self.board.tiles();
        GameSnapshot {
            revealed: std::array::from_fn(|i| tiles[i].is_revealed()),
            faces: self.board.faces(),
            score: self.score,
            matched_pairs: self.matched_pairs,
            pending: self.pending.len() as u8,
            mismatch_pending: self.mismatch_pending(),
            state: self.state,
        }
    }

    /// Run one frame. Returns the state after the frame.
    ///
    /// Once stopped, further calls do nothing.
    pub fn frame<I>(&mut self, events: I, now_ms: u64, surface: &mut dyn Surface) -> RunState
    where
        I: IntoIterator<Item = GameEvent>,
    {
        if !self.state.is_playing() {
            return self.state;
        }

        self.handle_events(events);
        if !self.state.is_playing() {
            return self.state;
        }

        self.render(surface);
        self.update_clock(now_ms);
        self.resolve_pending(now_ms);
        self.check_continue();
        self.state
    }

    /// Apply input events in order. A close request stops the loop and drops
    /// the remaining events.
    pub fn handle_events<I>(&mut self, events: I)
    where
        I: IntoIterator<Item = GameEvent>,
    {
        for event in events {
            if !self.state.is_playing() {
                return;
            }
            self.handle_event(event);
        }
    }

    pub fn handle_event(&mut self, event: GameEvent) {
        match event {
            GameEvent::Close => {
                info!(score = self.score, "close requested");
                self.state = RunState::Stopped(StopReason::Closed);
            }
            GameEvent::PointerRelease(p) => {
                self.select(p);
            }
        }
    }

    /// Reveal the tile under `p` and queue it for comparison.
    ///
    /// Ignored while a mismatch is on display or a pair is already waiting.
    pub fn select(&mut self, p: Point) -> Option<TileIndex> {
        if !self.state.is_playing() || self.mismatch_pending() || self.pending.is_full() {
            return None;
        }
        let index = self.board.hit_test(p)?;
        debug!(tile = index, x = p.x, y = p.y, "tile revealed");
        self.pending.push(index);
        Some(index)
    }

    pub fn render(&self, surface: &mut dyn Surface) {
        surface.fill(Rgb::BLACK);
        self.board.render(surface);
        surface.draw_text(SCORE_POSITION, &self.score.to_string(), Rgb::WHITE);
    }

    /// Set the score to whole elapsed seconds. Time going backwards is ignored.
    pub fn update_clock(&mut self, now_ms: u64) {
        let secs = u32::try_from(now_ms / 1000).unwrap_or(u32::MAX);
        self.score = self.score.max(secs);
    }

    /// Settle the pending pair if there is one.
    ///
    /// Returns the outcome on the frame the pair is settled: immediately for a
    /// match, after [`MISMATCH_DELAY_MS`] for a mismatch.
    pub fn resolve_pending(&mut self, now_ms: u64) -> Option<PairOutcome> {
        let [a, b] = match self.pending.as_slice() {
            &[a, b] => [a, b],
            _ => return None,
        };

        if let Some(since) = self.mismatch_since_ms {
            if now_ms.saturating_sub(since) < MISMATCH_DELAY_MS {
                return None;
            }
            self.board.reset(a);
            self.board.reset(b);
            self.pending.clear();
            self.mismatch_since_ms = None;
            debug!(a, b, "mismatched pair covered");
            return Some(PairOutcome::Mismatched);
        }

        if self.board.is_pair(a, b) {
            self.pending.clear();
            self.matched_pairs += 1;
            info!(a, b, pairs = self.matched_pairs, "pair matched");
            Some(PairOutcome::Matched)
        } else {
            info!(a, b, "pair mismatched");
            self.mismatch_since_ms = Some(now_ms);
            None
        }
    }

    /// Stop once every tile is revealed.
    pub fn check_continue(&mut self) -> RunState {
        if self.state.is_playing() && self.board.all_revealed() {
            info!(score = self.score, pairs = PAIR_COUNT, "board completed");
            self.state = RunState::Stopped(StopReason::Completed);
        }
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::RecordingSurface;
    use crate::types::{ImageId, Sprite, TILE_COUNT};

    /// Faces laid out as pairs of neighbours: 1 1 2 2 / 3 3 4 4 / ...
    fn paired_board() -> Board {
        let f = ImageId::faces();
        let layout: [ImageId; TILE_COUNT] = std::array::from_fn(|i| f[i / 2]);
        Board::from_faces(Sprite::new(ImageId::COVER, 100, 100), layout)
    }

    fn click(game: &GameLoop, index: TileIndex) -> GameEvent {
        GameEvent::PointerRelease(game.board().tile_center(index).unwrap())
    }

    #[test]
    fn test_new_game() {
        let game = GameLoop::new(paired_board());
        assert_eq!(game.state(), RunState::Playing);
        assert_eq!(game.score(), 0);
        assert!(game.pending().is_empty());
        assert!(!game.mismatch_pending());
    }

    #[test]
    fn test_select_queues_revealed_tile() {
        let mut game = GameLoop::new(paired_board());
        let p = game.board().tile_center(3).unwrap();
        assert_eq!(game.select(p), Some(3));
        assert_eq!(game.pending(), &[3]);
        assert_eq!(game.select(p), None);
        assert_eq!(game.pending(), &[3]);
    }

    #[test]
    fn test_matching_pair_resolves_immediately() {
        let mut game = GameLoop::new(paired_board());
        game.handle_events([click(&game, 0), click(&game, 1)]);
        assert_eq!(game.resolve_pending(100), Some(PairOutcome::Matched));
        assert!(game.pending().is_empty());
        assert_eq!(game.board().revealed_count(), 2);
        assert_eq!(game.matched_pairs(), 1);
    }

    #[test]
    fn test_mismatch_waits_for_delay() {
        let mut game = GameLoop::new(paired_board());
        game.handle_events([click(&game, 1), click(&game, 2)]);

        assert_eq!(game.resolve_pending(1000), None);
        assert!(game.mismatch_pending());
        assert_eq!(game.resolve_pending(1499), None);
        assert_eq!(game.board().revealed_count(), 2);

        assert_eq!(game.resolve_pending(1500), Some(PairOutcome::Mismatched));
        assert_eq!(game.board().revealed_count(), 0);
        assert!(game.pending().is_empty());
        assert!(!game.mismatch_pending());
    }

    #[test]
    fn test_clicks_ignored_during_mismatch() {
        let mut game = GameLoop::new(paired_board());
        game.handle_events([click(&game, 1), click(&game, 2)]);
        game.resolve_pending(0);

        game.handle_event(click(&game, 5));
        assert!(!game.board().tile(5).unwrap().is_revealed());
        assert_eq!(game.pending(), &[1, 2]);
    }

    #[test]
    fn test_snapshot_tracks_mismatch_delay() {
        let mut game = GameLoop::new(paired_board());
        let mut s = RecordingSurface::new();
        assert!(game.snapshot().playable());

        game.frame([click(&game, 1), click(&game, 2)], 0, &mut s);
        let snap = game.snapshot();
        assert!(!snap.playable());
        assert!(snap.mismatch_pending);
        assert_eq!(snap.pending, 2);
        assert_eq!(snap.revealed_count(), 2);
        assert_eq!(snap.faces, game.board().faces());

        game.frame([], MISMATCH_DELAY_MS, &mut s);
        let snap = game.snapshot();
        assert!(snap.playable());
        assert_eq!((snap.pending, snap.revealed_count()), (0, 0));

        game.frame([GameEvent::Close], MISMATCH_DELAY_MS + 16, &mut s);
        assert!(!game.snapshot().playable());
    }

    #[test]
    fn test_third_click_in_one_frame_is_ignored() {
        let mut game = GameLoop::new(paired_board());
        game.handle_events([click(&game, 0), click(&game, 4), click(&game, 8)]);
        assert_eq!(game.pending(), &[0, 4]);
        assert!(!game.board().tile(8).unwrap().is_revealed());
    }

    #[test]
    fn test_close_drops_remaining_events() {
        let mut game = GameLoop::new(paired_board());
        let events = [GameEvent::Close, click(&game, 0)];
        game.handle_events(events);
        assert_eq!(game.state(), RunState::Stopped(StopReason::Closed));
        assert_eq!(game.board().revealed_count(), 0);
    }

    #[test]
    fn test_clock_is_whole_seconds_and_monotonic() {
        let mut game = GameLoop::new(paired_board());
        game.update_clock(999);
        assert_eq!(game.score(), 0);
        game.update_clock(1000);
        assert_eq!(game.score(), 1);
        game.update_clock(2999);
        assert_eq!(game.score(), 2);
        game.update_clock(500);
        assert_eq!(game.score(), 2);
    }

    #[test]
    fn test_render_order() {
        let game = GameLoop::new(paired_board());
        let mut s = RecordingSurface::new();
        game.render(&mut s);
        assert_eq!(
            s.commands().first(),
            Some(&crate::surface::DrawCommand::Fill(Rgb::BLACK))
        );
        assert_eq!(s.blits().count(), 16);
        assert_eq!(s.last_text(), Some("0"));
    }

    #[test]
    fn test_frame_completes_board() {
        let mut game = GameLoop::new(paired_board());
        let mut s = RecordingSurface::new();
        for pair in 0..8 {
            let events = [click(&game, pair * 2), click(&game, pair * 2 + 1)];
            let state = game.frame(events, pair as u64 * 1000, &mut s);
            if pair < 7 {
                assert_eq!(state, RunState::Playing);
            } else {
                assert_eq!(state, RunState::Stopped(StopReason::Completed));
            }
        }
        assert_eq!(game.matched_pairs(), 8);
        assert_eq!(game.score(), 7);
    }

    #[test]
    fn test_frame_after_stop_is_noop() {
        let mut game = GameLoop::new(paired_board());
        let mut s = RecordingSurface::new();
        game.frame([GameEvent::Close], 0, &mut s);
        assert!(s.commands().is_empty());

        let ev = click(&game, 0);
        assert_eq!(
            game.frame([ev], 5000, &mut s),
            RunState::Stopped(StopReason::Closed)
        );
        assert!(s.commands().is_empty());
        assert_eq!(game.score(), 0);
        assert_eq!(game.board().revealed_count(), 0);
    }
}
