//! Terminal memory game runner (default binary).
//!
//! Loads the nine bitmaps, deals a board, then drives the game loop at 60 FPS.
//! It uses crossterm for mouse/keyboard input and a canvas + framebuffer
//! renderer that treats the terminal as a 500x400 pixel window.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use tracing::info;

use tui_memory::assets::ImageSet;
use tui_memory::config::GameConfig;
use tui_memory::core::{
    Board, FramePacer, GameLoop, GameSnapshot, RunState, SimpleRng, StopReason,
};
use tui_memory::input::map_event;
use tui_memory::logging;
use tui_memory::term::{Canvas, FrameBuffer, TerminalRenderer, Viewport};
use tui_memory::types::{GameEvent, TARGET_FPS};

/// How often the finished screen checks for input.
const IDLE_POLL: Duration = Duration::from_millis(250);

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    logging::init(&config)?;

    // Assets are loaded before the terminal is taken over so a missing file
    // is reported on a normal screen.
    let images = ImageSet::load_from_dir(&config.asset_dir).with_context(|| {
        format!(
            "failed to load game images from {}",
            config.asset_dir.display()
        )
    })?;

    let seed = config.seed_or_clock();
    info!(seed, asset_dir = %config.asset_dir.display(), "starting game");
    let board = Board::initialize(images.cover(), images.faces(), &mut SimpleRng::new(seed));

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &images, board);

    // Always try to restore terminal state.
    let _ = term.exit();
    let last = result?;
    info!(
        state = ?last.state,
        score = last.score,
        pairs = last.matched_pairs,
        revealed = last.revealed_count(),
        "game finished"
    );
    Ok(())
}

fn current_viewport() -> Viewport {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    Viewport::new(w, h)
}

fn run(term: &mut TerminalRenderer, images: &ImageSet, board: Board) -> Result<GameSnapshot> {
    let mut game = GameLoop::new(board);
    let mut canvas = Canvas::new(images);
    let mut fb = FrameBuffer::new(0, 0);
    let mut events: Vec<GameEvent> = Vec::with_capacity(8);

    let start = Instant::now();
    let mut pacer = FramePacer::new(TARGET_FPS, start);

    loop {
        let viewport = current_viewport();

        // Input arrives while the rest of the frame budget is slept out.
        events.clear();
        pump_events(term, &pacer, viewport, &mut events)?;
        pacer.tick(Instant::now());

        let now_ms = start.elapsed().as_millis() as u64;
        match game.frame(events.drain(..), now_ms, &mut canvas) {
            RunState::Playing => {
                canvas.present_into(viewport, &mut fb);
                term.show(&mut fb)?;
            }
            RunState::Stopped(StopReason::Closed) => {
                return Ok(game.snapshot());
            }
            RunState::Stopped(StopReason::Completed) => {
                canvas.present_into(viewport, &mut fb);
                term.show(&mut fb)?;
                wait_for_close(term, &canvas, &mut fb)?;
                return Ok(game.snapshot());
            }
        }
    }
}

/// Collect game events until the current frame's budget is used up.
fn pump_events(
    term: &mut TerminalRenderer,
    pacer: &FramePacer,
    viewport: Viewport,
    out: &mut Vec<GameEvent>,
) -> Result<()> {
    loop {
        let remaining = pacer.remaining(Instant::now());
        if remaining.is_zero() {
            return Ok(());
        }
        if event::poll(remaining)? {
            let ev = event::read()?;
            if let Event::Resize(..) = ev {
                term.invalidate();
            }
            if let Some(game_event) = map_event(&ev, viewport) {
                out.push(game_event);
            }
        }
    }
}

/// Keep the finished board on screen until the player closes the game.
fn wait_for_close(term: &mut TerminalRenderer, canvas: &Canvas, fb: &mut FrameBuffer) -> Result<()> {
    loop {
        if !event::poll(IDLE_POLL)? {
            continue;
        }
        let ev = event::read()?;
        let viewport = current_viewport();
        match map_event(&ev, viewport) {
            Some(GameEvent::Close) => return Ok(()),
            Some(GameEvent::PointerRelease(_)) => {}
            None => {
                if let Event::Resize(..) = ev {
                    term.invalidate();
                    canvas.present_into(viewport, fb);
                    term.show(fb)?;
                }
            }
        }
    }
}
