//! Terminal output.
//!
//! [`TerminalRenderer`] turns the terminal into the game window: alternate
//! screen, raw mode, mouse reporting and the "Memory" title while the game
//! runs, all undone by [`TerminalRenderer::exit`].
//!
//! Nearly every cell the canvas produces is a half block whose two colors are
//! the picture, and between frames only a few tiles change. A frame is
//! therefore written as runs of changed cells, and a color escape is only
//! written when the color differs from the one the terminal already has.
//! A full redraw is the same encoding with nothing to compare against.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::WINDOW_TITLE;

pub struct TerminalRenderer {
    out: io::Stdout,
    /// What the terminal currently shows; `None` forces a full redraw.
    shown: Option<FrameBuffer>,
    bytes: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            out: io::stdout(),
            shown: None,
            bytes: Vec::with_capacity(64 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.bytes.clear();
        self.bytes.queue(terminal::EnterAlternateScreen)?;
        self.bytes.queue(terminal::SetTitle(WINDOW_TITLE))?;
        self.bytes.queue(EnableMouseCapture)?;
        self.bytes.queue(cursor::Hide)?;
        self.bytes.queue(terminal::DisableLineWrap)?;
        self.flush()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.bytes.clear();
        self.bytes.queue(ResetColor)?;
        self.bytes.queue(SetAttribute(Attribute::Reset))?;
        self.bytes.queue(DisableMouseCapture)?;
        self.bytes.queue(terminal::EnableLineWrap)?;
        self.bytes.queue(cursor::Show)?;
        self.bytes.queue(terminal::LeaveAlternateScreen)?;
        self.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Redraw everything on the next [`show`](Self::show), e.g. after a resize
    /// scrambled the screen.
    pub fn invalidate(&mut self) {
        self.shown = None;
    }

    /// Write `frame` to the terminal.
    ///
    /// The renderer keeps the frame it just showed and hands its previous
    /// buffer back through `frame`, so the caller can draw the next frame into
    /// it without allocating.
    pub fn show(&mut self, frame: &mut FrameBuffer) -> Result<()> {
        self.bytes.clear();
        encode_frame(self.shown.as_ref(), frame, &mut self.bytes)?;
        self.flush()?;

        match &mut self.shown {
            Some(shown) => std::mem::swap(shown, frame),
            None => self.shown = Some(frame.clone()),
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.out.write_all(&self.bytes)?;
        self.out.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Colors and weight the terminal is set to while a frame is being written.
#[derive(Debug, Default)]
struct Pen {
    fg: Option<Rgb>,
    bg: Option<Rgb>,
    bold: bool,
}

impl Pen {
    fn apply(&mut self, style: CellStyle, out: &mut Vec<u8>) -> io::Result<()> {
        if style.bold != self.bold {
            let weight = if style.bold {
                Attribute::Bold
            } else {
                Attribute::NormalIntensity
            };
            out.queue(SetAttribute(weight))?;
            self.bold = style.bold;
        }
        if self.fg != Some(style.fg) {
            out.queue(SetForegroundColor(truecolor(style.fg)))?;
            self.fg = Some(style.fg);
        }
        if self.bg != Some(style.bg) {
            out.queue(SetBackgroundColor(truecolor(style.bg)))?;
            self.bg = Some(style.bg);
        }
        Ok(())
    }
}

fn truecolor(c: Rgb) -> Color {
    Color::Rgb {
        r: c.r,
        g: c.g,
        b: c.b,
    }
}

/// Encode the cells of `next` that differ from `prev`.
///
/// Without a `prev` of the same size the screen is cleared and every cell is
/// written.
fn encode_frame(prev: Option<&FrameBuffer>, next: &FrameBuffer, out: &mut Vec<u8>) -> io::Result<()> {
    let prev = prev.filter(|p| p.width() == next.width() && p.height() == next.height());
    if prev.is_none() {
        out.queue(terminal::Clear(terminal::ClearType::All))?;
    }

    let changed = |x: u16, y: u16| prev.map_or(true, |p| p.get(x, y) != next.get(x, y));
    let mut pen = Pen::default();

    for y in 0..next.height() {
        let mut x = 0;
        while x < next.width() {
            if !changed(x, y) {
                x += 1;
                continue;
            }
            out.queue(cursor::MoveTo(x, y))?;
            while x < next.width() && changed(x, y) {
                let cell = next.get(x, y).unwrap_or_default();
                pen.apply(cell.style, out)?;
                out.queue(Print(cell.ch))?;
                x += 1;
            }
        }
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fb::HALF_BLOCK;

    fn encode(prev: Option<&FrameBuffer>, next: &FrameBuffer) -> String {
        let mut out = Vec::new();
        encode_frame(prev, next, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn picture(w: u16, h: u16, top: Rgb, bottom: Rgb) -> FrameBuffer {
        let mut fb = FrameBuffer::new(w, h);
        for y in 0..h {
            for x in 0..w {
                fb.put_pixel_pair(x, y, top, bottom);
            }
        }
        fb
    }

    #[test]
    fn first_frame_clears_and_writes_every_cell() {
        let fb = picture(3, 2, Rgb::WHITE, Rgb::BLACK);
        let text = encode(None, &fb);
        assert!(text.contains("\x1b[2J"));
        assert_eq!(text.matches(HALF_BLOCK).count(), 6);
    }

    #[test]
    fn colors_are_written_only_when_they_change() {
        let mut fb = picture(4, 1, Rgb::new(10, 20, 30), Rgb::new(40, 50, 60));
        let text = encode(None, &fb);
        assert_eq!(text.matches("38;2;10;20;30").count(), 1);
        assert_eq!(text.matches("48;2;40;50;60").count(), 1);

        // Same background, new foreground: only the foreground is switched.
        fb.put_pixel_pair(3, 0, Rgb::new(1, 2, 3), Rgb::new(40, 50, 60));
        let text = encode(None, &fb);
        assert_eq!(text.matches("38;2;").count(), 2);
        assert_eq!(text.matches("48;2;").count(), 1);
    }

    #[test]
    fn bold_score_text_switches_weight_back() {
        let mut fb = picture(4, 1, Rgb::BLACK, Rgb::BLACK);
        let bold = CellStyle {
            bold: true,
            ..CellStyle::new(Rgb::WHITE, Rgb::BLACK)
        };
        fb.put_str(1, 0, "12", bold);

        let text = encode(None, &fb);
        assert_eq!(text.matches("\x1b[1m").count(), 1);
        assert_eq!(text.matches("\x1b[22m").count(), 1);
        assert!(text.find("12").unwrap() < text.find("\x1b[22m").unwrap());
    }

    #[test]
    fn unchanged_frame_writes_no_cells() {
        let fb = picture(3, 1, Rgb::WHITE, Rgb::BLACK);
        let text = encode(Some(&fb.clone()), &fb);
        assert!(!text.contains(HALF_BLOCK));
        assert!(!text.contains("\x1b[2J"));
    }

    #[test]
    fn adjacent_changes_are_one_run() {
        let prev = picture(5, 1, Rgb::BLACK, Rgb::BLACK);
        let mut next = prev.clone();
        for x in 1..=3 {
            next.put_char(x, 0, 'X', CellStyle::new(Rgb::WHITE, Rgb::BLACK));
        }

        let text = encode(Some(&prev), &next);
        // One cursor move to column 2 (1-based), then the whole run.
        assert_eq!(text.matches('H').count(), 1);
        assert!(text.contains("\x1b[1;2H"));
        assert!(text.contains("XXX"));
    }

    #[test]
    fn resized_frame_is_redrawn_in_full() {
        let prev = picture(2, 1, Rgb::WHITE, Rgb::BLACK);
        let next = picture(3, 1, Rgb::WHITE, Rgb::BLACK);
        let text = encode(Some(&prev), &next);
        assert!(text.contains("\x1b[2J"));
        assert_eq!(text.matches(HALF_BLOCK).count(), 3);
    }
}
