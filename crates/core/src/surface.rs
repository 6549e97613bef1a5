//! Drawing surface abstraction.
//!
//! Game objects never own a render target; the caller passes a `Surface` into
//! every `render` call. The terminal canvas implements it for real play and
//! [`RecordingSurface`] implements it for tests and benchmarks.

use crate::types::{Point, Rect, Rgb, Sprite};

/// A logical-pixel render target.
pub trait Surface {
    /// Fill the whole surface with one color.
    fn fill(&mut self, color: Rgb);

    /// Copy an image onto the surface with its top-left corner at `at`.
    fn blit(&mut self, sprite: Sprite, at: Point);

    /// Draw a rectangle outline `width` pixels thick, inside `rect`.
    fn stroke_rect(&mut self, rect: Rect, width: u16, color: Rgb);

    /// Draw a line of text with its top-left corner at `at`.
    fn draw_text(&mut self, at: Point, text: &str, color: Rgb);
}

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCommand {
    Fill(Rgb),
    Blit(Sprite, Point),
    StrokeRect(Rect, u16, Rgb),
    Text(Point, String, Rgb),
}

/// Headless surface that records draw calls in order.
#[derive(Debug, Default, Clone)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Sprites blitted so far, in draw order.
    pub fn blits(&self) -> impl Iterator<Item = (Sprite, Point)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Blit(s, p) => Some((*s, *p)),
            _ => None,
        })
    }

    /// Last text drawn, if any.
    pub fn last_text(&self) -> Option<&str> {
        self.commands.iter().rev().find_map(|c| match c {
            DrawCommand::Text(_, s, _) => Some(s.as_str()),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn fill(&mut self, color: Rgb) {
        self.commands.push(DrawCommand::Fill(color));
    }

    fn blit(&mut self, sprite: Sprite, at: Point) {
        self.commands.push(DrawCommand::Blit(sprite, at));
    }

    fn stroke_rect(&mut self, rect: Rect, width: u16, color: Rgb) {
        self.commands.push(DrawCommand::StrokeRect(rect, width, color));
    }

    fn draw_text(&mut self, at: Point, text: &str, color: Rgb) {
        self.commands
            .push(DrawCommand::Text(at, text.to_string(), color));
    }
}
