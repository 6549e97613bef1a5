//! Tile module - one grid cell of the board
//!
//! A tile owns its bounds, its cover and face sprites, and whether it is
//! revealed. Exactly one sprite is drawn at a time and `revealed` alone
//! decides which one.

use crate::surface::Surface;
use crate::types::{ImageId, Point, Rect, Rgb, Sprite, BORDER_SIZE};

/// A single board tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    rect: Rect,
    cover: Sprite,
    face: Sprite,
    revealed: bool,
}

impl Tile {
    /// Create a covered tile at `(x, y)`; the tile takes the cover image's size.
    pub fn new(x: i32, y: i32, cover: Sprite, face: Sprite) -> Self {
        Self {
            rect: Rect::new(x, y, cover.width, cover.height),
            cover,
            face,
            revealed: false,
        }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn cover(&self) -> Sprite {
        self.cover
    }

    /// Face image id, used to compare two tiles for a pair
    pub fn face(&self) -> ImageId {
        self.face.id
    }

    pub fn face_sprite(&self) -> Sprite {
        self.face
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn contains(&self, p: Point) -> bool {
        self.rect.contains(p)
    }

    /// Whether a click at `p` would select this tile
    pub fn accepts(&self, p: Point) -> bool {
        self.contains(p) && !self.revealed
    }

    /// Reveal the tile if `p` hits it and it is still covered.
    ///
    /// Returns true when the selection was accepted.
    pub fn try_reveal(&mut self, p: Point) -> bool {
        if !self.accepts(p) {
            return false;
        }
        self.revealed = true;
        true
    }

    /// Reveal unconditionally. Returns false if it was already revealed.
    pub fn reveal(&mut self) -> bool {
        let changed = !self.revealed;
        self.revealed = true;
        changed
    }

    /// Flip back to the cover
    pub fn reset(&mut self) {
        self.revealed = false;
    }

    /// The sprite that is currently showing
    pub fn visible(&self) -> Sprite {
        if self.revealed {
            self.face
        } else {
            self.cover
        }
    }

    pub fn render(&self, surface: &mut dyn Surface) {
        surface.blit(self.visible(), Point::new(self.rect.x, self.rect.y));
        surface.stroke_rect(self.rect, BORDER_SIZE, Rgb::BLACK);
    }
}
