//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are plain data with no external dependencies, so they can be
//! used by the game logic, the asset loader, the input mapping and the
//! terminal renderer alike.
//!
//! # Coordinates
//!
//! Everything the game logic sees is expressed in **logical pixels** on a
//! fixed 500×400 surface (the size of the game window). The
//! terminal layer maps logical pixels to character cells and back through
//! [`Viewport`].
//!
//! # Board Layout
//!
//! - **Size**: 4×4 tiles (16 tiles, 8 pairs)
//! - **Order**: row-major, index = `row * 4 + col`
//! - **Tile size**: taken from the cover image (`image0.bmp`)
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TARGET_FPS` | 60 | Frame rate cap |
//! | `FRAME_MS` | 16 | Frame budget in whole milliseconds |
//! | `MISMATCH_DELAY_MS` | 500 | Time a mismatched pair stays visible |
//!
//! # Examples
//!
//! ```
//! use tui_memory_types::{ImageId, Point, Rect, BOARD_SIZE, TILE_COUNT};
//!
//! let rect = Rect::new(0, 0, 100, 100);
//! assert!(rect.contains(Point::new(99, 0)));
//! assert!(!rect.contains(Point::new(100, 0)));
//!
//! assert!(ImageId::COVER.is_cover());
//! assert_eq!(ImageId::face(3).map(|id| id.index()), Some(3));
//!
//! assert_eq!(BOARD_SIZE, 4);
//! assert_eq!(TILE_COUNT, 16);
//! ```

/// Tiles per board side (4 columns, 4 rows)
pub const BOARD_SIZE: u8 = 4;

/// Total number of tiles on the board
pub const TILE_COUNT: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

/// Number of distinct face images (each appears exactly twice)
pub const PAIR_COUNT: usize = TILE_COUNT / 2;

/// Number of image assets: one cover plus the faces
pub const IMAGE_COUNT: usize = PAIR_COUNT + 1;

/// Logical surface width in pixels
pub const WINDOW_WIDTH: u16 = 500;

/// Logical surface height in pixels
pub const WINDOW_HEIGHT: u16 = 400;

/// Window (terminal) title
pub const WINDOW_TITLE: &str = "Memory";

/// Frame rate cap
pub const TARGET_FPS: u32 = 60;

/// Frame budget in whole milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 1000 / TARGET_FPS;

/// How long a mismatched pair stays revealed before flipping back
pub const MISMATCH_DELAY_MS: u64 = 500;

/// Tile border width in logical pixels
pub const BORDER_SIZE: u16 = 3;

/// Where the score is drawn (approximately top-right)
pub const SCORE_POSITION: Point = Point::new(440, 0);

/// Row-major index of a tile on the board (`0..TILE_COUNT`)
pub type TileIndex = usize;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A position on the logical surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in logical pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Whether `p` lies inside the rectangle.
    ///
    /// The right and bottom edges are exclusive, so adjacent tiles never both
    /// claim the same point.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x
            && p.y >= self.y
            && p.x < self.x + self.width as i32
            && p.y < self.y + self.height as i32
    }

    pub fn right(&self) -> i32 {
        self.x + self.width as i32
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height as i32
    }
}

/// Handle to one of the loaded images
///
/// - `0`: the question-mark cover (`image0.bmp`)
/// - `1..=8`: the face images (`image1.bmp` .. `image8.bmp`)
///
/// Two tiles form a pair exactly when their face ids are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ImageId(u8);

impl ImageId {
    pub const COVER: ImageId = ImageId(0);

    /// Face image `n` (1-based, `1..=PAIR_COUNT`)
    pub fn face(n: u8) -> Option<Self> {
        if n >= 1 && (n as usize) <= PAIR_COUNT {
            Some(ImageId(n))
        } else {
            None
        }
    }

    /// All face ids in ascending order.
    pub fn faces() -> [ImageId; PAIR_COUNT] {
        let mut out = [ImageId::COVER; PAIR_COUNT];
        for (i, slot) in out.iter_mut().enumerate() {
            *slot = ImageId(i as u8 + 1);
        }
        out
    }

    pub fn is_cover(&self) -> bool {
        self.0 == 0
    }

    /// Position in the asset list (also the number in the file name)
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

/// An image handle together with its pixel dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sprite {
    pub id: ImageId,
    pub width: u16,
    pub height: u16,
}

impl Sprite {
    pub const fn new(id: ImageId, width: u16, height: u16) -> Self {
        Self { id, width, height }
    }
}

/// Inputs the game loop understands
///
/// The terminal layer translates raw crossterm events into these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// The player asked to close the game
    Close,
    /// Primary pointer button released at a logical position
    PointerRelease(Point),
}

/// Terminal viewport dimensions and the cell <-> logical pixel mapping.
///
/// The whole logical surface is stretched over the viewport; each cell covers
/// `WINDOW_WIDTH / width` by `WINDOW_HEIGHT / height` logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Logical pixel at the centre of cell `(col, row)`.
    pub fn cell_to_logical(&self, col: u16, row: u16) -> Point {
        let w = self.width.max(1) as i64;
        let h = self.height.max(1) as i64;
        let x = ((2 * col as i64 + 1) * WINDOW_WIDTH as i64) / (2 * w);
        let y = ((2 * row as i64 + 1) * WINDOW_HEIGHT as i64) / (2 * h);
        Point::new(x as i32, y as i32)
    }

    /// Cell covering logical pixel `p`, or `None` if `p` is off the surface.
    pub fn logical_to_cell(&self, p: Point) -> Option<(u16, u16)> {
        if self.width == 0 || self.height == 0 {
            return None;
        }
        if p.x < 0 || p.y < 0 || p.x >= WINDOW_WIDTH as i32 || p.y >= WINDOW_HEIGHT as i32 {
            return None;
        }
        let col = (p.x as i64 * self.width as i64) / WINDOW_WIDTH as i64;
        let row = (p.y as i64 * self.height as i64) / WINDOW_HEIGHT as i64;
        Some((col as u16, row as u16))
    }
}
