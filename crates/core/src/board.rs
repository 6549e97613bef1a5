//! Board module - the fixed 4x4 grid of tiles
//!
//! Tiles are stored in a flat array in row-major order (`row * 4 + col`).
//! The shape never changes after construction; only each tile's revealed
//! flag does. Tile positions are deterministic: `x = width * col`,
//! `y = height * row`, with the tile size taken from the cover image.

use crate::rng::{deal_pairs, SimpleRng};
use crate::surface::Surface;
use crate::tile::Tile;
use crate::types::{
    ImageId, Point, Sprite, TileIndex, BOARD_SIZE, PAIR_COUNT, TILE_COUNT,
};

/// The game board - 16 tiles, 8 faces, each face exactly twice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat array of tiles, row-major order (row * BOARD_SIZE + col)
    tiles: [Tile; TILE_COUNT],
}

impl Board {
    /// Build a fresh board with faces dealt in random pairs.
    pub fn initialize(cover: Sprite, faces: [Sprite; PAIR_COUNT], rng: &mut SimpleRng) -> Self {
        Self::from_layout(cover, deal_pairs(faces, rng))
    }

    /// Build a board with an explicit face layout (row-major).
    ///
    /// The layout is trusted as given; [`Board::initialize`] is the only
    /// constructor that guarantees the pairs invariant.
    pub fn from_layout(cover: Sprite, layout: [Sprite; TILE_COUNT]) -> Self {
        let tiles = std::array::from_fn(|i| {
            let (row, col) = Self::row_col(i);
            let x = cover.width as i32 * col as i32;
            let y = cover.height as i32 * row as i32;
            Tile::new(x, y, cover, layout[i])
        });
        Self { tiles }
    }

    /// Like [`Board::from_layout`], with every face the same size as the cover.
    pub fn from_faces(cover: Sprite, layout: [ImageId; TILE_COUNT]) -> Self {
        let sprites = layout.map(|id| Sprite::new(id, cover.width, cover.height));
        Self::from_layout(cover, sprites)
    }

    #[inline(always)]
    fn row_col(index: TileIndex) -> (usize, usize) {
        let n = BOARD_SIZE as usize;
        (index / n, index % n)
    }

    /// Row-major index of `(row, col)`, or `None` if off the board
    pub fn index_of(row: usize, col: usize) -> Option<TileIndex> {
        let n = BOARD_SIZE as usize;
        if row >= n || col >= n {
            return None;
        }
        Some(row * n + col)
    }

    pub fn tiles(&self) -> &[Tile; TILE_COUNT] {
        &self.tiles
    }

    pub fn tile(&self, index: TileIndex) -> Option<&Tile> {
        self.tiles.get(index)
    }

    /// Centre point of a tile, handy for synthesising clicks
    pub fn tile_center(&self, index: TileIndex) -> Option<Point> {
        self.tile(index).map(|t| {
            let r = t.rect();
            Point::new(r.x + r.width as i32 / 2, r.y + r.height as i32 / 2)
        })
    }

    /// Total board size in logical pixels
    pub fn size_px(&self) -> (u32, u32) {
        let cover = self.tiles[0].cover();
        let n = BOARD_SIZE as u32;
        (cover.width as u32 * n, cover.height as u32 * n)
    }

    /// Pure query: first covered tile (row-major) whose bounds contain `p`.
    pub fn find_tile_at(&self, p: Point) -> Option<TileIndex> {
        self.tiles.iter().position(|t| t.accepts(p))
    }

    /// Reveal a tile. Returns false if the index is invalid or it was
    /// already revealed.
    pub fn reveal(&mut self, index: TileIndex) -> bool {
        match self.tiles.get_mut(index) {
            Some(tile) => tile.reveal(),
            None => false,
        }
    }

    /// Cover a tile again.
    pub fn reset(&mut self, index: TileIndex) {
        if let Some(tile) = self.tiles.get_mut(index) {
            tile.reset();
        }
    }

    /// Reveal-on-click: find the tile under `p` and reveal it.
    pub fn hit_test(&mut self, p: Point) -> Option<TileIndex> {
        let index = self.find_tile_at(p)?;
        self.reveal(index).then_some(index)
    }

    pub fn revealed_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.is_revealed()).count()
    }

    /// Whether every tile is revealed (the win condition)
    pub fn all_revealed(&self) -> bool {
        self.tiles.iter().all(|t| t.is_revealed())
    }

    /// Whether two tiles show the same face
    pub fn is_pair(&self, a: TileIndex, b: TileIndex) -> bool {
        match (self.tile(a), self.tile(b)) {
            (Some(ta), Some(tb)) => a != b && ta.face() == tb.face(),
            _ => false,
        }
    }

    /// Face ids in row-major order
    pub fn faces(&self) -> [ImageId; TILE_COUNT] {
        std::array::from_fn(|i| self.tiles[i].face())
    }

    pub fn render(&self, surface: &mut dyn Surface) {
        for tile in &self.tiles {
            tile.render(surface);
        }
    }
}
