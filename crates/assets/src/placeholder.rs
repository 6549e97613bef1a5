//! Procedural stand-in images.
//!
//! Writes a complete `image0.bmp` .. `image8.bmp` set so the game can be
//! played without the real artwork. The cover is a checkered tile with a
//! question mark; each face is a distinct color with its own white shape.

use std::path::{Path, PathBuf};

use image::{Rgb as Px, RgbImage};

use crate::types::IMAGE_COUNT;
use crate::{image_file_name, AssetError};

/// Edge length of the generated images (4 tiles = 400px, the window height)
pub const PLACEHOLDER_SIZE: u32 = 100;

const PALETTE: [[u8; 3]; 8] = [
    [220, 60, 60],
    [240, 150, 40],
    [230, 210, 60],
    [70, 180, 80],
    [60, 170, 200],
    [70, 90, 210],
    [160, 80, 200],
    [210, 90, 160],
];

/// 5x7 bitmap of a question mark, one byte per row, low 5 bits used.
const QUESTION: [u8; 7] = [0b01110, 0b10001, 0b00001, 0b00110, 0b00100, 0b00000, 0b00100];

/// Build placeholder image `index` (0 = cover).
pub fn placeholder_image(index: usize) -> RgbImage {
    let n = PLACEHOLDER_SIZE;
    if index == 0 {
        return cover_image(n);
    }

    let [r, g, b] = PALETTE[(index - 1) % PALETTE.len()];
    RgbImage::from_fn(n, n, |x, y| {
        if in_shape(index, x as i32 - n as i32 / 2, y as i32 - n as i32 / 2, n as i32 / 4) {
            Px([255, 255, 255])
        } else {
            Px([r, g, b])
        }
    })
}

fn cover_image(n: u32) -> RgbImage {
    let glyph_scale = n / 10;
    let glyph_x = (n - 5 * glyph_scale) / 2;
    let glyph_y = (n - 7 * glyph_scale) / 2;

    RgbImage::from_fn(n, n, |x, y| {
        let in_glyph = x >= glyph_x && y >= glyph_y && {
            let gx = (x - glyph_x) / glyph_scale;
            let gy = (y - glyph_y) / glyph_scale;
            gx < 5 && gy < 7 && QUESTION[gy as usize] & (1 << (4 - gx)) != 0
        };
        if in_glyph {
            Px([250, 250, 250])
        } else if ((x / 10) + (y / 10)) % 2 == 0 {
            Px([40, 50, 90])
        } else {
            Px([55, 65, 110])
        }
    })
}

/// A different white shape per face, centred on (0, 0) with radius `r`.
fn in_shape(index: usize, dx: i32, dy: i32, r: i32) -> bool {
    match index % 4 {
        0 => dx * dx + dy * dy <= r * r,
        1 => dx.abs() + dy.abs() <= r,
        2 => dx.abs() <= r && dy.abs() <= r,
        _ => (dy.abs() <= r && dx.abs() <= r / 3) || (dx.abs() <= r && dy.abs() <= r / 3),
    }
}

/// Write the full placeholder set into `dir`, creating it if needed.
pub fn write_placeholder_set(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>, AssetError> {
    let dir = dir.as_ref();
    std::fs::create_dir_all(dir).map_err(|source| AssetError::Write {
        path: dir.to_path_buf(),
        source: source.into(),
    })?;

    (0..IMAGE_COUNT)
        .map(|i| {
            let path = dir.join(image_file_name(i));
            placeholder_image(i)
                .save(&path)
                .map_err(|source| AssetError::Write {
                    path: path.clone(),
                    source,
                })?;
            Ok(path)
        })
        .collect()
}
