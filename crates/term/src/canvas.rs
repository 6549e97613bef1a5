//! Canvas: the logical 500x400 drawing surface.
//!
//! The game draws into a full-resolution RGB raster exactly as it would into
//! a window. [`Canvas::present_into`] then samples that raster into terminal
//! cells, two vertical samples per cell via half blocks, and lays text runs
//! on top as real characters so the score stays legible at any size.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::assets::ImageSet;
use crate::core::Surface;
use crate::fb::{CellStyle, FrameBuffer};
use crate::types::{Point, Rect, Rgb, Sprite, Viewport, WINDOW_HEIGHT, WINDOW_WIDTH};

const W: usize = WINDOW_WIDTH as usize;
const H: usize = WINDOW_HEIGHT as usize;

#[derive(Debug, Clone, PartialEq, Eq)]
struct TextRun {
    at: Point,
    text: String,
    color: Rgb,
}

pub struct Canvas<'a> {
    images: &'a ImageSet,
    pixels: Vec<Rgb>,
    texts: Vec<TextRun>,
}

impl<'a> Canvas<'a> {
    pub fn new(images: &'a ImageSet) -> Self {
        Self {
            images,
            pixels: vec![Rgb::BLACK; W * H],
            texts: Vec::new(),
        }
    }

    #[inline(always)]
    fn idx(x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= W as i32 || y >= H as i32 {
            return None;
        }
        Some(y as usize * W + x as usize)
    }

    pub fn pixel(&self, p: Point) -> Option<Rgb> {
        Self::idx(p.x, p.y).map(|i| self.pixels[i])
    }

    fn set_pixel(&mut self, x: i32, y: i32, color: Rgb) {
        if let Some(i) = Self::idx(x, y) {
            self.pixels[i] = color;
        }
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgb) {
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = (x + w).min(W as i32);
        let y1 = (y + h).min(H as i32);
        for py in y0..y1 {
            for px in x0..x1 {
                self.pixels[py as usize * W + px as usize] = color;
            }
        }
    }

    /// Text drawn since the last fill, in draw order.
    pub fn texts(&self) -> impl Iterator<Item = (Point, &str)> + '_ {
        self.texts.iter().map(|t| (t.at, t.text.as_str()))
    }

    /// Sample the raster into `fb`, resized to the viewport.
    pub fn present_into(&self, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        if viewport.width == 0 || viewport.height == 0 {
            return;
        }

        let cols = viewport.width as usize;
        let half_rows = viewport.height as usize * 2;
        for row in 0..viewport.height {
            for col in 0..viewport.width {
                let x = ((2 * col as usize + 1) * W) / (2 * cols);
                let top = ((4 * row as usize + 1) * H) / (2 * half_rows);
                let bottom = ((4 * row as usize + 3) * H) / (2 * half_rows);
                fb.put_pixel_pair(
                    col,
                    row,
                    self.pixels[top * W + x],
                    self.pixels[bottom * W + x],
                );
            }
        }

        for run in &self.texts {
            if let Some((col, row)) = viewport.logical_to_cell(run.at) {
                let style = CellStyle {
                    bold: true,
                    ..CellStyle::new(run.color, Rgb::BLACK)
                };
                // Shift left if the text would run off the right edge.
                let len = run.text.chars().count() as u16;
                let col = col.min(viewport.width.saturating_sub(len));
                fb.put_str(col, row, &run.text, style);
            }
        }
    }

    pub fn present(&self, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.present_into(viewport, &mut fb);
        fb
    }
}

impl Surface for Canvas<'_> {
    fn fill(&mut self, color: Rgb) {
        self.pixels.fill(color);
        self.texts.clear();
    }

    fn blit(&mut self, sprite: Sprite, at: Point) {
        let Some(bmp) = self.images.get(sprite.id) else {
            return;
        };
        for y in 0..bmp.height() {
            for x in 0..bmp.width() {
                if let Some(c) = bmp.pixel(x, y) {
                    self.set_pixel(at.x + x as i32, at.y + y as i32, c);
                }
            }
        }
    }

    fn stroke_rect(&mut self, rect: Rect, width: u16, color: Rgb) {
        let t = (width as i32)
            .min(rect.width as i32 / 2 + 1)
            .min(rect.height as i32 / 2 + 1);
        let (w, h) = (rect.width as i32, rect.height as i32);
        self.fill_rect(rect.x, rect.y, w, t, color);
        self.fill_rect(rect.x, rect.bottom() - t, w, t, color);
        self.fill_rect(rect.x, rect.y, t, h, color);
        self.fill_rect(rect.right() - t, rect.y, t, h, color);
    }

    fn draw_text(&mut self, at: Point, text: &str, color: Rgb) {
        self.texts.push(TextRun {
            at,
            text: text.to_string(),
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::Bitmap;
    use crate::types::{ImageId, IMAGE_COUNT};

    fn images() -> ImageSet {
        let bitmaps = (0..IMAGE_COUNT)
            .map(|i| Bitmap::solid(100, 100, Rgb::new(i as u8 * 10, 50, 50)))
            .collect();
        ImageSet::from_bitmaps(bitmaps).unwrap()
    }

    #[test]
    fn blit_copies_and_clips() {
        let images = images();
        let mut canvas = Canvas::new(&images);
        let face = Sprite::new(ImageId::face(2).unwrap(), 100, 100);
        canvas.blit(face, Point::new(450, 350));

        assert_eq!(canvas.pixel(Point::new(450, 350)), Some(Rgb::new(20, 50, 50)));
        assert_eq!(canvas.pixel(Point::new(499, 399)), Some(Rgb::new(20, 50, 50)));
        assert_eq!(canvas.pixel(Point::new(449, 350)), Some(Rgb::BLACK));
    }

    #[test]
    fn stroke_rect_draws_border_only() {
        let images = images();
        let mut canvas = Canvas::new(&images);
        canvas.fill(Rgb::WHITE);
        canvas.stroke_rect(Rect::new(0, 0, 100, 100), 3, Rgb::BLACK);

        assert_eq!(canvas.pixel(Point::new(0, 0)), Some(Rgb::BLACK));
        assert_eq!(canvas.pixel(Point::new(2, 50)), Some(Rgb::BLACK));
        assert_eq!(canvas.pixel(Point::new(97, 50)), Some(Rgb::BLACK));
        assert_eq!(canvas.pixel(Point::new(50, 99)), Some(Rgb::BLACK));
        assert_eq!(canvas.pixel(Point::new(3, 3)), Some(Rgb::WHITE));
        assert_eq!(canvas.pixel(Point::new(96, 96)), Some(Rgb::WHITE));
    }

    #[test]
    fn fill_clears_text() {
        let images = images();
        let mut canvas = Canvas::new(&images);
        canvas.draw_text(Point::new(440, 0), "12", Rgb::WHITE);
        assert_eq!(canvas.texts().count(), 1);
        canvas.fill(Rgb::BLACK);
        assert_eq!(canvas.texts().count(), 0);
    }

    #[test]
    fn present_samples_top_and_bottom_halves() {
        let images = images();
        let mut canvas = Canvas::new(&images);
        canvas.fill(Rgb::BLACK);
        // Top half of the surface white, bottom half black.
        canvas.fill_rect(0, 0, 500, 200, Rgb::WHITE);

        // One cell covering everything: top sample at y=100, bottom at y=300.
        let fb = canvas.present(Viewport::new(1, 1));
        let cell = fb.get(0, 0).unwrap();
        assert_eq!(cell.style.fg, Rgb::WHITE);
        assert_eq!(cell.style.bg, Rgb::BLACK);
    }

    #[test]
    fn present_places_text_at_mapped_cell() {
        let images = images();
        let mut canvas = Canvas::new(&images);
        canvas.fill(Rgb::BLACK);
        canvas.draw_text(Point::new(440, 0), "42", Rgb::WHITE);

        let fb = canvas.present(Viewport::new(50, 20));
        // 440 * 50 / 500 = 44
        assert_eq!(fb.get(44, 0).unwrap().ch, '4');
        assert_eq!(fb.get(45, 0).unwrap().ch, '2');
        assert_eq!(fb.get(44, 0).unwrap().style.fg, Rgb::WHITE);
    }

    #[test]
    fn present_keeps_long_text_on_screen() {
        let images = images();
        let mut canvas = Canvas::new(&images);
        canvas.draw_text(Point::new(490, 0), "1234", Rgb::WHITE);

        let fb = canvas.present(Viewport::new(50, 20));
        assert!(fb.row_text(0).ends_with("1234"));
    }

    #[test]
    fn present_into_zero_viewport() {
        let images = images();
        let canvas = Canvas::new(&images);
        let fb = canvas.present(Viewport::new(0, 0));
        assert_eq!((fb.width(), fb.height()), (0, 0));
    }
}
