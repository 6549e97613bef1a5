//! Image assets.
//!
//! The game needs nine bitmaps: `image0.bmp` (the question-mark cover) and
//! `image1.bmp` through `image8.bmp` (the faces). They are decoded once at
//! startup into plain RGB pixel arrays. Any missing or unreadable file is a
//! fatal [`AssetError`]; nothing is retried.

use std::path::{Path, PathBuf};

use thiserror::Error;

pub use tui_memory_types as types;

mod placeholder;

pub use placeholder::{placeholder_image, write_placeholder_set, PLACEHOLDER_SIZE};

use crate::types::{ImageId, Rgb, Sprite, IMAGE_COUNT, PAIR_COUNT};

/// Startup asset failures
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("missing image file: {}", .path.display())]
    Missing { path: PathBuf },

    #[error("failed to decode image '{}': {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("image '{}' is too large: {width}x{height}", .path.display())]
    TooLarge {
        path: PathBuf,
        width: u32,
        height: u32,
    },

    #[error("expected {expected} images, got {got}")]
    WrongCount { expected: usize, got: usize },

    #[error("failed to write image '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// File name for image `index` (`image0.bmp`, `image1.bmp`, ...)
pub fn image_file_name(index: usize) -> String {
    format!("image{}.bmp", index)
}

/// A decoded image, row-major RGB
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: u16,
    height: u16,
    pixels: Vec<Rgb>,
}

impl Bitmap {
    /// Build from raw pixels. Returns `None` if the pixel count does not
    /// match the dimensions.
    pub fn from_pixels(width: u16, height: u16, pixels: Vec<Rgb>) -> Option<Self> {
        if pixels.len() != width as usize * height as usize {
            return None;
        }
        Some(Self {
            width,
            height,
            pixels,
        })
    }

    /// A single-color image.
    pub fn solid(width: u16, height: u16, color: Rgb) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn pixel(&self, x: u16, y: u16) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y as usize * self.width as usize + x as usize])
    }

    /// Decode a bitmap file.
    pub fn load(path: &Path) -> Result<Self, AssetError> {
        if !path.is_file() {
            return Err(AssetError::Missing {
                path: path.to_path_buf(),
            });
        }

        let img = image::open(path)
            .map_err(|source| AssetError::Decode {
                path: path.to_path_buf(),
                source,
            })?
            .to_rgb8();
        let (w, h) = img.dimensions();
        let (Ok(width), Ok(height)) = (u16::try_from(w), u16::try_from(h)) else {
            return Err(AssetError::TooLarge {
                path: path.to_path_buf(),
                width: w,
                height: h,
            });
        };

        let pixels = img
            .pixels()
            .map(|p| Rgb::new(p.0[0], p.0[1], p.0[2]))
            .collect();
        Ok(Self {
            width,
            height,
            pixels,
        })
    }
}

/// The cover image plus the eight faces, indexed by [`ImageId`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSet {
    images: Vec<Bitmap>,
}

impl ImageSet {
    /// Load `image0.bmp` .. `image8.bmp` from `dir`.
    pub fn load_from_dir(dir: impl AsRef<Path>) -> Result<Self, AssetError> {
        let dir = dir.as_ref();
        let images = (0..IMAGE_COUNT)
            .map(|i| Bitmap::load(&dir.join(image_file_name(i))))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_bitmaps(images)
    }

    /// Wrap already decoded bitmaps; index 0 is the cover.
    pub fn from_bitmaps(images: Vec<Bitmap>) -> Result<Self, AssetError> {
        if images.len() != IMAGE_COUNT {
            return Err(AssetError::WrongCount {
                expected: IMAGE_COUNT,
                got: images.len(),
            });
        }
        Ok(Self { images })
    }

    pub fn get(&self, id: ImageId) -> Option<&Bitmap> {
        self.images.get(id.index())
    }

    fn sprite(&self, id: ImageId) -> Sprite {
        let bmp = &self.images[id.index()];
        Sprite::new(id, bmp.width, bmp.height)
    }

    pub fn cover(&self) -> Sprite {
        self.sprite(ImageId::COVER)
    }

    pub fn faces(&self) -> [Sprite; PAIR_COUNT] {
        ImageId::faces().map(|id| self.sprite(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    struct TempDir(PathBuf);

    impl TempDir {
        fn new(name: &str) -> Self {
            let path = std::env::temp_dir().join(format!(
                "tui-memory-assets-{}-{}",
                std::process::id(),
                name
            ));
            let _ = fs::remove_dir_all(&path);
            fs::create_dir_all(&path).unwrap();
            Self(path)
        }
    }

    impl Drop for TempDir {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.0);
        }
    }

    fn write_bmp(dir: &Path, index: usize, w: u32, h: u32, shade: u8) {
        let img = image::RgbImage::from_pixel(w, h, image::Rgb([shade, 0, 255 - shade]));
        img.save(dir.join(image_file_name(index))).unwrap();
    }

    #[test]
    fn test_file_names() {
        assert_eq!(image_file_name(0), "image0.bmp");
        assert_eq!(image_file_name(8), "image8.bmp");
    }

    #[test]
    fn test_load_full_set() {
        let tmp = TempDir::new("full");
        for i in 0..IMAGE_COUNT {
            write_bmp(&tmp.0, i, 20, 10, (i * 20) as u8);
        }

        let set = ImageSet::load_from_dir(&tmp.0).unwrap();
        assert_eq!(set.cover(), Sprite::new(ImageId::COVER, 20, 10));
        let faces = set.faces();
        assert_eq!(faces.len(), 8);
        assert_eq!(faces[7].id, ImageId::face(8).unwrap());

        let third = set.get(ImageId::face(3).unwrap()).unwrap();
        assert_eq!(third.pixel(0, 0), Some(Rgb::new(60, 0, 195)));
        assert_eq!(third.pixel(20, 0), None);
    }

    #[test]
    fn test_missing_file_is_reported() {
        let tmp = TempDir::new("missing");
        for i in 0..IMAGE_COUNT {
            if i != 5 {
                write_bmp(&tmp.0, i, 4, 4, 0);
            }
        }

        match ImageSet::load_from_dir(&tmp.0) {
            Err(AssetError::Missing { path }) => {
                assert!(path.ends_with("image5.bmp"));
            }
            other => panic!("expected Missing, got {:?}", other),
        }
    }

    #[test]
    fn test_garbage_file_fails_to_decode() {
        let tmp = TempDir::new("garbage");
        let path = tmp.0.join(image_file_name(0));
        fs::write(&path, b"not a bitmap").unwrap();

        let err = Bitmap::load(&path).unwrap_err();
        assert!(matches!(err, AssetError::Decode { .. }));
        assert!(err.to_string().contains("image0.bmp"));
    }

    #[test]
    fn test_wrong_count() {
        let err = ImageSet::from_bitmaps(vec![Bitmap::solid(1, 1, Rgb::BLACK)]).unwrap_err();
        assert!(matches!(
            err,
            AssetError::WrongCount {
                expected: 9,
                got: 1
            }
        ));
    }

    #[test]
    fn test_from_pixels_checks_length() {
        assert!(Bitmap::from_pixels(2, 2, vec![Rgb::WHITE; 3]).is_none());
        let bmp = Bitmap::from_pixels(2, 1, vec![Rgb::BLACK, Rgb::WHITE]).unwrap();
        assert_eq!(bmp.pixel(1, 0), Some(Rgb::WHITE));
    }
}
