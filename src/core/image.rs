//! Decoded, immutable RGBA images

use std::path::Path;

use crate::error::{LessonError, Result};

/// One RGBA8 pixel
pub type Rgba = [u8; 4];

/// Decoded pixel data with a fixed native size
///
/// Images never change after construction. Dropping one releases its pixels,
/// so whichever lesson loaded it owns it until teardown.
#[derive(Clone, Debug, PartialEq)]
pub struct Image {
    width: i32,
    height: i32,
    pixels: Vec<Rgba>,
}

impl Image {
    /// Wrap a row-major pixel buffer
    pub fn from_pixels(width: i32, height: i32, pixels: Vec<Rgba>) -> Result<Self> {
        if width < 0 || height < 0 {
            return Err(LessonError::invalid(format!(
                "image size must be non-negative, got {}x{}",
                width, height
            )));
        }
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(LessonError::invalid(format!(
                "expected {} pixels for {}x{} image, got {}",
                expected,
                width,
                height,
                pixels.len()
            )));
        }
        Ok(Self { width, height, pixels })
    }

    /// Image filled with one color
    pub fn solid(width: i32, height: i32, color: Rgba) -> Self {
        let count = width.max(0) as usize * height.max(0) as usize;
        Self {
            width: width.max(0),
            height: height.max(0),
            pixels: vec![color; count],
        }
    }

    /// Build an image by evaluating `f(x, y)` for every pixel
    pub fn from_fn(width: i32, height: i32, mut f: impl FnMut(i32, i32) -> Rgba) -> Self {
        let (width, height) = (width.max(0), height.max(0));
        let mut pixels = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(f(x, y));
            }
        }
        Self { width, height, pixels }
    }

    /// Sprite sheet of `columns` x `rows` cells, each cell a distinct flat color
    pub fn sheet(cell_width: i32, cell_height: i32, columns: i32, rows: i32, colors: &[Rgba]) -> Self {
        Self::from_fn(cell_width * columns, cell_height * rows, |x, y| {
            let cell = (x / cell_width) * rows + (y / cell_height);
            if colors.is_empty() {
                [0, 0, 0, 255]
            } else {
                colors[cell as usize % colors.len()]
            }
        })
    }

    /// Decode a PNG or BMP file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let decoded = ::image::open(path)
            .map_err(|e| LessonError::ResourceLoad {
                path: path.display().to_string(),
                message: e.to_string(),
            })?
            .to_rgba8();

        let (width, height) = decoded.dimensions();
        let pixels = decoded.pixels().map(|p| p.0).collect();
        log::debug!("Loaded {} ({}x{})", path.display(), width, height);

        Ok(Self {
            width: width as i32,
            height: height as i32,
            pixels,
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn dimensions(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    /// Pixel at (x, y), or `None` outside the image
    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgba> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[(y * self.width + x) as usize])
    }

    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// Pixels as a flat RGBA byte slice
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }
}
