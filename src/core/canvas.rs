use std::path::Path;

use super::image::{Image, Rgba};
use super::render_target::RenderTarget;
use crate::error::{LessonError, Result};
use crate::math::Rect;

/// CPU render target - RGBA pixel buffer the lessons draw into
#[derive(Clone, Debug)]
pub struct Canvas {
    /// Row-major RGBA pixels
    pixels: Vec<Rgba>,
    width: i32,
    height: i32,
    /// Frames finished with `present`
    presented: u64,
}

impl Canvas {
    /// Create new canvas cleared to opaque black
    pub fn new(width: i32, height: i32) -> Self {
        let (width, height) = (width.max(0), height.max(0));
        Self {
            pixels: vec![[0, 0, 0, 255]; width as usize * height as usize],
            width,
            height,
            presented: 0,
        }
    }

    /// Pixel at (x, y), or `None` outside the canvas
    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgba> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[(y * self.width + x) as usize])
    }

    /// Set single pixel, ignoring coordinates off the canvas
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Rgba) {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return;
        }
        let idx = (y * self.width + x) as usize;
        self.pixels[idx] = color;
    }

    /// Fill a rectangle, clipped to the canvas
    pub fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        let Some(visible) = rect.intersection(&self.bounds()) else {
            return;
        };
        let (x0, x1) = (visible.x as usize, (visible.x + visible.width) as usize);
        for y in visible.y..visible.y + visible.height {
            let row = (y * self.width) as usize;
            self.pixels[row + x0..row + x1].fill(color);
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// Pixels as a flat RGBA byte slice, ready for texture upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Number of frames presented so far
    pub fn frames_presented(&self) -> u64 {
        self.presented
    }

    /// Write the current pixels as a PNG file
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        ::image::save_buffer(
            path,
            self.as_bytes(),
            self.width as u32,
            self.height as u32,
            ::image::ExtendedColorType::Rgba8,
        )
        .map_err(|e| LessonError::Device(format!("writing {}: {}", path.display(), e)))
    }
}

impl RenderTarget for Canvas {
    fn dimensions(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    fn clear(&mut self, color: Rgba) -> Result<()> {
        self.pixels.fill(color);
        Ok(())
    }

    /// Nearest-neighbour copy; destination pixels off the canvas are skipped
    fn copy(&mut self, image: &Image, src: Rect, dst: Rect) -> Result<()> {
        let Some(visible) = dst.intersection(&self.bounds()) else {
            return Ok(());
        };

        // Offsets into dst can exceed i32 when dst starts far off-canvas
        for y in visible.y..visible.y + visible.height {
            let dy = y as i64 - dst.y as i64;
            let sy = src.y + (dy * src.height as i64 / dst.height as i64) as i32;
            for x in visible.x..visible.x + visible.width {
                let dx = x as i64 - dst.x as i64;
                let sx = src.x + (dx * src.width as i64 / dst.width as i64) as i32;
                let color = image.pixel(sx, sy).ok_or_else(|| {
                    LessonError::Device(format!("sample ({}, {}) outside source image", sx, sy))
                })?;
                self.pixels[(y * self.width + x) as usize] = color;
            }
        }

        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        self.presented += 1;
        Ok(())
    }
}
