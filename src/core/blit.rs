//! Copying images, whole or clipped, onto a render target
//!
//! A [`Blit`] names where to draw and, optionally, how large to draw and
//! which part of the image to take. The destination size follows one rule:
//! an explicit size wins, then the clip's size, then the image's native size.

use super::image::Image;
use super::render_target::RenderTarget;
use crate::error::{LessonError, Result};
use crate::math::Rect;

/// One draw of an image onto a render target
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct Blit {
    /// Destination top-left corner
    pub x: i32,
    pub y: i32,
    /// Drawn size; the source is scaled to fit
    pub size: Option<(i32, i32)>,
    /// Source region of the image; the whole image when absent
    pub clip: Option<Rect>,
}

impl Blit {
    /// Draw the whole image at native size
    pub fn at(x: i32, y: i32) -> Self {
        Self { x, y, size: None, clip: None }
    }

    /// Draw at an explicit size
    pub fn sized(mut self, width: i32, height: i32) -> Self {
        self.size = Some((width, height));
        self
    }

    /// Restrict the source to `clip`
    pub fn clipped(mut self, clip: Rect) -> Self {
        self.clip = Some(clip);
        self
    }

    /// Draw into an explicit destination rectangle
    pub fn into_rect(dst: Rect) -> Self {
        Self::at(dst.x, dst.y).sized(dst.width, dst.height)
    }

    /// Source region for `image`, validated against its bounds
    pub fn source(&self, image: &Image) -> Result<Rect> {
        match self.clip {
            Some(clip) if clip.fits_within(image.width(), image.height()) => Ok(clip),
            Some(clip) => Err(LessonError::invalid(format!(
                "clip {:?} exceeds {}x{} image",
                clip,
                image.width(),
                image.height()
            ))),
            None => Ok(Rect::new(0, 0, image.width(), image.height())),
        }
    }

    /// Destination rectangle after applying the sizing rule
    pub fn destination(&self, image: &Image) -> Result<Rect> {
        let (width, height) = match (self.size, self.clip) {
            (Some(size), _) => size,
            (None, Some(clip)) => (clip.width, clip.height),
            (None, None) => image.dimensions(),
        };

        if width < 0 || height < 0 {
            return Err(LessonError::invalid(format!(
                "destination size must be non-negative, got {}x{}",
                width, height
            )));
        }

        Ok(Rect::new(self.x, self.y, width, height))
    }

    /// Issue the draw
    ///
    /// Zero-area destinations succeed without touching the target.
    pub fn draw(&self, image: &Image, target: &mut dyn RenderTarget) -> Result<()> {
        let src = self.source(image)?;
        let dst = self.destination(image)?;

        if dst.is_empty() || src.is_empty() {
            return Ok(());
        }

        target.copy(image, src, dst)
    }
}
