use super::image::{Image, Rgba};
use crate::error::Result;
use crate::math::Rect;

/// Something that accepts draw commands and can present a finished frame
pub trait RenderTarget {
    /// Target size in pixels
    fn dimensions(&self) -> (i32, i32);

    /// Fill the whole target with one color
    fn clear(&mut self, color: Rgba) -> Result<()>;

    /// Copy `src` of `image` into `dst`, scaling when the sizes differ
    ///
    /// Both rectangles are already validated: `src` lies inside the image and
    /// `dst` has a positive area.
    fn copy(&mut self, image: &Image, src: Rect, dst: Rect) -> Result<()>;

    /// Show the completed frame
    fn present(&mut self) -> Result<()>;
}
