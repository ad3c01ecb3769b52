mod clips;
mod rect;
mod tiles;

pub use clips::{ClipLayout, ClipTable};
pub use rect::{centered, Rect};
pub use tiles::{tile_rects, TileGrid};
