use super::rect::Rect;
use crate::error::{LessonError, Result};

/// How clip cells are arranged on the sprite sheet
///
/// Cells fill a column top to bottom before moving right, so clip `i` sits at
/// column `i / rows_per_column`, row `i % rows_per_column`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ClipLayout {
    pub rows_per_column: i32,
}

impl Default for ClipLayout {
    fn default() -> Self {
        Self { rows_per_column: 2 }
    }
}

/// Fixed set of source rectangles over one sprite sheet
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClipTable {
    clips: Vec<Rect>,
}

impl ClipTable {
    /// Build `count` clips of `cell_width` x `cell_height` in the default two-row layout
    pub fn new(
        image_width: i32,
        image_height: i32,
        cell_width: i32,
        cell_height: i32,
        count: i32,
    ) -> Result<Self> {
        Self::with_layout(
            image_width,
            image_height,
            cell_width,
            cell_height,
            count,
            ClipLayout::default(),
        )
    }

    pub fn with_layout(
        image_width: i32,
        image_height: i32,
        cell_width: i32,
        cell_height: i32,
        count: i32,
        layout: ClipLayout,
    ) -> Result<Self> {
        if count <= 0 {
            return Err(LessonError::invalid(format!("clip count must be positive, got {}", count)));
        }
        if cell_width <= 0 || cell_height <= 0 {
            return Err(LessonError::invalid(format!(
                "clip cell must be positive, got {}x{}",
                cell_width, cell_height
            )));
        }
        if layout.rows_per_column <= 0 {
            return Err(LessonError::invalid(format!(
                "rows_per_column must be positive, got {}",
                layout.rows_per_column
            )));
        }

        let rows = layout.rows_per_column;
        let clips = (0..count)
            .map(|i| {
                let origin = (i / rows)
                    .checked_mul(cell_width)
                    .zip((i % rows).checked_mul(cell_height));
                let Some((x, y)) = origin else {
                    return Err(LessonError::invalid(format!(
                        "clip {} origin overflows with {}x{} cells",
                        i, cell_width, cell_height
                    )));
                };
                let clip = Rect::new(x, y, cell_width, cell_height);
                if clip.fits_within(image_width, image_height) {
                    Ok(clip)
                } else {
                    Err(LessonError::invalid(format!(
                        "clip {} at {:?} exceeds {}x{} image",
                        i, clip, image_width, image_height
                    )))
                }
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { clips })
    }

    pub fn len(&self) -> usize {
        self.clips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Rect> {
        self.clips.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rect> {
        self.clips.iter()
    }
}
