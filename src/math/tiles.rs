use super::rect::Rect;
use crate::error::{LessonError, Result};

/// Screen-sized grid of square tiles, addressed row-major
///
/// Integer division sizes the grid, so a remainder strip on the right or
/// bottom edge stays uncovered.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TileGrid {
    tile_size: i32,
    columns: i32,
    rows: i32,
    len: usize,
}

impl TileGrid {
    pub fn new(screen_width: i32, screen_height: i32, tile_size: i32) -> Result<Self> {
        if tile_size <= 0 {
            return Err(LessonError::invalid(format!(
                "tile_size must be positive, got {}",
                tile_size
            )));
        }
        if screen_width <= 0 || screen_height <= 0 {
            return Err(LessonError::invalid(format!(
                "screen size must be positive, got {}x{}",
                screen_width, screen_height
            )));
        }

        let columns = screen_width / tile_size;
        let rows = screen_height / tile_size;
        let len = (columns as usize).checked_mul(rows as usize).ok_or_else(|| {
            LessonError::invalid(format!("{}x{} tiles overflow the tile count", columns, rows))
        })?;

        Ok(Self {
            tile_size,
            columns,
            rows,
            len,
        })
    }

    pub fn tile_size(&self) -> i32 {
        self.tile_size
    }

    pub fn columns(&self) -> i32 {
        self.columns
    }

    pub fn rows(&self) -> i32 {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// (column, row) of tile `index`
    pub fn coords(&self, index: usize) -> Result<(i32, i32)> {
        if index >= self.len() {
            return Err(LessonError::invalid(format!(
                "tile index {} out of range for {} tiles",
                index,
                self.len()
            )));
        }
        let columns = self.columns as usize;
        Ok(((index % columns) as i32, (index / columns) as i32))
    }

    /// Inverse of [`TileGrid::coords`]
    pub fn index(&self, column: i32, row: i32) -> Result<usize> {
        if column < 0 || column >= self.columns || row < 0 || row >= self.rows {
            return Err(LessonError::invalid(format!(
                "tile ({}, {}) outside {}x{} grid",
                column, row, self.columns, self.rows
            )));
        }
        Ok(row as usize * self.columns as usize + column as usize)
    }

    /// Destination rectangle of tile `index`
    pub fn rect(&self, index: usize) -> Result<Rect> {
        let (column, row) = self.coords(index)?;
        Ok(self.rect_at(column, row))
    }

    /// All tile rectangles in draw order
    pub fn rects(&self) -> impl Iterator<Item = Rect> + '_ {
        (0..self.rows).flat_map(move |row| {
            (0..self.columns).map(move |column| self.rect_at(column, row))
        })
    }

    /// Area actually covered by the tiles
    pub fn covered(&self) -> Rect {
        Rect::new(0, 0, self.columns * self.tile_size, self.rows * self.tile_size)
    }

    fn rect_at(&self, column: i32, row: i32) -> Rect {
        Rect::new(
            column * self.tile_size,
            row * self.tile_size,
            self.tile_size,
            self.tile_size,
        )
    }
}

/// Convenience form: every tile rectangle for the given screen and tile size
pub fn tile_rects(screen_width: i32, screen_height: i32, tile_size: i32) -> Result<Vec<Rect>> {
    let grid = TileGrid::new(screen_width, screen_height, tile_size)?;
    Ok(grid.rects().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lesson_grid_dimensions() {
        let grid = TileGrid::new(640, 480, 40).unwrap();
        assert_eq!(grid.columns(), 16);
        assert_eq!(grid.rows(), 12);
        assert_eq!(grid.len(), 192);
    }

    #[test]
    fn test_first_and_seventeenth_tile() {
        let grid = TileGrid::new(640, 480, 40).unwrap();
        assert_eq!(grid.rect(0).unwrap(), Rect::new(0, 0, 40, 40));
        assert_eq!(grid.rect(17).unwrap(), Rect::new(40, 40, 40, 40));
    }

    #[test]
    fn test_row_major_order() {
        let rects = tile_rects(120, 80, 40).unwrap();
        let origins: Vec<(i32, i32)> = rects.iter().map(|r| (r.x, r.y)).collect();
        assert_eq!(
            origins,
            vec![(0, 0), (40, 0), (80, 0), (0, 40), (40, 40), (80, 40)]
        );
    }

    #[test]
    fn test_remainder_strip_not_covered() {
        let grid = TileGrid::new(650, 485, 40).unwrap();
        assert_eq!(grid.columns(), 16);
        assert_eq!(grid.rows(), 12);
        assert_eq!(grid.covered(), Rect::new(0, 0, 640, 480));
    }

    #[test]
    fn test_tile_larger_than_screen_yields_no_tiles() {
        let grid = TileGrid::new(30, 480, 40).unwrap();
        assert!(grid.is_empty());
        assert_eq!(grid.rects().count(), 0);
    }

    #[test]
    fn test_invalid_arguments() {
        assert!(matches!(TileGrid::new(640, 480, 0), Err(LessonError::InvalidArgument(_))));
        assert!(matches!(TileGrid::new(640, 480, -4), Err(LessonError::InvalidArgument(_))));
        assert!(matches!(TileGrid::new(0, 480, 40), Err(LessonError::InvalidArgument(_))));
        assert!(matches!(TileGrid::new(640, -1, 40), Err(LessonError::InvalidArgument(_))));
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_huge_screen_does_not_overflow() {
        let grid = TileGrid::new(i32::MAX, i32::MAX, 1).unwrap();
        assert_eq!(grid.len() as u64, (i32::MAX as u64) * (i32::MAX as u64));
        assert!(!grid.is_empty());

        let last = grid.len() - 1;
        assert_eq!(grid.coords(last).unwrap(), (i32::MAX - 1, i32::MAX - 1));
        assert_eq!(grid.index(i32::MAX - 1, i32::MAX - 1).unwrap(), last);
        assert_eq!(grid.rect(last).unwrap(), Rect::new(i32::MAX - 1, i32::MAX - 1, 1, 1));
        assert_eq!(grid.rects().next(), Some(Rect::new(0, 0, 1, 1)));
        assert_eq!(grid.covered(), Rect::new(0, 0, i32::MAX, i32::MAX));
    }

    #[test]
    fn test_out_of_range_index() {
        let grid = TileGrid::new(640, 480, 40).unwrap();
        assert!(grid.rect(192).is_err());
        assert!(grid.index(16, 0).is_err());
        assert!(grid.index(0, -1).is_err());
    }
}
