use sprite_lessons::math::{tile_rects, Rect, TileGrid};
use sprite_lessons::LessonError;

// ============================================================================
// Tile Coverage Tests
// ============================================================================

#[test]
fn test_lesson_screen_produces_192_tiles() {
    let rects = tile_rects(640, 480, 40).unwrap();
    assert_eq!(rects.len(), 16 * 12);
    assert_eq!(rects[0], Rect::new(0, 0, 40, 40));
    assert_eq!(rects[17], Rect::new(40, 40, 40, 40));
    assert_eq!(rects[191], Rect::new(600, 440, 40, 40));
}

#[test]
fn test_tiles_have_uniform_size() {
    for rect in tile_rects(640, 480, 40).unwrap() {
        assert_eq!((rect.width, rect.height), (40, 40));
    }
}

#[test]
fn test_tiles_do_not_overlap() {
    let rects = tile_rects(200, 120, 40).unwrap();
    for (i, a) in rects.iter().enumerate() {
        for b in &rects[i + 1..] {
            assert!(!a.overlaps(b), "{:?} overlaps {:?}", a, b);
        }
    }
}

#[test]
fn test_tiles_cover_grid_area_exactly() {
    let screens = [(640, 480, 40), (650, 485, 40), (100, 30, 7), (33, 33, 11)];

    for (width, height, tile) in screens {
        let grid = TileGrid::new(width, height, tile).unwrap();
        let rects: Vec<Rect> = grid.rects().collect();
        let covered = grid.covered();

        // Every pixel inside the covered area belongs to exactly one tile
        for y in 0..covered.height {
            for x in 0..covered.width {
                let hits = rects.iter().filter(|r| r.contains_point(x, y)).count();
                assert_eq!(hits, 1, "pixel ({}, {}) covered {} times", x, y, hits);
            }
        }

        let total: i64 = rects.iter().map(|r| r.area()).sum();
        assert_eq!(total, covered.area());
    }
}

#[test]
fn test_remainder_strip_left_uncovered() {
    let grid = TileGrid::new(650, 485, 40).unwrap();
    let rects: Vec<Rect> = grid.rects().collect();

    assert!(rects.iter().all(|r| r.right() <= 640 && r.bottom() <= 480));
    assert!(!rects.iter().any(|r| r.contains_point(645, 10)));
    assert!(!rects.iter().any(|r| r.contains_point(10, 482)));
}

// ============================================================================
// Addressing Tests
// ============================================================================

#[test]
fn test_index_round_trip() {
    let grid = TileGrid::new(640, 480, 40).unwrap();
    for i in 0..grid.len() {
        let (column, row) = grid.coords(i).unwrap();
        assert_eq!((column, row), ((i % 16) as i32, (i / 16) as i32));
        assert_eq!(grid.index(column, row).unwrap(), i);
    }
}

#[test]
fn test_rect_matches_iterator_order() {
    let grid = TileGrid::new(320, 240, 40).unwrap();
    for (i, rect) in grid.rects().enumerate() {
        assert_eq!(grid.rect(i).unwrap(), rect);
    }
}

#[test]
fn test_tile_wider_than_screen_gives_zero_tiles() {
    let rects = tile_rects(30, 480, 40).unwrap();
    assert!(rects.is_empty());

    let grid = TileGrid::new(640, 30, 40).unwrap();
    assert_eq!(grid.len(), 0);
}

#[test]
fn test_invalid_tile_size() {
    assert!(matches!(tile_rects(640, 480, 0), Err(LessonError::InvalidArgument(_))));
    assert!(matches!(tile_rects(640, 480, -40), Err(LessonError::InvalidArgument(_))));
}

#[test]
fn test_invalid_screen_size() {
    assert!(matches!(tile_rects(0, 480, 40), Err(LessonError::InvalidArgument(_))));
    assert!(matches!(tile_rects(640, -480, 40), Err(LessonError::InvalidArgument(_))));
}
