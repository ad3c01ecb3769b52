use sprite_lessons::core::{Blit, Canvas, Image, RenderTarget, Rgba};
use sprite_lessons::math::{ClipTable, Rect};
use sprite_lessons::{LessonError, Result};

const RED: Rgba = [255, 0, 0, 255];
const GREEN: Rgba = [0, 255, 0, 255];
const BLUE: Rgba = [0, 0, 255, 255];
const YELLOW: Rgba = [255, 255, 0, 255];
const BLACK: Rgba = [0, 0, 0, 255];

/// Records every copy instead of drawing it
#[derive(Default)]
struct RecordingTarget {
    copies: Vec<(Rect, Rect)>,
    presents: usize,
}

impl RenderTarget for RecordingTarget {
    fn dimensions(&self) -> (i32, i32) {
        (640, 480)
    }

    fn clear(&mut self, _color: Rgba) -> Result<()> {
        Ok(())
    }

    fn copy(&mut self, _image: &Image, src: Rect, dst: Rect) -> Result<()> {
        self.copies.push((src, dst));
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        self.presents += 1;
        Ok(())
    }
}

fn sheet() -> Image {
    Image::sheet(100, 100, 2, 2, &[RED, GREEN, BLUE, YELLOW])
}

// ============================================================================
// Sizing Rule Tests
// ============================================================================

#[test]
fn test_unclipped_blit_uses_native_size() {
    let image = Image::solid(37, 21, RED);
    let mut target = RecordingTarget::default();

    Blit::at(5, 6).draw(&image, &mut target).unwrap();

    assert_eq!(target.copies, vec![(Rect::new(0, 0, 37, 21), Rect::new(5, 6, 37, 21))]);
}

#[test]
fn test_clipped_blit_uses_clip_size() {
    let image = sheet();
    let clip = Rect::new(100, 0, 100, 100);
    let mut target = RecordingTarget::default();

    Blit::at(270, 190).clipped(clip).draw(&image, &mut target).unwrap();

    assert_eq!(target.copies, vec![(clip, Rect::new(270, 190, 100, 100))]);
}

#[test]
fn test_explicit_size_overrides_clip_size() {
    let image = sheet();
    let clip = Rect::new(0, 100, 100, 100);

    let dst = Blit::at(0, 0).sized(40, 40).clipped(clip).destination(&image).unwrap();

    assert_eq!(dst, Rect::new(0, 0, 40, 40));
}

#[test]
fn test_zero_size_draw_is_noop() {
    let image = sheet();
    let mut target = RecordingTarget::default();

    Blit::at(10, 10).sized(0, 50).draw(&image, &mut target).unwrap();
    Blit::at(10, 10).sized(50, 0).draw(&image, &mut target).unwrap();

    assert!(target.copies.is_empty());
}

#[test]
fn test_blit_never_presents() {
    let mut target = RecordingTarget::default();
    Blit::at(0, 0).draw(&sheet(), &mut target).unwrap();
    assert_eq!(target.presents, 0);
}

// ============================================================================
// Error Tests
// ============================================================================

#[test]
fn test_clip_outside_image_rejected() {
    let image = sheet();
    let mut target = RecordingTarget::default();

    let result = Blit::at(0, 0)
        .clipped(Rect::new(150, 150, 100, 100))
        .draw(&image, &mut target);

    assert!(matches!(result, Err(LessonError::InvalidArgument(_))));
    assert!(target.copies.is_empty());
}

#[test]
fn test_negative_size_rejected() {
    let result = Blit::at(0, 0).sized(-1, 10).draw(&sheet(), &mut RecordingTarget::default());
    assert!(matches!(result, Err(LessonError::InvalidArgument(_))));
}

// ============================================================================
// Pixel Output Tests
// ============================================================================

#[test]
fn test_each_clip_draws_its_cell() {
    let image = sheet();
    let clips = ClipTable::new(200, 200, 100, 100, 4).unwrap();
    // Column-major: red, green down the first column; blue, yellow the second
    let expected = [RED, GREEN, BLUE, YELLOW];

    for (clip, color) in clips.iter().zip(expected) {
        let mut canvas = Canvas::new(100, 100);
        Blit::at(0, 0).clipped(*clip).draw(&image, &mut canvas).unwrap();

        assert!(canvas.pixels().iter().all(|p| *p == color), "clip {:?}", clip);
    }
}

#[test]
fn test_redraw_is_idempotent() {
    let image = sheet();
    let blit = Blit::at(3, 4).clipped(Rect::new(100, 100, 100, 100));

    let mut once = Canvas::new(120, 120);
    blit.draw(&image, &mut once).unwrap();

    let mut twice = Canvas::new(120, 120);
    blit.draw(&image, &mut twice).unwrap();
    blit.draw(&image, &mut twice).unwrap();

    assert_eq!(once.pixels(), twice.pixels());
}

#[test]
fn test_scaled_blit_fills_destination() {
    let image = Image::from_fn(2, 2, |x, y| if (x + y) % 2 == 0 { RED } else { BLUE });
    let mut canvas = Canvas::new(8, 8);

    Blit::at(0, 0).sized(8, 8).draw(&image, &mut canvas).unwrap();

    assert_eq!(canvas.pixel(0, 0), Some(RED));
    assert_eq!(canvas.pixel(3, 3), Some(RED));
    assert_eq!(canvas.pixel(4, 0), Some(BLUE));
    assert_eq!(canvas.pixel(0, 7), Some(BLUE));
    assert_eq!(canvas.pixel(7, 7), Some(RED));
}

#[test]
fn test_offscreen_parts_are_dropped() {
    let image = Image::solid(10, 10, GREEN);
    let mut canvas = Canvas::new(10, 10);

    Blit::at(-5, 5).draw(&image, &mut canvas).unwrap();

    assert_eq!(canvas.pixel(0, 5), Some(GREEN));
    assert_eq!(canvas.pixel(4, 9), Some(GREEN));
    assert_eq!(canvas.pixel(5, 5), Some(BLACK));
    assert_eq!(canvas.pixel(0, 4), Some(BLACK));
}

#[test]
fn test_blit_near_i32_max_is_offscreen_noop() {
    let image = sheet();
    let mut canvas = Canvas::new(64, 64);

    Blit::at(i32::MAX - 5, 0).draw(&image, &mut canvas).unwrap();
    Blit::at(0, i32::MAX - 5).clipped(Rect::new(100, 100, 100, 100)).draw(&image, &mut canvas).unwrap();

    assert!(canvas.pixels().iter().all(|p| *p == BLACK));
}
