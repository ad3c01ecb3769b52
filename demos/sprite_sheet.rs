/// Example walking through tiling, clip tables, and blits without a window
///
/// Every frame is rendered into an off-screen canvas and written as a PNG
/// under the system temp directory.

use std::path::PathBuf;

use sprite_lessons::config::LessonConfig;
use sprite_lessons::core::{Blit, Canvas, Image, InputEvent, Key, RenderTarget};
use sprite_lessons::lessons::{render_frame, EventLesson, Lesson, SpriteLesson};
use sprite_lessons::math::{tile_rects, ClipTable};
use sprite_lessons::Result;

fn output_dir() -> PathBuf {
    std::env::temp_dir().join("sprite-lessons-demo")
}

fn main() -> Result<()> {
    env_logger::init();
    let out = output_dir();
    std::fs::create_dir_all(&out).map_err(|e| sprite_lessons::LessonError::Device(e.to_string()))?;

    println!("Sprite Sheet Examples\n");

    // ========================================================================
    // Example 1: Tile rectangles
    // ========================================================================
    println!("Example 1: Tile Rectangles");
    println!("--------------------------");

    let tiles = tile_rects(640, 480, 40)?;
    println!("  {} tiles, first {:?}, last {:?}\n", tiles.len(), tiles[0], tiles[tiles.len() - 1]);

    // ========================================================================
    // Example 2: Clip table over a generated sheet
    // ========================================================================
    println!("Example 2: Clip Table");
    println!("---------------------");

    let colors = [[220, 50, 50, 255], [50, 200, 80, 255], [60, 90, 230, 255], [240, 210, 40, 255]];
    let sheet = Image::sheet(100, 100, 2, 2, &colors);
    let clips = ClipTable::new(sheet.width(), sheet.height(), 100, 100, 4)?;
    for (i, clip) in clips.iter().enumerate() {
        println!("  clip {} -> {:?}", i, clip);
    }
    println!();

    // ========================================================================
    // Example 3: Manual blits
    // ========================================================================
    println!("Example 3: Manual Blits");
    println!("-----------------------");

    let mut canvas = Canvas::new(320, 240);
    canvas.clear([20, 20, 20, 255])?;
    for (i, clip) in clips.iter().enumerate() {
        Blit::at(i as i32 * 80, 20).sized(60, 60).clipped(*clip).draw(&sheet, &mut canvas)?;
    }
    Blit::at(40, 120).draw(&sheet, &mut canvas)?;
    canvas.save_png(out.join("blits.png"))?;
    println!("  wrote blits.png\n");

    // ========================================================================
    // Example 4: Lesson frames
    // ========================================================================
    println!("Example 4: Lesson Frames");
    println!("------------------------");

    let config = LessonConfig::default();
    let background = Image::from_fn(40, 40, |x, y| {
        if (x / 20 + y / 20) % 2 == 0 {
            [70, 70, 90, 255]
        } else {
            [110, 110, 130, 255]
        }
    });
    let event = EventLesson::new(background, Image::solid(120, 80, colors[0]), &config)?;
    render_frame(&event)?.save_png(out.join("event.png"))?;
    println!("  wrote event.png");

    let mut sprite = SpriteLesson::new(sheet, &config)?;
    for key in [Key::Num1, Key::Num2, Key::Num3, Key::Num4] {
        sprite.handle(InputEvent::KeyDown(key));
        let name = format!("sprite_{}.png", sprite.current_clip() + 1);
        render_frame(&sprite)?.save_png(out.join(&name))?;
        println!("  wrote {}", name);
    }

    println!("\nOutput in {}", out.display());
    Ok(())
}
