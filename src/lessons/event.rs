use super::{Lesson, WindowSpec};
use crate::config::LessonConfig;
use crate::core::{Blit, Image, QuitPolicy, RenderTarget, Rgba};
use crate::error::Result;
use crate::math::{centered, TileGrid};
use crate::resources::ResourceRoot;

const RESOURCE_DIR: &str = "Lesson4";

/// Background tiled over the screen with an image centered on top
pub struct EventLesson {
    background: Image,
    image: Image,
    grid: TileGrid,
    image_pos: (i32, i32),
    screen: (i32, i32),
    clear_color: Rgba,
}

impl EventLesson {
    pub fn load(root: &ResourceRoot, config: &LessonConfig) -> Result<Self> {
        let background = Image::load(root.asset(RESOURCE_DIR, "background.png"))?;
        let image = Image::load(root.asset(RESOURCE_DIR, "image.png"))?;
        Self::new(background, image, config)
    }

    pub fn new(background: Image, image: Image, config: &LessonConfig) -> Result<Self> {
        let grid = TileGrid::new(config.screen_width, config.screen_height, config.tile_size)?;
        let image_pos = centered(
            config.screen_width,
            config.screen_height,
            image.width(),
            image.height(),
        );
        log::debug!(
            "Tiling {}x{} tiles of {}px",
            grid.columns(),
            grid.rows(),
            grid.tile_size()
        );

        Ok(Self {
            background,
            image,
            grid,
            image_pos,
            screen: (config.screen_width, config.screen_height),
            clear_color: config.clear_color,
        })
    }
}

impl Lesson for EventLesson {
    fn window(&self) -> WindowSpec {
        WindowSpec {
            title: "Lesson 3".into(),
            position: (0, 0),
            width: self.screen.0,
            height: self.screen.1,
        }
    }

    fn quit_policy(&self) -> QuitPolicy {
        QuitPolicy::AnyInput
    }

    fn draw(&self, target: &mut dyn RenderTarget) -> Result<()> {
        target.clear(self.clear_color)?;

        for tile in self.grid.rects() {
            Blit::into_rect(tile).draw(&self.background, target)?;
        }

        let (x, y) = self.image_pos;
        Blit::at(x, y).draw(&self.image, target)
    }
}
