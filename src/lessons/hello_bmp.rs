use super::{Lesson, WindowSpec};
use crate::config::LessonConfig;
use crate::core::{Blit, Image, QuitPolicy, RenderTarget, Rgba};
use crate::error::Result;
use crate::resources::ResourceRoot;

const RESOURCE_DIR: &str = "Lesson2";

/// A single bitmap drawn at the top-left corner at its native size
pub struct HelloBmpLesson {
    image: Image,
    screen: (i32, i32),
    clear_color: Rgba,
}

impl HelloBmpLesson {
    pub fn load(root: &ResourceRoot, config: &LessonConfig) -> Result<Self> {
        let image = Image::load(root.asset(RESOURCE_DIR, "hello.bmp"))?;
        Ok(Self::new(image, config))
    }

    pub fn new(image: Image, config: &LessonConfig) -> Self {
        Self {
            image,
            screen: (config.screen_width, config.screen_height),
            clear_color: config.clear_color,
        }
    }
}

impl Lesson for HelloBmpLesson {
    fn window(&self) -> WindowSpec {
        WindowSpec {
            title: "Lesson 2".into(),
            position: (100, 100),
            width: self.screen.0,
            height: self.screen.1,
        }
    }

    fn quit_policy(&self) -> QuitPolicy {
        QuitPolicy::QuitOnly
    }

    fn draw(&self, target: &mut dyn RenderTarget) -> Result<()> {
        target.clear(self.clear_color)?;
        Blit::at(0, 0).draw(&self.image, target)
    }
}
