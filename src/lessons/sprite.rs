use super::{Control, Lesson, WindowSpec};
use crate::config::LessonConfig;
use crate::core::{Blit, ClipSelector, Image, InputEvent, QuitPolicy, RenderTarget, Rgba};
use crate::error::{LessonError, Result};
use crate::math::{centered, ClipLayout, ClipTable};
use crate::resources::ResourceRoot;

const RESOURCE_DIR: &str = "Lesson5";

/// One clip of a sprite sheet drawn centered; number keys pick the clip
pub struct SpriteLesson {
    sheet: Image,
    clips: ClipTable,
    selector: ClipSelector,
    pos: (i32, i32),
    screen: (i32, i32),
    clear_color: Rgba,
}

impl SpriteLesson {
    pub fn load(root: &ResourceRoot, config: &LessonConfig) -> Result<Self> {
        let sheet = Image::load(root.asset(RESOURCE_DIR, "image.png"))?;
        Self::new(sheet, config)
    }

    pub fn new(sheet: Image, config: &LessonConfig) -> Result<Self> {
        let clips = ClipTable::with_layout(
            sheet.width(),
            sheet.height(),
            config.clip_width,
            config.clip_height,
            config.clip_count,
            ClipLayout {
                rows_per_column: config.clip_rows_per_column,
            },
        )?;
        let pos = centered(
            config.screen_width,
            config.screen_height,
            config.clip_width,
            config.clip_height,
        );

        Ok(Self {
            sheet,
            selector: ClipSelector::new(clips.len()),
            clips,
            pos,
            screen: (config.screen_width, config.screen_height),
            clear_color: config.clear_color,
        })
    }

    pub fn current_clip(&self) -> usize {
        self.selector.current()
    }
}

impl Lesson for SpriteLesson {
    fn window(&self) -> WindowSpec {
        WindowSpec {
            title: "Lesson 3".into(),
            position: (0, 0),
            width: self.screen.0,
            height: self.screen.1,
        }
    }

    fn quit_policy(&self) -> QuitPolicy {
        QuitPolicy::EscapeOnly
    }

    fn handle(&mut self, event: InputEvent) -> Control {
        if self.quit_policy().should_quit(event) {
            return Control::Quit;
        }
        if self.selector.handle(event) {
            log::debug!("Selected clip {}", self.selector.current());
        }
        Control::Continue
    }

    fn draw(&self, target: &mut dyn RenderTarget) -> Result<()> {
        target.clear(self.clear_color)?;

        let index = self.selector.current();
        let clip = self
            .clips
            .get(index)
            .copied()
            .ok_or_else(|| LessonError::invalid(format!("clip {} not in table", index)))?;

        let (x, y) = self.pos;
        Blit::at(x, y).clipped(clip).draw(&self.sheet, target)
    }
}
