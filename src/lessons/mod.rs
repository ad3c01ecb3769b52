//! The lesson scenes the binary can run
//!
//! Every windowed lesson loads its images up front, reacts to input through
//! its own quit policy, and redraws the full frame on each redraw.

mod event;
mod hello_bmp;
mod sprite;

pub use event::EventLesson;
pub use hello_bmp::HelloBmpLesson;
pub use sprite::SpriteLesson;

use crate::config::LessonConfig;
use crate::core::{Canvas, InputEvent, QuitPolicy, RenderTarget};
use crate::error::Result;
use crate::resources::ResourceRoot;

/// What the event loop should do after an input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

/// Window placement and caption for a lesson
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowSpec {
    pub title: String,
    pub position: (i32, i32),
    pub width: i32,
    pub height: i32,
}

/// A windowed lesson
pub trait Lesson {
    fn window(&self) -> WindowSpec;

    fn quit_policy(&self) -> QuitPolicy;

    /// React to one input event
    fn handle(&mut self, event: InputEvent) -> Control {
        if self.quit_policy().should_quit(event) {
            Control::Quit
        } else {
            Control::Continue
        }
    }

    /// Draw one full frame; presenting is left to the caller
    fn draw(&self, target: &mut dyn RenderTarget) -> Result<()>;
}

/// Lessons selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum LessonKind {
    /// Print the resolved resource directory and exit
    ResourcePath,
    /// Show a single BMP image
    HelloBmp,
    /// Tiled background with a centered image; any input quits
    Event,
    /// Sprite sheet clips selected with keys 1-4; Escape quits
    Sprite,
}

impl LessonKind {
    /// Whether the lesson opens a window
    pub fn is_windowed(self) -> bool {
        !matches!(self, LessonKind::ResourcePath)
    }

    /// Load a windowed lesson's resources
    ///
    /// Returns `None` for lessons that never open a window.
    pub fn load(self, root: &ResourceRoot, config: &LessonConfig) -> Result<Option<Box<dyn Lesson>>> {
        let lesson: Box<dyn Lesson> = match self {
            LessonKind::ResourcePath => return Ok(None),
            LessonKind::HelloBmp => Box::new(HelloBmpLesson::load(root, config)?),
            LessonKind::Event => Box::new(EventLesson::load(root, config)?),
            LessonKind::Sprite => Box::new(SpriteLesson::load(root, config)?),
        };
        Ok(Some(lesson))
    }
}

/// Render one frame of `lesson` off-screen
pub fn render_frame(lesson: &dyn Lesson) -> Result<Canvas> {
    let spec = lesson.window();
    let mut canvas = Canvas::new(spec.width, spec.height);
    lesson.draw(&mut canvas)?;
    canvas.present()?;
    Ok(canvas)
}

/// Line printed by the resource-path lesson
pub fn resource_path_report(root: &ResourceRoot) -> String {
    format!("Resource path is: {}", root)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_path_is_not_windowed() {
        assert!(!LessonKind::ResourcePath.is_windowed());
        assert!(LessonKind::Sprite.is_windowed());

        let root = ResourceRoot::new("/nowhere/res");
        let loaded = LessonKind::ResourcePath.load(&root, &LessonConfig::default()).unwrap();
        assert!(loaded.is_none());
    }

    #[cfg(unix)]
    #[test]
    fn test_resource_path_report() {
        let root = ResourceRoot::new("/opt/lessons/res");
        assert_eq!(resource_path_report(&root), "Resource path is: /opt/lessons/res/");
    }

    #[test]
    fn test_missing_resources_fail_to_load() {
        let root = ResourceRoot::new("/nowhere/res");
        let result = LessonKind::Event.load(&root, &LessonConfig::default());
        assert!(matches!(result, Err(e) if e.is_fatal()));
    }
}
