use std::process::ExitCode;
use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    dpi::{LogicalPosition, LogicalSize},
    event::WindowEvent,
    event_loop::ActiveEventLoop,
    window::{Window, WindowId},
};

use crate::core::{translate, RenderTarget, WindowTarget};
use crate::error::{LessonError, Result};
use crate::lessons::{Control, Lesson};

/// Drives one lesson: poll events, draw, present
///
/// Fields drop in declaration order, so the lesson's images go before the
/// renderer and the renderer before the window.
pub struct LessonApp {
    lesson: Box<dyn Lesson>,
    target: Option<WindowTarget>,
    window: Option<Arc<Window>>,
    failure: Option<LessonError>,
}

impl LessonApp {
    pub fn new(lesson: Box<dyn Lesson>) -> Self {
        Self {
            lesson,
            target: None,
            window: None,
            failure: None,
        }
    }

    /// 0 after a normal quit, 1 if setup failed
    pub fn exit_status(&self) -> u8 {
        match &self.failure {
            Some(_) => 1,
            None => 0,
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.exit_status())
    }

    pub fn failure(&self) -> Option<&LessonError> {
        self.failure.as_ref()
    }

    fn create_window(&self, event_loop: &ActiveEventLoop) -> Result<(Arc<Window>, WindowTarget)> {
        let spec = self.lesson.window();
        let window = event_loop
            .create_window(
                Window::default_attributes()
                    .with_title(spec.title.as_str())
                    .with_position(LogicalPosition::new(spec.position.0, spec.position.1))
                    .with_inner_size(LogicalSize::new(spec.width, spec.height))
                    .with_resizable(false),
            )
            .map_err(|e| LessonError::init("CreateWindow", e))?;
        let window = Arc::new(window);

        let target = WindowTarget::new(window.clone(), spec.width, spec.height)?;
        Ok((window, target))
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: LessonError) {
        log::error!("{}", err);
        self.failure = Some(err);
        event_loop.exit();
    }

    fn redraw(&mut self) {
        let Some(target) = self.target.as_mut() else {
            return;
        };

        let frame = self
            .lesson
            .draw(&mut *target)
            .and_then(|()| target.present());

        // Nothing to recover at runtime; report and try again next frame
        if let Err(e) = frame {
            log::error!("Render error: {}", e);
        }
    }
}

impl ApplicationHandler for LessonApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        match self.create_window(event_loop) {
            Ok((window, target)) => {
                log::info!("Opened \"{}\"", self.lesson.window().title);
                self.window = Some(window);
                self.target = Some(target);
            }
            Err(e) => self.fail(event_loop, e),
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        if let Some(input) = translate(&event) {
            if self.lesson.handle(input) == Control::Quit {
                log::debug!("Quitting on {:?}", input);
                event_loop.exit();
                return;
            }
        }

        match event {
            WindowEvent::Resized(size) => {
                if let Some(target) = self.target.as_mut() {
                    target.resize(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}
