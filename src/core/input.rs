use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Keys the lessons care about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Num1,
    Num2,
    Num3,
    Num4,
    Escape,
    Other,
}

impl Key {
    /// Clip index selected by a number key
    pub fn clip_index(self) -> Option<usize> {
        match self {
            Key::Num1 => Some(0),
            Key::Num2 => Some(1),
            Key::Num3 => Some(2),
            Key::Num4 => Some(3),
            _ => None,
        }
    }
}

/// Discrete input the lessons react to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    KeyDown(Key),
    MouseDown,
}

/// Which inputs end a lesson
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuitPolicy {
    /// Closing the window, any key, or any mouse button
    AnyInput,
    /// Closing the window or Escape
    EscapeOnly,
    /// Only closing the window
    QuitOnly,
}

impl QuitPolicy {
    pub fn should_quit(self, event: InputEvent) -> bool {
        match (self, event) {
            (_, InputEvent::Quit) => true,
            (QuitPolicy::AnyInput, _) => true,
            (QuitPolicy::EscapeOnly, InputEvent::KeyDown(Key::Escape)) => true,
            _ => false,
        }
    }
}

/// Holds the current clip index and moves it on number keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipSelector {
    current: usize,
    count: usize,
}

impl ClipSelector {
    pub fn new(count: usize) -> Self {
        Self { current: 0, count }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    /// Apply an event; returns true when the selection changed
    ///
    /// Number keys past the end of the table are ignored.
    pub fn handle(&mut self, event: InputEvent) -> bool {
        let InputEvent::KeyDown(key) = event else {
            return false;
        };
        match key.clip_index() {
            Some(index) if index < self.count && index != self.current => {
                self.current = index;
                true
            }
            _ => false,
        }
    }
}

/// Translate a winit window event into a lesson input event
pub fn translate(event: &WindowEvent) -> Option<InputEvent> {
    match event {
        WindowEvent::CloseRequested => Some(InputEvent::Quit),
        WindowEvent::KeyboardInput {
            event:
                KeyEvent {
                    state: ElementState::Pressed,
                    physical_key,
                    repeat: false,
                    ..
                },
            ..
        } => Some(InputEvent::KeyDown(key_from_physical(*physical_key))),
        WindowEvent::MouseInput {
            state: ElementState::Pressed,
            ..
        } => Some(InputEvent::MouseDown),
        _ => None,
    }
}

/// Map a winit physical key to a lesson key
pub fn key_from_physical(key: PhysicalKey) -> Key {
    match key {
        PhysicalKey::Code(code) => key_from_code(code),
        PhysicalKey::Unidentified(_) => Key::Other,
    }
}

fn key_from_code(code: KeyCode) -> Key {
    match code {
        KeyCode::Digit1 | KeyCode::Numpad1 => Key::Num1,
        KeyCode::Digit2 | KeyCode::Numpad2 => Key::Num2,
        KeyCode::Digit3 | KeyCode::Numpad3 => Key::Num3,
        KeyCode::Digit4 | KeyCode::Numpad4 => Key::Num4,
        KeyCode::Escape => Key::Escape,
        _ => Key::Other,
    }
}
