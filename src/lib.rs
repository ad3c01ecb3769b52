pub mod app;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod lessons;
pub mod math;
pub mod resources;

pub use error::{LessonError, Result};
