//! Error taxonomy shared by the lessons and the drawing core

use thiserror::Error;

/// Errors produced while setting up, loading, or drawing a lesson
#[derive(Debug, Error)]
pub enum LessonError {
    /// Device, window, or renderer setup failed
    #[error("{operation} error: {message}")]
    Initialization { operation: String, message: String },

    /// An image could not be opened or decoded
    #[error("Load Texture error: {path}: {message}")]
    ResourceLoad { path: String, message: String },

    /// Tile, clip, or blit arguments violate a precondition
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A draw or present call failed at runtime
    #[error("device error: {0}")]
    Device(String),
}

impl LessonError {
    pub fn init(operation: impl Into<String>, message: impl ToString) -> Self {
        Self::Initialization {
            operation: operation.into(),
            message: message.to_string(),
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Whether the error ends the process with exit code 1
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Initialization { .. } | Self::ResourceLoad { .. })
    }
}

pub type Result<T> = std::result::Result<T, LessonError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialization_message_names_operation() {
        let err = LessonError::init("CreateWindow", "no display");
        assert_eq!(err.to_string(), "CreateWindow error: no display");
        assert!(err.is_fatal());
    }

    #[test]
    fn test_resource_load_is_fatal() {
        let err = LessonError::ResourceLoad {
            path: "res/Lesson4/image.png".into(),
            message: "not found".into(),
        };
        assert!(err.is_fatal());
        assert!(err.to_string().contains("image.png"));
    }

    #[test]
    fn test_runtime_errors_are_not_fatal() {
        assert!(!LessonError::Device("surface lost".into()).is_fatal());
        assert!(!LessonError::invalid("tile_size must be positive").is_fatal());
    }
}
