use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use crate::core::Rgba;
use crate::error::{LessonError, Result};

/// Screen, tiling, and sprite-sheet settings shared by the lessons
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LessonConfig {
    pub screen_width: i32,
    pub screen_height: i32,
    pub tile_size: i32,
    /// Size of one clip cell on the sprite sheet
    pub clip_width: i32,
    pub clip_height: i32,
    pub clip_count: i32,
    /// Clip cells per sheet column
    pub clip_rows_per_column: i32,
    /// Color the frame is cleared to before drawing
    pub clear_color: Rgba,
}

impl Default for LessonConfig {
    fn default() -> Self {
        Self {
            screen_width: 640,
            screen_height: 480,
            tile_size: 40,
            clip_width: 100,
            clip_height: 100,
            clip_count: 4,
            clip_rows_per_column: 2,
            clear_color: [0, 0, 0, 255],
        }
    }
}

impl LessonConfig {
    /// Read a TOML file; keys that are missing keep their defaults
    pub fn from_path(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        Self::from_toml(&contents).with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    /// Parse and validate TOML contents
    pub fn from_toml(contents: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Every size and count must be positive
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("tile_size", self.tile_size),
            ("clip_width", self.clip_width),
            ("clip_height", self.clip_height),
            ("clip_count", self.clip_count),
            ("clip_rows_per_column", self.clip_rows_per_column),
        ];
        match fields.iter().find(|(_, value)| *value <= 0) {
            Some((name, value)) => Err(LessonError::invalid(format!(
                "{} must be positive, got {}",
                name, value
            ))),
            None => Ok(()),
        }
    }

    /// Load `path` when given, otherwise use defaults
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::from_path(path),
            None => {
                log::debug!("No config file given, using default values");
                Ok(Self::default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_lesson_constants() {
        let config = LessonConfig::default();
        assert_eq!((config.screen_width, config.screen_height), (640, 480));
        assert_eq!(config.tile_size, 40);
        assert_eq!(config.clip_count, 4);
        assert_eq!(config.clip_rows_per_column, 2);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = LessonConfig::from_toml("tile_size = 32\nclear_color = [255, 255, 255, 255]\n").unwrap();
        assert_eq!(config.tile_size, 32);
        assert_eq!(config.clear_color, [255, 255, 255, 255]);
        assert_eq!(config.screen_width, 640);
    }

    #[test]
    fn test_bad_toml_is_error() {
        assert!(LessonConfig::from_toml("tile_size = \"big\"").is_err());
    }

    #[test]
    fn test_defaults_are_valid() {
        assert!(LessonConfig::default().validate().is_ok());
    }

    #[test]
    fn test_negative_screen_size_rejected() {
        let err = LessonConfig::from_toml("screen_width = -1").unwrap_err();
        assert!(err.to_string().contains("screen_width"));
        assert!(LessonConfig::from_toml("screen_height = -480").is_err());
    }

    #[test]
    fn test_zero_sizes_rejected() {
        for toml in [
            "screen_width = 0",
            "screen_height = 0",
            "tile_size = 0",
            "clip_width = 0",
            "clip_height = 0",
            "clip_count = 0",
            "clip_rows_per_column = 0",
        ] {
            let result = LessonConfig::from_toml(toml);
            assert!(result.is_err(), "{} should be rejected", toml);
        }
    }

    #[test]
    fn test_validation_error_is_invalid_argument() {
        let config = LessonConfig {
            clip_height: -5,
            ..LessonConfig::default()
        };
        assert!(matches!(config.validate(), Err(LessonError::InvalidArgument(_))));
    }

    #[test]
    fn test_invalid_file_is_error() {
        let path = std::env::temp_dir().join(format!("lessons-invalid-{}.toml", std::process::id()));
        std::fs::write(&path, "screen_width = -1\n").unwrap();
        let result = LessonConfig::load(Some(&path));
        std::fs::remove_file(&path).unwrap();
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_file_is_error() {
        assert!(LessonConfig::load(Some(Path::new("no/such/lessons.toml"))).is_err());
        assert_eq!(LessonConfig::load(None).unwrap(), LessonConfig::default());
    }
}
