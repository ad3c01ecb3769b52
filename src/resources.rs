//! Locating the `res/` directory that ships next to the lesson binaries
//!
//! The expected layout is
//!
//! ```text
//! lessons/
//!   bin/      the executable
//!   res/
//!     Lesson1/
//!     Lesson2/
//! ```
//!
//! The root is resolved once during bootstrap and handed to each lesson.

use std::path::{Path, PathBuf};

use crate::error::{LessonError, Result};

/// Resolved `res/` directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRoot {
    root: PathBuf,
}

impl ResourceRoot {
    /// Use an explicit directory as the resource root
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Derive the root from the running executable's directory
    pub fn from_current_exe() -> Result<Self> {
        let exe = std::env::current_exe()
            .map_err(|e| LessonError::init("Getting resource path", e))?;
        let dir = exe
            .parent()
            .ok_or_else(|| LessonError::init("Getting resource path", "executable has no parent directory"))?;
        Ok(Self::from_exe_dir(dir))
    }

    /// Replace the last `bin` component of `exe_dir` (and everything after it) with `res`
    ///
    /// Without a `bin` component, `res` is appended to `exe_dir`.
    pub fn from_exe_dir(exe_dir: &Path) -> Self {
        let components: Vec<_> = exe_dir.components().collect();
        let base: PathBuf = match components.iter().rposition(|c| c.as_os_str() == "bin") {
            Some(pos) => components[..pos].iter().collect(),
            None => exe_dir.to_path_buf(),
        };
        Self::new(base.join("res"))
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Directory for one lesson's assets, e.g. `res/Lesson4`
    pub fn lesson_dir(&self, sub_dir: &str) -> PathBuf {
        if sub_dir.is_empty() {
            self.root.clone()
        } else {
            self.root.join(sub_dir)
        }
    }

    /// Path to a single asset inside a lesson directory
    pub fn asset(&self, sub_dir: &str, file: &str) -> PathBuf {
        self.lesson_dir(sub_dir).join(file)
    }
}

impl std::fmt::Display for ResourceRoot {
    /// Printed with a trailing separator, the way the path is used as a prefix
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.root.display(), std::path::MAIN_SEPARATOR)
    }
}
