// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

use crate::lessons::LessonKind;

#[derive(Parser, Debug, Clone)]
#[command(name = "lessons")]
#[command(about = "2D sprite and tiling lessons", long_about = None)]
pub struct Cli {
    /// Lesson to run
    #[arg(value_enum)]
    pub lesson: LessonKind,

    /// TOML file overriding screen, tile, and clip settings
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Resource directory to use instead of the one next to the executable
    #[arg(long = "res-root")]
    pub res_root: Option<PathBuf>,

    /// Render a single frame to this PNG file instead of opening a window
    #[arg(long)]
    pub snapshot: Option<PathBuf>,
}
