use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use winit::event_loop::EventLoop;

use sprite_lessons::app::LessonApp;
use sprite_lessons::cli::Cli;
use sprite_lessons::config::LessonConfig;
use sprite_lessons::lessons::{render_frame, resource_path_report};
use sprite_lessons::resources::ResourceRoot;
use sprite_lessons::LessonError;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            log::error!("{:#}", e);
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = LessonConfig::load(cli.config.as_deref())?;
    let root = match cli.res_root {
        Some(path) => ResourceRoot::new(path),
        None => ResourceRoot::from_current_exe()?,
    };

    let Some(lesson) = cli.lesson.load(&root, &config)? else {
        println!("{}", resource_path_report(&root));
        return Ok(ExitCode::SUCCESS);
    };

    if let Some(path) = cli.snapshot {
        let canvas = render_frame(lesson.as_ref())?;
        canvas
            .save_png(&path)
            .with_context(|| format!("Failed to write snapshot: {:?}", path))?;
        log::info!("Wrote {:?}", path);
        return Ok(ExitCode::SUCCESS);
    }

    let event_loop = EventLoop::new().map_err(|e| LessonError::init("EventLoop", e))?;
    let mut app = LessonApp::new(lesson);
    event_loop.run_app(&mut app)?;

    Ok(app.exit_code())
}
