//! Sup? entry point
//!
//! Headless native runner: no window, the autopilot plays and draw calls are
//! recorded instead of rasterised.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use sup_runner::consts::GAME_TITLE;
use sup_runner::platform::{Autopilot, FrameClock};
use sup_runner::renderer::DrawList;
use sup_runner::{Game, Settings};

#[derive(Debug, Parser)]
#[command(name = "sup-runner", about = "Run the Sup? game headless with the autopilot")]
struct Cli {
    /// JSON settings file (defaults are used when omitted)
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Frames to run before quitting
    #[arg(long, default_value_t = 3600)]
    frames: u64,

    /// Override the frame-rate cap from the settings
    #[arg(long)]
    fps: Option<u32>,
}

fn run(cli: Cli) -> sup_runner::Result<()> {
    let mut settings = Settings::load_or_default(cli.settings.as_deref())?;
    if let Some(fps) = cli.fps {
        settings.max_fps = fps;
        settings.validate()?;
    }

    log::info!(
        "{} starting at {} fps for {} frames",
        GAME_TITLE,
        settings.max_fps,
        cli.frames
    );

    let mut clock = FrameClock::new(settings.max_fps);
    let mut pilot =
        Autopilot::new(settings.key_bindings.clone()).with_frame_limit(cli.frames);
    let mut renderer = DrawList::new();
    let mut game = Game::new(settings);

    let frames = game.run(&mut clock, &mut pilot, &mut renderer)?;
    log::info!(
        "Stopped after {} frames in state {}, score {}",
        frames,
        game.manager().active(),
        game.manager().session().score
    );
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
