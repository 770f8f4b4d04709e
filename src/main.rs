//! RPS Arena entry point
//!
//! Parses the command line, builds the arena and runs the console loop.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use rps_arena::{AppError, Driver, Settings};

/// Command line arguments. Every flag is optional; with none the run
/// uses the built-in defaults and a wall-clock seed.
#[derive(Parser, Debug)]
#[command(name = "rps-arena")]
#[command(about = "Rock/Paper/Scissors agents bouncing around a box until one kind remains")]
struct Args {
    /// TOML settings file, applied before the flags below
    #[arg(long)]
    config: Option<PathBuf>,

    /// Random seed for reproducibility (default: wall clock)
    #[arg(long)]
    seed: Option<u64>,

    /// Arena width
    #[arg(long)]
    width: Option<f32>,

    /// Arena height
    #[arg(long)]
    height: Option<f32>,

    /// Stop after this many generations
    #[arg(long)]
    max_generations: Option<u64>,

    /// Print a frame every N generations
    #[arg(long)]
    render_interval: Option<u64>,

    /// Pause after each printed frame, in milliseconds
    #[arg(long)]
    frame_delay_ms: Option<u64>,
}

impl Args {
    fn settings(&self) -> Result<Settings, AppError> {
        let mut settings = match &self.config {
            Some(path) => Settings::load(path)?,
            None => Settings::default(),
        };
        if let Some(seed) = self.seed {
            settings.seed = Some(seed);
        }
        if let Some(width) = self.width {
            settings.width = width;
        }
        if let Some(height) = self.height {
            settings.height = height;
        }
        if let Some(max) = self.max_generations {
            settings.max_generations = max;
        }
        if let Some(interval) = self.render_interval {
            settings.render_interval = interval;
        }
        if let Some(delay) = self.frame_delay_ms {
            settings.frame_delay_ms = delay;
        }
        Ok(settings)
    }
}

fn run(args: &Args) -> Result<(), AppError> {
    let settings = args.settings()?;
    let stdout = io::stdout();
    let mut driver = Driver::new(settings, stdout.lock())?;
    driver.run()?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    log::debug!("{:?}", args);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
