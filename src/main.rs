mod app;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use oceansweep::config::Config;
use oceansweep::engine::Engine;
use oceansweep::session::Phase;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Parameter file (TOML). Built-in defaults are used when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for debris placement; overrides the config file.
    #[arg(long)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Open the simulation window.
    Run,

    /// Simulate whole days without a window and log each day summary.
    Headless {
        #[arg(long, default_value_t = 1)]
        days: u32,
    },
}

fn main() {
    env_logger::Builder::new()
        .format_timestamp_millis()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    if let Err(error) = run_cli() {
        log::error!("{error:#?}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<()> {
    let args = Cli::parse();
    log::info!("{args:#?}");

    let cfg = match &args.config {
        Some(file) => Config::from_file(file).context("failed to load config")?,
        None => Config::default(),
    };
    log::info!("{cfg:#?}");

    let seed = args.seed.or(cfg.seed);
    let engine = Engine::new(cfg, seed).context("failed to construct engine")?;

    match args.command {
        Command::Run => app::run_windowed(engine),
        Command::Headless { days } => run_headless(engine, days),
    }

    Ok(())
}

fn run_headless(mut engine: Engine, days: u32) {
    // Fixed time step at the configured frame rate, no wall-clock pacing.
    let dt = 1.0 / engine.cfg().cycle.max_fps;
    let mut completed = 0;

    while completed < days && engine.phase() != Phase::Stopped {
        engine.step(dt);

        if engine.phase() == Phase::DayComplete {
            if let Some(summary) = engine.summary() {
                for line in summary.report_lines() {
                    log::info!("{line}");
                }
            }

            completed += 1;
            engine.acknowledge();
        }
    }
}
