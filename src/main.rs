use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use torus_snake::game::GameConfig;
use torus_snake::modes::{HeadlessMode, PlayMode};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "torus_snake")]
#[command(version, about = "Snake on a wrap-around board")]
struct Cli {
    /// Game mode
    #[arg(long, default_value = "play")]
    mode: Mode,

    /// JSON config file; missing fields keep their defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Ticks per second
    #[arg(long)]
    tps: Option<u32>,

    /// Seed for food placement and reset directions
    #[arg(long)]
    seed: Option<u64>,

    /// Number of ticks to simulate in headless mode
    #[arg(long, default_value = "1000")]
    ticks: u64,

    /// Keep the configured tick rate in headless mode
    #[arg(long)]
    paced: bool,

    /// Write logs to this file (play mode logs nowhere otherwise)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Clone, ValueEnum)]
enum Mode {
    /// Play snake with keyboard controls
    Play,
    /// Simulate with random input, no terminal UI
    Headless,
}

fn init_tracing(cli: &Cli) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match (&cli.log_file, &cli.mode) {
        (Some(path), _) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        // The terminal belongs to the UI
        (None, Mode::Play) => {}
        (None, Mode::Headless) => builder.with_writer(std::io::stderr).init(),
    }
    Ok(())
}

fn load_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = match &cli.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    if let Some(tps) = cli.tps {
        config.ticks_per_second = tps;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    config.validate()?;
    Ok(config)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli)?;

    let config = load_config(&cli).context("Failed to load configuration")?;
    tracing::debug!(?config, "configuration loaded");

    // Dispatch to appropriate mode
    match cli.mode {
        Mode::Play => {
            let mut play_mode = PlayMode::new(config)?;
            let summary = play_mode.run().await?;
            println!(
                "Best length {} over {} ticks",
                summary.best_length, summary.ticks
            );
        }
        Mode::Headless => {
            let mut headless_mode = HeadlessMode::new(config, cli.ticks, cli.paced)?;
            headless_mode.run().await?;
        }
    }

    Ok(())
}
