//! speedctl — trace-driven motor-speed controller, host entry point.
//!
//! Wires the file adapters to the controller service:
//!
//! ```text
//!  switches.txt ─▶ TraceReader ─▶ SpeedController ─▶ SpeedLog ─▶ motor.txt
//!                                       │
//!                                       └──▶ LogEventSink (console)
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use speedctl::adapters::{LogEventSink, SpeedLog, TraceReader};
use speedctl::app::service::SpeedController;
use speedctl::config::SimConfig;

/// Replay a switch trace and log the resulting motor speeds.
#[derive(Debug, Parser)]
#[command(name = "speedctl", version, about)]
struct Cli {
    /// Switch trace to replay (overrides the config file).
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Speed log to write (overrides the config file).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Optional JSON configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => SimConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => SimConfig::default(),
    };
    if let Some(input) = cli.input {
        config.input_path = input;
    }
    if let Some(output) = cli.output {
        config.output_path = output;
    }

    info!(
        "replaying {} into {}",
        config.input_path.display(),
        config.output_path.display()
    );

    let mut switches = TraceReader::open(&config.input_path)
        .with_context(|| format!("opening trace {}", config.input_path.display()))?;
    let mut speed_log = SpeedLog::create(&config.output_path)
        .with_context(|| format!("creating speed log {}", config.output_path.display()))?;
    let mut events = LogEventSink::new();

    let mut controller = SpeedController::new();
    let summary = controller
        .run(&mut switches, &mut speed_log, &mut events)
        .context("run loop failed")?;
    speed_log.flush().context("flushing speed log")?;

    println!(
        "processed {} lines ({} skipped), final speed {}",
        summary.lines, summary.skipped, summary.final_speed
    );
    Ok(())
}
