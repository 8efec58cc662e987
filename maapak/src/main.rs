//! Maapak - console measuring session
//!
//! Polls the configured orientation source every `update_interval_ms`, reads
//! commands from stdin, and prints the measurement screen whenever it changes.
//!
//! ```text
//! $ maapak --distance 5
//! aim 30
//! capture
//! aim -30
//! capture
//! tilt -30° | distance 5 meters | captured [30°, -30°] | length 5.774 meters
//! ```

use clap::Parser;
use maapak::config::{AppConfig, SourceKind};
use maapak::console::{ConsoleSink, spawn_reader};
use maapak::events::{EventLoop, create_event_channel};
use maapak::sensors::{SensorSubscription, create_source};
use maapak::{DistancePolicy, MeasurementSession, Result, StandoffDistance};
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

/// Default config file looked up in the working directory
const DEFAULT_CONFIG: &str = "maapak.toml";

/// Estimate object length from two tilt sightings
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path (defaults to ./maapak.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Starting standoff distance in meters (1-10)
    #[arg(short, long)]
    distance: Option<i64>,

    /// Replay a JSON-lines recording instead of the simulated sensor
    #[arg(short, long)]
    replay: Option<PathBuf>,

    /// How a held pair reacts to a distance change
    #[arg(short, long, value_enum)]
    policy: Option<DistancePolicy>,

    /// Sensor polling interval in milliseconds
    #[arg(long)]
    interval_ms: Option<u64>,

    /// Write the effective configuration to this path and exit
    #[arg(long)]
    write_config: Option<PathBuf>,
}

fn load_config(args: &Args) -> Result<AppConfig> {
    let mut config = match &args.config {
        Some(path) => AppConfig::load(path)?,
        None if Path::new(DEFAULT_CONFIG).exists() => AppConfig::load(DEFAULT_CONFIG)?,
        None => AppConfig::default(),
    };

    if let Some(meters) = args.distance {
        config.measurement.default_distance_m = meters;
    }
    if let Some(path) = &args.replay {
        config.sensor.source = SourceKind::Replay;
        config.sensor.replay_path = Some(path.clone());
    }
    if let Some(policy) = args.policy {
        config.measurement.distance_policy = policy;
    }
    if let Some(interval) = args.interval_ms {
        config.sensor.update_interval_ms = interval;
    }

    config.validate()?;
    Ok(config)
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = load_config(&args)?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.logging.level))
        .init();

    log::info!("Maapak v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(path) = &args.write_config {
        config.to_file(path)?;
        log::info!("Configuration written to {}", path.display());
        return Ok(());
    }

    let distance: StandoffDistance = config.measurement.distance()?;
    log::info!(
        "Sensor: {:?} every {} ms, distance: {}, policy: {:?}",
        config.sensor.source,
        config.sensor.update_interval_ms,
        distance,
        config.measurement.distance_policy
    );

    let (events_tx, events_rx) = create_event_channel();

    let (source, aim) = create_source(&config.sensor)?;
    let subscription =
        SensorSubscription::spawn(source, config.sensor.update_interval(), events_tx.clone())?;

    // Detached: a blocked stdin read must not hold up shutdown
    let _reader = spawn_reader(BufReader::new(io::stdin()), events_tx, aim)?;

    let session = MeasurementSession::new(distance, config.measurement.distance_policy);
    let mut event_loop = EventLoop::new(session, events_rx);
    let mut sink = ConsoleSink::new(io::stdout());
    let outcome = event_loop.run(&mut sink);

    // Sensor subscription is released whatever the loop's outcome
    drop(subscription);

    outcome?;
    log::info!("Maapak stopped");
    Ok(())
}
