//! Configuration for Maapak
//!
//! Loads configuration from a TOML file. Every key has a default, so an empty
//! file (or no file at all) yields a working mock-sensor session at 5 m.

use crate::error::{Error, Result};
use crate::session::DistancePolicy;
use crate::types::StandoffDistance;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Top-level application configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub sensor: SensorConfig,
    #[serde(default)]
    pub measurement: MeasurementConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where orientation samples come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Simulated device aimed from the console
    #[default]
    Mock,
    /// JSON-lines recording
    Replay,
}

/// Sensor supplier configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SensorConfig {
    /// Sample source
    #[serde(default)]
    pub source: SourceKind,

    /// Polling interval in milliseconds (default: 100)
    #[serde(default = "default_update_interval_ms")]
    pub update_interval_ms: u64,

    /// Recording to play back when `source = "replay"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replay_path: Option<PathBuf>,

    /// Simulated device settings
    #[serde(default)]
    pub mock: MockSensorConfig,
}

fn default_update_interval_ms() -> u64 {
    100
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self {
            source: SourceKind::default(),
            update_interval_ms: default_update_interval_ms(),
            replay_path: None,
            mock: MockSensorConfig::default(),
        }
    }
}

impl SensorConfig {
    pub fn update_interval(&self) -> Duration {
        Duration::from_millis(self.update_interval_ms)
    }
}

/// Simulated orientation sensor settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MockSensorConfig {
    /// Tilt the simulated device starts at (degrees, default: 90 = lying flat)
    #[serde(default = "default_initial_aim_deg")]
    pub initial_aim_deg: f64,

    /// Gaussian noise per axis, in units of one gravity (default: 0)
    #[serde(default)]
    pub noise_stddev: f64,

    /// Noise seed; 0 draws from entropy
    #[serde(default = "default_random_seed")]
    pub random_seed: u64,
}

fn default_initial_aim_deg() -> f64 {
    90.0
}
fn default_random_seed() -> u64 {
    42
}

impl Default for MockSensorConfig {
    fn default() -> Self {
        Self {
            initial_aim_deg: default_initial_aim_deg(),
            noise_stddev: 0.0,
            random_seed: default_random_seed(),
        }
    }
}

/// Measurement settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MeasurementConfig {
    /// Standoff distance at session start, whole meters 1..=10 (default: 5)
    #[serde(default = "default_distance_m")]
    pub default_distance_m: i64,

    /// How a held pair reacts to a distance change (default: frozen)
    #[serde(default)]
    pub distance_policy: DistancePolicy,
}

fn default_distance_m() -> i64 {
    StandoffDistance::DEFAULT_METERS as i64
}

impl Default for MeasurementConfig {
    fn default() -> Self {
        Self {
            default_distance_m: default_distance_m(),
            distance_policy: DistancePolicy::default(),
        }
    }
}

impl MeasurementConfig {
    /// Validated starting distance
    pub fn distance(&self) -> Result<StandoffDistance> {
        StandoffDistance::new(self.default_distance_m)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl AppConfig {
    /// Load and validate configuration from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Check values serde cannot: ranges and cross-field requirements
    pub fn validate(&self) -> Result<()> {
        self.measurement.distance()?;

        if self.sensor.update_interval_ms == 0 {
            return Err(Error::Config(
                "sensor.update_interval_ms must be greater than zero".to_string(),
            ));
        }

        if self.sensor.source == SourceKind::Replay && self.sensor.replay_path.is_none() {
            return Err(Error::Config(
                "sensor.replay_path is required when sensor.source = \"replay\"".to_string(),
            ));
        }

        let noise = self.sensor.mock.noise_stddev;
        if !noise.is_finite() || noise < 0.0 {
            return Err(Error::Config(format!(
                "sensor.mock.noise_stddev must be a non-negative number, got {}",
                noise
            )));
        }

        if !self.sensor.mock.initial_aim_deg.is_finite() {
            return Err(Error::Config(
                "sensor.mock.initial_aim_deg must be finite".to_string(),
            ));
        }

        Ok(())
    }
}
