//! Gravity-vector simulator for a device aimed at a given tilt
//!
//! For an aim of `θ` degrees the sensor reports one gravity along
//! `(0, -cos θ, sin θ)`, which the tilt estimator reads back as `θ`.

use super::noise::NoiseGenerator;
use crate::config::MockSensorConfig;
use crate::error::Result;
use crate::sensors::SampleSource;
use crate::types::OrientationSample;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Shared, lock-free aim angle (degrees) stored as f64 bits
#[derive(Debug, Clone)]
pub struct AimHandle(Arc<AtomicU64>);

impl AimHandle {
    pub fn new(degrees: f64) -> Self {
        Self(Arc::new(AtomicU64::new(degrees.to_bits())))
    }

    pub fn get(&self) -> f64 {
        f64::from_bits(self.0.load(Ordering::Relaxed))
    }

    /// Point the simulated device at `degrees`
    pub fn set(&self, degrees: f64) {
        self.0.store(degrees.to_bits(), Ordering::Relaxed);
    }
}

/// Simulated accelerometer following an [`AimHandle`]
pub struct SimulatedOrientation {
    aim: AimHandle,
    noise: NoiseGenerator,
    noise_stddev: f64,
}

impl SimulatedOrientation {
    /// Create simulator from config
    pub fn new(config: &MockSensorConfig) -> Self {
        Self {
            aim: AimHandle::new(config.initial_aim_deg),
            noise: NoiseGenerator::new(config.random_seed),
            noise_stddev: config.noise_stddev,
        }
    }

    /// Handle for re-aiming the device from another thread
    pub fn aim_handle(&self) -> AimHandle {
        self.aim.clone()
    }

    /// Noise-free sample for an aim angle
    pub fn ideal_sample(degrees: f64) -> OrientationSample {
        let r = degrees.to_radians();
        OrientationSample::new(0.0, -r.cos(), r.sin())
    }
}

impl SampleSource for SimulatedOrientation {
    fn name(&self) -> &str {
        "mock"
    }

    fn read(&mut self) -> Result<Option<OrientationSample>> {
        let ideal = Self::ideal_sample(self.aim.get());
        let sd = self.noise_stddev;
        Ok(Some(OrientationSample::new(
            ideal.x + self.noise.gaussian(sd),
            ideal.y + self.noise.gaussian(sd),
            ideal.z + self.noise.gaussian(sd),
        )))
    }
}
