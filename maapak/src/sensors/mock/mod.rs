//! Simulated orientation sensor
//!
//! Stands in for the device accelerometer during development: the console
//! aims the simulated device and the session sees the matching gravity
//! vector, optionally with noise.

pub mod noise;
pub mod orientation_sim;

pub use noise::NoiseGenerator;
pub use orientation_sim::{AimHandle, SimulatedOrientation};
