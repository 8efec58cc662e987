//! Orientation sample and tilt angle types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw 3-axis orientation sample (accelerometer-style components)
///
/// Components are unit-free: only their ratios matter to the tilt estimate.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct OrientationSample {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl OrientationSample {
    /// Create new orientation sample
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Create zero sample (what the session reports before the first reading)
    pub fn zero() -> Self {
        Self::default()
    }

    /// Get vector magnitude
    pub fn magnitude(&self) -> f64 {
        (self.x.powi(2) + self.y.powi(2) + self.z.powi(2)).sqrt()
    }
}

/// Signed tilt angle in degrees, normalized to (-180, 180]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct TiltAngle(f64);

impl TiltAngle {
    /// Wrap a value already expressed in degrees
    pub fn from_degrees(degrees: f64) -> Self {
        Self(degrees)
    }

    pub fn degrees(self) -> f64 {
        self.0
    }

    pub fn radians(self) -> f64 {
        self.0.to_radians()
    }

    /// Nearest whole degree for display, ties rounded toward +inf
    ///
    /// `-2.5` becomes `-2`, `2.5` becomes `3`.
    pub fn rounded(self) -> i64 {
        (self.0 + 0.5).floor() as i64
    }
}

impl fmt::Display for TiltAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.rounded())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounding_ties_toward_positive() {
        assert_eq!(TiltAngle::from_degrees(2.5).rounded(), 3);
        assert_eq!(TiltAngle::from_degrees(-2.5).rounded(), -2);
        assert_eq!(TiltAngle::from_degrees(-2.6).rounded(), -3);
        assert_eq!(TiltAngle::from_degrees(29.9999).rounded(), 30);
    }

    #[test]
    fn test_display() {
        assert_eq!(TiltAngle::from_degrees(-29.7).to_string(), "-30°");
    }

    #[test]
    fn test_sample_json_shape() {
        let sample: OrientationSample =
            serde_json::from_str(r#"{"x": 0.1, "y": -0.5, "z": 0.8}"#).unwrap();
        assert_eq!(sample, OrientationSample::new(0.1, -0.5, 0.8));
        assert_eq!(OrientationSample::zero().magnitude(), 0.0);
    }
}
