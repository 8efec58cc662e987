//! Length estimate type

use std::fmt;

/// Estimated object length in meters, rounded to 3 decimal places
///
/// A sighting at an odd multiple of 90° makes the tangent blow up; the
/// resulting huge or infinite value is kept as-is.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct LengthEstimate(f64);

/// Magnitude past which an estimate is treated as a tangent singularity
pub const UNBOUNDED_THRESHOLD_M: f64 = 1.0e9;

impl LengthEstimate {
    /// Round a raw length to millimetre precision
    pub fn from_meters(meters: f64) -> Self {
        if meters.is_finite() {
            Self((meters * 1000.0).round() / 1000.0)
        } else {
            Self(meters)
        }
    }

    pub fn meters(self) -> f64 {
        self.0
    }

    /// True when a sighting hit the tan() singularity
    pub fn is_unbounded(self) -> bool {
        !self.0.is_finite() || self.0.abs() >= UNBOUNDED_THRESHOLD_M
    }
}

impl fmt::Display for LengthEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3} meters", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_decimal_rounding() {
        assert_eq!(LengthEstimate::from_meters(5.773502691896258).meters(), 5.774);
        assert_eq!(LengthEstimate::from_meters(0.0).to_string(), "0.000 meters");
        assert_eq!(LengthEstimate::from_meters(1.2344).to_string(), "1.234 meters");
    }

    #[test]
    fn test_unbounded_passthrough() {
        let inf = LengthEstimate::from_meters(f64::INFINITY);
        assert!(inf.is_unbounded());
        assert!(inf.meters().is_infinite());
        assert!(LengthEstimate::from_meters(3.0e16).is_unbounded());
        assert!(!LengthEstimate::from_meters(120.5).is_unbounded());
    }
}
