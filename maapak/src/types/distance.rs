//! Standoff distance type

use crate::error::{Error, Result};
use std::fmt;

/// Horizontal distance between observer and object, in whole meters
///
/// Only distances the picker can offer (1..=10 m) can be constructed.
/// The length calculator trusts this and does no checking of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StandoffDistance(u8);

impl StandoffDistance {
    /// Shortest selectable distance (m)
    pub const MIN_METERS: u8 = 1;
    /// Longest selectable distance (m)
    pub const MAX_METERS: u8 = 10;
    /// Distance selected when a session starts (m)
    pub const DEFAULT_METERS: u8 = 5;

    /// Validate a selection from the picker or config file
    pub fn new(meters: i64) -> Result<Self> {
        if (Self::MIN_METERS as i64..=Self::MAX_METERS as i64).contains(&meters) {
            Ok(Self(meters as u8))
        } else {
            Err(Error::DistanceOutOfRange {
                value: meters,
                min: Self::MIN_METERS,
                max: Self::MAX_METERS,
            })
        }
    }

    pub fn meters(self) -> u8 {
        self.0
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.0)
    }

    /// Every selectable distance, shortest first
    pub fn choices() -> impl Iterator<Item = StandoffDistance> {
        (Self::MIN_METERS..=Self::MAX_METERS).map(StandoffDistance)
    }
}

impl Default for StandoffDistance {
    fn default() -> Self {
        Self(Self::DEFAULT_METERS)
    }
}

impl TryFrom<i64> for StandoffDistance {
    type Error = Error;

    fn try_from(meters: i64) -> Result<Self> {
        Self::new(meters)
    }
}

impl fmt::Display for StandoffDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} meters", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_picker_range() {
        assert_eq!(StandoffDistance::new(1).unwrap().meters(), 1);
        assert_eq!(StandoffDistance::new(10).unwrap().meters(), 10);
        assert_eq!(StandoffDistance::default().meters(), 5);
        assert_eq!(StandoffDistance::choices().count(), 10);
    }

    #[test]
    fn test_rejects_out_of_range() {
        for bad in [0, -3, 11, 255] {
            match StandoffDistance::new(bad) {
                Err(Error::DistanceOutOfRange { value, min, max }) => {
                    assert_eq!(value, bad);
                    assert_eq!((min, max), (1, 10));
                }
                other => panic!("expected range error for {}, got {:?}", bad, other),
            }
        }
    }
}
