//! Measurement session state
//!
//! [`MeasurementSession`] owns everything the measurement screen shows: the
//! latest orientation sample, the captured angles, and the selected standoff
//! distance. It is mutated only through [`MeasurementSession::update_sample`],
//! [`MeasurementSession::capture`], and [`MeasurementSession::select_distance`].
//!
//! The length estimate is never stored. [`MeasurementSession::length_estimate`]
//! derives it from the current pair every time it is read, so it can never
//! disagree with the angles on screen.

use crate::core::{CaptureBuffer, CaptureState, capture, compute_length, compute_tilt};
use crate::types::{LengthEstimate, OrientationSample, StandoffDistance, TiltAngle};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which distance a held pair is measured against
///
/// Matters only when the distance changes after the second capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DistancePolicy {
    /// Use the distance selected when the pair was completed
    #[default]
    Frozen,
    /// Use whatever distance is currently selected
    Live,
}

/// Result of one capture
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaptureOutcome {
    /// Angle that was captured
    pub angle: TiltAngle,
    /// Buffer state after the capture
    pub state: CaptureState,
    /// Length computed on this capture (only when it completed a pair)
    pub estimate: Option<LengthEstimate>,
}

/// Explicitly owned state of one measuring session
#[derive(Debug, Clone)]
pub struct MeasurementSession {
    latest_sample: OrientationSample,
    captures: CaptureBuffer,
    distance: StandoffDistance,
    /// Distance in effect when the current pair was completed
    pair_distance: Option<StandoffDistance>,
    policy: DistancePolicy,
}

impl MeasurementSession {
    /// Create a session in the `Empty` state
    pub fn new(distance: StandoffDistance, policy: DistancePolicy) -> Self {
        Self {
            latest_sample: OrientationSample::zero(),
            captures: CaptureBuffer::new(),
            distance,
            pair_distance: None,
            policy,
        }
    }

    /// Record the newest sensor sample, replacing the previous one
    pub fn update_sample(&mut self, sample: OrientationSample) {
        self.latest_sample = sample;
    }

    pub fn latest_sample(&self) -> OrientationSample {
        self.latest_sample
    }

    /// Live tilt derived from the latest sample
    pub fn current_tilt(&self) -> TiltAngle {
        compute_tilt(&self.latest_sample)
    }

    /// Snapshot the live tilt into the capture window
    pub fn capture(&mut self) -> CaptureOutcome {
        let angle = self.current_tilt();
        self.captures = capture(angle, &self.captures);
        let state = self.captures.state();

        self.pair_distance = match state {
            CaptureState::PairReady => Some(self.distance),
            _ => None,
        };

        let estimate = self.length_estimate();
        match (state, estimate) {
            (CaptureState::PairReady, Some(length)) if length.is_unbounded() => {
                log::warn!(
                    "Captured {:.3}° completing pair {:?}: sighting too close to vertical, length unbounded",
                    angle.degrees(),
                    self.captured_degrees()
                );
            }
            (CaptureState::PairReady, Some(length)) => {
                log::info!(
                    "Captured {:.3}° completing pair {:?} at {}: length {}",
                    angle.degrees(),
                    self.captured_degrees(),
                    self.distance,
                    length
                );
            }
            _ => {
                log::info!("Captured {:.3}° ({:?})", angle.degrees(), state);
            }
        }

        CaptureOutcome {
            angle,
            state,
            estimate,
        }
    }

    /// Change the standoff distance
    ///
    /// Returns the estimate as it reads after the change. Under
    /// [`DistancePolicy::Frozen`] a held pair keeps its original length.
    pub fn select_distance(&mut self, distance: StandoffDistance) -> Option<LengthEstimate> {
        if distance != self.distance {
            log::info!("Standoff distance {} -> {}", self.distance, distance);
        }
        self.distance = distance;
        self.length_estimate()
    }

    pub fn distance(&self) -> StandoffDistance {
        self.distance
    }

    pub fn policy(&self) -> DistancePolicy {
        self.policy
    }

    pub fn captures(&self) -> &CaptureBuffer {
        &self.captures
    }

    pub fn state(&self) -> CaptureState {
        self.captures.state()
    }

    /// Derived length; `Some` exactly when two angles are held
    pub fn length_estimate(&self) -> Option<LengthEstimate> {
        let (angle1, angle2) = self.captures.pair()?;
        let distance = match self.policy {
            DistancePolicy::Frozen => self.pair_distance.unwrap_or(self.distance),
            DistancePolicy::Live => self.distance,
        };
        Some(compute_length(angle1, angle2, distance))
    }

    /// What the measurement screen shows right now
    pub fn snapshot(&self) -> DisplaySnapshot {
        DisplaySnapshot {
            live_tilt_deg: self.current_tilt().rounded(),
            captured_deg: self.captures.angles().iter().map(|a| a.rounded()).collect(),
            distance: self.distance,
            length: self.length_estimate(),
        }
    }

    fn captured_degrees(&self) -> Vec<f64> {
        self.captures.angles().iter().map(|a| a.degrees()).collect()
    }
}

impl Default for MeasurementSession {
    fn default() -> Self {
        Self::new(StandoffDistance::default(), DistancePolicy::default())
    }
}

/// Display-ready view of a session
#[derive(Debug, Clone, PartialEq)]
pub struct DisplaySnapshot {
    /// Live tilt, nearest whole degree
    pub live_tilt_deg: i64,
    /// Captured angles in capture order, nearest whole degree
    pub captured_deg: Vec<i64>,
    /// Selected standoff distance
    pub distance: StandoffDistance,
    /// Length, present only while a pair is held
    pub length: Option<LengthEstimate>,
}

impl fmt::Display for DisplaySnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tilt {}° | distance {} | captured [", self.live_tilt_deg, self.distance)?;
        for (i, angle) in self.captured_deg.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}°", angle)?;
        }
        write!(f, "]")?;
        if let Some(length) = self.length {
            write!(f, " | length {}", length)?;
        }
        Ok(())
    }
}
