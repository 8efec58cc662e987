//! Capture sequencing over a two-slot sliding window
//!
//! ```text
//!            capture              capture
//!   Empty ─────────▶ OneCaptured ─────────▶ PairReady
//!                        ▲                      │
//!                        └──────── capture ─────┘
//! ```
//!
//! Capturing while the pair is full does not drop just the oldest angle: both
//! are discarded and the new angle becomes the sole occupant.

use crate::types::TiltAngle;

const WINDOW: usize = 2;

/// Occupancy of the capture buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureState {
    /// No angle captured yet
    Empty,
    /// First sighting taken, waiting for the second
    OneCaptured,
    /// Both sightings taken, a length can be computed
    PairReady,
}

impl CaptureState {
    /// Number of captured angles in this state
    pub fn count(self) -> usize {
        match self {
            CaptureState::Empty => 0,
            CaptureState::OneCaptured => 1,
            CaptureState::PairReady => 2,
        }
    }
}

/// Captured angles in capture order (first = angle1, second = angle2)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CaptureBuffer {
    slots: [TiltAngle; WINDOW],
    len: usize,
}

impl CaptureBuffer {
    /// Maximum number of angles held at once
    pub const CAPACITY: usize = WINDOW;

    /// Create an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Captured angles, oldest first
    pub fn angles(&self) -> &[TiltAngle] {
        &self.slots[..self.len]
    }

    pub fn state(&self) -> CaptureState {
        match self.len {
            0 => CaptureState::Empty,
            1 => CaptureState::OneCaptured,
            _ => CaptureState::PairReady,
        }
    }

    /// Both angles, if the pair is complete
    pub fn pair(&self) -> Option<(TiltAngle, TiltAngle)> {
        match self.state() {
            CaptureState::PairReady => Some((self.slots[0], self.slots[1])),
            _ => None,
        }
    }

    fn singleton(angle: TiltAngle) -> Self {
        let mut buffer = Self::new();
        buffer.slots[0] = angle;
        buffer.len = 1;
        buffer
    }
}

/// Record `current` into the window and return the resulting buffer
///
/// Appends while fewer than two angles are held; otherwise starts a fresh
/// window containing only `current`. Total for every buffer state.
pub fn capture(current: TiltAngle, buffer: &CaptureBuffer) -> CaptureBuffer {
    if buffer.len < CaptureBuffer::CAPACITY {
        let mut next = *buffer;
        next.slots[next.len] = current;
        next.len += 1;
        next
    } else {
        CaptureBuffer::singleton(current)
    }
}
