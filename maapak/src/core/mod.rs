//! Measurement core: pure tilt, capture, and length computations.
//!
//! - [`tilt::compute_tilt`]: orientation sample to signed tilt angle
//! - [`capture::capture`]: two-slot sliding window of captured angles
//! - [`length::compute_length`]: parallax length from a captured pair

pub mod capture;
pub mod length;
pub mod tilt;

pub use capture::{CaptureBuffer, CaptureState, capture};
pub use length::compute_length;
pub use tilt::compute_tilt;
