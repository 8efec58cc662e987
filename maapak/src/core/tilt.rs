//! Tilt estimation from a raw orientation sample
//!
//! A sample of `(0, -1, 0)` reads 0°. Rotating the gravity reading from -Y
//! toward +Z raises the angle, so `(0, 0, 1)` reads 90°; rotating it toward -Z
//! lowers it, so `(0, 0, -1)` reads -90°. The X component never contributes.

use crate::types::{OrientationSample, TiltAngle};
use std::f64::consts::{FRAC_PI_2, PI, TAU};

/// Compute the signed tilt angle of a sample, in (-180°, 180°]
///
/// `atan2(y, z) + π/2`, wrapped into (-π, π] and converted to degrees.
/// `atan2(0, 0)` is 0, so an all-zero sample reads 90°.
pub fn compute_tilt(sample: &OrientationSample) -> TiltAngle {
    let mut raw = sample.y.atan2(sample.z) + FRAC_PI_2;
    if raw > PI {
        raw -= TAU;
    }
    TiltAngle::from_degrees(raw.to_degrees())
}
