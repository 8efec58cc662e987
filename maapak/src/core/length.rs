//! Parallax length calculation
//!
//! Each sighting is taken from the same point, `distance` meters horizontally
//! from the object. A sighting at angle `a` above or below the horizontal
//! spans a vertical offset of `distance * tan(a)`. The two offsets are added
//! as magnitudes, so the sightings are expected to straddle the horizontal
//! (one up, one down). Two sightings on the same side still add.
//!
//! ```text
//!                 ┬  top
//!            a1 / │
//!             /   │ d·|tan a1|
//!   eye ●────────-┼- horizontal
//!             \   │ d·|tan a2|
//!            a2 \ │
//!                 ┴  bottom
//!        ◀── d ──▶
//! ```

use crate::types::{LengthEstimate, StandoffDistance, TiltAngle};

/// Estimate object length from two captured angles
///
/// Result is `|d·tan(a1)| + |d·tan(a2)|` rounded to 3 decimal places.
/// Near ±90° the tangent diverges and the result is returned unclamped.
pub fn compute_length(
    angle1: TiltAngle,
    angle2: TiltAngle,
    distance: StandoffDistance,
) -> LengthEstimate {
    let d = distance.as_f64();
    let span1 = (d * angle1.radians().tan()).abs();
    let span2 = (d * angle2.radians().tan()).abs();
    LengthEstimate::from_meters(span1 + span2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn deg(d: f64) -> TiltAngle {
        TiltAngle::from_degrees(d)
    }

    fn meters(m: i64) -> StandoffDistance {
        StandoffDistance::new(m).unwrap()
    }

    #[test]
    fn test_symmetric_pair() {
        let length = compute_length(deg(30.0), deg(-30.0), meters(5));
        assert_eq!(length.meters(), 5.774);
        assert_eq!(length.to_string(), "5.774 meters");
    }

    #[test]
    fn test_level_sightings_are_zero() {
        let length = compute_length(deg(0.0), deg(0.0), meters(1));
        assert_eq!(length.meters(), 0.0);
        assert_eq!(length.to_string(), "0.000 meters");
    }

    #[test]
    fn test_same_side_sightings_add() {
        // 45° and 45° on the same side: 1 + 1 per meter of distance
        let length = compute_length(deg(45.0), deg(45.0), meters(2));
        assert_relative_eq!(length.meters(), 4.0, epsilon = 1e-12);

        let mirrored = compute_length(deg(-45.0), deg(-45.0), meters(2));
        assert_eq!(length, mirrored);
    }

    #[test]
    fn test_order_independent() {
        let a = compute_length(deg(12.0), deg(-40.0), meters(7));
        let b = compute_length(deg(-40.0), deg(12.0), meters(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_scales_with_distance() {
        let near = compute_length(deg(20.0), deg(-10.0), meters(1));
        let far = compute_length(deg(20.0), deg(-10.0), meters(10));
        assert_relative_eq!(far.meters(), near.meters() * 10.0, epsilon = 0.01);
    }

    #[test]
    fn test_singularity_surfaced() {
        let length = compute_length(deg(90.0), deg(0.0), meters(3));
        assert!(length.is_unbounded());
        assert!(length.meters() > 1.0e9);
    }
}
