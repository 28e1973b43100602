//! # Degree-Based Trigonometry Module
//!
//! Every angular series in this crate is expressed in degrees, so the trig
//! primitives here take and return degrees directly rather than forcing each
//! call site to convert.
//!
//! ## Azimuth/Longitude Convention
//!
//! [`atan2_deg`] folds the `180 + atan2(-y, -x)` offset into the inverse
//! tangent, which maps its result straight into `[0, 360)`. Applied to
//! horizontal coordinates this yields azimuth measured from North through
//! East (0° = North, 90° = East); applied to ecliptic rectangular
//! coordinates it yields longitude in `[0, 360)`. The same convention is
//! used everywhere, so the frame transforms compose without per-call
//! normalization.

use crate::constants::{DEG2RAD, RAD2DEG};

/// Sine of an angle given in degrees
#[inline]
pub fn sin_deg(degrees: f64) -> f64 {
    (degrees * DEG2RAD).sin()
}

/// Cosine of an angle given in degrees
#[inline]
pub fn cos_deg(degrees: f64) -> f64 {
    (degrees * DEG2RAD).cos()
}

/// Arcsine in degrees, result in [-90, 90]
#[inline]
pub fn asin_deg(x: f64) -> f64 {
    x.asin() * RAD2DEG
}

/// Arccosine in degrees, result in [0, 180]
#[inline]
pub fn acos_deg(x: f64) -> f64 {
    x.acos() * RAD2DEG
}

/// Four-quadrant arctangent in degrees, result in [0, 360)
///
/// Computed as `180 + atan2(-y, -x)`, the offset convention described in the
/// module docs, then wrapped: for `y = -0.0` with `x > 0` the inner `atan2`
/// lands on `+pi` and the raw sum is exactly 360. For `y = x = 0` the result
/// is 180, which never occurs for the unit-sphere projections this crate
/// feeds it.
#[inline]
pub fn atan2_deg(y: f64, x: f64) -> f64 {
    normalize_deg(180.0 + (-y).atan2(-x) * RAD2DEG)
}

/// Normalizes an angle into [0, 360) degrees
#[inline]
pub fn normalize_deg(degrees: f64) -> f64 {
    degrees.rem_euclid(360.0)
}

/// Normalizes an angle into [-180, 180) degrees
///
/// Used when an angular difference should be interpreted as "nearest": the
/// hour-angle refinement in the almanac steps toward the closest transit,
/// not the one a whole revolution away.
#[inline]
pub fn normalize_signed_deg(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    if wrapped >= 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_degree_trig_matches_radian_trig() {
        for degrees in [-720.0, -90.0, 0.0, 30.0, 45.0, 90.0, 180.0, 359.0, 1080.0] {
            assert_relative_eq!(sin_deg(degrees), (degrees as f64).to_radians().sin());
            assert_relative_eq!(cos_deg(degrees), (degrees as f64).to_radians().cos());
        }
    }

    #[test]
    fn test_asin_acos_ranges() {
        assert_relative_eq!(asin_deg(1.0), 90.0);
        assert_relative_eq!(asin_deg(-1.0), -90.0);
        assert_relative_eq!(asin_deg(0.5), 30.0, epsilon = 1e-12);
        assert_relative_eq!(acos_deg(1.0), 0.0);
        assert_relative_eq!(acos_deg(-1.0), 180.0);
        assert_relative_eq!(acos_deg(0.0), 90.0);
    }

    #[test]
    fn test_atan2_deg_quadrants() {
        // North-through-East convention: +x axis is 0°, +y axis is 90°.
        assert_relative_eq!(atan2_deg(0.0, 1.0), 0.0, epsilon = 1e-12);
        assert_relative_eq!(atan2_deg(1.0, 0.0), 90.0, epsilon = 1e-12);
        assert_relative_eq!(atan2_deg(0.0, -1.0), 180.0, epsilon = 1e-12);
        assert_relative_eq!(atan2_deg(-1.0, 0.0), 270.0, epsilon = 1e-12);
        assert_relative_eq!(atan2_deg(1.0, 1.0), 45.0, epsilon = 1e-12);
    }

    #[test]
    fn test_atan2_deg_wraps_negative_zero() {
        // -0.0 flips to +0.0 inside the fold and atan2 picks +pi, so the
        // unwrapped sum is exactly 360.
        let result = atan2_deg(-0.0, 1.0);
        assert!((0.0..360.0).contains(&result), "out of range: {}", result);
        assert_relative_eq!(result, 0.0);
    }

    #[test]
    fn test_atan2_deg_stays_in_range() {
        let mut degrees = 0.0;
        while degrees < 360.0 {
            let result = atan2_deg(sin_deg(degrees), cos_deg(degrees));
            assert!((0.0..360.0).contains(&result), "out of range at {}", degrees);
            assert_relative_eq!(result, degrees, epsilon = 1e-9);
            degrees += 7.3;
        }
    }

    #[test]
    fn test_normalize_deg() {
        assert_relative_eq!(normalize_deg(0.0), 0.0);
        assert_relative_eq!(normalize_deg(360.0), 0.0);
        assert_relative_eq!(normalize_deg(-30.0), 330.0);
        assert_relative_eq!(normalize_deg(725.0), 5.0, epsilon = 1e-12);
        assert_relative_eq!(normalize_deg(-725.0), 355.0, epsilon = 1e-12);
    }

    #[test]
    fn test_normalize_signed_deg() {
        assert_relative_eq!(normalize_signed_deg(0.0), 0.0);
        assert_relative_eq!(normalize_signed_deg(179.0), 179.0);
        assert_relative_eq!(normalize_signed_deg(180.0), -180.0);
        assert_relative_eq!(normalize_signed_deg(181.0), -179.0, epsilon = 1e-12);
        assert_relative_eq!(normalize_signed_deg(-190.0), 170.0, epsilon = 1e-12);
        assert_relative_eq!(normalize_signed_deg(365.0), 5.0, epsilon = 1e-12);
    }
}
