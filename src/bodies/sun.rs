//! Solar position series
//!
//! The USNO low-order approximation: apparent ecliptic longitude and
//! distance as short trigonometric series in the solar mean anomaly,
//! accurate to about one arcminute between 1800 and 2200. Ecliptic latitude
//! is zero at this accuracy level.

use crate::angle::{cos_deg, sin_deg};
use crate::coordinates::Ecliptic;
use crate::time::Epoch;

// Mean anomaly polynomial, degrees
const G0: f64 = 357.529_109_2;
const G1: f64 = 0.985_600_281_697;

// Mean longitude polynomial and equation-of-center coefficients, degrees
const Q0: f64 = 280.459;
const Q1: f64 = 0.985_647_359_976_3;
const L1: f64 = 1.915;
const L2: f64 = 0.020;

// Distance series, AU
const D0: f64 = 1.000_14;
const D1: f64 = -0.016_71;
const D2: f64 = -0.000_14;

/// Solar mean anomaly in degrees (not normalized)
fn mean_anomaly_deg(epoch: Epoch) -> f64 {
    G0 + G1 * epoch.days()
}

/// Apparent ecliptic longitude in degrees (not normalized)
fn longitude_deg(epoch: Epoch) -> f64 {
    let g = mean_anomaly_deg(epoch);
    let sin_g = sin_deg(g);
    let cos_g = cos_deg(g);
    let sin_2g = 2.0 * sin_g * cos_g;
    Q0 + Q1 * epoch.days() + L1 * sin_g + L2 * sin_2g
}

/// Derivative of [`longitude_deg`] with respect to time, degrees per day
fn longitude_rate_deg(epoch: Epoch) -> f64 {
    let g = mean_anomaly_deg(epoch);
    let cos_g = cos_deg(g);
    let cos_2g = 2.0 * cos_g * cos_g - 1.0;
    Q1 + G1 * (L1 * cos_g + 2.0 * L2 * cos_2g).to_radians()
}

/// Geocentric ecliptic position of the Sun
pub fn ecliptic(epoch: Epoch) -> Ecliptic {
    let g = mean_anomaly_deg(epoch);
    let cos_g = cos_deg(g);
    let cos_2g = 2.0 * cos_g * cos_g - 1.0;
    let distance = D0 + D1 * cos_g + D2 * cos_2g;

    Ecliptic::new(longitude_deg(epoch), 0.0, distance, epoch)
}

/// The epoch at which the Sun reaches `longitude_deg`, nearest `near`
///
/// Inverts the longitude series by Newton iteration, seeded from the mean
/// longitude. Three steps settle it well below a second of time; used for
/// equinox and solstice instants.
pub fn epoch_of_longitude(target_deg: f64, near: Epoch) -> Epoch {
    // Unwrap the target onto the continuous longitude axis nearest `near`.
    let here = longitude_deg(near);
    let turns = ((here - target_deg) / 360.0).round();
    let target = target_deg + 360.0 * turns;

    let mut t = near.add_days((target - here) / Q1);
    for _ in 0..3 {
        let error = longitude_deg(t) - target;
        t = t.add_days(-error / longitude_rate_deg(t));
    }
    t
}
