//! Lunar position series
//!
//! A trimmed Meeus-style expansion (Astronomical Algorithms ch. 47-48,
//! terms down to roughly 0.1°) in the Moon's four fundamental arguments:
//! mean elongation D, solar mean anomaly g, lunar mean anomaly M, and
//! argument of latitude F. Good to a few arcminutes, which keeps rise and
//! set times within a couple of minutes.
//!
//! The Moon moves fast enough that a two-body Kepler approximation drifts
//! by degrees within years; the explicit series is both simpler and more
//! accurate here.

use crate::angle::{cos_deg, sin_deg};
use crate::coordinates::Ecliptic;
use crate::time::Epoch;
use serde::{Deserialize, Serialize};

// Fundamental arguments, degrees and degrees/day
const D0: f64 = 297.850_192_1;
const D1: f64 = 12.190_749_114_40;
const G0: f64 = 357.529_109_2;
const G1: f64 = 0.985_600_281_697;
const M0: f64 = 134.963_396_4;
const M1: f64 = 13.064_992_950_18;
const F0: f64 = 93.272_095_0;
const F1: f64 = 13.229_350_240_20;

// Mean longitude, degrees and degrees/day
const L0: f64 = 218.316_447_7;
const L1: f64 = 13.176_396_474_585;

/// Lunar position with the Sun-Earth-Moon phase angle
///
/// The phase angle is the Sun-Moon elongation as seen from Earth measured
/// the traditional way: 0° at full moon, 180° at new moon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoonPosition {
    pub ecliptic: Ecliptic,
    /// Phase angle in degrees
    pub phase_angle: f64,
}

impl MoonPosition {
    /// Illuminated fraction of the lunar disk, [0, 1]
    pub fn illuminated_fraction(&self) -> f64 {
        0.5 + 0.5 * cos_deg(self.phase_angle)
    }

    /// Phase as a fraction of the synodic cycle, [0, 1)
    ///
    /// 0 is new moon, 0.5 full moon.
    pub fn phase(&self) -> f64 {
        let phase = 0.5 - self.phase_angle / 360.0;
        phase - phase.floor()
    }
}

/// Geocentric ecliptic position and phase of the Moon
pub fn position(epoch: Epoch) -> MoonPosition {
    let t = epoch.days();

    let d = D0 + D1 * t; // mean elongation from the Sun
    let g = G0 + G1 * t; // solar mean anomaly
    let m = M0 + M1 * t; // lunar mean anomaly
    let f = F0 + F1 * t; // argument of latitude

    let sin_1d = sin_deg(d);
    let cos_1d = cos_deg(d);
    let sin_1g = sin_deg(g);
    let sin_1m = sin_deg(m);
    let cos_1m = cos_deg(m);
    let sin_1f = sin_deg(f);
    let cos_1f = cos_deg(f);

    // Double-angle and sum identities keep this down to one sin/cos pair
    // per fundamental argument.
    let sin_2d = 2.0 * sin_1d * cos_1d;
    let cos_2d = 2.0 * cos_1d * cos_1d - 1.0;
    let sin_2m = 2.0 * sin_1m * cos_1m;
    let sin_2f = 2.0 * sin_1f * cos_1f;

    let sin_2d_m = sin_2d * cos_1m - cos_2d * sin_1m; // sin(2D - M)
    let sin_m_p_f = sin_1m * cos_1f + cos_1m * sin_1f; // sin(M + F)
    let sin_m_m_f = sin_1m * cos_1f - cos_1m * sin_1f; // sin(M - F)
    let sin_2d_f = sin_2d * cos_1f - cos_2d * sin_1f; // sin(2D - F)

    let longitude = L0 + L1 * t
        + 6.288774 * sin_1m // equation of the center (I)
        + 1.274027 * sin_2d_m // evection
        + 0.658314 * sin_2d // variation
        - 0.213618 * sin_2m // equation of the center (II)
        + 0.185116 * sin_1g // annual equation
        - 0.114332 * sin_2f; // reduction to the ecliptic

    let latitude = 5.128122 * sin_1f
        + 0.280602 * sin_m_p_f
        + 0.277693 * sin_m_m_f
        + 0.173237 * sin_2d_f;

    // AU; the leading term is the mean distance, ~60.27 Earth radii
    let distance = 0.0025735698 - 1.397e-7 * cos_1m;

    let phase_angle = 180.0 - d
        - 6.289 * sin_1m
        + 2.100 * sin_1g
        - 1.274 * sin_2d_m
        - 0.658 * sin_2d
        - 0.214 * sin_2m
        - 0.110 * sin_1d;

    MoonPosition {
        ecliptic: Ecliptic::new(longitude, latitude, distance, epoch),
        phase_angle,
    }
}

/// Geocentric ecliptic position of the Moon
pub fn ecliptic(epoch: Epoch) -> Ecliptic {
    position(epoch).ecliptic
}
