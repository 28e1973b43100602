//! # Horizontal Coordinate Module
//!
//! Altitude and azimuth as seen by one observer at one instant, the end of
//! the transform chain. Azimuth runs from North through East (0° = North,
//! 90° = East), the convention used throughout the crate.

use crate::angle::{asin_deg, cos_deg};
use crate::constants::PARALLAX_SIN_AT_1AU;
use crate::{AlmagestError, Result};
use serde::{Deserialize, Serialize};

/// A horizontal position: altitude and azimuth in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Horizontal {
    /// Altitude above the horizon in degrees, [-90, 90]
    pub altitude: f64,
    /// Azimuth in degrees from North through East, [0, 360)
    pub azimuth: f64,
}

impl Horizontal {
    pub fn new(altitude: f64, azimuth: f64) -> Self {
        Horizontal { altitude, azimuth }
    }

    /// Shifts a geocentric altitude to the topocentric altitude for a body
    /// `distance` AU away
    ///
    /// The observer stands on Earth's surface rather than at its center, so
    /// nearby bodies appear lower: `alt -= parallax · cos(alt)` with
    /// `parallax = asin(k / distance)`. Roughly 0.95° for the Moon and
    /// under 10 arcseconds for everything else.
    pub fn corrected_for_parallax(self, distance: f64) -> Result<Horizontal> {
        if distance <= 0.0 {
            return Err(AlmagestError::Domain(format!(
                "parallax undefined for distance {} AU",
                distance
            )));
        }

        let parallax = asin_deg(PARALLAX_SIN_AT_1AU / distance);
        Ok(Horizontal {
            altitude: self.altitude - parallax * cos_deg(self.altitude),
            azimuth: self.azimuth,
        })
    }
}
