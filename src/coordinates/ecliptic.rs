//! # Ecliptic Coordinate Module
//!
//! Geocentric ecliptic longitude/latitude/distance, the frame the Sun and
//! Moon series produce directly and the planet pipeline reaches after the
//! heliocentric-to-geocentric shift. A single rotation by the obliquity of
//! the ecliptic carries positions onward to the equatorial frame.

use crate::angle::{asin_deg, atan2_deg, cos_deg, normalize_deg, sin_deg};
use crate::coordinates::{Equatorial, Horizontal, Observer, Rectangular};
use crate::time::Epoch;
use crate::Result;
use serde::{Deserialize, Serialize};

/// An ecliptic position: longitude and latitude in degrees, distance in AU
///
/// Longitude is normalized to [0, 360) at construction; the epoch rides
/// along because the downstream transforms need the obliquity and sidereal
/// time of the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ecliptic {
    pub longitude: f64,
    pub latitude: f64,
    pub distance: f64,
    pub epoch: Epoch,
}

impl Ecliptic {
    pub fn new(longitude: f64, latitude: f64, distance: f64, epoch: Epoch) -> Self {
        Ecliptic {
            longitude: normalize_deg(longitude),
            latitude,
            distance,
            epoch,
        }
    }

    /// Inverse of [`Rectangular::to_ecliptic`]
    pub fn to_rectangular(&self) -> Rectangular {
        let cos_lat = cos_deg(self.latitude);
        Rectangular::new(
            self.distance * cos_lat * cos_deg(self.longitude),
            self.distance * cos_lat * sin_deg(self.longitude),
            self.distance * sin_deg(self.latitude),
        )
    }

    /// Rotates into the equatorial frame by the obliquity of the ecliptic
    pub fn to_equatorial(&self) -> Equatorial {
        let obliquity = self.epoch.obliquity_deg();

        let sin_lon = sin_deg(self.longitude);
        let cos_lon = cos_deg(self.longitude);
        let sin_lat = sin_deg(self.latitude);
        let cos_lat = cos_deg(self.latitude);
        let tan_lat = sin_lat / cos_lat;
        let sin_obl = sin_deg(obliquity);
        let cos_obl = cos_deg(obliquity);

        Equatorial::new(
            atan2_deg(sin_lon * cos_obl - tan_lat * sin_obl, cos_lon),
            asin_deg(sin_lat * cos_obl + cos_lat * sin_obl * sin_lon),
            self.epoch,
        )
    }

    /// Topocentric altitude/azimuth for an observer
    ///
    /// Goes through the equatorial frame and applies the parallax
    /// correction for this position's distance.
    pub fn to_horizontal(&self, observer: &Observer) -> Result<Horizontal> {
        self.to_equatorial()
            .to_horizontal(observer)
            .corrected_for_parallax(self.distance)
    }
}
