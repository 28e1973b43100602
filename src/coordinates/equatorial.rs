//! # Equatorial Coordinate Module
//!
//! Right ascension and declination, the frame star catalogs are tabulated
//! in and the last Earth-independent stop before projecting onto an
//! observer's sky. The hour angle of a position follows from local sidereal
//! time, and from there altitude and azimuth.

use crate::angle::{asin_deg, atan2_deg, cos_deg, normalize_deg, sin_deg};
use crate::coordinates::{Ecliptic, Horizontal, Observer};
use crate::time::Epoch;
use serde::{Deserialize, Serialize};

/// An equatorial position: right ascension and declination, both in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Equatorial {
    /// Right ascension in degrees, [0, 360)
    pub right_ascension: f64,
    /// Declination in degrees, [-90, 90]
    pub declination: f64,
    pub epoch: Epoch,
}

impl Equatorial {
    pub fn new(right_ascension: f64, declination: f64, epoch: Epoch) -> Self {
        Equatorial {
            right_ascension: normalize_deg(right_ascension),
            declination,
            epoch,
        }
    }

    /// Hour angle in degrees for an observer longitude, [0, 360)
    ///
    /// `H = LST - α`; zero when the position crosses the observer's
    /// meridian.
    pub fn hour_angle_deg(&self, longitude_deg: f64) -> f64 {
        normalize_deg(self.epoch.local_sidereal_time_deg(longitude_deg) - self.right_ascension)
    }

    /// Geocentric altitude/azimuth for an observer
    ///
    /// Azimuth is measured from North through East. No parallax correction
    /// is applied here; positions with a known distance go through
    /// [`Ecliptic::to_horizontal`] instead.
    pub fn to_horizontal(&self, observer: &Observer) -> Horizontal {
        let hour_angle = self.hour_angle_deg(observer.longitude);

        let sin_lat = sin_deg(observer.latitude);
        let cos_lat = cos_deg(observer.latitude);
        let sin_dec = sin_deg(self.declination);
        let cos_dec = cos_deg(self.declination);
        let tan_dec = sin_dec / cos_dec;
        let sin_ha = sin_deg(hour_angle);
        let cos_ha = cos_deg(hour_angle);

        Horizontal {
            altitude: asin_deg(sin_lat * sin_dec + cos_lat * cos_dec * cos_ha),
            azimuth: atan2_deg(-sin_ha, cos_lat * tan_dec - sin_lat * cos_ha),
        }
    }

    /// Rotates back into the ecliptic frame, given a distance in AU
    ///
    /// Inverse of [`Ecliptic::to_equatorial`]: the same obliquity rotation
    /// applied with the opposite sign.
    pub fn to_ecliptic(&self, distance: f64) -> Ecliptic {
        let obliquity = self.epoch.obliquity_deg();

        let sin_ra = sin_deg(self.right_ascension);
        let cos_ra = cos_deg(self.right_ascension);
        let sin_dec = sin_deg(self.declination);
        let cos_dec = cos_deg(self.declination);
        let tan_dec = sin_dec / cos_dec;
        let sin_obl = sin_deg(obliquity);
        let cos_obl = cos_deg(obliquity);

        Ecliptic::new(
            atan2_deg(sin_ra * cos_obl + tan_dec * sin_obl, cos_ra),
            asin_deg(sin_dec * cos_obl - cos_dec * sin_obl * sin_ra),
            distance,
            self.epoch,
        )
    }
}
