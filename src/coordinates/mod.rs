//! Coordinate frames and the transforms between them
//!
//! Positions flow through four frames: rectangular (x, y, z in AU),
//! ecliptic (longitude/latitude/distance), equatorial (right
//! ascension/declination), and horizontal (altitude/azimuth for a specific
//! observer). Each transform is a pure function; composing a transform with
//! its inverse reproduces the input to floating-point precision.
//!
//! All angles are degrees. Azimuth is measured from North through East.

pub mod ecliptic;
pub mod equatorial;
pub mod horizontal;
pub mod rectangular;

pub use ecliptic::Ecliptic;
pub use equatorial::Equatorial;
pub use horizontal::Horizontal;
pub use rectangular::Rectangular;

use serde::{Deserialize, Serialize};

/// An observer location on Earth
///
/// Latitude north positive, longitude east positive, both in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observer {
    pub latitude: f64,
    pub longitude: f64,
}

impl Observer {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Observer {
            latitude,
            longitude,
        }
    }
}
