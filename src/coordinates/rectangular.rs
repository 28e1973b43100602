//! # Rectangular Coordinate Module
//!
//! Rectangular (x, y, z) positions in AU are the intermediate frame between
//! the orbital-element pipeline and the angular frames: rotations and the
//! heliocentric-to-geocentric origin shift are plain vector arithmetic here,
//! with no singularities at the poles.
//!
//! ## Axis Convention
//!
//! - **X**: toward the vernal equinox
//! - **Y**: toward ecliptic longitude 90°
//! - **Z**: toward the north ecliptic pole

use crate::angle::{asin_deg, atan2_deg};
use crate::coordinates::Ecliptic;
use crate::time::Epoch;
use crate::{AlmagestError, Result};
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// A rectangular position in AU relative to a heliocentric or geocentric
/// origin
///
/// The origin is contextual: the orbital-element pipeline produces
/// heliocentric positions, and subtracting the Earth-Moon barycenter
/// position (same epoch) shifts them to geocentric.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rectangular {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Rectangular {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Rectangular { x, y, z }
    }

    /// Euclidean distance from the origin, in AU
    pub fn distance(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Projects to ecliptic longitude/latitude/distance
    ///
    /// Returns a [`AlmagestError::Domain`] error for a zero-length vector,
    /// whose direction is undefined.
    pub fn to_ecliptic(&self, epoch: Epoch) -> Result<Ecliptic> {
        let distance = self.distance();
        if distance == 0.0 {
            return Err(AlmagestError::Domain(
                "cannot project a zero-distance position onto the sphere".to_string(),
            ));
        }

        Ok(Ecliptic::new(
            atan2_deg(self.y, self.x),
            asin_deg(self.z / distance),
            distance,
            epoch,
        ))
    }

    /// Converts to a nalgebra vector for linear algebra operations
    pub fn to_vector3(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Creates from a nalgebra vector
    pub fn from_vector3(vector: Vector3<f64>) -> Self {
        Rectangular {
            x: vector.x,
            y: vector.y,
            z: vector.z,
        }
    }
}

impl std::ops::Add for Rectangular {
    type Output = Rectangular;

    fn add(self, other: Rectangular) -> Rectangular {
        Rectangular {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl std::ops::Sub for Rectangular {
    type Output = Rectangular;

    fn sub(self, other: Rectangular) -> Rectangular {
        Rectangular {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}
