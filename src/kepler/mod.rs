//! Kepler's equation and the orbital-element pipeline
//!
//! [`solve`] inverts Kepler's equation `M = E - e·sin E` by Newton
//! iteration, and [`OrbitalElements`] carries a body's six osculating
//! elements (each a linear polynomial in time) through that solver and the
//! standard three-rotation composition to heliocentric rectangular
//! coordinates.
//!
//! Angles are in degrees throughout, matching the element tables; the
//! `e·sin E` term therefore picks up a radians-to-degrees factor.

use crate::angle::{cos_deg, sin_deg};
use crate::constants::RAD2DEG;
use crate::coordinates::Rectangular;
use crate::time::Epoch;
use crate::{AlmagestError, Result};
use log::trace;
use serde::{Deserialize, Serialize};

/// Convergence tolerance on the eccentric-anomaly step, degrees
const TOLERANCE_DEG: f64 = 1e-6;

/// Iteration cap guarding against non-elliptical inputs
///
/// Newton iteration on Kepler's equation converges quadratically for any
/// eccentricity below one, so a well-formed call never comes close to this.
const MAX_ITERATIONS: u32 = 30;

/// Solves Kepler's equation for the eccentric anomaly, in degrees
///
/// Newton iteration on `f(E) = E - e·sin E - M`, seeded with
/// `E₀ = M + e·sin M`. Returns [`AlmagestError::Domain`] for eccentricities
/// outside `[0, 1)` and [`AlmagestError::Convergence`] if the iteration cap
/// is exceeded.
pub fn solve(mean_anomaly_deg: f64, eccentricity: f64) -> Result<f64> {
    if !(0.0..1.0).contains(&eccentricity) {
        return Err(AlmagestError::Domain(format!(
            "eccentricity {} outside [0, 1)",
            eccentricity
        )));
    }

    let m = mean_anomaly_deg;
    let mut e_anom = m + eccentricity * RAD2DEG * sin_deg(m);

    for iteration in 0..MAX_ITERATIONS {
        let dm = m - (e_anom - eccentricity * RAD2DEG * sin_deg(e_anom));
        let de = dm / (1.0 - eccentricity * cos_deg(e_anom));
        e_anom += de;

        if de.abs() <= TOLERANCE_DEG {
            trace!(
                "kepler converged in {} iterations (M={} deg, e={})",
                iteration + 1,
                m,
                eccentricity
            );
            return Ok(e_anom);
        }
    }

    Err(AlmagestError::Convergence {
        context: "Kepler solver",
        iterations: MAX_ITERATIONS,
    })
}

/// One osculating element as a linear polynomial in time
///
/// The rate is per Julian century, the convention the JPL element tables
/// use.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub base: f64,
    pub rate_per_century: f64,
}

impl Element {
    pub const fn new(base: f64, rate_per_century: f64) -> Self {
        Element {
            base,
            rate_per_century,
        }
    }

    /// Evaluates the element at an epoch
    pub fn at(&self, epoch: Epoch) -> f64 {
        self.base + self.rate_per_century * epoch.centuries()
    }
}

/// Six Kepler elements describing an orbit around the Sun
///
/// Semi-major axis in AU; the five angular elements in degrees. Constant
/// per body and sourced from static tables; evaluating the set at an epoch
/// and running it through [`OrbitalElements::rectangular`] is the whole
/// two-body pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitalElements {
    /// a, AU
    pub semi_major_axis: Element,
    /// e, dimensionless
    pub eccentricity: Element,
    /// i, degrees
    pub inclination: Element,
    /// L, degrees
    pub mean_longitude: Element,
    /// ϖ, degrees (longitude of perihelion)
    pub perihelion_longitude: Element,
    /// Ω, degrees (longitude of ascending node)
    pub ascending_node: Element,
}

impl OrbitalElements {
    /// Heliocentric rectangular coordinates at `epoch`, in AU
    ///
    /// Solves Kepler's equation for the in-plane position, then rotates by
    /// the argument of perihelion, the inclination, and the ascending node.
    pub fn rectangular(&self, epoch: Epoch) -> Result<Rectangular> {
        let a = self.semi_major_axis.at(epoch);
        let e = self.eccentricity.at(epoch);
        let i = self.inclination.at(epoch);
        let l = self.mean_longitude.at(epoch);
        let peri = self.perihelion_longitude.at(epoch);
        let node = self.ascending_node.at(epoch);

        // Mean anomaly and argument of perihelion
        let m = l - peri;
        let w = peri - node;

        let e_anom = solve(m, e)?;

        // In-plane coordinates: u along the major axis, v along the minor
        let u = a * (cos_deg(e_anom) - e);
        let v = a * (1.0 - e * e).sqrt() * sin_deg(e_anom);

        let (sin_i, cos_i) = (sin_deg(i), cos_deg(i));
        let (sin_node, cos_node) = (sin_deg(node), cos_deg(node));
        let (sin_w, cos_w) = (sin_deg(w), cos_deg(w));

        let x = u * (cos_w * cos_node - sin_w * sin_node * cos_i)
            + v * (-sin_w * cos_node - cos_w * sin_node * cos_i);
        let y = u * (cos_w * sin_node + sin_w * cos_node * cos_i)
            + v * (-sin_w * sin_node + cos_w * cos_node * cos_i);
        let z = u * (sin_w * sin_i) + v * (cos_w * sin_i);

        Ok(Rectangular::new(x, y, z))
    }
}
