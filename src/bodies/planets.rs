//! Planetary element tables and the geocentric pipeline
//!
//! Six-element osculating tables for Mercury through Neptune and the
//! Earth-Moon barycenter, from the JPL "Keplerian elements for approximate
//! positions" set (valid 1800-2050). Each planet's heliocentric position
//! comes from the generic Kepler pipeline; subtracting the barycenter
//! position at the same epoch shifts it to geocentric.

use crate::coordinates::{Ecliptic, Rectangular};
use crate::kepler::{Element, OrbitalElements};
use crate::time::Epoch;
use crate::Result;

pub(crate) const MERCURY: OrbitalElements = OrbitalElements {
    semi_major_axis: Element::new(0.38709927, 0.00000037),
    eccentricity: Element::new(0.20563593, 0.00001906),
    inclination: Element::new(7.00497902, -0.00594749),
    mean_longitude: Element::new(252.25032350, 149_472.67411175),
    perihelion_longitude: Element::new(77.45779628, 0.16047689),
    ascending_node: Element::new(48.33076593, -0.12534081),
};

pub(crate) const VENUS: OrbitalElements = OrbitalElements {
    semi_major_axis: Element::new(0.72333566, 0.00000390),
    eccentricity: Element::new(0.00677672, -0.00004107),
    inclination: Element::new(3.39467605, -0.00078890),
    mean_longitude: Element::new(181.97909950, 58_517.81538729),
    perihelion_longitude: Element::new(131.60246718, 0.00268329),
    ascending_node: Element::new(76.67984255, -0.27769418),
};

/// Earth-Moon barycenter; the origin shift for every geocentric position
pub(crate) const EARTH_MOON_BARYCENTER: OrbitalElements = OrbitalElements {
    semi_major_axis: Element::new(1.00000261, 0.00000562),
    eccentricity: Element::new(0.01671123, -0.00004392),
    inclination: Element::new(-0.00001531, -0.01294668),
    mean_longitude: Element::new(100.46457166, 35_999.37244981),
    perihelion_longitude: Element::new(102.93768193, 0.32327364),
    ascending_node: Element::new(0.0, 0.0),
};

pub(crate) const MARS: OrbitalElements = OrbitalElements {
    semi_major_axis: Element::new(1.52371034, 0.00001847),
    eccentricity: Element::new(0.09339410, 0.00007882),
    inclination: Element::new(1.84969142, -0.00813131),
    mean_longitude: Element::new(355.44656795, 19_140.30268499),
    perihelion_longitude: Element::new(336.05637041, 0.44441088),
    ascending_node: Element::new(49.55953891, -0.29257343),
};

pub(crate) const JUPITER: OrbitalElements = OrbitalElements {
    semi_major_axis: Element::new(5.20288700, -0.00011607),
    eccentricity: Element::new(0.04838624, -0.00013253),
    inclination: Element::new(1.30439695, -0.00183714),
    mean_longitude: Element::new(34.39644051, 3_034.74612775),
    perihelion_longitude: Element::new(14.72847983, 0.21252668),
    ascending_node: Element::new(100.47390909, 0.20469106),
};

pub(crate) const SATURN: OrbitalElements = OrbitalElements {
    semi_major_axis: Element::new(9.53667594, -0.00125060),
    eccentricity: Element::new(0.05386179, -0.00050991),
    inclination: Element::new(2.48599187, 0.00193609),
    mean_longitude: Element::new(49.95424423, 1_222.49362201),
    perihelion_longitude: Element::new(92.59887831, -0.41897216),
    ascending_node: Element::new(113.66242448, -0.28867794),
};

pub(crate) const URANUS: OrbitalElements = OrbitalElements {
    semi_major_axis: Element::new(19.18916464, -0.00196176),
    eccentricity: Element::new(0.04725744, -0.00004397),
    inclination: Element::new(0.77263783, -0.00242939),
    mean_longitude: Element::new(313.23810451, 428.48202785),
    perihelion_longitude: Element::new(170.95427630, 0.40805281),
    ascending_node: Element::new(74.01692503, 0.04240589),
};

pub(crate) const NEPTUNE: OrbitalElements = OrbitalElements {
    semi_major_axis: Element::new(30.06992276, 0.00026291),
    eccentricity: Element::new(0.00859048, 0.00005105),
    inclination: Element::new(1.77004347, 0.00035372),
    mean_longitude: Element::new(304.87997031, 218.45945325),
    perihelion_longitude: Element::new(44.96476227, -0.32241464),
    ascending_node: Element::new(131.78422574, -0.00508664),
};

/// Heliocentric rectangular position of the Earth-Moon barycenter
pub fn earth_moon_barycenter(epoch: Epoch) -> Result<Rectangular> {
    EARTH_MOON_BARYCENTER.rectangular(epoch)
}

/// Geocentric ecliptic position for a planet's element set
///
/// Computes the heliocentric position and shifts the origin by the
/// Earth-Moon barycenter at the same epoch.
pub fn geocentric_ecliptic(elements: &OrbitalElements, epoch: Epoch) -> Result<Ecliptic> {
    let barycenter = earth_moon_barycenter(epoch)?;
    let heliocentric = elements.rectangular(epoch)?;
    (heliocentric - barycenter).to_ecliptic(epoch)
}
