//! Constants shared across the position and event pipelines

use std::f64::consts::PI;

// Angles
/// Degrees to radians conversion factor
pub const DEG2RAD: f64 = PI / 180.0;
/// Radians to degrees conversion factor
pub const RAD2DEG: f64 = 180.0 / PI;

// Time
/// Milliseconds in a day
pub const DAY_MS: f64 = 86_400_000.0;
/// Days from the Unix epoch (1970-01-01T00:00Z) to J2000.0 (2000-01-01T12:00 TT)
pub const UNIX_TO_J2000_DAYS: f64 = 10_957.5;
/// Days in a Julian century
pub const JULIAN_CENTURY_DAYS: f64 = 36_525.0;

// Earth orientation
/// Mean obliquity of the ecliptic at J2000.0, degrees
pub const OBLIQUITY_J2000_DEG: f64 = 23.43928;
/// Obliquity drift, degrees per day
pub const OBLIQUITY_RATE_DEG_PER_DAY: f64 = -0.000_000_356_3;
/// Greenwich mean sidereal time at J2000.0, degrees (18.697374558 h)
pub const GMST_J2000_DEG: f64 = 18.697_374_558 * 15.0;
/// Sidereal rotation rate, degrees per day (24.06570982441908 h/day)
pub const GMST_RATE_DEG_PER_DAY: f64 = 24.065_709_824_419_08 * 15.0;

/// Sine of the equatorial horizontal parallax for a body one AU away.
///
/// Divide by the body's distance in AU before taking the arcsine; the
/// correction is only material for the Moon (~0.95 degrees).
pub const PARALLAX_SIN_AT_1AU: f64 = 0.000_042_635_21;

// Standard event altitudes, degrees
/// Visual sunrise/sunset: refraction plus the solar semidiameter
pub const SUNRISE_ALTITUDE_DEG: f64 = -0.833;
/// Civil dawn/dusk
pub const CIVIL_TWILIGHT_ALTITUDE_DEG: f64 = -6.0;
/// Moonrise/moonset, topocentric
pub const MOONRISE_ALTITUDE_DEG: f64 = 0.0;
