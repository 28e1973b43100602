//! Almagest: apparent positions of solar-system bodies and fixed stars
//!
//! This crate computes where the Sun, Moon, planets, and a small catalog of
//! bright stars appear in the sky for an observer on Earth at an arbitrary
//! instant, and solves for rise, set, transit, dawn, and dusk times.
//!
//! The pipeline is a chain of pure coordinate transforms: osculating orbital
//! elements are turned into heliocentric rectangular coordinates by solving
//! Kepler's equation, then projected through ecliptic and equatorial frames
//! down to altitude/azimuth for a given observer. The almanac module searches
//! that pipeline over time to locate altitude crossings.
//!
//! Accuracy is arc-minute class, suitable for amateur astronomy. There is no
//! nutation, aberration, or light-time correction; topocentric parallax is
//! applied, which matters for the Moon.
//!
//! # Units
//!
//! All public angles are in degrees (including right ascension), distances in
//! astronomical units, and instants either `chrono::DateTime<Utc>` / Unix
//! milliseconds at the boundary or [`time::Epoch`] (days since J2000.0)
//! internally.
//!
//! # Example
//!
//! ```rust
//! use almagest::{Body, Epoch, Observer};
//!
//! let epoch = Epoch::from_unix_ms(922_585_560_000); // 1999-03-28T01:46Z
//! let sun = Body::Sun.ecliptic(epoch).unwrap();
//! assert!(sun.longitude >= 0.0 && sun.longitude < 360.0);
//!
//! let observer = Observer::new(42.65, -73.76);
//! let horizontal = Body::Sun.horizontal(epoch, &observer).unwrap();
//! assert!(horizontal.altitude >= -90.0 && horizontal.altitude <= 90.0);
//! ```

use thiserror::Error;

pub mod almanac;
pub mod angle;
pub mod bodies;
pub mod constants;
pub mod coordinates;
pub mod ephemeris;
pub mod kepler;
pub mod time;

// Re-export commonly used types
pub use almanac::Direction;
pub use bodies::{Body, Star};
pub use coordinates::{Ecliptic, Equatorial, Horizontal, Observer, Rectangular};
pub use ephemeris::Ephemeris;
pub use time::Epoch;

/// Main error type for the almagest library
///
/// A "no event" outcome (a body that never crosses the requested altitude)
/// is *not* an error; the almanac solvers report it as `Ok(None)`. Errors
/// indicate malformed inputs or a computation that failed to settle.
#[derive(Debug, Error)]
pub enum AlmagestError {
    #[error("Domain error: {0}")]
    Domain(String),

    #[error("{context} did not converge after {iterations} iterations")]
    Convergence {
        context: &'static str,
        iterations: u32,
    },

    #[error("Unknown star: {0}")]
    UnknownStar(String),

    #[error("Time out of range: {0}")]
    TimeOutOfRange(String),
}

/// Result type for almagest operations
pub type Result<T> = std::result::Result<T, AlmagestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_variants_are_distinguishable() {
        let convergence = AlmagestError::Convergence {
            context: "kepler",
            iterations: 30,
        };
        let domain = AlmagestError::Domain("eccentricity out of range".to_string());

        assert!(matches!(convergence, AlmagestError::Convergence { .. }));
        assert!(matches!(domain, AlmagestError::Domain(_)));
        assert!(convergence.to_string().contains("30"));
    }

    #[test]
    fn full_pipeline_produces_bounded_coordinates() {
        let epoch = Epoch::from_unix_ms(1_150_000_000_000);
        let observer = Observer::new(35.05, -106.62);

        for body in [
            Body::Sun,
            Body::Moon,
            Body::Mercury,
            Body::Venus,
            Body::Mars,
            Body::Jupiter,
            Body::Saturn,
            Body::Uranus,
            Body::Neptune,
            Body::Star(Star::Sirius),
        ] {
            let horizontal = body.horizontal(epoch, &observer).unwrap();
            assert!(
                (-90.0..=90.0).contains(&horizontal.altitude),
                "{} altitude out of range: {}",
                body.name(),
                horizontal.altitude
            );
            assert!(
                (0.0..360.0).contains(&horizontal.azimuth),
                "{} azimuth out of range: {}",
                body.name(),
                horizontal.azimuth
            );
        }
    }
}
