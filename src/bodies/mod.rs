//! Body models and the [`Body`] dispatch type
//!
//! Each body family has its own model: a trigonometric series for the Sun,
//! a trimmed periodic-term series for the Moon, osculating elements for the
//! planets, and a fixed catalog for the stars. [`Body`] tags them in one
//! value so callers can ask any body for its position through one surface.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::coordinates::{Ecliptic, Equatorial, Horizontal, Observer};
use crate::time::Epoch;
use crate::{AlmagestError, Result};

pub mod moon;
pub mod planets;
pub mod stars;
pub mod sun;

pub use moon::MoonPosition;
pub use stars::Star;

/// A body the engine can locate
///
/// `Eq` and `Hash` are derived so a body can key a position cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Star(Star),
}

impl Body {
    /// The planets in distance order
    pub const PLANETS: [Body; 7] = [
        Body::Mercury,
        Body::Venus,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::Uranus,
        Body::Neptune,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Body::Sun => "sun",
            Body::Moon => "moon",
            Body::Mercury => "mercury",
            Body::Venus => "venus",
            Body::Mars => "mars",
            Body::Jupiter => "jupiter",
            Body::Saturn => "saturn",
            Body::Uranus => "uranus",
            Body::Neptune => "neptune",
            Body::Star(star) => star.name(),
        }
    }

    /// Geocentric ecliptic position
    ///
    /// Stars have no measured distance in the catalog, so asking for a star's
    /// ecliptic position is a domain error; use [`Body::equatorial`] instead.
    pub fn ecliptic(&self, epoch: Epoch) -> Result<Ecliptic> {
        match self {
            Body::Sun => Ok(sun::ecliptic(epoch)),
            Body::Moon => Ok(moon::ecliptic(epoch)),
            Body::Mercury => planets::geocentric_ecliptic(&planets::MERCURY, epoch),
            Body::Venus => planets::geocentric_ecliptic(&planets::VENUS, epoch),
            Body::Mars => planets::geocentric_ecliptic(&planets::MARS, epoch),
            Body::Jupiter => planets::geocentric_ecliptic(&planets::JUPITER, epoch),
            Body::Saturn => planets::geocentric_ecliptic(&planets::SATURN, epoch),
            Body::Uranus => planets::geocentric_ecliptic(&planets::URANUS, epoch),
            Body::Neptune => planets::geocentric_ecliptic(&planets::NEPTUNE, epoch),
            Body::Star(star) => Err(AlmagestError::Domain(format!(
                "{} has no ecliptic distance in the catalog",
                star
            ))),
        }
    }

    /// Geocentric equatorial position
    pub fn equatorial(&self, epoch: Epoch) -> Result<Equatorial> {
        match self {
            Body::Star(star) => Ok(star.equatorial(epoch)),
            _ => Ok(self.ecliptic(epoch)?.to_equatorial()),
        }
    }

    /// Topocentric altitude and azimuth for an observer
    ///
    /// Solar-system bodies get the parallax correction; a star's parallax is
    /// far below the engine's accuracy, so stars convert geocentrically.
    pub fn horizontal(&self, epoch: Epoch, observer: &Observer) -> Result<Horizontal> {
        match self {
            Body::Star(star) => Ok(star.equatorial(epoch).to_horizontal(observer)),
            _ => self.ecliptic(epoch)?.to_horizontal(observer),
        }
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
