//! Fixed-star catalog
//!
//! A small bright-star catalog with J2000 mean places. The catalog covers
//! the ten brightest stars, the fifteen Behenian stars, the four royal
//! stars, and Polaris; proper motion and precession are below the accuracy
//! of the rest of the engine and are not applied.

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::coordinates::Equatorial;
use crate::time::Epoch;
use crate::{AlmagestError, Result};

/// Catalog stars, identified by conventional name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Star {
    Sirius,
    Canopus,
    RigilKentaurus,
    Arcturus,
    Vega,
    Capella,
    Rigel,
    Procyon,
    Achernar,
    Betelgeuse,
    Algol,
    Pleiades,
    Aldebaran,
    Regulus,
    Alkaid,
    Algorab,
    Spica,
    Alphecca,
    Antares,
    DenebAlgedi,
    Fomalhaut,
    Polaris,
}

/// Catalog order, J2000 right ascension and declination in degrees
const CATALOG: [(Star, f64, f64); 22] = [
    (Star::Sirius, 101.287155, -16.716116),
    (Star::Canopus, 95.987958, -52.695661),
    (Star::RigilKentaurus, 219.899077, -60.835760),
    (Star::Arcturus, 213.915417, 19.182222),
    (Star::Vega, 279.234735, 38.783689),
    (Star::Capella, 79.172328, 45.997991),
    (Star::Rigel, 78.634467, -8.201638),
    (Star::Procyon, 114.825498, 5.224988),
    (Star::Achernar, 24.428523, -57.236753),
    (Star::Betelgeuse, 88.792939, 7.407064),
    (Star::Algol, 47.042219, 40.955647),
    (Star::Pleiades, 56.850000, 24.116667),
    (Star::Aldebaran, 68.980163, 16.509302),
    (Star::Regulus, 152.092962, 11.967208),
    (Star::Alkaid, 206.885157, 49.313267),
    (Star::Algorab, 187.466063, -16.515431),
    (Star::Spica, 201.298246, -11.161319),
    (Star::Alphecca, 233.671950, 26.714692),
    (Star::Antares, 247.351915, -26.432003),
    (Star::DenebAlgedi, 326.760184, -16.127287),
    (Star::Fomalhaut, 344.100222, -31.565565),
    (Star::Polaris, 37.954542, 89.264111),
];

static BY_NAME: Lazy<HashMap<&'static str, Star>> = Lazy::new(|| {
    CATALOG
        .iter()
        .map(|&(star, _, _)| (star.name(), star))
        .collect()
});

impl Star {
    /// All catalog stars in catalog order
    pub fn all() -> impl Iterator<Item = Star> {
        CATALOG.iter().map(|&(star, _, _)| star)
    }

    /// Canonical lowercase name, with underscores for multi-word names
    pub fn name(self) -> &'static str {
        match self {
            Star::Sirius => "sirius",
            Star::Canopus => "canopus",
            Star::RigilKentaurus => "rigil_kentaurus",
            Star::Arcturus => "arcturus",
            Star::Vega => "vega",
            Star::Capella => "capella",
            Star::Rigel => "rigel",
            Star::Procyon => "procyon",
            Star::Achernar => "achernar",
            Star::Betelgeuse => "betelgeuse",
            Star::Algol => "algol",
            Star::Pleiades => "pleiades",
            Star::Aldebaran => "aldebaran",
            Star::Regulus => "regulus",
            Star::Alkaid => "alkaid",
            Star::Algorab => "algorab",
            Star::Spica => "spica",
            Star::Alphecca => "alphecca",
            Star::Antares => "antares",
            Star::DenebAlgedi => "deneb_algedi",
            Star::Fomalhaut => "fomalhaut",
            Star::Polaris => "polaris",
        }
    }

    /// Looks up a star by canonical name
    pub fn from_name(name: &str) -> Result<Star> {
        BY_NAME
            .get(name)
            .copied()
            .ok_or_else(|| AlmagestError::UnknownStar(name.to_owned()))
    }

    /// Catalog mean place, tagged with the requested epoch
    pub fn equatorial(self, epoch: Epoch) -> Equatorial {
        let (_, right_ascension, declination) = CATALOG[self as usize];
        Equatorial::new(right_ascension, declination, epoch)
    }
}

impl fmt::Display for Star {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_catalog_indices_match_discriminants() {
        for (index, &(star, _, _)) in CATALOG.iter().enumerate() {
            assert_eq!(star as usize, index, "{}", star);
        }
    }

    #[test]
    fn test_name_round_trip() {
        for star in Star::all() {
            assert_eq!(Star::from_name(star.name()).unwrap(), star);
        }
    }

    #[test]
    fn test_unknown_star() {
        match Star::from_name("sol") {
            Err(AlmagestError::UnknownStar(name)) => assert_eq!(name, "sol"),
            other => panic!("expected UnknownStar, got {:?}", other),
        }
    }

    #[test]
    fn test_sirius_place() {
        let position = Star::Sirius.equatorial(Epoch::J2000);
        assert_relative_eq!(position.right_ascension, 101.287155);
        assert_relative_eq!(position.declination, -16.716116);
    }

    #[test]
    fn test_place_independent_of_epoch() {
        let early = Star::Vega.equatorial(Epoch::from_days(-5000.0));
        let late = Star::Vega.equatorial(Epoch::from_days(5000.0));
        assert_eq!(early.right_ascension, late.right_ascension);
        assert_eq!(early.declination, late.declination);
    }

    #[test]
    fn test_polaris_near_pole() {
        assert!(Star::Polaris.equatorial(Epoch::J2000).declination > 89.0);
    }
}
