//! Opt-in position memoization
//!
//! The position functions are pure, so callers that revisit the same
//! `(body, instant)` pair can cache freely. [`Ephemeris`] is that cache,
//! owned by the caller rather than hidden inside the engine. Keys round
//! the epoch to the millisecond, matching the precision of the boundary
//! timestamp type.

use std::collections::HashMap;

use crate::bodies::Body;
use crate::coordinates::{Equatorial, Horizontal, Observer};
use crate::time::Epoch;
use crate::Result;

/// Caller-owned memoization of geocentric equatorial positions
#[derive(Debug, Default)]
pub struct Ephemeris {
    cache: HashMap<(Body, i64), Equatorial>,
}

impl Ephemeris {
    pub fn new() -> Self {
        Ephemeris::default()
    }

    /// Geocentric equatorial position, computed at most once per
    /// `(body, millisecond)` key
    pub fn equatorial(&mut self, body: Body, epoch: Epoch) -> Result<Equatorial> {
        let key = (body, epoch.to_unix_ms());
        if let Some(&cached) = self.cache.get(&key) {
            log::trace!("ephemeris hit for {} at {}", body, epoch);
            return Ok(cached);
        }
        let position = body.equatorial(epoch)?;
        self.cache.insert(key, position);
        Ok(position)
    }

    /// Topocentric altitude and azimuth, built on the cached equatorial
    /// position
    ///
    /// Solar-system bodies still get the parallax correction; the distance
    /// comes from the body model, not the cache.
    pub fn horizontal(
        &mut self,
        body: Body,
        epoch: Epoch,
        observer: &Observer,
    ) -> Result<Horizontal> {
        let geocentric = self.equatorial(body, epoch)?.to_horizontal(observer);
        match body {
            Body::Star(_) => Ok(geocentric),
            _ => {
                let distance = body.ecliptic(epoch)?.distance;
                geocentric.corrected_for_parallax(distance)
            }
        }
    }

    /// Number of cached positions
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Drops every cached position
    pub fn clear(&mut self) {
        self.cache.clear();
    }
}
