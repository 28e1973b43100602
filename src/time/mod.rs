//! Time module: the continuous epoch axis and sidereal time
//!
//! All orbital series in this crate are functions of a single continuous
//! time coordinate: days since J2000.0. [`Epoch`] wraps that coordinate and
//! handles the conversions from wall-clock time (Unix milliseconds or
//! `chrono::DateTime<Utc>`) at the API boundary.
//!
//! Greenwich mean sidereal time is a linear function of the epoch, accurate
//! to about a second of time over a few centuries around J2000, which is
//! well inside this crate's arc-minute accuracy target.

use crate::angle::normalize_deg;
use crate::constants::{
    DAY_MS, GMST_J2000_DEG, GMST_RATE_DEG_PER_DAY, JULIAN_CENTURY_DAYS, OBLIQUITY_J2000_DEG,
    OBLIQUITY_RATE_DEG_PER_DAY, UNIX_TO_J2000_DAYS,
};
use crate::{AlmagestError, Result};
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A continuous instant on the astronomical time axis
///
/// Stored as fractional days since J2000.0 (2000-01-01T12:00). Values are
/// immutable once constructed; arithmetic methods return new epochs.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Epoch {
    days: f64,
}

impl Epoch {
    /// J2000.0 itself
    pub const J2000: Epoch = Epoch { days: 0.0 };

    /// Creates an epoch from fractional days since J2000.0
    pub fn from_days(days: f64) -> Self {
        Epoch { days }
    }

    /// Creates an epoch from milliseconds since the Unix epoch
    pub fn from_unix_ms(ms: i64) -> Self {
        Epoch {
            days: ms as f64 / DAY_MS - UNIX_TO_J2000_DAYS,
        }
    }

    /// Creates an epoch from a UTC calendar instant
    pub fn from_datetime(datetime: &DateTime<Utc>) -> Self {
        Self::from_unix_ms(datetime.timestamp_millis())
    }

    /// Fractional days since J2000.0
    pub fn days(&self) -> f64 {
        self.days
    }

    /// Julian centuries since J2000.0
    pub fn centuries(&self) -> f64 {
        self.days / JULIAN_CENTURY_DAYS
    }

    /// Milliseconds since the Unix epoch, rounded to the nearest millisecond
    pub fn to_unix_ms(&self) -> i64 {
        ((self.days + UNIX_TO_J2000_DAYS) * DAY_MS).round() as i64
    }

    /// Converts back to a UTC calendar instant
    ///
    /// Fails only for epochs outside chrono's representable range.
    pub fn to_datetime(&self) -> Result<DateTime<Utc>> {
        Utc.timestamp_millis_opt(self.to_unix_ms())
            .single()
            .ok_or_else(|| {
                AlmagestError::TimeOutOfRange(format!("{} days from J2000", self.days))
            })
    }

    /// A new epoch offset by fractional days
    pub fn add_days(&self, days: f64) -> Epoch {
        Epoch {
            days: self.days + days,
        }
    }

    /// A new epoch offset by fractional hours
    pub fn add_hours(&self, hours: f64) -> Epoch {
        self.add_days(hours / 24.0)
    }

    /// Signed difference `self - other` in days
    pub fn days_since(&self, other: Epoch) -> f64 {
        self.days - other.days
    }

    /// Greenwich mean sidereal time in degrees, [0, 360)
    pub fn gmst_deg(&self) -> f64 {
        normalize_deg(GMST_J2000_DEG + GMST_RATE_DEG_PER_DAY * self.days)
    }

    /// Local sidereal time in degrees for an observer at `longitude_deg`
    /// (east positive), [0, 360)
    pub fn local_sidereal_time_deg(&self, longitude_deg: f64) -> f64 {
        normalize_deg(self.gmst_deg() + longitude_deg)
    }

    /// Mean obliquity of the ecliptic in degrees at this epoch
    pub fn obliquity_deg(&self) -> f64 {
        OBLIQUITY_J2000_DEG + OBLIQUITY_RATE_DEG_PER_DAY * self.days
    }
}

impl fmt::Display for Epoch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_datetime() {
            Ok(datetime) => write!(f, "{}", datetime.to_rfc3339()),
            Err(_) => write!(f, "J2000{:+}d", self.days),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_unix_epoch_offset() {
        // 1970-01-01T00:00Z is 10957.5 days before J2000.0
        let epoch = Epoch::from_unix_ms(0);
        assert_relative_eq!(epoch.days(), -10_957.5);
    }

    #[test]
    fn test_j2000_is_noon_2000_01_01() {
        let j2000_ms = 10_957.5 * 86_400_000.0;
        let epoch = Epoch::from_unix_ms(j2000_ms as i64);
        assert_relative_eq!(epoch.days(), 0.0);

        let datetime = epoch.to_datetime().unwrap();
        assert_eq!(datetime.to_rfc3339(), "2000-01-01T12:00:00+00:00");
    }

    #[test]
    fn test_unix_ms_round_trip() {
        for ms in [0_i64, 946_728_000_000, 1_561_110_607_000, -86_400_000] {
            let epoch = Epoch::from_unix_ms(ms);
            assert_eq!(epoch.to_unix_ms(), ms);
        }
    }

    #[test]
    fn test_datetime_round_trip() {
        let datetime = DateTime::parse_from_rfc3339("2006-03-20T19:06:28.800Z")
            .unwrap()
            .with_timezone(&Utc);
        let epoch = Epoch::from_datetime(&datetime);
        assert_eq!(epoch.to_datetime().unwrap(), datetime);
    }

    #[test]
    fn test_gmst_at_j2000() {
        // 18.697374558 hours = 280.46061837 degrees
        assert_relative_eq!(Epoch::J2000.gmst_deg(), 280.46061837, epsilon = 1e-6);
    }

    #[test]
    fn test_gmst_advances_faster_than_solar_day() {
        // One solar day advances sidereal time by ~0.9856 degrees beyond a
        // full turn.
        let gmst0 = Epoch::J2000.gmst_deg();
        let gmst1 = Epoch::from_days(1.0).gmst_deg();
        let advance = (gmst1 - gmst0).rem_euclid(360.0);
        assert_relative_eq!(advance, 0.98564736, epsilon = 1e-5);
    }

    #[test]
    fn test_local_sidereal_time_offsets_by_longitude() {
        let epoch = Epoch::from_days(1234.5);
        let gmst = epoch.gmst_deg();
        assert_relative_eq!(
            epoch.local_sidereal_time_deg(-106.62),
            normalize_deg(gmst - 106.62),
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_obliquity_near_j2000() {
        assert_relative_eq!(Epoch::J2000.obliquity_deg(), 23.43928);
        // Slowly decreasing
        assert!(Epoch::from_days(36525.0).obliquity_deg() < 23.43928);
    }

    #[test]
    fn test_add_days_and_hours() {
        let epoch = Epoch::from_days(10.0);
        assert_relative_eq!(epoch.add_days(2.25).days(), 12.25);
        assert_relative_eq!(epoch.add_hours(6.0).days(), 10.25);
        assert_relative_eq!(epoch.add_hours(6.0).days_since(epoch), 0.25);
    }
}
