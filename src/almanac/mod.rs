//! Rise, set, transit and twilight solving
//!
//! Two strategies cover every body. Slow movers (Sun, planets, stars) use
//! the direct hour-angle formula refined iteratively: find the transit by
//! walking the hour angle to zero, then offset by the semi-diurnal arc for
//! the target altitude, recomputing the declination at each candidate. The
//! Moon's declination swings too fast for that, and its rise and set do not
//! recur every calendar day, so it gets a parabola-fit scan instead: sample
//! the topocentric altitude in one-hour steps across a 24 hour window, fit
//! three samples at a time to a parabola, and solve for the crossings.
//!
//! A body that never reaches the target altitude (circumpolar, or never
//! rising at all) yields `Ok(None)`. That is an expected outcome, distinct
//! from [`AlmagestError::Convergence`], which signals that refinement never
//! settled.

use serde::{Deserialize, Serialize};

use crate::angle::{acos_deg, cos_deg, normalize_signed_deg, sin_deg};
use crate::bodies::Body;
use crate::constants::{
    CIVIL_TWILIGHT_ALTITUDE_DEG, MOONRISE_ALTITUDE_DEG, SUNRISE_ALTITUDE_DEG,
};
use crate::coordinates::Observer;
use crate::time::Epoch;
use crate::{AlmagestError, Result};

/// Successive candidate times closer than this count as converged.
const TIME_TOLERANCE_DAYS: f64 = 60.0 / 86_400.0;

/// Refinement cap for both the transit walk and the altitude crossing.
const MAX_REFINEMENTS: u32 = 10;

/// Which way the body crosses the target altitude
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Rising,
    Setting,
}

/// Meridian transit nearest to `near`
///
/// Walks the candidate time by the signed hour angle until it settles
/// within one minute. The hour angle advances a shade over 360 degrees per
/// day, so each step lands slightly past the mark and the walk converges
/// geometrically.
pub fn transit(body: Body, observer: &Observer, near: Epoch) -> Result<Epoch> {
    let mut candidate = near;
    for iteration in 0..MAX_REFINEMENTS {
        let position = body.equatorial(candidate)?;
        let hour_angle = normalize_signed_deg(position.hour_angle_deg(observer.longitude));
        let step_days = hour_angle / 360.0;
        log::debug!(
            "transit {}: pass {} candidate {} step {:+.6} d",
            body,
            iteration,
            candidate,
            -step_days
        );
        candidate = candidate.add_days(-step_days);
        if step_days.abs() < TIME_TOLERANCE_DAYS {
            return Ok(candidate);
        }
    }
    Err(AlmagestError::Convergence {
        context: "transit refinement",
        iterations: MAX_REFINEMENTS,
    })
}

/// Semi-diurnal arc in degrees for a declination and target altitude
///
/// `None` means the body never crosses the target altitude at this
/// latitude, in either the circumpolar or the never-rises sense.
fn semi_diurnal_arc_deg(latitude: f64, declination: f64, target_altitude: f64) -> Option<f64> {
    let cos_h0 = (sin_deg(target_altitude) - sin_deg(latitude) * sin_deg(declination))
        / (cos_deg(latitude) * cos_deg(declination));
    // At a pole the quotient can degenerate to 0/0. The altitude is
    // constant there, so a NaN is the no-crossing case too.
    if cos_h0.is_nan() || cos_h0.abs() > 1.0 {
        None
    } else {
        Some(acos_deg(cos_h0))
    }
}

/// Time the body crosses `target_altitude` in the given direction, nearest
/// to `near`
///
/// The Moon routes to the scanning solver; see [`scan_crossing`]. Everyone
/// else uses the hour-angle formula, re-solved at each candidate time until
/// the answer stops moving.
pub fn crossing(
    body: Body,
    observer: &Observer,
    target_altitude: f64,
    direction: Direction,
    near: Epoch,
) -> Result<Option<Epoch>> {
    if body == Body::Moon {
        return scan_crossing(body, observer, target_altitude, direction, near);
    }

    let transit_time = transit(body, observer, near)?;
    let sign = match direction {
        Direction::Rising => -1.0,
        Direction::Setting => 1.0,
    };

    let mut candidate = transit_time;
    for iteration in 0..MAX_REFINEMENTS {
        let declination = body.equatorial(candidate)?.declination;
        let arc = match semi_diurnal_arc_deg(observer.latitude, declination, target_altitude) {
            Some(arc) => arc,
            None => return Ok(None),
        };
        let refined = transit_time.add_days(sign * arc / 360.0);
        let shift_days = refined.days_since(candidate).abs();
        log::debug!(
            "crossing {} {:?}: pass {} candidate {} shift {:.6} d",
            body,
            direction,
            iteration,
            refined,
            shift_days
        );
        candidate = refined;
        if shift_days < TIME_TOLERANCE_DAYS {
            return Ok(Some(candidate));
        }
    }
    Err(AlmagestError::Convergence {
        context: "altitude crossing refinement",
        iterations: MAX_REFINEMENTS,
    })
}

/// Scanning solver for bodies whose altitude curve cannot be treated as a
/// single arc per day
///
/// Samples the topocentric altitude hourly over the 24 hours after `near`,
/// fits each pair of adjacent hours to a parabola through three samples,
/// and takes the parabola roots as crossings. Returns the earliest crossing
/// in the requested direction, or `Ok(None)` when the window holds none.
pub fn scan_crossing(
    body: Body,
    observer: &Observer,
    target_altitude: f64,
    direction: Direction,
    near: Epoch,
) -> Result<Option<Epoch>> {
    let relative_altitude = |hours: f64| -> Result<f64> {
        let position = body.horizontal(near.add_hours(hours), observer)?;
        Ok(position.altitude - target_altitude)
    };

    let mut rise_hours: Option<f64> = None;
    let mut set_hours: Option<f64> = None;

    let mut h0 = relative_altitude(0.0)?;
    let mut h1 = h0;
    let mut window = 0;
    while window <= 24 {
        if window != 0 {
            h1 = relative_altitude(window as f64)?;
        }
        let h2 = relative_altitude(window as f64 + 1.0)?;

        // Parabola through (-1, h0), (0, h1), (1, h2), in hours from the
        // window center.
        let a = (h2 + h0) / 2.0 - h1;
        let b = (h2 - h0) / 2.0;
        let vertex = -b / (2.0 * a);
        let vertex_value = (a * vertex + b) * vertex + h1;

        // The first window has no sample before `near`, so roots left of
        // its center would land before the scan start and are discarded.
        let min_x = if window == 0 { 0.0 } else { -1.0 };

        let discriminant = b * b - 4.0 * a * h1;
        let mut roots = 0;
        let mut x1 = f64::NAN;
        let mut x2 = f64::NAN;
        if discriminant >= 0.0 {
            let half_width = discriminant.sqrt() / (2.0 * a.abs());
            x1 = vertex - half_width;
            x2 = vertex + half_width;
            if (min_x..=1.0).contains(&x1) {
                roots += 1;
            }
            if (min_x..=1.0).contains(&x2) {
                roots += 1;
            }
            if x1 < min_x {
                x1 = x2;
            }
        }

        if roots == 1 {
            if h0 < 0.0 && rise_hours.is_none() {
                rise_hours = Some(window as f64 + x1);
            } else if set_hours.is_none() {
                set_hours = Some(window as f64 + x1);
            }
        } else if roots == 2 {
            if rise_hours.is_none() {
                rise_hours = Some(window as f64 + if vertex_value < 0.0 { x2 } else { x1 });
            }
            if set_hours.is_none() {
                set_hours = Some(window as f64 + if vertex_value < 0.0 { x1 } else { x2 });
            }
        }

        if rise_hours.is_some() && set_hours.is_some() {
            break;
        }

        h0 = h2;
        window += 2;
    }

    let found = match direction {
        Direction::Rising => rise_hours,
        Direction::Setting => set_hours,
    };
    log::debug!(
        "scan {} {:?} from {}: rise {:?} h, set {:?} h",
        body,
        direction,
        near,
        rise_hours,
        set_hours
    );
    Ok(found.map(|hours| near.add_hours(hours)))
}

/// Sunrise nearest to `near`, at the standard -0.833 degree altitude
pub fn sunrise(observer: &Observer, near: Epoch) -> Result<Option<Epoch>> {
    crossing(
        Body::Sun,
        observer,
        SUNRISE_ALTITUDE_DEG,
        Direction::Rising,
        near,
    )
}

/// Sunset nearest to `near`, at the standard -0.833 degree altitude
pub fn sunset(observer: &Observer, near: Epoch) -> Result<Option<Epoch>> {
    crossing(
        Body::Sun,
        observer,
        SUNRISE_ALTITUDE_DEG,
        Direction::Setting,
        near,
    )
}

/// Civil dawn nearest to `near` (Sun at -6 degrees, rising)
pub fn dawn(observer: &Observer, near: Epoch) -> Result<Option<Epoch>> {
    crossing(
        Body::Sun,
        observer,
        CIVIL_TWILIGHT_ALTITUDE_DEG,
        Direction::Rising,
        near,
    )
}

/// Civil dusk nearest to `near` (Sun at -6 degrees, setting)
pub fn dusk(observer: &Observer, near: Epoch) -> Result<Option<Epoch>> {
    crossing(
        Body::Sun,
        observer,
        CIVIL_TWILIGHT_ALTITUDE_DEG,
        Direction::Setting,
        near,
    )
}

/// First moonrise in the 24 hours after `near`
pub fn moonrise(observer: &Observer, near: Epoch) -> Result<Option<Epoch>> {
    crossing(
        Body::Moon,
        observer,
        MOONRISE_ALTITUDE_DEG,
        Direction::Rising,
        near,
    )
}

/// First moonset in the 24 hours after `near`
pub fn moonset(observer: &Observer, near: Epoch) -> Result<Option<Epoch>> {
    crossing(
        Body::Moon,
        observer,
        MOONRISE_ALTITUDE_DEG,
        Direction::Setting,
        near,
    )
}
