//! End-to-end position checks against published astronomical data

use almagest::{Body, Epoch, Observer, Star};
use approx::assert_relative_eq;
use chrono::{DateTime, Utc};
use rstest::rstest;

fn epoch_of(rfc3339: &str) -> Epoch {
    let datetime = DateTime::parse_from_rfc3339(rfc3339)
        .unwrap()
        .with_timezone(&Utc);
    Epoch::from_datetime(&datetime)
}

fn angle_difference(a: f64, b: f64) -> f64 {
    let difference = (a - b).rem_euclid(360.0);
    if difference > 180.0 {
        difference - 360.0
    } else {
        difference
    }
}

/// The Sun's ecliptic longitude hits the cardinal points at the published
/// 1999 equinox and solstice instants.
#[rstest]
#[case("1999-03-21T01:46:00Z", 0.0, 0.996)]
#[case("1999-06-21T19:49:00Z", 90.0, 1.016)]
#[case("1999-09-23T11:32:00Z", 180.0, 1.003)]
#[case("1999-12-22T07:44:00Z", 270.0, 0.984)]
fn seasonal_markers(#[case] instant: &str, #[case] longitude: f64, #[case] distance: f64) {
    let sun = Body::Sun.ecliptic(epoch_of(instant)).unwrap();
    assert!(
        angle_difference(sun.longitude, longitude).abs() < 0.01,
        "longitude {} at {}",
        sun.longitude,
        instant
    );
    assert!(sun.latitude.abs() < 0.01);
    assert_relative_eq!(sun.distance, distance, epsilon = 0.001);
}

/// Eratosthenes' experiment: on the June solstice the Sun stands at the
/// zenith of Syene while its shadow at Alexandria subtends about 1/7 radian,
/// giving the classical Earth-circumference estimate.
#[test]
fn eratosthenes_shadow_measurement() {
    let noon = epoch_of("2019-06-21T11:50:07+02:00");
    let syene = Observer::new(23.43679, 32.899722);
    let alexandria = Observer::new(31.2, 29.916667);

    let overhead = Body::Sun.horizontal(noon, &syene).unwrap();
    assert_relative_eq!(overhead.altitude, 90.0, epsilon = 0.01);

    let shadowed = Body::Sun.horizontal(noon, &alexandria).unwrap();
    let shadow_ratio = 1.0 / shadowed.altitude.to_radians().tan();
    assert_relative_eq!(shadow_ratio, 1.0 / 7.0, epsilon = 0.01);

    // Distance Syene-Alexandria along the meridian
    let baseline_km = 912.017;
    let zenith_difference = overhead.altitude - shadowed.altitude;
    let circumference_km = 360.0 / zenith_difference * baseline_km;
    assert!(
        (circumference_km - 40_075.0).abs() < 100.0,
        "circumference {} km",
        circumference_km
    );
}

/// The inner planets never stray far from the Sun in longitude.
#[test]
fn inner_planet_elongation_bounds() {
    for step in 0..500 {
        let epoch = Epoch::from_days(-4000.0 + 16.0 * step as f64);
        let sun = Body::Sun.ecliptic(epoch).unwrap();
        let mercury = Body::Mercury.ecliptic(epoch).unwrap();
        let venus = Body::Venus.ecliptic(epoch).unwrap();
        assert!(
            angle_difference(mercury.longitude, sun.longitude).abs() < 28.5,
            "mercury elongation at {}",
            epoch
        );
        assert!(
            angle_difference(venus.longitude, sun.longitude).abs() < 48.0,
            "venus elongation at {}",
            epoch
        );
    }
}

/// Planets stay within a few degrees of the ecliptic plane.
#[test]
fn planets_hug_the_ecliptic() {
    for step in 0..60 {
        let epoch = Epoch::from_days(-3000.0 + 100.0 * step as f64);
        for body in Body::PLANETS {
            let latitude = body.ecliptic(epoch).unwrap().latitude;
            assert!(latitude.abs() < 9.0, "{} latitude {}", body, latitude);
        }
    }
}

/// Sirius culminates due south of a northern observer at its catalog
/// meridian altitude.
#[test]
fn sirius_culmination_altitude() {
    let observer = Observer::new(40.7, -74.0);
    let near = epoch_of("2020-01-01T05:00:00Z");
    let culmination = almagest::almanac::transit(Body::Star(Star::Sirius), &observer, near).unwrap();
    let position = Body::Star(Star::Sirius)
        .horizontal(culmination, &observer)
        .unwrap();
    // Meridian altitude = 90 - |lat - dec|
    let expected = 90.0 - (40.7 - (-16.716116_f64)).abs();
    assert_relative_eq!(position.altitude, expected, epsilon = 0.05);
    assert_relative_eq!(position.azimuth, 180.0, epsilon = 1.0);
}

/// Repeated queries with identical inputs are bit-identical.
#[test]
fn positions_are_idempotent() {
    let epoch = epoch_of("2013-07-04T09:00:00Z");
    let observer = Observer::new(-33.856, 151.215);
    for body in [Body::Sun, Body::Moon, Body::Saturn, Body::Star(Star::Canopus)] {
        let first = body.horizontal(epoch, &observer).unwrap();
        let second = body.horizontal(epoch, &observer).unwrap();
        assert_eq!(first.altitude.to_bits(), second.altitude.to_bits());
        assert_eq!(first.azimuth.to_bits(), second.azimuth.to_bits());
    }
}

/// The Moon's topocentric altitude sits about a degree below the geocentric
/// value near the horizon; parallax for everything else is negligible.
#[test]
fn lunar_parallax_magnitude() {
    let observer = Observer::new(0.0, 0.0);
    let mut checked = false;
    for hour in 0..48 {
        let epoch = Epoch::from_days(100.0 + hour as f64 / 24.0);
        let moon_equatorial = Body::Moon.equatorial(epoch).unwrap();
        let geocentric = moon_equatorial.to_horizontal(&observer);
        if geocentric.altitude.abs() < 5.0 {
            let topocentric = Body::Moon.horizontal(epoch, &observer).unwrap();
            let shift = geocentric.altitude - topocentric.altitude;
            assert!((0.8..1.1).contains(&shift), "parallax shift {}", shift);
            checked = true;
        }
    }
    assert!(checked);
}
