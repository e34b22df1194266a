//! Great-circle bearing and distance.

use crate::coord::{Coordinate, KAABA};

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Normalizes an angle in degrees into `[0, 360)`.
#[inline]
pub fn normalize_degrees(degrees: f64) -> f64 {
    let d = degrees % 360.0;
    if d < 0.0 {
        // -1e-15 % 360 + 360 rounds to exactly 360.0
        let wrapped = d + 360.0;
        if wrapped >= 360.0 {
            0.0
        } else {
            wrapped
        }
    } else {
        d
    }
}

/// Computes the initial great-circle bearing from `from` to `to`.
///
/// The result is in degrees clockwise from true north, in `[0, 360)`.
///
/// When the two points coincide (or are exactly antipodal) the bearing is
/// mathematically undefined: both atan2 arguments are zero and the result
/// is whatever `atan2(0, 0)` yields, which is `0.0` here. Callers must not
/// attach meaning to that value.
pub fn initial_bearing(from: &Coordinate, to: &Coordinate) -> f64 {
    let phi_from = from.lat_rad();
    let phi_to = to.lat_rad();
    let delta_lambda = to.lon_rad() - from.lon_rad();

    let x = delta_lambda.sin() * phi_to.cos();
    let y = phi_from.cos() * phi_to.sin() - phi_from.sin() * phi_to.cos() * delta_lambda.cos();

    normalize_degrees(x.atan2(y).to_degrees())
}

/// Bearing from `from` towards the Kaaba.
#[inline]
pub fn qibla_bearing(from: &Coordinate) -> f64 {
    initial_bearing(from, &KAABA)
}

/// Haversine distance between two coordinates, in kilometres.
pub fn great_circle_distance_km(from: &Coordinate, to: &Coordinate) -> f64 {
    let d_phi = to.lat_rad() - from.lat_rad();
    let d_lambda = to.lon_rad() - from.lon_rad();

    let a = (d_phi / 2.0).sin().powi(2)
        + from.lat_rad().cos() * to.lat_rad().cos() * (d_lambda / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(lat: f64, lon: f64) -> Coordinate {
        Coordinate::new(lat, lon).unwrap()
    }

    #[test]
    fn test_bearing_from_null_island() {
        let bearing = qibla_bearing(&coord(0.0, 0.0));
        assert!(
            (bearing - 58.508).abs() < 0.1,
            "expected ~58.51°, got {}",
            bearing
        );
    }

    #[test]
    fn test_bearing_from_jakarta_points_west_north_west() {
        let bearing = qibla_bearing(&coord(-6.2088, 106.8456));
        assert!((bearing - 295.15).abs() < 0.1, "got {}", bearing);
    }

    #[test]
    fn test_bearing_from_london_points_south_east() {
        let bearing = qibla_bearing(&coord(51.5074, -0.1278));
        assert!((bearing - 118.99).abs() < 0.1, "got {}", bearing);
    }

    #[test]
    fn test_bearing_due_east_along_equator() {
        let bearing = initial_bearing(&coord(0.0, 0.0), &coord(0.0, 10.0));
        assert!((bearing - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_bearing_due_south_is_180() {
        let bearing = initial_bearing(&coord(10.0, 20.0), &coord(-10.0, 20.0));
        assert!((bearing - 180.0).abs() < 1e-9);
    }

    #[test]
    fn test_coincident_points_stay_in_range() {
        // Degenerate: value is not meaningful, only its range is checked.
        let bearing = qibla_bearing(&KAABA);
        assert!((0.0..360.0).contains(&bearing));
    }

    #[test]
    fn test_normalize_degrees() {
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(-90.0), 270.0);
        assert_eq!(normalize_degrees(725.0), 5.0);
        assert!(normalize_degrees(-1e-15) < 360.0);
    }

    #[test]
    fn test_distance_jakarta_to_mecca() {
        let km = great_circle_distance_km(&coord(-6.2088, 106.8456), &KAABA);
        assert!((7_800.0..8_100.0).contains(&km), "got {}", km);
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        assert_eq!(great_circle_distance_km(&KAABA, &KAABA), 0.0);
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_bearing_always_in_range(
                lat in -90.0..=90.0_f64,
                lon in -180.0..=180.0_f64,
            ) {
                let bearing = qibla_bearing(&coord(lat, lon));
                prop_assert!(
                    (0.0..360.0).contains(&bearing),
                    "bearing out of range: {} for ({}, {})",
                    bearing, lat, lon
                );
            }

            #[test]
            fn test_normalize_always_in_range(deg in -10_000.0..10_000.0_f64) {
                let n = normalize_degrees(deg);
                prop_assert!((0.0..360.0).contains(&n));
            }
        }
    }
}
