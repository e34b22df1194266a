//! Geographic coordinate module
//!
//! Provides the validated [`Coordinate`] value used by the qibla bearing
//! calculation and the prayer-time lookup, plus the fixed position of the
//! Kaaba.

mod types;

pub use types::{CoordError, Coordinate, MAX_LAT, MAX_LON, MIN_LAT, MIN_LON};

/// Position of the Kaaba in Mecca, the destination of every qibla bearing.
pub const KAABA: Coordinate = Coordinate::from_degrees_unchecked(21.422487, 39.826206);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_coordinate() {
        let c = Coordinate::new(-6.2088, 106.8456).unwrap();
        assert_eq!(c.lat(), -6.2088);
        assert_eq!(c.lon(), 106.8456);
    }

    #[test]
    fn test_invalid_latitude() {
        let result = Coordinate::new(91.0, 0.0);
        assert!(matches!(result, Err(CoordError::InvalidLatitude(_))));
    }

    #[test]
    fn test_invalid_longitude() {
        let result = Coordinate::new(0.0, -180.5);
        assert!(matches!(result, Err(CoordError::InvalidLongitude(_))));
    }

    #[test]
    fn test_nan_is_rejected() {
        assert!(Coordinate::new(f64::NAN, 0.0).is_err());
        assert!(Coordinate::new(0.0, f64::NAN).is_err());
    }

    #[test]
    fn test_boundaries_are_inclusive() {
        assert!(Coordinate::new(90.0, 180.0).is_ok());
        assert!(Coordinate::new(-90.0, -180.0).is_ok());
    }

    #[test]
    fn test_display_uses_hemispheres() {
        let c = Coordinate::new(-6.2088, 106.8456).unwrap();
        assert_eq!(c.to_string(), "6.2088°S, 106.8456°E");
        assert_eq!(KAABA.to_string(), "21.4225°N, 39.8262°E");
    }
}
