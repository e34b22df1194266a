//! Device location
//!
//! The platform location service and the reverse geocoder are external
//! collaborators reached through [`LocationProvider`] and [`Geocoder`].
//! A session only ever holds a [`LocationState`]: there is no default
//! coordinate, so a failed fix leaves the state `Unavailable` instead of
//! pointing the compass and the prayer lookup at (0, 0).

use std::fmt;

use thiserror::Error;

use crate::coord::Coordinate;

/// Errors from a location provider.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationError {
    #[error("location permission denied")]
    PermissionDenied,

    #[error("no location fix available")]
    NoFix,
}

/// Source of the device position.
pub trait LocationProvider {
    /// Current position, or why there is none.
    fn current(&self) -> Result<Coordinate, LocationError>;
}

/// Reverse geocoder turning a position into a place name.
pub trait Geocoder {
    /// Human-readable place for `coordinate`, if one is known.
    fn place_name(&self, coordinate: &Coordinate) -> Option<String>;
}

/// Provider that always reports the same position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedLocation(pub Coordinate);

impl LocationProvider for FixedLocation {
    fn current(&self) -> Result<Coordinate, LocationError> {
        Ok(self.0)
    }
}

/// Geocoder that knows no places.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoGeocoder;

impl Geocoder for NoGeocoder {
    fn place_name(&self, _coordinate: &Coordinate) -> Option<String> {
        None
    }
}

/// Label shown when the geocoder has no name for a position.
pub fn fallback_place_label(coordinate: &Coordinate) -> String {
    format!("Lat: {:.2}", coordinate.lat())
}

/// Where the session believes the user is.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LocationState {
    /// No fix requested yet.
    #[default]
    Unknown,
    /// A fix and its place label.
    Resolved { coordinate: Coordinate, place: String },
    /// The last request failed.
    Unavailable(LocationError),
}

impl LocationState {
    /// Resolves a position against `geocoder`, falling back to a
    /// latitude label.
    pub fn resolve<G: Geocoder + ?Sized>(coordinate: Coordinate, geocoder: &G) -> Self {
        let place = geocoder
            .place_name(&coordinate)
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| fallback_place_label(&coordinate));
        LocationState::Resolved { coordinate, place }
    }

    pub fn coordinate(&self) -> Option<Coordinate> {
        match self {
            LocationState::Resolved { coordinate, .. } => Some(*coordinate),
            _ => None,
        }
    }

    pub fn place(&self) -> Option<&str> {
        match self {
            LocationState::Resolved { place, .. } => Some(place),
            _ => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, LocationState::Resolved { .. })
    }
}

impl fmt::Display for LocationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocationState::Unknown => f.write_str("unknown"),
            LocationState::Resolved { coordinate, place } => write!(f, "{} ({})", place, coordinate),
            LocationState::Unavailable(reason) => write!(f, "unavailable: {}", reason),
        }
    }
}
