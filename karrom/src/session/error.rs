//! Session error types.

use thiserror::Error;

use crate::location::LocationError;
use crate::provider::ProviderError;
use crate::qibla::SensorError;

/// Errors from session operations.
///
/// A failed operation leaves the session's previously loaded data in place.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("Location unavailable: {0}")]
    Location(#[from] LocationError),

    #[error(transparent)]
    Sensor(#[from] SensorError),

    /// The operation needs a resolved location and there is none.
    #[error("No location has been resolved yet")]
    NoLocation,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            SessionError::Location(LocationError::PermissionDenied).to_string(),
            "Location unavailable: location permission denied"
        );
        assert_eq!(
            SessionError::NoLocation.to_string(),
            "No location has been resolved yet"
        );
    }

    #[test]
    fn test_provider_error_is_transparent() {
        let err: SessionError = ProviderError::HttpError("timeout".to_string()).into();
        assert_eq!(err.to_string(), "HTTP error: timeout");
    }
}
