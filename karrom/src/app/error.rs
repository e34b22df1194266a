//! Application error types.

use thiserror::Error;

use crate::config::ConfigError;
use crate::coord::CoordError;
use crate::provider::ProviderError;
use crate::session::SessionError;

/// Errors surfaced to the application entry point.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error("Invalid coordinate: {0}")]
    Coordinate(#[from] CoordError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_display() {
        let err = AppError::Config(ConfigError::UnknownKey("display.theme".to_string()));
        assert_eq!(
            err.to_string(),
            "Configuration error: Unknown configuration key 'display.theme'"
        );
    }

    #[test]
    fn test_from_conversions() {
        let err: AppError = ConfigError::UnknownKey("x.y".to_string()).into();
        assert!(matches!(err, AppError::Config(_)));

        let err: AppError = SessionError::NoLocation.into();
        assert_eq!(err.to_string(), "No location has been resolved yet");

        let err: AppError = CoordError::InvalidLatitude(99.0).into();
        assert!(err.to_string().starts_with("Invalid coordinate"));
    }
}
