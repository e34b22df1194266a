//! CLI error type and exit codes.

use std::fmt;

use karrom::app::AppError;
use karrom::config::ConfigError;
use karrom::coord::CoordError;
use karrom::location::LocationError;
use karrom::provider::ProviderError;
use karrom::session::SessionError;

/// Errors reported by CLI commands.
#[derive(Debug)]
pub enum CliError {
    /// Configuration file or key problem.
    Config(String),

    /// Invalid command-line input.
    InvalidInput(String),

    /// A remote API request failed.
    Network(ProviderError),

    /// No usable location.
    Location(String),

    /// The compass could not be started.
    Compass(String),

    /// The requested record does not exist.
    NotFound(String),
}

impl CliError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Config(_) | CliError::InvalidInput(_) => 2,
            CliError::Network(_) => 3,
            CliError::Location(_) => 4,
            CliError::Compass(_) => 5,
            CliError::NotFound(_) => 6,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::InvalidInput(msg) => write!(f, "{}", msg),
            CliError::Network(e) => write!(f, "Request failed: {}", e),
            CliError::Location(msg) => write!(f, "Location error: {}", msg),
            CliError::Compass(msg) => write!(f, "Compass error: {}", msg),
            CliError::NotFound(msg) => write!(f, "Not found: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Network(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        CliError::Config(e.to_string())
    }
}

impl From<ProviderError> for CliError {
    fn from(e: ProviderError) -> Self {
        CliError::Network(e)
    }
}

impl From<CoordError> for CliError {
    fn from(e: CoordError) -> Self {
        CliError::InvalidInput(e.to_string())
    }
}

impl From<LocationError> for CliError {
    fn from(e: LocationError) -> Self {
        CliError::Location(e.to_string())
    }
}

impl From<SessionError> for CliError {
    fn from(e: SessionError) -> Self {
        match e {
            SessionError::Provider(e) => CliError::Network(e),
            SessionError::Location(e) => e.into(),
            SessionError::Sensor(e) => CliError::Compass(e.to_string()),
            SessionError::NoLocation => CliError::Location(e.to_string()),
        }
    }
}

impl From<AppError> for CliError {
    fn from(e: AppError) -> Self {
        match e {
            AppError::Config(e) => e.into(),
            AppError::Provider(e) => e.into(),
            AppError::Session(e) => e.into(),
            AppError::Coordinate(e) => e.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct_per_kind() {
        assert_eq!(CliError::Config("x".into()).exit_code(), 2);
        assert_eq!(
            CliError::Network(ProviderError::HttpError("down".into())).exit_code(),
            3
        );
        assert_eq!(CliError::from(SessionError::NoLocation).exit_code(), 4);
    }

    #[test]
    fn test_session_errors_map_by_kind() {
        let err = CliError::from(SessionError::Location(LocationError::NoFix));
        assert!(matches!(err, CliError::Location(_)));
        assert_eq!(err.to_string(), "Location error: no location fix available");
    }
}
