//! Configuration error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors reading, writing or editing the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {reason}")]
    Read { path: PathBuf, reason: String },

    #[error("Failed to write config file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unknown configuration key '{0}'")]
    UnknownKey(String),

    #[error("Invalid value '{value}' for {key}: {reason}")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_value_display() {
        let err = ConfigError::InvalidValue {
            key: "prayer.method".to_string(),
            value: "abc".to_string(),
            reason: "expected a number between 0 and 255".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value 'abc' for prayer.method: expected a number between 0 and 255"
        );
    }
}
