//! Shared provider types.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur while talking to a remote API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// Transport-level failure (connection, TLS, timeout).
    #[error("HTTP error: {0}")]
    HttpError(String),

    /// The server answered with a non-success status.
    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    /// The body could not be decoded into the expected shape.
    #[error("Failed to decode response from {url}: {reason}")]
    Decode { url: String, reason: String },

    /// A request argument is outside what the API accepts.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

/// The `{ "data": ... }` envelope every API in use wraps its payload in.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Envelope<T> {
    pub data: T,
}

/// Decodes an enveloped JSON body and returns its `data` payload.
pub(crate) fn decode_data<T: DeserializeOwned>(url: &str, body: &[u8]) -> Result<T, ProviderError> {
    serde_json::from_slice::<Envelope<T>>(body)
        .map(|envelope| envelope.data)
        .map_err(|e| ProviderError::Decode {
            url: url.to_string(),
            reason: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_unwraps_envelope() {
        let body = br#"{"code": 200, "data": [1, 2, 3]}"#;
        let data: Vec<u32> = decode_data("http://x", body).unwrap();
        assert_eq!(data, vec![1, 2, 3]);
    }

    #[test]
    fn test_decode_reports_url() {
        let err = decode_data::<Vec<u32>>("http://x/surah", b"<html>").unwrap_err();
        assert!(matches!(err, ProviderError::Decode { ref url, .. } if url == "http://x/surah"));
        assert!(err.to_string().contains("http://x/surah"));
    }

    #[test]
    fn test_status_display() {
        let err = ProviderError::Status {
            status: 404,
            url: "http://x/surah/115".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 404 from http://x/surah/115");
    }
}
