//! Error types for backend API calls.
//!
//! The client never translates or recovers from failures: every variant
//! carries the underlying cause as it was observed on the wire.

use thiserror::Error;

/// Result type alias for backend API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors returned by the backend API client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend answered with a non-2xx status.
    #[error("backend request failed with status {status}: {url}")]
    Status {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
        /// Response body text, empty when it could not be read
        body: String,
    },

    /// Network, timeout or HTTP client error.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON encoding or decoding error.
    #[error("JSON error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

impl ApiError {
    /// Whether the request was aborted by the client timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Network(e) if e.is_timeout())
    }

    /// HTTP status of a rejected request, if the backend answered at all.
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Response body of a rejected request.
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Status { body, .. } => Some(body),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message() {
        let error = ApiError::Status {
            status: 404,
            url: "http://localhost:8000/api/status/abc".to_string(),
            body: r#"{"detail":"Task not found"}"#.to_string(),
        };
        let msg = error.to_string();
        assert!(msg.contains("404"));
        assert!(msg.contains("/api/status/abc"));
        assert_eq!(error.status(), Some(404));
        assert_eq!(error.body(), Some(r#"{"detail":"Task not found"}"#));
        assert!(!error.is_timeout());
    }

    #[test]
    fn test_json_error_has_no_status() {
        let error: ApiError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(error, ApiError::JsonParse(_)));
        assert_eq!(error.status(), None);
        assert_eq!(error.body(), None);
    }

    #[test]
    fn test_invalid_url_error() {
        let error: ApiError = url::Url::parse("not a url").unwrap_err().into();
        assert!(error.to_string().starts_with("invalid URL"));
    }
}
