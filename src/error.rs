//! Admin API error types
//!
//! Common error enum and response-body helpers used by every module in the
//! crate.

use thiserror::Error;

/// Maximum response body size for admin API calls (16 MB).
/// Prevents OOM from malicious or misconfigured endpoints.
pub const MAX_RESPONSE_SIZE: usize = 16 * 1024 * 1024;

/// Common error type for all admin API operations.
#[derive(Debug, Error)]
pub enum AdminError {
    /// Malformed or missing caller input. Never sent over the wire.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The service reported a duplicate-name conflict on create.
    ///
    /// Distinguished so callers can implement create-or-update flows by
    /// matching this variant and falling through to `update`.
    #[error("Resource already exists: {message}")]
    AlreadyExists { message: String },

    /// The named resource does not exist server-side.
    #[error("Resource not found: {message}")]
    NotFound { message: String },

    /// Any other non-success server response, status and message verbatim.
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// The response body could not be parsed into structured data.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Network/transport-layer failure, not classified further.
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid header value: {0}")]
    InvalidHeader(String),

    #[error("Response too large ({size} bytes, max {MAX_RESPONSE_SIZE})")]
    ResponseTooLarge { size: u64 },
}

impl From<reqwest::Error> for AdminError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for AdminError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedResponse(err.to_string())
    }
}

impl From<reqwest::header::InvalidHeaderValue> for AdminError {
    fn from(err: reqwest::header::InvalidHeaderValue) -> Self {
        Self::InvalidHeader(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_validation() {
        let err = AdminError::Validation("name must not be empty".to_string());
        assert_eq!(err.to_string(), "Validation error: name must not be empty");
    }

    #[test]
    fn test_error_display_already_exists() {
        let err = AdminError::AlreadyExists {
            message: "Streaming profile custom_square already exists".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Resource already exists: Streaming profile custom_square already exists"
        );
    }

    #[test]
    fn test_error_display_not_found() {
        let err = AdminError::NotFound {
            message: "Streaming profile custom_square not found".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Resource not found: Streaming profile custom_square not found"
        );
    }

    #[test]
    fn test_error_display_api() {
        let err = AdminError::Api {
            status: 420,
            message: "Rate limit exceeded".to_string(),
        };
        assert_eq!(err.to_string(), "API error (status 420): Rate limit exceeded");
    }

    #[test]
    fn test_error_display_transport() {
        let err = AdminError::Transport("connection refused".to_string());
        assert_eq!(err.to_string(), "Transport error: connection refused");
    }

    #[test]
    fn test_error_display_response_too_large() {
        let err = AdminError::ResponseTooLarge { size: 20_000_000 };
        let msg = err.to_string();
        assert!(msg.contains("20000000"));
        assert!(msg.contains(&MAX_RESPONSE_SIZE.to_string()));
    }

    #[test]
    fn test_error_from_serde_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: AdminError = json_err.into();
        assert!(matches!(err, AdminError::MalformedResponse(_)));
    }

    #[test]
    fn test_max_response_size() {
        assert_eq!(MAX_RESPONSE_SIZE, 16 * 1024 * 1024);
    }
}
