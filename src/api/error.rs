//! Error taxonomy for the remote listing and match endpoints.

use thiserror::Error;

/// Errors that can occur while talking to the listing/match service.
///
/// An empty page and the end of pagination are not errors; they are
/// regular `Page` values.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Failed to reach the service or read its response
    #[error("Transport error: {source}")]
    Transport {
        #[source]
        source: reqwest::Error,
    },

    /// Request exceeded the configured timeout
    #[error("Request timeout after {duration}s")]
    Timeout { duration: u64 },

    /// Service answered with a non-success status
    #[error("Service error: {status} - {message}")]
    Status { status: u16, message: String },

    /// Response body did not have the expected shape
    #[error("Invalid response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Whether a listing fetch should be retried after this error.
    pub fn is_retryable(&self) -> bool {
        match self {
            ApiError::Transport { .. } | ApiError::Timeout { .. } => true,
            ApiError::Status { status, .. } => *status >= 500,
            ApiError::Decode(_) => false,
        }
    }

    /// Short text for a transient notification.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Status { status, .. } => format!("{} request.", status),
            ApiError::Timeout { .. } => "Request timed out.".to_string(),
            ApiError::Transport { .. } => "Network error, please try again.".to_string(),
            ApiError::Decode(_) => "Unexpected response from server.".to_string(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Transport { source: err }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_errors_are_retryable() {
        let err = ApiError::Status {
            status: 503,
            message: "unavailable".to_string(),
        };
        assert!(err.is_retryable());
    }

    #[test]
    fn client_errors_are_not_retryable() {
        let err = ApiError::Status {
            status: 401,
            message: "unauthorized".to_string(),
        };
        assert!(!err.is_retryable());
        assert_eq!(err.user_message(), "401 request.");
    }

    #[test]
    fn decode_errors_are_final() {
        let err = ApiError::Decode("missing field `items`".to_string());
        assert!(!err.is_retryable());
    }
}
