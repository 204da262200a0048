//! Closed error taxonomy for everything that crosses the HTTP boundary.
//!
//! Responses are classified exactly once, here; downstream code matches on
//! variants instead of probing status codes or nested error shapes.

use thiserror::Error;

/// A failed API operation, already classified and carrying a user-facing
/// message.
///
/// The `message` on the rejection variants is whatever the service put in
/// its error body; `Display` substitutes a generic fallback when the
/// service gave none, so `error.to_string()` is always presentable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The service refused the credentials (401/403).
    #[error("{}", message.as_deref().unwrap_or("Unable to sign in. Check your credentials and try again."))]
    AuthRejected { message: Option<String> },

    /// The service rejected the request as malformed or conflicting
    /// (remaining 4xx, e.g. a duplicate email on registration).
    #[error("{}", message.as_deref().unwrap_or("The request could not be processed. Review the form and try again."))]
    ValidationFailed { message: Option<String> },

    /// No response reached us: connection refused, DNS failure, timeout.
    #[error("Could not reach the server. Check your connection and try again.")]
    TransportFailure,

    /// The service answered with a 5xx.
    #[error("The server reported an error ({status}). Try again later.")]
    ServerFault { status: u16 },

    /// Anything else, including response bodies that failed to decode.
    #[error("Something unexpected went wrong. Try again.")]
    Unknown,
}

impl ApiError {
    /// Classify a non-success HTTP status, keeping the service's own
    /// message when it sent one.
    pub(crate) fn from_status(status: u16, message: Option<String>) -> Self {
        match status {
            401 | 403 => Self::AuthRejected { message },
            400..=499 => Self::ValidationFailed { message },
            500..=599 => Self::ServerFault { status },
            _ => Self::Unknown,
        }
    }

    /// Classify a request that never produced a response.
    pub(crate) fn from_transport(error: reqwest::Error) -> Self {
        if error.is_decode() {
            tracing::warn!(%error, "malformed response body");
            Self::Unknown
        } else {
            tracing::debug!(%error, "transport failure");
            Self::TransportFailure
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_maps_to_auth_rejected() {
        let error = ApiError::from_status(401, Some("invalid credentials".to_string()));
        assert_eq!(
            error,
            ApiError::AuthRejected {
                message: Some("invalid credentials".to_string())
            }
        );
        assert_eq!(error.to_string(), "invalid credentials");
    }

    #[test]
    fn test_auth_rejected_without_message_uses_fallback() {
        let error = ApiError::from_status(401, None);
        assert_eq!(
            error.to_string(),
            "Unable to sign in. Check your credentials and try again."
        );
    }

    #[test]
    fn test_other_client_errors_map_to_validation() {
        let error = ApiError::from_status(409, Some("email already registered".to_string()));
        assert_eq!(error.to_string(), "email already registered");
        assert!(matches!(error, ApiError::ValidationFailed { .. }));
    }

    #[test]
    fn test_server_errors_keep_their_status() {
        assert_eq!(
            ApiError::from_status(503, None),
            ApiError::ServerFault { status: 503 }
        );
    }

    #[test]
    fn test_unclassifiable_status_is_unknown() {
        assert_eq!(ApiError::from_status(302, None), ApiError::Unknown);
    }
}
