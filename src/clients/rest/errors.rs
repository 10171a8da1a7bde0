//! Errors raised by [`RestClient`](super::RestClient).

use crate::clients::HttpError;
use thiserror::Error;

/// Failure of a REST call.
///
/// # Example
///
/// ```rust
/// use easypost::clients::rest::RestError;
///
/// let error = RestError::InvalidPath { path: "/".to_string() };
/// assert_eq!(error.to_string(), "Invalid REST API path: /");
/// assert_eq!(error.status_code(), None);
/// ```
#[derive(Debug, Error)]
pub enum RestError {
    /// The path was empty once surrounding slashes were removed.
    #[error("Invalid REST API path: {path}")]
    InvalidPath {
        /// The path as given.
        path: String,
    },

    /// The request went out and failed.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl RestError {
    /// Returns the HTTP status, if EasyPost answered.
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Http(e) => e.status_code(),
            Self::InvalidPath { .. } => None,
        }
    }

    /// Returns the `x-ep-request-uuid` of the failed request.
    #[must_use]
    pub fn error_reference(&self) -> Option<&str> {
        match self {
            Self::Http(e) => e.error_reference(),
            Self::InvalidPath { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::{HttpResponseError, MaxHttpRetriesExceededError};

    #[test]
    fn test_invalid_path_has_no_status() {
        let error = RestError::InvalidPath {
            path: "//".to_string(),
        };

        assert_eq!(error.to_string(), "Invalid REST API path: //");
        assert_eq!(error.status_code(), None);
        assert_eq!(error.error_reference(), None);
    }

    #[test]
    fn test_http_error_details_pass_through() {
        let error: RestError = HttpError::Response(HttpResponseError {
            code: 402,
            message: r#"{"error":{"code":"PAYMENT_REQUIRED"}}"#.to_string(),
            error_reference: Some("req-402".to_string()),
        })
        .into();

        assert_eq!(error.status_code(), Some(402));
        assert_eq!(error.error_reference(), Some("req-402"));
        assert!(error.to_string().contains("PAYMENT_REQUIRED"));
    }

    #[test]
    fn test_retry_exhaustion_keeps_last_status() {
        let error = RestError::Http(HttpError::MaxRetries(MaxHttpRetriesExceededError {
            code: 500,
            tries: 3,
            message: "{}".to_string(),
            error_reference: None,
        }));

        assert_eq!(error.status_code(), Some(500));
        assert!(error.to_string().contains("Exceeded maximum retry count of 3"));
    }
}
