//! Errors raised by the HTTP layer.
//!
//! Every non-2xx response becomes an error here. The error keeps the
//! EasyPost `error` object as serialized JSON together with the request id
//! from `x-ep-request-uuid`, so that callers higher up (see
//! [`ResourceError`](crate::rest::ResourceError)) can recover the EasyPost
//! error code and field errors.
//!
//! # Example
//!
//! ```rust,ignore
//! use easypost::clients::HttpError;
//!
//! match client.request(request).await {
//!     Ok(response) => println!("{}", response.body),
//!     Err(HttpError::Response(e)) if e.is_retryable() => {
//!         eprintln!("EasyPost busy ({}), ref {:?}", e.code, e.error_reference);
//!     }
//!     Err(HttpError::Response(e)) => {
//!         eprintln!("EasyPost error {:?}: {}", e.error_code(), e.message);
//!     }
//!     Err(e) => eprintln!("{e}"),
//! }
//! ```

use thiserror::Error;

/// A non-2xx response from EasyPost.
///
/// `message` is a JSON document holding the response's `error` object (or
/// the raw body of an unparseable 5xx) plus an `error_reference` entry with
/// the request id.
///
/// # Example
///
/// ```rust
/// use easypost::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 404,
///     message: r#"{"error":{"code":"NOT_FOUND","message":"not found"}}"#.to_string(),
///     error_reference: Some("abc-123".to_string()),
/// };
///
/// assert_eq!(error.error_code().as_deref(), Some("NOT_FOUND"));
/// assert!(!error.is_retryable());
/// ```
#[derive(Debug, Error)]
#[error("{message}")]
pub struct HttpResponseError {
    /// HTTP status.
    pub code: u16,
    /// Serialized EasyPost error document.
    pub message: String,
    /// The `x-ep-request-uuid` of the failed request.
    pub error_reference: Option<String>,
}

impl HttpResponseError {
    /// Parses `message` back into the error document.
    ///
    /// Returns `Value::Null` when the message is not JSON.
    #[must_use]
    pub fn error_body(&self) -> serde_json::Value {
        serde_json::from_str(&self.message).unwrap_or(serde_json::Value::Null)
    }

    /// Returns the EasyPost error code, e.g. `SHIPMENT.POSTAGE.FAILURE`.
    #[must_use]
    pub fn error_code(&self) -> Option<String> {
        self.error_body()
            .pointer("/error/code")
            .and_then(serde_json::Value::as_str)
            .map(ToString::to_string)
    }

    /// Returns `true` for statuses the client retries (429 and 500).
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self.code, 429 | 500)
    }
}

/// A request kept failing with 429 or 500 until its attempt budget ran out.
#[derive(Debug, Error)]
#[error("Exceeded maximum retry count of {tries}. Last message: {message}")]
pub struct MaxHttpRetriesExceededError {
    /// HTTP status of the last attempt.
    pub code: u16,
    /// Attempts made.
    pub tries: u32,
    /// Serialized EasyPost error document of the last attempt.
    pub message: String,
    /// The `x-ep-request-uuid` of the last attempt.
    pub error_reference: Option<String>,
}

/// A request that was rejected before being sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A body was set without an encoding.
    #[error("Cannot set a body without also setting body_type.")]
    MissingBodyType,

    /// A verb that needs a body was used without one.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The verb, e.g. `POST`.
        method: String,
    },

    /// The attempt budget was zero.
    #[error("A request must be attempted at least once.")]
    ZeroTries,
}

/// Any failure of [`HttpClient::request`](crate::clients::HttpClient::request).
#[derive(Debug, Error)]
pub enum HttpError {
    /// EasyPost answered with a non-2xx status.
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Retries on 429/500 were exhausted.
    #[error(transparent)]
    MaxRetries(#[from] MaxHttpRetriesExceededError),

    /// The request was invalid and never sent.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Connection, TLS or body read failure.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// Returns the HTTP status, if EasyPost answered at all.
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            Self::MaxRetries(e) => Some(e.code),
            Self::InvalidRequest(_) | Self::Network(_) => None,
        }
    }

    /// Returns the request id to quote to EasyPost support.
    #[must_use]
    pub fn error_reference(&self) -> Option<&str> {
        match self {
            Self::Response(e) => e.error_reference.as_deref(),
            Self::MaxRetries(e) => e.error_reference.as_deref(),
            Self::InvalidRequest(_) | Self::Network(_) => None,
        }
    }
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpError>();
};

#[cfg(test)]
mod tests {
    use super::*;

    fn response_error(code: u16, message: &str) -> HttpResponseError {
        HttpResponseError {
            code,
            message: message.to_string(),
            error_reference: Some("req-1".to_string()),
        }
    }

    #[test]
    fn test_error_code_is_read_from_message() {
        let error = response_error(
            422,
            r#"{"error":{"code":"SHIPMENT.POSTAGE.FAILURE","message":"Rate expired","errors":[]}}"#,
        );

        assert_eq!(error.error_code().as_deref(), Some("SHIPMENT.POSTAGE.FAILURE"));
        assert_eq!(error.error_body()["error"]["message"], "Rate expired");
    }

    #[test]
    fn test_non_json_message_has_no_code() {
        let error = response_error(502, "bad gateway");

        assert!(error.error_body().is_null());
        assert!(error.error_code().is_none());
        assert_eq!(error.to_string(), "bad gateway");
    }

    #[test]
    fn test_retryable_statuses() {
        assert!(response_error(429, "{}").is_retryable());
        assert!(response_error(500, "{}").is_retryable());
        assert!(!response_error(503, "{}").is_retryable());
        assert!(!response_error(422, "{}").is_retryable());
    }

    #[test]
    fn test_max_retries_message_names_attempts() {
        let error = MaxHttpRetriesExceededError {
            code: 429,
            tries: 3,
            message: r#"{"error":{"code":"RATE_LIMITED"}}"#.to_string(),
            error_reference: None,
        };

        assert!(error
            .to_string()
            .starts_with("Exceeded maximum retry count of 3."));
    }

    #[test]
    fn test_missing_body_message_uses_verb() {
        let error = InvalidHttpRequestError::MissingBody {
            method: "POST".to_string(),
        };
        assert_eq!(error.to_string(), "Cannot use POST without specifying data.");
    }

    #[test]
    fn test_status_and_reference_accessors() {
        let response = HttpError::Response(response_error(404, "{}"));
        assert_eq!(response.status_code(), Some(404));
        assert_eq!(response.error_reference(), Some("req-1"));

        let invalid = HttpError::InvalidRequest(InvalidHttpRequestError::ZeroTries);
        assert_eq!(invalid.status_code(), None);
        assert_eq!(invalid.error_reference(), None);
    }
}
