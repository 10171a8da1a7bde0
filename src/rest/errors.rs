//! Resource-specific error types for REST API operations.
//!
//! This module contains error types for REST resource operations, extending
//! the base [`RestError`](crate::clients::RestError) with resource-specific
//! semantics like `NotFound` and `ValidationFailed`.
//!
//! # Error Handling
//!
//! The SDK maps HTTP status codes to semantic error variants:
//!
//! - **404**: [`ResourceError::NotFound`] - Resource doesn't exist
//! - **422**: [`ResourceError::ValidationFailed`] - Validation errors from the API
//! - **Other 4xx/5xx**: [`ResourceError::Http`] - Wrapped HTTP error
//!
//! # Example
//!
//! ```rust,ignore
//! use easypost::rest::{RestResource, ResourceError};
//! use easypost::rest::resources::v2::Shipment;
//!
//! match Shipment::find(&client, "shp_123".to_string()).await {
//!     Ok(shipment) => println!("Found: {:?}", shipment.tracking_code),
//!     Err(ResourceError::NotFound { resource, id }) => {
//!         println!("{} with id {} not found", resource, id);
//!     }
//!     Err(ResourceError::ValidationFailed { errors, .. }) => {
//!         for (field, messages) in errors {
//!             println!("{}: {:?}", field, messages);
//!         }
//!     }
//!     Err(e) => println!("Other error: {}", e),
//! }
//! ```

use std::collections::HashMap;

use crate::clients::{HttpError, RestError};
use crate::rates::RateSelectionError;
use thiserror::Error;

/// Error type for REST resource operations.
///
/// This enum provides semantic error types for resource operations,
/// mapping HTTP error codes to meaningful variants while preserving
/// the request ID for debugging.
///
/// # Example
///
/// ```rust
/// use easypost::rest::ResourceError;
/// use std::collections::HashMap;
///
/// let error = ResourceError::NotFound {
///     resource: "Shipment",
///     id: "shp_123".to_string(),
/// };
/// assert!(error.to_string().contains("Shipment"));
/// assert!(error.to_string().contains("shp_123"));
///
/// let mut errors = HashMap::new();
/// errors.insert("to_address".to_string(), vec!["is required".to_string()]);
/// let error = ResourceError::ValidationFailed {
///     message: "Unable to create shipment".to_string(),
///     errors,
///     request_id: Some("abc-123".to_string()),
/// };
/// assert!(error.to_string().contains("Validation failed"));
/// ```
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The resource was not found (HTTP 404).
    #[error("{resource} with id {id} not found")]
    NotFound {
        /// The type name of the resource (e.g., "Shipment").
        resource: &'static str,
        /// The ID that was requested.
        id: String,
    },

    /// Validation failed for the resource (HTTP 422).
    ///
    /// Returned when the API rejects a request body, for example a
    /// shipment created without a destination address.
    #[error("Validation failed: {message}")]
    ValidationFailed {
        /// The top-level error message from the API.
        message: String,
        /// A map of field names to error messages.
        errors: HashMap<String, Vec<String>>,
        /// The request ID for debugging (from the `x-ep-request-uuid` header).
        request_id: Option<String>,
    },

    /// No valid path matches the provided IDs and operation.
    ///
    /// Returned when an instance operation is attempted on a resource
    /// that has no `id` yet. No request is sent.
    #[error("Cannot resolve path for {resource}::{operation} with provided IDs")]
    PathResolutionFailed {
        /// The type name of the resource.
        resource: &'static str,
        /// The operation being attempted (e.g., "find", "buy", "refund").
        operation: &'static str,
    },

    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// A REST-level error occurred.
    #[error(transparent)]
    Rest(#[from] RestError),

    /// Rate selection rejected the cached rates.
    #[error(transparent)]
    RateSelection(#[from] RateSelectionError),

    /// A response could not be merged into the local resource.
    #[error("Failed to merge {resource} response: {source}")]
    Merge {
        /// The type name of the resource being updated.
        resource: &'static str,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}

impl ResourceError {
    /// Creates a `ResourceError` from an HTTP response status code.
    ///
    /// Maps HTTP status codes to semantic error variants:
    /// - 404 -> `NotFound`
    /// - 422 -> `ValidationFailed` (parsing errors from body)
    /// - Other -> `Http`
    ///
    /// # Example
    ///
    /// ```rust
    /// use easypost::rest::ResourceError;
    /// use serde_json::json;
    ///
    /// let error = ResourceError::from_http_response(
    ///     404,
    ///     &json!({"error": {"code": "NOT_FOUND", "message": "The requested resource could not be found."}}),
    ///     "Shipment",
    ///     Some("shp_123"),
    ///     Some("req-123"),
    /// );
    /// assert!(matches!(error, ResourceError::NotFound { .. }));
    /// ```
    #[must_use]
    pub fn from_http_response(
        code: u16,
        body: &serde_json::Value,
        resource: &'static str,
        id: Option<&str>,
        request_id: Option<&str>,
    ) -> Self {
        match code {
            404 => Self::NotFound {
                resource,
                id: id.unwrap_or("unknown").to_string(),
            },
            422 => Self::ValidationFailed {
                message: body
                    .pointer("/error/message")
                    .and_then(serde_json::Value::as_str)
                    .unwrap_or("Unprocessable entity")
                    .to_string(),
                errors: parse_validation_errors(body),
                request_id: request_id.map(ToString::to_string),
            },
            _ => {
                let message = body.get("error").unwrap_or(body).to_string();
                Self::Http(HttpError::Response(crate::clients::HttpResponseError {
                    code,
                    message,
                    error_reference: request_id.map(ToString::to_string),
                }))
            }
        }
    }

    /// Maps an error returned by the [`RestClient`](crate::clients::RestClient)
    /// into a resource error.
    ///
    /// The HTTP client reports non-2xx responses as errors carrying the
    /// serialized `error` object, so 404 and 422 are recovered from that
    /// message. Other HTTP failures become [`ResourceError::Http`].
    #[must_use]
    pub fn from_rest_error(error: RestError, resource: &'static str, id: Option<&str>) -> Self {
        match error {
            RestError::Http(HttpError::Response(e)) if e.code == 404 || e.code == 422 => {
                Self::from_http_response(
                    e.code,
                    &e.error_body(),
                    resource,
                    id,
                    e.error_reference.as_deref(),
                )
            }
            RestError::Http(http_error) => Self::Http(http_error),
            other @ RestError::InvalidPath { .. } => Self::Rest(other),
        }
    }

    /// Returns the request ID if available.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::ValidationFailed { request_id, .. } => request_id.as_deref(),
            Self::Http(e) | Self::Rest(RestError::Http(e)) => e.error_reference(),
            _ => None,
        }
    }
}

/// Parses field errors from an API error body.
///
/// EasyPost nests field errors under the `error` object:
/// ```json
/// {
///   "error": {
///     "code": "SHIPMENT.INVALID_PARAMS",
///     "message": "Unable to create shipment",
///     "errors": [
///       {"field": "to_address", "message": "is required"},
///       {"field": "parcel.weight", "message": "must be greater than 0"}
///     ]
///   }
/// }
/// ```
///
/// Plain string entries are collected under `base`.
fn parse_validation_errors(body: &serde_json::Value) -> HashMap<String, Vec<String>> {
    let mut result: HashMap<String, Vec<String>> = HashMap::new();

    let Some(errors) = body
        .pointer("/error/errors")
        .and_then(serde_json::Value::as_array)
    else {
        return result;
    };

    for entry in errors {
        match entry {
            serde_json::Value::Object(map) => {
                let field = map
                    .get("field")
                    .and_then(serde_json::Value::as_str)
                    .unwrap_or("base");
                let message = match map.get("message") {
                    Some(serde_json::Value::String(s)) => s.clone(),
                    Some(other) => other.to_string(),
                    None => continue,
                };
                result.entry(field.to_string()).or_default().push(message);
            }
            serde_json::Value::String(s) => {
                result.entry("base".to_string()).or_default().push(s.clone());
            }
            _ => {}
        }
    }

    result
}

// Verify ResourceError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceError>();
};
