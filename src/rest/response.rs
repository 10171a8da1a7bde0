//! Response wrapper for REST resource operations.
//!
//! [`ResourceResponse<T>`] pairs resource data with the request id the API
//! returned, and implements `Deref` for ergonomic access to the inner data.
//!
//! ```rust,ignore
//! let response = Shipment::find(&client, "shp_123".to_string()).await?;
//!
//! // Field access via Deref
//! println!("{:?}", response.tracking_code);
//!
//! // Keep the id around for support requests
//! println!("{:?}", response.request_id());
//!
//! let shipment: Shipment = response.into_inner();
//! ```

use std::ops::{Deref, DerefMut};

use serde::de::DeserializeOwned;

use crate::clients::HttpResponse;
use crate::rest::ResourceError;

/// A response wrapper that provides transparent access to resource data.
///
/// # Example
///
/// ```rust
/// use easypost::rest::ResourceResponse;
///
/// let response = ResourceResponse::new(vec!["rate_1", "rate_2"], Some("req-1".to_string()));
/// assert_eq!(response.len(), 2);
/// assert_eq!(response.request_id(), Some("req-1"));
/// ```
#[derive(Debug, Clone)]
pub struct ResourceResponse<T> {
    data: T,
    /// Request ID from the `x-ep-request-uuid` header.
    request_id: Option<String>,
}

impl<T> ResourceResponse<T> {
    /// Creates a new `ResourceResponse` with the given data and request id.
    #[must_use]
    pub const fn new(data: T, request_id: Option<String>) -> Self {
        Self { data, request_id }
    }

    /// Consumes the response and returns the inner data.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.data
    }

    /// Returns a reference to the inner data.
    #[must_use]
    pub const fn data(&self) -> &T {
        &self.data
    }

    /// Returns a mutable reference to the inner data.
    #[must_use]
    pub fn data_mut(&mut self) -> &mut T {
        &mut self.data
    }

    /// Returns the request ID from the response headers.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    /// Maps the inner data to a new type, keeping the request id.
    #[must_use]
    pub fn map<U, F>(self, f: F) -> ResourceResponse<U>
    where
        F: FnOnce(T) -> U,
    {
        ResourceResponse {
            data: f(self.data),
            request_id: self.request_id,
        }
    }
}

impl<T: DeserializeOwned> ResourceResponse<T> {
    /// Creates a `ResourceResponse` from an HTTP response.
    ///
    /// EasyPost returns resources at the root of the body, so `key` is
    /// `None` for whole-body resources. `Some(key)` extracts a nested value,
    /// such as `rates` from the rates endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] if the key is missing or the data
    /// cannot be deserialized.
    pub fn from_http_response(
        response: HttpResponse,
        key: Option<&str>,
    ) -> Result<Self, ResourceError> {
        let request_id = response.request_id().map(ToString::to_string);
        let code = response.code;
        let label = key.unwrap_or("body");

        let data_value = match key {
            Some(key) => response.body.get(key).cloned().ok_or_else(|| {
                ResourceError::Http(crate::clients::HttpError::Response(
                    crate::clients::HttpResponseError {
                        code,
                        message: format!("Missing key '{key}' in response body"),
                        error_reference: request_id.clone(),
                    },
                ))
            })?,
            None => response.body,
        };

        let data: T = serde_json::from_value(data_value).map_err(|e| {
            ResourceError::Http(crate::clients::HttpError::Response(
                crate::clients::HttpResponseError {
                    code,
                    message: format!("Failed to deserialize '{label}': {e}"),
                    error_reference: request_id.clone(),
                },
            ))
        })?;

        Ok(Self { data, request_id })
    }
}

impl<T> Deref for ResourceResponse<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<T> DerefMut for ResourceResponse<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}

// Verify ResourceResponse is Send + Sync when T is Send + Sync
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceResponse<String>>();
    assert_send_sync::<ResourceResponse<Vec<String>>>();
};
