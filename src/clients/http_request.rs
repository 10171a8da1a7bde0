//! Outgoing request description for the EasyPost HTTP client.
//!
//! An [`HttpRequest`] names a path below the versioned API root
//! (`shipments/shp_123/buy`, not `/v2/shipments/...`); the
//! [`HttpClient`](crate::clients::HttpClient) adds the base URL, version and
//! credentials.

use std::collections::HashMap;
use std::fmt;

use serde_json::Value;

use crate::clients::errors::InvalidHttpRequestError;

/// HTTP verbs used by the EasyPost shipment endpoints.
///
/// EasyPost triggers several shipment actions (`label`, `stamp`, `barcode`,
/// `refund`) with `GET`, so only two verbs are needed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// `GET`
    Get,
    /// `POST`
    Post,
}

impl HttpMethod {
    /// Returns the upper-case verb.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }

    /// Returns `true` if requests with this verb carry a body.
    #[must_use]
    pub const fn requires_body(&self) -> bool {
        matches!(self, Self::Post)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Self::GET,
            HttpMethod::Post => Self::POST,
        }
    }
}

/// Encoding of a request body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataType {
    /// `application/json`, the only body encoding EasyPost accepts here.
    Json,
}

impl DataType {
    /// Returns the `Content-Type` header value.
    #[must_use]
    pub const fn as_content_type(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
        }
    }
}

/// A request to the EasyPost API, relative to the versioned root.
///
/// # Example
///
/// ```rust
/// use easypost::clients::{HttpRequest, HttpMethod, DataType};
/// use serde_json::json;
///
/// let rates = HttpRequest::builder(HttpMethod::Get, "shipments/shp_123/rates")
///     .build()
///     .unwrap();
/// assert!(rates.body.is_none());
///
/// let buy = HttpRequest::builder(HttpMethod::Post, "shipments/shp_123/buy")
///     .json_body(json!({"rate": {"id": "rate_456"}}))
///     .build()
///     .unwrap();
/// assert_eq!(buy.body_type, Some(DataType::Json));
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The verb.
    pub http_method: HttpMethod,
    /// Path below the versioned root, without a leading slash.
    pub path: String,
    /// JSON body, required for `POST`.
    pub body: Option<Value>,
    /// Encoding of `body`; must be set whenever `body` is.
    pub body_type: Option<DataType>,
    /// Query string parameters, e.g. `file_format` for label conversion.
    pub query: Option<HashMap<String, String>>,
    /// Headers added on top of the client defaults.
    pub extra_headers: Option<HashMap<String, String>>,
    /// Attempt budget. `None` defers to the client's configured default.
    pub tries: Option<u32>,
}

impl HttpRequest {
    /// Starts building a request for `path`.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder {
            request: Self {
                http_method: method,
                path: path.into(),
                body: None,
                body_type: None,
                query: None,
                extra_headers: None,
                tries: None,
            },
        }
    }

    /// Checks that the request can be sent.
    ///
    /// # Errors
    ///
    /// - [`InvalidHttpRequestError::MissingBodyType`] when a body has no encoding
    /// - [`InvalidHttpRequestError::MissingBody`] for a `POST` without a body
    /// - [`InvalidHttpRequestError::ZeroTries`] when `tries` is 0
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        match (&self.body, self.body_type) {
            (Some(_), None) => return Err(InvalidHttpRequestError::MissingBodyType),
            (None, _) if self.http_method.requires_body() => {
                return Err(InvalidHttpRequestError::MissingBody {
                    method: self.http_method.to_string(),
                })
            }
            _ => {}
        }

        if self.tries == Some(0) {
            return Err(InvalidHttpRequestError::ZeroTries);
        }

        Ok(())
    }
}

/// Builder returned by [`HttpRequest::builder`].
#[derive(Debug)]
pub struct HttpRequestBuilder {
    request: HttpRequest,
}

impl HttpRequestBuilder {
    /// Sets a JSON body and its encoding in one step.
    #[must_use]
    pub fn json_body(self, body: impl Into<Value>) -> Self {
        self.body(body).body_type(DataType::Json)
    }

    /// Sets the body without an encoding; pair with [`body_type`](Self::body_type).
    #[must_use]
    pub fn body(mut self, body: impl Into<Value>) -> Self {
        self.request.body = Some(body.into());
        self
    }

    /// Sets the body encoding.
    #[must_use]
    pub const fn body_type(mut self, body_type: DataType) -> Self {
        self.request.body_type = Some(body_type);
        self
    }

    /// Replaces the query parameters.
    #[must_use]
    pub fn query(mut self, query: HashMap<String, String>) -> Self {
        self.request.query = Some(query);
        self
    }

    /// Adds one query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.request
            .query
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Adds one header; it overrides a client default of the same name.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.request
            .extra_headers
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Sets the attempt budget for 429 and 500 responses.
    #[must_use]
    pub const fn tries(mut self, tries: u32) -> Self {
        self.request.tries = Some(tries);
        self
    }

    /// Finishes the request.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if [`HttpRequest::verify`] fails.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        self.request.verify()?;
        Ok(self.request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_method_strings() {
        assert_eq!(HttpMethod::Get.to_string(), "GET");
        assert_eq!(HttpMethod::Post.as_str(), "POST");
        assert_eq!(reqwest::Method::from(HttpMethod::Post), reqwest::Method::POST);
        assert!(!HttpMethod::Get.requires_body());
    }

    #[test]
    fn test_get_needs_no_body() {
        let request = HttpRequest::builder(HttpMethod::Get, "shipments/shp_1/stamp")
            .build()
            .unwrap();

        assert_eq!(request.path, "shipments/shp_1/stamp");
        assert!(request.body.is_none());
        assert_eq!(request.tries, None);
    }

    #[test]
    fn test_json_body_sets_encoding() {
        let request = HttpRequest::builder(HttpMethod::Post, "shipments/shp_1/insure")
            .json_body(json!({"amount": "100.00"}))
            .build()
            .unwrap();

        assert_eq!(request.body, Some(json!({"amount": "100.00"})));
        assert_eq!(request.body_type, Some(DataType::Json));
    }

    #[test]
    fn test_post_without_body_is_rejected() {
        let result = HttpRequest::builder(HttpMethod::Post, "shipments/shp_1/buy").build();

        assert!(matches!(
            result,
            Err(InvalidHttpRequestError::MissingBody { method }) if method == "POST"
        ));
    }

    #[test]
    fn test_body_without_encoding_is_rejected() {
        let result = HttpRequest::builder(HttpMethod::Post, "shipments")
            .body(json!({"shipment": {}}))
            .build();

        assert!(matches!(result, Err(InvalidHttpRequestError::MissingBodyType)));
    }

    #[test]
    fn test_zero_tries_is_rejected() {
        let result = HttpRequest::builder(HttpMethod::Get, "shipments/shp_1")
            .tries(0)
            .build();

        assert!(matches!(result, Err(InvalidHttpRequestError::ZeroTries)));
    }

    #[test]
    fn test_explicit_single_try_is_kept() {
        let request = HttpRequest::builder(HttpMethod::Get, "shipments/shp_1")
            .tries(1)
            .build()
            .unwrap();

        assert_eq!(request.tries, Some(1));
    }

    #[test]
    fn test_label_query_and_extra_header() {
        let request = HttpRequest::builder(HttpMethod::Get, "shipments/shp_1/label")
            .query_param("file_format", "epl2")
            .header("Idempotency-Key", "order-1")
            .build()
            .unwrap();

        assert_eq!(
            request.query.unwrap().get("file_format").map(String::as_str),
            Some("epl2")
        );
        assert_eq!(
            request
                .extra_headers
                .unwrap()
                .get("Idempotency-Key")
                .map(String::as_str),
            Some("order-1")
        );
    }
}
