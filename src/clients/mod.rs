//! HTTP client types for EasyPost API communication.
//!
//! This module provides the HTTP layer used by every resource: request
//! building, authenticated dispatch, response parsing and retry handling.
//!
//! - [`HttpClient`]: The async HTTP client for API communication
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A parsed response from the API
//! - [`HttpMethod`]: Supported HTTP methods
//! - [`DataType`]: Content types for request bodies
//! - [`rest::RestClient`]: Higher-level REST client used by resources
//! - [`rest::RestError`]: REST-specific error types
//!
//! # Retry Behavior
//!
//! - **429 (Rate Limited)**: Retries using `Retry-After` header value, or 1 second if not present
//! - **500 (Server Error)**: Retries with fixed 1-second delay
//! - **Other errors (4xx)**: Returns immediately without retry
//!
//! The default `tries` is 1, meaning no automatic retries. Raise it per
//! client with [`EasyPostConfigBuilder::tries`](crate::EasyPostConfigBuilder::tries)
//! or per request with [`HttpRequestBuilder::tries`].

mod errors;
mod http_client;
mod http_request;
mod http_response;
pub mod rest;

pub use errors::{
    HttpError, HttpResponseError, InvalidHttpRequestError, MaxHttpRetriesExceededError,
};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{DataType, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::{HttpResponse, REQUEST_ID_HEADER};

pub use rest::{RestClient, RestError};
