//! HTTP client for EasyPost API communication.
//!
//! This module provides the [`HttpClient`] type for making authenticated
//! requests to the EasyPost API with automatic retry handling.

use std::collections::HashMap;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::clients::errors::{HttpError, HttpResponseError, MaxHttpRetriesExceededError};
use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::HttpResponse;
use crate::config::EasyPostConfig;

/// Fixed retry wait time in seconds.
pub const RETRY_WAIT_TIME: u64 = 1;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the EasyPost API.
///
/// The client handles:
/// - Base URI and versioned base path construction from the config
/// - Default headers including User-Agent and Basic authorization
/// - Automatic retry logic for 429 and 500 responses
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use easypost::{EasyPostConfig, ApiKey};
/// use easypost::clients::{HttpClient, HttpRequest, HttpMethod};
///
/// let config = EasyPostConfig::builder()
///     .api_key(ApiKey::new("EZTK123").unwrap())
///     .build()?;
/// let client = HttpClient::new(&config)?;
///
/// let request = HttpRequest::builder(HttpMethod::Get, "shipments/shp_123").build()?;
/// let response = client.request(request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URI (e.g., `https://api.easypost.com`).
    base_uri: String,
    /// Base path (e.g., "/v2").
    base_path: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
    /// Default attempt count for requests that do not set their own.
    default_tries: u32,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot
    /// be created (for example when TLS initialization fails).
    pub fn new(config: &EasyPostConfig) -> Result<Self, HttpError> {
        let base_uri = config.api_base().as_ref().to_string();
        let base_path = format!("/{}", config.api_version());

        if !config.api_base().is_default() {
            tracing::warn!("EasyPost client is using a non-default API base: {}", base_uri);
        }

        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!(
            "{user_agent_prefix}EasyPost/{} RustClient/{SDK_VERSION} | Rust {rust_version}",
            config.api_version()
        );

        // EasyPost authenticates with the API key as the Basic auth username
        let credentials = STANDARD.encode(format!("{}:", config.api_key().as_ref()));

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert("Authorization".to_string(), format!("Basic {credentials}"));

        let client = reqwest::Client::builder().use_rustls_tls().build()?;

        Ok(Self {
            client,
            base_uri,
            base_path,
            default_headers,
            default_tries: config.tries(),
        })
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the base path for this client.
    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the attempt count applied to requests that keep the default of 1.
    #[must_use]
    pub const fn default_tries(&self) -> u32 {
        self.default_tries
    }

    /// Sends an HTTP request to the EasyPost API.
    ///
    /// Requests that do not set `tries` inherit the client's configured
    /// default.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - Network error occurs (`Network`)
    /// - Non-2xx response received (`Response`)
    /// - Max retries exceeded (`MaxRetries`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = format!("{}{}/{}", self.base_uri, self.base_path, request.path);
        let max_tries = request.tries.unwrap_or(self.default_tries);

        let mut headers = self.default_headers.clone();
        if let Some(body_type) = &request.body_type {
            headers.insert(
                "Content-Type".to_string(),
                body_type.as_content_type().to_string(),
            );
        }
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                headers.insert(key.clone(), value.clone());
            }
        }

        let mut tries: u32 = 0;
        loop {
            tries += 1;

            let mut req_builder = self.client.request(request.http_method.into(), &url);

            for (key, value) in &headers {
                req_builder = req_builder.header(key, value);
            }

            if let Some(query) = &request.query {
                req_builder = req_builder.query(query);
            }

            if let Some(body) = &request.body {
                req_builder = req_builder.body(body.to_string());
            }

            tracing::debug!(
                method = %request.http_method,
                path = %request.path,
                attempt = tries,
                "Sending EasyPost request"
            );

            let res = req_builder.send().await?;

            let code = res.status().as_u16();
            let res_headers = Self::parse_response_headers(res.headers());
            let body_text = res.text().await?;

            let body = if body_text.is_empty() {
                serde_json::json!({})
            } else {
                serde_json::from_str(&body_text).unwrap_or_else(|_| {
                    // Keep unparseable 5xx bodies around for the error message
                    if code >= 500 {
                        serde_json::json!({ "raw_body": body_text })
                    } else {
                        serde_json::json!({})
                    }
                })
            };

            let response = HttpResponse::new(code, res_headers, body);

            if response.is_ok() {
                return Ok(response);
            }

            let error = HttpResponseError {
                code,
                message: Self::serialize_error(&response),
                error_reference: response.request_id().map(String::from),
            };

            // A single-attempt request reports the response itself, not a retry failure
            if !error.is_retryable() || max_tries == 1 {
                return Err(HttpError::Response(error));
            }

            if tries >= max_tries {
                tracing::warn!(
                    "EasyPost request to {} failed with {} after {} tries",
                    request.path,
                    code,
                    max_tries
                );
                return Err(HttpError::MaxRetries(MaxHttpRetriesExceededError {
                    code,
                    tries: max_tries,
                    message: error.message,
                    error_reference: error.error_reference,
                }));
            }

            let delay = Self::calculate_retry_delay(&response, code);
            tracing::debug!(
                "Retrying EasyPost request to {} in {:?} (status {})",
                request.path,
                delay,
                code
            );
            tokio::time::sleep(delay).await;
        }
    }

    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    /// For 429 a usable `Retry-After` header wins; anything else waits the
    /// fixed delay. Negative, NaN or out-of-range values are not usable.
    fn calculate_retry_delay(response: &HttpResponse, status: u16) -> std::time::Duration {
        let fixed = std::time::Duration::from_secs(RETRY_WAIT_TIME);
        match response.retry_request_after {
            Some(retry_after) if status == 429 => {
                std::time::Duration::try_from_secs_f64(retry_after).unwrap_or(fixed)
            }
            _ => fixed,
        }
    }

    /// Serializes the `error` object of a response plus an error reference line.
    fn serialize_error(response: &HttpResponse) -> String {
        let mut error_body = serde_json::Map::new();

        if let Some(error) = response.body.get("error") {
            error_body.insert("error".to_string(), error.clone());
        }
        if let Some(raw) = response.body.get("raw_body") {
            error_body.insert("raw_body".to_string(), raw.clone());
        }

        if let Some(request_id) = response.request_id() {
            error_body.insert(
                "error_reference".to_string(),
                serde_json::json!(format!(
                    "If you report this error, please include this id: {request_id}."
                )),
            );
        }

        serde_json::to_string(&error_body).unwrap_or_else(|_| "{}".to_string())
    }
}
