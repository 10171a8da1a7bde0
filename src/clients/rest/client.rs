//! JSON-over-HTTP calls against EasyPost resource paths.

use std::collections::HashMap;

use serde_json::Value;

use crate::clients::rest::RestError;
use crate::clients::{HttpClient, HttpMethod, HttpRequest, HttpResponse};
use crate::config::{ApiVersion, EasyPostConfig};

/// Client used by every resource operation.
///
/// Paths are relative to the versioned root and may carry stray slashes
/// (`/shipments/shp_1/` is the same as `shipments/shp_1`). There is no
/// process-wide instance; build one from an [`EasyPostConfig`] and pass it
/// by reference.
///
/// # Example
///
/// ```rust,ignore
/// use easypost::{RestClient, EasyPostConfig, ApiKey};
/// use serde_json::json;
///
/// let config = EasyPostConfig::builder()
///     .api_key(ApiKey::new("EZTK123").unwrap())
///     .build()?;
/// let client = RestClient::new(&config)?;
///
/// let rates = client.get("shipments/shp_123/rates", None).await?;
/// let bought = client
///     .post("shipments/shp_123/buy", json!({"rate": {"id": "rate_123"}}))
///     .await?;
/// ```
#[derive(Debug)]
pub struct RestClient {
    http_client: HttpClient,
    api_version: ApiVersion,
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient {
    /// Builds the client and its HTTP transport from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Http`] if the TLS client cannot be initialized.
    pub fn new(config: &EasyPostConfig) -> Result<Self, RestError> {
        Ok(Self {
            http_client: HttpClient::new(config)?,
            api_version: config.api_version(),
        })
    }

    /// The API version every path is sent under.
    #[must_use]
    pub const fn api_version(&self) -> ApiVersion {
        self.api_version
    }

    /// The transport, for callers that need raw [`HttpRequest`]s.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// GETs `path`, optionally with query parameters.
    ///
    /// EasyPost uses GET for read-only calls and for some shipment actions
    /// (label conversion, stamp, barcode, refund).
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] for an empty path and
    /// [`RestError::Http`] when the request fails.
    pub async fn get(
        &self,
        path: &str,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, RestError> {
        let mut builder = HttpRequest::builder(HttpMethod::Get, normalize_path(path)?);
        if let Some(query) = query {
            builder = builder.query(query);
        }
        self.execute(builder.build().map_err(|e| RestError::Http(e.into()))?)
            .await
    }

    /// POSTs a JSON body to `path`.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] for an empty path and
    /// [`RestError::Http`] when the request fails.
    pub async fn post(&self, path: &str, body: Value) -> Result<HttpResponse, RestError> {
        let request = HttpRequest::builder(HttpMethod::Post, normalize_path(path)?)
            .json_body(body)
            .build()
            .map_err(|e| RestError::Http(e.into()))?;
        self.execute(request).await
    }

    /// Sends a prepared request, e.g. one with its own attempt budget.
    ///
    /// The request's path is normalized like those of [`get`](Self::get)
    /// and [`post`](Self::post).
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] for an empty path and
    /// [`RestError::Http`] when the request fails.
    pub async fn execute(&self, mut request: HttpRequest) -> Result<HttpResponse, RestError> {
        request.path = normalize_path(&request.path)?;
        Ok(self.http_client.request(request).await?)
    }
}

/// Strips leading and trailing slashes; empty results are rejected.
fn normalize_path(path: &str) -> Result<String, RestError> {
    let trimmed = path.trim_matches('/');

    if trimmed.is_empty() {
        return Err(RestError::InvalidPath {
            path: path.to_string(),
        });
    }

    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiKey;

    #[test]
    fn test_normalize_path_trims_slashes() {
        assert_eq!(normalize_path("/shipments").unwrap(), "shipments");
        assert_eq!(
            normalize_path("//shipments/shp_1/rates/").unwrap(),
            "shipments/shp_1/rates"
        );
        assert_eq!(
            normalize_path("shipments/shp_1/label").unwrap(),
            "shipments/shp_1/label"
        );
    }

    #[test]
    fn test_normalize_path_rejects_empty() {
        assert!(matches!(
            normalize_path(""),
            Err(RestError::InvalidPath { path }) if path.is_empty()
        ));
        assert!(matches!(
            normalize_path("/"),
            Err(RestError::InvalidPath { path }) if path == "/"
        ));
    }

    #[test]
    fn test_client_takes_version_from_config() {
        let config = EasyPostConfig::builder()
            .api_key(ApiKey::new("EZTK123").unwrap())
            .api_version(ApiVersion::Beta)
            .build()
            .unwrap();
        let client = RestClient::new(&config).unwrap();

        assert_eq!(client.api_version(), ApiVersion::Beta);
        assert_eq!(client.http_client().base_path(), "/beta");
    }

    #[tokio::test]
    async fn test_execute_rejects_empty_path_before_sending() {
        let config = EasyPostConfig::builder()
            .api_key(ApiKey::new("EZTK123").unwrap())
            .build()
            .unwrap();
        let client = RestClient::new(&config).unwrap();
        let request = HttpRequest::builder(HttpMethod::Get, "//").build().unwrap();

        assert!(matches!(
            client.execute(request).await,
            Err(RestError::InvalidPath { .. })
        ));
    }
}
