//! Configuration types for the EasyPost SDK.
//!
//! This module provides the core configuration types used to initialize
//! the SDK for API communication with EasyPost.
//!
//! # Overview
//!
//! - [`EasyPostConfig`]: The main configuration struct holding all SDK settings
//! - [`EasyPostConfigBuilder`]: A builder for constructing [`EasyPostConfig`] instances
//! - [`ApiKey`]: A validated API key newtype with masked debug output
//! - [`ApiBase`]: A validated API base URL
//! - [`ApiVersion`]: The EasyPost API version to use
//!
//! # Example
//!
//! ```rust
//! use easypost::{EasyPostConfig, ApiKey, ApiVersion};
//!
//! let config = EasyPostConfig::builder()
//!     .api_key(ApiKey::new("EZTK123").unwrap())
//!     .api_version(ApiVersion::V2)
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;
mod version;

pub use newtypes::{ApiBase, ApiKey};
pub use version::ApiVersion;

use crate::error::ConfigError;

/// Configuration for the EasyPost SDK.
///
/// Configuration is instance-based: build one, then hand it to
/// [`RestClient::new`](crate::clients::RestClient::new). There is no global
/// client.
///
/// # Thread Safety
///
/// `EasyPostConfig` is `Clone`, `Send`, and `Sync`.
///
/// # Example
///
/// ```rust
/// use easypost::{EasyPostConfig, ApiKey, ApiBase};
///
/// let config = EasyPostConfig::builder()
///     .api_key(ApiKey::new("EZTK123").unwrap())
///     .api_base(ApiBase::new("http://localhost:3000").unwrap())
///     .tries(3)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.tries(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct EasyPostConfig {
    api_key: ApiKey,
    api_base: ApiBase,
    api_version: ApiVersion,
    user_agent_prefix: Option<String>,
    tries: u32,
}

impl EasyPostConfig {
    /// Creates a new builder for constructing an `EasyPostConfig`.
    #[must_use]
    pub fn builder() -> EasyPostConfigBuilder {
        EasyPostConfigBuilder::new()
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn api_base(&self) -> &ApiBase {
        &self.api_base
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> ApiVersion {
        self.api_version
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the default number of attempts per request.
    #[must_use]
    pub const fn tries(&self) -> u32 {
        self.tries
    }
}

// Verify EasyPostConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<EasyPostConfig>();
};

/// Builder for constructing [`EasyPostConfig`] instances.
///
/// The only required field is `api_key`.
///
/// # Defaults
///
/// - `api_base`: `https://api.easypost.com`
/// - `api_version`: `v2`
/// - `user_agent_prefix`: `None`
/// - `tries`: 1 (no automatic retries)
#[derive(Debug, Default)]
pub struct EasyPostConfigBuilder {
    api_key: Option<ApiKey>,
    api_base: Option<ApiBase>,
    api_version: Option<ApiVersion>,
    user_agent_prefix: Option<String>,
    tries: Option<u32>,
}

impl EasyPostConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Sets the API base URL.
    #[must_use]
    pub fn api_base(mut self, base: ApiBase) -> Self {
        self.api_base = Some(base);
        self
    }

    /// Sets the API version.
    #[must_use]
    pub const fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets how many times a request is attempted on 429 and 500 responses.
    #[must_use]
    pub const fn tries(mut self, tries: u32) -> Self {
        self.tries = Some(tries);
        self
    }

    /// Builds the [`EasyPostConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `api_key` is not set,
    /// or [`ConfigError::InvalidTries`] if `tries` is zero.
    pub fn build(self) -> Result<EasyPostConfig, ConfigError> {
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;

        let tries = self.tries.unwrap_or(1);
        if tries == 0 {
            return Err(ConfigError::InvalidTries { tries });
        }

        Ok(EasyPostConfig {
            api_key,
            api_base: self.api_base.unwrap_or_default(),
            api_version: self.api_version.unwrap_or_else(ApiVersion::latest),
            user_agent_prefix: self.user_agent_prefix,
            tries,
        })
    }
}
