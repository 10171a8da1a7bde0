//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// A validated EasyPost API key.
///
/// The key is sent as the HTTP Basic auth username on every request. Its
/// value is masked in debug output to prevent accidental exposure in logs.
///
/// # Example
///
/// ```rust
/// use easypost::ApiKey;
///
/// let key = ApiKey::new("EZTK123").unwrap();
/// assert_eq!(key.as_ref(), "EZTK123");
/// assert_eq!(format!("{:?}", key), "ApiKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a new validated API key.
    ///
    /// Surrounding whitespace is trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        let key = key.trim();
        if key.is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        Ok(Self(key.to_string()))
    }

    /// Returns `true` for test-mode keys (`EZTK` prefix).
    #[must_use]
    pub fn is_test_key(&self) -> bool {
        self.0.starts_with("EZTK")
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(*****)")
    }
}

/// A validated API base URL (scheme and host, optionally a port).
///
/// Trailing slashes are stripped so that paths can be appended directly.
///
/// # Example
///
/// ```rust
/// use easypost::ApiBase;
///
/// let base = ApiBase::new("https://api.easypost.com/").unwrap();
/// assert_eq!(base.as_ref(), "https://api.easypost.com");
/// assert!(base.is_default());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiBase(String);

impl ApiBase {
    /// The production EasyPost endpoint.
    pub const DEFAULT: &'static str = "https://api.easypost.com";

    /// Creates a new validated API base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiBase`] if the URL has no `http`/`https`
    /// scheme or no host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let trimmed = url.trim().trim_end_matches('/');

        let rest = trimmed
            .strip_prefix("https://")
            .or_else(|| trimmed.strip_prefix("http://"));

        match rest {
            Some(host) if !host.is_empty() && !host.contains(char::is_whitespace) => {
                Ok(Self(trimmed.to_string()))
            }
            _ => Err(ConfigError::InvalidApiBase { url }),
        }
    }

    /// Returns `true` if this is the production endpoint.
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.0 == Self::DEFAULT
    }
}

impl Default for ApiBase {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

impl AsRef<str> for ApiBase {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApiBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
