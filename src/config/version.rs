//! EasyPost API version definitions.
//!
//! This module provides the [`ApiVersion`] enum for specifying which version
//! of the EasyPost API to use.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// EasyPost API version.
///
/// The version is the first path segment of every request
/// (`https://api.easypost.com/v2/shipments`).
///
/// # Example
///
/// ```rust
/// use easypost::ApiVersion;
///
/// let version: ApiVersion = "v2".parse().unwrap();
/// assert_eq!(version, ApiVersion::V2);
/// assert_eq!(version.to_string(), "v2");
/// assert!(version.is_stable());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    /// The stable v2 API.
    #[default]
    V2,
    /// The beta API, for endpoints that have not reached v2 yet.
    Beta,
}

impl ApiVersion {
    /// Returns the latest stable API version.
    #[must_use]
    pub const fn latest() -> Self {
        Self::V2
    }

    /// Returns `true` if this is a stable API version.
    #[must_use]
    pub const fn is_stable(&self) -> bool {
        matches!(self, Self::V2)
    }

    /// Returns the path segment for this version.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::V2 => "v2",
            Self::Beta => "beta",
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();

        match s.as_str() {
            "v2" | "2" => Ok(Self::V2),
            "beta" => Ok(Self::Beta),
            _ => Err(ConfigError::InvalidApiVersion { version: s }),
        }
    }
}
