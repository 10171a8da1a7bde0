//! REST API client for the EasyPost API.
//!
//! This module provides a higher-level REST client built on top of the
//! [`HttpClient`](crate::clients::HttpClient) with `get()` and `post()`
//! helpers and path normalization.
//!
//! # Example
//!
//! ```rust,ignore
//! use easypost::{RestClient, EasyPostConfig, ApiKey};
//!
//! let config = EasyPostConfig::builder()
//!     .api_key(ApiKey::new("EZTK123").unwrap())
//!     .build()?;
//! let client = RestClient::new(&config)?;
//!
//! let response = client.get("shipments/shp_123", None).await?;
//! println!("Shipment: {}", response.body);
//! ```
//!
//! # Path Normalization
//!
//! - Leading slashes are stripped: `/shipments` -> `shipments`
//! - Trailing slashes are stripped: `shipments/` -> `shipments`
//! - Empty paths are rejected with [`RestError::InvalidPath`]

mod client;
mod errors;

pub use client::RestClient;
pub use errors::RestError;
