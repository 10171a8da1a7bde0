//! # EasyPost Rust SDK
//!
//! A Rust SDK for the EasyPost shipping API, providing type-safe
//! configuration, an async HTTP client with retry handling, and the
//! `Shipment` resource with its rating, purchase and label operations.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`EasyPostConfig`] and [`EasyPostConfigBuilder`]
//! - Validated newtypes for the API key, base URL and version
//! - Async HTTP client with Basic authentication and retry on 429/500
//! - The [`Shipment`](rest::resources::Shipment) resource: retrieve, create,
//!   rate, buy, insure, label/stamp/barcode generation and refunds
//! - Lowest-rate selection with carrier and service filters via [`rates`]
//!
//! ## Quick Start
//!
//! ```rust
//! use easypost::{EasyPostConfig, ApiKey, ApiVersion};
//!
//! let config = EasyPostConfig::builder()
//!     .api_key(ApiKey::new("EZTK123").unwrap())
//!     .api_version(ApiVersion::latest())
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Buying the Cheapest Rate
//!
//! ```rust,ignore
//! use easypost::{EasyPostConfig, ApiKey, RestClient};
//! use easypost::rates::{Carrier, RateFilter, Service};
//! use easypost::rest::resources::Shipment;
//!
//! let config = EasyPostConfig::builder()
//!     .api_key(ApiKey::new(std::env::var("EASYPOST_API_KEY")?)?)
//!     .tries(3)
//!     .build()?;
//! let client = RestClient::new(&config)?;
//!
//! let mut shipment = Shipment::retrieve(&client, "shp_123").await?.into_inner();
//!
//! let filter = RateFilter::new()
//!     .include_carriers([Carrier::Usps, Carrier::Ups])
//!     .exclude_services([Service::Express]);
//!
//! if let Some(rate) = shipment.lowest_rate(&client, &filter).await?.cloned() {
//!     shipment.buy_rate(&client, &rate).await?;
//!     println!("Tracking code: {:?}", shipment.tracking_code);
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every layer has its own `thiserror` enum and converts into the next with
//! `?`:
//!
//! - [`ConfigError`] for invalid configuration
//! - [`HttpError`] for transport failures and non-2xx responses
//! - [`RestError`] for path problems in the REST client
//! - [`ResourceError`](rest::ResourceError) for resource operations, with
//!   `NotFound` (404) and `ValidationFailed` (422) split out
//! - [`RateSelectionError`](rates::RateSelectionError) when cached rates
//!   cannot be ranked
//!
//! ## Logging
//!
//! The SDK emits `tracing` events (request dispatch, retries, rate
//! selection) and never installs a subscriber.
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All client types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime

pub mod clients;
pub mod config;
pub mod error;
pub mod rates;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{ApiBase, ApiKey, ApiVersion, EasyPostConfig, EasyPostConfigBuilder};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    DataType, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError, MaxHttpRetriesExceededError, RestClient,
    RestError,
};
