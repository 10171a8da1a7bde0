//! REST Resource infrastructure for the EasyPost API.
//!
//! This module provides the foundational infrastructure for REST resources with:
//!
//! - **[`RestResource`] trait**: `find()` and `create()` plus instance path helpers
//! - **[`ResourceResponse<T>`]**: A Deref-based wrapper for ergonomic response handling
//! - **[`merge`]**: Non-null field merging for actions that return the updated resource
//! - **Path building**: Constant path tables with percent-encoded ID interpolation
//! - **[`ResourceError`]**: Semantic error types for resource operations
//!
//! # Example: Using a Resource
//!
//! ```rust,ignore
//! use easypost::{RestClient, EasyPostConfig, ApiKey};
//! use easypost::rest::RestResource;
//! use easypost::rest::resources::v2::Shipment;
//!
//! let config = EasyPostConfig::builder()
//!     .api_key(ApiKey::new("EZTK123")?)
//!     .build()?;
//! let client = RestClient::new(&config)?;
//!
//! let mut shipment = Shipment::find(&client, "shp_123".to_string()).await?.into_inner();
//! shipment.get_rates(&client).await?;
//! ```
//!
//! # Key Types
//!
//! - [`ResourceError`]: Error types for resource operations
//! - [`ResourcePath`] and [`ResourceOperation`]: Path building infrastructure
//! - [`ResourceResponse`]: Response wrapper with Deref for transparent data access
//! - [`RestResource`]: Trait defining the shared operations for resources
//! - [`resources`]: Version-specific resource implementations (e.g., Shipment)

mod errors;
mod merge;
mod path;
mod resource;
mod response;

pub mod resources;

pub use errors::ResourceError;
pub use merge::merge;
pub use path::{build_path, get_path, ResourceOperation, ResourcePath};
pub(crate) use resource::serialize_body;
pub use resource::RestResource;
pub use response::ResourceResponse;
