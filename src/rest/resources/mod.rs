//! Version-specific REST resource implementations.
//!
//! Resources are organized by API version so that a future API version can
//! change resource shapes without breaking existing code:
//!
//! ```text
//! resources/
//!   mod.rs           <- This file (re-exports latest version)
//!   v2/
//!     mod.rs         <- Version-specific resources
//!     common/        <- Nested data types
//! ```
//!
//! # Using Resources
//!
//! The stable version is re-exported at this module level for convenience:
//!
//! ```rust,ignore
//! use easypost::rest::resources::Shipment;  // Uses the stable version
//!
//! // Or explicitly specify a version:
//! use easypost::rest::resources::v2::Shipment;
//! ```
//!
//! ## Shipment Resource
//!
//! ```rust,ignore
//! use easypost::rest::resources::{LabelFormat, Shipment};
//!
//! let mut shipment = Shipment::retrieve(&client, "shp_123").await?.into_inner();
//! shipment.get_rates(&client).await?;
//! shipment.generate_label(&client, LabelFormat::Pdf).await?;
//! ```
//!
//! The client's configured [`ApiVersion`](crate::ApiVersion) decides which
//! URL prefix requests go to; the types here describe the `v2` shapes.

pub mod v2;

// Re-export types from the stable version for convenience
pub use v2::*;
