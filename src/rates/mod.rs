//! Carrier and service types, and lowest-rate selection.
//!
//! Rates arrive with carrier and service names as plain strings. This
//! module gives them closed types ([`Carrier`], [`Service`]) and picks the
//! cheapest rate that passes a [`RateFilter`].
//!
//! Selection is a pure function over rates already in memory; fetching
//! them is [`Shipment::get_rates`](crate::rest::resources::v2::Shipment::get_rates)'s job.
//!
//! # Example
//!
//! ```rust,ignore
//! use easypost::rates::{select_lowest, Carrier, RateFilter, Service};
//!
//! let filter = RateFilter::new()
//!     .include_carriers([Carrier::Usps])
//!     .exclude_services([Service::Express]);
//!
//! match select_lowest(shipment.rates.as_deref().unwrap_or_default(), &filter)? {
//!     Some(rate) => println!("Cheapest: {:?} at {:?}", rate.service, rate.rate),
//!     None => println!("No USPS rate available"),
//! }
//! ```

mod carrier;
mod errors;
mod selector;
mod service;

pub use carrier::Carrier;
pub use errors::{RateSelectionError, UnknownValueError};
pub use selector::{select_lowest, RateFilter};
pub use service::Service;
