//! REST resources for API version v2.
//!
//! # Available Resources
//!
//! ## Shipment Resource
//!
//! - [`Shipment`] - A shipment with its addresses, parcel, rates and label
//! - [`ShipmentCreateParams`] - Parameters for creating a shipment
//! - [`ShipmentMessage`] - A carrier message produced while rating
//! - [`LabelFormat`] - File formats for generated labels (pdf, zpl, epl2)
//!
//! The Shipment resource provides resource-specific operations:
//! - `Shipment::get_rates()` - Refresh rate quotes
//! - `Shipment::buy()` / `Shipment::buy_rate()` - Purchase a rate
//! - `Shipment::insure()` - Insure a purchased shipment
//! - `Shipment::generate_label()` - Convert the label format
//! - `Shipment::generate_stamp()` / `Shipment::generate_barcode()`
//! - `Shipment::refund()` - Request a refund
//! - `Shipment::lowest_rate()` - Cheapest rate matching a [`RateFilter`](crate::rates::RateFilter)
//!
//! ## Rates
//!
//! - [`Rate`] - A priced offer for one carrier and service
//!
//! ## Common Types
//!
//! The [`common`] module holds the nested objects of a shipment:
//! [`Address`](common::Address), [`Parcel`](common::Parcel),
//! [`CustomsInfo`](common::CustomsInfo), [`Tracker`](common::Tracker),
//! [`PostageLabel`](common::PostageLabel) and [`ScanForm`](common::ScanForm).

pub mod common;
mod rate;
mod shipment;

pub use rate::Rate;
pub use shipment::{LabelFormat, Shipment, ShipmentCreateParams, ShipmentMessage};
