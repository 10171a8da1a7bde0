//! Shared data types carried by shipments.
//!
//! These types have no operations of their own in this SDK; they are the
//! nested objects of a [`Shipment`](super::Shipment).

mod address;
mod customs;
mod parcel;
mod postage;
mod tracker;

pub use address::Address;
pub use customs::{CustomsInfo, CustomsItem};
pub use parcel::Parcel;
pub use postage::{PostageLabel, ScanForm};
pub use tracker::{Tracker, TrackingDetail, TrackingLocation};
