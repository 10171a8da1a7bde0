//! Tracking information for purchased shipments.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A tracker created when a shipment's label is bought.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Tracker {
    /// The unique identifier of the tracker (`trk_...`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// `test` or `production`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,

    /// The carrier's tracking code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_code: Option<String>,

    /// Current status, e.g. `pre_transit`, `in_transit`, `delivered`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Carrier-specific detail for `status`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_detail: Option<String>,

    /// Who signed for the package.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signed_by: Option<String>,

    /// Weight as reported by the carrier, in ounces.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,

    /// Estimated delivery time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub est_delivery_date: Option<DateTime<Utc>>,

    /// The shipment this tracker belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipment_id: Option<String>,

    /// The carrier name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carrier: Option<String>,

    /// A public tracking page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_url: Option<String>,

    /// Scan events, oldest first.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_details: Option<Vec<TrackingDetail>>,

    /// When the tracker was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// When the tracker was last updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A single scan event on a tracker.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct TrackingDetail {
    /// Carrier description of the event.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Tracker status at the time of the event.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Carrier-specific detail for `status`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_detail: Option<String>,

    /// When the event happened.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datetime: Option<DateTime<Utc>>,

    /// Where the event happened.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_location: Option<TrackingLocation>,
}

/// The location of a scan event.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct TrackingLocation {
    /// City of the event.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    /// State or province of the event.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    /// Country of the event.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// Postal code of the event.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
}
