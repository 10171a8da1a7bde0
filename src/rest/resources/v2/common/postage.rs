//! Purchased label and scan form types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The label bought for a shipment, in one or more file formats.
///
/// `label_url` is always the PNG label; the other URLs are filled in by
/// [`Shipment::generate_label`](crate::rest::resources::v2::Shipment::generate_label).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct PostageLabel {
    /// The unique identifier of the label (`pl_...`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Date printed on the label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_date: Option<DateTime<Utc>>,

    /// Label resolution in DPI.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_resolution: Option<u32>,

    /// Label size, e.g. `4x6`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_size: Option<String>,

    /// Label type as returned by the carrier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_type: Option<String>,

    /// Format of `label_url`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_file_type: Option<String>,

    /// URL of the PNG label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_url: Option<String>,

    /// URL of the PDF label, once generated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_pdf_url: Option<String>,

    /// URL of the ZPL label, once generated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_zpl_url: Option<String>,

    /// URL of the EPL2 label, once generated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_epl2_url: Option<String>,

    /// When the label was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// When the label was last updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A scan form (manifest) covering one or more shipments.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ScanForm {
    /// The unique identifier of the scan form (`sf_...`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// `creating`, `created` or `failed`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Reason for a `failed` status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Tracking codes included on the form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_codes: Option<Vec<String>>,

    /// URL of the printable form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form_url: Option<String>,

    /// Format of `form_url`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form_file_type: Option<String>,

    /// The batch the form was created for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch_id: Option<String>,

    /// When the form was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// When the form was last updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}
