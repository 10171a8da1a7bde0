//! Customs declarations for international shipments.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A customs declaration attached to a shipment.
///
/// # Example
///
/// ```rust
/// use easypost::rest::resources::v2::common::{CustomsInfo, CustomsItem};
///
/// let customs = CustomsInfo {
///     contents_type: Some("merchandise".to_string()),
///     customs_certify: Some(true),
///     customs_signer: Some("Steve Brule".to_string()),
///     customs_items: Some(vec![CustomsItem {
///         description: Some("T-shirt".to_string()),
///         quantity: Some(1),
///         value: Some("10.00".to_string()),
///         weight: Some(5.0),
///         origin_country: Some("US".to_string()),
///         ..Default::default()
///     }]),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CustomsInfo {
    /// The unique identifier of the declaration (`cstinfo_...`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// `test` or `production`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,

    /// Electronic Export Information code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eel_pfc: Option<String>,

    /// `documents`, `gift`, `merchandise`, `returned_goods`, `sample` or `other`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contents_type: Option<String>,

    /// Required when `contents_type` is `other`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contents_explanation: Option<String>,

    /// Whether the signer certifies the information.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customs_certify: Option<bool>,

    /// Name of the person certifying the declaration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customs_signer: Option<String>,

    /// `abandon` or `return`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub non_delivery_option: Option<String>,

    /// `none`, `other`, `quarantine` or `sanitary_phytosanitary_inspection`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restriction_type: Option<String>,

    /// Required when `restriction_type` is not `none`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restriction_comments: Option<String>,

    /// The items being declared.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customs_items: Option<Vec<CustomsItem>>,

    /// When the declaration was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// When the declaration was last updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// One line of a customs declaration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CustomsItem {
    /// The unique identifier of the item (`cstitem_...`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// What the item is.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// How many units are shipped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,

    /// Total value as a decimal string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// Total weight in ounces.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,

    /// Harmonized tariff number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_tariff_number: Option<String>,

    /// Country of manufacture (ISO 3166-1 alpha-2).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_country: Option<String>,

    /// Stock keeping unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// ISO 4217 currency of `value`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}
