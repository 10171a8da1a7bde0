//! Address types for shipments.
//!
//! The same structure is used for `from_address`, `to_address`,
//! `buyer_address` and `return_address`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A physical address.
///
/// All fields are optional to support both full addresses and
/// references to existing ones (`id` only).
///
/// # Example
///
/// ```rust
/// use easypost::rest::resources::v2::common::Address;
///
/// let address = Address {
///     name: Some("Dr. Steve Brule".to_string()),
///     street1: Some("179 N Harbor Dr".to_string()),
///     city: Some("Redondo Beach".to_string()),
///     state: Some("CA".to_string()),
///     zip: Some("90277".to_string()),
///     country: Some("US".to_string()),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Address {
    /// The unique identifier of the address (`adr_...`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// `test` or `production`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,

    /// The name of the person at the address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The company name at the address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    /// The first street line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street1: Option<String>,

    /// The second street line (apartment, suite, etc.).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street2: Option<String>,

    /// The city.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    /// The state or province.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    /// The postal or ZIP code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,

    /// The two-letter country code (ISO 3166-1 alpha-2).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// The phone number at the address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// The email address of the person at the address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Whether the address is residential.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub residential: Option<bool>,

    /// Federal tax id of the person or organization.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub federal_tax_id: Option<String>,

    /// State tax id of the person or organization.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_tax_id: Option<String>,

    /// When the address was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// When the address was last updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Address {
    /// Creates an address that refers to an existing address by id.
    #[must_use]
    pub fn from_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Default::default()
        }
    }
}
