//! Rate quotes attached to a shipment.
//!
//! A [`Rate`] is a priced offer from one carrier for one service level.
//! Rates are never created directly; they arrive on a
//! [`Shipment`](super::Shipment) and are purchased through
//! [`Shipment::buy_rate`](super::Shipment::buy_rate).

use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::rates::{Carrier, Service, UnknownValueError};

/// A priced shipping offer for a shipment.
///
/// `carrier`, `service` and `rate` are kept exactly as the API sent them;
/// use [`Rate::parsed_carrier`], [`Rate::parsed_service`] and
/// [`Rate::amount`] to read them as typed values.
///
/// # Example
///
/// ```rust
/// use easypost::rates::{Carrier, Service};
/// use easypost::rest::resources::v2::Rate;
/// use rust_decimal::Decimal;
///
/// let rate = Rate {
///     id: Some("rate_123".to_string()),
///     carrier: Some("USPS".to_string()),
///     service: Some("Priority".to_string()),
///     rate: Some("8.20".to_string()),
///     ..Default::default()
/// };
///
/// assert_eq!(rate.parsed_carrier().unwrap(), Carrier::Usps);
/// assert_eq!(rate.parsed_service().unwrap(), Service::Priority);
/// assert_eq!(rate.amount(), Some(Decimal::new(820, 2)));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Rate {
    /// The unique identifier of the rate (`rate_...`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// `test` or `production`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,

    /// The carrier name, e.g. `USPS`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carrier: Option<String>,

    /// The service level name, e.g. `Priority`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,

    /// The quoted price as a decimal string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate: Option<String>,

    /// ISO 4217 currency of `rate`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    /// The carrier's published price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_rate: Option<String>,

    /// Currency of `list_rate`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_currency: Option<String>,

    /// The price at a retail counter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retail_rate: Option<String>,

    /// Currency of `retail_rate`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retail_currency: Option<String>,

    /// Estimated days in transit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_days: Option<u32>,

    /// Estimated delivery date, as sent by the carrier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_date: Option<String>,

    /// Whether the carrier guarantees `delivery_date`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_date_guaranteed: Option<bool>,

    /// The shipment this rate was quoted for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipment_id: Option<String>,

    /// The carrier account that produced the quote.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carrier_account_id: Option<String>,

    /// When the rate was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// When the rate was last updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Rate {
    /// Parses the carrier name.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownValueError`] if the carrier is missing or unknown.
    pub fn parsed_carrier(&self) -> Result<Carrier, UnknownValueError> {
        self.carrier.as_deref().unwrap_or_default().parse()
    }

    /// Parses the service name.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownValueError`] if the service is missing or unknown.
    pub fn parsed_service(&self) -> Result<Service, UnknownValueError> {
        self.service.as_deref().unwrap_or_default().parse()
    }

    /// Returns the quoted price, or `None` if it is missing, unparseable
    /// or negative.
    #[must_use]
    pub fn amount(&self) -> Option<Decimal> {
        self.rate
            .as_deref()
            .and_then(|raw| Decimal::from_str(raw.trim()).ok())
            .filter(|amount| !amount.is_sign_negative())
    }
}
