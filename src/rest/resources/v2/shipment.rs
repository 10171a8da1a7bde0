//! Shipment resource implementation.
//!
//! This module provides the [`Shipment`] resource, the aggregate that ties
//! addresses, a parcel and optional customs information to a set of rate
//! quotes, and that turns a chosen rate into a purchased label.
//!
//! # Resource-Specific Operations
//!
//! In addition to `find()` and `create()` from [`RestResource`], a shipment provides:
//! - [`Shipment::get_rates`] - Refresh the cached rate quotes
//! - [`Shipment::buy`] / [`Shipment::buy_rate`] - Purchase a rate
//! - [`Shipment::insure`] - Add insurance to a purchased shipment
//! - [`Shipment::generate_label`] - Convert the label to PDF, ZPL or EPL2
//! - [`Shipment::generate_stamp`] / [`Shipment::generate_barcode`] - Stamp and barcode images
//! - [`Shipment::refund`] - Request a refund for an unused label
//! - [`Shipment::lowest_rate`] - Pick the cheapest cached rate, fetching rates first if needed
//!
//! Every instance operation needs an `id` and fails with
//! [`ResourceError::PathResolutionFailed`] before sending anything otherwise.
//!
//! # Example
//!
//! ```rust,ignore
//! use easypost::rates::{Carrier, RateFilter};
//! use easypost::rest::RestResource;
//! use easypost::rest::resources::v2::{Shipment, ShipmentCreateParams, LabelFormat};
//! use easypost::rest::resources::v2::common::{Address, Parcel};
//!
//! let params = ShipmentCreateParams {
//!     from_address: Some(Address::from_id("adr_from")),
//!     to_address: Some(Address::from_id("adr_to")),
//!     parcel: Some(Parcel { weight: Some(10.0), ..Default::default() }),
//!     ..Default::default()
//! };
//! let mut shipment = Shipment::create(&client, &params).await?.into_inner();
//!
//! let filter = RateFilter::new().include_carriers([Carrier::Usps]);
//! let rate = shipment
//!     .lowest_rate(&client, &filter)
//!     .await?
//!     .cloned()
//!     .ok_or("no USPS rate")?;
//!
//! shipment.buy_rate(&client, &rate).await?;
//! shipment.generate_label(&client, LabelFormat::Zpl).await?;
//! ```

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::clients::{HttpResponse, RestClient};
use crate::rates::{select_lowest, RateFilter};
use crate::rest::resources::v2::common::{
    Address, CustomsInfo, Parcel, PostageLabel, ScanForm, Tracker,
};
use crate::rest::resources::v2::Rate;
use crate::rest::{
    merge, ResourceError, ResourceOperation, ResourcePath, ResourceResponse, RestResource,
};
use crate::HttpMethod;

/// File formats a purchased label can be converted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelFormat {
    /// PDF document.
    Pdf,
    /// Zebra Programming Language.
    Zpl,
    /// Eltron Programming Language.
    Epl2,
}

impl LabelFormat {
    /// Returns the `file_format` query value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Zpl => "zpl",
            Self::Epl2 => "epl2",
        }
    }
}

/// A carrier message attached to a shipment, usually a rating failure.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ShipmentMessage {
    /// The carrier that produced the message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carrier: Option<String>,

    /// The carrier account that produced the message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carrier_account_id: Option<String>,

    /// The message text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// The message category, e.g. `rate_error`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub message_type: Option<String>,
}

/// A shipment.
///
/// `rates` is `None` until rates have been fetched, which is distinct from
/// `Some` of an empty list (fetched, but no carrier quoted).
///
/// Every field is serialized when present so that responses can be merged
/// onto a local copy; create requests use [`ShipmentCreateParams`] instead.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Shipment {
    /// The unique identifier of the shipment (`shp_...`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// `test` or `production`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,

    /// When the shipment was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// When the shipment was last updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    /// A caller-supplied reference, e.g. an order number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    /// The tracking status of the shipment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Whether this is a return shipment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_return: Option<bool>,

    /// The tracking code, set once a rate is bought.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_code: Option<String>,

    /// Carrier options such as `label_format` or `delivery_confirmation`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<HashMap<String, Value>>,

    /// Carrier messages produced while rating.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub messages: Option<Vec<ShipmentMessage>>,

    /// The origin address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_address: Option<Address>,

    /// The destination address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_address: Option<Address>,

    /// The buyer's address, if different from `to_address`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buyer_address: Option<Address>,

    /// Where returns go, if different from `from_address`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_address: Option<Address>,

    /// The package.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parcel: Option<Parcel>,

    /// Customs declaration for international shipments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customs_info: Option<CustomsInfo>,

    /// The purchased label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postage_label: Option<PostageLabel>,

    /// Cached rate quotes; `None` until fetched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rates: Option<Vec<Rate>>,

    /// The rate that was bought.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_rate: Option<Rate>,

    /// The scan form this shipment is on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scan_form: Option<ScanForm>,

    /// The tracker created on purchase.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracker: Option<Tracker>,

    /// The insured amount as a decimal string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insurance: Option<String>,

    /// `submitted`, `refunded` or `rejected`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refund_status: Option<String>,

    /// The batch this shipment belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch_id: Option<String>,

    /// Status of the shipment within its batch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch_status: Option<String>,

    /// Batch processing message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch_message: Option<String>,

    /// The USPS zone between origin and destination.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usps_zone: Option<u32>,

    /// URL of the generated stamp image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stamp_url: Option<String>,

    /// URL of the generated barcode image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barcode_url: Option<String>,
}

/// Parameters for creating a shipment.
///
/// Addresses, parcel and customs info may be full objects or references by
/// `id`. Absent fields are left out of the request body.
#[derive(Debug, Clone, Serialize, Default, PartialEq)]
pub struct ShipmentCreateParams {
    /// The origin address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_address: Option<Address>,

    /// The destination address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_address: Option<Address>,

    /// The buyer's address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buyer_address: Option<Address>,

    /// The return address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_address: Option<Address>,

    /// The package.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parcel: Option<Parcel>,

    /// Customs declaration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customs_info: Option<CustomsInfo>,

    /// Carrier options.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<HashMap<String, Value>>,

    /// Whether this is a return shipment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_return: Option<bool>,

    /// ISO 4217 currency for rates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    /// A caller-supplied reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

impl RestResource for Shipment {
    type Id = String;
    type CreateParams = ShipmentCreateParams;

    const NAME: &'static str = "Shipment";
    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            &["id"],
            "shipments/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Post,
            ResourceOperation::Create,
            &[],
            "shipments",
        ),
    ];

    fn get_id(&self) -> Option<Self::Id> {
        self.id.clone()
    }
}

impl Shipment {
    /// Retrieves a shipment by id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if no shipment has this id.
    pub async fn retrieve(
        client: &RestClient,
        id: impl Into<String>,
    ) -> Result<ResourceResponse<Self>, ResourceError> {
        Self::find(client, id.into()).await
    }

    /// Fetches the current rate quotes and replaces the cached `rates`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::PathResolutionFailed`] if the shipment has no id.
    pub async fn get_rates(&mut self, client: &RestClient) -> Result<&[Rate], ResourceError> {
        let response = self
            .get_action(client, "shipments/{id}/rates", "get_rates", None)
            .await?;

        let rates: ResourceResponse<Vec<Rate>> =
            ResourceResponse::from_http_response(response, Some("rates"))?;

        let rates = self.rates.insert(rates.into_inner());
        Ok(rates.as_slice())
    }

    /// Buys the rate with the given id.
    ///
    /// Copies `insurance`, `postage_label`, `tracking_code` and
    /// `selected_rate` from the response.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::PathResolutionFailed`] if the shipment has no id.
    /// Returns [`ResourceError::Http`] if the purchase is declined, e.g. for
    /// insufficient funds.
    pub async fn buy(&mut self, client: &RestClient, rate_id: &str) -> Result<(), ResourceError> {
        let body = serde_json::json!({ "rate": { "id": rate_id } });
        let response = self
            .post_action(client, "shipments/{id}/buy", "buy", body)
            .await?;

        let bought = Self::from_response(response)?;
        self.insurance = bought.insurance;
        self.postage_label = bought.postage_label;
        self.tracking_code = bought.tracking_code;
        self.selected_rate = bought.selected_rate;

        tracing::debug!(
            shipment_id = self.id.as_deref().unwrap_or_default(),
            rate_id,
            "Bought shipment rate"
        );
        Ok(())
    }

    /// Buys the given rate.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::PathResolutionFailed`] if the rate or the
    /// shipment has no id.
    pub async fn buy_rate(&mut self, client: &RestClient, rate: &Rate) -> Result<(), ResourceError> {
        let rate_id = rate.id.as_deref().ok_or(ResourceError::PathResolutionFailed {
            resource: Self::NAME,
            operation: "buy",
        })?;
        self.buy(client, rate_id).await
    }

    /// Insures a purchased shipment for `amount`.
    ///
    /// Non-null fields of the response are merged onto this shipment.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::PathResolutionFailed`] if the shipment has no id.
    pub async fn insure(
        &mut self,
        client: &RestClient,
        amount: Decimal,
    ) -> Result<(), ResourceError> {
        let body = serde_json::json!({ "amount": amount.to_string() });
        let response = self
            .post_action(client, "shipments/{id}/insure", "insure", body)
            .await?;

        self.merge_response(&response)
    }

    /// Generates the label in another file format.
    ///
    /// Non-null fields of the response are merged onto this shipment, which
    /// fills in the matching `postage_label.label_*_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::PathResolutionFailed`] if the shipment has no id.
    pub async fn generate_label(
        &mut self,
        client: &RestClient,
        format: LabelFormat,
    ) -> Result<(), ResourceError> {
        let mut query = HashMap::new();
        query.insert("file_format".to_string(), format.as_str().to_string());

        let response = self
            .get_action(client, "shipments/{id}/label", "generate_label", Some(query))
            .await?;

        self.merge_response(&response)
    }

    /// Generates a stamp image and stores its `stamp_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::PathResolutionFailed`] if the shipment has no id.
    pub async fn generate_stamp(&mut self, client: &RestClient) -> Result<(), ResourceError> {
        let response = self
            .get_action(client, "shipments/{id}/stamp", "generate_stamp", None)
            .await?;

        self.stamp_url = Self::from_response(response)?.stamp_url;
        Ok(())
    }

    /// Generates a barcode image and stores its `barcode_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::PathResolutionFailed`] if the shipment has no id.
    pub async fn generate_barcode(&mut self, client: &RestClient) -> Result<(), ResourceError> {
        let response = self
            .get_action(client, "shipments/{id}/barcode", "generate_barcode", None)
            .await?;

        self.barcode_url = Self::from_response(response)?.barcode_url;
        Ok(())
    }

    /// Requests a refund from the carrier.
    ///
    /// Non-null fields of the response are merged onto this shipment;
    /// `refund_status` reflects the outcome.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::PathResolutionFailed`] if the shipment has no id.
    pub async fn refund(&mut self, client: &RestClient) -> Result<(), ResourceError> {
        let response = self
            .get_action(client, "shipments/{id}/refund", "refund", None)
            .await?;

        self.merge_response(&response)
    }

    /// Returns the cheapest rate that passes `filter`.
    ///
    /// Rates are fetched first only if they have never been fetched; a
    /// cached empty list is used as is. `Ok(None)` means no rate matched.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::RateSelection`] if any cached rate has an
    /// unknown carrier or service, or a malformed amount.
    pub async fn lowest_rate(
        &mut self,
        client: &RestClient,
        filter: &RateFilter,
    ) -> Result<Option<&Rate>, ResourceError> {
        if self.rates.is_none() {
            self.get_rates(client).await?;
        }

        let rates = self.rates.as_deref().unwrap_or_default();
        Ok(select_lowest(rates, filter)?)
    }

    async fn get_action(
        &self,
        client: &RestClient,
        template: &str,
        operation: &'static str,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, ResourceError> {
        let path = self.instance_path(template, operation)?;
        tracing::debug!(operation, path = %path, "Shipment action");

        client
            .get(&path, query)
            .await
            .map_err(|e| ResourceError::from_rest_error(e, Self::NAME, self.id.as_deref()))
    }

    async fn post_action(
        &self,
        client: &RestClient,
        template: &str,
        operation: &'static str,
        body: Value,
    ) -> Result<HttpResponse, ResourceError> {
        let path = self.instance_path(template, operation)?;
        tracing::debug!(operation, path = %path, "Shipment action");

        client
            .post(&path, body)
            .await
            .map_err(|e| ResourceError::from_rest_error(e, Self::NAME, self.id.as_deref()))
    }

    fn from_response(response: HttpResponse) -> Result<Self, ResourceError> {
        ResourceResponse::from_http_response(response, None).map(ResourceResponse::into_inner)
    }

    fn merge_response(&mut self, response: &HttpResponse) -> Result<(), ResourceError> {
        merge(self, &response.body).map_err(|source| ResourceError::Merge {
            resource: Self::NAME,
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiKey, EasyPostConfig};
    use crate::rates::Carrier;
    use serde_json::json;

    fn offline_client() -> RestClient {
        let config = EasyPostConfig::builder()
            .api_key(ApiKey::new("EZTK123").unwrap())
            .build()
            .unwrap();
        RestClient::new(&config).unwrap()
    }

    #[test]
    fn test_shipment_deserialization_from_api_response() {
        let shipment: Shipment = serde_json::from_value(json!({
            "id": "shp_1",
            "object": "Shipment",
            "mode": "test",
            "created_at": "2024-01-24T00:03:23Z",
            "is_return": false,
            "options": {"currency": "USD", "date_advance": 0},
            "messages": [
                {"carrier": "UPS", "carrier_account_id": "ca_1", "type": "rate_error", "message": "Unable to rate"}
            ],
            "to_address": {"id": "adr_to", "city": "Redondo Beach"},
            "parcel": {"id": "prcl_1", "weight": 10},
            "rates": [
                {"id": "rate_1", "carrier": "USPS", "service": "Priority", "rate": "8.20"}
            ],
            "selected_rate": null,
            "usps_zone": 4
        }))
        .unwrap();

        assert_eq!(shipment.id.as_deref(), Some("shp_1"));
        assert_eq!(shipment.rates.as_ref().map(Vec::len), Some(1));
        assert_eq!(
            shipment.messages.unwrap()[0].message_type.as_deref(),
            Some("rate_error")
        );
        assert_eq!(shipment.options.unwrap().get("currency"), Some(&json!("USD")));
        assert_eq!(shipment.usps_zone, Some(4));
        assert!(shipment.selected_rate.is_none());
    }

    #[test]
    fn test_rates_absent_differs_from_empty() {
        let unfetched: Shipment = serde_json::from_value(json!({"id": "shp_1"})).unwrap();
        let fetched: Shipment =
            serde_json::from_value(json!({"id": "shp_1", "rates": []})).unwrap();

        assert!(unfetched.rates.is_none());
        assert_eq!(fetched.rates, Some(Vec::new()));
    }

    #[test]
    fn test_create_params_omit_absent_fields() {
        let params = ShipmentCreateParams {
            to_address: Some(Address::from_id("adr_to")),
            reference: Some("order-1".to_string()),
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({"to_address": {"id": "adr_to"}, "reference": "order-1"})
        );
    }

    #[test]
    fn test_label_format_values() {
        assert_eq!(LabelFormat::Pdf.as_str(), "pdf");
        assert_eq!(LabelFormat::Zpl.as_str(), "zpl");
        assert_eq!(LabelFormat::Epl2.as_str(), "epl2");
        assert_eq!(serde_json::to_string(&LabelFormat::Epl2).unwrap(), "\"epl2\"");
    }

    #[test]
    fn test_shipment_paths() {
        assert_eq!(Shipment::NAME, "Shipment");
        assert_eq!(Shipment::resource_key(), "shipment");

        let shipment = Shipment {
            id: Some("shp_1".to_string()),
            ..Default::default()
        };
        assert_eq!(
            shipment.instance_path("shipments/{id}/rates", "get_rates").unwrap(),
            "shipments/shp_1/rates"
        );
    }

    #[test]
    fn test_merge_response_keeps_local_fields() {
        let mut shipment = Shipment {
            id: Some("shp_1".to_string()),
            reference: Some("order-1".to_string()),
            ..Default::default()
        };
        let response = HttpResponse::new(
            200,
            HashMap::new(),
            json!({"id": "shp_1", "reference": null, "refund_status": "submitted"}),
        );

        shipment.merge_response(&response).unwrap();

        assert_eq!(shipment.reference.as_deref(), Some("order-1"));
        assert_eq!(shipment.refund_status.as_deref(), Some("submitted"));
    }

    #[tokio::test]
    async fn test_instance_operations_without_id_fail_before_sending() {
        let client = offline_client();
        let mut shipment = Shipment::default();

        assert!(matches!(
            shipment.get_rates(&client).await,
            Err(ResourceError::PathResolutionFailed { operation: "get_rates", .. })
        ));
        assert!(matches!(
            shipment.buy(&client, "rate_1").await,
            Err(ResourceError::PathResolutionFailed { operation: "buy", .. })
        ));
        assert!(matches!(
            shipment.insure(&client, Decimal::new(10000, 2)).await,
            Err(ResourceError::PathResolutionFailed { operation: "insure", .. })
        ));
        assert!(matches!(
            shipment.generate_label(&client, LabelFormat::Pdf).await,
            Err(ResourceError::PathResolutionFailed { operation: "generate_label", .. })
        ));
        assert!(matches!(
            shipment.generate_stamp(&client).await,
            Err(ResourceError::PathResolutionFailed { operation: "generate_stamp", .. })
        ));
        assert!(matches!(
            shipment.generate_barcode(&client).await,
            Err(ResourceError::PathResolutionFailed { operation: "generate_barcode", .. })
        ));
        assert!(matches!(
            shipment.refund(&client).await,
            Err(ResourceError::PathResolutionFailed { operation: "refund", .. })
        ));
    }

    #[tokio::test]
    async fn test_buy_rate_without_rate_id_fails_before_sending() {
        let client = offline_client();
        let mut shipment = Shipment {
            id: Some("shp_1".to_string()),
            ..Default::default()
        };

        let result = shipment.buy_rate(&client, &Rate::default()).await;
        assert!(matches!(
            result,
            Err(ResourceError::PathResolutionFailed { operation: "buy", .. })
        ));
    }

    #[tokio::test]
    async fn test_lowest_rate_uses_cached_rates_without_fetching() {
        let client = offline_client();
        let mut shipment = Shipment {
            id: Some("shp_1".to_string()),
            rates: Some(vec![
                Rate {
                    id: Some("rate_ups".to_string()),
                    carrier: Some("UPS".to_string()),
                    service: Some("Ground".to_string()),
                    rate: Some("10.50".to_string()),
                    ..Default::default()
                },
                Rate {
                    id: Some("rate_usps".to_string()),
                    carrier: Some("USPS".to_string()),
                    service: Some("Priority".to_string()),
                    rate: Some("8.20".to_string()),
                    ..Default::default()
                },
            ]),
            ..Default::default()
        };

        let lowest = shipment
            .lowest_rate(&client, &RateFilter::new())
            .await
            .unwrap()
            .and_then(|rate| rate.id.clone());
        assert_eq!(lowest.as_deref(), Some("rate_usps"));

        let filter = RateFilter::new().exclude_carriers([Carrier::Usps]);
        let lowest = shipment
            .lowest_rate(&client, &filter)
            .await
            .unwrap()
            .and_then(|rate| rate.id.clone());
        assert_eq!(lowest.as_deref(), Some("rate_ups"));
    }

    #[tokio::test]
    async fn test_lowest_rate_on_cached_empty_list_is_none() {
        let client = offline_client();
        let mut shipment = Shipment {
            id: Some("shp_1".to_string()),
            rates: Some(Vec::new()),
            ..Default::default()
        };

        assert!(shipment
            .lowest_rate(&client, &RateFilter::new())
            .await
            .unwrap()
            .is_none());
    }
}
