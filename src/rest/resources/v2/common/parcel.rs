//! Parcel dimensions and weight.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The package being shipped.
///
/// Dimensions are in inches and weight in ounces. Either all three
/// dimensions or a `predefined_package` name should be given.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Parcel {
    /// The unique identifier of the parcel (`prcl_...`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// `test` or `production`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,

    /// Length in inches.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,

    /// Width in inches.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,

    /// Height in inches.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,

    /// Weight in ounces.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,

    /// A carrier package name such as `FlatRateEnvelope`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub predefined_package: Option<String>,

    /// When the parcel was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// When the parcel was last updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parcel_round_trips_dimensions() {
        let parcel: Parcel = serde_json::from_value(json!({
            "id": "prcl_1",
            "length": 20.2,
            "width": 10.9,
            "height": 5,
            "weight": 65.9,
            "predefined_package": null
        }))
        .unwrap();

        assert_eq!(parcel.height, Some(5.0));
        assert!(parcel.predefined_package.is_none());
    }
}
