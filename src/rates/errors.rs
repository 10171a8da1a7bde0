//! Error types for carrier/service parsing and rate selection.

use thiserror::Error;

/// A wire string that does not name a known carrier or service.
///
/// # Example
///
/// ```rust
/// use easypost::rates::Carrier;
///
/// let error = "Zorb".parse::<Carrier>().unwrap_err();
/// assert_eq!(error.kind, "carrier");
/// assert_eq!(error.to_string(), "unknown carrier 'Zorb'");
/// ```
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown {kind} '{value}'")]
pub struct UnknownValueError {
    /// Which enumeration rejected the value (`"carrier"` or `"service"`).
    pub kind: &'static str,
    /// The rejected wire string.
    pub value: String,
}

/// Error returned when a set of rates cannot be ranked.
///
/// An empty result after filtering is not an error; see
/// [`select_lowest`](crate::rates::select_lowest).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RateSelectionError {
    /// A rate carries a carrier or service outside the known set.
    #[error("Rate {rate_id} has an {source}")]
    UnknownEnumValue {
        /// The id of the offending rate.
        rate_id: String,
        /// The parse failure.
        #[source]
        source: UnknownValueError,
    },

    /// A rate's amount is not a non-negative decimal.
    #[error("Rate {rate_id} has a malformed amount: '{amount}'")]
    MalformedAmount {
        /// The id of the offending rate.
        rate_id: String,
        /// The raw amount string.
        amount: String,
    },
}

impl RateSelectionError {
    /// Returns the id of the rate that caused the failure.
    #[must_use]
    pub fn rate_id(&self) -> &str {
        match self {
            Self::UnknownEnumValue { rate_id, .. } | Self::MalformedAmount { rate_id, .. } => {
                rate_id
            }
        }
    }
}

// Verify error types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<UnknownValueError>();
    assert_send_sync::<RateSelectionError>();
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_enum_value_message_names_rate_and_value() {
        let error = RateSelectionError::UnknownEnumValue {
            rate_id: "rate_1".to_string(),
            source: UnknownValueError {
                kind: "service",
                value: "Teleport".to_string(),
            },
        };

        assert_eq!(
            error.to_string(),
            "Rate rate_1 has an unknown service 'Teleport'"
        );
        assert_eq!(error.rate_id(), "rate_1");
    }

    #[test]
    fn test_malformed_amount_message() {
        let error = RateSelectionError::MalformedAmount {
            rate_id: "rate_2".to_string(),
            amount: "-1.00".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "Rate rate_2 has a malformed amount: '-1.00'"
        );
        assert_eq!(error.rate_id(), "rate_2");
    }

    #[test]
    fn test_unknown_enum_value_exposes_source() {
        use std::error::Error as _;

        let error = RateSelectionError::UnknownEnumValue {
            rate_id: "rate_3".to_string(),
            source: UnknownValueError {
                kind: "carrier",
                value: "Zorb".to_string(),
            },
        };

        assert_eq!(
            error.source().map(ToString::to_string),
            Some("unknown carrier 'Zorb'".to_string())
        );
    }
}
