//! Shipping carriers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::rates::UnknownValueError;

/// A shipping carrier that can quote rates.
///
/// Parsed from and rendered as the carrier name the API uses on rates.
///
/// # Example
///
/// ```rust
/// use easypost::rates::Carrier;
///
/// let carrier: Carrier = "FedEx".parse().unwrap();
/// assert_eq!(carrier, Carrier::FedEx);
/// assert_eq!(Carrier::DhlExpress.to_string(), "DHLExpress");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Carrier {
    /// United States Postal Service.
    Usps,
    /// United Parcel Service.
    Ups,
    /// FedEx.
    FedEx,
    /// DHL Express.
    DhlExpress,
    /// Canada Post.
    CanadaPost,
    /// Purolator.
    Purolator,
    /// OnTrac.
    OnTrac,
    /// LaserShip.
    LaserShip,
}

impl Carrier {
    /// Every carrier, in declaration order.
    pub const ALL: &'static [Self] = &[
        Self::Usps,
        Self::Ups,
        Self::FedEx,
        Self::DhlExpress,
        Self::CanadaPost,
        Self::Purolator,
        Self::OnTrac,
        Self::LaserShip,
    ];

    /// Returns the carrier name as the API spells it.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Usps => "USPS",
            Self::Ups => "UPS",
            Self::FedEx => "FedEx",
            Self::DhlExpress => "DHLExpress",
            Self::CanadaPost => "CanadaPost",
            Self::Purolator => "Purolator",
            Self::OnTrac => "OnTrac",
            Self::LaserShip => "LaserShip",
        }
    }
}

impl fmt::Display for Carrier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Carrier {
    type Err = UnknownValueError;

    /// Matches the API spelling exactly; carrier names are case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|carrier| carrier.as_str() == s)
            .ok_or_else(|| UnknownValueError {
                kind: "carrier",
                value: s.to_string(),
            })
    }
}

impl TryFrom<String> for Carrier {
    type Error = UnknownValueError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Carrier> for &'static str {
    fn from(carrier: Carrier) -> Self {
        carrier.as_str()
    }
}
