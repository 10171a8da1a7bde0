//! Carrier service levels.
//!
//! Several UPS service names start with a digit (`2ndDayAir`, `3DaySelect`).
//! They are ordinary entries in the name table below.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::rates::UnknownValueError;

/// A carrier service level, such as `Ground` or `Priority`.
///
/// Service names are shared across carriers where the API shares them
/// (`Express` is both a USPS and a UPS service).
///
/// # Example
///
/// ```rust
/// use easypost::rates::Service;
///
/// let service: Service = "2ndDayAirAM".parse().unwrap();
/// assert_eq!(service, Service::SecondDayAirAm);
/// assert_eq!(Service::ThreeDaySelect.to_string(), "3DaySelect");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Service {
    // USPS
    /// USPS First-Class.
    First,
    /// USPS Priority Mail.
    Priority,
    /// USPS Priority Mail Express, UPS Worldwide Express.
    Express,
    /// USPS Parcel Select.
    ParcelSelect,
    /// USPS Library Mail.
    LibraryMail,
    /// USPS Media Mail.
    MediaMail,
    /// USPS First-Class Mail International.
    FirstClassMailInternational,
    /// USPS First-Class Package International.
    FirstClassPackageInternationalService,
    /// USPS Priority Mail International.
    PriorityMailInternational,
    /// USPS Priority Mail Express International.
    ExpressMailInternational,

    // UPS
    /// UPS Ground.
    Ground,
    /// UPS Standard.
    UpsStandard,
    /// UPS Worldwide Saver.
    UpsSaver,
    /// UPS Worldwide Express Plus.
    ExpressPlus,
    /// UPS Worldwide Expedited.
    Expedited,
    /// UPS Next Day Air.
    NextDayAir,
    /// UPS Next Day Air Saver.
    NextDayAirSaver,
    /// UPS Next Day Air Early A.M.
    NextDayAirEarlyAm,
    /// UPS 2nd Day Air.
    SecondDayAir,
    /// UPS 2nd Day Air A.M.
    SecondDayAirAm,
    /// UPS 3 Day Select.
    ThreeDaySelect,

    // FedEx
    /// FedEx Ground.
    FedExGround,
    /// FedEx Home Delivery.
    GroundHomeDelivery,
    /// FedEx 2Day.
    FedEx2Day,
    /// FedEx 2Day A.M.
    FedEx2DayAm,
    /// FedEx Express Saver.
    FedExExpressSaver,
    /// FedEx Standard Overnight.
    StandardOvernight,
    /// FedEx First Overnight.
    FirstOvernight,
    /// FedEx Priority Overnight.
    PriorityOvernight,
    /// FedEx International Economy.
    InternationalEconomy,
    /// FedEx International Priority.
    InternationalPriority,
    /// FedEx SmartPost.
    SmartPost,

    // Other carriers
    /// Generic overnight service (OnTrac, LaserShip).
    Overnight,
    /// Canada Post Expedited Parcel.
    ExpeditedParcel,
    /// Canada Post Xpresspost.
    Xpresspost,
    /// DHL Express Worldwide.
    ExpressWorldwideNonDoc,
}

impl Service {
    /// Every service, in declaration order.
    pub const ALL: &'static [Self] = &[
        Self::First,
        Self::Priority,
        Self::Express,
        Self::ParcelSelect,
        Self::LibraryMail,
        Self::MediaMail,
        Self::FirstClassMailInternational,
        Self::FirstClassPackageInternationalService,
        Self::PriorityMailInternational,
        Self::ExpressMailInternational,
        Self::Ground,
        Self::UpsStandard,
        Self::UpsSaver,
        Self::ExpressPlus,
        Self::Expedited,
        Self::NextDayAir,
        Self::NextDayAirSaver,
        Self::NextDayAirEarlyAm,
        Self::SecondDayAir,
        Self::SecondDayAirAm,
        Self::ThreeDaySelect,
        Self::FedExGround,
        Self::GroundHomeDelivery,
        Self::FedEx2Day,
        Self::FedEx2DayAm,
        Self::FedExExpressSaver,
        Self::StandardOvernight,
        Self::FirstOvernight,
        Self::PriorityOvernight,
        Self::InternationalEconomy,
        Self::InternationalPriority,
        Self::SmartPost,
        Self::Overnight,
        Self::ExpeditedParcel,
        Self::Xpresspost,
        Self::ExpressWorldwideNonDoc,
    ];

    /// Returns the service name as the API spells it.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::First => "First",
            Self::Priority => "Priority",
            Self::Express => "Express",
            Self::ParcelSelect => "ParcelSelect",
            Self::LibraryMail => "LibraryMail",
            Self::MediaMail => "MediaMail",
            Self::FirstClassMailInternational => "FirstClassMailInternational",
            Self::FirstClassPackageInternationalService => "FirstClassPackageInternationalService",
            Self::PriorityMailInternational => "PriorityMailInternational",
            Self::ExpressMailInternational => "ExpressMailInternational",
            Self::Ground => "Ground",
            Self::UpsStandard => "UPSStandard",
            Self::UpsSaver => "UPSSaver",
            Self::ExpressPlus => "ExpressPlus",
            Self::Expedited => "Expedited",
            Self::NextDayAir => "NextDayAir",
            Self::NextDayAirSaver => "NextDayAirSaver",
            Self::NextDayAirEarlyAm => "NextDayAirEarlyAM",
            Self::SecondDayAir => "2ndDayAir",
            Self::SecondDayAirAm => "2ndDayAirAM",
            Self::ThreeDaySelect => "3DaySelect",
            Self::FedExGround => "FEDEX_GROUND",
            Self::GroundHomeDelivery => "GROUND_HOME_DELIVERY",
            Self::FedEx2Day => "FEDEX_2_DAY",
            Self::FedEx2DayAm => "FEDEX_2_DAY_AM",
            Self::FedExExpressSaver => "FEDEX_EXPRESS_SAVER",
            Self::StandardOvernight => "STANDARD_OVERNIGHT",
            Self::FirstOvernight => "FIRST_OVERNIGHT",
            Self::PriorityOvernight => "PRIORITY_OVERNIGHT",
            Self::InternationalEconomy => "INTERNATIONAL_ECONOMY",
            Self::InternationalPriority => "INTERNATIONAL_PRIORITY",
            Self::SmartPost => "SMART_POST",
            Self::Overnight => "Overnight",
            Self::ExpeditedParcel => "ExpeditedParcel",
            Self::Xpresspost => "Xpresspost",
            Self::ExpressWorldwideNonDoc => "ExpressWorldwideNonDoc",
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Service {
    type Err = UnknownValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|service| service.as_str() == s)
            .ok_or_else(|| UnknownValueError {
                kind: "service",
                value: s.to_string(),
            })
    }
}

impl TryFrom<String> for Service {
    type Error = UnknownValueError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Service> for &'static str {
    fn from(service: Service) -> Self {
        service.as_str()
    }
}
