//! Lowest-rate selection over a snapshot of quotes.

use rust_decimal::Decimal;

use crate::rates::{Carrier, RateSelectionError, Service};
use crate::rest::resources::v2::Rate;

/// Carrier and service restrictions for [`select_lowest`].
///
/// Each list is optional; `None` places no restriction on that axis.
/// An include list that is present but empty admits nothing.
///
/// # Example
///
/// ```rust
/// use easypost::rates::{Carrier, RateFilter, Service};
///
/// let filter = RateFilter::new()
///     .include_carriers([Carrier::Usps, Carrier::Ups])
///     .exclude_services([Service::Express]);
///
/// assert!(filter.admits(Carrier::Usps, Service::Priority));
/// assert!(!filter.admits(Carrier::Usps, Service::Express));
/// assert!(!filter.admits(Carrier::FedEx, Service::FedExGround));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RateFilter {
    /// Keep only rates from these carriers.
    pub include_carriers: Option<Vec<Carrier>>,
    /// Keep only rates for these services.
    pub include_services: Option<Vec<Service>>,
    /// Drop rates from these carriers.
    pub exclude_carriers: Option<Vec<Carrier>>,
    /// Drop rates for these services.
    pub exclude_services: Option<Vec<Service>>,
}

impl RateFilter {
    /// Creates a filter with no restrictions.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts selection to the given carriers.
    #[must_use]
    pub fn include_carriers(mut self, carriers: impl IntoIterator<Item = Carrier>) -> Self {
        self.include_carriers = Some(carriers.into_iter().collect());
        self
    }

    /// Restricts selection to the given services.
    #[must_use]
    pub fn include_services(mut self, services: impl IntoIterator<Item = Service>) -> Self {
        self.include_services = Some(services.into_iter().collect());
        self
    }

    /// Excludes the given carriers from selection.
    #[must_use]
    pub fn exclude_carriers(mut self, carriers: impl IntoIterator<Item = Carrier>) -> Self {
        self.exclude_carriers = Some(carriers.into_iter().collect());
        self
    }

    /// Excludes the given services from selection.
    #[must_use]
    pub fn exclude_services(mut self, services: impl IntoIterator<Item = Service>) -> Self {
        self.exclude_services = Some(services.into_iter().collect());
        self
    }

    /// Returns `true` if no list is set.
    #[must_use]
    pub const fn is_unrestricted(&self) -> bool {
        self.include_carriers.is_none()
            && self.include_services.is_none()
            && self.exclude_carriers.is_none()
            && self.exclude_services.is_none()
    }

    /// Returns `true` if a rate with this carrier and service passes every list.
    #[must_use]
    pub fn admits(&self, carrier: Carrier, service: Service) -> bool {
        self.include_carriers
            .as_ref()
            .map_or(true, |list| list.contains(&carrier))
            && self
                .include_services
                .as_ref()
                .map_or(true, |list| list.contains(&service))
            && !self
                .exclude_carriers
                .as_ref()
                .is_some_and(|list| list.contains(&carrier))
            && !self
                .exclude_services
                .as_ref()
                .is_some_and(|list| list.contains(&service))
    }
}

/// A rate whose carrier, service and amount have been validated.
#[derive(Debug)]
struct CheckedRate<'a> {
    rate: &'a Rate,
    carrier: Carrier,
    service: Service,
    amount: Decimal,
}

impl<'a> CheckedRate<'a> {
    fn check(rate: &'a Rate) -> Result<Self, RateSelectionError> {
        let rate_id = || rate.id.clone().unwrap_or_default();

        let carrier = rate
            .parsed_carrier()
            .map_err(|source| RateSelectionError::UnknownEnumValue {
                rate_id: rate_id(),
                source,
            })?;
        let service = rate
            .parsed_service()
            .map_err(|source| RateSelectionError::UnknownEnumValue {
                rate_id: rate_id(),
                source,
            })?;
        let amount = rate
            .amount()
            .ok_or_else(|| RateSelectionError::MalformedAmount {
                rate_id: rate_id(),
                amount: rate.rate.clone().unwrap_or_default(),
            })?;

        Ok(Self {
            rate,
            carrier,
            service,
            amount,
        })
    }
}

/// Returns the cheapest rate that passes `filter`.
///
/// Every rate is validated before filtering, so one rate with an unknown
/// carrier or service, or a malformed amount, fails the whole selection
/// even if the filter would have dropped it. Among equally cheap rates the
/// first in input order wins. `Ok(None)` means nothing survived the filter.
///
/// # Errors
///
/// Returns [`RateSelectionError::UnknownEnumValue`] or
/// [`RateSelectionError::MalformedAmount`] for the first invalid rate.
///
/// # Example
///
/// ```rust
/// use easypost::rates::{select_lowest, Carrier, RateFilter};
/// use easypost::rest::resources::v2::Rate;
///
/// let quote = |id: &str, carrier: &str, service: &str, amount: &str| Rate {
///     id: Some(id.to_string()),
///     carrier: Some(carrier.to_string()),
///     service: Some(service.to_string()),
///     rate: Some(amount.to_string()),
///     ..Default::default()
/// };
/// let rates = vec![
///     quote("rate_ups", "UPS", "Ground", "10.50"),
///     quote("rate_usps", "USPS", "Priority", "8.20"),
/// ];
///
/// let lowest = select_lowest(&rates, &RateFilter::new()).unwrap().unwrap();
/// assert_eq!(lowest.id.as_deref(), Some("rate_usps"));
///
/// let filter = RateFilter::new().exclude_carriers([Carrier::Usps]);
/// let lowest = select_lowest(&rates, &filter).unwrap().unwrap();
/// assert_eq!(lowest.id.as_deref(), Some("rate_ups"));
/// ```
pub fn select_lowest<'a>(
    rates: &'a [Rate],
    filter: &RateFilter,
) -> Result<Option<&'a Rate>, RateSelectionError> {
    let checked = rates
        .iter()
        .map(CheckedRate::check)
        .collect::<Result<Vec<_>, _>>()?;

    let lowest = checked
        .into_iter()
        .filter(|candidate| filter.admits(candidate.carrier, candidate.service))
        .min_by_key(|candidate| candidate.amount);

    match &lowest {
        Some(candidate) => tracing::debug!(
            rate_id = candidate.rate.id.as_deref().unwrap_or_default(),
            carrier = %candidate.carrier,
            service = %candidate.service,
            amount = %candidate.amount,
            "Selected lowest rate"
        ),
        None => tracing::debug!(candidates = rates.len(), "No rate matched the filter"),
    }

    Ok(lowest.map(|candidate| candidate.rate))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rates::UnknownValueError;

    fn quote(id: &str, carrier: &str, service: &str, amount: &str) -> Rate {
        Rate {
            id: Some(id.to_string()),
            carrier: Some(carrier.to_string()),
            service: Some(service.to_string()),
            rate: Some(amount.to_string()),
            ..Default::default()
        }
    }

    fn sample_rates() -> Vec<Rate> {
        vec![
            quote("rate_ups", "UPS", "Ground", "10.50"),
            quote("rate_usps", "USPS", "Priority", "8.20"),
        ]
    }

    fn selected_id<'a>(rates: &'a [Rate], filter: &RateFilter) -> Option<&'a str> {
        select_lowest(rates, filter)
            .unwrap()
            .and_then(|rate| rate.id.as_deref())
    }

    #[test]
    fn test_no_filters_picks_cheapest() {
        let rates = sample_rates();
        assert_eq!(selected_id(&rates, &RateFilter::new()), Some("rate_usps"));
    }

    #[test]
    fn test_exclude_carrier() {
        let rates = sample_rates();
        let filter = RateFilter::new().exclude_carriers([Carrier::Usps]);
        assert_eq!(selected_id(&rates, &filter), Some("rate_ups"));
    }

    #[test]
    fn test_include_service_without_match_is_none() {
        let rates = sample_rates();
        let filter = RateFilter::new().include_services([Service::Overnight]);
        assert_eq!(selected_id(&rates, &filter), None);
    }

    #[test]
    fn test_empty_input_is_none() {
        assert_eq!(selected_id(&[], &RateFilter::new()), None);
        let filter = RateFilter::new().include_carriers([Carrier::Ups]);
        assert_eq!(selected_id(&[], &filter), None);
    }

    #[test]
    fn test_unknown_carrier_fails_selection() {
        let mut rates = sample_rates();
        rates.push(quote("rate_zorb", "Zorb", "Ground", "1.00"));
        let filter = RateFilter::new().include_carriers([Carrier::Ups, Carrier::Usps]);

        let error = select_lowest(&rates, &filter).unwrap_err();
        assert_eq!(
            error,
            RateSelectionError::UnknownEnumValue {
                rate_id: "rate_zorb".to_string(),
                source: UnknownValueError {
                    kind: "carrier",
                    value: "Zorb".to_string(),
                },
            }
        );
    }

    #[test]
    fn test_unknown_service_fails_selection() {
        let mut rates = sample_rates();
        rates.push(quote("rate_tp", "UPS", "Teleport", "1.00"));

        let error = select_lowest(&rates, &RateFilter::new()).unwrap_err();
        assert!(matches!(
            error,
            RateSelectionError::UnknownEnumValue { ref source, .. } if source.kind == "service"
        ));
    }

    #[test]
    fn test_malformed_amount_fails_selection() {
        let mut rates = sample_rates();
        rates.push(quote("rate_bad", "UPS", "Ground", "ten"));
        let error = select_lowest(&rates, &RateFilter::new()).unwrap_err();
        assert_eq!(
            error,
            RateSelectionError::MalformedAmount {
                rate_id: "rate_bad".to_string(),
                amount: "ten".to_string(),
            }
        );

        let rates = vec![quote("rate_neg", "UPS", "Ground", "-3.00")];
        assert!(matches!(
            select_lowest(&rates, &RateFilter::new()),
            Err(RateSelectionError::MalformedAmount { .. })
        ));
    }

    #[test]
    fn test_ties_resolve_to_first_in_input_order() {
        let rates = vec![
            quote("rate_a", "UPS", "Ground", "9.00"),
            quote("rate_b", "USPS", "Priority", "9.0"),
            quote("rate_c", "FedEx", "FEDEX_GROUND", "9.00"),
        ];
        assert_eq!(selected_id(&rates, &RateFilter::new()), Some("rate_a"));
    }

    #[test]
    fn test_amounts_compare_numerically() {
        let rates = vec![
            quote("rate_a", "UPS", "Ground", "100.00"),
            quote("rate_b", "USPS", "Priority", "9.99"),
            quote("rate_c", "USPS", "First", "10"),
        ];
        assert_eq!(selected_id(&rates, &RateFilter::new()), Some("rate_b"));
    }

    #[test]
    fn test_all_filters_combined() {
        let rates = vec![
            quote("rate_1", "USPS", "First", "3.00"),
            quote("rate_2", "USPS", "Priority", "7.00"),
            quote("rate_3", "UPS", "Ground", "6.00"),
            quote("rate_4", "UPS", "NextDayAir", "40.00"),
            quote("rate_5", "FedEx", "FEDEX_GROUND", "5.00"),
        ];
        let filter = RateFilter::new()
            .include_carriers([Carrier::Usps, Carrier::Ups])
            .include_services([Service::Priority, Service::Ground, Service::NextDayAir])
            .exclude_carriers([Carrier::FedEx])
            .exclude_services([Service::Ground]);

        assert_eq!(selected_id(&rates, &filter), Some("rate_2"));
    }

    #[test]
    fn test_result_satisfies_filter_and_is_minimal() {
        let rates = vec![
            quote("rate_1", "USPS", "First", "3.00"),
            quote("rate_2", "USPS", "Priority", "7.00"),
            quote("rate_3", "UPS", "Ground", "6.00"),
            quote("rate_4", "UPS", "3DaySelect", "12.00"),
            quote("rate_5", "UPS", "2ndDayAir", "15.00"),
        ];
        let filters = [
            RateFilter::new(),
            RateFilter::new().include_carriers([Carrier::Ups]),
            RateFilter::new().exclude_services([Service::First, Service::Ground]),
            RateFilter::new().include_services([Service::SecondDayAir, Service::ThreeDaySelect]),
            RateFilter::new().include_carriers(Vec::new()),
        ];

        for filter in &filters {
            let survivors: Vec<&Rate> = rates
                .iter()
                .filter(|r| {
                    filter.admits(r.parsed_carrier().unwrap(), r.parsed_service().unwrap())
                })
                .collect();

            match select_lowest(&rates, filter).unwrap() {
                Some(selected) => {
                    assert!(survivors.contains(&selected));
                    let amount = selected.amount().unwrap();
                    assert!(survivors.iter().all(|r| amount <= r.amount().unwrap()));
                }
                None => assert!(survivors.is_empty()),
            }
        }
    }

    #[test]
    fn test_selection_is_idempotent() {
        let rates = sample_rates();
        let filter = RateFilter::new().exclude_services([Service::Priority]);

        let first = select_lowest(&rates, &filter).unwrap();
        let second = select_lowest(&rates, &filter).unwrap();
        assert_eq!(first, second);
        assert!(std::ptr::eq(first.unwrap(), second.unwrap()));
    }

    #[test]
    fn test_filter_admits_and_unrestricted() {
        assert!(RateFilter::new().is_unrestricted());
        assert!(RateFilter::new().admits(Carrier::LaserShip, Service::Overnight));

        let filter = RateFilter::new().include_services(Vec::new());
        assert!(!filter.is_unrestricted());
        assert!(!filter.admits(Carrier::Usps, Service::Priority));
    }
}
