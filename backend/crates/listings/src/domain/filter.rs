//! Search Filters
//!
//! Every filter left unset matches everything; set filters combine with AND.

use std::fmt;
use std::str::FromStr;

use kernel::geo::canonical_state;

use crate::domain::property::{Property, PropertyType};
use crate::error::ListingsError;

const MILLION: u64 = 1_000_000;

/// Price band offered by the search form; the upper bound is exclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PriceRange {
    UpTo20M,
    From20MTo30M,
    From30MTo50M,
    Above50M,
}

impl PriceRange {
    pub const ALL: [PriceRange; 4] = [
        PriceRange::UpTo20M,
        PriceRange::From20MTo30M,
        PriceRange::From30MTo50M,
        PriceRange::Above50M,
    ];

    /// `[min, max)` in naira; `None` means unbounded
    pub fn bounds(self) -> (u64, Option<u64>) {
        match self {
            PriceRange::UpTo20M => (0, Some(20 * MILLION)),
            PriceRange::From20MTo30M => (20 * MILLION, Some(30 * MILLION)),
            PriceRange::From30MTo50M => (30 * MILLION, Some(50 * MILLION)),
            PriceRange::Above50M => (50 * MILLION, None),
        }
    }

    pub fn contains(self, price: u64) -> bool {
        let (min, max) = self.bounds();
        price >= min && max.is_none_or(|max| price < max)
    }

    /// Key used by the search form
    pub fn key(self) -> &'static str {
        match self {
            PriceRange::UpTo20M => "0-20m",
            PriceRange::From20MTo30M => "20-30m",
            PriceRange::From30MTo50M => "30-50m",
            PriceRange::Above50M => "50m+",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PriceRange::UpTo20M => "₦0 - ₦20M",
            PriceRange::From20MTo30M => "₦20M - ₦30M",
            PriceRange::From30MTo50M => "₦30M - ₦50M",
            PriceRange::Above50M => "₦50M+",
        }
    }
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for PriceRange {
    type Err = ListingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        PriceRange::ALL
            .into_iter()
            .find(|range| range.key() == key)
            .ok_or_else(|| ListingsError::UnknownPriceRange(s.trim().to_string()))
    }
}

/// Property search filter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyFilter {
    /// Canonical state name
    pub state: Option<&'static str>,
    pub property_type: Option<PropertyType>,
    pub price_range: Option<PriceRange>,
}

impl PropertyFilter {
    /// Filter that matches every property
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to a state ("Lagos", "Lagos State" and "lagos" are the same)
    pub fn with_state(mut self, state: &str) -> Result<Self, ListingsError> {
        self.state = Some(canonical_state(state)?);
        Ok(self)
    }

    pub fn with_property_type(mut self, property_type: PropertyType) -> Self {
        self.property_type = Some(property_type);
        self
    }

    pub fn with_price_range(mut self, price_range: PriceRange) -> Self {
        self.price_range = Some(price_range);
        self
    }

    /// Reset every filter
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    pub fn matches(&self, property: &Property) -> bool {
        self.state.is_none_or(|state| property.state == state)
            && self
                .property_type
                .is_none_or(|ty| property.property_type == ty)
            && self
                .price_range
                .is_none_or(|range| range.contains(property.price))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_range_bounds_are_half_open() {
        assert!(PriceRange::UpTo20M.contains(0));
        assert!(PriceRange::UpTo20M.contains(19_999_999));
        assert!(!PriceRange::UpTo20M.contains(20_000_000));
        assert!(PriceRange::From20MTo30M.contains(20_000_000));
        assert!(PriceRange::From30MTo50M.contains(45_000_000));
        assert!(!PriceRange::From30MTo50M.contains(50_000_000));
        assert!(PriceRange::Above50M.contains(50_000_000));
        assert!(PriceRange::Above50M.contains(u64::MAX));
    }

    #[test]
    fn test_price_range_parse() {
        assert_eq!("20-30m".parse::<PriceRange>().unwrap(), PriceRange::From20MTo30M);
        assert_eq!("50M+".parse::<PriceRange>().unwrap(), PriceRange::Above50M);
        assert!("cheap".parse::<PriceRange>().is_err());
        for range in PriceRange::ALL {
            assert_eq!(range.to_string().parse::<PriceRange>().unwrap(), range);
        }
    }

    #[test]
    fn test_filter_state_is_canonical() {
        let filter = PropertyFilter::new().with_state("Lagos State").unwrap();
        assert_eq!(filter.state, Some("Lagos"));
        assert!(PropertyFilter::new().with_state("Atlantis").is_err());
    }

    #[test]
    fn test_clear_resets_filter() {
        let mut filter = PropertyFilter::new()
            .with_property_type(PropertyType::Duplex)
            .with_price_range(PriceRange::Above50M);
        assert!(!filter.is_empty());
        filter.clear();
        assert!(filter.is_empty());
    }
}
