//! Property Catalogue
//!
//! Listings currently offered under the scheme.

use std::sync::LazyLock;

use crate::domain::filter::PropertyFilter;
use crate::domain::property::{Property, PropertyStatus, PropertyType};

static CATALOG: LazyLock<Vec<Property>> = LazyLock::new(|| {
    vec![
        listing(
            1,
            "3 Bedroom Terrace House",
            "Life Camp",
            (25_500_000, 127_500),
            (3, 2, 120),
            PropertyType::ThreeBedroom,
            PropertyStatus::Available,
        ),
        listing(
            2,
            "2 Bedroom Apartment",
            "Karsana",
            (18_000_000, 90_000),
            (2, 2, 85),
            PropertyType::TwoBedroom,
            PropertyStatus::Available,
        ),
        listing(
            3,
            "4 Bedroom Duplex",
            "Gwarinpa",
            (45_000_000, 225_000),
            (4, 3, 200),
            PropertyType::FourBedroom,
            PropertyStatus::ComingSoon,
        ),
        listing(
            4,
            "3 Bedroom Bungalow",
            "Wuye",
            (32_000_000, 160_000),
            (3, 2, 150),
            PropertyType::ThreeBedroom,
            PropertyStatus::Available,
        ),
    ]
});

// All current listings are in the FCT
fn listing(
    id: u32,
    title: &str,
    area: &str,
    (price, monthly_payment): (u64, u64),
    (bedrooms, bathrooms, area_sqm): (u8, u8, u32),
    property_type: PropertyType,
    status: PropertyStatus,
) -> Property {
    Property {
        id,
        title: title.to_string(),
        location: format!("{area}, FCT"),
        state: "FCT",
        price,
        monthly_payment,
        bedrooms,
        bathrooms,
        area_sqm,
        property_type,
        status,
    }
}

/// Every listing, in catalogue order
pub fn catalog() -> &'static [Property] {
    &CATALOG
}

/// Look up a listing by id
pub fn find(id: u32) -> Option<&'static Property> {
    CATALOG.iter().find(|property| property.id == id)
}

/// Listings matching `filter`, in catalogue order
pub fn search(filter: &PropertyFilter) -> Vec<&'static Property> {
    CATALOG
        .iter()
        .filter(|property| filter.matches(property))
        .collect()
}
