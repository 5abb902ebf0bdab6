//! Property Entity

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ListingsError;

/// Housing unit offered under the scheme
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Property {
    pub id: u32,
    pub title: String,
    /// "Neighbourhood, State"
    pub location: String,
    /// Canonical state name
    pub state: &'static str,
    /// Full price in naira
    pub price: u64,
    /// Indicative monthly repayment in naira
    pub monthly_payment: u64,
    pub bedrooms: u8,
    pub bathrooms: u8,
    pub area_sqm: u32,
    pub property_type: PropertyType,
    pub status: PropertyStatus,
}

impl Property {
    pub fn is_available(&self) -> bool {
        self.status == PropertyStatus::Available
    }
}

/// Unit type as offered on the application form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PropertyType {
    #[serde(rename = "2 Bedroom")]
    TwoBedroom,
    #[serde(rename = "3 Bedroom")]
    ThreeBedroom,
    #[serde(rename = "4 Bedroom")]
    FourBedroom,
    Duplex,
    Bungalow,
}

impl PropertyType {
    pub const ALL: [PropertyType; 5] = [
        PropertyType::TwoBedroom,
        PropertyType::ThreeBedroom,
        PropertyType::FourBedroom,
        PropertyType::Duplex,
        PropertyType::Bungalow,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PropertyType::TwoBedroom => "2 Bedroom",
            PropertyType::ThreeBedroom => "3 Bedroom",
            PropertyType::FourBedroom => "4 Bedroom",
            PropertyType::Duplex => "Duplex",
            PropertyType::Bungalow => "Bungalow",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropertyType {
    type Err = ListingsError;

    /// Case-insensitive; "3 bedroom", "3-bedroom" and "3bed" all parse
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();
        match key.as_str() {
            "2bedroom" | "2bed" => Ok(PropertyType::TwoBedroom),
            "3bedroom" | "3bed" => Ok(PropertyType::ThreeBedroom),
            "4bedroom" | "4bed" => Ok(PropertyType::FourBedroom),
            "duplex" => Ok(PropertyType::Duplex),
            "bungalow" => Ok(PropertyType::Bungalow),
            _ => Err(ListingsError::UnknownPropertyType(s.trim().to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PropertyStatus {
    Available,
    #[serde(rename = "Coming Soon")]
    ComingSoon,
}

impl fmt::Display for PropertyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyStatus::Available => f.write_str("Available"),
            PropertyStatus::ComingSoon => f.write_str("Coming Soon"),
        }
    }
}

/// "₦25,500,000"
pub fn format_naira(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("₦{grouped}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_type_parse() {
        assert_eq!("3 Bedroom".parse::<PropertyType>().unwrap(), PropertyType::ThreeBedroom);
        assert_eq!("2-bedroom".parse::<PropertyType>().unwrap(), PropertyType::TwoBedroom);
        assert_eq!("DUPLEX".parse::<PropertyType>().unwrap(), PropertyType::Duplex);
        assert!(matches!(
            "castle".parse::<PropertyType>(),
            Err(ListingsError::UnknownPropertyType(_))
        ));
    }

    #[test]
    fn test_property_type_display_round_trip() {
        for ty in PropertyType::ALL {
            assert_eq!(ty.to_string().parse::<PropertyType>().unwrap(), ty);
        }
    }

    #[test]
    fn test_format_naira() {
        assert_eq!(format_naira(0), "₦0");
        assert_eq!(format_naira(999), "₦999");
        assert_eq!(format_naira(127_500), "₦127,500");
        assert_eq!(format_naira(25_500_000), "₦25,500,000");
    }
}
