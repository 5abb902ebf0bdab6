//! Locations offered per state

use kernel::geo::canonical_state;

use crate::error::ListingsResult;

/// Shown when a state has no locations yet
pub const LOCATIONS_PENDING: &str = "Location will be available soon";

const FCT_LOCATIONS: &[&str] = &["Life Camp", "Karsana", "Gwarinpa", "Wuye", "Maitama"];
const LAGOS_LOCATIONS: &[&str] = &["Victoria Island", "Ikoyi", "Lekki", "Ajah", "Ikeja"];

/// Neighbourhoods with housing in `state`; empty when none are open yet
pub fn locations_for_state(state: &str) -> ListingsResult<&'static [&'static str]> {
    Ok(match canonical_state(state)? {
        "FCT" => FCT_LOCATIONS,
        "Lagos" => LAGOS_LOCATIONS,
        _ => &[],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ListingsError;

    #[test]
    fn test_known_states() {
        assert_eq!(locations_for_state("abuja").unwrap()[0], "Life Camp");
        assert_eq!(locations_for_state("Lagos State").unwrap().len(), 5);
    }

    #[test]
    fn test_state_without_locations() {
        assert!(locations_for_state("Kano").unwrap().is_empty());
    }

    #[test]
    fn test_unknown_state() {
        assert!(matches!(
            locations_for_state("Narnia"),
            Err(ListingsError::UnknownState(_))
        ));
    }
}
