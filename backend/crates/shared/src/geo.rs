//! Nigerian States
//!
//! Reference list shared by the application form (state of origin) and the
//! property catalog (property location). Forms in the portal use both the
//! bare name ("Lagos") and the suffixed name ("Lagos State"); both resolve
//! to the same canonical entry.

use thiserror::Error;

/// The 36 states plus the Federal Capital Territory, canonical spelling.
pub const NIGERIAN_STATES: [&str; 37] = [
    "Abia",
    "Adamawa",
    "Akwa Ibom",
    "Anambra",
    "Bauchi",
    "Bayelsa",
    "Benue",
    "Borno",
    "Cross River",
    "Delta",
    "Ebonyi",
    "Edo",
    "Ekiti",
    "Enugu",
    "FCT",
    "Gombe",
    "Imo",
    "Jigawa",
    "Kaduna",
    "Kano",
    "Katsina",
    "Kebbi",
    "Kogi",
    "Kwara",
    "Lagos",
    "Nasarawa",
    "Niger",
    "Ogun",
    "Ondo",
    "Osun",
    "Oyo",
    "Plateau",
    "Rivers",
    "Sokoto",
    "Taraba",
    "Yobe",
    "Zamfara",
];

const STATE_SUFFIX: &str = " state";

/// Returned when a name does not match any state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown state: {0}")]
pub struct UnknownState(pub String);

/// Resolve a user-supplied state name to its canonical spelling.
///
/// Matching ignores case, surrounding whitespace and a trailing "State".
/// "Abuja" and "Federal Capital Territory" resolve to "FCT".
pub fn canonical_state(input: &str) -> Result<&'static str, UnknownState> {
    let lowered = input.trim().to_lowercase();
    let name = lowered
        .strip_suffix(STATE_SUFFIX)
        .unwrap_or(&lowered)
        .trim_end();

    if matches!(name, "abuja" | "federal capital territory") {
        return Ok("FCT");
    }

    NIGERIAN_STATES
        .iter()
        .copied()
        .find(|state| state.to_lowercase() == name)
        .ok_or_else(|| UnknownState(input.trim().to_string()))
}

/// Display label used in listings ("Lagos State", but plain "FCT").
pub fn state_label(canonical: &str) -> String {
    if canonical == "FCT" {
        canonical.to_string()
    } else {
        format!("{canonical} State")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_state_variants() {
        assert_eq!(canonical_state("Lagos"), Ok("Lagos"));
        assert_eq!(canonical_state("lagos state"), Ok("Lagos"));
        assert_eq!(canonical_state("  Akwa Ibom State "), Ok("Akwa Ibom"));
        assert_eq!(canonical_state("fct"), Ok("FCT"));
        assert_eq!(canonical_state("Abuja"), Ok("FCT"));
    }

    #[test]
    fn test_canonical_state_unknown() {
        assert_eq!(
            canonical_state("Atlantis"),
            Err(UnknownState("Atlantis".to_string()))
        );
        assert!(canonical_state("").is_err());
    }

    #[test]
    fn test_state_label() {
        assert_eq!(state_label("Lagos"), "Lagos State");
        assert_eq!(state_label("FCT"), "FCT");
    }
}
