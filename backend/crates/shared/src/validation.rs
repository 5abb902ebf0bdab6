//! Cross-cutting validation rules
//!
//! Field shapes that both the session layer and the application form rely
//! on. Checks here answer "does this look right", never "is this real".

use std::sync::LazyLock;

use regex::Regex;

/// `local@domain.tld`, case-insensitive
static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$").expect("email pattern is valid")
});

/// Nigerian mobile: optional +234 / 234 / 0 prefix, then 7/8/9, 0/1, 8 digits
static NIGERIAN_MOBILE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\+234|234|0)?[789][01][0-9]{8}$").expect("mobile pattern is valid")
});

/// Default international dialling prefix for Nigeria
pub const NIGERIA_COUNTRY_CODE: &str = "+234";

pub fn is_valid_email(value: &str) -> bool {
    EMAIL.is_match(value)
}

/// Remove every whitespace character (users type "0803 123 4567")
pub fn strip_whitespace(value: &str) -> String {
    value.chars().filter(|c| !c.is_whitespace()).collect()
}

pub fn is_nigerian_mobile(value: &str) -> bool {
    NIGERIAN_MOBILE.is_match(&strip_whitespace(value))
}

/// `true` when `value` is exactly `len` ASCII digits
pub fn is_exact_digits(value: &str, len: usize) -> bool {
    value.len() == len && value.bytes().all(|b| b.is_ascii_digit())
}

/// Rewrite a phone number into international form with `country_code`.
///
/// Whitespace is removed and any existing `+CC`, `CC` or trunk `0` prefix is
/// replaced, so "0803 123 4567", "2348031234567" and "8031234567" all
/// become "+2348031234567". The subscriber part is not validated here.
pub fn international_phone(value: &str, country_code: &str) -> String {
    let compact = strip_whitespace(value);
    let digits = country_code.trim_start_matches('+');

    let subscriber = compact
        .strip_prefix(country_code)
        .or_else(|| compact.strip_prefix(digits))
        .or_else(|| compact.strip_prefix('0'))
        .unwrap_or(&compact);

    format!("+{digits}{subscriber}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("Teacher.One+nhf@School.EDU.ng"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a@b.c"));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email("a b@c.com"));
    }

    #[test]
    fn test_nigerian_mobile() {
        assert!(is_nigerian_mobile("08031234567"));
        assert!(is_nigerian_mobile("0803 123 4567"));
        assert!(is_nigerian_mobile("+2349011234567"));
        assert!(is_nigerian_mobile("2347061234567"));
        assert!(is_nigerian_mobile("8101234567"));
        assert!(!is_nigerian_mobile("12345"));
        assert!(!is_nigerian_mobile("08231234567"));
        assert!(!is_nigerian_mobile("0803123456"));
    }

    #[test]
    fn test_nigerian_mobile_ascii_digits_only() {
        assert!(!is_nigerian_mobile("0803١٢٣٤٥٦٧"));
        assert!(!is_nigerian_mobile("0803१२३४५६७"));
    }

    #[test]
    fn test_exact_digits() {
        assert!(is_exact_digits("12345678901", 11));
        assert!(!is_exact_digits("123", 11));
        assert!(!is_exact_digits("1234567890a", 11));
        assert!(is_exact_digits("0123456789", 10));
    }

    #[test]
    fn test_international_phone() {
        assert_eq!(international_phone("08031234567", "+234"), "+2348031234567");
        assert_eq!(international_phone("8031234567", "+234"), "+2348031234567");
        assert_eq!(international_phone("234 803 123 4567", "+234"), "+2348031234567");
        assert_eq!(international_phone("+2348031234567", "+234"), "+2348031234567");
        assert_eq!(international_phone("8031234567", "234"), "+2348031234567");
    }
}
