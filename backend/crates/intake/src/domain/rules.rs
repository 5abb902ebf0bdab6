//! Form Validation Rules
//!
//! Pure and synchronous. Each field gets at most one message: presence is
//! checked first, then format.

use std::num::IntErrorKind;
use std::sync::LazyLock;

use chrono::{Local, NaiveDate};
use kernel::geo::canonical_state;
use kernel::validation::{is_exact_digits, is_nigerian_mobile, is_valid_email};
use regex::Regex;

use crate::domain::form::{ApplicationForm, FormErrors, FormField, normalize};

/// Lowest accepted monthly income, in naira
pub const MIN_MONTHLY_INCOME: u64 = 30_000;

pub const BVN_LEN: usize = 11;
pub const NIN_LEN: usize = 11;
pub const ACCOUNT_NUMBER_LEN: usize = 10;

/// Fields that must be filled in
pub const REQUIRED_FIELDS: [FormField; 20] = [
    FormField::FirstName,
    FormField::LastName,
    FormField::Email,
    FormField::DateOfBirth,
    FormField::Phone,
    FormField::StateOfOrigin,
    FormField::PropertyType,
    FormField::PaymentMode,
    FormField::Bvn,
    FormField::Nin,
    FormField::MonthlyIncome,
    FormField::EmploymentStatus,
    FormField::EmployerName,
    FormField::EmployerAddress,
    FormField::BankName,
    FormField::AccountNumber,
    FormField::NextOfKinName,
    FormField::NextOfKinRelation,
    FormField::NextOfKinPhone,
    FormField::NextOfKinAddress,
];

/// Naira amount: plain or comma-grouped digits, optional decimals
static AMOUNT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]+|[0-9]{1,3}(,[0-9]{3})+)(\.[0-9]+)?$").expect("amount pattern is valid")
});

/// Validate the whole form against today's date
pub fn validate(form: &ApplicationForm) -> FormErrors {
    validate_on(form, Local::now().date_naive())
}

/// Validate the whole form; `today` bounds the date of birth
pub fn validate_on(form: &ApplicationForm, today: NaiveDate) -> FormErrors {
    let mut errors = FormErrors::new();

    for field in REQUIRED_FIELDS {
        let value = form.normalized(field).unwrap_or_default();
        if is_missing(form, field, &value) {
            errors.add(field, format!("{} is required", field.label()));
            continue;
        }
        if let Some(message) = check_format(field, &value, today) {
            errors.add(field, message);
        }
    }

    if !form.terms_accepted {
        errors.add(FormField::Terms, "You must accept the terms and conditions");
    }
    if !form.privacy_consent {
        errors.add(FormField::Privacy, "You must consent to data processing");
    }

    if !errors.is_valid() {
        tracing::debug!(invalid_fields = errors.len(), "Application form rejected");
    }
    errors
}

/// Validate a single field, e.g. while the teacher is typing
pub fn validate_field(form: &ApplicationForm, field: FormField) -> Option<String> {
    match field {
        FormField::Terms => (!form.terms_accepted)
            .then(|| "You must accept the terms and conditions".to_string()),
        FormField::Privacy => {
            (!form.privacy_consent).then(|| "You must consent to data processing".to_string())
        }
        _ => {
            let value = form.normalized(field).unwrap_or_default();
            if is_missing(form, field, &value) {
                Some(format!("{} is required", field.label()))
            } else {
                check_format(field, &value, Local::now().date_naive())
            }
        }
    }
}

/// The property picker counts as one answer: a type without a state is
/// still missing
fn is_missing(form: &ApplicationForm, field: FormField, value: &str) -> bool {
    value.is_empty()
        || (field == FormField::PropertyType && normalize(&form.property_state).is_empty())
}

/// Format rule of a non-empty, normalized value
fn check_format(field: FormField, value: &str, today: NaiveDate) -> Option<String> {
    let message = match field {
        FormField::Email if !is_valid_email(value) => "Invalid email address",
        FormField::Phone if !is_nigerian_mobile(value) => {
            "Please enter a valid Nigerian phone number"
        }
        FormField::Bvn if !is_exact_digits(value, BVN_LEN) => "BVN must be exactly 11 digits",
        FormField::Nin if !is_exact_digits(value, NIN_LEN) => "NIN must be exactly 11 digits",
        FormField::AccountNumber if !is_exact_digits(value, ACCOUNT_NUMBER_LEN) => {
            "Account number must be exactly 10 digits"
        }
        FormField::MonthlyIncome => return check_income(value),
        FormField::DateOfBirth if !is_past_date(value, today) => {
            "Date of birth must be a valid date"
        }
        FormField::StateOfOrigin if canonical_state(value).is_err() => {
            "Please select a valid state"
        }
        _ => return None,
    };
    Some(message.to_string())
}

fn check_income(value: &str) -> Option<String> {
    match parse_naira(value) {
        None => Some("Monthly income must be a number".to_string()),
        Some(amount) if amount < MIN_MONTHLY_INCOME => {
            Some("Minimum monthly income is ₦30,000".to_string())
        }
        Some(_) => None,
    }
}

/// Whole naira in an amount such as "₦45,000.50"; `None` if not a number
pub fn parse_naira(value: &str) -> Option<u64> {
    let amount = value.trim_start_matches('₦').trim();
    if !AMOUNT.is_match(amount) {
        return None;
    }
    let whole: String = amount
        .split('.')
        .next()
        .unwrap_or_default()
        .chars()
        .filter(char::is_ascii_digit)
        .collect();
    if whole.is_empty() {
        return None;
    }
    // Overflow means "more than enough"
    match whole.parse::<u64>() {
        Ok(amount) => Some(amount),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Some(u64::MAX),
        Err(_) => None,
    }
}

fn is_past_date(value: &str, today: NaiveDate) -> bool {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok_and(|date| date <= today)
}
