//! Application Form
//!
//! The housing application as the teacher fills it in, the field keys the
//! form reports errors under, and the error map itself.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

/// Housing application form
///
/// Serialized with the API's field names; the camelCase keys of the form
/// are accepted as aliases when reading a saved form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationForm {
    // Location preferences
    #[serde(alias = "propertyState")]
    pub property_state: String,
    #[serde(alias = "propertyType")]
    pub property_type: String,

    // Payment
    #[serde(alias = "paymentMode")]
    pub payment_mode: String,

    // Personal
    #[serde(alias = "firstName")]
    pub firstname: String,
    #[serde(alias = "lastName")]
    pub lastname: String,
    pub email: String,
    #[serde(alias = "dateOfBirth")]
    pub date_of_birth: String,
    pub phone: String,
    #[serde(alias = "stateOfOrigin")]
    pub state_of_origin: String,

    // Financial
    pub bvn: String,
    pub nin: String,
    #[serde(alias = "monthlyIncome")]
    pub monthly_income: String,
    #[serde(alias = "employmentStatus")]
    pub employment_status: String,
    #[serde(alias = "employerName")]
    pub employer_name: String,
    #[serde(alias = "employerAddress")]
    pub employer_address: String,

    // Bank
    #[serde(alias = "bankName")]
    pub bank_name: String,
    #[serde(alias = "accountNumber")]
    pub account_number: String,

    // Next of kin
    #[serde(alias = "nextOfKinName")]
    pub next_of_kin: String,
    #[serde(alias = "nextOfKinRelation")]
    pub relationship_with_next_of_kin: String,
    #[serde(alias = "nextOfKinPhone")]
    pub next_of_kin_phone: String,
    #[serde(alias = "nextOfKinAddress")]
    pub next_of_kin_address: String,

    // Consent (never sent to the API)
    #[serde(alias = "terms", skip_serializing)]
    pub terms_accepted: bool,
    #[serde(alias = "privacy", skip_serializing)]
    pub privacy_consent: bool,
}

impl ApplicationForm {
    /// Raw text of a field; `None` for the consent checkboxes
    pub fn text(&self, field: FormField) -> Option<&str> {
        let value = match field {
            FormField::FirstName => &self.firstname,
            FormField::LastName => &self.lastname,
            FormField::Email => &self.email,
            FormField::DateOfBirth => &self.date_of_birth,
            FormField::Phone => &self.phone,
            FormField::StateOfOrigin => &self.state_of_origin,
            FormField::PropertyType => &self.property_type,
            FormField::PaymentMode => &self.payment_mode,
            FormField::Bvn => &self.bvn,
            FormField::Nin => &self.nin,
            FormField::MonthlyIncome => &self.monthly_income,
            FormField::EmploymentStatus => &self.employment_status,
            FormField::EmployerName => &self.employer_name,
            FormField::EmployerAddress => &self.employer_address,
            FormField::BankName => &self.bank_name,
            FormField::AccountNumber => &self.account_number,
            FormField::NextOfKinName => &self.next_of_kin,
            FormField::NextOfKinRelation => &self.relationship_with_next_of_kin,
            FormField::NextOfKinPhone => &self.next_of_kin_phone,
            FormField::NextOfKinAddress => &self.next_of_kin_address,
            FormField::Terms | FormField::Privacy => return None,
        };
        Some(value)
    }

    /// Field text after NFKC normalization and trimming
    pub fn normalized(&self, field: FormField) -> Option<String> {
        self.text(field).map(normalize)
    }
}

/// NFKC-normalize and trim a field value
pub fn normalize(value: &str) -> String {
    value.nfkc().collect::<String>().trim().to_string()
}

/// Keys the form reports errors under, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    FirstName,
    LastName,
    Email,
    DateOfBirth,
    Phone,
    StateOfOrigin,
    PropertyType,
    PaymentMode,
    Bvn,
    Nin,
    MonthlyIncome,
    EmploymentStatus,
    EmployerName,
    EmployerAddress,
    BankName,
    AccountNumber,
    NextOfKinName,
    NextOfKinRelation,
    NextOfKinPhone,
    NextOfKinAddress,
    Terms,
    Privacy,
}

impl FormField {
    pub const ALL: [FormField; 22] = [
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
        FormField::Terms,
        FormField::Privacy,
    ];

    /// Key used by the form (camelCase)
    pub fn key(self) -> &'static str {
        match self {
            FormField::FirstName => "firstName",
            FormField::LastName => "lastName",
            FormField::Email => "email",
            FormField::DateOfBirth => "dateOfBirth",
            FormField::Phone => "phone",
            FormField::StateOfOrigin => "stateOfOrigin",
            FormField::PropertyType => "propertyType",
            FormField::PaymentMode => "paymentMode",
            FormField::Bvn => "bvn",
            FormField::Nin => "nin",
            FormField::MonthlyIncome => "monthlyIncome",
            FormField::EmploymentStatus => "employmentStatus",
            FormField::EmployerName => "employerName",
            FormField::EmployerAddress => "employerAddress",
            FormField::BankName => "bankName",
            FormField::AccountNumber => "accountNumber",
            FormField::NextOfKinName => "nextOfKinName",
            FormField::NextOfKinRelation => "nextOfKinRelation",
            FormField::NextOfKinPhone => "nextOfKinPhone",
            FormField::NextOfKinAddress => "nextOfKinAddress",
            FormField::Terms => "terms",
            FormField::Privacy => "privacy",
        }
    }

    /// Human label used in "<Label> is required"
    pub fn label(self) -> &'static str {
        match self {
            FormField::FirstName => "First name",
            FormField::LastName => "Last name",
            FormField::Email => "Email",
            FormField::DateOfBirth => "Date of birth",
            FormField::Phone => "Phone number",
            FormField::StateOfOrigin => "State of origin",
            FormField::PropertyType => "Property type",
            FormField::PaymentMode => "Payment mode",
            FormField::Bvn => "BVN",
            FormField::Nin => "NIN",
            FormField::MonthlyIncome => "Monthly income",
            FormField::EmploymentStatus => "Employment status",
            FormField::EmployerName => "Employer name",
            FormField::EmployerAddress => "Employer address",
            FormField::BankName => "Bank name",
            FormField::AccountNumber => "Account number",
            FormField::NextOfKinName => "Next of kin name",
            FormField::NextOfKinRelation => "Relationship",
            FormField::NextOfKinPhone => "Next of kin phone",
            FormField::NextOfKinAddress => "Next of kin address",
            FormField::Terms => "Terms",
            FormField::Privacy => "Privacy consent",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Field → first failing message; the form is valid iff this is empty
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<FormField, String>);

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `message` unless the field already has one
    pub fn add(&mut self, field: FormField, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: FormField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: FormField) -> bool {
        self.0.contains_key(&field)
    }

    /// Drop the message of a field the teacher has just edited
    pub fn clear_field(&mut self, field: FormField) {
        self.0.remove(&field);
    }

    pub fn is_valid(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries in display order
    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> {
        self.0.iter().map(|(field, msg)| (*field, msg.as_str()))
    }
}

impl Serialize for FormErrors {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (field, message) in &self.0 {
            map.serialize_entry(field.key(), message)?;
        }
        map.end()
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_form_reads_both_key_styles() {
        let form: ApplicationForm = serde_json::from_value(json!({
            "firstName": "Ada",
            "lastname": "Obi",
            "accountNumber": "0123456789",
            "terms": true
        }))
        .unwrap();
        assert_eq!(form.firstname, "Ada");
        assert_eq!(form.lastname, "Obi");
        assert_eq!(form.account_number, "0123456789");
        assert!(form.terms_accepted);
        assert!(!form.privacy_consent);
    }

    #[test]
    fn test_consent_is_not_serialized() {
        let form = ApplicationForm {
            terms_accepted: true,
            ..Default::default()
        };
        let value = serde_json::to_value(&form).unwrap();
        assert!(value.get("terms_accepted").is_none());
        assert_eq!(value["next_of_kin"], "");
    }

    #[test]
    fn test_normalize_nfkc_and_trim() {
        // full-width digits and a non-breaking space
        assert_eq!(normalize("\u{00A0}１２３ "), "123");
    }

    #[test]
    fn test_field_keys_are_unique_camel_case() {
        let keys: std::collections::BTreeSet<_> =
            FormField::ALL.iter().map(|field| field.key()).collect();
        assert_eq!(keys.len(), FormField::ALL.len());
        assert!(keys.iter().all(|key| !key.contains('_')));
    }

    #[test]
    fn test_form_errors_first_message_wins() {
        let mut errors = FormErrors::new();
        errors.add(FormField::Bvn, "BVN is required");
        errors.add(FormField::Bvn, "BVN must be exactly 11 digits");
        assert_eq!(errors.get(FormField::Bvn), Some("BVN is required"));
        assert_eq!(errors.len(), 1);
        assert!(!errors.is_valid());

        errors.clear_field(FormField::Bvn);
        assert!(errors.is_valid());
    }

    #[test]
    fn test_form_errors_serialize_in_display_order() {
        let mut errors = FormErrors::new();
        errors.add(FormField::Privacy, "b");
        errors.add(FormField::FirstName, "a");
        assert_eq!(
            serde_json::to_string(&errors).unwrap(),
            r#"{"firstName":"a","privacy":"b"}"#
        );
        assert_eq!(errors.to_string(), "firstName: a; privacy: b");
    }
}
