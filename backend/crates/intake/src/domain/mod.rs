//! Domain Layer
//!
//! Form model, error map, and the validation rules.

pub mod form;
pub mod rules;

pub use form::{ApplicationForm, FormErrors, FormField};
pub use rules::{validate, validate_field, validate_on};
