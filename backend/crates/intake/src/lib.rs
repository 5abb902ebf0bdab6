//! Intake (Housing Application) Module
//!
//! Structure:
//! - `domain/` - Application form, field keys, error map, validation rules
//! - `application/` - Submit flow over the auth session
//!
//! ## Validation
//! - Values are NFKC-normalized and trimmed before any rule runs
//! - One message per field: presence first, then format
//! - The form is valid iff the error map is empty
//!
//! ## Submission
//! - An invalid form never reaches the network
//! - A valid form is sent as a profile update; the session merges and
//!   persists the answer

pub mod application;
pub mod domain;
pub mod error;

// Re-exports for convenience
pub use application::{
    ApplicationStatus, Submission, application_status, submit_application,
};
pub use domain::{ApplicationForm, FormErrors, FormField, validate, validate_field};
pub use error::{SubmitError, SubmitResult};

#[cfg(test)]
mod tests;
