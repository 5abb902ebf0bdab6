//! Application Layer
//!
//! Submit flow tying the form to the session.

pub mod submit;

// Re-exports
pub use submit::{ApplicationStatus, Submission, application_status, submit_application};
