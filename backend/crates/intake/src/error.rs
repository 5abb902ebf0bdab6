//! Intake Error Types
//!
//! Submission errors that integrate with the unified
//! `kernel::error::AppError` system.

use auth::AuthError;
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

use crate::domain::form::FormErrors;

/// Intake-specific result type alias
pub type SubmitResult<T> = Result<T, SubmitError>;

/// Why an application was not submitted
#[derive(Debug, Error)]
pub enum SubmitError {
    /// Local validation failed; nothing was sent
    #[error("Please correct the highlighted fields")]
    Invalid(FormErrors),

    /// The session rejected or failed the update
    #[error(transparent)]
    Session(#[from] AuthError),
}

impl SubmitError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            SubmitError::Invalid(_) => ErrorKind::UnprocessableEntity,
            SubmitError::Session(e) => e.kind(),
        }
    }

    /// Field errors, when validation was the cause
    pub fn field_errors(&self) -> Option<&FormErrors> {
        match self {
            SubmitError::Invalid(errors) => Some(errors),
            SubmitError::Session(_) => None,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        match self {
            SubmitError::Invalid(errors) => AppError::unprocessable(self.to_string())
                .with_action(errors.to_string()),
            SubmitError::Session(e) => e.to_app_error(),
        }
    }
}

impl From<SubmitError> for AppError {
    fn from(err: SubmitError) -> Self {
        err.to_app_error()
    }
}
