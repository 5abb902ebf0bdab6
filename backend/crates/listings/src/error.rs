//! Listings Error Types
//!
//! Search input errors that integrate with the unified
//! `kernel::error::AppError` system.

use kernel::error::{app_error::AppError, kind::ErrorKind};
use kernel::geo::UnknownState;
use thiserror::Error;

/// Listings-specific result type alias
pub type ListingsResult<T> = Result<T, ListingsError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListingsError {
    #[error(transparent)]
    UnknownState(#[from] UnknownState),

    #[error("Unknown property type: {0}")]
    UnknownPropertyType(String),

    #[error("Unknown price range: {0}")]
    UnknownPriceRange(String),
}

impl ListingsError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::BadRequest
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        let action = match self {
            ListingsError::UnknownState(_) => "Use one of the 36 states or FCT",
            ListingsError::UnknownPropertyType(_) => {
                "Use 2 Bedroom, 3 Bedroom, 4 Bedroom, Duplex or Bungalow"
            }
            ListingsError::UnknownPriceRange(_) => "Use 0-20m, 20-30m, 30-50m or 50m+",
        };
        AppError::bad_request(self.to_string()).with_action(action)
    }
}

impl From<ListingsError> for AppError {
    fn from(err: ListingsError) -> Self {
        err.to_app_error()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_state_is_bad_request() {
        let err = ListingsError::from(UnknownState("Atlantis".into()));
        assert_eq!(err.kind(), ErrorKind::BadRequest);
        assert_eq!(err.to_string(), "Unknown state: Atlantis");

        let app: AppError = err.into();
        assert_eq!(app.kind(), ErrorKind::BadRequest);
        assert!(app.action().is_some());
    }
}
