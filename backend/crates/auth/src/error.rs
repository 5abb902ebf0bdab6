//! Auth Error Types
//!
//! This module provides session-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::http::HttpError;
use platform::password::PasswordPolicyError;
use platform::storage::StorageError;
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
///
/// The `Display` text of each variant is what ends up in
/// `SessionState::error`, so it is written for the person at the keyboard.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Login rejected by the API
    #[error("{0}")]
    Authentication(String),

    /// Registration rejected by the API
    #[error("{0}")]
    Registration(String),

    /// Profile update rejected by the API
    #[error("{0}")]
    ProfileUpdate(String),

    /// Profile fetch failed for a reason other than an expired token
    #[error("{0}")]
    ProfileFetch(String),

    /// Token rejected by the API (401); the session has been cleared
    #[error("Session expired. Please login again.")]
    SessionExpired,

    /// Operation needs a token but none is held
    #[error("No active session")]
    NoActiveSession,

    /// 2xx auth response without a token
    #[error("Server did not issue a session token")]
    MissingToken,

    /// Input rejected before any request was sent
    #[error("{0}")]
    InvalidInput(String),

    /// Request could not be completed
    #[error("Network error: {0}")]
    Network(String),

    /// 2xx response whose body does not have the expected shape
    #[error("Unexpected response from server: {0}")]
    InvalidResponse(String),

    /// Persisted session could not be read or written
    #[error("Session storage error: {0}")]
    Storage(#[from] StorageError),
}

impl AuthError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::Authentication(_)
            | AuthError::SessionExpired
            | AuthError::NoActiveSession => ErrorKind::Unauthorized,
            AuthError::Registration(_) | AuthError::ProfileUpdate(_) => {
                ErrorKind::UnprocessableEntity
            }
            AuthError::InvalidInput(_) => ErrorKind::BadRequest,
            AuthError::ProfileFetch(_)
            | AuthError::MissingToken
            | AuthError::InvalidResponse(_) => ErrorKind::BadGateway,
            AuthError::Network(_) => ErrorKind::ServiceUnavailable,
            AuthError::Storage(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        let err = AppError::new(self.kind(), self.to_string());
        match self {
            AuthError::SessionExpired | AuthError::NoActiveSession => {
                err.with_action("Log in again")
            }
            AuthError::Network(_) => err.with_action("Check your connection and try again"),
            AuthError::Storage(_) => err.with_action("Check the portal data directory"),
            _ => err,
        }
    }

    /// Log the error with appropriate level
    pub(crate) fn log(&self) {
        match self {
            AuthError::Storage(e) => {
                tracing::error!(error = %e, "Session storage error");
            }
            AuthError::InvalidResponse(msg) => {
                tracing::error!(message = %msg, "Unexpected API response");
            }
            AuthError::MissingToken => {
                tracing::error!("API response carried no session token");
            }
            AuthError::Network(msg) => {
                tracing::warn!(message = %msg, "Housing API unreachable");
            }
            AuthError::SessionExpired => {
                tracing::warn!("Session token rejected, session cleared");
            }
            AuthError::Authentication(_) | AuthError::Registration(_) => {
                tracing::info!(error = %self, "Credentials rejected");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        err.to_app_error()
    }
}

impl From<HttpError> for AuthError {
    fn from(err: HttpError) -> Self {
        match err {
            HttpError::InvalidBaseUrl(msg) => AuthError::InvalidInput(msg),
            HttpError::Transport(e) => AuthError::Network(e.to_string()),
            HttpError::Decode { status, source } => {
                AuthError::InvalidResponse(format!("{status}: {source}"))
            }
        }
    }
}

impl From<PasswordPolicyError> for AuthError {
    fn from(err: PasswordPolicyError) -> Self {
        AuthError::InvalidInput(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_user_facing() {
        assert_eq!(
            AuthError::Authentication("Invalid credentials".into()).to_string(),
            "Invalid credentials"
        );
        assert_eq!(
            AuthError::SessionExpired.to_string(),
            "Session expired. Please login again."
        );
        assert_eq!(AuthError::NoActiveSession.to_string(), "No active session");
    }

    #[test]
    fn test_kind_mapping() {
        assert_eq!(
            AuthError::Authentication("x".into()).kind(),
            ErrorKind::Unauthorized
        );
        assert_eq!(AuthError::SessionExpired.kind(), ErrorKind::Unauthorized);
        assert_eq!(AuthError::MissingToken.kind(), ErrorKind::BadGateway);
        assert_eq!(
            AuthError::Network("down".into()).kind(),
            ErrorKind::ServiceUnavailable
        );
    }

    #[test]
    fn test_to_app_error_carries_action() {
        let app = AuthError::SessionExpired.to_app_error();
        assert_eq!(app.kind(), ErrorKind::Unauthorized);
        assert_eq!(app.action(), Some("Log in again"));

        let app = AuthError::Registration("Email taken".into()).to_app_error();
        assert_eq!(app.message(), "Email taken");
        assert_eq!(app.action(), None);
    }

    #[test]
    fn test_password_policy_is_invalid_input() {
        let err: AuthError = PasswordPolicyError::EmptyOrWhitespace.into();
        assert!(matches!(err, AuthError::InvalidInput(_)));
    }
}
