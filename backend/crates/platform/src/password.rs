//! Clear Text Password
//!
//! Passwords only pass through the client on their way to the housing API.
//! They are never stored; the wrapper here makes sure the bytes are wiped
//! from memory as soon as the request body has been built.
//!
//! ## Security Features
//! - Zeroization on drop
//! - No `Clone`, redacted `Debug`
//! - Serializes as a plain JSON string for the request body only

use std::fmt;

use serde::{Serialize, Serializer};
use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop};

// ============================================================================
// Constants
// ============================================================================

/// Minimum length enforced when choosing a password at registration
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Maximum accepted password length
pub const MAX_PASSWORD_LENGTH: usize = 128;

// ============================================================================
// Error Types
// ============================================================================

/// Password policy violation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    /// Password is too short
    #[error("Password must be at least {min} characters (got {actual})")]
    TooShort { min: usize, actual: usize },

    /// Password is too long
    #[error("Password must be at most {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },

    /// Password contains only whitespace
    #[error("Password cannot be empty or contain only whitespace")]
    EmptyOrWhitespace,

    /// Password contains invalid characters (control characters)
    #[error("Password contains invalid control characters")]
    InvalidCharacter,
}

// ============================================================================
// Clear Text Password (Zeroized on drop)
// ============================================================================

/// Clear text password with automatic memory zeroization
///
/// ## Examples
/// ```rust
/// use platform::password::ClearTextPassword;
///
/// let password = ClearTextPassword::new("hunter2".to_string()).unwrap();
/// assert_eq!(format!("{password:?}"), "ClearTextPassword(\"[REDACTED]\")");
/// ```
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    /// Wrap a password typed at sign-in.
    ///
    /// Only rejects input that can never be a valid password; length rules
    /// belong to the server for existing accounts.
    pub fn new(raw: String) -> Result<Self, PasswordPolicyError> {
        let password = Self(raw);
        password.check_common()?;
        Ok(password)
    }

    /// Wrap a password chosen at registration (adds the minimum length rule)
    pub fn for_registration(raw: String) -> Result<Self, PasswordPolicyError> {
        let password = Self::new(raw)?;
        let char_count = password.0.chars().count();
        if char_count < MIN_PASSWORD_LENGTH {
            return Err(PasswordPolicyError::TooShort {
                min: MIN_PASSWORD_LENGTH,
                actual: char_count,
            });
        }
        Ok(password)
    }

    fn check_common(&self) -> Result<(), PasswordPolicyError> {
        if self.0.trim().is_empty() {
            return Err(PasswordPolicyError::EmptyOrWhitespace);
        }

        let char_count = self.0.chars().count();
        if char_count > MAX_PASSWORD_LENGTH {
            return Err(PasswordPolicyError::TooLong {
                max: MAX_PASSWORD_LENGTH,
                actual: char_count,
            });
        }

        // Control characters other than tab never come from a form field
        if self.0.chars().any(|ch| ch.is_control() && ch != '\t') {
            return Err(PasswordPolicyError::InvalidCharacter);
        }

        Ok(())
    }

    /// Borrow the password for building a request body
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

impl Serialize for ClearTextPassword {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_in_password_accepts_short() {
        assert!(ClearTextPassword::new("abc".to_string()).is_ok());
    }

    #[test]
    fn test_rejects_whitespace_only() {
        assert_eq!(
            ClearTextPassword::new("   ".to_string()).unwrap_err(),
            PasswordPolicyError::EmptyOrWhitespace
        );
    }

    #[test]
    fn test_rejects_control_characters() {
        assert_eq!(
            ClearTextPassword::new("pass\u{0000}word".to_string()).unwrap_err(),
            PasswordPolicyError::InvalidCharacter
        );
    }

    #[test]
    fn test_registration_min_length() {
        assert_eq!(
            ClearTextPassword::for_registration("short".to_string()).unwrap_err(),
            PasswordPolicyError::TooShort { min: 8, actual: 5 }
        );
        assert!(ClearTextPassword::for_registration("long enough".to_string()).is_ok());
    }

    #[test]
    fn test_too_long() {
        let raw = "a".repeat(MAX_PASSWORD_LENGTH + 1);
        assert!(matches!(
            ClearTextPassword::new(raw),
            Err(PasswordPolicyError::TooLong { .. })
        ));
    }

    #[test]
    fn test_serializes_as_string() {
        let password = ClearTextPassword::new("s3cret!".to_string()).unwrap();
        assert_eq!(serde_json::to_string(&password).unwrap(), "\"s3cret!\"");
    }

    #[test]
    fn test_debug_is_redacted() {
        let password = ClearTextPassword::new("s3cret!".to_string()).unwrap();
        assert!(!format!("{password:?}").contains("s3cret"));
    }
}
