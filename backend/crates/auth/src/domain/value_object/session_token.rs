//! Session Token Value Object
//!
//! Opaque bearer credential issued by the housing API.

use std::fmt;

/// Non-empty bearer token; `Debug` never prints the value
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    /// Wrap a token; blank input yields `None`
    pub fn new(token: impl Into<String>) -> Option<Self> {
        let token = token.into().trim().to_string();
        if token.is_empty() {
            None
        } else {
            Some(Self(token))
        }
    }

    /// Placeholder for an API that issued no token (not a credential)
    pub fn synthesize() -> Self {
        Self(platform::crypto::random_token())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SessionToken").field(&"[REDACTED]").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_token_is_rejected() {
        assert!(SessionToken::new("").is_none());
        assert!(SessionToken::new("   ").is_none());
    }

    #[test]
    fn test_token_is_trimmed() {
        assert_eq!(SessionToken::new(" abc\n").unwrap().as_str(), "abc");
    }

    #[test]
    fn test_debug_is_redacted() {
        let token = SessionToken::new("secret-value").unwrap();
        let debug = format!("{token:?}");
        assert!(!debug.contains("secret-value"));
        assert!(debug.contains("REDACTED"));
    }

    #[test]
    fn test_synthesized_tokens_differ() {
        let a = SessionToken::synthesize();
        let b = SessionToken::synthesize();
        assert!(!a.as_str().is_empty());
        assert_ne!(a, b);
    }
}
