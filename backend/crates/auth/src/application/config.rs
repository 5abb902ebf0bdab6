//! Application Configuration
//!
//! Configuration for the session layer.

use std::time::Duration;

/// Production housing API
pub const DEFAULT_API_BASE_URL: &str = "https://hausing-api-production.up.railway.app/api";

/// Durable store key holding the profile JSON
pub const USER_STORAGE_KEY: &str = "teacher_data";

/// Volatile store key holding the session token
pub const SESSION_STORAGE_KEY: &str = "teacher_session";

/// What to do when a successful login / register response has no token
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MissingTokenPolicy {
    /// Fail with `AuthError::MissingToken`
    #[default]
    Reject,
    /// Use a random placeholder token and log a warning
    Synthesize,
}

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Base URL the API paths are joined onto
    pub api_base_url: String,
    /// Durable store key for the profile
    pub user_storage_key: String,
    /// Volatile store key for the token
    pub session_storage_key: String,
    /// Prefix applied to the phone number at registration
    pub phone_country_code: String,
    pub missing_token: MissingTokenPolicy,
    /// Per-request timeout
    pub request_timeout: Duration,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            user_storage_key: USER_STORAGE_KEY.to_string(),
            session_storage_key: SESSION_STORAGE_KEY.to_string(),
            phone_country_code: kernel::validation::NIGERIA_COUNTRY_CODE.to_string(),
            missing_token: MissingTokenPolicy::Reject,
            request_timeout: platform::http::DEFAULT_TIMEOUT,
        }
    }
}

impl AuthConfig {
    /// Create config for a given API (e.g. a local or staging server)
    pub fn with_api_base_url(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            ..Default::default()
        }
    }

    /// Create config for development (placeholder tokens, short timeout)
    pub fn development() -> Self {
        Self {
            missing_token: MissingTokenPolicy::Synthesize,
            request_timeout: Duration::from_secs(10),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AuthConfig::default();
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.user_storage_key, "teacher_data");
        assert_eq!(config.session_storage_key, "teacher_session");
        assert_eq!(config.phone_country_code, "+234");
        assert_eq!(config.missing_token, MissingTokenPolicy::Reject);
    }

    #[test]
    fn test_development_config() {
        let config = AuthConfig::development();
        assert_eq!(config.missing_token, MissingTokenPolicy::Synthesize);
        assert_eq!(config.request_timeout, Duration::from_secs(10));
    }
}
