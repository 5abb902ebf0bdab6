//! Request / Response Payloads
//!
//! Bodies exchanged with the housing API. Field names are the API's
//! (snake_case), not the form's.

use platform::password::ClearTextPassword;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::entity::user::User;
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

/// `POST /auth/login` body
///
/// The email goes out trimmed but otherwise as typed; accounts created
/// before addresses were lowercased must still match.
#[derive(Debug, Serialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: ClearTextPassword,
}

impl LoginCredentials {
    /// Validate raw input before anything is sent
    pub fn new(email: &str, password: String) -> AuthResult<Self> {
        let email = email.trim();
        Email::new(email).map_err(|e| AuthError::InvalidInput(e.message().to_string()))?;
        let password = ClearTextPassword::new(password)?;
        Ok(Self {
            email: email.to_string(),
            password,
        })
    }
}

/// `POST /auth/register` body
///
/// `phone` is sent as typed; the register operation rewrites it into
/// international form before transmission.
#[derive(Debug, Serialize)]
pub struct RegistrationData {
    pub firstname: String,
    pub lastname: String,
    pub email: Email,
    pub phone: String,
    pub state_of_origin: String,
    pub property_type: String,
    pub password: ClearTextPassword,
}

/// Partial profile for `PUT /users/profile`
///
/// Only the keys present are sent; the server leaves the rest alone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileUpdate(Map<String, Value>);

impl ProfileUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set one field, replacing any previous value
    pub fn set(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Build from `(key, value)` string pairs
    pub fn from_fields<I, K, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self(
            fields
                .into_iter()
                .map(|(k, v)| (k.into(), Value::String(v.into())))
                .collect(),
        )
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

/// Successful login / register response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Server-issued bearer token (some deployments omit it)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    pub user: User,
    /// Any further fields (`message`, `success`, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
