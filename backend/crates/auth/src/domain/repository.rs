//! Gateway / Store Traits
//!
//! Interfaces to the housing API and to the persisted session.
//! Implementations are in the infrastructure layer.

use serde_json::{Map, Value};

use crate::domain::payload::{AuthResponse, LoginCredentials, ProfileUpdate, RegistrationData};
use crate::domain::value_object::session_token::SessionToken;
use crate::error::AuthResult;

/// Outcome of a profile fetch that reached the server
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileFetch {
    /// 2xx with a profile body
    Profile(Value),
    /// 401: the token is no longer valid
    Unauthorized,
    /// Any other non-2xx status
    Failed { status: u16 },
}

/// Housing API trait
///
/// Non-2xx answers to login, register and update become the matching
/// `AuthError` variant carrying the server's `message` (or the fallback).
#[trait_variant::make(AuthApi: Send)]
pub trait LocalAuthApi {
    /// `POST /auth/login`
    async fn login(&self, credentials: &LoginCredentials) -> AuthResult<AuthResponse>;

    /// `POST /auth/register` (phone already normalized)
    async fn register(&self, data: &RegistrationData) -> AuthResult<AuthResponse>;

    /// `GET /users/profile` with bearer token
    async fn fetch_profile(&self, token: &SessionToken) -> AuthResult<ProfileFetch>;

    /// `PUT /users/profile` with bearer token; returns the updated fields
    async fn update_profile(
        &self,
        token: &SessionToken,
        update: &ProfileUpdate,
    ) -> AuthResult<Map<String, Value>>;
}

/// Raw persisted session; either half may be missing
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoredSession {
    /// Serialized profile from the durable store
    pub user_json: Option<String>,
    /// Token from the volatile store
    pub token: Option<String>,
}

/// Persisted session trait
#[trait_variant::make(SessionRepository: Send)]
pub trait LocalSessionRepository {
    /// Read both halves
    async fn load(&self) -> AuthResult<StoredSession>;

    /// Write both halves; on failure neither is left half-written
    async fn save(&self, user_json: &str, token: &SessionToken) -> AuthResult<()>;

    /// Remove both halves (missing values are fine)
    async fn clear(&self) -> AuthResult<()>;
}
