//! Auth (Session) Client Module
//!
//! Clean Architecture structure:
//! - `domain/` - User, session state, value objects, gateway/store traits
//! - `application/` - Session context and one module per operation
//! - `infra/` - Housing API over HTTP, persisted session over key-value stores
//!
//! ## Features
//! - Login / registration against the housing API
//! - Session restored on start: fresh profile when the API answers,
//!   last-known profile when it does not
//! - Profile update and refresh with bearer token
//! - Logout clears both persisted stores together
//!
//! ## Persistence Model
//! - Profile JSON lives in a durable store (survives restarts)
//! - Session token lives in a volatile store (gone with the desktop session)
//! - The two are written and removed as a pair

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;

// Re-exports for convenience
pub use application::config::{AuthConfig, MissingTokenPolicy};
pub use application::context::SessionContext;
pub use application::initialize::{InitializeOutput, SessionSource};
pub use application::sign_up::SignUpInput;
pub use domain::entity::{session_state::SessionState, user::User};
pub use domain::payload::{AuthResponse, LoginCredentials, ProfileUpdate, RegistrationData};
pub use domain::repository::{AuthApi, ProfileFetch, SessionRepository, StoredSession};
pub use domain::value_object::{email::Email, session_token::SessionToken};
pub use error::{AuthError, AuthResult};
pub use infra::http::HttpAuthApi;
pub use infra::store::PersistentSessionRepository;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::payload::*;
    pub use crate::domain::value_object::*;
}
