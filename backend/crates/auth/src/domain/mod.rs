//! Domain Layer
//!
//! Contains entities, value objects, request/response payloads, and the
//! gateway/store traits implemented by the infrastructure layer.

pub mod entity;
pub mod payload;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::{session_state::SessionState, user::User};
pub use repository::{AuthApi, ProfileFetch, SessionRepository, StoredSession};
