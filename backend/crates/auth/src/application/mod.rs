//! Application Layer
//!
//! The session context and one module per operation on it.

pub mod config;
pub mod context;
pub mod initialize;
pub mod refresh_profile;
pub mod sign_in;
pub mod sign_out;
pub mod sign_up;
pub mod update_profile;

// Re-exports
pub use config::{AuthConfig, MissingTokenPolicy};
pub use context::SessionContext;
pub use initialize::{InitializeOutput, SessionSource};
pub use sign_up::SignUpInput;
