//! Entity Module

pub mod session_state;
pub mod user;

pub use session_state::SessionState;
pub use user::User;
