//! Value Object Module

pub mod email;
pub mod session_token;

pub use email::Email;
pub use session_token::SessionToken;
