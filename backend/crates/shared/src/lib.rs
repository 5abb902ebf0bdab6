//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the "smallest core" of portal vocabulary:
//! - Common error types and result aliases
//! - Reference data shared by several domains (Nigerian states)
//! - Cross-cutting validation rules (email shape, Nigerian mobile numbers)
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across all domains.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod geo;
pub mod validation;
