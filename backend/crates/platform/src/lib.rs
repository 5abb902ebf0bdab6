//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations for the portal client:
//! - JSON-over-HTTP client for the housing API (reqwest)
//! - Key-value stores with durable and volatile lifetimes
//! - Random token generation (Base64)
//! - Clear-text password handling with zeroization

pub mod crypto;
pub mod http;
pub mod password;
pub mod storage;
