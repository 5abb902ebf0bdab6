//! Infrastructure Layer
//!
//! HTTP gateway to the housing API and the key-value backed session store.

pub mod http;
pub mod store;

pub use http::HttpAuthApi;
pub use store::PersistentSessionRepository;
