//! Session State Entity
//!
//! Snapshot of "who is logged in" as observers see it.

use crate::domain::entity::user::User;
use crate::domain::value_object::session_token::SessionToken;

/// Session state
///
/// `is_authenticated` implies both `user` and `session_token` are present;
/// the constructors below are the only way the flag is set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub is_authenticated: bool,
    pub user: Option<User>,
    pub session_token: Option<SessionToken>,
    /// A request is in flight
    pub is_loading: bool,
    /// Message of the last failed operation
    pub error: Option<String>,
}

impl SessionState {
    /// Empty, unauthenticated state
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Signed-in state with no request in flight
    pub fn authenticated(user: User, token: SessionToken) -> Self {
        Self {
            is_authenticated: true,
            user: Some(user),
            session_token: Some(token),
            is_loading: false,
            error: None,
        }
    }

    /// `true` iff authenticated and a user profile is held
    pub fn has_submitted_form(&self) -> bool {
        self.is_authenticated && self.user.is_some()
    }

    /// Mark the start of a request
    pub fn begin_request(&mut self) {
        self.is_loading = true;
        self.error = None;
    }

    /// Mark the end of a request without touching the rest of the state
    pub fn end_request(&mut self) {
        self.is_loading = false;
    }

    /// Record a failed request
    pub fn fail(&mut self, message: impl Into<String>) {
        self.is_loading = false;
        self.error = Some(message.into());
    }
}
