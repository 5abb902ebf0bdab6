//! Session Context
//!
//! The one session per portal process. Constructed at start, handed to
//! whatever needs it, and torn down with [`SessionContext::shutdown`].
//!
//! State is published through a `watch` channel: observers get the latest
//! snapshot and are woken on every change. Operations live in their own
//! modules (`initialize`, `sign_in`, ...) as further `impl` blocks.

use std::future::Future;
use std::sync::Arc;

use tokio::sync::watch;

use crate::application::config::{AuthConfig, MissingTokenPolicy};
use crate::domain::entity::{session_state::SessionState, user::User};
use crate::domain::repository::{AuthApi, SessionRepository};
use crate::domain::value_object::session_token::SessionToken;
use crate::error::{AuthError, AuthResult};

/// Session context
pub struct SessionContext<A, S>
where
    A: AuthApi,
    S: SessionRepository,
{
    pub(crate) api: Arc<A>,
    pub(crate) store: Arc<S>,
    pub(crate) config: Arc<AuthConfig>,
    state: watch::Sender<SessionState>,
}

impl<A, S> SessionContext<A, S>
where
    A: AuthApi,
    S: SessionRepository,
{
    /// Create an empty (anonymous) context; call `initialize` next
    pub fn new(api: Arc<A>, store: Arc<S>, config: Arc<AuthConfig>) -> Self {
        let (state, _) = watch::channel(SessionState::anonymous());
        Self {
            api,
            store,
            config,
            state,
        }
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Current snapshot
    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    /// Receiver that observes every state change
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    /// `true` iff authenticated and a user profile is held
    pub fn has_submitted_form(&self) -> bool {
        self.state.borrow().has_submitted_form()
    }

    /// Tear the context down. Observers see the channel close; the
    /// persisted session is left in place for the next start.
    pub fn shutdown(self) {
        tracing::debug!(
            observers = self.state.receiver_count(),
            "Session context shut down"
        );
    }

    // ------------------------------------------------------------------
    // Helpers shared by the operations
    // ------------------------------------------------------------------

    pub(crate) fn update(&self, f: impl FnOnce(&mut SessionState)) {
        self.state.send_modify(f);
    }

    /// User and token currently held, if both are
    pub(crate) fn current(&self) -> Option<(User, SessionToken)> {
        let state = self.state.borrow();
        Some((state.user.clone()?, state.session_token.clone()?))
    }

    pub(crate) fn current_token(&self) -> Option<SessionToken> {
        self.state.borrow().session_token.clone()
    }

    /// Run an operation with the loading/error discipline: loading set and
    /// error cleared on entry, loading cleared on exit, message recorded
    /// on failure.
    pub(crate) async fn run<T, F>(&self, operation: &'static str, fut: F) -> AuthResult<T>
    where
        F: Future<Output = AuthResult<T>>,
    {
        self.update(SessionState::begin_request);
        match fut.await {
            Ok(value) => {
                self.update(SessionState::end_request);
                Ok(value)
            }
            Err(err) => {
                err.log();
                tracing::debug!(operation, error = %err, "Session operation failed");
                let message = err.to_string();
                self.update(|state| state.fail(message));
                Err(err)
            }
        }
    }

    /// Persist `user` and `token` together, then publish them
    pub(crate) async fn adopt(&self, user: User, token: SessionToken) -> AuthResult<()> {
        let user_json = serde_json::to_string(&user)
            .map_err(|e| AuthError::InvalidResponse(e.to_string()))?;
        self.store.save(&user_json, &token).await?;
        self.state
            .send_replace(SessionState::authenticated(user, token));
        Ok(())
    }

    /// Publish `user` and `token` without touching the stores
    pub(crate) fn restore(&self, user: User, token: SessionToken) {
        self.state
            .send_replace(SessionState::authenticated(user, token));
    }

    /// Empty the stores and the in-memory state.
    ///
    /// The in-memory state is reset even if the stores could not be
    /// cleared; the storage error is still returned.
    pub(crate) async fn clear(&self) -> AuthResult<()> {
        let result = self.store.clear().await;
        self.state.send_replace(SessionState::anonymous());
        result
    }

    /// Token to keep after a successful login / register
    pub(crate) fn resolve_token(&self, issued: Option<&str>) -> AuthResult<SessionToken> {
        if let Some(token) = issued.and_then(|t| SessionToken::new(t)) {
            return Ok(token);
        }
        match self.config.missing_token {
            MissingTokenPolicy::Reject => Err(AuthError::MissingToken),
            MissingTokenPolicy::Synthesize => {
                tracing::warn!("API issued no session token, using a local placeholder");
                Ok(SessionToken::synthesize())
            }
        }
    }
}
