//! Sign Out Use Case
//!
//! Ends the local session. The API keeps no session state, so there is
//! nothing to call remotely.

use crate::application::context::SessionContext;
use crate::domain::repository::{AuthApi, SessionRepository};
use crate::error::AuthResult;

impl<A, S> SessionContext<A, S>
where
    A: AuthApi,
    S: SessionRepository,
{
    /// Clear both stores and reset the state. Safe to call repeatedly.
    pub async fn logout(&self) -> AuthResult<()> {
        let user_id = self.state().user.map(|u| u.id);

        if let Err(err) = self.clear().await {
            err.log();
            let message = err.to_string();
            self.update(|state| state.error = Some(message));
            return Err(err);
        }

        match user_id {
            Some(user_id) => tracing::info!(user_id = %user_id, "Teacher logged out"),
            None => tracing::debug!("Logout with no active session"),
        }
        Ok(())
    }
}
