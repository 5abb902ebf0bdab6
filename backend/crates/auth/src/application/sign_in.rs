//! Sign In Use Case
//!
//! Authenticates a teacher against the housing API and persists the session.

use crate::application::context::SessionContext;
use crate::domain::payload::{AuthResponse, LoginCredentials};
use crate::domain::repository::{AuthApi, SessionRepository};
use crate::error::AuthResult;

impl<A, S> SessionContext<A, S>
where
    A: AuthApi,
    S: SessionRepository,
{
    /// Log in and persist `{user, token}`.
    ///
    /// Returns the server response unchanged. The session is authenticated
    /// afterwards.
    pub async fn login(&self, credentials: LoginCredentials) -> AuthResult<AuthResponse> {
        self.run("login", async {
            let response = self.api.login(&credentials).await?;
            let token = self.resolve_token(response.token.as_deref())?;
            self.adopt(response.user.clone(), token).await?;

            tracing::info!(
                user_id = %response.user.id,
                "Teacher logged in"
            );
            Ok(response)
        })
        .await
    }
}
