//! Refresh Profile Use Case
//!
//! Re-reads the profile from the API with the held token.

use crate::application::context::SessionContext;
use crate::application::initialize::parse_profile;
use crate::domain::entity::user::User;
use crate::domain::repository::{AuthApi, ProfileFetch, SessionRepository};
use crate::error::{AuthError, AuthResult};

impl<A, S> SessionContext<A, S>
where
    A: AuthApi,
    S: SessionRepository,
{
    /// Fetch and adopt the current profile.
    ///
    /// A 401 logs the teacher out before `SessionExpired` is returned.
    pub async fn refresh_profile(&self) -> AuthResult<User> {
        self.run("refresh_profile", async {
            let token = self.current_token().ok_or(AuthError::NoActiveSession)?;

            let fetched = self.api.fetch_profile(&token).await?;
            match fetched {
                ProfileFetch::Profile(body) => {
                    let user = parse_profile(body)?;
                    self.adopt(user.clone(), token).await?;
                    tracing::info!(user_id = %user.id, "Profile refreshed");
                    Ok(user)
                }
                ProfileFetch::Unauthorized => {
                    // State is reset even when the stores could not be emptied
                    if let Err(e) = self.clear().await {
                        e.log();
                    }
                    Err(AuthError::SessionExpired)
                }
                ProfileFetch::Failed { status } => {
                    tracing::debug!(status, "Profile fetch failed");
                    Err(AuthError::ProfileFetch("Failed to fetch profile".to_string()))
                }
            }
        })
        .await
    }
}
