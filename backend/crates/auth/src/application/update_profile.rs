//! Update Profile Use Case
//!
//! Sends a partial profile to the API and merges the answer locally.

use serde_json::{Map, Value};

use crate::application::context::SessionContext;
use crate::domain::payload::ProfileUpdate;
use crate::domain::repository::{AuthApi, SessionRepository};
use crate::error::{AuthError, AuthResult};

impl<A, S> SessionContext<A, S>
where
    A: AuthApi,
    S: SessionRepository,
{
    /// PUT `update` with the session token; on success merge the returned
    /// fields into the held profile and persist it.
    pub async fn update_profile(&self, update: ProfileUpdate) -> AuthResult<Map<String, Value>> {
        self.run("update_profile", async {
            let (mut user, token) = self.current().ok_or(AuthError::NoActiveSession)?;

            let fields = self.api.update_profile(&token, &update).await?;

            user.merge(&fields)
                .map_err(|e| AuthError::InvalidResponse(e.to_string()))?;
            self.adopt(user, token).await?;

            tracing::info!(
                fields = update.as_map().len(),
                "Profile updated"
            );
            Ok(fields)
        })
        .await
    }
}
