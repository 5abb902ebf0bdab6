//! Initialize Use Case
//!
//! Restores the persisted session at start.
//!
//! Two-tier read: the profile is fetched fresh with the stored token; if
//! the API cannot answer, the last-known profile from the durable store is
//! used instead and the caller is told which tier satisfied the request.

use derive_more::Display;
use serde_json::Value;

use crate::application::context::SessionContext;
use crate::domain::entity::user::User;
use crate::domain::repository::{AuthApi, ProfileFetch, SessionRepository};
use crate::domain::value_object::session_token::SessionToken;
use crate::error::{AuthError, AuthResult};

/// Where the restored session came from
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum SessionSource {
    /// Profile fetched from the API just now
    #[display("fresh profile")]
    Fresh,
    /// API unavailable; last persisted profile used
    #[display("cached profile ({reason})")]
    Cached { reason: String },
    /// Nothing was persisted
    #[display("no saved session")]
    Anonymous,
    /// Persisted session was expired, corrupt, or half-written and has
    /// been removed
    #[display("saved session cleared")]
    Cleared,
}

/// Initialize output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitializeOutput {
    pub source: SessionSource,
}

impl InitializeOutput {
    fn new(source: SessionSource) -> Self {
        Self { source }
    }

    /// Whether a session is active after initialization
    pub fn is_authenticated(&self) -> bool {
        matches!(self.source, SessionSource::Fresh | SessionSource::Cached { .. })
    }
}

impl<A, S> SessionContext<A, S>
where
    A: AuthApi,
    S: SessionRepository,
{
    /// Restore the persisted session
    pub async fn initialize(&self) -> AuthResult<InitializeOutput> {
        self.run("initialize", async {
            let stored = self.store.load().await?;
            let token = stored.token.as_deref().and_then(|t| SessionToken::new(t));

            let (user_json, token) = match (stored.user_json, token) {
                (Some(user_json), Some(token)) => (user_json, token),
                (None, None) => {
                    tracing::debug!("No persisted session");
                    return Ok(InitializeOutput::new(SessionSource::Anonymous));
                }
                (user_json, token) => {
                    tracing::warn!(
                        has_user = user_json.is_some(),
                        has_token = token.is_some(),
                        "Orphaned half-session found, clearing"
                    );
                    self.clear().await?;
                    return Ok(InitializeOutput::new(SessionSource::Cleared));
                }
            };

            let fetched = self.api.fetch_profile(&token).await;
            let failure = match fetched {
                Ok(ProfileFetch::Profile(body)) => match parse_profile(body) {
                    Ok(user) => {
                        tracing::info!(user_id = %user.id, "Session restored from API");
                        self.adopt(user, token).await?;
                        return Ok(InitializeOutput::new(SessionSource::Fresh));
                    }
                    Err(e) => e,
                },
                Ok(ProfileFetch::Unauthorized) => {
                    tracing::warn!("Persisted session token rejected, clearing");
                    self.clear().await?;
                    return Ok(InitializeOutput::new(SessionSource::Cleared));
                }
                Ok(ProfileFetch::Failed { status }) => {
                    AuthError::ProfileFetch(format!("Failed to fetch profile (HTTP {status})"))
                }
                Err(e) => e,
            };

            match serde_json::from_str::<User>(&user_json) {
                Ok(user) => {
                    tracing::warn!(
                        user_id = %user.id,
                        reason = %failure,
                        "Profile fetch failed, using cached profile"
                    );
                    self.restore(user, token);
                    Ok(InitializeOutput::new(SessionSource::Cached {
                        reason: failure.to_string(),
                    }))
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Cached profile unreadable, clearing");
                    self.clear().await?;
                    Ok(InitializeOutput::new(SessionSource::Cleared))
                }
            }
        })
        .await
    }
}

pub(crate) fn parse_profile(body: Value) -> AuthResult<User> {
    serde_json::from_value(body).map_err(|e| AuthError::InvalidResponse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_source_display() {
        assert_eq!(SessionSource::Fresh.to_string(), "fresh profile");
        let cached = SessionSource::Cached {
            reason: "Network error: timed out".into(),
        };
        assert_eq!(cached.to_string(), "cached profile (Network error: timed out)");
        assert!(InitializeOutput::new(cached).is_authenticated());
        assert!(!InitializeOutput::new(SessionSource::Cleared).is_authenticated());
    }
}
