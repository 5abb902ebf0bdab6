//! Persisted Session over Key-Value Stores
//!
//! Profile JSON goes to the durable store, the token to the volatile one.

use platform::storage::KeyValueStore;

use crate::application::config::AuthConfig;
use crate::domain::repository::{SessionRepository, StoredSession};
use crate::domain::value_object::session_token::SessionToken;
use crate::error::AuthResult;

/// `SessionRepository` over a durable and a volatile store
#[derive(Debug, Clone)]
pub struct PersistentSessionRepository<D, V> {
    durable: D,
    volatile: V,
    user_key: String,
    token_key: String,
}

impl<D, V> PersistentSessionRepository<D, V>
where
    D: KeyValueStore + Sync,
    V: KeyValueStore + Sync,
{
    pub fn new(durable: D, volatile: V, config: &AuthConfig) -> Self {
        Self {
            durable,
            volatile,
            user_key: config.user_storage_key.clone(),
            token_key: config.session_storage_key.clone(),
        }
    }
}

impl<D, V> SessionRepository for PersistentSessionRepository<D, V>
where
    D: KeyValueStore + Sync,
    V: KeyValueStore + Sync,
{
    async fn load(&self) -> AuthResult<StoredSession> {
        Ok(StoredSession {
            user_json: self.durable.get(&self.user_key).await?,
            token: self.volatile.get(&self.token_key).await?,
        })
    }

    async fn save(&self, user_json: &str, token: &SessionToken) -> AuthResult<()> {
        let previous = self.durable.get(&self.user_key).await?;
        self.durable.set(&self.user_key, user_json).await?;

        if let Err(e) = self.volatile.set(&self.token_key, token.as_str()).await {
            // Put the durable half back so the pair stays consistent
            let rollback = match previous {
                Some(value) => self.durable.set(&self.user_key, &value).await,
                None => self.durable.remove(&self.user_key).await,
            };
            if let Err(rollback_err) = rollback {
                tracing::error!(error = %rollback_err, "Session rollback failed");
            }
            return Err(e.into());
        }

        tracing::debug!("Session persisted");
        Ok(())
    }

    async fn clear(&self) -> AuthResult<()> {
        let durable = self.durable.remove(&self.user_key).await;
        let volatile = self.volatile.remove(&self.token_key).await;
        durable?;
        volatile?;
        tracing::debug!("Session cleared");
        Ok(())
    }
}
