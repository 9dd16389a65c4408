use chrono::Duration;
use std::sync::Arc;

use super::redis_service::{RedisService, RedisServiceErr};
use crate::domain::{RefreshSession, SessionStore, SessionStoreError};
use crate::utils::REFRESH_SESSION_KEY_PREFIX;

/// Sessions stored as JSON strings under `refresh_session:<identity>` with a redis TTL.
pub struct RedisSessionStore {
    redis_service: Arc<RedisService>,
}

impl RedisSessionStore {
    pub fn new(redis_service: Arc<RedisService>) -> Self {
        Self { redis_service }
    }

    pub fn key_for(identity: &str) -> String {
        format!("{REFRESH_SESSION_KEY_PREFIX}{identity}")
    }
}

fn unavailable(e: RedisServiceErr) -> SessionStoreError {
    SessionStoreError::Unavailable(e.to_string())
}

#[async_trait::async_trait]
impl SessionStore for RedisSessionStore {
    async fn put(&mut self, session: RefreshSession, ttl: Duration) -> Result<(), SessionStoreError> {
        let value = serde_json::to_string(&session)
            .map_err(|e| SessionStoreError::Corrupt(e.to_string()))?;
        let ttl_seconds = u64::try_from(ttl.num_seconds()).unwrap_or(0);
        self.redis_service
            .set_with_expiry(&Self::key_for(&session.identity), &value, ttl_seconds)
            .await
            .map_err(unavailable)
    }

    async fn get(&self, identity: &str) -> Result<Option<RefreshSession>, SessionStoreError> {
        let Some(raw) = self
            .redis_service
            .get(&Self::key_for(identity))
            .await
            .map_err(unavailable)?
        else {
            return Ok(None);
        };

        let session: RefreshSession =
            serde_json::from_str(&raw).map_err(|e| SessionStoreError::Corrupt(e.to_string()))?;

        if session.identity != identity {
            log::warn!("session stored under {identity} belongs to another identity, ignoring");
            return Ok(None);
        }
        Ok(Some(session))
    }

    async fn invalidate(&mut self, identity: &str) -> Result<bool, SessionStoreError> {
        self.redis_service
            .delete_key(&Self::key_for(identity))
            .await
            .map_err(unavailable)
    }
}
