use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Refresh-token state persisted for one identity. Only a keyed hash of the token is kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshSession {
    pub identity: String,
    pub identity_id: i64,
    pub token_hash: [u8; 32],
    pub expires_at: DateTime<Utc>,
}

impl RefreshSession {
    pub fn new(
        identity_id: i64,
        identity: &str,
        refresh_token: &str,
        hash_key: &[u8; 32],
        expires_at: DateTime<Utc>,
    ) -> Self {
        Self {
            identity: identity.to_owned(),
            identity_id,
            token_hash: hash_refresh(hash_key, refresh_token),
            expires_at,
        }
    }

    /// Constant-time comparison of the presented token against the stored hash.
    pub fn matches(&self, presented: &str, hash_key: &[u8; 32]) -> bool {
        blake3::Hash::from(self.token_hash) == blake3::keyed_hash(hash_key, presented.as_bytes())
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum SessionStoreError {
    #[error("session store unavailable: {0}")]
    Unavailable(String),
    #[error("corrupt session record: {0}")]
    Corrupt(String),
}

/// TTL key-value store holding at most one refresh session per identity.
#[async_trait::async_trait]
pub trait SessionStore: Send + Sync {
    /// Stores `session` under its identity, replacing any previous session.
    async fn put(&mut self, session: RefreshSession, ttl: Duration)
        -> Result<(), SessionStoreError>;
    /// Never returns a session belonging to another identity.
    async fn get(&self, identity: &str) -> Result<Option<RefreshSession>, SessionStoreError>;
    /// Returns whether a session was removed.
    async fn invalidate(&mut self, identity: &str) -> Result<bool, SessionStoreError>;
}

pub fn hash_refresh(key32: &[u8; 32], token: &str) -> [u8; 32] {
    let out = blake3::keyed_hash(key32, token.as_bytes());
    *out.as_bytes()
}
