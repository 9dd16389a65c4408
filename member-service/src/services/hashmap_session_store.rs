use chrono::{Duration, Utc};
use std::collections::HashMap;

use crate::domain::{RefreshSession, SessionStore, SessionStoreError};

/// Process-local session store. Expired sessions are hidden on read and dropped on write.
#[derive(Default)]
pub struct HashmapSessionStore {
    // identity -> session
    sessions: HashMap<String, RefreshSession>,
}

#[async_trait::async_trait]
impl SessionStore for HashmapSessionStore {
    async fn put(
        &mut self,
        session: RefreshSession,
        _ttl: Duration,
    ) -> Result<(), SessionStoreError> {
        let now = Utc::now();
        self.sessions.retain(|_, s| !s.is_expired_at(now));
        self.sessions.insert(session.identity.clone(), session);
        Ok(())
    }

    async fn get(&self, identity: &str) -> Result<Option<RefreshSession>, SessionStoreError> {
        let now = Utc::now();
        Ok(self
            .sessions
            .get(identity)
            .filter(|s| s.identity == identity && !s.is_expired_at(now))
            .cloned())
    }

    async fn invalidate(&mut self, identity: &str) -> Result<bool, SessionStoreError> {
        Ok(self.sessions.remove(identity).is_some())
    }
}
