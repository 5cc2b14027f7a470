//! Session store - in-memory challenge sessions
//!
//! Sessions are ephemeral: nothing is persisted, idle ones are swept by
//! `purge_expired`. All mutation happens under the write lock, one
//! transition at a time per store.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use parking_lot::RwLock;
use uuid::Uuid;

use crate::challenge::ChallengeSession;

#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, ChallengeSession>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, session: ChallengeSession) {
        self.inner.write().insert(session.id, session);
    }

    /// Snapshot of a session
    pub fn get(&self, id: Uuid) -> Option<ChallengeSession> {
        self.inner.read().get(&id).cloned()
    }

    /// Apply `f` to a session under the write lock, marking it as seen at `now`
    pub fn update<T, F>(&self, id: Uuid, now: DateTime<Utc>, f: F) -> Option<T>
    where
        F: FnOnce(&mut ChallengeSession) -> T,
    {
        let mut sessions = self.inner.write();
        let session = sessions.get_mut(&id)?;
        session.last_seen_at = now;
        Some(f(session))
    }

    pub fn remove(&self, id: Uuid) -> Option<ChallengeSession> {
        self.inner.write().remove(&id)
    }

    /// Drop sessions not seen for longer than `ttl`; returns how many were removed
    pub fn purge_expired(&self, now: DateTime<Utc>, ttl: Duration) -> usize {
        let mut sessions = self.inner.write();
        let before = sessions.len();
        sessions.retain(|_, s| now - s.last_seen_at <= ttl);
        before - sessions.len()
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }
}
