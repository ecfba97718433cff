//! In-memory profile sessions.
//!
//! Every uploaded or manually created profile lives in a session keyed by a
//! UUID. Sessions are ephemeral; a background task evicts entries older
//! than the configured TTL.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::models::profile::ProfileRecord;

#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub id: Uuid,
    pub company: String,
    pub profile: ProfileRecord,
    pub created_at: DateTime<Utc>,
    /// Name of the uploaded file, if the session came from an upload.
    pub original_filename: Option<String>,
}

impl Session {
    pub fn new(company: String, profile: ProfileRecord, original_filename: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            company,
            profile,
            created_at: Utc::now(),
            original_filename,
        }
    }
}

#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn get(&self, id: Uuid) -> Option<Session>;
    async fn put(&self, session: Session);
    /// Replaces the stored profile, keeping id and creation time.
    /// Returns the updated session, or None if the id is unknown.
    async fn update(&self, id: Uuid, profile: ProfileRecord) -> Option<Session>;
    /// Returns true if the session existed.
    async fn delete(&self, id: Uuid) -> bool;
    /// Removes sessions created more than `ttl_minutes` ago and returns
    /// how many were dropped.
    async fn evict_older_than(&self, ttl_minutes: i64) -> usize;
}

#[derive(Default)]
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<Uuid, Session>>,
}

impl InMemorySessionStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get(&self, id: Uuid) -> Option<Session> {
        self.sessions.read().await.get(&id).cloned()
    }

    async fn put(&self, session: Session) {
        debug!(session_id = %session.id, company = %session.company, "Storing session");
        self.sessions.write().await.insert(session.id, session);
    }

    async fn update(&self, id: Uuid, profile: ProfileRecord) -> Option<Session> {
        let mut sessions = self.sessions.write().await;
        let session = sessions.get_mut(&id)?;
        session.profile = profile;
        Some(session.clone())
    }

    async fn delete(&self, id: Uuid) -> bool {
        self.sessions.write().await.remove(&id).is_some()
    }

    async fn evict_older_than(&self, ttl_minutes: i64) -> usize {
        let cutoff = Utc::now() - Duration::minutes(ttl_minutes);
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, s| s.created_at >= cutoff);
        let evicted = before - sessions.len();
        if evicted > 0 {
            debug!(evicted, "Evicted expired sessions");
        }
        evicted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_session() -> Session {
        let mut profile = ProfileRecord::default();
        profile.personal.name = "Max Mustermann".to_string();
        Session::new("galdora".to_string(), profile, Some("cv.pdf".to_string()))
    }

    #[tokio::test]
    async fn test_put_get_roundtrip() {
        let store = InMemorySessionStore::new();
        let session = sample_session();
        let id = session.id;
        store.put(session).await;

        let loaded = store.get(id).await.unwrap();
        assert_eq!(loaded.company, "galdora");
        assert_eq!(loaded.profile.personal.name, "Max Mustermann");
        assert_eq!(loaded.original_filename.as_deref(), Some("cv.pdf"));
    }

    #[tokio::test]
    async fn test_get_unknown_is_none() {
        let store = InMemorySessionStore::new();
        assert!(store.get(Uuid::new_v4()).await.is_none());
    }

    #[tokio::test]
    async fn test_update_replaces_profile_keeps_metadata() {
        let store = InMemorySessionStore::new();
        let session = sample_session();
        let id = session.id;
        let created_at = session.created_at;
        store.put(session).await;

        let mut profile = ProfileRecord::default();
        profile.personal.name = "Erika Musterfrau".to_string();
        let updated = store.update(id, profile).await.unwrap();
        assert_eq!(updated.id, id);
        assert_eq!(updated.created_at, created_at);
        assert_eq!(updated.profile.personal.name, "Erika Musterfrau");
    }

    #[tokio::test]
    async fn test_update_unknown_is_none() {
        let store = InMemorySessionStore::new();
        assert!(store
            .update(Uuid::new_v4(), ProfileRecord::default())
            .await
            .is_none());
    }

    #[tokio::test]
    async fn test_delete() {
        let store = InMemorySessionStore::new();
        let session = sample_session();
        let id = session.id;
        store.put(session).await;

        assert!(store.delete(id).await);
        assert!(!store.delete(id).await);
        assert!(store.get(id).await.is_none());
    }

    #[tokio::test]
    async fn test_eviction_drops_only_expired() {
        let store = InMemorySessionStore::new();
        let fresh = sample_session();
        let fresh_id = fresh.id;
        store.put(fresh).await;

        let mut stale = sample_session();
        stale.created_at = Utc::now() - Duration::minutes(90);
        let stale_id = stale.id;
        store.put(stale).await;

        let evicted = store.evict_older_than(60).await;
        assert_eq!(evicted, 1);
        assert!(store.get(fresh_id).await.is_some());
        assert!(store.get(stale_id).await.is_none());
    }
}
