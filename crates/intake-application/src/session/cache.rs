use intake_core::session::Session;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory store of live sessions, keyed by session id.
///
/// Each entry is an independent value; a turn on one session never reads
/// or writes another.
pub struct SessionCache {
    sessions: Arc<RwLock<HashMap<String, Session>>>,
}

impl SessionCache {
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Returns a copy of the cached session.
    pub async fn get(&self, session_id: &str) -> Option<Session> {
        let sessions = self.sessions.read().await;
        sessions.get(session_id).cloned()
    }

    pub async fn insert(&self, session: Session) {
        let mut sessions = self.sessions.write().await;
        sessions.insert(session.id.clone(), session);
    }

    /// Runs `f` against the cached session under the write lock.
    ///
    /// Returns `None` if no session has that id.
    pub async fn update<R>(&self, session_id: &str, f: impl FnOnce(&mut Session) -> R) -> Option<R> {
        let mut sessions = self.sessions.write().await;
        sessions.get_mut(session_id).map(f)
    }

    pub async fn remove(&self, session_id: &str) -> Option<Session> {
        let mut sessions = self.sessions.write().await;
        sessions.remove(session_id)
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

impl Default for SessionCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use intake_core::session::Stage;

    #[tokio::test]
    async fn test_update_and_remove() {
        let cache = SessionCache::new();
        let session = Session::default();
        let id = session.id.clone();
        cache.insert(session).await;

        let stage = cache
            .update(&id, |s| {
                s.stage = Stage::CollectingName;
                s.stage
            })
            .await;
        assert_eq!(stage, Some(Stage::CollectingName));
        assert_eq!(cache.get(&id).await.map(|s| s.stage), Some(Stage::CollectingName));

        assert!(cache.update("missing", |_| ()).await.is_none());
        assert!(cache.remove(&id).await.is_some());
        assert!(cache.is_empty().await);
    }
}
