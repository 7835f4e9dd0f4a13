use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::Result;
use crate::models::{CartSession, DataSnapshot};
use crate::traits::{DataSource, SessionStore};

/// Serves a fixed snapshot. Useful for hosts without a database and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticDataSource {
    snapshot: DataSnapshot,
}

impl StaticDataSource {
    pub fn new(snapshot: DataSnapshot) -> Self {
        Self { snapshot }
    }
}

#[async_trait]
impl DataSource for StaticDataSource {
    async fn fetch_snapshot(&self) -> Result<DataSnapshot> {
        Ok(self.snapshot.clone())
    }
}

#[derive(Debug, Default, Clone)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<String, Vec<CartSession>>>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn append(&self, namespace: &str, session: &CartSession) -> Result<()> {
        let mut sessions = self.sessions.write().await;
        sessions
            .entry(namespace.to_string())
            .or_default()
            .push(session.clone());
        Ok(())
    }

    async fn list(&self, namespace: &str) -> Result<Vec<CartSession>> {
        let sessions = self.sessions.read().await;
        Ok(sessions.get(namespace).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn session(id: &str) -> CartSession {
        CartSession {
            id: id.to_string(),
            name: "Scout Session".to_string(),
            players: Vec::new(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_sessions_are_kept_per_namespace_in_order() {
        let store = InMemorySessionStore::new();
        store.append("a", &session("s1")).await.unwrap();
        store.append("a", &session("s2")).await.unwrap();
        store.append("b", &session("s3")).await.unwrap();

        let ids: Vec<String> = store
            .list("a")
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(ids, vec!["s1", "s2"]);
        assert_eq!(store.list("b").await.unwrap().len(), 1);
        assert!(store.list("missing").await.unwrap().is_empty());
    }
}
