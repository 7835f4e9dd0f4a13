use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::error::{Result, StorageError};
use crate::models::CartSession;
use crate::traits::SessionStore;

/// Keeps each namespace as a JSON array in `<dir>/<namespace>.json`.
///
/// Appends rewrite the whole file under a lock, which is fine for the
/// handful of sessions a scout saves.
#[derive(Debug)]
pub struct JsonFileSessionStore {
    dir: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileSessionStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            write_lock: Mutex::new(()),
        }
    }

    fn path_for(&self, namespace: &str) -> Result<PathBuf> {
        let valid = !namespace.is_empty()
            && namespace
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(StorageError::ConstraintViolation(format!(
                "invalid session namespace '{}'",
                namespace
            )));
        }

        Ok(self.dir.join(format!("{}.json", namespace)))
    }

    async fn read_sessions(path: &Path) -> Result<Vec<CartSession>> {
        match tokio::fs::read(path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }
}

#[async_trait]
impl SessionStore for JsonFileSessionStore {
    async fn append(&self, namespace: &str, session: &CartSession) -> Result<()> {
        let path = self.path_for(namespace)?;
        let _guard = self.write_lock.lock().await;

        let mut sessions = Self::read_sessions(&path).await?;
        sessions.push(session.clone());

        tokio::fs::create_dir_all(&self.dir).await?;
        let json = serde_json::to_vec_pretty(&sessions)?;
        tokio::fs::write(&path, json).await?;

        tracing::debug!(path = %path.display(), total = sessions.len(), "Wrote session file");
        Ok(())
    }

    async fn list(&self, namespace: &str) -> Result<Vec<CartSession>> {
        let path = self.path_for(namespace)?;
        Self::read_sessions(&path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SessionPlayer;
    use chrono::Utc;

    fn session(id: &str) -> CartSession {
        CartSession {
            id: id.to_string(),
            name: "Draft Board".to_string(),
            players: vec![SessionPlayer {
                player_id: 7,
                notes: "Sticky hands".to_string(),
            }],
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_append_and_list() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileSessionStore::new(dir.path().join("sessions"));

        assert!(store.list("scout_sessions").await.unwrap().is_empty());

        store.append("scout_sessions", &session("s1")).await.unwrap();
        store.append("scout_sessions", &session("s2")).await.unwrap();

        let sessions = store.list("scout_sessions").await.unwrap();
        assert_eq!(sessions.len(), 2);
        assert_eq!(sessions[0].id, "s1");
        assert_eq!(sessions[0].players, session("s1").players);
        assert_eq!(sessions[1].id, "s2");
        assert!(dir.path().join("sessions/scout_sessions.json").exists());
    }

    #[tokio::test]
    async fn test_rejects_path_like_namespace() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileSessionStore::new(dir.path());

        let err = store.append("../escape", &session("s1")).await.unwrap_err();
        assert!(matches!(err, StorageError::ConstraintViolation(_)));
    }

    #[tokio::test]
    async fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("scout_sessions.json"), b"not json").unwrap();
        let store = JsonFileSessionStore::new(dir.path());

        let err = store.list("scout_sessions").await.unwrap_err();
        assert!(matches!(err, StorageError::Serialization(_)));
    }
}
