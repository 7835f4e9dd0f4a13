use storage::{SESSION_NAMESPACE, SessionStore, error::Result, models::CartSession};

/// Saved sessions, oldest first
pub async fn list_sessions(store: &dyn SessionStore) -> Result<Vec<CartSession>> {
    store.list(SESSION_NAMESPACE).await
}
