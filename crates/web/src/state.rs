use std::collections::HashMap;
use std::sync::Arc;

use storage::error::ScoutError;
use storage::models::DataSnapshot;
use storage::services::snapshot::load_snapshot;
use storage::{DataSource, ScoutCart, SessionStore};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::WebError;

pub type SharedCart = Arc<RwLock<ScoutCart>>;

#[derive(Debug, Default)]
struct DataState {
    snapshot: Arc<DataSnapshot>,
    error: Option<String>,
}

/// Shared handler state: the collaborators, the last fetched snapshot and
/// the open carts keyed by id.
#[derive(Clone)]
pub struct AppState {
    data_source: Arc<dyn DataSource>,
    session_store: Arc<dyn SessionStore>,
    data: Arc<RwLock<DataState>>,
    carts: Arc<RwLock<HashMap<Uuid, SharedCart>>>,
    recent_limit: usize,
}

impl AppState {
    pub fn new(
        data_source: Arc<dyn DataSource>,
        session_store: Arc<dyn SessionStore>,
        recent_limit: usize,
    ) -> Self {
        Self {
            data_source,
            session_store,
            data: Arc::new(RwLock::new(DataState::default())),
            carts: Arc::new(RwLock::new(HashMap::new())),
            recent_limit,
        }
    }

    pub fn session_store(&self) -> &dyn SessionStore {
        self.session_store.as_ref()
    }

    pub fn recent_limit(&self) -> usize {
        self.recent_limit
    }

    /// Reloads the snapshot. On failure the cache is emptied and the error
    /// kept, so readers see the failure instead of stale data.
    pub async fn refresh(&self) -> Result<Arc<DataSnapshot>, ScoutError> {
        let result = load_snapshot(self.data_source.as_ref()).await;

        let mut data = self.data.write().await;
        match result {
            Ok(snapshot) => {
                data.snapshot = Arc::new(snapshot);
                data.error = None;
                Ok(Arc::clone(&data.snapshot))
            }
            Err(e) => {
                data.snapshot = Arc::new(DataSnapshot::empty());
                data.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    pub async fn snapshot(&self) -> Result<Arc<DataSnapshot>, WebError> {
        let data = self.data.read().await;
        match &data.error {
            Some(msg) => Err(WebError::DataUnavailable(msg.clone())),
            None => Ok(Arc::clone(&data.snapshot)),
        }
    }

    pub async fn create_cart(&self) -> Uuid {
        let id = Uuid::new_v4();
        self.carts
            .write()
            .await
            .insert(id, Arc::new(RwLock::new(ScoutCart::new())));
        tracing::info!(cart_id = %id, "Created cart");
        id
    }

    pub async fn cart(&self, id: Uuid) -> Result<SharedCart, WebError> {
        self.carts
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(WebError::NotFound)
    }

    /// Drops the cart from the registry. Handles already held keep working.
    pub async fn remove_cart(&self, id: Uuid) -> Result<(), WebError> {
        self.carts
            .write()
            .await
            .remove(&id)
            .ok_or(WebError::NotFound)?;
        tracing::info!(cart_id = %id, "Removed cart");
        Ok(())
    }
}
