//! The scout's working selection of players.
//!
//! Every mutation builds a fresh entry list and swaps it in whole, so a
//! reader holding the result of [`ScoutCart::entries`] never sees a partially
//! applied change. Shared carts go behind a lock in the host.

pub mod entry;
pub mod export;
pub mod stats;

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::error::ScoutError;
use crate::models::{CartSession, SessionPlayer};
use crate::traits::{SESSION_NAMESPACE, SessionStore};

pub use entry::CartEntry;
pub use stats::{AverageMetrics, CartStats};

pub const DEFAULT_CART_NAME: &str = "Scout Session";

#[derive(Debug, Clone)]
pub struct ScoutCart {
    entries: Arc<Vec<CartEntry>>,
    name: String,
    is_open: bool,
}

impl Default for ScoutCart {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoutCart {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Vec::new()),
            name: DEFAULT_CART_NAME.to_string(),
            is_open: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Presentation flag. Never changed by data mutations.
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn set_open(&mut self, open: bool) {
        self.is_open = open;
    }

    /// Current entries in insertion order.
    pub fn entries(&self) -> Arc<Vec<CartEntry>> {
        Arc::clone(&self.entries)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, player_id: i64) -> bool {
        self.entries.iter().any(|e| e.id == player_id)
    }

    pub fn get(&self, player_id: i64) -> Option<&CartEntry> {
        self.entries.iter().find(|e| e.id == player_id)
    }

    /// Appends the entry, stamping `added_at`. A player already in the cart
    /// is left untouched and `false` is returned.
    pub fn add_player(&mut self, mut entry: CartEntry) -> bool {
        if self.contains(entry.id) {
            tracing::debug!(player_id = entry.id, "Player already in cart");
            return false;
        }

        entry.added_at = Utc::now();
        tracing::debug!(player_id = entry.id, cart = %self.name, "Adding player to cart");

        let mut next = Vec::with_capacity(self.entries.len() + 1);
        next.extend(self.entries.iter().cloned());
        next.push(entry);
        self.entries = Arc::new(next);
        true
    }

    /// Returns whether an entry was removed.
    pub fn remove_player(&mut self, player_id: i64) -> bool {
        if !self.contains(player_id) {
            return false;
        }

        let next: Vec<CartEntry> = self
            .entries
            .iter()
            .filter(|e| e.id != player_id)
            .cloned()
            .collect();
        self.entries = Arc::new(next);
        tracing::debug!(player_id, "Removed player from cart");
        true
    }

    /// Returns whether a matching entry was found.
    pub fn update_notes(&mut self, player_id: i64, notes: impl Into<String>) -> bool {
        if !self.contains(player_id) {
            return false;
        }

        let notes = notes.into();
        let next: Vec<CartEntry> = self
            .entries
            .iter()
            .map(|e| {
                if e.id == player_id {
                    CartEntry {
                        notes: notes.clone(),
                        ..e.clone()
                    }
                } else {
                    e.clone()
                }
            })
            .collect();
        self.entries = Arc::new(next);
        true
    }

    /// Empties the cart and restores the default name. The open flag keeps
    /// its last value.
    pub fn clear(&mut self) {
        self.entries = Arc::new(Vec::new());
        self.name = DEFAULT_CART_NAME.to_string();
        tracing::debug!("Cleared cart");
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn stats(&self) -> CartStats {
        CartStats::from_entries(&self.entries)
    }

    pub fn export_delimited(&self) -> crate::error::Result<String> {
        export::export_delimited(&self.entries)
    }

    pub fn export_filename(&self, date: NaiveDate) -> String {
        export::export_filename(&self.name, date)
    }

    /// Builds the session record for the current contents under a new id.
    pub fn to_session(&self) -> CartSession {
        CartSession {
            id: format!("session_{}", Uuid::new_v4().simple()),
            name: self.name.clone(),
            players: self
                .entries
                .iter()
                .map(|e| SessionPlayer {
                    player_id: e.id,
                    notes: e.notes.clone(),
                })
                .collect(),
            created_at: Utc::now(),
        }
    }

    /// Persists the current contents and returns the new session id.
    pub async fn save_session(&self, store: &dyn SessionStore) -> Result<String, ScoutError> {
        let session = self.to_session();

        if let Err(e) = store.append(SESSION_NAMESPACE, &session).await {
            tracing::error!("Error saving cart session: {}", e);
            return Err(ScoutError::Save(e));
        }

        tracing::info!(
            session_id = %session.id,
            players = session.players.len(),
            "Saved cart session"
        );
        Ok(session.id)
    }
}
