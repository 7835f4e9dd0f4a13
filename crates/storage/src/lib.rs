pub mod cart;
pub mod dto;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;
pub mod traits;

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::error::Result;

pub use cart::{DEFAULT_CART_NAME, ScoutCart};
pub use error::{ScoutError, StorageError};
pub use traits::{DataSource, SESSION_NAMESPACE, SessionStore};

const MAX_CONNECTIONS: u32 = 10;

/// Connection pool to the hosted Postgres database holding players, plays,
/// scores and saved scouting sessions.
#[derive(Debug, Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub async fn new(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }
}
