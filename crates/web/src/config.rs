use anyhow::{Context, Result};

const DEFAULT_RECENT_SCORES_LIMIT: usize = 10;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub recent_scores_limit: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let recent_scores_limit = match std::env::var("RECENT_SCORES_LIMIT") {
            Ok(raw) => raw
                .parse()
                .context("RECENT_SCORES_LIMIT must be a non-negative number")?,
            Err(_) => DEFAULT_RECENT_SCORES_LIMIT,
        };

        Ok(Self {
            host: std::env::var("HOST").context("Cannot load HOST env variable")?,
            port: std::env::var("PORT")
                .context("PORT must be a number")?
                .parse()?,
            database_url: std::env::var("DATABASE_URL")
                .context("Cannot load DATABASE_URL env variable")?,
            recent_scores_limit,
        })
    }
}
