use thiserror::Error;

pub type Result<T> = std::result::Result<T, ReporterError>;

#[derive(Error, Debug)]
pub enum ReporterError {
    #[error("Storage error: {0}")]
    StorageError(#[from] storage::error::StorageError),

    #[error(transparent)]
    ScoutError(#[from] storage::error::ScoutError),

    #[error("Failed to write output: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to encode JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Player {0} not found")]
    PlayerNotFound(i64),
}
