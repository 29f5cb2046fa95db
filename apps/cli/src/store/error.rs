//! Store error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("could not serialize library: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("stored library is corrupt: {0}")]
    Corrupt(#[source] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
