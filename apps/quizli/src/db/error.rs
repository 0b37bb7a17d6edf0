//! Result store error types.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DbError {
    /// The store could not be opened or prepared at startup.
    #[error("results store {} is unavailable: {source}", .path.display())]
    Unavailable {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("invalid result: {0}")]
    InvalidResult(String),
}
