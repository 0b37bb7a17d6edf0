//! Local SQLite store for quiz results.

pub mod error;
pub mod repository;
pub mod schema;

pub use error::DbError;
pub use repository::{ResultRepository, SqliteResultStore};
