//! Repository pattern for database access.

use crate::db::error::DbError;
use crate::db::schema::{RESULT_COLUMNS, SCHEMA};
use chrono::{DateTime, Utc};
use quiz_core::ResultRecord;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;

type Result<T> = std::result::Result<T, DbError>;

/// Repository for quiz results.
pub trait ResultRepository {
    /// Append one result row, returning its row id.
    fn save_result(&self, record: &ResultRecord) -> Result<i64>;
    /// All results for a file, oldest first.
    fn results_for_file(&self, file_name: &str) -> Result<Vec<ResultRecord>>;
    /// Highest score recorded for a file (ties go to the earliest run).
    fn best_score(&self, file_name: &str) -> Result<Option<ResultRecord>>;
}

/// SQLite implementation of the result repository.
pub struct SqliteResultStore {
    conn: Connection,
    /// Tables made by other tools may only carry the three core columns.
    has_completed_at: bool,
}

impl SqliteResultStore {
    /// Open database at path, creating the results table if it is missing.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        Connection::open(path)
            .and_then(Self::from_connection)
            .map_err(|source| DbError::Unavailable {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Open in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self::from_connection(conn)?)
    }

    fn from_connection(conn: Connection) -> rusqlite::Result<Self> {
        conn.execute_batch(SCHEMA)?;
        let has_completed_at = Self::column_names(&conn)?
            .iter()
            .any(|c| c == "completed_at");
        if !has_completed_at {
            tracing::debug!("results table has no completed_at column");
        }
        Ok(Self {
            conn,
            has_completed_at,
        })
    }

    fn column_names(conn: &Connection) -> rusqlite::Result<Vec<String>> {
        let mut stmt = conn.prepare(RESULT_COLUMNS)?;
        let names = stmt
            .query_map([], |row| row.get::<_, String>(1))?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(names)
    }

    fn select_columns(&self) -> &'static str {
        if self.has_completed_at {
            "file_name, score, total_questions, completed_at"
        } else {
            "file_name, score, total_questions, NULL"
        }
    }

    fn row_to_record(row: &Row<'_>) -> rusqlite::Result<ResultRecord> {
        Ok(ResultRecord {
            file_name: row.get(0)?,
            score: row.get(1)?,
            total_questions: row.get(2)?,
            completed_at: row
                .get::<_, Option<String>>(3)?
                .and_then(|s| DateTime::parse_from_rfc3339(&s).ok())
                .map(|dt| dt.with_timezone(&Utc)),
        })
    }
}

impl ResultRepository for SqliteResultStore {
    fn save_result(&self, record: &ResultRecord) -> Result<i64> {
        if record.score > record.total_questions {
            return Err(DbError::InvalidResult(format!(
                "score {} exceeds total {}",
                record.score, record.total_questions
            )));
        }

        if self.has_completed_at {
            let completed_at = record.completed_at.map(|d| d.to_rfc3339());
            self.conn.execute(
                "INSERT INTO results (file_name, score, total_questions, completed_at) VALUES (?1, ?2, ?3, ?4)",
                params![record.file_name, record.score, record.total_questions, completed_at],
            )?;
        } else {
            self.conn.execute(
                "INSERT INTO results (file_name, score, total_questions) VALUES (?1, ?2, ?3)",
                params![record.file_name, record.score, record.total_questions],
            )?;
        }
        Ok(self.conn.last_insert_rowid())
    }

    fn results_for_file(&self, file_name: &str) -> Result<Vec<ResultRecord>> {
        let sql = format!(
            "SELECT {} FROM results WHERE file_name = ?1 ORDER BY rowid",
            self.select_columns()
        );
        let mut stmt = self.conn.prepare(&sql)?;

        let records = stmt
            .query_map(params![file_name], Self::row_to_record)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(records)
    }

    fn best_score(&self, file_name: &str) -> Result<Option<ResultRecord>> {
        let sql = format!(
            "SELECT {} FROM results
             WHERE file_name = ?1
             ORDER BY CAST(score AS REAL) / MAX(total_questions, 1) DESC, rowid ASC
             LIMIT 1",
            self.select_columns()
        );
        self.conn
            .query_row(&sql, params![file_name], Self::row_to_record)
            .optional()
            .map_err(Into::into)
    }
}
