//! SQLite schema definitions.

/// Results table for a fresh store. An existing `results` table is used
/// as-is; `completed_at` is optional and only written when present.
pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS results (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    file_name TEXT NOT NULL,
    score INTEGER NOT NULL,
    total_questions INTEGER NOT NULL,
    completed_at TEXT
);
"#;

/// Column probe, read-only.
pub const RESULT_COLUMNS: &str = "PRAGMA table_info(results)";
