//! Runtime configuration read from the environment.

use std::path::PathBuf;

/// Results database used when `QUIZLI_DB` is unset.
pub const DEFAULT_DB_FILE: &str = "quizli_results.db";

/// Log filter used when `RUST_LOG` is unset. Logs go to stderr, so the
/// default stays quiet during a quiz.
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub db_path: PathBuf,
    pub log_filter: String,
}

impl Config {
    /// Build from process environment. Call `dotenvy::dotenv()` first to
    /// pick up a `.env` file.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let db_path = lookup("QUIZLI_DB")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_FILE));

        let log_filter = lookup("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Self { db_path, log_filter }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config.db_path, PathBuf::from("quizli_results.db"));
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn reads_overrides() {
        let env: HashMap<&str, &str> =
            HashMap::from([("QUIZLI_DB", "/tmp/scores.db"), ("RUST_LOG", "quizli=debug")]);
        let config = Config::from_lookup(|k| env.get(k).map(|v| v.to_string()));
        assert_eq!(config.db_path, PathBuf::from("/tmp/scores.db"));
        assert_eq!(config.log_filter, "quizli=debug");
    }

    #[test]
    fn blank_db_path_falls_back() {
        let config = Config::from_lookup(|k| (k == "QUIZLI_DB").then(|| "  ".to_string()));
        assert_eq!(config.db_path, PathBuf::from(DEFAULT_DB_FILE));
    }
}
