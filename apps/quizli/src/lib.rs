//! QuizLI: take quizzes written in Word documents from the terminal.

pub mod banner;
pub mod config;
pub mod db;
pub mod error;
pub mod library;
pub mod session;

use anyhow::Context;
use config::Config;
use db::SqliteResultStore;
use session::Session;
use std::io;

pub fn run(config: &Config) -> anyhow::Result<()> {
    // The store must be usable before the quiz starts.
    let store = SqliteResultStore::open(&config.db_path).with_context(|| {
        format!("failed to open results database {}", config.db_path.display())
    })?;
    tracing::debug!(db = %config.db_path.display(), "opened results store");

    let stdout = io::stdout();
    let mut output = stdout.lock();
    banner::display_title(&mut output)?;

    let stdin = io::stdin();
    let mut session = Session::new(&store, stdin.lock(), output);

    match session.run() {
        Ok(outcome) => {
            tracing::info!(
                file = %outcome.file_name,
                score = outcome.score.correct,
                total = outcome.score.total,
                "quiz completed"
            );
            Ok(())
        }
        Err(e) if e.is_early_exit() => Ok(()),
        Err(e) => Err(e).context("quiz session failed"),
    }
}
