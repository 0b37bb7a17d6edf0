//! Interactive session: start prompt, document selection, quiz, persistence.

use crate::db::ResultRepository;
use crate::error::SessionError;
use crate::library::{list_documents, load_quiz};
use quiz_core::{run_quiz, QuizScore, ResultRecord};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

type Result<T> = std::result::Result<T, SessionError>;

/// A finished quiz whose result was saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOutcome {
    pub file_name: String,
    pub score: QuizScore,
    pub record_id: i64,
}

/// Drives one interactive quiz over the given input and output.
pub struct Session<'a, S, R, W> {
    store: &'a S,
    input: R,
    output: W,
}

impl<'a, S, R, W> Session<'a, S, R, W>
where
    S: ResultRepository,
    R: BufRead,
    W: Write,
{
    pub fn new(store: &'a S, input: R, output: W) -> Self {
        Self { store, input, output }
    }

    /// Run the whole session. Early exits are reported on the output before
    /// the error is returned; nothing is saved in that case.
    pub fn run(&mut self) -> Result<SessionOutcome> {
        let result = self.run_steps();
        if let Err(ref e) = result {
            if e.is_early_exit() {
                tracing::info!(reason = ?e, "session ended early");
                writeln!(self.output, "{}", e)?;
            }
        }
        result
    }

    fn run_steps(&mut self) -> Result<SessionOutcome> {
        let choice = self.prompt("Type 'start' to play or 'exit' to quit: ")?;
        if choice.to_lowercase() != "start" {
            return Err(SessionError::UserAbort);
        }

        let folder = PathBuf::from(self.prompt("Enter the folder path containing Word files: ")?);
        if !folder.is_dir() {
            return Err(SessionError::FolderNotFound(folder));
        }

        let documents = list_documents(&folder)?;
        if documents.is_empty() {
            return Err(SessionError::NoDocuments(folder));
        }

        writeln!(self.output, "Available Word files:")?;
        for (idx, name) in documents.iter().enumerate() {
            writeln!(self.output, "{}. {}", idx + 1, name)?;
        }

        let choice = self.prompt("Select a file by number: ")?;
        let file_name = select(&documents, &choice)
            .ok_or(SessionError::InvalidSelection(choice))?
            .to_string();

        self.play(&folder, file_name)
    }

    fn play(&mut self, folder: &Path, file_name: String) -> Result<SessionOutcome> {
        let quiz = load_quiz(&folder.join(&file_name))?;
        if quiz.is_empty() {
            return Err(SessionError::EmptyQuiz(file_name));
        }

        writeln!(self.output, "\nStarting the quiz...\n")?;
        let score = run_quiz(&quiz, &mut self.input, &mut self.output)?;

        let previous_best = self.store.best_score(&file_name)?;

        let record = ResultRecord::from_score(&file_name, score);
        let record_id = self.store.save_result(&record)?;
        tracing::debug!(
            record = %serde_json::to_string(&record).unwrap_or_default(),
            "saved result"
        );
        writeln!(
            self.output,
            "Results saved! File: {}, Score: {}/{}",
            file_name, score.correct, score.total
        )?;

        let attempts = self.store.results_for_file(&file_name)?.len();
        writeln!(self.output, "Attempts on {}: {}", file_name, attempts)?;

        if let Some(best) = previous_best {
            writeln!(
                self.output,
                "Best score for {}: {}/{}",
                best.file_name, best.score, best.total_questions
            )?;
        }

        Ok(SessionOutcome {
            file_name,
            score,
            record_id,
        })
    }

    /// Print a prompt and read one trimmed line; a closed input reads as "".
    fn prompt(&mut self, message: &str) -> Result<String> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line.trim().to_string())
    }
}

/// Resolve a 1-based menu choice. Only plain digits are accepted.
fn select<'d>(documents: &'d [String], choice: &str) -> Option<&'d str> {
    if choice.is_empty() || !choice.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let index: usize = choice.parse().ok()?;
    documents.get(index.checked_sub(1)?).map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn docs() -> Vec<String> {
        vec!["a.docx".to_string(), "b.docx".to_string()]
    }

    #[test]
    fn select_valid_numbers() {
        assert_eq!(select(&docs(), "1"), Some("a.docx"));
        assert_eq!(select(&docs(), "2"), Some("b.docx"));
        assert_eq!(select(&docs(), "02"), Some("b.docx"));
    }

    #[test]
    fn select_rejects_out_of_range_and_text() {
        assert_eq!(select(&docs(), "0"), None);
        assert_eq!(select(&docs(), "3"), None);
        assert_eq!(select(&docs(), ""), None);
        assert_eq!(select(&docs(), "-1"), None);
        assert_eq!(select(&docs(), "+1"), None);
        assert_eq!(select(&docs(), "one"), None);
        assert_eq!(select(&docs(), "99999999999999999999999"), None);
    }
}
