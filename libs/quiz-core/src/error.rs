//! Error types for quiz-core.

use thiserror::Error;

/// Result type alias using QuizError.
pub type Result<T> = std::result::Result<T, QuizError>;

/// Errors that can occur while running a quiz.
///
/// Parsing never fails and malformed answers are graded as wrong, so the
/// only failure left is the terminal itself going away.
#[derive(Debug, Error)]
pub enum QuizError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
