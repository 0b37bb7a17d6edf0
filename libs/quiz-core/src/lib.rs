//! Core quiz library used by the `quizli` command-line app.
//!
//! Provides:
//! - Line-prefix parser turning document paragraphs into questions
//! - Option letter lookup (A, B, C, ...) and letter resolution
//! - Case-insensitive answer grading
//! - Interactive quiz runner over any reader/writer pair
//! - Shared types (QuestionRecord, ResultRecord, QuizScore)

pub mod error;
pub mod grading;
pub mod letters;
pub mod parser;
pub mod runner;
pub mod types;

pub use error::{QuizError, Result};
pub use grading::{grade, Grade};
pub use letters::{resolve_response, OptionLetter};
pub use parser::{parse, parse_lines};
pub use runner::run_quiz;
pub use types::{QuestionRecord, QuizScore, QuizSequence, ResultRecord};
