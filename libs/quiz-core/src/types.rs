//! Core types for the quiz application.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One parsed question with its options and expected answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub question: String,
    pub options: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
}

impl QuestionRecord {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            options: Vec::new(),
            answer: None,
        }
    }

    /// Builder-style helper, mostly for tests and fixtures.
    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_answer(mut self, answer: impl Into<String>) -> Self {
        self.answer = Some(answer.into());
        self
    }

    /// Whether the question is multiple choice (otherwise free text).
    pub fn has_options(&self) -> bool {
        !self.options.is_empty()
    }

    pub fn option(&self, index: usize) -> Option<&str> {
        self.options.get(index).map(String::as_str)
    }
}

/// Questions in document order.
pub type QuizSequence = Vec<QuestionRecord>;

/// Outcome of a completed quiz run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizScore {
    pub correct: u32,
    pub total: u32,
}

impl QuizScore {
    pub fn new(correct: u32, total: u32) -> Self {
        debug_assert!(correct <= total);
        Self { correct, total }
    }
}

/// Persisted result of one quiz run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub file_name: String,
    pub score: u32,
    pub total_questions: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl ResultRecord {
    /// Build a record for a run that just finished.
    pub fn from_score(file_name: impl Into<String>, score: QuizScore) -> Self {
        Self {
            file_name: file_name.into(),
            score: score.correct,
            total_questions: score.total,
            completed_at: Some(Utc::now()),
        }
    }
}
