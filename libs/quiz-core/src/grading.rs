//! Answer grading for quiz questions.

use crate::letters::resolve_response;
use crate::types::QuestionRecord;
use serde::{Deserialize, Serialize};

/// Result of grading one response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Grade {
    Correct,
    Incorrect { expected: String },
    /// The question has no `A:` line; it can never be answered correctly.
    NoAnswerRecorded,
}

impl Grade {
    pub fn is_correct(&self) -> bool {
        matches!(self, Self::Correct)
    }
}

/// Grade a raw response against a question.
///
/// The response goes through letter resolution first, then is compared to
/// the expected answer ignoring case and surrounding whitespace.
pub fn grade(question: &QuestionRecord, response: &str) -> Grade {
    let Some(expected) = question.answer.as_deref() else {
        return Grade::NoAnswerRecorded;
    };

    let resolved = resolve_response(response, &question.options);
    if !resolved.is_empty() && answers_match(&resolved, expected) {
        Grade::Correct
    } else {
        Grade::Incorrect {
            expected: expected.to_string(),
        }
    }
}

fn answers_match(given: &str, expected: &str) -> bool {
    given.trim().to_lowercase() == expected.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capitals() -> QuestionRecord {
        QuestionRecord::new("Capital of France?")
            .with_options(["Paris", "Rome", "Berlin"])
            .with_answer("Paris")
    }

    #[test]
    fn letter_answer_is_resolved() {
        assert_eq!(grade(&capitals(), "a"), Grade::Correct);
        assert_eq!(
            grade(&capitals(), "b"),
            Grade::Incorrect {
                expected: "Paris".to_string()
            }
        );
    }

    #[test]
    fn text_answer_is_case_insensitive() {
        assert!(grade(&capitals(), "paris").is_correct());
        assert!(grade(&capitals(), "  PARIS ").is_correct());
    }

    #[test]
    fn free_text_question() {
        let q = QuestionRecord::new("2+2?").with_answer("4");
        assert!(grade(&q, "4").is_correct());
        assert!(!grade(&q, "four").is_correct());
    }

    #[test]
    fn letter_is_literal_without_options() {
        let q = QuestionRecord::new("First letter?").with_answer("a");
        assert!(grade(&q, "A").is_correct());
    }

    #[test]
    fn empty_response_is_wrong() {
        assert!(!grade(&capitals(), "").is_correct());
        let blank = QuestionRecord::new("Blank?").with_answer("");
        assert!(!grade(&blank, "   ").is_correct());
    }

    #[test]
    fn missing_answer_is_never_correct() {
        let q = QuestionRecord::new("Unanswerable").with_options(["x"]);
        assert_eq!(grade(&q, "A"), Grade::NoAnswerRecorded);
        assert_eq!(grade(&q, ""), Grade::NoAnswerRecorded);
    }
}
