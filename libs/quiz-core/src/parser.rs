//! Line-prefix parser for quiz documents.
//!
//! # Format
//! ```text
//! Q: What is the capital of France?
//! - Paris
//! - Rome
//! - Berlin
//! A: Paris
//!
//! Q: 2 + 2?
//! A: 4
//! ```
//!
//! `Q:` opens a question, `-` adds an option to the open question and `A:`
//! sets its answer (the last `A:` wins). Anything else is ignored, as are
//! option and answer lines that appear before the first question.

use crate::types::{QuestionRecord, QuizSequence};

/// Parse newline-separated text into questions.
pub fn parse(content: &str) -> QuizSequence {
    parse_lines(content.lines())
}

/// Parse an ordered sequence of paragraph lines into questions.
///
/// Lines are trimmed and blank lines skipped, so raw paragraphs can be
/// passed straight through.
pub fn parse_lines<I, S>(lines: I) -> QuizSequence
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parser = Parser::new();
    for line in lines {
        parser.process_line(line.as_ref());
    }
    parser.finalize()
}

struct QuestionBuilder {
    question: String,
    options: Vec<String>,
    answer: Option<String>,
}

impl QuestionBuilder {
    fn new(question: &str) -> Self {
        Self {
            question: question.to_string(),
            options: Vec::new(),
            answer: None,
        }
    }

    fn build(self) -> QuestionRecord {
        QuestionRecord {
            question: self.question,
            options: self.options,
            answer: self.answer,
        }
    }
}

struct Parser {
    current: Option<QuestionBuilder>,
    quiz: QuizSequence,
}

impl Parser {
    fn new() -> Self {
        Self {
            current: None,
            quiz: Vec::new(),
        }
    }

    fn process_line(&mut self, line: &str) {
        match Self::parse_line(line) {
            LineType::Question(text) => self.handle_question(text),
            LineType::Option(text) => {
                if let Some(ref mut builder) = self.current {
                    builder.options.push(text.to_string());
                }
            }
            LineType::Answer(text) => {
                if let Some(ref mut builder) = self.current {
                    builder.answer = Some(text.to_string());
                }
            }
            LineType::Other => {}
        }
    }

    fn parse_line(line: &str) -> LineType<'_> {
        let trimmed = line.trim();

        if let Some(rest) = trimmed.strip_prefix("Q:") {
            LineType::Question(rest.trim())
        } else if let Some(rest) = trimmed.strip_prefix('-') {
            LineType::Option(rest.trim())
        } else if let Some(rest) = trimmed.strip_prefix("A:") {
            LineType::Answer(rest.trim())
        } else {
            LineType::Other
        }
    }

    fn handle_question(&mut self, text: &str) {
        self.flush();
        self.current = Some(QuestionBuilder::new(text));
    }

    fn flush(&mut self) {
        if let Some(builder) = self.current.take() {
            self.quiz.push(builder.build());
        }
    }

    fn finalize(mut self) -> QuizSequence {
        self.flush();
        tracing::debug!(questions = self.quiz.len(), "parsed quiz");
        self.quiz
    }
}

enum LineType<'a> {
    Question(&'a str),
    Option(&'a str),
    Answer(&'a str),
    Other,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_single_question() {
        let quiz = parse_lines(["Q: 2+2?", "- 3", "- 4", "A: 4"]);
        assert_eq!(
            quiz,
            vec![QuestionRecord::new("2+2?").with_options(["3", "4"]).with_answer("4")]
        );
    }

    #[test]
    fn parse_free_text_question() {
        let quiz = parse("Q: Capital of France?\nA: Paris");
        assert_eq!(quiz.len(), 1);
        assert!(quiz[0].options.is_empty());
        assert_eq!(quiz[0].answer.as_deref(), Some("Paris"));
    }

    #[test]
    fn parse_multiple_questions_in_order() {
        let quiz = parse("Q: First\nA: 1\n\nQ: Second\nA: 2\nQ: Third");
        let questions: Vec<_> = quiz.iter().map(|q| q.question.as_str()).collect();
        assert_eq!(questions, vec!["First", "Second", "Third"]);
        assert_eq!(quiz[2].answer, None);
    }

    #[test]
    fn no_question_lines_yields_empty_quiz() {
        assert!(parse("").is_empty());
        assert!(parse("Just a title\n- stray option\nA: stray answer").is_empty());
    }

    #[test]
    fn lines_before_first_question_are_dropped() {
        let quiz = parse("- orphan\nA: orphan\nQ: Real?\n- yes\nA: yes");
        assert_eq!(quiz.len(), 1);
        assert_eq!(quiz[0].options, vec!["yes"]);
        assert_eq!(quiz[0].answer.as_deref(), Some("yes"));
    }

    #[test]
    fn last_answer_wins() {
        let quiz = parse("Q: Pick\nA: first\nA: second");
        assert_eq!(quiz[0].answer.as_deref(), Some("second"));
    }

    #[test]
    fn options_keep_document_order() {
        let quiz = parse("Q: Cities\n- Paris\n- Rome\n- Berlin\nQ: Next\n- Oslo");
        assert_eq!(quiz[0].options, vec!["Paris", "Rome", "Berlin"]);
        assert_eq!(quiz[1].options, vec!["Oslo"]);
    }

    #[test]
    fn unrecognised_lines_are_ignored() {
        let quiz = parse("Q: Which?\nSome explanation\n- a\nq: lowercase marker\nA: a");
        assert_eq!(quiz.len(), 1);
        assert_eq!(quiz[0].options, vec!["a"]);
    }

    #[test]
    fn markers_are_trimmed() {
        let quiz = parse_lines(["   Q:   Spaced?   ", "  -   opt  ", " A:  ans "]);
        assert_eq!(quiz[0].question, "Spaced?");
        assert_eq!(quiz[0].options, vec!["opt"]);
        assert_eq!(quiz[0].answer.as_deref(), Some("ans"));
    }

    #[test]
    fn question_count_matches_marker_count() {
        let text = (1..=7)
            .map(|i| format!("Q: question {i}\n- x\nA: x"))
            .collect::<Vec<_>>()
            .join("\n");
        assert_eq!(parse(&text).len(), 7);
    }
}
