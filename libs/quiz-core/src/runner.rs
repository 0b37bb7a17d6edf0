//! Interactive quiz loop.

use std::io::{BufRead, Write};

use crate::error::Result;
use crate::grading::{grade, Grade};
use crate::letters::OptionLetter;
use crate::types::{QuestionRecord, QuizScore};

/// Ask every question in order, grade each response and report the score.
///
/// A closed input stream counts as an empty (wrong) response so the run
/// always reaches the final score.
pub fn run_quiz<R, W>(quiz: &[QuestionRecord], input: &mut R, output: &mut W) -> Result<QuizScore>
where
    R: BufRead,
    W: Write,
{
    let mut correct = 0u32;

    for (idx, item) in quiz.iter().enumerate() {
        present(idx + 1, item, output)?;

        write!(output, "Your Answer: ")?;
        output.flush()?;
        let response = read_response(input)?;

        let result = grade(item, &response);
        tracing::debug!(question = idx + 1, ?result, "graded response");

        match result {
            Grade::Correct => {
                correct += 1;
                writeln!(output, "Correct!\n")?;
            }
            Grade::Incorrect { expected } => {
                writeln!(output, "Wrong! The correct answer is: {}\n", expected)?;
            }
            Grade::NoAnswerRecorded => {
                writeln!(output, "Wrong! No answer recorded for this question.\n")?;
            }
        }
    }

    let score = QuizScore::new(correct, quiz.len() as u32);
    writeln!(output, "\nYour Final Score is: {}/{}", score.correct, score.total)?;
    Ok(score)
}

fn present<W: Write>(number: usize, item: &QuestionRecord, output: &mut W) -> Result<()> {
    writeln!(output, "Question {}: {}", number, item.question)?;
    for (idx, option) in item.options.iter().enumerate() {
        writeln!(output, "{}. {}", OptionLetter::label(idx), option)?;
    }
    Ok(())
}

fn read_response<R: BufRead>(input: &mut R) -> Result<String> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    fn run(quiz: &[QuestionRecord], answers: &str) -> (QuizScore, String) {
        let mut input = Cursor::new(answers.as_bytes().to_vec());
        let mut output = Vec::new();
        let score = run_quiz(quiz, &mut input, &mut output).unwrap();
        (score, String::from_utf8(output).unwrap())
    }

    #[test]
    fn letter_answer_scores() {
        let quiz = vec![QuestionRecord::new("2+2?").with_options(["3", "4"]).with_answer("4")];
        let (score, transcript) = run(&quiz, "B\n");

        assert_eq!(score, QuizScore::new(1, 1));
        assert!(transcript.contains("Question 1: 2+2?"));
        assert!(transcript.contains("A. 3\nB. 4\n"));
        assert!(transcript.contains("Correct!"));
        assert!(transcript.ends_with("Your Final Score is: 1/1\n"));
    }

    #[test]
    fn wrong_answer_shows_expected() {
        let quiz = vec![QuestionRecord::new("Capital?").with_answer("Paris")];
        let (score, transcript) = run(&quiz, "Rome\n");

        assert_eq!(score.correct, 0);
        assert!(transcript.contains("Wrong! The correct answer is: Paris"));
    }

    #[test]
    fn missing_answer_is_reported() {
        let quiz = vec![QuestionRecord::new("Open question")];
        let (score, transcript) = run(&quiz, "anything\n");

        assert_eq!(score, QuizScore::new(0, 1));
        assert!(transcript.contains("No answer recorded"));
    }

    #[test]
    fn closed_input_counts_as_wrong() {
        let quiz = vec![
            QuestionRecord::new("One").with_answer("1"),
            QuestionRecord::new("Two").with_answer("2"),
        ];
        let (score, transcript) = run(&quiz, "1\n");

        assert_eq!(score, QuizScore::new(1, 2));
        assert!(transcript.contains("Question 2: Two"));
    }

    #[test]
    fn score_stays_within_bounds() {
        let quiz: Vec<_> = (0..5)
            .map(|i| QuestionRecord::new(format!("Q{i}")).with_answer(i.to_string()))
            .collect();
        let (score, _) = run(&quiz, "0\nx\n2\n\n4\n");

        assert_eq!(score, QuizScore::new(3, 5));
        assert!(score.correct <= score.total);
    }

    #[test]
    fn empty_quiz_scores_zero() {
        let (score, transcript) = run(&[], "");
        assert_eq!(score, QuizScore::new(0, 0));
        assert!(transcript.contains("0/0"));
    }
}
