//! Markdown question parser.
//!
//! Recognizes three line shapes:
//!
//! ```markdown
//! ### Which statements about X are true?
//! - [ ] A wrong option
//! - [x] A correct option
//! ```
//!
//! A `###` heading starts a new question; checklist items attach to the most
//! recently started question, in source order. Every other line is ignored.

use crate::error::{QuizError, Result};
use crate::traits::{Answer, Question};

const QUERY_MARKER: &str = "###";
const WRONG_MARKER: &str = "- [ ] ";
const RIGHT_MARKER: &str = "- [x] ";

/// Parse document lines into questions, in source order.
///
/// An answer line before the first heading has no question to attach to and
/// fails with [`QuizError::MalformedInput`].
pub fn parse_questions<S: AsRef<str>>(lines: &[S]) -> Result<Vec<Question>> {
    let mut questions: Vec<Question> = vec![];
    for line in lines.iter() {
        let line = line.as_ref();
        if line.starts_with(QUERY_MARKER) {
            questions.push(Question::new(line));
        } else if let Some(text) = line.strip_prefix(WRONG_MARKER) {
            attach(&mut questions, line, text, false)?;
        } else if let Some(text) = line.strip_prefix(RIGHT_MARKER) {
            attach(&mut questions, line, text, true)?;
        }
    }
    Ok(questions)
}

fn attach(questions: &mut [Question], line: &str, text: &str, correct: bool) -> Result<()> {
    let current = questions
        .last_mut()
        .ok_or_else(|| QuizError::MalformedInput {
            line: line.to_owned(),
        })?;
    current.answers.push(Answer::new(text, correct));
    Ok(())
}
