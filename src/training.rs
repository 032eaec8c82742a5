use std::io::{BufRead, Write};

use crate::error::Result;
use crate::traits::{Question, Recorder};

/*
Implements the session flow;
    Present main question i
    Present review question i, if the review set has one

    Per question;
        Print query and numbered options
        Read one response line
        Compare against the expected ordinals
        On mismatch, record the query as failed
*/

/// Tally of one session.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionStats {
    pub asked: usize,
    pub correct: usize,
}

/// Drives one interactive session.
///
/// Generic over its console so sessions run against stdin/stdout in the
/// binary and against in-memory buffers in tests.
pub struct Training {
    questions: Vec<Question>,
    review: Vec<Question>,
    recorder: Box<dyn Recorder>,
}

impl Training {
    pub fn new(
        questions: Vec<Question>,
        review: Vec<Question>,
        recorder: Box<dyn Recorder>,
    ) -> Self {
        Training {
            questions,
            review,
            recorder,
        }
    }

    /// Run the full interleaved sequence, consuming one input line per
    /// question presented.
    ///
    /// Review question `i` follows main question `i`, so review questions
    /// ride along with the main deck instead of forming a block of their
    /// own. A review set longer than the main deck is truncated to the
    /// deck's length for this run; the log keeps the tail for the next one.
    pub fn run<I: BufRead, O: Write>(
        &mut self,
        input: &mut I,
        output: &mut O,
    ) -> Result<SessionStats> {
        if self.review.len() > self.questions.len() {
            log::debug!(
                "review set exceeds the deck by {} question(s); tail not presented this run",
                self.review.len() - self.questions.len()
            );
        }

        let mut stats = SessionStats::default();
        for i in 0..self.questions.len() {
            Self::tally(
                ask(&self.questions[i], &mut *self.recorder, input, output)?,
                &mut stats,
            );
            if let Some(review_question) = self.review.get(i) {
                Self::tally(
                    ask(review_question, &mut *self.recorder, input, output)?,
                    &mut stats,
                );
            }
        }
        Ok(stats)
    }

    fn tally(correct: bool, stats: &mut SessionStats) {
        stats.asked += 1;
        if correct {
            stats.correct += 1;
        }
    }
}

/// Present one question, read one response line, judge it.
///
/// Judging is exact string equality against the expected-ordinal string:
/// `"31"` for an expected `"13"` is wrong, as is any stray whitespace
/// inside the response. Only the line terminator is stripped.
fn ask<I: BufRead, O: Write>(
    question: &Question,
    recorder: &mut dyn Recorder,
    input: &mut I,
    output: &mut O,
) -> Result<bool> {
    writeln!(output)?;
    writeln!(output, "{}", question.query)?;
    for (index, answer) in question.answers.iter().enumerate() {
        writeln!(output, "{} {}", index + 1, answer.text)?;
    }
    output.flush()?;

    let mut response = String::new();
    input.read_line(&mut response)?;
    let response = response.trim_end_matches(['\r', '\n']);

    let expected = question.expected_response();
    if response == expected {
        writeln!(output, "Correct")?;
        Ok(true)
    } else {
        writeln!(output, "False ({expected})")?;
        recorder.record_failure(&question.query)?;
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recorder::MemoryRecorder;
    use crate::traits::Answer;
    use std::io::Cursor;

    fn question(query: &str, answers: &[(&str, bool)]) -> Question {
        let mut q = Question::new(query);
        for (text, correct) in answers {
            q.answers.push(Answer::new(text, *correct));
        }
        q
    }

    fn run_session(
        questions: Vec<Question>,
        review: Vec<Question>,
        responses: &str,
    ) -> (SessionStats, String, Vec<String>) {
        let mut training = Training::new(questions, review, Box::new(MemoryRecorder::new()));
        let mut input = Cursor::new(responses.to_owned());
        let mut output = vec![];
        let stats = training.run(&mut input, &mut output).expect("session runs");
        let transcript = String::from_utf8(output).expect("utf-8 transcript");
        let failures = training.recorder.failures().expect("memory recorder");
        (stats, transcript, failures)
    }

    #[test]
    fn correct_response_leaves_no_trace() {
        let q = question("### Q", &[("wrong", false), ("right", true)]);
        let (stats, transcript, failures) = run_session(vec![q], vec![], "2\n");
        assert_eq!(stats, SessionStats { asked: 1, correct: 1 });
        assert!(transcript.contains("### Q"));
        assert!(transcript.contains("1 wrong"));
        assert!(transcript.contains("2 right"));
        assert!(transcript.contains("Correct"));
        assert!(failures.is_empty());
    }

    #[test]
    fn reversed_ordinals_are_judged_incorrect() {
        let q = question("### Q", &[("a", true), ("b", false), ("c", true)]);
        let (stats, transcript, failures) = run_session(vec![q], vec![], "31\n");
        assert_eq!(stats, SessionStats { asked: 1, correct: 0 });
        assert!(transcript.contains("False (13)"));
        assert_eq!(failures, vec!["### Q"]);
    }

    #[test]
    fn empty_response_is_judged_against_the_expected_string() {
        let q = question("### Q", &[("right", true)]);
        let (stats, transcript, failures) = run_session(vec![q], vec![], "\n");
        assert_eq!(stats.correct, 0);
        assert!(transcript.contains("False (1)"));
        assert_eq!(failures, vec!["### Q"]);
    }

    #[test]
    fn review_questions_interleave_after_their_main_index() {
        let main = vec![
            question("### M1", &[("a", true)]),
            question("### M2", &[("a", true)]),
        ];
        let review = vec![question("### R1", &[("a", true)])];
        let (stats, transcript, _) = run_session(main, review, "1\n1\n1\n");

        assert_eq!(stats, SessionStats { asked: 3, correct: 3 });
        let m2 = transcript.find("### M2").expect("M2 asked");
        let r1 = transcript.find("### R1").expect("R1 asked");
        assert!(r1 < m2, "review question should follow main question 1");
    }

    #[test]
    fn review_tail_beyond_the_deck_is_not_presented() {
        let main = vec![question("### M1", &[("a", true)])];
        let review = vec![
            question("### R1", &[("a", true)]),
            question("### R2", &[("a", true)]),
        ];
        let (stats, transcript, _) = run_session(main, review, "1\n1\n1\n");

        assert_eq!(stats.asked, 2);
        assert!(transcript.contains("### R1"));
        assert!(!transcript.contains("### R2"));
    }

    #[test]
    fn repeated_failures_of_one_query_are_recorded_once() {
        let q = question("### Q", &[("right", true)]);
        let main = vec![q.clone()];
        let review = vec![q];
        let (stats, _, failures) = run_session(main, review, "9\n9\n");

        assert_eq!(stats, SessionStats { asked: 2, correct: 0 });
        assert_eq!(failures, vec!["### Q"]);
    }
}
