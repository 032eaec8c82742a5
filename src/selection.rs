//! Question selection: shuffling the deck and rebuilding the review set.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{QuizError, Result};
use crate::traits::Question;

/// Shuffle questions in place with a caller-owned generator.
///
/// Injecting the generator keeps sessions reproducible under a fixed seed.
pub fn shuffle<R: Rng>(questions: &mut [Question], rng: &mut R) {
    questions.shuffle(rng);
}

/// Rebuild the review set from failure-log lines.
///
/// Each log line must equal the query of some question in `questions`; the
/// result holds one question per line, in log order. A line matching no
/// question fails with [`QuizError::DanglingReference`] instead of indexing
/// blindly.
pub fn build_review_set<S: AsRef<str>>(
    questions: &[Question],
    log_lines: &[S],
) -> Result<Vec<Question>> {
    log_lines
        .iter()
        .map(|line| {
            let line = line.as_ref();
            questions
                .iter()
                .find(|q| q.query == line)
                .cloned()
                .ok_or_else(|| QuizError::DanglingReference {
                    query: line.to_owned(),
                })
        })
        .collect()
}
