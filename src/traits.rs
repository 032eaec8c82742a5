use serde::{Deserialize, Serialize};

use crate::error::Result;

/// One answer option below a question heading.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Answer {
    /// The option text, marker prefix stripped.
    pub text: String,
    /// Whether this option is part of the expected response.
    pub correct: bool,
}

impl Answer {
    pub fn new(text: &str, correct: bool) -> Self {
        Answer {
            text: text.to_owned(),
            correct,
        }
    }
}

/// A question with its ordered answer options.
///
/// Answer order is significant: it fixes the ordinals shown on the console
/// and the encoding of [`Question::expected_response`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Question {
    /// The prompt, verbatim from its source line, heading marker included.
    pub query: String,
    /// The options, in source order.
    pub answers: Vec<Answer>,
}

impl Question {
    pub fn new(query: &str) -> Self {
        Question {
            query: query.to_owned(),
            answers: vec![],
        }
    }

    /// Concatenated 1-based ordinals of all correct answers, in answer
    /// order. `"13"` means the first and third options; a question without
    /// correct options expects the empty string. Single- and multi-select
    /// questions are encoded uniformly.
    pub fn expected_response(&self) -> String {
        self.answers
            .iter()
            .enumerate()
            .filter(|(_, answer)| answer.correct)
            .map(|(index, _)| (index + 1).to_string())
            .collect()
    }
}

/// Something to track the queries that were answered incorrectly.
pub trait Recorder: std::fmt::Debug {
    /// Store a failed query, unless it is already recorded.
    fn record_failure(&mut self, query: &str) -> Result<()>;

    /// Retrieve all recorded queries, oldest first.
    fn failures(&self) -> Result<Vec<String>>;
}
