//! Error types for the quiz trainer.

use thiserror::Error;

/// Result type alias using QuizError.
pub type Result<T> = std::result::Result<T, QuizError>;

/// Errors that abort a run. A session cannot proceed meaningfully with a
/// corrupt question set, so there is no partial-result mode.
#[derive(Debug, Error)]
pub enum QuizError {
    #[error("failed to fetch the question document: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("answer line without a preceding question: {line}")]
    MalformedInput { line: String },

    #[error("failure log entry matches no question: {query}")]
    DanglingReference { query: String },

    #[error("failure log or cache i/o failed: {0}")]
    Persistence(#[from] std::io::Error),

    #[error("could not read configuration: {0}")]
    Config(#[from] serde_yaml::Error),
}
