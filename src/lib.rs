//! Terminal trainer for markdown multiple-choice question decks.
//!
//! A deck is a markdown document in which `###` headings are question
//! prompts and `- [ ] ` / `- [x] ` list items below them are the answer
//! options. Questions answered incorrectly land in a plain-text failure log
//! and are re-asked, interleaved with the full deck, in later sessions.

/// Core types and the recorder seam.
pub mod traits;

/// Error taxonomy.
pub mod error;

/// Markdown question parser.
pub mod parser;

/// Shuffling and review-set building.
pub mod selection;

/// Failure log implementations.
pub mod recorder;

/// Document download and line reading.
pub mod source;

/// Run configuration.
pub mod config;

/// The interactive training loop.
pub mod training;
