//! Run configuration.
//!
//! One explicit struct instead of ambient paths and a process-wide seed, so
//! every collaborator gets its inputs handed to it.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::source::DEFAULT_SOURCE_URL;

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Where the question document lives.
    pub source_url: String,
    /// Local mirror of the downloaded document.
    pub cache_path: PathBuf,
    /// Plain-text log of queries answered incorrectly.
    pub failure_log: PathBuf,
    /// Fixed generator seed; entropy-seeded when absent.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            source_url: DEFAULT_SOURCE_URL.to_owned(),
            cache_path: PathBuf::from("downloaded-questions.md"),
            failure_log: PathBuf::from("errors.md"),
            seed: None,
        }
    }
}

impl Config {
    /// Load a config from a yaml file; absent fields keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let yaml: serde_yaml::Value = serde_yaml::from_reader(file)?;
        Ok(serde_yaml::from_value(yaml)?)
    }
}
