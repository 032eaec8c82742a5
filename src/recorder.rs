// Just simple implementations for the Recorder trait.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::traits::Recorder;

/// Recorder that only keeps failures in memory, for tests and dry runs.
#[derive(Debug, Default)]
pub struct MemoryRecorder {
    queries: Vec<String>,
}

impl MemoryRecorder {
    pub fn new() -> Self {
        Default::default()
    }
}

impl Recorder for MemoryRecorder {
    fn record_failure(&mut self, query: &str) -> Result<()> {
        if !self.queries.iter().any(|q| q == query) {
            self.queries.push(query.to_owned());
        }
        Ok(())
    }

    fn failures(&self) -> Result<Vec<String>> {
        Ok(self.queries.clone())
    }
}

/// Recorder backed by a plain-text file, one query per line, append-only.
///
/// A query already present anywhere in the file is never written again, so
/// the log stays duplicate-free across sessions. A missing file reads as an
/// empty log and is created on the first failure.
#[derive(Debug)]
pub struct FileRecorder {
    path: PathBuf,
}

impl FileRecorder {
    pub fn new(path: &Path) -> Self {
        FileRecorder {
            path: path.to_owned(),
        }
    }
}

impl Recorder for FileRecorder {
    fn record_failure(&mut self, query: &str) -> Result<()> {
        let content = if self.path.exists() {
            std::fs::read_to_string(&self.path)?
        } else {
            String::new()
        };
        if content.contains(query) {
            return Ok(());
        }

        use std::fs::OpenOptions;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{query}")?;
        Ok(())
    }

    fn failures(&self) -> Result<Vec<String>> {
        if !self.path.exists() {
            return Ok(vec![]);
        }
        Ok(std::fs::read_to_string(&self.path)?
            .lines()
            .filter(|line| !line.is_empty())
            .map(str::to_owned)
            .collect())
    }
}
