//! Question document acquisition.
//!
//! The document is fetched over HTTP, mirrored to a local cache file, and
//! read back as lines. A local markdown file can be read directly instead.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use crate::error::Result;

/// The deck the trainer was built around, used when no other source is
/// configured.
pub const DEFAULT_SOURCE_URL: &str = "https://raw.githubusercontent.com/Ditectrev/Professional-Scrum-Developer-I-PSD-I-Practice-Tests-Exams-Questions-Answers/master/README.md";

/// Download the document at `url`, mirror it to `cache_path`, and return
/// its non-empty lines.
pub fn fetch(url: &str, cache_path: &Path) -> Result<Vec<String>> {
    let response = reqwest::blocking::get(url)?.error_for_status()?;
    let body = response.text()?;

    let mut cache = File::create(cache_path)?;
    cache.write_all(body.as_bytes())?;

    read_lines(cache_path)
}

/// Read a file as lines, skipping empty ones.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path)?;
    let mut lines = vec![];
    for line in BufReader::new(file).lines() {
        let line = line?;
        if !line.is_empty() {
            lines.push(line);
        }
    }
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_lines_skips_empty_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.md");
        std::fs::write(&path, "### Q1\n\n- [x] A\n\n\n- [ ] B\n").unwrap();
        assert_eq!(
            read_lines(&path).unwrap(),
            vec!["### Q1", "- [x] A", "- [ ] B"]
        );
    }

    #[test]
    fn read_lines_of_a_missing_file_is_a_persistence_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_lines(&dir.path().join("absent.md")).unwrap_err();
        assert!(matches!(err, crate::error::QuizError::Persistence(_)));
    }
}
