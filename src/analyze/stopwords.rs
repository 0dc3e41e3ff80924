//! Stop-word set handling.
//!
//! The default English list is compiled into the binary so a plain
//! `hugodex build <root>` needs no extra files; `--stopwords <file>`
//! swaps in a custom list (one word per line).

use anyhow::{Context, Result};
use rustc_hash::FxHashSet;
use std::path::Path;

/// Embedded default list.
const DEFAULT_ENGLISH: &str = include_str!("english.txt");

/// An immutable set of words excluded from the index.
///
/// Lookups happen after the normalizer lowercases tokens, so the set is
/// lowercased on load.
#[derive(Debug, Default)]
pub struct StopWords {
    words: FxHashSet<String>,
}

impl StopWords {
    /// The embedded default English set.
    pub fn default_english() -> Self {
        Self::from_lines(DEFAULT_ENGLISH)
    }

    /// Load a list from a file: one word per line, blank lines and `#`
    /// comments skipped.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read stop-word list `{}`", path.display()))?;
        Ok(Self::from_lines(&text))
    }

    fn from_lines(text: &str) -> Self {
        let words = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_lowercase)
            .collect();
        Self { words }
    }

    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_list_has_common_words() {
        let stopwords = StopWords::default_english();
        for word in ["the", "and", "is", "a", "of"] {
            assert!(stopwords.contains(word), "missing `{word}`");
        }
        assert!(!stopwords.contains("cloud"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("stop.txt");
        fs::write(&path, "# comment\nFoo\n\n  bar  \n").unwrap();

        let stopwords = StopWords::load(&path).unwrap();
        assert_eq!(stopwords.len(), 2);
        assert!(stopwords.contains("foo"));
        assert!(stopwords.contains("bar"));
        assert!(!stopwords.contains("# comment"));
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        assert!(StopWords::load(&dir.path().join("nope.txt")).is_err());
    }
}
