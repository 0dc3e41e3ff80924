//! Build configuration derived from CLI arguments.

use crate::analyze::StopWords;
use crate::cli::IndexArgs;
use anyhow::{Result, ensure};
use std::path::PathBuf;

/// Blog posts location, relative to the site root.
const POSTS_DIR: &str = "content/post";
/// Generated artifact location, relative to the site root.
const STATIC_DIR: &str = "content/static";

/// Paths and options for one indexing run.
///
/// Owned by the command entry point and handed down by reference; nothing
/// here is global state.
#[derive(Debug, Clone)]
pub struct IndexConfig {
    root: PathBuf,
    stopwords: Option<PathBuf>,
}

impl IndexConfig {
    pub fn new(root: PathBuf, stopwords: Option<PathBuf>) -> Self {
        Self { root, stopwords }
    }

    pub fn from_args(args: &IndexArgs) -> Result<Self> {
        ensure!(
            args.root.is_dir(),
            "site root `{}` is not a directory",
            args.root.display()
        );
        Ok(Self::new(args.root.clone(), args.stopwords.clone()))
    }

    /// Directory scanned for source pages.
    pub fn posts_dir(&self) -> PathBuf {
        self.root.join(POSTS_DIR)
    }

    /// Directory the two JSON artifacts are written into.
    pub fn static_dir(&self) -> PathBuf {
        self.root.join(STATIC_DIR)
    }

    pub fn word_index_path(&self) -> PathBuf {
        self.static_dir().join("word_index.json")
    }

    pub fn page_index_path(&self) -> PathBuf {
        self.static_dir().join("page_index.json")
    }

    /// Stop words from the configured file, or the embedded English set.
    pub fn load_stopwords(&self) -> Result<StopWords> {
        match &self.stopwords {
            Some(path) => StopWords::load(path),
            None => Ok(StopWords::default_english()),
        }
    }
}
