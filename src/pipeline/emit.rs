//! Artifact emission: the two JSON index files.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use serde::Serialize;
use thiserror::Error;

use super::IndexOutput;
use crate::config::IndexConfig;
use crate::log;

/// Failure to persist one artifact.
#[derive(Debug, Error)]
pub enum EmitError {
    #[error("failed to serialize `{path}`: {source}")]
    Serialize {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("failed to write `{path}`: {source}")]
    Io { path: PathBuf, source: io::Error },
}

/// Write both index artifacts under `content/static/`.
///
/// Lenient per file: a failure on one is logged and does not stop the
/// other, but any failure makes the overall result an error so the process
/// exits non-zero.
pub fn write_artifacts(config: &IndexConfig, output: &IndexOutput) -> Result<()> {
    let static_dir = config.static_dir();
    fs::create_dir_all(&static_dir).map_err(|source| EmitError::Io {
        path: static_dir.clone(),
        source,
    })?;

    let results = [
        write_json(&config.word_index_path(), &output.words.to_sorted()),
        write_json(&config.page_index_path(), output.registry.pages()),
    ];

    let mut failed = false;
    for result in results {
        match result {
            Ok(path) => log!("emit"; "wrote {}", path.display()),
            Err(err) => {
                log!("error"; "{err}");
                failed = true;
            }
        }
    }
    if failed {
        bail!("one or more index artifacts could not be written");
    }
    Ok(())
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<PathBuf, EmitError> {
    let json = serde_json::to_string(value).map_err(|source| EmitError::Serialize {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, json).map_err(|source| EmitError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontmatter::PageMeta;
    use crate::index::{InvertedIndex, PageRegistry};
    use serde_json::Value;
    use tempfile::TempDir;

    fn sample_output() -> IndexOutput {
        let mut registry = PageRegistry::new();
        let mut meta = PageMeta::new("my-post");
        meta.title = Some("Hello World".to_string());
        meta.date = Some("2021-05-01T10:00:00Z".to_string());
        meta.draft = Some("false".to_string());
        registry.register_if_absent(meta);

        let mut words = InvertedIndex::new();
        words.record("cdi".to_string(), 0);
        words.record("cloud".to_string(), 0);

        IndexOutput { registry, words }
    }

    #[test]
    fn test_artifacts_written_and_shaped() {
        let root = TempDir::new().unwrap();
        let config = IndexConfig::new(root.path().to_path_buf(), None);

        write_artifacts(&config, &sample_output()).unwrap();

        let words: Value =
            serde_json::from_str(&fs::read_to_string(config.word_index_path()).unwrap()).unwrap();
        assert_eq!(words["cdi"], serde_json::json!([0]));
        assert_eq!(words["cloud"], serde_json::json!([0]));

        let pages: Value =
            serde_json::from_str(&fs::read_to_string(config.page_index_path()).unwrap()).unwrap();
        assert_eq!(
            pages["0"],
            serde_json::json!({
                "pageName": "my-post",
                "title": "Hello World",
                "date": "2021-05-01T10:00:00Z",
                "draft": "false",
            })
        );
    }

    #[test]
    fn test_static_dir_created_if_missing() {
        let root = TempDir::new().unwrap();
        let config = IndexConfig::new(root.path().to_path_buf(), None);
        assert!(!config.static_dir().exists());

        write_artifacts(&config, &sample_output()).unwrap();
        assert!(config.word_index_path().is_file());
        assert!(config.page_index_path().is_file());
    }
}
