//! The indexing pipeline: discovery, parsing, and index accumulation.
//!
//! One build is a single pass:
//!
//! ```text
//! walk content/post/ -> filter *.md -> sort paths
//!        | (rayon: pure per-document work)
//!        v
//! read + front matter + tokenize
//!        | (serial merge, sorted order)
//!        v
//! register page id -> record (token, id) pairs
//! ```
//!
//! Parsing and tokenization are pure functions of one document, so they run
//! in parallel; id assignment depends on visitation order, so the merge is
//! serial over the sorted path list. Ids are therefore reproducible across
//! runs and thread counts.

pub mod emit;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use jwalk::WalkDir;
use rayon::prelude::*;

use crate::analyze::Analyzer;
use crate::config::IndexConfig;
use crate::frontmatter::{self, PageMeta};
use crate::index::{InvertedIndex, PageRegistry};
use crate::{debug, log};

/// Source extension recognized as an indexable page.
const PAGE_EXTENSION: &str = "md";

/// One parsed document, ready to merge into the indexes.
struct ParsedPage {
    meta: PageMeta,
    tokens: Vec<String>,
}

/// The two tables produced by a build.
///
/// The registry's reverse name lookup dies with this value; only the page
/// table and the word index are serialized.
pub struct IndexOutput {
    pub registry: PageRegistry,
    pub words: InvertedIndex,
}

/// Drives one build. Owns all index state for the invocation; nothing is
/// shared between concurrent builds.
pub struct Indexer<'a> {
    config: &'a IndexConfig,
    analyzer: Analyzer,
}

impl<'a> Indexer<'a> {
    pub fn new(config: &'a IndexConfig) -> Result<Self> {
        let stopwords = config.load_stopwords()?;
        Ok(Self {
            config,
            analyzer: Analyzer::new(stopwords),
        })
    }

    /// Run a full single-pass build over all discovered pages.
    ///
    /// A single unreadable page aborts the build; front-matter problems
    /// never do.
    pub fn run(&self) -> Result<IndexOutput> {
        let posts_dir = self.config.posts_dir();
        if !posts_dir.is_dir() {
            bail!("post directory not found: `{}`", posts_dir.display());
        }

        let paths = collect_pages(&posts_dir);
        debug!("index"; "discovered {} candidate pages", paths.len());

        let parsed: Vec<ParsedPage> = paths
            .par_iter()
            .map(|path| parse_page(path, &self.analyzer))
            .collect::<Result<_>>()?;

        let mut registry = PageRegistry::new();
        let mut words = InvertedIndex::new();
        for page in parsed {
            let name = page.meta.page_name.clone();
            let (id, inserted) = registry.register_if_absent(page.meta);
            if !inserted {
                log!("warn"; "duplicate page name `{name}` absorbed into id {id}, keeping first-seen metadata");
            }
            for token in page.tokens {
                words.record(token, id);
            }
        }

        Ok(IndexOutput { registry, words })
    }
}

/// Every `.md` file under `dir`, sorted by path so id assignment is
/// reproducible. Files with any other extension are ignored.
fn collect_pages(dir: &Path) -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path())
        .filter(|p| p.extension().is_some_and(|ext| ext == PAGE_EXTENSION))
        .collect();
    paths.sort();
    paths
}

/// Page name: the file name with the recognized extension and its dot
/// stripped.
fn page_name(path: &Path) -> String {
    let file = path.file_name().unwrap_or_default().to_string_lossy();
    file.strip_suffix(&format!(".{PAGE_EXTENSION}"))
        .unwrap_or(&file)
        .to_string()
}

fn parse_page(path: &Path, analyzer: &Analyzer) -> Result<ParsedPage> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read page `{}`", path.display()))?;
    let name = page_name(path);
    let meta = frontmatter::parse(&content, &name);
    // The whole raw text is tokenized, front matter included, so metadata
    // values are searchable too.
    let tokens = analyzer.tokenize(&content);
    Ok(ParsedPage { meta, tokens })
}
