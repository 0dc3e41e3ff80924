//! Front-matter extraction and validation.
//!
//! A page's metadata lives in a block bounded by `---` lines at the top of
//! the Markdown source:
//!
//! ```text
//! ---
//! title: "Hello World"
//! date: 2021-05-01T10:00:00Z
//! draft: false
//! ---
//! body text...
//! ```
//!
//! Extraction is best-effort: a page without a complete block still yields
//! metadata (just a mostly empty one), and validation problems are logged
//! rather than failing the build.

use crate::log;
use crate::utils::date;
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;
use thiserror::Error;

/// A line consisting solely of three dashes, trailing whitespace allowed.
/// CRLF mode so `$` works with every newline convention.
static DELIMITER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?mR)^---[ \t]*$").unwrap());

/// Any of the newline conventions a page may use.
static LINE_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\r\n|\r|\n").unwrap());

/// `pageName` plus the three recognized front-matter keys.
const EXPECTED_KEYS: usize = 4;

/// The document has no complete `---`-bounded block.
#[derive(Debug, Error)]
#[error("front-matter delimiters not found")]
pub struct MissingFrontMatter;

/// Metadata for one page, serialized into `page_index.json`.
///
/// `page_name` is always injected from the source file name; the other
/// fields come from front matter and are omitted from the JSON when absent,
/// mirroring the map-shaped output the search page expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub page_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draft: Option<String>,
}

impl PageMeta {
    pub fn new(page_name: impl Into<String>) -> Self {
        Self {
            page_name: page_name.into(),
            title: None,
            date: None,
            draft: None,
        }
    }

    /// Store a recognized key; anything else is discarded.
    fn set(&mut self, key: &str, value: String) {
        match key {
            "title" => self.title = Some(value),
            "date" => self.date = Some(value),
            "draft" => self.draft = Some(value),
            _ => {}
        }
    }

    /// Present entries, `pageName` included.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            Some(("pageName", self.page_name.as_str())),
            self.title.as_deref().map(|v| ("title", v)),
            self.date.as_deref().map(|v| ("date", v)),
            self.draft.as_deref().map(|v| ("draft", v)),
        ]
        .into_iter()
        .flatten()
    }

    fn entry_count(&self) -> usize {
        self.entries().count()
    }
}

/// Parse a page's front matter into metadata.
///
/// Never fails: a missing block is logged and treated as empty, and all
/// validation is diagnostic only.
pub fn parse(content: &str, page_name: &str) -> PageMeta {
    let mut meta = PageMeta::new(page_name);

    let block = match extract_block(content) {
        Ok(block) => block,
        Err(err) => {
            log!("error"; "{err} in `{page_name}`");
            ""
        }
    };

    for line in LINE_BREAK.split(block) {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let (key, value) = (key.trim(), value.trim());
        if key.is_empty() || value.is_empty() {
            continue;
        }
        meta.set(key, strip_quotes(value).to_string());
    }

    validate(&meta);
    meta
}

/// Text between the first two `---` delimiter lines.
fn extract_block(content: &str) -> Result<&str, MissingFrontMatter> {
    let mut parts = DELIMITER.splitn(content, 3);
    parts.next();
    match parts.next() {
        // A second split piece only exists past a first delimiter; the block
        // is complete only if a second delimiter follows it too.
        Some(block) if parts.next().is_some() => Ok(block),
        _ => Err(MissingFrontMatter),
    }
}

/// Strip one matching pair of surrounding straight quotes, if present.
/// No nested or escaped quote handling.
fn strip_quotes(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2
        && (bytes[0] == b'"' || bytes[0] == b'\'')
        && bytes[bytes.len() - 1] == bytes[0]
    {
        &value[1..value.len() - 1]
    } else {
        value
    }
}

/// Diagnostic-only checks; none of these alter the metadata.
fn validate(meta: &PageMeta) {
    if meta.entry_count() != EXPECTED_KEYS {
        log!("warn"; "incomplete metadata set found: {meta:?}");
    }
    for (key, value) in meta.entries() {
        if value.trim().is_empty() {
            log!("warn"; "blank `{key}` value found in: {meta:?}");
        }
    }
    if let Some(draft) = meta.draft.as_deref()
        && draft != "true"
        && draft != "false"
    {
        log!("warn"; "invalid `draft` value found in: {meta:?}");
    }
    if let Some(value) = meta.date.as_deref()
        && !date::is_zoned_timestamp(value)
    {
        log!("warn"; "invalid `date` value found in: {meta:?}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_complete_front_matter() {
        let content = "---\ntitle: \"Hello World\"\ndate: 2021-05-01T10:00:00Z\ndraft: false\n---\nCDI and the cloud.\n";
        let meta = parse(content, "my-post");
        assert_eq!(meta.page_name, "my-post");
        assert_eq!(meta.title.as_deref(), Some("Hello World"));
        assert_eq!(meta.date.as_deref(), Some("2021-05-01T10:00:00Z"));
        assert_eq!(meta.draft.as_deref(), Some("false"));
    }

    #[test]
    fn test_missing_delimiters_yield_bare_metadata() {
        let meta = parse("just a body, no front matter", "page");
        assert_eq!(meta, PageMeta::new("page"));

        // A single delimiter is not a complete block either.
        let meta = parse("---\ntitle: Orphan\n", "page");
        assert_eq!(meta.title, None);
    }

    #[test]
    fn test_single_quotes_stripped() {
        let meta = parse("---\ndate: '2020-01-01'\n---\n", "page");
        assert_eq!(meta.date.as_deref(), Some("2020-01-01"));
    }

    #[test]
    fn test_unmatched_quote_kept() {
        let meta = parse("---\ntitle: \"half quoted\n---\n", "page");
        assert_eq!(meta.title.as_deref(), Some("\"half quoted"));
    }

    #[test]
    fn test_unrecognized_keys_discarded() {
        let meta = parse(
            "---\ntitle: Kept\nauthor: dropped\npageName: not-from-front-matter\n---\n",
            "real-name",
        );
        assert_eq!(meta.title.as_deref(), Some("Kept"));
        // pageName always comes from the file name.
        assert_eq!(meta.page_name, "real-name");
    }

    #[test]
    fn test_malformed_lines_skipped() {
        let meta = parse(
            "---\nno colon here\n: leading colon\ntitle:   \ndraft: true\n---\n",
            "page",
        );
        assert_eq!(meta.title, None);
        assert_eq!(meta.draft.as_deref(), Some("true"));
    }

    #[test]
    fn test_crlf_and_cr_line_endings() {
        let meta = parse("---\r\ntitle: One\r\ndate: 2020-01-01T00:00:00Z\r\n---\r\n", "p");
        assert_eq!(meta.title.as_deref(), Some("One"));

        let meta = parse("---\rtitle: Two\rdraft: false\r---\r", "p");
        assert_eq!(meta.title.as_deref(), Some("Two"));
        assert_eq!(meta.draft.as_deref(), Some("false"));
    }

    #[test]
    fn test_value_split_on_first_colon_only() {
        let meta = parse("---\ndate: 2021-05-01T10:00:00Z\n---\n", "p");
        assert_eq!(meta.date.as_deref(), Some("2021-05-01T10:00:00Z"));
    }

    #[test]
    fn test_delimiter_allows_trailing_whitespace() {
        let meta = parse("--- \ntitle: Spaced\n---\t\n", "p");
        assert_eq!(meta.title.as_deref(), Some("Spaced"));
    }

    #[test]
    fn test_serialized_shape() {
        let content = "---\ntitle: \"Hello World\"\ndate: 2021-05-01T10:00:00Z\ndraft: false\n---\n";
        let meta = parse(content, "my-post");
        let json = serde_json::to_value(&meta).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "pageName": "my-post",
                "title": "Hello World",
                "date": "2021-05-01T10:00:00Z",
                "draft": "false",
            })
        );
    }

    #[test]
    fn test_absent_fields_omitted_from_json() {
        let json = serde_json::to_value(PageMeta::new("bare")).unwrap();
        assert_eq!(json, serde_json::json!({ "pageName": "bare" }));
    }
}
