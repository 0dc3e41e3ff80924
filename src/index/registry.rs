//! Page registration and identifier assignment.

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;

use super::PageId;
use crate::frontmatter::PageMeta;

/// Assigns each distinct page name a dense identifier and stores its
/// metadata exactly once.
///
/// Identifiers are contiguous over `[0, len)` in first-seen order. The
/// reverse lookup is build-time scaffolding only and is dropped with the
/// registry; it never reaches an output artifact.
#[derive(Debug, Default)]
pub struct PageRegistry {
    /// pageName -> id, for first-seen detection.
    reverse: FxHashMap<String, PageId>,
    /// id -> metadata. BTreeMap so serialization walks ids in order.
    pages: BTreeMap<PageId, PageMeta>,
}

impl PageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a page unless its name is already known.
    ///
    /// Returns the page's id and whether this call inserted it. On a repeat
    /// name the original id and metadata are kept and `meta` is discarded.
    pub fn register_if_absent(&mut self, meta: PageMeta) -> (PageId, bool) {
        if let Some(&id) = self.reverse.get(&meta.page_name) {
            return (id, false);
        }
        let id = self.reverse.len() as PageId;
        self.reverse.insert(meta.page_name.clone(), id);
        self.pages.insert(id, meta);
        (id, true)
    }

    /// The id -> metadata table, ready for serialization.
    pub fn pages(&self) -> &BTreeMap<PageId, PageMeta> {
        &self.pages
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}
