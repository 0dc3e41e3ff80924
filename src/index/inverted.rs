//! The inverted word index: token -> set of pages containing it.

use std::collections::BTreeMap;

use rustc_hash::{FxHashMap, FxHashSet};

use super::PageId;

/// Grow-only accumulator mapping each normalized token to the pages it
/// occurs in. Recording the same (token, page) pair twice is a no-op.
#[derive(Debug, Default)]
pub struct InvertedIndex {
    postings: FxHashMap<String, FxHashSet<PageId>>,
}

impl InvertedIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `token` occurs in `page`.
    pub fn record(&mut self, token: String, page: PageId) {
        self.postings.entry(token).or_default().insert(page);
    }

    /// Pages containing `token`, if any.
    pub fn pages_for(&self, token: &str) -> Option<&FxHashSet<PageId>> {
        self.postings.get(token)
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.postings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }

    /// Sorted view for serialization, so output is stable across runs.
    pub fn to_sorted(&self) -> BTreeMap<&str, Vec<PageId>> {
        self.postings
            .iter()
            .map(|(token, pages)| {
                let mut ids: Vec<PageId> = pages.iter().copied().collect();
                ids.sort_unstable();
                (token.as_str(), ids)
            })
            .collect()
    }
}
