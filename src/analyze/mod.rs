//! Text normalization: raw page text in, indexable tokens out.
//!
//! The pipeline mirrors what the search page does to its query terms:
//! Unicode word segmentation, lowercasing, diacritic folding to ASCII, then
//! stop-word removal and an acceptance filter for short and purely numeric
//! tokens.

pub mod stopwords;

pub use stopwords::StopWords;

use deunicode::deunicode_char;
use regex::Regex;
use std::sync::LazyLock;
use unicode_segmentation::UnicodeSegmentation;

/// Integers and decimals, signed or unsigned.
static NUMERIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^-?\d+(\.\d+)?$").unwrap());

/// Shortest token worth indexing ("h2" excepted).
const MIN_TOKEN_LEN: usize = 3;

/// Stateless token producer; the stop-word set is loaded once at startup
/// and immutable afterwards.
#[derive(Debug)]
pub struct Analyzer {
    stopwords: StopWords,
}

impl Analyzer {
    pub fn new(stopwords: StopWords) -> Self {
        Self { stopwords }
    }

    /// Tokenize raw document text into accepted, normalized tokens.
    ///
    /// Deterministic: the same text always yields the same sequence, in
    /// document order.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        text.unicode_words()
            .map(normalize)
            .filter(|token| !token.is_empty())
            .filter(|token| !self.stopwords.contains(token))
            .filter(|token| accept(token))
            .collect()
    }
}

/// Lowercase a word and fold diacritics to the ASCII base form.
///
/// Characters with no ASCII equivalent are dropped; multi-character
/// transliterations (e.g. `ß` -> `ss`) are kept, minus any whitespace the
/// transliteration table inserts.
fn normalize(word: &str) -> String {
    let mut folded = String::with_capacity(word.len());
    for ch in word.to_lowercase().chars() {
        let Some(ascii) = deunicode_char(ch) else {
            continue;
        };
        for c in ascii.chars() {
            if !c.is_whitespace() {
                folded.push(c.to_ascii_lowercase());
            }
        }
    }
    folded
}

/// Post-normalization acceptance filter.
fn accept(token: &str) -> bool {
    // Short tokens are noise, with one deliberate exception: "h2" matters
    // to this blog's content.
    if token.chars().count() < MIN_TOKEN_LEN && !token.eq_ignore_ascii_case("h2") {
        return false;
    }
    !NUMERIC.is_match(token)
}
