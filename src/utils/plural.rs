//! Count formatting for summary log lines.

/// Format a count with its noun, pluralized with a plain "s".
///
/// `plural_count(1, "page")` -> `"1 page"`, `plural_count(5, "page")` ->
/// `"5 pages"`.
#[inline]
pub fn plural_count(count: usize, noun: &str) -> String {
    let suffix = if count == 1 { "" } else { "s" };
    format!("{count} {noun}{suffix}")
}
