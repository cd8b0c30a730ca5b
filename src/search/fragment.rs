//! Excerpt selection for search results.

use std::collections::BTreeSet;

/// Default upper bound on fragment length, in characters.
pub const DEFAULT_FRAGMENT_LENGTH: usize = 800;

/// Appended to the leading excerpt when no window matches the query.
pub const ELLIPSIS: &str = "...";

/// Lines of context kept before the anchor line.
const LINES_BEFORE: usize = 3;
/// Lines kept from the anchor line onward (exclusive end).
const LINES_AFTER: usize = 10;

/// Query words used for scoring: lower-case, longer than two characters, deduplicated.
pub(crate) fn query_words(query: &str) -> BTreeSet<String> {
    query
        .to_lowercase()
        .split_whitespace()
        .filter(|word| word.chars().count() > 2)
        .map(ToString::to_string)
        .collect()
}

/// Pick the excerpt of `content` that mentions the most distinct query words.
///
/// Every line anchors a window from three lines before it to ten lines after it.
/// Windows longer than `max_len` characters are skipped. The first window reaching the
/// best score is kept. Without any scoring window the first `max_len` characters plus
/// [`ELLIPSIS`] are returned.
pub fn extract_fragment(content: &str, query: &str, max_len: usize) -> String {
    let words = query_words(query);
    // Split on '\n' only so windows stay verbatim slices of CRLF content.
    let lines: Vec<&str> = content.split('\n').collect();

    let mut best: Option<String> = None;
    let mut best_score = 0;

    if !words.is_empty() {
        for anchor in 0..lines.len() {
            let start = anchor.saturating_sub(LINES_BEFORE);
            let end = (anchor + LINES_AFTER).min(lines.len());
            let window = lines[start..end].join("\n");

            if window.chars().count() > max_len {
                continue;
            }

            let lowered = window.to_lowercase();
            let score = words
                .iter()
                .filter(|word| lowered.contains(word.as_str()))
                .count();

            if score > best_score {
                best_score = score;
                best = Some(window);
            }
        }
    }

    best.unwrap_or_else(|| {
        let mut head: String = content.chars().take(max_len).collect();
        head.push_str(ELLIPSIS);
        head
    })
}
