//! Framework detection from free-text queries.

use crate::library::{Framework, Library};

/// Return the first framework with a keyword that appears in `query`.
///
/// Frameworks are tried in library order and keywords in their configured order, so
/// the earliest configured match always wins. Matching is case-insensitive substring
/// containment. Depends only on the static keyword table, never on the catalog.
pub fn detect_framework<'a>(library: &'a Library, query: &str) -> Option<&'a Framework> {
    let query = query.to_lowercase();
    library.frameworks().iter().find(|framework| {
        framework
            .keywords()
            .iter()
            .any(|keyword| query.contains(keyword.as_str()))
    })
}
