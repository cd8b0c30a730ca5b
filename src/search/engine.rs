//! Query execution: containment filter, priority ranking, and fragment extraction.

use super::fragment::{DEFAULT_FRAGMENT_LENGTH, extract_fragment};
use super::priority::path_priority;
use crate::catalog::Catalog;
use crate::detect::detect_framework;
use crate::error::DocsError;
use crate::library::Library;
use tracing::debug;

/// Maximum number of hits returned by a search.
pub const MAX_RESULTS: usize = 5;

/// One document matching a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub framework: String,
    pub logical_path: String,
    pub priority: i32,
    pub fragment: String,
    /// Document size in characters.
    pub size: usize,
}

/// Ranked hits, capped at [`MAX_RESULTS`], with the uncapped match count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOutcome {
    pub hits: Vec<SearchHit>,
    pub total: usize,
}

impl SearchOutcome {
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Matches beyond the returned hits.
    pub fn omitted(&self) -> usize {
        self.total - self.hits.len()
    }
}

/// Search the catalog for documents containing `query`.
///
/// `framework` restricts the search to one framework's documents. Documents that do not
/// contain the whole query (case-insensitive) are excluded. Matches are sorted by
/// priority, highest first, keeping catalog order among equal priorities.
pub fn search(
    catalog: &Catalog,
    query: &str,
    framework: Option<&str>,
) -> Result<SearchOutcome, DocsError> {
    let needle = query.to_lowercase();
    let mut hits = Vec::new();

    for doc in catalog.documents() {
        if framework.is_some_and(|name| doc.framework() != name) {
            continue;
        }

        let content = doc.read()?;
        if !content.to_lowercase().contains(&needle) {
            continue;
        }

        hits.push(SearchHit {
            framework: doc.framework().to_string(),
            logical_path: doc.logical_path().to_string(),
            priority: path_priority(doc.logical_path()),
            fragment: extract_fragment(&content, query, DEFAULT_FRAGMENT_LENGTH),
            size: content.chars().count(),
        });
    }

    hits.sort_by(|a, b| b.priority.cmp(&a.priority));
    let total = hits.len();
    hits.truncate(MAX_RESULTS);

    debug!(
        "Search '{}' (framework: {:?}): {} matches",
        query, framework, total
    );

    Ok(SearchOutcome { hits, total })
}

/// A search scoped by framework detection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmartSearch {
    /// Framework inferred from the query, if any.
    pub detected: Option<String>,
    pub outcome: SearchOutcome,
}

/// Detect the framework a query is about, then search within it.
///
/// Without a detected framework the whole catalog is searched.
pub fn smart_search(
    library: &Library,
    catalog: &Catalog,
    query: &str,
) -> Result<SmartSearch, DocsError> {
    let detected = detect_framework(library, query).map(|f| f.name().to_string());
    let outcome = search(catalog, query, detected.as_deref())?;
    Ok(SmartSearch { detected, outcome })
}
