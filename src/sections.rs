//! Section browsing: documents grouped by their first path segment.

use crate::catalog::{Catalog, Document};
use crate::error::DocsError;
use crate::search::path_priority;
use std::collections::BTreeSet;

/// Maximum number of documents returned from one section.
pub const MAX_SECTION_DOCUMENTS: usize = 5;

/// Distinct section names of a framework, sorted.
///
/// Documents directly under the framework root belong to no section.
pub fn list_sections(catalog: &Catalog, framework: &str) -> BTreeSet<String> {
    catalog
        .for_framework(framework)
        .filter_map(Document::section)
        .map(ToString::to_string)
        .collect()
}

/// A section's highest-priority documents with their content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionContents {
    pub framework: String,
    pub section: String,
    /// `(document, content)` pairs, highest priority first.
    pub documents: Vec<(Document, String)>,
    /// Documents in the section beyond the returned ones.
    pub omitted: usize,
}

impl SectionContents {
    pub fn total(&self) -> usize {
        self.documents.len() + self.omitted
    }
}

/// Collect the documents under `framework/section/`, ranked and capped.
///
/// An empty section is [`DocsError::UnknownSection`]. Only the returned documents are
/// read from disk.
pub fn get_section(
    catalog: &Catalog,
    framework: &str,
    section: &str,
) -> Result<SectionContents, DocsError> {
    let prefix = format!("{}/{}/", framework, section);
    let mut members: Vec<&Document> = catalog
        .for_framework(framework)
        .filter(|doc| doc.logical_path().starts_with(&prefix))
        .collect();

    if members.is_empty() {
        return Err(DocsError::UnknownSection {
            framework: framework.to_string(),
            section: section.to_string(),
        });
    }

    members.sort_by_key(|doc| std::cmp::Reverse(path_priority(doc.logical_path())));
    let omitted = members.len().saturating_sub(MAX_SECTION_DOCUMENTS);

    let documents = members
        .into_iter()
        .take(MAX_SECTION_DOCUMENTS)
        .map(|doc| doc.read().map(|content| (doc.clone(), content)))
        .collect::<Result<Vec<_>, DocsError>>()?;

    Ok(SectionContents {
        framework: framework.to_string(),
        section: section.to_string(),
        documents,
        omitted,
    })
}
