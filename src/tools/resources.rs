//! Document resources: one resource per markdown file.

use crate::catalog::Catalog;
use crate::error::DocsError;
use crate::library::Library;
use crate::resource::ResourceUri;

/// Listing entry for one document resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceEntry {
    pub uri: String,
    pub name: String,
    pub description: String,
}

/// Every document in the library as a resource entry.
pub fn list_resources(library: &Library) -> Vec<ResourceEntry> {
    Catalog::build(library)
        .documents()
        .iter()
        .map(|doc| ResourceEntry {
            uri: ResourceUri::for_document(doc).to_string(),
            name: doc.logical_path().to_string(),
            description: format!("{} documentation: {}", doc.framework(), doc.relative_path()),
        })
        .collect()
}

/// Full text of the document named by `uri`.
pub fn read_resource(library: &Library, uri: &str) -> Result<String, DocsError> {
    let parsed = ResourceUri::parse(uri)?;
    let catalog = Catalog::build(library);
    catalog
        .find(&parsed.framework, &parsed.relative)
        .ok_or_else(|| DocsError::UnknownResource {
            uri: uri.to_string(),
        })?
        .read()
}
