use crate::catalog::Catalog;
use crate::error::{DocsError, Result};
use crate::library::Library;
use rmcp::schemars;
use serde::Deserialize;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetFullContentRequest {
    /// Framework name (see list_frameworks)
    pub framework: String,
    /// Path of the file relative to the framework root, e.g. "routing/middleware.md"
    pub file_path: String,
}

/// Return one document in full with its size.
pub fn handle_get_full_content(library: &Library, request: GetFullContentRequest) -> Result<String> {
    if library.get(&request.framework).is_none() {
        return Ok(DocsError::UnknownFramework {
            name: request.framework,
        }
        .to_string());
    }

    let catalog = Catalog::build(library);
    let Some(doc) = catalog.find(&request.framework, &request.file_path) else {
        return Ok(DocsError::UnknownFile {
            framework: request.framework,
            path: request.file_path,
        }
        .to_string());
    };

    let content = doc.read()?;
    Ok(format!(
        "# {}\n\nSize: {} characters\n\n---\n\n{}",
        doc.logical_path(),
        content.chars().count(),
        content
    ))
}
