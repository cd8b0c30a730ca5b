//! Section browsing handlers.

use crate::catalog::Catalog;
use crate::error::{DocsError, Result};
use crate::library::Library;
use crate::sections::{get_section, list_sections};
use rmcp::schemars;
use serde::Deserialize;
use std::fmt::Write as _;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ListSectionsRequest {
    /// Framework name (see list_frameworks)
    pub framework: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetSectionRequest {
    /// Framework name (see list_frameworks)
    pub framework: String,
    /// Section name (see list_sections)
    pub section: String,
}

pub fn handle_list_sections(library: &Library, request: ListSectionsRequest) -> Result<String> {
    if library.get(&request.framework).is_none() {
        return Ok(DocsError::UnknownFramework {
            name: request.framework,
        }
        .to_string());
    }

    let catalog = Catalog::build(library);
    let sections = list_sections(&catalog, &request.framework);

    if sections.is_empty() {
        return Ok(format!(
            "Framework '{}' has no sections: all of its documents sit at the top level.",
            request.framework
        ));
    }

    let mut output = format!(
        "# Sections in '{}' ({})\n\n",
        request.framework,
        sections.len()
    );
    for section in &sections {
        writeln!(output, "• {}", section)?;
    }
    output.push_str("\nUse get_section to read a section's documents.\n");

    Ok(output)
}

/// Return a section's top documents in full, highest priority first.
pub fn handle_get_section(library: &Library, request: GetSectionRequest) -> Result<String> {
    if library.get(&request.framework).is_none() {
        return Ok(DocsError::UnknownFramework {
            name: request.framework,
        }
        .to_string());
    }

    let catalog = Catalog::build(library);
    let contents = match get_section(&catalog, &request.framework, &request.section) {
        Ok(contents) => contents,
        Err(err) if err.is_not_found() => return Ok(err.to_string()),
        Err(err) => return Err(err.into()),
    };

    let mut output = format!(
        "# Section '{}' in '{}'\n\nShowing {} of {} documents.\n\n",
        contents.section,
        contents.framework,
        contents.documents.len(),
        contents.total()
    );

    for (doc, content) in &contents.documents {
        writeln!(output, "---\n\n## {}\n\n{}\n", doc.logical_path(), content)?;
    }

    if contents.omitted > 0 {
        writeln!(
            output,
            "---\n\n... and {} more documents in this section. Use get_full_content to read them.",
            contents.omitted
        )?;
    }

    Ok(output)
}
