//! Keyword search handlers: `smart_search` and `search_docs`.

use crate::catalog::Catalog;
use crate::error::{DocsError, Result};
use crate::library::Library;
use crate::search::{SearchOutcome, search, smart_search};
use rmcp::schemars;
use serde::Deserialize;
use std::fmt::Write as _;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SmartSearchRequest {
    /// Search query. Mention a framework (e.g. "laravel", "tailwind") to scope the search automatically.
    pub query: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SearchDocsRequest {
    /// Text that must appear in the document (case-insensitive)
    pub query: String,
    /// Restrict the search to one framework. Searches all frameworks when omitted.
    #[serde(default)]
    pub framework: Option<String>,
}

/// Search with the framework inferred from the query.
pub fn handle_smart_search(library: &Library, request: SmartSearchRequest) -> Result<String> {
    if request.query.trim().is_empty() {
        return Ok(empty_query_message());
    }

    let catalog = Catalog::build(library);
    let result = smart_search(library, &catalog, &request.query)?;

    let mut output = String::new();
    match &result.detected {
        Some(framework) => {
            writeln!(
                output,
                "Detected framework: **{}** (search scoped automatically)\n",
                framework
            )?;
        }
        None => {
            writeln!(
                output,
                "No framework detected, searching all frameworks.\n\
                 Tip: include a framework name or keyword (e.g. 'laravel', 'eloquent', 'tailwind') to narrow results.\n"
            )?;
        }
    }

    output.push_str(&format_outcome(
        &result.outcome,
        &request.query,
        result.detected.as_deref(),
    )?);
    Ok(output)
}

/// Search all frameworks, or one when `framework` is given.
pub fn handle_search_docs(library: &Library, request: SearchDocsRequest) -> Result<String> {
    if request.query.trim().is_empty() {
        return Ok(empty_query_message());
    }

    let framework = request.framework.as_deref().filter(|f| !f.is_empty());
    if let Some(name) = framework
        && library.get(name).is_none()
    {
        return Ok(DocsError::UnknownFramework {
            name: name.to_string(),
        }
        .to_string());
    }

    let catalog = Catalog::build(library);
    let outcome = search(&catalog, &request.query, framework)?;
    format_outcome(&outcome, &request.query, framework)
}

fn empty_query_message() -> String {
    "Search query is empty. Provide a word or phrase to search for.".to_string()
}

/// Render ranked hits as markdown.
fn format_outcome(outcome: &SearchOutcome, query: &str, framework: Option<&str>) -> Result<String> {
    let scope = framework.map_or_else(|| "all frameworks".to_string(), |f| format!("'{}'", f));

    if outcome.is_empty() {
        let mut msg = format!("No results found for '{}' in {}.\n\n", query, scope);
        msg.push_str("Search tips:\n");
        msg.push_str("• Matching is literal: the whole query must appear in the document\n");
        msg.push_str("• Try a shorter or more general term\n");
        msg.push_str("• Use list_sections to browse a framework's documentation\n");
        return Ok(msg);
    }

    let mut output = format!(
        "# Search results for '{}' in {}\n\nFound {} total, showing {}.\n\n",
        query,
        scope,
        outcome.total,
        outcome.hits.len()
    );

    for (idx, hit) in outcome.hits.iter().enumerate() {
        writeln!(
            output,
            "## {}. {} (priority: {}, {} characters)\n",
            idx + 1,
            hit.logical_path,
            hit.priority,
            hit.size
        )?;
        writeln!(output, "```markdown\n{}\n```\n", hit.fragment)?;
    }

    if outcome.omitted() > 0 {
        writeln!(
            output,
            "... {} more results not shown. Refine the query or pass a framework to narrow them.",
            outcome.omitted()
        )?;
    }

    Ok(output)
}
