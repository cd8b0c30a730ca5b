//! MCP server: tool routing and document resources.

use crate::error::DocsError;
use crate::library::Library;
use crate::resource::MARKDOWN_MIME;
use crate::schema::inline_schema_for_type;
use crate::tools::{
    GetFullContentRequest, GetSectionRequest, ListSectionsRequest, SearchDocsRequest,
    SmartSearchRequest, handle_get_full_content, handle_get_section, handle_list_frameworks,
    handle_list_sections, handle_search_docs, handle_smart_search, list_resources, read_resource,
};
use rmcp::{
    ErrorData, RoleServer, ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::*,
    service::RequestContext,
    tool, tool_handler, tool_router,
};
use std::sync::Arc;

/// MCP server answering questions from local framework documentation.
#[derive(Clone)]
pub struct DocsServer {
    /// Frameworks being served; fixed for the life of the process
    library: Arc<Library>,

    /// Tool router for handling MCP tool calls
    tool_router: ToolRouter<Self>,
}

impl std::fmt::Debug for DocsServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocsServer")
            .field("library", &self.library)
            .finish()
    }
}

#[tool_router]
impl DocsServer {
    pub fn new(library: Library) -> Self {
        Self {
            library: Arc::new(library),
            tool_router: Self::tool_router(),
        }
    }

    pub fn library(&self) -> &Library {
        &self.library
    }

    #[tool(
        description = "Search the documentation, automatically scoping to a framework when the query mentions one (e.g. 'laravel', 'eloquent', 'tailwind', 'next.js'). Returns up to 5 ranked excerpts.",
        input_schema = inline_schema_for_type::<SmartSearchRequest>()
    )]
    async fn smart_search(
        &self,
        Parameters(request): Parameters<SmartSearchRequest>,
    ) -> std::result::Result<String, String> {
        handle_smart_search(&self.library, request).map_err(|e| e.to_string())
    }

    #[tool(
        description = "Search documents containing the query text, optionally within one framework. Results are ranked by page importance and show the most relevant excerpt of each document.",
        input_schema = inline_schema_for_type::<SearchDocsRequest>()
    )]
    async fn search_docs(
        &self,
        Parameters(request): Parameters<SearchDocsRequest>,
    ) -> std::result::Result<String, String> {
        handle_search_docs(&self.library, request).map_err(|e| e.to_string())
    }

    #[tool(
        description = "Read one documentation file in full, given its framework and path relative to the framework root.",
        input_schema = inline_schema_for_type::<GetFullContentRequest>()
    )]
    async fn get_full_content(
        &self,
        Parameters(request): Parameters<GetFullContentRequest>,
    ) -> std::result::Result<String, String> {
        handle_get_full_content(&self.library, request).map_err(|e| e.to_string())
    }

    #[tool(description = "List available frameworks and how many documents each has.")]
    async fn list_frameworks(&self) -> std::result::Result<String, String> {
        handle_list_frameworks(&self.library).map_err(|e| e.to_string())
    }

    #[tool(
        description = "List the sections (top-level directories) of a framework's documentation.",
        input_schema = inline_schema_for_type::<ListSectionsRequest>()
    )]
    async fn list_sections(
        &self,
        Parameters(request): Parameters<ListSectionsRequest>,
    ) -> std::result::Result<String, String> {
        handle_list_sections(&self.library, request).map_err(|e| e.to_string())
    }

    #[tool(
        description = "Read the most important documents of a framework section in full (up to 5, highest priority first).",
        input_schema = inline_schema_for_type::<GetSectionRequest>()
    )]
    async fn get_section(
        &self,
        Parameters(request): Parameters<GetSectionRequest>,
    ) -> std::result::Result<String, String> {
        handle_get_section(&self.library, request).map_err(|e| e.to_string())
    }
}

#[tool_handler]
impl ServerHandler for DocsServer {
    fn get_info(&self) -> ServerInfo {
        let capabilities = ServerCapabilities::builder()
            .enable_tools()
            .enable_resources()
            .build();

        ServerInfo::new(capabilities)
            .with_server_info(Implementation::from_build_env())
            .with_instructions(
                "framework-docs-mcp: Local documentation for web frameworks (Twill, Laravel, Next.js, Inertia, Tailwind). \
                 Start with smart_search, or use list_frameworks and list_sections to browse. \
                 Every document is also available as a framework-docs:/// resource."
                    .to_string(),
            )
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListResourcesResult, ErrorData> {
        let resources = list_resources(&self.library)
            .into_iter()
            .map(|entry| {
                let mut raw = RawResource::new(entry.uri, entry.name);
                raw.description = Some(entry.description);
                raw.mime_type = Some(MARKDOWN_MIME.to_string());
                raw.no_annotation()
            })
            .collect();

        Ok(ListResourcesResult::with_all_items(resources))
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ReadResourceResult, ErrorData> {
        match read_resource(&self.library, &request.uri) {
            Ok(text) => Ok(ReadResourceResult::new(vec![ResourceContents::text(
                text,
                request.uri,
            )])),
            Err(err) => Err(resource_error(&err)),
        }
    }
}

/// Map a resource failure onto an MCP error.
fn resource_error(err: &DocsError) -> ErrorData {
    match err {
        DocsError::UnsupportedIdentifier { .. } => ErrorData::invalid_params(err.to_string(), None),
        err if err.is_not_found() => ErrorData::resource_not_found(err.to_string(), None),
        err => ErrorData::internal_error(err.to_string(), None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_identifier_maps_to_invalid_params() {
        let err = DocsError::UnsupportedIdentifier {
            uri: "http://example.com".to_string(),
        };
        assert_eq!(resource_error(&err).code, ErrorCode::INVALID_PARAMS);
    }

    #[test]
    fn unknown_resource_maps_to_not_found() {
        let err = DocsError::UnknownResource {
            uri: "framework-docs:///laravel/missing.md".to_string(),
        };
        assert_eq!(resource_error(&err).code, ErrorCode::RESOURCE_NOT_FOUND);
    }

    #[test]
    fn server_info_advertises_tools_and_resources() {
        let info = DocsServer::new(Library::default()).get_info();
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.resources.is_some());
        assert!(info.instructions.is_some_and(|text| text.contains("smart_search")));
    }
}
