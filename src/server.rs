//! MCP server implementation.

use crate::error::to_tool_error;
use crate::state::KnowledgeState;
use crate::tools::get_started::handle_get_started;
use crate::tools::knowledge::{
    FrameworkRequest, SliceRequest, handle_get_framework, handle_get_slice,
    handle_get_slice_complete,
};
use crate::tools::list_categories::handle_list_categories;
use crate::tools::list_frameworks::handle_list_frameworks;
use crate::tools::read_doc::{ReadDocRequest, handle_read_doc};
use crate::tools::search::{SearchRequest, handle_search};
use rmcp::{
    ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::*,
    tool, tool_handler, tool_router,
};
use std::sync::Arc;

/// MCP server for architecture documentation queries.
///
/// Every tool call is a stateless request/response cycle against the
/// immutable index snapshot held by [`KnowledgeState`].
#[derive(Clone)]
pub struct KnowledgeServer {
    /// Shared knowledge state (index snapshot, content loader)
    state: Arc<KnowledgeState>,

    /// Tool router for handling MCP tool calls
    tool_router: ToolRouter<Self>,
}

impl std::fmt::Debug for KnowledgeServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KnowledgeServer")
            .field("state", &self.state)
            .finish()
    }
}

#[tool_router]
impl KnowledgeServer {
    pub fn new(state: Arc<KnowledgeState>) -> Self {
        Self {
            state,
            tool_router: Self::tool_router(),
        }
    }

    /// Get a reference to the shared knowledge state.
    pub fn state(&self) -> &Arc<KnowledgeState> {
        &self.state
    }

    #[tool(
        name = "get-started",
        description = "Read the orientation document explaining how to navigate this documentation corpus. Call this first."
    )]
    async fn get_started(&self) -> std::result::Result<String, String> {
        handle_get_started(&self.state)
            .await
            .map_err(|e| to_tool_error(&e))
    }

    #[tool(
        name = "list-categories",
        description = "List the distinct document categories present in the corpus."
    )]
    async fn list_categories(&self) -> std::result::Result<String, String> {
        handle_list_categories(&self.state)
            .await
            .map_err(|e| to_tool_error(&e))
    }

    #[tool(
        name = "list-frameworks",
        description = "List the frameworks this corpus documents, with their identifiers."
    )]
    async fn list_frameworks(&self) -> std::result::Result<String, String> {
        handle_list_frameworks(&self.state)
            .await
            .map_err(|e| to_tool_error(&e))
    }

    #[tool(
        name = "search",
        description = "Search the documentation corpus. Combines free text with category, framework and tag filters; returns ranked results with full content."
    )]
    async fn search(
        &self,
        Parameters(request): Parameters<SearchRequest>,
    ) -> std::result::Result<String, String> {
        handle_search(&self.state, request)
            .await
            .map_err(|e| to_tool_error(&e))
    }

    #[tool(
        name = "read-doc",
        description = "Read the raw content of a single document by its corpus-relative path."
    )]
    async fn read_doc(
        &self,
        Parameters(request): Parameters<ReadDocRequest>,
    ) -> std::result::Result<String, String> {
        handle_read_doc(&self.state, request)
            .await
            .map_err(|e| to_tool_error(&e))
    }

    #[tool(
        name = "get-framework",
        description = "Get a framework's composed architecture documentation: overview, when to use it, and its checklist."
    )]
    async fn get_framework(
        &self,
        Parameters(request): Parameters<FrameworkRequest>,
    ) -> std::result::Result<String, String> {
        handle_get_framework(&self.state, request)
            .await
            .map_err(|e| to_tool_error(&e))
    }

    #[tool(
        name = "get-slice",
        description = "Get the architecture view for a framework slice: tutorial, checklist, and references to related pattern documents."
    )]
    async fn get_slice(
        &self,
        Parameters(request): Parameters<SliceRequest>,
    ) -> std::result::Result<String, String> {
        handle_get_slice(&self.state, request)
            .await
            .map_err(|e| to_tool_error(&e))
    }

    #[tool(
        name = "get-slice-complete",
        description = "Get the complete knowledge for a framework slice: tutorial, checklist, and the full content of every related pattern document."
    )]
    async fn get_slice_complete(
        &self,
        Parameters(request): Parameters<SliceRequest>,
    ) -> std::result::Result<String, String> {
        handle_get_slice_complete(&self.state, request)
            .await
            .map_err(|e| to_tool_error(&e))
    }
}

#[tool_handler]
impl ServerHandler for KnowledgeServer {
    fn get_info(&self) -> ServerInfo {
        let mut info = ServerInfo::default();
        info.protocol_version = ProtocolVersion::V_2024_11_05;
        info.capabilities = ServerCapabilities::builder().enable_tools().build();
        info.server_info = Implementation::from_build_env();
        info.instructions = Some(
            "archdoc-mcp: architecture documentation knowledge server. \
             Call get-started for orientation, list-categories and \
             list-frameworks to discover the corpus, search for ranked \
             retrieval, and the get-framework/get-slice tools for \
             composed multi-document knowledge."
                .to_string(),
        );
        info
    }
}
