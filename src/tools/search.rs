//! `search` tool: ranked retrieval over the corpus.

use crate::error::Result;
use crate::format::Response;
use crate::search::SearchQuery;
use crate::state::KnowledgeState;
use rmcp::schemars;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct SearchRequest {
    /// Free-text query matched against document names and descriptions
    pub text: Option<String>,
    /// Exact category filter (e.g. "patterns", "setup")
    pub category: Option<String>,
    /// Exact framework filter (e.g. "nestjs")
    pub framework: Option<String>,
    /// Tags to match; each intersecting tag raises the score
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Execute a search and render the ranked results.
///
/// An empty request is a valid query that matches nothing; it renders the
/// fixed no-results message rather than failing or returning the corpus.
pub async fn handle_search(state: &KnowledgeState, request: SearchRequest) -> Result<String> {
    let query = SearchQuery {
        text: request.text,
        category: request.category,
        framework: request.framework,
        tags: request.tags,
    };

    let engine = super::engine(state).await;
    let results = engine.search(&query).await?;

    tracing::debug!("search returned {} results", results.len());
    Ok(Response::SearchResults(results).to_text())
}
