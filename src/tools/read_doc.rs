//! `read-doc` tool: raw document content by path.

use crate::error::Result;
use crate::format::ResourcePayload;
use crate::state::KnowledgeState;
use rmcp::schemars;
use serde::Deserialize;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ReadDocRequest {
    /// Corpus-relative document path, as returned by search results
    pub path: String,
}

/// Return the raw content of one document.
pub async fn handle_read_doc(state: &KnowledgeState, request: ReadDocRequest) -> Result<String> {
    let path = super::require_field("path", &request.path)?;

    let engine = super::engine(state).await;
    let content = engine.load(path).await?;
    Ok(content.to_string())
}

/// Resource-style variant of `read-doc` for addressable retrieval.
pub async fn handle_read_doc_resource(
    state: &KnowledgeState,
    request: ReadDocRequest,
) -> Result<ResourcePayload> {
    let path = super::require_field("path", &request.path)?;

    let engine = super::engine(state).await;
    let content = engine.load(path).await?;
    Ok(ResourcePayload::markdown(
        format!("doc://{}", path),
        content.to_string(),
    ))
}
