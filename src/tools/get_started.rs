//! `get-started` tool: orientation document for new callers.

use crate::error::Result;
use crate::state::KnowledgeState;

/// Well-known corpus path of the orientation document.
///
/// A corpus without this document is misconfigured; the tool fails with
/// `DocumentNotFoundError` rather than inventing content.
pub const GET_STARTED_PATH: &str = "get-started.md";

/// Return the orientation document.
pub async fn handle_get_started(state: &KnowledgeState) -> Result<String> {
    let engine = super::engine(state).await;
    let content = engine.load(GET_STARTED_PATH).await?;
    Ok(content.to_string())
}
