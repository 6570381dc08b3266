//! `list-frameworks` tool: frameworks represented in the corpus.

use crate::error::Result;
use crate::format::{FrameworkEntry, Response};
use crate::state::KnowledgeState;

/// Return one bullet per distinct framework, showing display name and id.
pub async fn handle_list_frameworks(state: &KnowledgeState) -> Result<String> {
    let index = state.index().await;
    let entries: Vec<FrameworkEntry> = index
        .frameworks()
        .iter()
        .map(|id| FrameworkEntry::from_id(id))
        .collect();

    Ok(Response::FrameworkList(entries).to_text())
}
