//! `list-categories` tool: distinct category values across the corpus.

use crate::error::Result;
use crate::format::renderers;
use crate::state::KnowledgeState;

/// Return the distinct non-empty categories, one bullet each.
pub async fn handle_list_categories(state: &KnowledgeState) -> Result<String> {
    let index = state.index().await;
    Ok(renderers::category_list(&index.categories()))
}
