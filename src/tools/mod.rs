//! Tool operation handlers.
//!
//! Each module pairs a schemars request struct with a `handle_*` function.
//! Handlers validate inputs before touching the index, dispatch to the
//! search engine or knowledge composer, and return rendered markdown.

pub mod get_started;
pub mod knowledge;
pub mod list_categories;
pub mod list_frameworks;
pub mod read_doc;
pub mod search;

use crate::error::{KnowledgeError, Result};
use crate::knowledge::KnowledgeComposer;
use crate::search::SearchEngine;
use crate::state::KnowledgeState;

/// Validate that a required string field is present and non-blank.
///
/// Runs before any index access so invalid input never reaches the engine.
pub(crate) fn require_field<'a>(field: &str, value: &'a str) -> Result<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(KnowledgeError::invalid_query(field, "must be a non-empty string").into());
    }
    Ok(trimmed)
}

/// Build a request-scoped search engine over the current index snapshot.
pub(crate) async fn engine(state: &KnowledgeState) -> SearchEngine {
    SearchEngine::new(state.index().await, state.loader().clone())
}

/// Build a request-scoped knowledge composer over the current snapshot.
pub(crate) async fn composer(state: &KnowledgeState) -> KnowledgeComposer {
    KnowledgeComposer::new(engine(state).await)
}
