//! Composition tools: `get-framework`, `get-slice`, `get-slice-complete`.

use crate::error::Result;
use crate::format::Response;
use crate::state::KnowledgeState;
use rmcp::schemars;
use serde::Deserialize;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct FrameworkRequest {
    /// Framework identifier (e.g. "nestjs"), as listed by list-frameworks
    pub framework: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SliceRequest {
    /// Framework identifier (e.g. "nestjs")
    pub framework: String,
    /// Slice/topic name scoping the composed knowledge (e.g. "user")
    pub slice: String,
}

/// Compose and render the framework-level architecture documentation.
pub async fn handle_get_framework(
    state: &KnowledgeState,
    request: FrameworkRequest,
) -> Result<String> {
    let framework = super::require_field("framework", &request.framework)?;

    let composer = super::composer(state).await;
    let arch = composer.compose_framework_architecture(framework).await?;
    Ok(Response::Framework(arch).to_text())
}

/// Compose and render the slice architecture view (tutorial, checklist,
/// related document references).
pub async fn handle_get_slice(state: &KnowledgeState, request: SliceRequest) -> Result<String> {
    let framework = super::require_field("framework", &request.framework)?;
    let slice = super::require_field("slice", &request.slice)?;

    let composer = super::composer(state).await;
    let arch = composer.compose_slice_architecture(framework, slice).await?;
    Ok(Response::Slice(arch).to_text())
}

/// Compose and render the complete slice knowledge view with every related
/// pattern document embedded in full.
pub async fn handle_get_slice_complete(
    state: &KnowledgeState,
    request: SliceRequest,
) -> Result<String> {
    let framework = super::require_field("framework", &request.framework)?;
    let slice = super::require_field("slice", &request.slice)?;

    let composer = super::composer(state).await;
    let knowledge = composer
        .compose_complete_slice_knowledge(framework, slice)
        .await?;
    Ok(Response::CompleteSlice(knowledge).to_text())
}
