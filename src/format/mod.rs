//! Response shaping for the tool surface.
//!
//! Every response aggregate is a [`Response`] variant sharing one formatting
//! contract: `to_text` renders the markdown body, `to_tool_payload` wraps it
//! for a tool call, and `to_resource_payload` wraps it for retrieval as an
//! addressable resource with a MIME type.

pub(crate) mod renderers;

use crate::knowledge::{CompleteSliceKnowledge, FrameworkArchitecture, SliceArchitecture};
use crate::search::SearchResult;
use serde::Serialize;

pub use renderers::NO_RESULTS_MESSAGE;

/// MIME type attached to resource-style payloads.
const MARKDOWN_MIME: &str = "text/markdown";

/// One framework row in the `list-frameworks` response.
#[derive(Debug, Clone)]
pub struct FrameworkEntry {
    pub name: String,
    pub id: String,
}

impl FrameworkEntry {
    /// Build an entry from a framework identifier, deriving the display
    /// name by capitalizing the id's words: `spring-boot` → `Spring Boot`.
    pub fn from_id(id: &str) -> Self {
        let name = id
            .split(['-', '_'])
            .filter(|w| !w.is_empty())
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ");

        Self {
            name,
            id: id.to_string(),
        }
    }
}

/// A formatted response produced by a tool operation.
#[derive(Debug)]
pub enum Response {
    FrameworkList(Vec<FrameworkEntry>),
    Framework(FrameworkArchitecture),
    Slice(SliceArchitecture),
    CompleteSlice(CompleteSliceKnowledge),
    SearchResults(Vec<SearchResult>),
}

impl Response {
    /// Render the markdown body of this response.
    pub fn to_text(&self) -> String {
        match self {
            Self::FrameworkList(frameworks) => renderers::framework_list(frameworks),
            Self::Framework(arch) => renderers::framework_architecture(arch),
            Self::Slice(slice) => renderers::slice_architecture(slice),
            Self::CompleteSlice(knowledge) => renderers::complete_slice_knowledge(knowledge),
            Self::SearchResults(results) => renderers::search_results(results),
        }
    }

    /// Wrap the rendered body as a tool-call payload:
    /// `{ content: [{ type: "text", text }] }`.
    pub fn to_tool_payload(&self) -> ToolPayload {
        ToolPayload::text(self.to_text())
    }

    /// Wrap the rendered body as an addressable resource payload with a
    /// markdown MIME type.
    pub fn to_resource_payload(&self, uri: impl Into<String>) -> ResourcePayload {
        ResourcePayload::markdown(uri, self.to_text())
    }
}

/// Tool-call payload wrapper.
#[derive(Debug, Serialize)]
pub struct ToolPayload {
    pub content: Vec<TextContent>,
}

impl ToolPayload {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![TextContent {
                kind: "text",
                text: text.into(),
            }],
        }
    }
}

/// One text block inside a tool-call payload.
#[derive(Debug, Serialize)]
pub struct TextContent {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub text: String,
}

/// Resource-style payload for shapes retrievable by URI.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourcePayload {
    pub uri: String,
    pub mime_type: &'static str,
    pub text: String,
}

impl ResourcePayload {
    pub fn markdown(uri: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            mime_type: MARKDOWN_MIME,
            text: text.into(),
        }
    }
}
