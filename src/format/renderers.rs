//! Markdown rendering for each response shape.
//!
//! Heading structure, section ordering and separators are part of the tool
//! contract; clients parse these headings, so changes here are breaking.

use crate::format::FrameworkEntry;
use crate::knowledge::{CompleteSliceKnowledge, FrameworkArchitecture, SliceArchitecture};
use crate::search::SearchResult;
use std::fmt::Write as _;

/// Fixed message rendered when a search matches nothing.
pub const NO_RESULTS_MESSAGE: &str = "No documents found matching your query.";

/// Separator between top-level sections of a composed response.
const SECTION_BREAK: &str = "\n\n---\n\n";

pub(crate) fn framework_list(frameworks: &[FrameworkEntry]) -> String {
    let mut out = String::from("# Available Frameworks\n\n");

    if frameworks.is_empty() {
        out.push_str("_No frameworks indexed._\n");
        return out;
    }

    for entry in frameworks {
        let _ = writeln!(out, "- **{}** (`{}`)", entry.name, entry.id);
    }
    out
}

pub(crate) fn framework_architecture(arch: &FrameworkArchitecture) -> String {
    let mut out = format!("# {} Architecture\n\n", arch.framework_name);

    out.push_str("## Overview\n\n");
    out.push_str(arch.overview.trim_end());
    out.push_str(SECTION_BREAK);

    out.push_str("## When To Use\n\n");
    out.push_str(arch.when_to_use.trim_end());
    out.push_str(SECTION_BREAK);

    out.push_str("## Checklist\n\n");
    out.push_str(arch.checklist.trim_end());
    out.push('\n');
    out
}

pub(crate) fn slice_architecture(slice: &SliceArchitecture) -> String {
    let mut out = format!(
        "# {}: {} Slice\n\n",
        slice.framework_name, slice.slice_name
    );

    out.push_str("## Tutorial\n\n");
    out.push_str(slice.tutorial.trim_end());
    out.push_str(SECTION_BREAK);

    out.push_str("## Checklist\n\n");
    out.push_str(slice.checklist.trim_end());
    out.push_str(SECTION_BREAK);

    out.push_str("## Available Documents\n\n");
    if slice.available_docs.is_empty() {
        out.push_str("_No related pattern documents._\n");
    } else {
        for doc in &slice.available_docs {
            match &doc.description {
                Some(description) => {
                    let _ = writeln!(out, "- **{}**: {}", doc.name, description);
                }
                None => {
                    let _ = writeln!(out, "- **{}**", doc.name);
                }
            }
            let _ = writeln!(out, "  `{}`", doc.path);
        }
    }
    out
}

pub(crate) fn complete_slice_knowledge(knowledge: &CompleteSliceKnowledge) -> String {
    let mut out = format!(
        "# {}: {} Slice (Complete)\n\n",
        knowledge.framework_name, knowledge.slice_name
    );

    out.push_str("## Tutorial\n\n");
    out.push_str(knowledge.tutorial.trim_end());
    out.push_str(SECTION_BREAK);

    out.push_str("## Checklist\n\n");
    out.push_str(knowledge.checklist.trim_end());

    for (name, content) in &knowledge.documents {
        out.push_str(SECTION_BREAK);
        let _ = write!(out, "## {}\n\n", name);
        out.push_str(content.trim_end());
    }

    out.push('\n');
    out
}

pub(crate) fn search_results(results: &[SearchResult]) -> String {
    if results.is_empty() {
        return NO_RESULTS_MESSAGE.to_string();
    }

    let noun = if results.len() == 1 {
        "document"
    } else {
        "documents"
    };
    let mut out = format!("# Search Results\n\nFound {} {}.\n", results.len(), noun);

    for (idx, result) in results.iter().enumerate() {
        out.push_str(SECTION_BREAK);
        let _ = write!(out, "## {}. {}\n\n", idx + 1, result.meta.name);

        if let Some(description) = &result.meta.description {
            let _ = write!(out, "{}\n\n", description);
        }

        if let Some(category) = &result.meta.category {
            let _ = writeln!(out, "**Category**: {}", category);
        }
        if !result.meta.tags.is_empty() {
            let _ = writeln!(out, "**Tags**: {}", result.meta.tags.join(", "));
        }
        let _ = writeln!(out, "**Score**: {}", result.relevance_score);
        let _ = writeln!(out, "**Source**: {}", result.source);

        let _ = write!(out, "\n**Path**: `{}`\n\n", result.meta.path);
        out.push_str(result.content.trim_end());
    }

    out.push('\n');
    out
}

/// Bulleted category list for `list-categories`.
pub(crate) fn category_list(categories: &[String]) -> String {
    let mut out = String::from("# Document Categories\n\n");

    if categories.is_empty() {
        out.push_str("_No categories indexed._\n");
        return out;
    }

    for category in categories {
        let _ = writeln!(out, "- {}", category);
    }
    out
}
