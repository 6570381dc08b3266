//! Document metadata model and corpus header parsing.
//!
//! A corpus document is a markdown file that may begin with a TOML metadata
//! header delimited by `---` lines:
//!
//! ```text
//! ---
//! id = "gateway"
//! title = "Gateway Pattern"
//! category = "patterns"
//! tags = ["gateway", "data-access"]
//! framework = "nestjs"
//! description = "Data access through a gateway"
//! ---
//! body…
//! ```
//!
//! The header is optional. A file without one is indexed with metadata
//! derived from its file stem and remains searchable by name.

use serde::Deserialize;

/// Delimiter line opening and closing a metadata header.
const HEADER_FENCE: &str = "---";

/// Indexed metadata for a single corpus document.
///
/// Never carries loaded content. The `path` is the file's location relative
/// to the corpus root with `/` separators and is globally unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentMeta {
    pub path: String,
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub tags: Vec<String>,
    pub framework: Option<String>,
}

impl DocumentMeta {
    /// Whether this document belongs to the given framework
    /// (case-insensitive).
    pub fn in_framework(&self, framework: &str) -> bool {
        self.framework
            .as_deref()
            .is_some_and(|f| f.eq_ignore_ascii_case(framework))
    }

    /// Whether this document has the given category (case-insensitive).
    pub fn has_category(&self, category: &str) -> bool {
        self.category
            .as_deref()
            .is_some_and(|c| c.eq_ignore_ascii_case(category))
    }

    /// Whether this document carries the given tag (case-insensitive).
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}

/// Raw header shape as written in the corpus files.
#[derive(Debug, Default, Deserialize)]
struct Header {
    #[serde(default)]
    #[allow(dead_code)] // authoring identifier, not used by the engine
    id: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    framework: Option<String>,
}

/// Outcome of parsing a corpus file into metadata.
#[derive(Debug)]
pub enum ParsedDocument {
    /// Header parsed (or absent); document is indexable.
    Indexed(DocumentMeta),
    /// Header present but unparseable; document is skipped with a warning.
    Malformed(String),
}

/// Parse the metadata header of a corpus file into a [`DocumentMeta`].
///
/// `path` is the corpus-relative identifier the document will be indexed
/// under. Files with no header fence get fallback metadata from the file
/// stem; files with a broken header report [`ParsedDocument::Malformed`].
pub fn parse_metadata(path: &str, raw: &str) -> ParsedDocument {
    let Some(header_text) = header_block(raw) else {
        return ParsedDocument::Indexed(fallback_meta(path));
    };

    match toml::from_str::<Header>(header_text) {
        Ok(header) => {
            let mut tags = header.tags;
            tags.sort();
            tags.dedup();

            ParsedDocument::Indexed(DocumentMeta {
                path: path.to_string(),
                name: header.title.unwrap_or_else(|| stem_title(path)),
                description: header.description.filter(|d| !d.trim().is_empty()),
                category: header.category.filter(|c| !c.trim().is_empty()),
                tags,
                framework: header.framework.filter(|f| !f.trim().is_empty()),
            })
        }
        Err(e) => ParsedDocument::Malformed(e.to_string()),
    }
}

/// Return the body of a corpus file, with any metadata header removed.
///
/// Files without a header fence are returned unchanged; an unterminated
/// header is treated as body text rather than silently swallowed.
pub fn strip_header(raw: &str) -> &str {
    split_document(raw).map_or(raw, |(_, body)| body)
}

/// Extract the text between the opening and closing header fences, if the
/// file starts with one.
fn header_block(raw: &str) -> Option<&str> {
    split_document(raw).map(|(header, _)| header)
}

/// Split a corpus file into `(header, body)` at the fence lines.
///
/// Returns `None` when the file does not open with a fence line or the
/// header is never closed.
fn split_document(raw: &str) -> Option<(&str, &str)> {
    let content = raw.trim_start_matches('\u{feff}');
    let first_line_end = content.find('\n')?;
    if content[..first_line_end].trim_end() != HEADER_FENCE {
        return None;
    }

    let rest = &content[first_line_end + 1..];
    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == HEADER_FENCE {
            let header = &rest[..offset];
            let body = &rest[offset + line.len()..];
            return Some((header, body.trim_start_matches('\n')));
        }
        offset += line.len();
    }
    None
}

/// Metadata for a document with no header: name from the file stem,
/// everything else empty.
fn fallback_meta(path: &str) -> DocumentMeta {
    DocumentMeta {
        path: path.to_string(),
        name: stem_title(path),
        description: None,
        category: None,
        tags: Vec::new(),
        framework: None,
    }
}

/// Derive a human-readable title from a path's file stem:
/// `patterns/data-gateway.md` becomes `Data Gateway`.
fn stem_title(path: &str) -> String {
    let stem = path
        .rsplit('/')
        .next()
        .unwrap_or(path)
        .trim_end_matches(".md");

    let mut title = String::with_capacity(stem.len());
    for (i, word) in stem.split(['-', '_']).filter(|w| !w.is_empty()).enumerate() {
        if i > 0 {
            title.push(' ');
        }
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            title.extend(first.to_uppercase());
            title.push_str(chars.as_str());
        }
    }
    title
}
