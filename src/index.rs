//! In-memory catalog of corpus document metadata.
//!
//! The index holds metadata only; document bodies are loaded on demand by
//! [`crate::loader::DocumentLoader`]. An index is immutable once built and
//! shared behind an `Arc`; rebuilding produces a fresh snapshot that is
//! swapped in atomically by [`crate::state::KnowledgeState`].

use crate::document::{DocumentMeta, ParsedDocument, parse_metadata};
use crate::error::{KnowledgeError, Result};
use ahash::AHashMap;
use ignore::WalkBuilder;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

/// Immutable snapshot of indexed document metadata.
///
/// Records are stored in scan order (sorted corpus-relative path), which is
/// the tie-break order for equal search scores.
#[derive(Debug, Default)]
pub struct CorpusIndex {
    documents: Vec<DocumentMeta>,
    by_path: AHashMap<String, usize>,
}

impl CorpusIndex {
    /// Scan the corpus root and build a metadata index.
    ///
    /// Individual malformed documents are skipped with a warning; an
    /// unreadable root fails with [`KnowledgeError::CorpusUnreadable`].
    pub fn build(root: &Path) -> Result<Self> {
        if !root.is_dir() {
            return Err(KnowledgeError::CorpusUnreadable {
                root: root.to_path_buf(),
                reason: "not a directory".to_string(),
            }
            .into());
        }

        let mut files = Vec::new();
        for entry in WalkBuilder::new(root).build() {
            let entry = entry.map_err(|e| KnowledgeError::CorpusUnreadable {
                root: root.to_path_buf(),
                reason: e.to_string(),
            })?;

            if entry.file_type().is_some_and(|t| t.is_file())
                && entry.path().extension().is_some_and(|ext| ext == "md")
            {
                files.push(entry.into_path());
            }
        }

        // Walk order varies by platform; sorted relative paths give a
        // deterministic scan order, which search tie-breaking relies on.
        files.sort();

        let mut documents = Vec::with_capacity(files.len());
        let mut by_path = AHashMap::with_capacity(files.len());

        for file in files {
            let Some(rel_path) = relative_id(root, &file) else {
                continue;
            };

            let raw = match fs::read_to_string(&file) {
                Ok(raw) => raw,
                Err(e) => {
                    tracing::warn!("skipping unreadable document {}: {}", rel_path, e);
                    continue;
                }
            };

            match parse_metadata(&rel_path, &raw) {
                ParsedDocument::Indexed(meta) => {
                    by_path.insert(meta.path.clone(), documents.len());
                    documents.push(meta);
                }
                ParsedDocument::Malformed(reason) => {
                    tracing::warn!("skipping malformed document {}: {}", rel_path, reason);
                }
            }
        }

        tracing::info!("indexed {} documents from {}", documents.len(), root.display());

        Ok(Self { documents, by_path })
    }

    /// Full snapshot of indexed metadata, in scan order.
    pub fn all(&self) -> &[DocumentMeta] {
        &self.documents
    }

    /// Look up a document's metadata by its corpus-relative path.
    pub fn get(&self, path: &str) -> Option<&DocumentMeta> {
        self.by_path.get(path).map(|&i| &self.documents[i])
    }

    /// Whether the index contains the given path.
    pub fn contains(&self, path: &str) -> bool {
        self.by_path.contains_key(path)
    }

    /// Distinct non-empty category values, sorted.
    pub fn categories(&self) -> Vec<String> {
        self.documents
            .iter()
            .filter_map(|d| d.category.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Distinct non-empty framework identifiers, sorted.
    pub fn frameworks(&self) -> Vec<String> {
        self.documents
            .iter()
            .filter_map(|d| d.framework.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

/// Corpus-relative identifier for a file, with `/` separators on every
/// platform.
fn relative_id(root: &Path, file: &Path) -> Option<String> {
    let rel = file.strip_prefix(root).ok()?;
    let parts: Vec<_> = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect();
    Some(parts.join("/"))
}
