//! Query-driven relevance ranking over the corpus index.

pub mod query;
pub mod scoring;

pub use query::SearchQuery;

use crate::document::DocumentMeta;
use crate::error::Result;
use crate::index::CorpusIndex;
use crate::loader::DocumentLoader;
use scoring::score_document;
use std::sync::Arc;

/// Provenance tag attached to every result from this engine.
const LOCAL_SOURCE: &str = "local";

/// A ranked document with metadata only; content not yet loaded.
#[derive(Debug, Clone)]
pub struct RankedDoc {
    pub meta: DocumentMeta,
    pub relevance_score: u32,
}

/// A ranked document with its full content loaded.
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub meta: DocumentMeta,
    pub relevance_score: u32,
    pub source: &'static str,
    pub content: Arc<str>,
}

/// Request-scoped search engine over one index snapshot.
///
/// Constructed per request from [`crate::state::KnowledgeState`]; holds the
/// snapshot for the lifetime of the request so results are consistent even
/// if the index is rebuilt concurrently.
#[derive(Debug, Clone)]
pub struct SearchEngine {
    index: Arc<CorpusIndex>,
    loader: DocumentLoader,
}

impl SearchEngine {
    pub fn new(index: Arc<CorpusIndex>, loader: DocumentLoader) -> Self {
        Self { index, loader }
    }

    /// The index snapshot this engine ranks against.
    pub fn index(&self) -> &CorpusIndex {
        &self.index
    }

    /// Rank documents against the query without loading any content.
    ///
    /// Zero-score documents are excluded. The result is sorted descending by
    /// score; equal scores keep the index scan order (stable sort), so
    /// identical inputs always produce identical output.
    pub fn rank(&self, query: &SearchQuery) -> Vec<RankedDoc> {
        if query.is_empty() {
            return Vec::new();
        }

        let mut ranked: Vec<RankedDoc> = self
            .index
            .all()
            .iter()
            .filter_map(|doc| {
                let score = score_document(query, doc);
                (score > 0).then(|| RankedDoc {
                    meta: doc.clone(),
                    relevance_score: score,
                })
            })
            .collect();

        ranked.sort_by(|a, b| b.relevance_score.cmp(&a.relevance_score));
        ranked
    }

    /// Rank documents and load content for every document that will be
    /// returned. Content is never loaded for zero-score documents.
    pub async fn search(&self, query: &SearchQuery) -> Result<Vec<SearchResult>> {
        let ranked = self.rank(query);
        let mut results = Vec::with_capacity(ranked.len());

        for doc in ranked {
            let content = self.loader.load(&self.index, &doc.meta.path).await?;
            results.push(SearchResult {
                meta: doc.meta,
                relevance_score: doc.relevance_score,
                source: LOCAL_SOURCE,
                content,
            });
        }

        Ok(results)
    }

    /// Load one document's content against this engine's snapshot.
    pub async fn load(&self, path: &str) -> Result<Arc<str>> {
        self.loader.load(&self.index, path).await
    }
}
