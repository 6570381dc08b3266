//! On-demand document content loading.
//!
//! The index never holds document bodies; this loader reads them lazily,
//! strips the metadata header, and keeps a small LRU of recently loaded
//! bodies so that composed knowledge requests touching the same documents
//! do not re-read the corpus.

use crate::document::strip_header;
use crate::error::{KnowledgeError, Result};
use crate::index::CorpusIndex;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Maximum number of loaded document bodies kept in memory.
const CONTENT_CACHE_SIZE: usize = 64;

/// Loads document bodies by corpus-relative path.
///
/// Cheap to clone; clones share the content cache. Loading is idempotent and
/// validates the path against an index snapshot before touching the
/// filesystem.
#[derive(Clone)]
pub struct DocumentLoader {
    root: Arc<PathBuf>,
    cache: Arc<Mutex<LruCache<String, Arc<str>>>>,
}

impl std::fmt::Debug for DocumentLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentLoader")
            .field("root", &self.root)
            .finish()
    }
}

impl DocumentLoader {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root: Arc::new(root),
            cache: Arc::new(Mutex::new(LruCache::new(
                NonZeroUsize::new(CONTENT_CACHE_SIZE).unwrap(),
            ))),
        }
    }

    /// Load the full body of the document at `path`.
    ///
    /// Fails with [`KnowledgeError::DocumentNotFound`] when the path is not
    /// in the index or the underlying file cannot be read.
    pub async fn load(&self, index: &CorpusIndex, path: &str) -> Result<Arc<str>> {
        if !index.contains(path) {
            return Err(KnowledgeError::document_not_found(path).into());
        }

        {
            let mut cache = self.cache.lock().await;
            if let Some(content) = cache.get(path) {
                tracing::debug!("content cache hit for {}", path);
                return Ok(content.clone());
            }
        }

        let file = self.root.join(path);
        let raw = tokio::fs::read_to_string(&file).await.map_err(|e| {
            tracing::warn!("indexed document {} became unreadable: {}", path, e);
            KnowledgeError::document_not_found(path)
        })?;

        let content: Arc<str> = Arc::from(strip_header(&raw));

        self.cache
            .lock()
            .await
            .put(path.to_string(), content.clone());

        Ok(content)
    }

    /// Drop all cached bodies. Called when the index snapshot is rebuilt.
    pub async fn clear_cache(&self) {
        self.cache.lock().await.clear();
    }
}
