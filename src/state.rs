//! Shared process-wide knowledge state.
//!
//! Holds the current [`CorpusIndex`] snapshot and the shared
//! [`DocumentLoader`]. The snapshot is read-only after construction;
//! `rebuild` constructs a fresh index and swaps the reference atomically so
//! in-flight readers never observe a half-built index.

use crate::error::Result;
use crate::index::CorpusIndex;
use crate::loader::DocumentLoader;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Central coordination point for the tool handlers.
///
/// Every request takes an `Arc<CorpusIndex>` snapshot up front and works
/// against it for the whole request, so a concurrent rebuild cannot change
/// what a request observes mid-flight.
pub struct KnowledgeState {
    root: PathBuf,
    index: RwLock<Arc<CorpusIndex>>,
    loader: DocumentLoader,
}

impl std::fmt::Debug for KnowledgeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KnowledgeState")
            .field("root", &self.root)
            .finish()
    }
}

impl KnowledgeState {
    /// Build the initial index snapshot for the given corpus root.
    ///
    /// Fails with `CorpusUnreadableError` when the root cannot be scanned;
    /// the server must not start in that case.
    pub fn build(root: &Path) -> Result<Self> {
        let index = CorpusIndex::build(root)?;
        Ok(Self {
            root: root.to_path_buf(),
            index: RwLock::new(Arc::new(index)),
            loader: DocumentLoader::new(root.to_path_buf()),
        })
    }

    /// Current index snapshot.
    pub async fn index(&self) -> Arc<CorpusIndex> {
        self.index.read().await.clone()
    }

    /// Shared content loader.
    pub fn loader(&self) -> &DocumentLoader {
        &self.loader
    }

    /// Corpus root this state serves.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Re-scan the corpus and atomically swap in the new snapshot.
    ///
    /// The old snapshot stays valid for requests already holding it.
    pub async fn rebuild(&self) -> Result<()> {
        let fresh = Arc::new(CorpusIndex::build(&self.root)?);
        *self.index.write().await = fresh;
        self.loader.clear_cache().await;
        tracing::info!("corpus index rebuilt from {}", self.root.display());
        Ok(())
    }
}
