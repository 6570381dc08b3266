pub mod document;
pub mod error;
pub mod format;
pub mod index;
pub mod knowledge;
pub mod loader;
pub mod search;
pub mod server;
pub mod state;
pub mod tools;
pub mod tracing;

pub use document::DocumentMeta;
pub use error::{KnowledgeError, Result};
pub use index::CorpusIndex;
pub use knowledge::{
    CompleteSliceKnowledge, FrameworkArchitecture, KnowledgeComposer, SliceArchitecture,
};
pub use loader::DocumentLoader;
pub use search::{SearchEngine, SearchQuery, SearchResult};
pub use server::KnowledgeServer;
pub use state::KnowledgeState;
