//! Multi-document knowledge composition.
//!
//! Assembles framework- and slice-scoped aggregates from the corpus:
//! framework docs (overview, when-to-use, checklist), slice docs (tutorial,
//! checklist) and related pattern documents discovered through the search
//! engine. Composed knowledge is complete or fails explicitly; a missing
//! expected document is an error, never a silently empty section.
//!
//! Corpus conventions consumed here:
//! - framework-level docs carry `framework` plus category `overview`,
//!   `when-to-use` or `checklist` and an empty tag set;
//! - slice-level docs carry `framework`, the slice name in `tags`, and
//!   category `tutorial` or `checklist`.

use crate::document::DocumentMeta;
use crate::error::{KnowledgeError, Result};
use crate::search::{SearchEngine, SearchQuery};
use std::sync::Arc;

/// Category of a framework's orientation document.
const CATEGORY_OVERVIEW: &str = "overview";
/// Category of a framework's applicability document.
const CATEGORY_WHEN_TO_USE: &str = "when-to-use";
/// Category shared by framework- and slice-level checklists.
const CATEGORY_CHECKLIST: &str = "checklist";
/// Category of slice tutorials.
const CATEGORY_TUTORIAL: &str = "tutorial";

/// Framework-level aggregate: overview, when-to-use and checklist content.
#[derive(Debug, Clone)]
pub struct FrameworkArchitecture {
    pub framework_name: String,
    pub overview: Arc<str>,
    pub when_to_use: Arc<str>,
    pub checklist: Arc<str>,
}

/// Lightweight reference to a related pattern document.
#[derive(Debug, Clone)]
pub struct DocRef {
    pub name: String,
    pub description: Option<String>,
    pub path: String,
}

impl From<&DocumentMeta> for DocRef {
    fn from(meta: &DocumentMeta) -> Self {
        Self {
            name: meta.name.clone(),
            description: meta.description.clone(),
            path: meta.path.clone(),
        }
    }
}

/// Slice-scoped aggregate: tutorial and checklist content plus references
/// to related pattern documents (content not embedded at this level).
#[derive(Debug, Clone)]
pub struct SliceArchitecture {
    pub framework_name: String,
    pub slice_name: String,
    pub tutorial: Arc<str>,
    pub checklist: Arc<str>,
    pub available_docs: Vec<DocRef>,
}

/// Superset of [`SliceArchitecture`] with every discovered pattern
/// document's full content embedded, keyed by document name in discovery
/// order.
#[derive(Debug, Clone)]
pub struct CompleteSliceKnowledge {
    pub framework_name: String,
    pub slice_name: String,
    pub tutorial: Arc<str>,
    pub checklist: Arc<str>,
    pub documents: Vec<(String, Arc<str>)>,
}

/// Request-scoped composer over one index snapshot.
#[derive(Debug, Clone)]
pub struct KnowledgeComposer {
    engine: SearchEngine,
}

impl KnowledgeComposer {
    pub fn new(engine: SearchEngine) -> Self {
        Self { engine }
    }

    /// Compose the framework-level architecture aggregate.
    ///
    /// Fails with `FrameworkNotFoundError` when no indexed document belongs
    /// to the framework at all, and with `DocumentNotFoundError` naming the
    /// missing piece when the framework exists but one of its three
    /// framework-level documents does not.
    pub async fn compose_framework_architecture(
        &self,
        framework: &str,
    ) -> Result<FrameworkArchitecture> {
        self.require_framework(framework)?;

        let overview = self.framework_doc(framework, CATEGORY_OVERVIEW).await?;
        let when_to_use = self.framework_doc(framework, CATEGORY_WHEN_TO_USE).await?;
        let checklist = self.framework_doc(framework, CATEGORY_CHECKLIST).await?;

        Ok(FrameworkArchitecture {
            framework_name: framework.to_string(),
            overview,
            when_to_use,
            checklist,
        })
    }

    /// Compose the slice architecture view: tutorial + checklist content
    /// and name/description/path references for related pattern documents.
    pub async fn compose_slice_architecture(
        &self,
        framework: &str,
        slice: &str,
    ) -> Result<SliceArchitecture> {
        self.require_framework(framework)?;

        let (tutorial_meta, tutorial) = self
            .slice_doc(framework, slice, CATEGORY_TUTORIAL)
            .await?;
        let (checklist_meta, checklist) = self
            .slice_doc(framework, slice, CATEGORY_CHECKLIST)
            .await?;

        let own_docs = [tutorial_meta.path.as_str(), checklist_meta.path.as_str()];
        let available_docs = self
            .related_docs(framework, slice, &own_docs)
            .iter()
            .map(DocRef::from)
            .collect();

        Ok(SliceArchitecture {
            framework_name: framework.to_string(),
            slice_name: slice.to_string(),
            tutorial,
            checklist,
            available_docs,
        })
    }

    /// Compose the complete slice knowledge view: as
    /// [`Self::compose_slice_architecture`], but with the full content of
    /// every discovered pattern document embedded. Insertion order follows
    /// the discovery order of the underlying search.
    pub async fn compose_complete_slice_knowledge(
        &self,
        framework: &str,
        slice: &str,
    ) -> Result<CompleteSliceKnowledge> {
        self.require_framework(framework)?;

        let (tutorial_meta, tutorial) = self
            .slice_doc(framework, slice, CATEGORY_TUTORIAL)
            .await?;
        let (checklist_meta, checklist) = self
            .slice_doc(framework, slice, CATEGORY_CHECKLIST)
            .await?;

        let own_docs = [tutorial_meta.path.as_str(), checklist_meta.path.as_str()];
        let related = self.related_docs(framework, slice, &own_docs);

        let mut documents: Vec<(String, Arc<str>)> = Vec::with_capacity(related.len());
        for meta in related {
            if documents.iter().any(|(name, _)| *name == meta.name) {
                tracing::debug!("duplicate pattern name '{}', keeping first", meta.name);
                continue;
            }
            let content = self.engine.load(&meta.path).await?;
            documents.push((meta.name, content));
        }

        Ok(CompleteSliceKnowledge {
            framework_name: framework.to_string(),
            slice_name: slice.to_string(),
            tutorial,
            checklist,
            documents,
        })
    }

    /// Fail with `FrameworkNotFoundError` unless at least one indexed
    /// document belongs to the framework.
    fn require_framework(&self, framework: &str) -> Result<()> {
        let known = self
            .engine
            .index()
            .all()
            .iter()
            .any(|doc| doc.in_framework(framework));

        if known {
            Ok(())
        } else {
            Err(KnowledgeError::FrameworkNotFound {
                framework: framework.to_string(),
            }
            .into())
        }
    }

    /// Locate and load a framework-level document by category.
    async fn framework_doc(&self, framework: &str, category: &str) -> Result<Arc<str>> {
        let meta = self
            .engine
            .index()
            .all()
            .iter()
            .find(|doc| {
                doc.in_framework(framework) && doc.has_category(category) && doc.tags.is_empty()
            })
            .ok_or_else(|| {
                KnowledgeError::document_not_found(format!(
                    "{} document for framework '{}'",
                    category, framework
                ))
            })?;

        self.engine.load(&meta.path).await
    }

    /// Locate and load a slice-scoped document by category, returning its
    /// metadata alongside the content.
    async fn slice_doc(
        &self,
        framework: &str,
        slice: &str,
        category: &str,
    ) -> Result<(DocumentMeta, Arc<str>)> {
        let meta = self
            .engine
            .index()
            .all()
            .iter()
            .find(|doc| {
                doc.in_framework(framework) && doc.has_category(category) && doc.has_tag(slice)
            })
            .cloned()
            .ok_or_else(|| {
                KnowledgeError::document_not_found(format!(
                    "{} for slice '{}' in framework '{}'",
                    category, slice, framework
                ))
            })?;

        let content = self.engine.load(&meta.path).await?;
        Ok((meta, content))
    }

    /// Pattern documents related to a slice, in ranked discovery order.
    ///
    /// Runs the search query `{framework, tags: [slice]}`, keeps only hits
    /// actually tagged with the slice (the additive scoring would otherwise
    /// admit every framework document), and drops the slice's own
    /// tutorial/checklist documents.
    fn related_docs(&self, framework: &str, slice: &str, exclude: &[&str]) -> Vec<DocumentMeta> {
        let query = SearchQuery {
            framework: Some(framework.to_string()),
            tags: vec![slice.to_string()],
            ..SearchQuery::default()
        };

        self.engine
            .rank(&query)
            .into_iter()
            .map(|ranked| ranked.meta)
            .filter(|meta| meta.has_tag(slice) && !exclude.contains(&meta.path.as_str()))
            .collect()
    }
}
