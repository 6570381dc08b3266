//! Shared test fixtures and utilities for integration tests.
//!
//! # Test Isolation Strategy
//!
//! Tests use isolated temp corpora to prevent interference. Each test gets:
//! - A fresh temporary directory seeded with corpus documents
//! - Its own `KnowledgeState` with an empty content cache
//!
//! # Available Fixtures
//!
//! - `seeded_corpus`: a representative corpus with two frameworks, a slice,
//!   and pattern documents (recommended for most tests)
//! - `TempCorpus::new()`: an empty corpus to seed manually

use rstest::fixture;
use archdoc_mcp::state::KnowledgeState;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary corpus directory for test isolation.
///
/// Automatically cleaned up when dropped.
pub struct TempCorpus {
    _temp: TempDir,
    root: PathBuf,
}

#[allow(dead_code)] // Methods used across different integration test crates
impl TempCorpus {
    /// Creates a new empty temporary corpus.
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let root = temp.path().to_path_buf();
        Self { _temp: temp, root }
    }

    /// Returns the corpus root path.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Writes a corpus file, creating parent directories as needed.
    pub fn write(&self, path: &str, content: &str) {
        let full_path = self.root.join(path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent)
                .unwrap_or_else(|e| panic!("Failed to create directory for '{}': {}", path, e));
        }
        std::fs::write(&full_path, content)
            .unwrap_or_else(|e| panic!("Failed to write '{}': {}", path, e));
    }

    /// Builds a fresh `KnowledgeState` over the current corpus contents.
    pub fn state(&self) -> KnowledgeState {
        KnowledgeState::build(&self.root).expect("Failed to build knowledge state")
    }
}

/// Render a corpus document with a TOML metadata header.
#[allow(dead_code)]
pub fn doc_with_header(
    title: &str,
    description: Option<&str>,
    category: Option<&str>,
    tags: &[&str],
    framework: Option<&str>,
    body: &str,
) -> String {
    let mut out = String::from("---\n");
    out.push_str(&format!("title = \"{}\"\n", title));
    if let Some(description) = description {
        out.push_str(&format!("description = \"{}\"\n", description));
    }
    if let Some(category) = category {
        out.push_str(&format!("category = \"{}\"\n", category));
    }
    if !tags.is_empty() {
        let quoted: Vec<String> = tags.iter().map(|t| format!("\"{}\"", t)).collect();
        out.push_str(&format!("tags = [{}]\n", quoted.join(", ")));
    }
    if let Some(framework) = framework {
        out.push_str(&format!("framework = \"{}\"\n", framework));
    }
    out.push_str("---\n\n");
    out.push_str(body);
    out.push('\n');
    out
}

/// A representative corpus: orientation doc, two frameworks, the `user`
/// slice of `nestjs`, and two pattern documents.
///
/// Scan order is sorted path order:
/// `get-started.md` < `nestjs/checklist.md` < `nestjs/overview.md`
/// < `nestjs/patterns/controller.md` < `nestjs/patterns/gateway.md`
/// < `nestjs/user/checklist.md` < `nestjs/user/tutorial.md`
/// < `nestjs/when-to-use.md` < `notes/scratch.md` < `react/overview.md`
#[fixture]
pub fn seeded_corpus() -> TempCorpus {
    let corpus = TempCorpus::new();

    corpus.write(
        "get-started.md",
        &doc_with_header(
            "Get Started",
            Some("How to navigate this corpus"),
            Some("quickstart"),
            &[],
            None,
            "# Get Started\n\nUse search to find documents.",
        ),
    );

    corpus.write(
        "nestjs/overview.md",
        &doc_with_header(
            "NestJS Overview",
            Some("What the NestJS architecture looks like"),
            Some("overview"),
            &[],
            Some("nestjs"),
            "NestJS organizes code into modules.",
        ),
    );
    corpus.write(
        "nestjs/when-to-use.md",
        &doc_with_header(
            "When To Use NestJS",
            None,
            Some("when-to-use"),
            &[],
            Some("nestjs"),
            "Use NestJS for structured backends.",
        ),
    );
    corpus.write(
        "nestjs/checklist.md",
        &doc_with_header(
            "NestJS Checklist",
            None,
            Some("checklist"),
            &[],
            Some("nestjs"),
            "- [ ] Modules defined",
        ),
    );

    corpus.write(
        "nestjs/user/tutorial.md",
        &doc_with_header(
            "User Slice Tutorial",
            Some("Building the user slice"),
            Some("tutorial"),
            &["user"],
            Some("nestjs"),
            "Start with the user module.",
        ),
    );
    corpus.write(
        "nestjs/user/checklist.md",
        &doc_with_header(
            "User Slice Checklist",
            None,
            Some("checklist"),
            &["user"],
            Some("nestjs"),
            "- [ ] User controller wired",
        ),
    );

    corpus.write(
        "nestjs/patterns/gateway.md",
        &doc_with_header(
            "Gateway Pattern",
            Some("Data access through a gateway"),
            Some("patterns"),
            &["gateway", "data-access", "user"],
            Some("nestjs"),
            "Gateways isolate data access.",
        ),
    );
    corpus.write(
        "nestjs/patterns/controller.md",
        &doc_with_header(
            "Controller Pattern",
            Some("Request handling in controllers"),
            Some("patterns"),
            &["controller"],
            Some("nestjs"),
            "Controllers accept requests.",
        ),
    );

    corpus.write(
        "react/overview.md",
        &doc_with_header(
            "React Overview",
            None,
            Some("overview"),
            &[],
            Some("react"),
            "React renders components.",
        ),
    );

    // Headerless document; indexed with metadata derived from the stem.
    corpus.write("notes/scratch.md", "Loose notes without a header.\n");

    corpus
}
