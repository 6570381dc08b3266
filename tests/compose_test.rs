mod common;

use archdoc_mcp::error::KnowledgeError;
use archdoc_mcp::knowledge::KnowledgeComposer;
use archdoc_mcp::{SearchEngine, state::KnowledgeState};
use assert2::check;
use common::{TempCorpus, doc_with_header, seeded_corpus};
use rstest::rstest;

async fn composer(state: &KnowledgeState) -> KnowledgeComposer {
    KnowledgeComposer::new(SearchEngine::new(state.index().await, state.loader().clone()))
}

/// Test: framework architecture composes overview, when-to-use and
/// checklist content.
#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn framework_architecture_composes_all_sections(seeded_corpus: TempCorpus) {
    let state = seeded_corpus.state();
    let composer = composer(&state).await;

    let arch = composer
        .compose_framework_architecture("nestjs")
        .await
        .unwrap();

    check!(arch.framework_name == "nestjs");
    check!(arch.overview.contains("NestJS organizes code into modules."));
    check!(arch.when_to_use.contains("structured backends"));
    check!(arch.checklist.contains("Modules defined"));
}

/// Test: unknown framework fails with FrameworkNotFoundError.
#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_framework_is_an_error(seeded_corpus: TempCorpus) {
    let state = seeded_corpus.state();
    let composer = composer(&state).await;

    let err = composer
        .compose_framework_architecture("django")
        .await
        .unwrap_err();

    check!(matches!(
        err.downcast_ref::<KnowledgeError>(),
        Some(KnowledgeError::FrameworkNotFound { framework }) if framework == "django"
    ));
}

/// Test: a framework missing one of its three framework-level documents
/// fails with DocumentNotFoundError naming the missing piece.
#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn incomplete_framework_names_missing_document(seeded_corpus: TempCorpus) {
    let state = seeded_corpus.state();
    let composer = composer(&state).await;

    // react has only an overview document.
    let err = composer
        .compose_framework_architecture("react")
        .await
        .unwrap_err();

    let Some(KnowledgeError::DocumentNotFound { path }) = err.downcast_ref::<KnowledgeError>()
    else {
        panic!("expected DocumentNotFound, got {err:?}");
    };
    check!(path.contains("when-to-use"));
    check!(path.contains("react"));
}

/// Test: slice architecture embeds tutorial/checklist content and lists
/// related pattern documents without their content.
#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn slice_architecture_lists_related_docs(seeded_corpus: TempCorpus) {
    let state = seeded_corpus.state();
    let composer = composer(&state).await;

    let slice = composer
        .compose_slice_architecture("nestjs", "user")
        .await
        .unwrap();

    check!(slice.framework_name == "nestjs");
    check!(slice.slice_name == "user");
    check!(slice.tutorial.contains("Start with the user module."));
    check!(slice.checklist.contains("User controller wired"));

    // The gateway pattern is tagged "user"; the controller pattern is not,
    // and the slice's own tutorial/checklist are excluded.
    check!(slice.available_docs.len() == 1);
    let doc = &slice.available_docs[0];
    check!(doc.name == "Gateway Pattern");
    check!(doc.description.as_deref() == Some("Data access through a gateway"));
    check!(doc.path == "nestjs/patterns/gateway.md");
}

/// Test: a slice without a tutorial fails naming the missing tutorial,
/// not a partially empty success.
#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn missing_tutorial_is_named(seeded_corpus: TempCorpus) {
    let state = seeded_corpus.state();
    let composer = composer(&state).await;

    let err = composer
        .compose_slice_architecture("nestjs", "billing")
        .await
        .unwrap_err();

    let Some(KnowledgeError::DocumentNotFound { path }) = err.downcast_ref::<KnowledgeError>()
    else {
        panic!("expected DocumentNotFound, got {err:?}");
    };
    check!(path.contains("tutorial"));
    check!(path.contains("billing"));
}

/// Test: complete slice knowledge embeds the full content of every
/// discovered pattern document, in discovery order.
#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn complete_slice_embeds_pattern_content(seeded_corpus: TempCorpus) {
    let state = seeded_corpus.state();
    let composer = composer(&state).await;

    let knowledge = composer
        .compose_complete_slice_knowledge("nestjs", "user")
        .await
        .unwrap();

    check!(knowledge.tutorial.contains("Start with the user module."));
    check!(knowledge.documents.len() == 1);
    check!(knowledge.documents[0].0 == "Gateway Pattern");
    check!(knowledge.documents[0].1.contains("Gateways isolate data access."));
}

/// Test: documents map insertion order follows the ranked discovery order
/// of the underlying search.
#[tokio::test(flavor = "multi_thread")]
async fn complete_slice_document_order_follows_ranking() {
    let corpus = TempCorpus::new();
    corpus.write(
        "fw/pay/tutorial.md",
        &doc_with_header(
            "Pay Tutorial",
            None,
            Some("tutorial"),
            &["pay"],
            Some("fw"),
            "tutorial body",
        ),
    );
    corpus.write(
        "fw/pay/checklist.md",
        &doc_with_header(
            "Pay Checklist",
            None,
            Some("checklist"),
            &["pay"],
            Some("fw"),
            "checklist body",
        ),
    );
    // Both patterns carry the slice tag and score identically, so the
    // discovery order is the deterministic scan order.
    corpus.write(
        "fw/patterns/a-refund.md",
        &doc_with_header(
            "Refund Pattern",
            None,
            Some("patterns"),
            &["pay"],
            Some("fw"),
            "refund body",
        ),
    );
    corpus.write(
        "fw/patterns/b-invoice.md",
        &doc_with_header(
            "Invoice Pattern",
            None,
            Some("patterns"),
            &["pay", "pay-extra"],
            Some("fw"),
            "invoice body",
        ),
    );

    let state = corpus.state();
    let composer = composer(&state).await;

    let knowledge = composer
        .compose_complete_slice_knowledge("fw", "pay")
        .await
        .unwrap();

    let names: Vec<&str> = knowledge.documents.iter().map(|(n, _)| n.as_str()).collect();
    check!(names == vec!["Refund Pattern", "Invoice Pattern"]);
}
