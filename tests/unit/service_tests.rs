/*!
 * Tests for the service layer and its corpus readiness state
 */

use std::sync::Arc;

use serde_json::json;

use concept_explorer::app_config::Config;
use concept_explorer::errors::{ProviderError, ServiceError};
use concept_explorer::service::ConceptService;

use crate::common::{document_with_text, mock_providers::MockConceptProvider, stub_with_tag};

fn config_with_corpus(corpus_id: &str) -> Config {
    Config {
        corpus_id: Some(corpus_id.to_string()),
        ..Config::default()
    }
}

/// Corpus-dependent operations fail clearly before initialization
#[tokio::test]
async fn test_label_search_beforeInitialize_shouldReturnNotReady() {
    let provider = Arc::new(MockConceptProvider::new().with_account("acct"));
    let service = ConceptService::new(provider, Config::default());

    assert!(!service.is_ready());
    let error = service.label_search("linux").await.unwrap_err();
    assert!(matches!(error, ServiceError::NotReady));
}

/// A configured corpus id is used without resolving the account
#[tokio::test]
async fn test_initialize_withConfiguredCorpus_shouldSkipAccountLookup() {
    // No account configured: an account lookup would fail
    let provider = Arc::new(MockConceptProvider::new());
    let service = ConceptService::new(provider, config_with_corpus("/corpora/public/TEDTalks"));

    service.initialize().await.unwrap();
    assert!(service.is_ready());

    let result = service.label_search("linux").await.unwrap();
    assert_eq!(result["corpus"], json!("/corpora/public/TEDTalks"));
}

/// Without a configured corpus the id is derived from the account
#[tokio::test]
async fn test_initialize_withoutConfiguredCorpus_shouldDeriveFromAccount() {
    let provider = Arc::new(MockConceptProvider::new().with_account("acct123"));
    let service = ConceptService::new(provider, Config::default());

    service.initialize().await.unwrap();

    let result = service.label_search("linux").await.unwrap();
    assert_eq!(result["corpus"], json!("/corpora/acct123/solutionExplorer"));
}

/// A failed account lookup leaves the service not ready
#[tokio::test]
async fn test_initialize_withFailingAccountLookup_shouldReportError() {
    let provider = Arc::new(MockConceptProvider::new());
    let service = ConceptService::new(provider, Config::default());

    let error = service.initialize().await.unwrap_err();
    assert!(matches!(
        error,
        ServiceError::Provider(ProviderError::ApiError {
            status_code: 401,
            ..
        })
    ));
    assert!(!service.is_ready());
}

/// Conceptual search enriches every result and carries response fields over
#[tokio::test]
async fn test_conceptual_search_withResults_shouldEnrichInOrder() {
    let text = "The quick brown fox jumps over the lazy dog";
    let provider = Arc::new(
        MockConceptProvider::new()
            .with_search_response(json!({
                "query_concepts": ["/graphs/wikipedia/en-20120601/concepts/Fox"],
                "results": [stub_with_tag("a", 16, 19), stub_with_tag("b", 4, 9)]
            }))
            .with_document("a", document_with_text("a", text))
            .with_document("b", document_with_text("b", text))
            .with_delay("a", 30),
    );
    let service = ConceptService::new(provider, config_with_corpus("/corpora/public/TEDTalks"));
    service.initialize().await.unwrap();

    let response = service
        .conceptual_search(vec!["/graphs/wikipedia/en-20120601/concepts/Fox".to_string()])
        .await
        .unwrap();

    assert_eq!(response.results.len(), 2);
    assert_eq!(response.results[0].id, "a");
    assert_eq!(response.results[1].id, "b");
    assert_eq!(
        response.results[0].explanation_tags[0].passage.as_deref(),
        Some("...The quick brown <b>fox</b> jumps over the lazy dog...")
    );

    // Fields outside `results` survive the enrichment round trip
    let value = serde_json::to_value(&response).unwrap();
    assert_eq!(
        value["query_concepts"],
        json!(["/graphs/wikipedia/en-20120601/concepts/Fox"])
    );
}

/// A failing fetch during conceptual search fails the whole call
#[tokio::test]
async fn test_conceptual_search_withFailingFetch_shouldFail() {
    let provider = Arc::new(
        MockConceptProvider::new()
            .with_search_response(json!({
                "results": [stub_with_tag("a", 0, 3), stub_with_tag("b", 0, 3)]
            }))
            .with_document(
                "a",
                document_with_text("a", "The quick brown fox jumps over the lazy dog"),
            )
            .with_failing("b"),
    );
    let service = ConceptService::new(provider, config_with_corpus("/corpora/public/TEDTalks"));
    service.initialize().await.unwrap();

    let error = service.conceptual_search(vec![]).await.unwrap_err();
    assert!(matches!(
        error,
        ServiceError::Provider(ProviderError::ApiError {
            status_code: 500,
            ..
        })
    ));
}

/// Concept-mention extraction does not depend on the corpus id
#[tokio::test]
async fn test_extract_concept_mentions_beforeInitialize_shouldSucceed() {
    let provider = Arc::new(MockConceptProvider::new());
    let service = ConceptService::new(provider, Config::default());

    let result = service
        .extract_concept_mentions("IBM Watson won Jeopardy!")
        .await
        .unwrap();
    assert_eq!(result["graph"], json!("/graphs/wikipedia/en-20120601"));
}
