/*!
 * Service layer tying configuration, the provider and the enricher together.
 *
 * The corpus id is not known until startup: it either comes from the
 * configuration or is derived from the account the credentials belong to,
 * which takes a provider round trip. `ConceptService` models this as an
 * explicit readiness state: corpus-dependent operations return
 * `ServiceError::NotReady` until `initialize` has succeeded, instead of
 * silently searching an empty corpus.
 */

use std::sync::Arc;

use log::info;
use once_cell::sync::OnceCell;
use serde_json::Value;

use crate::app_config::Config;
use crate::document::EnrichedSearchResponse;
use crate::enrichment::DocumentEnricher;
use crate::errors::ServiceError;
use crate::providers::{ConceptProvider, ConceptualSearchParams, LabelSearchParams};

/// Entry point for the three proxy operations
#[derive(Debug)]
pub struct ConceptService {
    /// Concept-analytics provider
    provider: Arc<dyn ConceptProvider>,

    /// Enricher for conceptual search results
    enricher: DocumentEnricher,

    /// Application configuration
    config: Config,

    /// Corpus id, set once by `initialize`
    corpus_id: OnceCell<String>,
}

impl ConceptService {
    /// Create a new service; corpus-dependent operations stay unavailable
    /// until `initialize` has been called
    pub fn new(provider: Arc<dyn ConceptProvider>, config: Config) -> Self {
        Self {
            enricher: DocumentEnricher::new(provider.clone()),
            provider,
            config,
            corpus_id: OnceCell::new(),
        }
    }

    /// Resolve the corpus id and mark the service ready.
    ///
    /// A configured corpus id is used as is; otherwise the id is derived from
    /// the first account of the credentials. Idempotent once it has succeeded.
    pub async fn initialize(&self) -> Result<(), ServiceError> {
        if self.corpus_id.get().is_some() {
            return Ok(());
        }

        let corpus_id = match &self.config.corpus_id {
            Some(id) => id.clone(),
            None => {
                let account = self.provider.account_id().await?;
                format!("/corpora/{}/{}", account, self.config.corpus_name)
            }
        };

        info!("Using corpus {}", corpus_id);
        // A concurrent initialize may have won the race; keep its value
        let _ = self.corpus_id.set(corpus_id);
        Ok(())
    }

    /// Whether the corpus id has been resolved
    pub fn is_ready(&self) -> bool {
        self.corpus_id.get().is_some()
    }

    /// Resolved corpus id, or `NotReady` before initialization
    fn corpus_id(&self) -> Result<&str, ServiceError> {
        self.corpus_id
            .get()
            .map(String::as_str)
            .ok_or(ServiceError::NotReady)
    }

    /// Label search; the provider payload is passed through unmodified
    pub async fn label_search(&self, query: &str) -> Result<Value, ServiceError> {
        let params =
            LabelSearchParams::new(self.corpus_id()?, query).limit(self.config.search_limit);
        Ok(self.provider.search_by_label(&params).await?)
    }

    /// Conceptual search: related documents, each enriched with passages and
    /// a url, returned in the provider's result order
    pub async fn conceptual_search(
        &self,
        ids: Vec<String>,
    ) -> Result<EnrichedSearchResponse, ServiceError> {
        let params =
            ConceptualSearchParams::new(self.corpus_id()?, ids).limit(self.config.search_limit);
        let response = self.provider.related_documents(&params).await?;
        let results = self.enricher.enrich_all(response.results).await?;
        Ok(EnrichedSearchResponse {
            results,
            extra: response.extra,
        })
    }

    /// Concept-mention extraction; the provider payload is passed through
    /// unmodified. Does not depend on the corpus id.
    pub async fn extract_concept_mentions(&self, text: &str) -> Result<Value, ServiceError> {
        Ok(self
            .provider
            .annotate_text(&self.config.graph_id, text)
            .await?)
    }
}
