/*!
 * Provider boundary for the concept-analytics service.
 *
 * This module defines the trait the rest of the application talks to, plus the
 * parameter types for the search operations. The production implementation is
 * a REST client in `concept_insights`; tests inject mock implementations.
 */

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use std::fmt::Debug;

use crate::document::{FullDocument, SearchResponse};
use crate::errors::ProviderError;

/// Parameters for a label search against a corpus
#[derive(Debug, Clone, Serialize)]
pub struct LabelSearchParams {
    /// Corpus to search in
    pub corpus: String,

    /// Label text to search for
    pub query: String,

    /// Whether the query is a prefix
    pub prefix: bool,

    /// Maximum number of results
    pub limit: usize,

    /// Whether to include concept matches alongside documents
    pub concepts: bool,
}

impl LabelSearchParams {
    /// Create label search parameters with the default prefix/limit settings
    pub fn new(corpus: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            corpus: corpus.into(),
            query: query.into(),
            prefix: true,
            limit: 10,
            concepts: true,
        }
    }

    /// Set the result limit
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}

/// Parameters for a conceptual (related documents) search
#[derive(Debug, Clone, Serialize)]
pub struct ConceptualSearchParams {
    /// Corpus to search in
    pub corpus: String,

    /// Concept ids to search by
    pub ids: Vec<String>,

    /// Maximum number of results
    pub limit: usize,
}

impl ConceptualSearchParams {
    /// Create conceptual search parameters with the default limit
    pub fn new(corpus: impl Into<String>, ids: Vec<String>) -> Self {
        Self {
            corpus: corpus.into(),
            ids,
            limit: 10,
        }
    }

    /// Set the result limit
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}

/// Common trait for concept-analytics providers
///
/// This trait defines the interface the service layer and the enricher depend
/// on, allowing the REST client to be swapped for mocks in tests.
#[async_trait]
pub trait ConceptProvider: Send + Sync + Debug {
    /// Resolve the id of the first account the credentials belong to
    async fn account_id(&self) -> Result<String, ProviderError>;

    /// Search a corpus by concept/document label; raw provider payload
    async fn search_by_label(&self, params: &LabelSearchParams) -> Result<Value, ProviderError>;

    /// Find documents related to the given concepts
    async fn related_documents(
        &self,
        params: &ConceptualSearchParams,
    ) -> Result<SearchResponse, ProviderError>;

    /// Fetch a full document by its opaque id
    async fn fetch_document(&self, document_id: &str) -> Result<FullDocument, ProviderError>;

    /// Annotate free text against a concept graph; raw provider payload
    async fn annotate_text(&self, graph: &str, text: &str) -> Result<Value, ProviderError>;
}

pub mod concept_insights;
