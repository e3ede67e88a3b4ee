/*!
 * Document enrichment.
 *
 * A related-documents search returns stubs: document references carrying match
 * annotations but no content. The enricher fetches each document's full
 * content, shallow-merges the fetched fields over the stub, attaches a cropped
 * passage to every annotation, extracts a top-level url, and drops the bulk
 * `parts` payload so responses stay small.
 *
 * Batches are enriched concurrently with a fail-fast join: the first fetch
 * failure fails the whole batch, and successful output preserves the input
 * order no matter which fetch finished first.
 */

use std::sync::Arc;

use futures::future::try_join_all;
use log::debug;

use crate::document::{DocumentStub, EnrichedDocument, FullDocument};
use crate::errors::ProviderError;
use crate::passage;
use crate::providers::ConceptProvider;

/// Enriches search result stubs with fetched content and cropped passages
#[derive(Debug, Clone)]
pub struct DocumentEnricher {
    /// Provider used to fetch full documents
    provider: Arc<dyn ConceptProvider>,
}

impl DocumentEnricher {
    /// Create a new enricher backed by the given provider
    pub fn new(provider: Arc<dyn ConceptProvider>) -> Self {
        Self { provider }
    }

    /// Enrich a single stub.
    ///
    /// Fetch failures propagate unchanged; there is no retry here.
    pub async fn enrich(&self, stub: DocumentStub) -> Result<EnrichedDocument, ProviderError> {
        debug!("Fetching document {}", stub.id);
        let full = self.provider.fetch_document(&stub.id).await?;
        Ok(merge_and_crop(stub, full))
    }

    /// Enrich a batch of stubs concurrently.
    ///
    /// All fetches are started at once; the join is fail-fast, so the first
    /// error fails the batch and partial results are discarded. On success,
    /// position `i` of the output corresponds to position `i` of the input.
    pub async fn enrich_all(
        &self,
        stubs: Vec<DocumentStub>,
    ) -> Result<Vec<EnrichedDocument>, ProviderError> {
        debug!("Enriching {} documents", stubs.len());
        try_join_all(stubs.into_iter().map(|stub| self.enrich(stub))).await
    }
}

/// Merge a fetched document over its stub and compute the derived fields.
///
/// Shallow merge, fetched fields win: the document's annotations replace the
/// stub's when present, and unknown fields overwrite key by key. The `parts`
/// collection only feeds cropping and url extraction; `EnrichedDocument` has
/// no field for it.
fn merge_and_crop(stub: DocumentStub, full: FullDocument) -> EnrichedDocument {
    let url = full.url();

    let mut explanation_tags = full.explanation_tags.unwrap_or(stub.explanation_tags);
    for tag in &mut explanation_tags {
        let (start, end) = tag.text_index;
        tag.passage = Some(passage::crop(&full.parts, tag.parts_index, start, end));
    }

    let mut extra = stub.extra;
    for (key, value) in full.extra {
        extra.insert(key, value);
    }

    EnrichedDocument {
        id: full.id.unwrap_or(stub.id),
        explanation_tags,
        url,
        extra,
    }
}
