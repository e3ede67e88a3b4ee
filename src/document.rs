/*!
 * Data model for documents flowing through the proxy.
 *
 * Search calls return partial document references (stubs) that carry match
 * annotations. The enrichment pipeline fetches the full document, attaches a
 * passage to every annotation and strips the bulky content parts before the
 * result is sent onward. Provider payloads are open-world, so every model keeps
 * unknown fields in a flattened map instead of dropping them.
 */

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A partial document reference as returned by a search call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentStub {
    /// Opaque document identifier, also the fetch reference
    pub id: String,

    /// Match annotations locating concept occurrences in the document text
    #[serde(default)]
    pub explanation_tags: Vec<ExplanationTag>,

    /// Provider-specific metadata (score, label, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One matched concept occurrence within a document's text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplanationTag {
    /// `[start, end)` character offsets into the referenced part's text.
    /// Signed so that out-of-range provider values can be clamped instead of
    /// failing deserialization.
    pub text_index: (i64, i64),

    /// Index of the document part the offsets apply to
    #[serde(default)]
    pub parts_index: usize,

    /// Word-bounded snippet around the match, attached during enrichment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passage: Option<String>,

    /// Provider-specific fields (concept id, score, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One named chunk of a document's content
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentPart {
    /// Part name; not guaranteed unique within a document
    pub name: String,

    /// Part payload, usually text
    #[serde(default)]
    pub data: Value,
}

/// A full document as fetched from the provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullDocument {
    /// Document identifier as reported by the provider
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Content parts of the document
    #[serde(default)]
    pub parts: Vec<DocumentPart>,

    /// Match annotations; when present they take precedence over the stub's
    /// annotations under shallow-merge semantics
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation_tags: Option<Vec<ExplanationTag>>,

    /// Remaining provider fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FullDocument {
    /// Payload of the first part named `"url"`, if any
    pub fn url(&self) -> Option<Value> {
        self.parts
            .iter()
            .find(|part| part.name == "url")
            .map(|part| part.data.clone())
    }
}

/// Response of a related-documents search call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Document stubs matching the query
    #[serde(default)]
    pub results: Vec<DocumentStub>,

    /// Remaining response fields, carried through untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A stub merged with its fetched document, passages attached, parts removed.
///
/// There is no `parts` field on this type; the bulk content can never leak
/// into a serialized response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrichedDocument {
    /// Document identifier
    pub id: String,

    /// Match annotations, each carrying a computed passage
    #[serde(default)]
    pub explanation_tags: Vec<ExplanationTag>,

    /// Payload of the document's "url" part; serialized as `null` when the
    /// document has no such part
    pub url: Option<Value>,

    /// Merged stub and document fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A search response whose results have been enriched
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrichedSearchResponse {
    /// Enriched documents, in the same order as the originating stubs
    pub results: Vec<EnrichedDocument>,

    /// Response fields carried over from the search response
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
