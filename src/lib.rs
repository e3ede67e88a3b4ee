/*!
 * # Concept Explorer
 *
 * A Rust proxy core for a concept-analytics service (Concept Insights style).
 *
 * ## Features
 *
 * - Label search against a corpus (raw provider passthrough)
 * - Conceptual search with concurrent document enrichment:
 *   - full-document fetch per result, fail-fast, order-preserving
 *   - word-bounded passage cropping around every concept match
 *   - url extraction and removal of bulk content parts
 * - Concept-mention extraction against a concept graph (raw passthrough)
 * - Explicit corpus readiness state resolved at startup
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `document`: Data model for stubs, tags, parts and enriched documents
 * - `passage`: Passage cropping around matched text spans
 * - `enrichment`: Concurrent document enrichment
 * - `service`: Service layer and corpus readiness
 * - `providers`: Provider trait and the Concept Insights REST client
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod document;
pub mod enrichment;
pub mod errors;
pub mod passage;
pub mod providers;
pub mod service;

// Re-export main types for easier usage
pub use app_config::Config;
pub use document::{
    DocumentPart, DocumentStub, EnrichedDocument, EnrichedSearchResponse, ExplanationTag,
    FullDocument, SearchResponse,
};
pub use enrichment::DocumentEnricher;
pub use errors::{AppError, ProviderError, ServiceError};
pub use passage::crop;
pub use service::ConceptService;
