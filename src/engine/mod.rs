//! Citation extraction and highlighting engine.
//!
//! Pipeline: segment the response into sentences, match every
//! (sentence, document) pair for the best similarity candidate, rank the
//! candidate pool into a non-overlapping capped citation list, then splice
//! highlight markers into the response text.
//!
//! # Design Principles
//!
//! - **Pure and synchronous**: strings in, annotated string + citations out.
//!   No I/O, no shared state between calls, safe to call concurrently.
//! - **Never errors**: malformed, empty, or citation-free input degrades to
//!   zero citations and an unchanged response, not a failure.
//! - **Exact offsets only**: a candidate whose offsets cannot be recovered
//!   by exact substring search is dropped rather than mis-attributed.

pub mod markers;
pub mod matcher;
pub mod ranker;
pub mod registry;
pub mod segment;
pub mod similarity;

use tracing::debug;

use crate::config::EngineConfig;
use crate::domain::{ProcessedResponse, SourceDocument};

pub use registry::DocumentRegistry;

/// The citation engine: configuration plus the processing entry points
#[derive(Debug, Clone, Default)]
pub struct CitationEngine {
    config: EngineConfig,
}

impl CitationEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Process a response against a document set.
    ///
    /// `max_citations` overrides the configured cap when given. Always
    /// returns a valid `ProcessedResponse`; when nothing matches, the
    /// citation list is empty and `highlighted_content` equals the input.
    pub fn process_response(
        &self,
        response_text: &str,
        documents: &[SourceDocument],
        max_citations: Option<usize>,
    ) -> ProcessedResponse {
        let registry = DocumentRegistry::from_documents(documents.iter().cloned());
        self.process_with_registry(response_text, &registry, max_citations)
    }

    /// Process a response against a caller-held registry.
    ///
    /// The registry is read-only for the duration of the call; keeping one
    /// across calls is an accumulation convenience, not engine state.
    pub fn process_with_registry(
        &self,
        response_text: &str,
        registry: &DocumentRegistry,
        max_citations: Option<usize>,
    ) -> ProcessedResponse {
        let max_citations = max_citations.unwrap_or(self.config.max_citations);

        let sentences: Vec<&str> =
            segment::segment(response_text, self.config.min_sentence_chars).collect();
        debug!(
            sentences = sentences.len(),
            documents = registry.len(),
            "segmented response"
        );

        let mut candidates = Vec::new();
        for sentence in &sentences {
            for document in registry.documents() {
                if let Some(candidate) =
                    matcher::best_match(&self.config, sentence, document, response_text)
                {
                    candidates.push(candidate);
                }
            }
        }
        debug!(candidates = candidates.len(), "collected candidates");

        let citations = ranker::rank(candidates, max_citations);
        let highlighted_content = markers::insert_markers(response_text, &citations);

        ProcessedResponse {
            content: response_text.to_string(),
            citations,
            highlighted_content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_degrades_gracefully() {
        let engine = CitationEngine::default();
        let result = engine.process_response("", &[], None);
        assert!(result.citations.is_empty());
        assert_eq!(result.highlighted_content, "");
        assert_eq!(result.content, "");
    }

    #[test]
    fn test_no_documents_yields_no_citations() {
        let engine = CitationEngine::default();
        let text = "A perfectly reasonable sentence that is long enough to be segmented properly.";
        let result = engine.process_response(text, &[], None);
        assert!(result.citations.is_empty());
        assert_eq!(result.highlighted_content, text);
    }

    #[test]
    fn test_single_match_end_to_end() {
        let engine = CitationEngine::default();
        let sentence = "The settlement protocol requires three independent confirmations from distinct validators before finality.";
        let document = SourceDocument::new(
            "d1",
            "Protocol Spec",
            "text",
            format!("Intro text here. {} Closing remarks.", sentence),
        );

        let result = engine.process_response(sentence, &[document], None);

        assert_eq!(result.citations.len(), 1);
        let c = &result.citations[0];
        assert_eq!(c.id, "cite-1");
        assert_eq!(c.source_document, "Protocol Spec");
        assert!(c.confidence > 0.7);
        assert!(result.highlighted_content.contains("data-citation-id=\"cite-1\""));
        assert!(result.highlighted_content.contains("[1]"));
    }
}
