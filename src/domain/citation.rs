//! Citation and processed-response value types.
//!
//! A `Citation` records that a specific response substring is supported by
//! a specific document substring, with byte offsets into both original
//! strings and a confidence score. All offsets refer to the *unmodified*
//! inputs; marker insertion never rewrites them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A scored claim linking a response span to a document span
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Citation {
    /// Identifier, assigned by final rank ("cite-1", "cite-2", ...)
    pub id: String,

    /// Display name of the source document
    pub source_document: String,

    /// Content type tag of the source document
    pub source_type: String,

    /// The matched substring of the document content
    pub cited_text: String,

    /// Start byte offset of `cited_text` in the document content
    pub start_index: usize,

    /// End byte offset (exclusive) of `cited_text` in the document content
    pub end_index: usize,

    /// Match confidence in [0, 1]
    pub confidence: f64,

    /// The matched substring of the original response
    pub response_text: String,

    /// Start byte offset of `response_text` in the original response
    pub response_start_index: usize,

    /// End byte offset (exclusive) of `response_text` in the original response
    pub response_end_index: usize,

    /// When the citation was created
    pub created_at: DateTime<Utc>,
}

impl Citation {
    /// True if this citation's response interval intersects another's.
    ///
    /// Intervals are half-open `[start, end)`; touching endpoints do not
    /// count as overlap.
    pub fn overlaps(&self, other: &Citation) -> bool {
        !(self.response_end_index <= other.response_start_index
            || self.response_start_index >= other.response_end_index)
    }

    /// Identity used for deduplication: same document, same response span
    pub fn identity(&self) -> (&str, usize, usize) {
        (
            self.source_document.as_str(),
            self.response_start_index,
            self.response_end_index,
        )
    }
}

/// The result of one `process_response` call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessedResponse {
    /// The original response text, unchanged
    pub content: String,

    /// Accepted citations in final rank order (descending confidence)
    pub citations: Vec<Citation>,

    /// The response text with highlight wrappers and ordinal markers
    pub highlighted_content: String,
}
