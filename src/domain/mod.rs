//! Domain types for the citation engine.
//!
//! This module contains the core data structures:
//! - SourceDocument: Immutable source material to cite against
//! - Citation: A scored, offset-located claim
//! - ProcessedResponse: The result of one processing call

pub mod citation;
pub mod document;

// Re-export commonly used types
pub use citation::{Citation, ProcessedResponse};
pub use document::{content_digest, DocumentManifest, ManifestEntry, SourceDocument};
