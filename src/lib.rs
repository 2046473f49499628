//! citemark - Citation extraction and highlighting engine
//!
//! Given a generated natural-language response and a set of source
//! documents, citemark determines which spans of the response are
//! substantiated by which spans of which document, scores each claim,
//! guarantees the accepted claims never overlap in the response text, and
//! rewrites the response with highlight wrappers and ordinal markers while
//! leaving every other character untouched.
//!
//! # Architecture
//!
//! The engine is a pure, synchronous text transformation:
//! - `engine::segment`: sentence segmentation
//! - `engine::similarity`: normalized token-set Jaccard scoring
//! - `engine::matcher`: candidate matching per (sentence, document) pair
//! - `engine::ranker`: dedup, greedy overlap resolution, cap, renumbering
//! - `engine::markers`: back-to-front marker insertion
//! - `engine::registry`: per-call id-to-document map
//!
//! # Usage
//!
//! ```
//! use citemark::{CitationEngine, SourceDocument};
//!
//! let engine = CitationEngine::default();
//! let doc = SourceDocument::new("d1", "Spec", "text", "Document content here.");
//! let result = engine.process_response("Some response text.", &[doc], None);
//! assert!(result.citations.is_empty());
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod engine;

// Re-export main types at crate root for convenience
pub use config::{ConfigError, EngineConfig};
pub use domain::{Citation, ProcessedResponse, SourceDocument};
pub use engine::{CitationEngine, DocumentRegistry};
