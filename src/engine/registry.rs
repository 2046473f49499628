//! In-memory document registry.
//!
//! A convenience map from document id to document, rebuilt or updated per
//! processing call. Not a durable store: each `process_response` call is
//! self-contained, and callers that keep a registry across calls are only
//! accumulating inputs, never sharing engine state.

use std::collections::BTreeMap;

use crate::domain::SourceDocument;

/// Id-keyed map of source documents.
///
/// Backed by a `BTreeMap` so iteration order is stable by id, which keeps
/// candidate discovery deterministic.
#[derive(Debug, Clone, Default)]
pub struct DocumentRegistry {
    docs: BTreeMap<String, SourceDocument>,
}

impl DocumentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from a document collection. Later duplicates of an
    /// id replace earlier ones.
    pub fn from_documents(docs: impl IntoIterator<Item = SourceDocument>) -> Self {
        let mut registry = Self::new();
        for doc in docs {
            registry.register(doc);
        }
        registry
    }

    /// Register a document, replacing any existing entry with the same id.
    ///
    /// Returns true if this replaced an entry whose content digest differs,
    /// i.e. the document's content changed since it was last registered.
    pub fn register(&mut self, doc: SourceDocument) -> bool {
        let digest = doc.content_digest.clone();
        match self.docs.insert(doc.id.clone(), doc) {
            Some(previous) => previous.content_digest != digest,
            None => false,
        }
    }

    pub fn get(&self, id: &str) -> Option<&SourceDocument> {
        self.docs.get(id)
    }

    pub fn remove(&mut self, id: &str) -> Option<SourceDocument> {
        self.docs.remove(id)
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    /// Documents in stable id order
    pub fn documents(&self) -> impl Iterator<Item = &SourceDocument> {
        self.docs.values()
    }
}
