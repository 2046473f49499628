//! Candidate matching between one response sentence and one document.
//!
//! For a response sentence that passes the citation-worthiness gate, scan
//! the document's own sentences for the best similarity match above the
//! threshold, then recover absolute byte offsets on both sides by exact
//! substring search.
//!
//! Offsets are exact-match only: if cleaning altered the sentence enough
//! that it no longer appears verbatim in the response, the candidate is
//! dropped rather than mis-attributed.

use chrono::Utc;
use tracing::debug;

use crate::config::EngineConfig;
use crate::domain::{Citation, SourceDocument};

use super::segment::{self, ends_with_terminal};
use super::similarity;

/// Strip one leading bullet/dash/numbered-list marker, if present
fn strip_list_marker(s: &str) -> &str {
    let t = s.trim_start();

    for marker in ["- ", "* ", "+ ", "\u{2022} ", "\u{2013} ", "\u{2014} "] {
        if let Some(rest) = t.strip_prefix(marker) {
            return rest.trim_start();
        }
    }

    // Numbered list: digits followed by '.' or ')' and a space
    let digits = t.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits > 0 {
        let rest = &t[digits..];
        if let Some(rest) = rest.strip_prefix(". ").or_else(|| rest.strip_prefix(") ")) {
            return rest.trim_start();
        }
    }

    t
}

/// Clean a response sentence for matching: drop list markers, collapse
/// internal whitespace.
pub fn clean_sentence(sentence: &str) -> String {
    strip_list_marker(sentence.trim())
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Find the best-matching document sentence for one response sentence.
///
/// Returns at most one candidate per (sentence, document) pair: the
/// highest-scoring document sentence, ties resolved in favor of the first
/// one in document order. Returns `None` when the sentence fails the gate,
/// no document sentence clears the similarity threshold, or offsets cannot
/// be recovered. Absence of a citation is the expected common case, not an
/// error.
pub fn best_match(
    config: &EngineConfig,
    sentence: &str,
    document: &SourceDocument,
    full_response: &str,
) -> Option<Citation> {
    let cleaned = clean_sentence(sentence);

    // Citation-worthiness gate, stricter than segmentation's own floor.
    if cleaned.len() < config.min_citation_chars || !ends_with_terminal(&cleaned) {
        return None;
    }
    if similarity::normalize(&cleaned).len() < config.min_meaningful_chars {
        return None;
    }

    let mut best: Option<(&str, f64)> = None;
    for doc_sentence in segment::segment(&document.content, 0)
        .filter(|s| s.len() > config.min_document_sentence_chars)
    {
        let score = similarity::score(&cleaned, doc_sentence);
        if score <= config.similarity_threshold {
            continue;
        }
        // Strict > keeps the earliest document sentence on ties.
        if best.map(|(_, s)| score > s).unwrap_or(true) {
            best = Some((doc_sentence, score));
        }
    }

    let (cited_text, confidence) = best?;

    let response_start = match full_response.find(&cleaned) {
        Some(idx) => idx,
        None => {
            debug!(
                document = %document.name,
                "dropping candidate: cleaned sentence not found in response"
            );
            return None;
        }
    };

    // Document sentences are slices of the content, so the search cannot
    // fail; first occurrence is taken when the sentence repeats.
    let start_index = document.content.find(cited_text)?;

    Some(Citation {
        // Final ids are assigned by the ranker.
        id: String::new(),
        source_document: document.name.clone(),
        source_type: document.kind.clone(),
        cited_text: cited_text.to_string(),
        start_index,
        end_index: start_index + cited_text.len(),
        confidence,
        response_text: cleaned.clone(),
        response_start_index: response_start,
        response_end_index: response_start + cleaned.len(),
        created_at: Utc::now(),
    })
}
