//! Marker insertion.
//!
//! Rewrites the response text with a highlight wrapper around each cited
//! span, immediately followed by an ordinal marker. Citations are spliced
//! back-to-front: every insertion shifts all following offsets, so
//! processing in descending start order means no splice ever reads a stale
//! offset. This module knows nothing about similarity or ranking; it
//! assumes already-validated disjoint intervals.
//!
//! Markup contract: the wrapper and the adjacent ordinal marker both carry
//! `data-citation-id` with the citation's final identifier, and the marker's
//! visible label is the citation's 1-based final rank.

use crate::domain::Citation;

/// Insert highlight wrappers and ordinal markers into the response text.
///
/// `citations` must be the final ranked list: ordinal labels are each
/// citation's 1-based position in that list, independent of text order.
/// Every character of the input appears exactly once in the output, either
/// bare or inside exactly one wrapper.
pub fn insert_markers(response_text: &str, citations: &[Citation]) -> String {
    // (start, end, id, rank), rank taken from list position before any
    // reordering.
    let mut spans: Vec<(usize, usize, &str, usize)> = citations
        .iter()
        .enumerate()
        .map(|(i, c)| {
            (
                c.response_start_index,
                c.response_end_index,
                c.id.as_str(),
                i + 1,
            )
        })
        .collect();

    spans.sort_by(|a, b| b.0.cmp(&a.0));

    let mut text = response_text.to_string();
    for (start, end, id, rank) in spans {
        debug_assert!(start < end && end <= text.len());

        let before = &text[..start];
        let cited = &text[start..end];
        let after = &text[end..];

        text = format!(
            "{before}<span class=\"citation-highlight\" data-citation-id=\"{id}\">{cited}</span>\
             <sup class=\"citation-marker\" data-citation-id=\"{id}\">[{rank}]</sup>{after}"
        );
    }

    text
}
