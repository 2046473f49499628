//! Citation ranking and overlap resolution.
//!
//! Reduces the raw candidate pool to a final citation list:
//! deduplicated, sorted by confidence, non-overlapping in the response
//! text, capped, and renumbered by final rank.
//!
//! The sweep is greedy confidence-first interval scheduling, a deliberate
//! simplification of optimal weighted interval scheduling: it guarantees a
//! valid non-overlapping, high-confidence-biased set in O(n log n + n·k),
//! not maximum total confidence. Swapping in a weighted-interval DP would
//! touch only this module.

use std::collections::HashSet;

use tracing::debug;

use crate::domain::Citation;

/// Rank candidates into the final citation list.
///
/// Guarantees on the output: pairwise disjoint response intervals, no
/// duplicate `(document, response span)` identities, descending confidence
/// order, at most `max_count` entries, ids renumbered `cite-1`, `cite-2`, …
/// by final rank.
pub fn rank(candidates: Vec<Citation>, max_count: usize) -> Vec<Citation> {
    let total = candidates.len();

    // Deduplicate by exact (document, response span) identity; the first
    // occurrence wins.
    let mut seen: HashSet<(String, usize, usize)> = HashSet::new();
    let mut pool: Vec<Citation> = candidates
        .into_iter()
        .filter(|c| {
            seen.insert((
                c.source_document.clone(),
                c.response_start_index,
                c.response_end_index,
            ))
        })
        .collect();

    // Confidence descending; ties resolved by response position then
    // document name so ranking is fully deterministic.
    pool.sort_by(|a, b| {
        b.confidence
            .total_cmp(&a.confidence)
            .then_with(|| a.response_start_index.cmp(&b.response_start_index))
            .then_with(|| a.source_document.cmp(&b.source_document))
    });

    let mut accepted: Vec<Citation> = Vec::new();
    for candidate in pool {
        if accepted.len() >= max_count {
            break;
        }
        if accepted.iter().any(|a| a.overlaps(&candidate)) {
            debug!(
                document = %candidate.source_document,
                start = candidate.response_start_index,
                end = candidate.response_end_index,
                "dropping overlapping candidate"
            );
            continue;
        }
        accepted.push(candidate);
    }

    for (i, citation) in accepted.iter_mut().enumerate() {
        citation.id = format!("cite-{}", i + 1);
    }

    debug!(candidates = total, accepted = accepted.len(), "ranked citations");
    accepted
}
