//! Marker Round-Trip Tests
//!
//! Stripping the highlight wrappers and ordinal markers from
//! `highlighted_content` must reconstruct the original response exactly:
//! every input character appears exactly once in the output, either bare or
//! inside exactly one wrapper.

use citemark::{CitationEngine, SourceDocument};

/// Remove `<span class="citation-highlight" ...>` / `</span>` tags and
/// whole `<sup ...>[n]</sup>` marker elements, keeping all other text.
fn strip_markup(s: &str) -> String {
    let mut out = String::new();
    let mut rest = s;

    while let Some(i) = rest.find('<') {
        out.push_str(&rest[..i]);
        let tail = &rest[i..];

        if tail.starts_with("<sup") {
            // Drop the marker element including its visible [n] label.
            let end = tail.find("</sup>").expect("unterminated <sup>") + "</sup>".len();
            rest = &tail[end..];
        } else {
            // Opening or closing span tag: drop the tag, keep the content.
            let end = tail.find('>').expect("unterminated tag") + 1;
            rest = &tail[end..];
        }
    }

    out.push_str(rest);
    out
}

fn doc(id: &str, name: &str, content: impl Into<String>) -> SourceDocument {
    SourceDocument::new(id, name, "text", content)
}

#[test]
fn round_trip_single_citation() {
    let sentence = "The settlement protocol requires three independent confirmations from distinct validators before finality.";
    let response = format!("Intro words only. {} Trailing words only.", sentence);

    let engine = CitationEngine::default();
    let result = engine.process_response(&response, &[doc("d1", "Doc", sentence)], None);

    assert_eq!(result.citations.len(), 1);
    assert_ne!(result.highlighted_content, response);
    assert_eq!(strip_markup(&result.highlighted_content), response);
}

#[test]
fn round_trip_multiple_citations() {
    let e1 = "Alpha regional networks propagate ledger updates through gossip channels maintained by dedicated relay operators.";
    let e2 = "Beta archival storage nodes compress historical segments using incremental snapshots verified by checksum audits.";
    let response = format!("Leading remark here. {} A bridging phrase. {} The end.", e1, e2);

    let engine = CitationEngine::default();
    let result = engine.process_response(
        &response,
        &[doc("d1", "Alpha Doc", e1), doc("d2", "Beta Doc", e2)],
        None,
    );

    assert_eq!(result.citations.len(), 2);
    assert_eq!(strip_markup(&result.highlighted_content), response);
}

#[test]
fn round_trip_without_citations_is_identity() {
    let response = "Nothing here is long enough. To cite. At all.";
    let engine = CitationEngine::default();
    let result = engine.process_response(response, &[doc("d1", "Doc", "Unrelated content.")], None);

    assert!(result.citations.is_empty());
    assert_eq!(result.highlighted_content, response);
    assert_eq!(strip_markup(&result.highlighted_content), response);
}

#[test]
fn each_citation_renders_wrapper_and_adjacent_marker_with_same_id() {
    let sentence = "The settlement protocol requires three independent confirmations from distinct validators before finality.";
    let engine = CitationEngine::default();
    let result = engine.process_response(
        sentence,
        &[doc("d1", "Doc", format!("Filler opening sentence. {}", sentence))],
        None,
    );

    assert_eq!(result.citations.len(), 1);
    let id = &result.citations[0].id;
    let wrapper = format!(
        "<span class=\"citation-highlight\" data-citation-id=\"{id}\">{sentence}</span>"
    );
    let marker = format!("<sup class=\"citation-marker\" data-citation-id=\"{id}\">[1]</sup>");

    // The wrapper is immediately followed by its marker.
    assert!(result
        .highlighted_content
        .contains(&format!("{wrapper}{marker}")));
}
