//! Textual similarity scoring.
//!
//! The engine's sole match-scoring function: a Jaccard index over the
//! normalized token sets of two strings. Symmetric, deterministic, pure.

use std::collections::HashSet;

/// Tokens at or below this length are ignored when scoring
pub const MIN_TOKEN_CHARS: usize = 2;

/// Normalize text for comparison: lowercase, strip punctuation,
/// collapse whitespace, trim.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stripped: String = lowered
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect();
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Token set of normalized text, keeping only tokens longer than
/// [`MIN_TOKEN_CHARS`] characters
fn token_set(normalized: &str) -> HashSet<&str> {
    normalized
        .split_whitespace()
        .filter(|t| t.chars().count() > MIN_TOKEN_CHARS)
        .collect()
}

/// Jaccard similarity of two strings in [0, 1].
///
/// Exact normalized equality short-circuits to 1.0 (this also covers the
/// case where both token sets would be empty). If either token set is empty
/// after filtering, the score is 0.0.
pub fn score(a: &str, b: &str) -> f64 {
    let na = normalize(a);
    let nb = normalize(b);

    if na == nb {
        return 1.0;
    }

    let ta = token_set(&na);
    let tb = token_set(&nb);

    if ta.is_empty() || tb.is_empty() {
        return 0.0;
    }

    let intersection = ta.intersection(&tb).count();
    let union = ta.union(&tb).count();

    intersection as f64 / union as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(
            normalize("  The QUICK,   brown fox!  "),
            "the quick brown fox"
        );
        assert_eq!(normalize("...!?"), "");
    }

    #[test]
    fn test_identical_strings_score_one() {
        let s = "The protocol requires three confirmations before settlement.";
        assert_eq!(score(s, s), 1.0);
    }

    #[test]
    fn test_normalized_equality_fast_path() {
        assert_eq!(score("Hello, World!", "hello world"), 1.0);
        // Both normalize to empty
        assert_eq!(score("?!", "..."), 1.0);
    }

    #[test]
    fn test_disjoint_token_sets_score_zero() {
        assert_eq!(score("alpha beta gamma", "delta epsilon zeta"), 0.0);
    }

    #[test]
    fn test_empty_token_set_scores_zero() {
        // All tokens are <= 2 chars and the normalized strings differ
        assert_eq!(score("a an it", "some longer words here"), 0.0);
    }

    #[test]
    fn test_partial_overlap() {
        // tokens: {the, quick, brown, fox} vs {the, quick, brown, dog}
        // intersection 3, union 5
        let s = score("the quick brown fox", "the quick brown dog");
        assert!((s - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_symmetry() {
        let a = "Settlement requires three independent confirmations from validators.";
        let b = "Validators must provide confirmations before settlement completes.";
        assert_eq!(score(a, b), score(b, a));
    }

    #[test]
    fn test_bounds() {
        let pairs = [
            ("one two three", "three four five"),
            ("", "anything at all here"),
            ("identical words here", "identical words here"),
        ];
        for (a, b) in pairs {
            let s = score(a, b);
            assert!((0.0..=1.0).contains(&s), "score out of bounds: {}", s);
        }
    }

    #[test]
    fn test_short_tokens_ignored() {
        // "is" and "a" are filtered; only {this, test} vs {this, test}
        assert_eq!(score("this is a test", "this test"), 1.0);
    }
}
