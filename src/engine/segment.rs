//! Sentence segmentation.
//!
//! Splits text into complete-sentence units on terminal punctuation
//! (`.`, `!`, `?`), keeping exactly one terminal character attached to each
//! sentence. Fragments below the minimum length and trailing text without
//! terminal punctuation are discarded: headers, list stubs, and truncated
//! tails are not citation-eligible.

/// True for the three sentence-terminal punctuation characters
pub fn is_terminal(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

/// True if the trimmed text ends in terminal punctuation
pub fn ends_with_terminal(text: &str) -> bool {
    text.trim_end().chars().last().map(is_terminal).unwrap_or(false)
}

/// Lazy iterator over sentence slices of the input text.
///
/// Yielded slices are trimmed views into the original string, each ending
/// with its terminal punctuation character. The iterator is restartable:
/// segmenting the same input twice yields identical sequences.
#[derive(Debug, Clone)]
pub struct Sentences<'a> {
    text: &'a str,
    pos: usize,
    min_chars: usize,
}

impl<'a> Iterator for Sentences<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        while self.pos < self.text.len() {
            let start = self.pos;
            match self.text[start..].find(is_terminal) {
                Some(rel) => {
                    // Terminal chars are single-byte ASCII, so +1 stays on
                    // a char boundary.
                    let end = start + rel + 1;
                    self.pos = end;

                    let sentence = self.text[start..end].trim();
                    if sentence.len() >= self.min_chars {
                        return Some(sentence);
                    }
                }
                None => {
                    // Trailing fragment with no terminal punctuation.
                    self.pos = self.text.len();
                    return None;
                }
            }
        }
        None
    }
}

/// Segment `text` into sentences of at least `min_chars` trimmed bytes.
///
/// Empty input yields an empty iterator. Pure: no state survives the call.
pub fn segment(text: &str, min_chars: usize) -> Sentences<'_> {
    Sentences {
        text,
        pos: 0,
        min_chars,
    }
}
