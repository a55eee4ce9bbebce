//! Word-bounded excerpt used as summarizer input. Never persisted.

/// Word cap for the summarizer input.
pub const MAX_WORDS: usize = 700;

/// Marker appended when the text was cut at the word cap.
pub const ELLIPSIS: &str = " ...";

// Paragraphs are joined with a blank line before tokenizing. The join choice
// only affects tokenization input; tokens are always rejoined with single
// spaces, so the snippet itself never contains the separator.
const PARAGRAPH_JOIN: &str = "\n\n";

/// Build the snippet from the extracted paragraphs.
///
/// Returns the empty string for an empty paragraph set; callers skip
/// summarization in that case.
pub fn build_snippet(paragraphs: &[String]) -> String {
    let full = paragraphs.join(PARAGRAPH_JOIN);
    let words: Vec<&str> = full.split_whitespace().collect();

    if words.len() > MAX_WORDS {
        let mut snippet = words[..MAX_WORDS].join(" ");
        snippet.push_str(ELLIPSIS);
        snippet
    } else {
        words.join(" ")
    }
}
