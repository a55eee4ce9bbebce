//! Filesystem-safe filename derivation from a page title.

/// Characters removed from titles before use as a filename.
const FORBIDDEN: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Maximum filename length in characters, before the `.md` extension.
const MAX_LEN: usize = 200;

/// Strip forbidden characters and clip to the length cap. A title made
/// entirely of forbidden characters yields the empty string; the clipping
/// is then written as `.md`. Identical derived names overwrite.
pub fn sanitize_title(title: &str) -> String {
    title
        .chars()
        .filter(|c| !FORBIDDEN.contains(c))
        .take(MAX_LEN)
        .collect()
}
