//! Post-processing of raw summarizer output.
//!
//! Applied only on a successful remote call; failure paths render a fixed
//! sentinel instead and never reach this module.

use once_cell::sync::Lazy;
use regex::Regex;

// Conversational preamble some models prepend ("Here's a summary:").
// Tolerates the right-single-quote variant and any casing.
static PREAMBLE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^here['’]s.*?\n").unwrap());

// Asterisk bullets, rewritten line by line to hyphen bullets.
static BULLET_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^\s*\*\s*").unwrap());

/// Strip a single leading preamble line, rewrite `*` bullets to `- `, and
/// trim. Normalizing already-normalized text is a no-op.
pub fn normalize_summary(raw: &str) -> String {
    let stripped = PREAMBLE_RE.replace(raw, "");
    let bullets = BULLET_RE.replace_all(&stripped, "- ");
    bullets.trim().to_string()
}
