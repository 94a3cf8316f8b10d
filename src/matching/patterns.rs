//! Structural street-name detection.
//!
//! Last-resort pass of the matching pipeline: when fuzzy scoring finds
//! nothing, a fragment is scanned for words ending in a common Swedish
//! street suffix. Such words are literal structural matches and carry a
//! perfect score.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// A word built from a non-empty stem plus a recognized street suffix.
    static ref STREET_SUFFIX_WORD: Regex =
        Regex::new(r"(?i)\b(\p{L}+(?:vägen|gatan|allén|avenyn|boulevard|torg|väg))\b")
            .unwrap();
}

/// Find all suffix-bearing street-name words in a fragment, in order.
///
/// The bare suffix alone does not qualify; a stem of at least one letter
/// must precede it.
pub fn pattern_matches(fragment: &str) -> Vec<String> {
    STREET_SUFFIX_WORD
        .captures_iter(fragment)
        .map(|caps| caps[1].to_string())
        .collect()
}
