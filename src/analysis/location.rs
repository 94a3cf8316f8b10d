//! Location extraction from address fragments.
//!
//! When a whole fragment fails fuzzy matching, the matcher retries on
//! location-like sub-spans. Extraction is pluggable: the gazetteer variant
//! tags spans with no external model, the passthrough variant hands the
//! fragment back unchanged.

use std::sync::Arc;

use unicode_segmentation::UnicodeSegmentation;

/// Swedish street/place suffixes recognized by the gazetteer tagger.
const SWEDISH_SUFFIXES: &[&str] = &[
    "vägen", "gatan", "gränden", "allén", "avenyn", "boulevard", "torget",
    "stigen", "backen", "leden", "platsen", "väg", "gata", "gränd", "torg",
    "stig", "plan",
];

/// Tags location-like spans within a text fragment.
pub trait LocationExtractor: Send + Sync {
    /// Extract location-like spans from the text, in document order.
    fn extract_locations(&self, text: &str) -> Vec<String>;

    /// Get the name of this extractor.
    fn name(&self) -> &'static str;
}

/// A model-free location tagger for Swedish street names.
///
/// Maximal runs of alphabetic words form one span each (house numbers, unit
/// markers, and single-letter words break runs). Inside a multiword run,
/// every word that extends a known street/place suffix is also emitted as
/// its own span, so "Karlsson Storvägen 12" yields both
/// "Karlsson Storvägen" and "Storvägen".
#[derive(Debug, Clone)]
pub struct GazetteerExtractor {
    suffixes: Vec<String>,
}

impl GazetteerExtractor {
    /// Create an extractor with the built-in Swedish suffix gazetteer.
    pub fn swedish() -> Self {
        GazetteerExtractor {
            suffixes: SWEDISH_SUFFIXES.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Create an extractor with a custom suffix gazetteer.
    pub fn with_suffixes<I, S>(suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        GazetteerExtractor {
            suffixes: suffixes.into_iter().map(|s| s.into().to_lowercase()).collect(),
        }
    }

    /// True when the word ends in a known suffix without being the bare
    /// suffix itself ("Storvägen" qualifies, "vägen" does not).
    fn extends_known_suffix(&self, word: &str) -> bool {
        let lowered = word.to_lowercase();
        self.suffixes
            .iter()
            .any(|suffix| lowered.ends_with(suffix.as_str()) && lowered.len() > suffix.len())
    }

    fn is_name_word(word: &str) -> bool {
        word.chars().count() > 1 && word.chars().all(char::is_alphabetic)
    }
}

impl Default for GazetteerExtractor {
    fn default() -> Self {
        Self::swedish()
    }
}

impl LocationExtractor for GazetteerExtractor {
    fn extract_locations(&self, text: &str) -> Vec<String> {
        let mut spans = Vec::new();
        let mut run: Vec<&str> = Vec::new();

        let flush = |run: &mut Vec<&str>, spans: &mut Vec<String>| {
            if run.is_empty() {
                return;
            }
            spans.push(run.join(" "));
            if run.len() > 1 {
                for word in run.iter().filter(|w| self.extends_known_suffix(w)) {
                    spans.push(word.to_string());
                }
            }
            run.clear();
        };

        for word in text.unicode_words() {
            if Self::is_name_word(word) {
                run.push(word);
            } else {
                flush(&mut run, &mut spans);
            }
        }
        flush(&mut run, &mut spans);

        spans
    }

    fn name(&self) -> &'static str {
        "gazetteer"
    }
}

/// A fallback extractor that returns the input unchanged.
#[derive(Debug, Clone, Default)]
pub struct PassthroughExtractor;

impl PassthroughExtractor {
    /// Create a new passthrough extractor.
    pub fn new() -> Self {
        PassthroughExtractor
    }
}

impl LocationExtractor for PassthroughExtractor {
    fn extract_locations(&self, text: &str) -> Vec<String> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            Vec::new()
        } else {
            vec![trimmed.to_string()]
        }
    }

    fn name(&self) -> &'static str {
        "passthrough"
    }
}

/// Convenience alias for a shared extractor handle.
pub type SharedExtractor = Arc<dyn LocationExtractor>;
