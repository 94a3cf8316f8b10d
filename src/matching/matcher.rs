//! Fuzzy street-name matching.
//!
//! Scores candidate strings against the catalog entries of one postal code.
//! A candidate is ranked against the pool with token-set similarity, the
//! top entries form a shortlist, and the first shortlisted entry clearing
//! the acceptance threshold wins. A length-delta guard rejects pairs whose
//! character counts are too far apart, which keeps short candidates from
//! riding a shared token to a perfect score.

use serde::{Deserialize, Serialize};

use crate::catalog::ReferenceEntry;
use crate::matching::patterns;
use crate::matching::similarity::{partial_ratio, ratio, token_set_ratio};

/// Tunable parameters of the matching pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatcherConfig {
    /// Minimum score a shortlisted entry must reach to be accepted.
    pub acceptance_threshold: u8,
    /// Number of top-ranked entries re-scored per candidate.
    pub shortlist_size: usize,
    /// Maximum character-count difference between candidate and match.
    pub max_length_delta: usize,
    /// Words shorter than this are skipped on the per-word pass.
    pub min_word_len: usize,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        MatcherConfig {
            acceptance_threshold: 90,
            shortlist_size: 3,
            max_length_delta: 3,
            min_word_len: 3,
        }
    }
}

/// One accepted correction for a piece of the input address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchCandidate {
    /// The normalized fragment or word the correction was made from.
    pub original_fragment: String,
    /// The canonical street name it was corrected to.
    pub corrected_street_name: String,
    /// Similarity score, 0 to 100.
    pub score: u8,
}

/// Fuzzy matcher over a postal-code-restricted entry pool.
#[derive(Debug, Clone, Default)]
pub struct FuzzyMatcher {
    config: MatcherConfig,
}

impl FuzzyMatcher {
    /// Create a matcher with default parameters.
    pub fn new() -> Self {
        FuzzyMatcher {
            config: MatcherConfig::default(),
        }
    }

    /// Create a matcher with the given parameters.
    pub fn with_config(config: MatcherConfig) -> Self {
        FuzzyMatcher { config }
    }

    /// Get the matcher configuration.
    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Match a whole fragment against the pool.
    ///
    /// The fragment is normalized, ranked against the pool with token-set
    /// similarity, and the first shortlisted entry clearing the threshold
    /// and the length-delta guard is returned. A guard rejection moves on
    /// to the next shortlisted entry rather than aborting.
    pub fn best_match(&self, fragment: &str, pool: &[&ReferenceEntry]) -> Option<MatchCandidate> {
        let candidate = normalize_candidate(fragment);
        if candidate.is_empty() {
            return None;
        }
        for (entry, score) in self.shortlist(&candidate, pool) {
            if score >= self.config.acceptance_threshold
                && self.within_length_delta(&candidate, &entry.street_name)
            {
                return Some(MatchCandidate {
                    original_fragment: capitalize(&candidate),
                    corrected_street_name: capitalize(&entry.street_name),
                    score,
                });
            }
        }
        None
    }

    /// Match a single extracted word or span against the pool.
    ///
    /// Words below the configured minimum length are skipped outright.
    /// Shortlisted entries are re-scored with the higher of plain ratio
    /// and partial ratio, so a word embedded in a longer catalog name can
    /// still reach the threshold, subject to the length-delta guard.
    pub fn best_word_match(&self, word: &str, pool: &[&ReferenceEntry]) -> Option<MatchCandidate> {
        let candidate = normalize_candidate(word);
        if candidate.chars().count() < self.config.min_word_len {
            return None;
        }
        for (entry, _) in self.shortlist(&candidate, pool) {
            let score = ratio(&candidate, &entry.street_name)
                .max(partial_ratio(&candidate, &entry.street_name));
            if score >= self.config.acceptance_threshold
                && self.within_length_delta(&candidate, &entry.street_name)
            {
                return Some(MatchCandidate {
                    original_fragment: capitalize(&candidate),
                    corrected_street_name: capitalize(&entry.street_name),
                    score,
                });
            }
        }
        None
    }

    /// Structural fallback for fragments nothing fuzzy-matched.
    ///
    /// Every suffix-bearing street-name word found in the fragment is
    /// returned with a perfect score, since it is a literal structural
    /// match rather than a fuzzy guess.
    pub fn pattern_fallback(&self, fragment: &str) -> Vec<MatchCandidate> {
        let candidate = normalize_candidate(fragment);
        patterns::pattern_matches(&candidate)
            .into_iter()
            .map(|word| MatchCandidate {
                original_fragment: capitalize(&word),
                corrected_street_name: capitalize(&word),
                score: 100,
            })
            .collect()
    }

    /// Rank the pool by token-set similarity and keep the top entries.
    /// The sort is stable, so tied scores preserve catalog order.
    fn shortlist<'a>(
        &self,
        candidate: &str,
        pool: &[&'a ReferenceEntry],
    ) -> Vec<(&'a ReferenceEntry, u8)> {
        let mut ranked: Vec<(&ReferenceEntry, u8)> = pool
            .iter()
            .map(|entry| (*entry, token_set_ratio(candidate, &entry.street_name)))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(self.config.shortlist_size);
        ranked
    }

    fn within_length_delta(&self, candidate: &str, street_name: &str) -> bool {
        let candidate_len = candidate.chars().count();
        let street_len = street_name.chars().count();
        candidate_len.abs_diff(street_len) <= self.config.max_length_delta
    }
}

/// Normalize a raw fragment for scoring: separator characters become
/// spaces, whitespace runs collapse, and the result is lowercased.
pub fn normalize_candidate(text: &str) -> String {
    text.replace(['/', ',', '.'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Uppercase the first character, lowercase the rest.
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(postal_code: &str, street_name: &str) -> ReferenceEntry {
        ReferenceEntry {
            postal_code: postal_code.to_string(),
            street_name: street_name.to_string(),
            locality: "Uppsala".to_string(),
        }
    }

    #[test]
    fn test_best_match_accepts_close_name() {
        let matcher = FuzzyMatcher::new();
        let entries = vec![entry("12345", "storgatan")];
        let pool: Vec<&ReferenceEntry> = entries.iter().collect();

        let found = matcher.best_match("Storgatan", &pool).unwrap();
        assert_eq!(found.corrected_street_name, "Storgatan");
        assert_eq!(found.score, 100);
        assert_eq!(found.original_fragment, "Storgatan");
    }

    #[test]
    fn test_best_match_rejects_below_threshold() {
        let matcher = FuzzyMatcher::new();
        let entries = vec![entry("12345", "kungsgatan")];
        let pool: Vec<&ReferenceEntry> = entries.iter().collect();

        assert!(matcher.best_match("Drottninggränd", &pool).is_none());
    }

    #[test]
    fn test_length_delta_guard_blocks_short_candidate() {
        let matcher = FuzzyMatcher::new();
        let entries = vec![entry("12345", "ab cdef")];
        let pool: Vec<&ReferenceEntry> = entries.iter().collect();

        // Token-set similarity scores 100 here, the guard still rejects.
        assert!(matcher.best_match("Ab", &pool).is_none());
    }

    #[test]
    fn test_guard_rejection_moves_down_the_shortlist() {
        let matcher = FuzzyMatcher::new();
        let entries = vec![entry("12345", "storgatan lilla"), entry("12345", "storgatan")];
        let pool: Vec<&ReferenceEntry> = entries.iter().collect();

        let found = matcher.best_match("storgatan", &pool).unwrap();
        assert_eq!(found.corrected_street_name, "Storgatan");
    }

    #[test]
    fn test_word_match_tolerates_stray_space() {
        let matcher = FuzzyMatcher::new();
        let entries = vec![entry("12345", "storgatan")];
        let pool: Vec<&ReferenceEntry> = entries.iter().collect();

        let found = matcher.best_word_match("Stor gatan", &pool).unwrap();
        assert_eq!(found.corrected_street_name, "Storgatan");
        assert_eq!(found.score, 90);
    }

    #[test]
    fn test_word_match_uses_partial_ratio() {
        let matcher = FuzzyMatcher::new();
        let entries = vec![entry("12345", "storgatan")];
        let pool: Vec<&ReferenceEntry> = entries.iter().collect();

        let found = matcher.best_word_match("storgat", &pool).unwrap();
        assert_eq!(found.score, 100);
    }

    #[test]
    fn test_word_match_skips_short_words() {
        let matcher = FuzzyMatcher::new();
        let entries = vec![entry("12345", "ab")];
        let pool: Vec<&ReferenceEntry> = entries.iter().collect();

        assert!(matcher.best_word_match("ab", &pool).is_none());
    }

    #[test]
    fn test_pattern_fallback_scores_perfect() {
        let matcher = FuzzyMatcher::new();
        let found = matcher.pattern_fallback("okänd smalvägen");
        assert_eq!(
            found,
            vec![MatchCandidate {
                original_fragment: "Smalvägen".to_string(),
                corrected_street_name: "Smalvägen".to_string(),
                score: 100,
            }]
        );
    }

    #[test]
    fn test_custom_threshold_rejects_borderline_score() {
        let config = MatcherConfig {
            acceptance_threshold: 95,
            ..MatcherConfig::default()
        };
        let matcher = FuzzyMatcher::with_config(config);
        let entries = vec![entry("12345", "storgatan")];
        let pool: Vec<&ReferenceEntry> = entries.iter().collect();

        assert!(matcher.best_word_match("Stor gatan", &pool).is_none());
    }

    #[test]
    fn test_normalize_candidate() {
        assert_eq!(normalize_candidate(" Stora Gatan 7 "), "stora gatan 7");
        assert_eq!(normalize_candidate("St. Eriksgatan"), "st eriksgatan");
        assert_eq!(normalize_candidate("a/b,c"), "a b c");
    }

    #[test]
    fn test_empty_pool_matches_nothing() {
        let matcher = FuzzyMatcher::new();
        assert!(matcher.best_match("storgatan", &[]).is_none());
        assert!(matcher.best_word_match("storgatan", &[]).is_none());
    }
}
