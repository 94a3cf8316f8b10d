//! End-to-end address correction.
//!
//! The engine wires segmentation, location extraction, and fuzzy matching
//! into one lookup: an address string plus postal code in, zero or more
//! corrected street names with scores out. Each fragment of the address
//! walks the same ladder: whole-fragment match, then per-span word match,
//! then the structural suffix fallback.

use std::fmt;
use std::sync::Arc;

use ahash::AHashSet;

use crate::analysis::location::{GazetteerExtractor, LocationExtractor};
use crate::analysis::segmenter::segment;
use crate::catalog::ReferenceCatalog;
use crate::error::{GatumatchError, Result};
use crate::matching::matcher::{FuzzyMatcher, MatchCandidate, MatcherConfig};

/// Address correction engine over one immutable reference catalog.
///
/// Stateless across calls; safe to share between threads and call
/// concurrently.
#[derive(Clone)]
pub struct CorrectionEngine {
    /// Shared reference catalog, read-only after construction.
    catalog: Arc<ReferenceCatalog>,
    /// Location extractor used for the per-span word pass.
    extractor: Arc<dyn LocationExtractor>,
    /// Fuzzy matcher applied to every candidate.
    matcher: FuzzyMatcher,
}

impl CorrectionEngine {
    /// Create an engine with default matching parameters and the Swedish
    /// gazetteer extractor.
    pub fn new(catalog: Arc<ReferenceCatalog>) -> Self {
        CorrectionEngine {
            catalog,
            extractor: Arc::new(GazetteerExtractor::swedish()),
            matcher: FuzzyMatcher::new(),
        }
    }

    /// Create an engine with custom matching parameters.
    pub fn with_config(catalog: Arc<ReferenceCatalog>, config: MatcherConfig) -> Self {
        CorrectionEngine {
            catalog,
            extractor: Arc::new(GazetteerExtractor::swedish()),
            matcher: FuzzyMatcher::with_config(config),
        }
    }

    /// Replace the location extractor.
    pub fn with_extractor(mut self, extractor: Arc<dyn LocationExtractor>) -> Self {
        self.extractor = extractor;
        self
    }

    /// Get the underlying catalog.
    pub fn catalog(&self) -> &ReferenceCatalog {
        &self.catalog
    }

    /// Look up the locality for a postal code, "Unknown" when absent.
    pub fn locality_for(&self, postal_code: &str) -> &str {
        self.catalog.locality_for(postal_code)
    }

    /// Find corrected street names for a raw address and postal code.
    ///
    /// Returns `Ok(None)` when nothing matched or the postal code is not
    /// in the catalog, `Ok(Some(..))` with candidates deduplicated by
    /// corrected name otherwise. Blank inputs are an error, so callers
    /// can tell "no data" from "no match".
    pub fn find_best_matches(
        &self,
        street_name: &str,
        postal_code: &str,
    ) -> Result<Option<Vec<MatchCandidate>>> {
        let street = street_name.trim();
        let postal = postal_code.trim();
        if street.is_empty() {
            return Err(GatumatchError::invalid_input("street name is blank"));
        }
        if postal.is_empty() {
            return Err(GatumatchError::invalid_input("postal code is blank"));
        }

        let pool = self.catalog.entries_for(postal);
        if pool.is_empty() {
            return Ok(None);
        }

        let mut accepted = Vec::new();
        for fragment in segment(street) {
            let spans = self.extractor.extract_locations(&fragment);

            if let Some(candidate) = self.matcher.best_match(&fragment, &pool) {
                accepted.push(candidate);
                continue;
            }

            let words = if spans.is_empty() {
                vec![fragment.clone()]
            } else {
                spans
            };
            let word_hit = words
                .iter()
                .find_map(|word| self.matcher.best_word_match(word, &pool));
            if let Some(candidate) = word_hit {
                accepted.push(candidate);
                continue;
            }

            accepted.extend(self.matcher.pattern_fallback(&fragment));
        }

        let mut seen = AHashSet::new();
        let deduped: Vec<MatchCandidate> = accepted
            .into_iter()
            .filter(|candidate| seen.insert(candidate.corrected_street_name.clone()))
            .collect();

        if deduped.is_empty() {
            Ok(None)
        } else {
            Ok(Some(deduped))
        }
    }
}

impl fmt::Debug for CorrectionEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CorrectionEngine")
            .field("catalog_entries", &self.catalog.len())
            .field("extractor", &self.extractor.name())
            .field("matcher", &self.matcher)
            .finish()
    }
}
