//! # Gatumatch
//!
//! A fuzzy street-address correction library for Rust.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Postal-code-indexed reference catalog
//! - Fuzzy matching with shortlist re-scoring and a length-delta guard
//! - Pluggable location extraction
//! - Street-number and unit-letter extraction
//! - Parallel batch correction with progress and cancellation

pub mod analysis;
pub mod batch;
pub mod catalog;
pub mod engine;
pub mod error;
pub mod matching;

pub mod prelude {
    //! Commonly used types, importable in one line.
    pub use crate::analysis::location::{
        GazetteerExtractor, LocationExtractor, PassthroughExtractor,
    };
    pub use crate::analysis::street_number::{StreetNumber, extract_street_number};
    pub use crate::batch::{AddressRecord, BatchConfig, BatchCorrector, CancelToken, RowOutput};
    pub use crate::catalog::{CatalogRecord, CatalogStats, ReferenceCatalog};
    pub use crate::engine::CorrectionEngine;
    pub use crate::error::{GatumatchError, Result};
    pub use crate::matching::matcher::{FuzzyMatcher, MatchCandidate, MatcherConfig};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
