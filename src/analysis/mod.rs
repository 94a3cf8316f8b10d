//! Address analysis module for Gatumatch.
//!
//! This module provides the lexical side of address correction: splitting a
//! raw street field into fragments, pulling out house numbers, and tagging
//! location-like spans for the matcher to retry on.

pub mod location;
pub mod segmenter;
pub mod street_number;

// Re-export commonly used types
pub use location::*;
pub use segmenter::*;
pub use street_number::*;
