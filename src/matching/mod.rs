//! Fuzzy matching module for Gatumatch.
//!
//! This module provides the scoring side of address correction: string
//! similarity metrics, the shortlist-and-rescore matcher, and the
//! structural street-suffix fallback.

pub mod matcher;
pub mod patterns;
pub mod similarity;

// Re-export commonly used types
pub use matcher::*;
pub use patterns::*;
pub use similarity::*;
