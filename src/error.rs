//! Error types for the Gatumatch library.
//!
//! All fallible operations in the crate report a [`GatumatchError`]. Note
//! that "no match found" is a normal return value (`None`), never an error;
//! the variants here cover catalog construction, input preconditions, and
//! batch execution.
//!
//! # Examples
//!
//! ```
//! use gatumatch::error::{GatumatchError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(GatumatchError::invalid_input("street name is blank"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use anyhow;
use thiserror::Error;

/// The main error type for Gatumatch operations.
///
/// Uses the `thiserror` crate for the `Error` trait implementation and
/// provides convenient constructor methods for creating specific error
/// types.
#[derive(Error, Debug)]
pub enum GatumatchError {
    /// Catalog construction errors (empty or unusable reference data)
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Analysis-related errors (segmentation, extraction)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Precondition violations (blank street name or postal code)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Operation cancelled
    #[error("Operation cancelled: {0}")]
    Cancelled(String),

    /// Internal errors (thread pool construction and the like)
    #[error("Internal error: {0}")]
    Internal(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with GatumatchError.
pub type Result<T> = std::result::Result<T, GatumatchError>;

impl GatumatchError {
    /// Create a new catalog error.
    pub fn catalog<S: Into<String>>(msg: S) -> Self {
        GatumatchError::Catalog(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        GatumatchError::Analysis(msg.into())
    }

    /// Create a new invalid input error.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        GatumatchError::InvalidInput(msg.into())
    }

    /// Create a new cancelled error.
    pub fn cancelled<S: Into<String>>(msg: S) -> Self {
        GatumatchError::Cancelled(msg.into())
    }

    /// Create a new internal error.
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        GatumatchError::Internal(msg.into())
    }
}
