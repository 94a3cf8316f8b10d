//! Batch correction of address rows.
//!
//! Drives the engine over many rows in parallel on a dedicated thread
//! pool. Output order always matches input order. A shared cancel token
//! stops the batch between rows, and a progress callback reports how many
//! rows have finished.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use serde::{Deserialize, Serialize};

use crate::analysis::street_number::extract_street_number;
use crate::engine::CorrectionEngine;
use crate::error::{GatumatchError, Result};

/// One input row: a raw street field and a postal-code field, either of
/// which may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressRecord {
    /// Raw street/address text, `None` when the source cell was empty.
    pub street: Option<String>,
    /// Postal code text, `None` when the source cell was empty.
    pub postal_code: Option<String>,
}

impl AddressRecord {
    /// Create a record with both fields present.
    pub fn new<S: Into<String>>(street: S, postal_code: S) -> Self {
        AddressRecord {
            street: Some(street.into()),
            postal_code: Some(postal_code.into()),
        }
    }
}

/// Outcome of correcting one row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RowOutput {
    /// Corrected street names joined with "/ ", plus any street number.
    Corrected(String),
    /// The engine found no acceptable correction.
    NoMatch,
    /// The row carried no street text to correct.
    NoData,
    /// Correcting this row failed; the error message is kept.
    Failed(String),
}

impl std::fmt::Display for RowOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RowOutput::Corrected(text) => write!(f, "{text}"),
            RowOutput::NoMatch => write!(f, "No Match Found"),
            RowOutput::NoData => write!(f, "No Data Provided"),
            RowOutput::Failed(msg) => write!(f, "Error: {msg}"),
        }
    }
}

/// Shared flag for stopping a batch between rows.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    /// Create a token in the not-cancelled state.
    pub fn new() -> Self {
        CancelToken {
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Check whether cancellation was requested.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Configuration for batch correction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Worker threads for the batch pool; `None` uses all CPUs.
    pub thread_pool_size: Option<usize>,
}

/// Parallel batch driver around a [`CorrectionEngine`].
pub struct BatchCorrector {
    /// Shared engine; read-only, used from every worker.
    engine: Arc<CorrectionEngine>,
    /// Dedicated pool so batch work does not take over the global pool.
    thread_pool: ThreadPool,
    /// Configuration this corrector was built with.
    config: BatchConfig,
}

impl BatchCorrector {
    /// Create a batch corrector with the default configuration.
    pub fn new(engine: Arc<CorrectionEngine>) -> Result<Self> {
        Self::with_config(engine, BatchConfig::default())
    }

    /// Create a batch corrector with the given configuration.
    pub fn with_config(engine: Arc<CorrectionEngine>, config: BatchConfig) -> Result<Self> {
        let thread_pool_size = config.thread_pool_size.unwrap_or_else(num_cpus::get);
        let thread_pool = ThreadPoolBuilder::new()
            .num_threads(thread_pool_size)
            .thread_name(|i| format!("batch-correct-{i}"))
            .build()
            .map_err(|e| GatumatchError::internal(format!("Failed to create thread pool: {e}")))?;

        Ok(BatchCorrector {
            engine,
            thread_pool,
            config,
        })
    }

    /// Get the configuration.
    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    /// Correct all rows, preserving input order.
    pub fn correct_all(&self, records: &[AddressRecord]) -> Result<Vec<RowOutput>> {
        self.correct_all_with_progress(records, &CancelToken::new(), |_, _| {})
    }

    /// Correct all rows, stopping early when the token is cancelled.
    ///
    /// Cancellation is checked before each row; rows already in flight
    /// run to completion. A cancelled batch returns an error rather than
    /// a partial output.
    pub fn correct_all_cancellable(
        &self,
        records: &[AddressRecord],
        cancel: &CancelToken,
    ) -> Result<Vec<RowOutput>> {
        self.correct_all_with_progress(records, cancel, |_, _| {})
    }

    /// Correct all rows with cancellation and a progress callback.
    ///
    /// The callback receives (rows finished so far, total rows). It is
    /// invoked from worker threads, in completion order.
    pub fn correct_all_with_progress<F>(
        &self,
        records: &[AddressRecord],
        cancel: &CancelToken,
        progress: F,
    ) -> Result<Vec<RowOutput>>
    where
        F: Fn(usize, usize) + Send + Sync,
    {
        let total = records.len();
        let completed = AtomicUsize::new(0);

        self.thread_pool.install(|| {
            records
                .par_iter()
                .map(|record| {
                    if cancel.is_cancelled() {
                        return Err(GatumatchError::cancelled("batch correction cancelled"));
                    }
                    let output = self.correct_row(record);
                    let done = completed.fetch_add(1, Ordering::SeqCst) + 1;
                    progress(done, total);
                    Ok(output)
                })
                .collect::<Result<Vec<_>>>()
        })
    }

    /// Correct one row. Row-level failures become a [`RowOutput::Failed`]
    /// value so one bad row never aborts the batch.
    fn correct_row(&self, record: &AddressRecord) -> RowOutput {
        let street = match record.street.as_deref().map(str::trim) {
            Some(street) if !street.is_empty() => street,
            _ => return RowOutput::NoData,
        };
        let postal_code = record.postal_code.as_deref().unwrap_or("");

        match self.engine.find_best_matches(street, postal_code) {
            Ok(Some(candidates)) => {
                let corrected = candidates
                    .iter()
                    .map(|c| c.corrected_street_name.as_str())
                    .collect::<Vec<_>>()
                    .join("/ ");
                match extract_street_number(street) {
                    Some(number) => RowOutput::Corrected(format!("{corrected} {number}")),
                    None => RowOutput::Corrected(corrected),
                }
            }
            Ok(None) => RowOutput::NoMatch,
            Err(e) => RowOutput::Failed(e.to_string()),
        }
    }
}
