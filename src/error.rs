//! Error types for the anofox-periodogram library.

use thiserror::Error;

/// Result type alias for period search operations.
pub type Result<T> = std::result::Result<T, PeriodogramError>;

/// Errors that can occur while preparing or running a period search.
///
/// Numeric degeneracies (empty bins, zero variance, zero frequency) are not
/// errors: they are reported as `NaN` entries in the result series.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PeriodogramError {
    /// Input data is empty.
    #[error("empty input data")]
    EmptyData,

    /// Insufficient data points for the operation.
    #[error("insufficient data: need at least {needed}, got {got}")]
    InsufficientData { needed: usize, got: usize },

    /// Invalid scan parameter (range, resolution, bin count, harmonics).
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// An observation time or magnitude is NaN or infinite.
    #[error("non-finite observation at index {index}")]
    NonFiniteObservation { index: usize },

    /// Dimension mismatch between data structures.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// Computation error that aborts the run.
    #[error("computation error: {0}")]
    ComputationError(String),
}

impl PeriodogramError {
    /// True for errors detected while validating parameters, before any scan.
    pub fn is_parameter_error(&self) -> bool {
        matches!(self, PeriodogramError::InvalidParameter(_))
    }
}
