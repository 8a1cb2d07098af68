//! Error types for white balance estimation and correction.
//!
//! Provides unified error handling for the estimators and the correction
//! pipeline. Every variant is terminal for the current request: the
//! computation is deterministic given its input, so retrying internally
//! would only reproduce the failure.

use thiserror::Error;

/// White balance error.
///
/// Covers all failure modes of the correction pipeline:
/// - Malformed input (non-finite samples)
/// - Color space conversion failure
/// - Out-of-range estimator parameters
/// - Wrapped buffer and operation errors from the lower crates
#[derive(Debug, Error)]
pub enum BalanceError {
    /// Input buffer contains a NaN or infinite sample.
    ///
    /// The index is into the planar sample layout. Rejected up front so
    /// the statistics never see non-finite values.
    #[error("non-finite sample {value} at index {index}")]
    NonFiniteSample {
        /// Planar index of the first offending sample.
        index: usize,
        /// The offending value.
        value: f32,
    },

    /// Color space conversion produced non-finite output.
    ///
    /// Only plausible on malformed input; decoding a finite [0, 1] buffer
    /// is closed over finite values.
    #[error("color space conversion failed: {0}")]
    ConversionFailed(String),

    /// Estimator parameter outside its valid range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Buffer or identifier error from awb-core.
    #[error(transparent)]
    Core(#[from] awb_core::Error),

    /// Image operation error from awb-ops.
    #[error(transparent)]
    Ops(#[from] awb_ops::OpsError),
}

/// Result type for white balance operations.
pub type BalanceResult<T> = Result<T, BalanceError>;
