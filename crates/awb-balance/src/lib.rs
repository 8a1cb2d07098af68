//! # awb-balance
//!
//! Illuminant estimation and white balance correction.
//!
//! Three classical estimators produce a per-channel gain vector from a
//! planar RGB buffer; the gains are applied and clamped, and the
//! correction pipeline brackets the whole thing with the sRGB transfer
//! functions so the estimators always see linear-light values when asked
//! to.
//!
//! # Algorithms
//!
//! | Module | Assumption | Parameters |
//! |--------|------------|------------|
//! | [`grey_world`] | Scene average is neutral grey | none |
//! | [`white_patch`] | Brightest region is neutral white | percentile |
//! | [`grey_edge`] | Edge regions average to neutral grey | sigma (reserved), p |
//!
//! # Usage
//!
//! ```rust
//! use awb_balance::{balance, correct, BalanceParams, CorrectionRequest};
//! use awb_core::{Algorithm, ImageBuf};
//!
//! let img = ImageBuf::filled(16, 16, [0.7, 0.5, 0.3]);
//!
//! // Low level: estimate + apply on a buffer you manage yourself
//! let corrected = balance(&img, Algorithm::GreyWorld, &BalanceParams::default()).unwrap();
//!
//! // High level: the full request pipeline with encoding handling and
//! // before/after reporting
//! let result = correct(&img, &CorrectionRequest::default()).unwrap();
//! # let _ = (corrected, result);
//! ```
//!
//! # Purity
//!
//! Every entry point is a pure function of `(buffer, parameters)`. No
//! state survives a call and there is no process-wide mutable state, so
//! concurrent requests on different buffers never interact.
//!
//! # Dependencies
//!
//! - [`awb-core`] - Buffer and identifier types
//! - [`awb-transfer`] - sRGB decode/encode around estimation
//! - [`awb-stats`] - Means, quantiles, masked reductions
//! - [`awb-ops`] - Gradients and gain application
//! - [`tracing`] - Debug-level instrumentation in the pipeline

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod params;
mod pipeline;

pub mod grey_edge;
pub mod grey_world;
pub mod white_patch;

pub use error::*;
pub use params::*;
pub use pipeline::*;

use awb_core::{Algorithm, ImageBuf};
use awb_ops::apply_gain;

/// Estimates the gain vector for the selected algorithm.
///
/// Dispatch is an exhaustive `match` over the closed [`Algorithm`] set,
/// resolved once per call — adding an algorithm is a compile error until
/// every dispatch site handles it.
///
/// # Errors
///
/// Parameter validation errors from the selected estimator, or a wrapped
/// core error for a zero-area buffer.
pub fn estimate_gains(
    image: &ImageBuf,
    algorithm: Algorithm,
    params: &BalanceParams,
) -> BalanceResult<[f32; 3]> {
    if image.is_empty() {
        return Err(awb_core::Error::invalid_dimensions(
            image.width(),
            image.height(),
            "image has zero area",
        )
        .into());
    }
    match algorithm {
        Algorithm::GreyWorld => Ok(grey_world::estimate_gains(image)),
        Algorithm::WhitePatch => white_patch::estimate_gains(image, &params.white_patch),
        Algorithm::GreyEdge => grey_edge::estimate_gains(image, &params.grey_edge),
    }
}

/// Estimates gains for the selected algorithm and applies them.
///
/// Returns a new buffer of identical shape, scaled per channel and clamped
/// to [0, 1]. The input is expected in the encoding the estimator should
/// operate in — use [`correct`] for automatic encoding handling.
///
/// # Errors
///
/// Same failure surface as [`estimate_gains`].
pub fn balance(
    image: &ImageBuf,
    algorithm: Algorithm,
    params: &BalanceParams,
) -> BalanceResult<ImageBuf> {
    let gains = estimate_gains(image, algorithm, params)?;
    let mut out = image.clone();
    apply_gain(&mut out, gains);
    Ok(out)
}
