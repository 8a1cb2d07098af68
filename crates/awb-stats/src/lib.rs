//! # awb-stats
//!
//! Pixel statistics for white balance estimation.
//!
//! This crate provides the reductions all three estimators are built from:
//!
//! - [`mean`], [`max_value`], [`channel_means`] - Plain reductions
//! - [`masked_mean_or_fallback`], [`masked_max_or_fallback`] - Masked
//!   reductions with the shared empty-mask fallback
//! - [`quantile`], [`quantile_with_seed`] - Linear-interpolation quantiles
//!   with capped, seedable subsampling for large inputs
//! - [`guard_divisor`] - The divisor zero-guard
//!
//! # Design
//!
//! Everything here is a pure function over slices (plus two [`ImageBuf`]
//! conveniences); no state is retained between calls, so concurrent
//! requests on different buffers never interact. The only randomness is
//! the quantile subsample, and its RNG is constructed per call from an
//! injected seed.
//!
//! # Usage
//!
//! ```rust
//! use awb_stats::{guard_divisor, mean, quantile};
//!
//! let plane = [0.1, 0.2, 0.3, 0.4];
//! let m = mean(&plane);
//! let p95 = quantile(&plane, 0.95);
//! let gain = m / guard_divisor(p95);
//! # let _ = gain;
//! ```
//!
//! # Dependencies
//!
//! - [`awb-core`] - The [`ImageBuf`] buffer type
//! - [`rand`] - Per-call RNG for the quantile subsample
//!
//! # Used By
//!
//! - `awb-balance` - All three estimators

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod moments;
mod quantile;

pub use moments::*;
pub use quantile::*;

// Re-export so downstream crates name the buffer type without an extra import.
pub use awb_core::ImageBuf;
