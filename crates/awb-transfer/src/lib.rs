//! # awb-transfer
//!
//! Transfer functions (OETF/EOTF) for white balance processing.
//!
//! Transfer functions convert between linear light values and encoded
//! display values. The estimators in `awb-balance` are defined on
//! physically meaningful linear-light data, so a gamma-encoded buffer is
//! decoded before estimation and re-encoded afterwards.
//!
//! # Terminology
//!
//! - **EOTF** (Electro-Optical Transfer Function): Encoded -> Linear
//! - **OETF** (Opto-Electronic Transfer Function): Linear -> Encoded
//!
//! # Supported Transfer Functions
//!
//! | Function | Use Case | Range |
//! |----------|----------|-------|
//! | [`srgb`] | Web, consumer displays | [0, 1] |
//!
//! sRGB is deliberately the only encoding here; the correction contract
//! covers sRGB and linear RGB and nothing else.
//!
//! # Usage
//!
//! ```rust
//! use awb_core::ImageBuf;
//! use awb_transfer::{srgb, to_encoded, to_linear};
//!
//! // Scalar
//! let linear = srgb::eotf(0.5);
//! let encoded = srgb::oetf(linear);
//!
//! // Whole buffer
//! let img = ImageBuf::filled(8, 8, [0.5, 0.5, 0.5]);
//! let lin = to_linear(&img);
//! let back = to_encoded(&lin);
//! ```
//!
//! # Properties
//!
//! `to_encoded(to_linear(x)) ≈ x` within 1e-4 per sample, except where the
//! encode-side clamp fired. Both directions are elementwise and
//! channel-independent; non-finite input propagates to non-finite output
//! without panicking (rejecting such input is the pipeline's job).
//!
//! # Dependencies
//!
//! - [`awb-core`] - The [`ImageBuf`] buffer type
//!
//! # Used By
//!
//! - `awb-balance` - Color space bracketing around estimation

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod srgb;

// Re-export common functions
pub use srgb::{eotf as srgb_eotf, oetf as srgb_oetf};

use awb_core::ImageBuf;

/// Decodes a gamma-encoded sRGB buffer to linear light.
///
/// Elementwise [`srgb::eotf`] over all three planes; shape-preserving.
///
/// # Example
///
/// ```rust
/// use awb_core::ImageBuf;
/// use awb_transfer::to_linear;
///
/// let img = ImageBuf::filled(2, 2, [0.0, 0.5, 1.0]);
/// let lin = to_linear(&img);
/// assert_eq!(lin.pixel(0, 0)[0], 0.0);
/// assert!((lin.pixel(0, 0)[2] - 1.0).abs() < 1e-6);
/// ```
pub fn to_linear(image: &ImageBuf) -> ImageBuf {
    let mut out = image.clone();
    out.par_map_samples(srgb::eotf);
    out
}

/// Encodes a linear-light buffer to gamma-encoded sRGB.
///
/// Elementwise [`srgb::oetf`] over all three planes; shape-preserving.
/// Each sample is clamped to [0, 1] on the way out.
pub fn to_encoded(image: &ImageBuf) -> ImageBuf {
    let mut out = image.clone();
    out.par_map_samples(srgb::oetf);
    out
}
