//! # awb-core
//!
//! Core types for automatic white balance processing.
//!
//! This crate provides the foundational types used throughout the AWB-RS
//! workspace:
//!
//! - [`ImageBuf`] - Planar (3, H, W) `f32` pixel buffer with copy-on-write
//! - [`Algorithm`] - Closed set of illuminant estimation algorithms
//! - [`ColorSpace`] - Closed set of supported pixel encodings
//! - [`Error`], [`Result`] - Unified error handling
//!
//! ## Design Philosophy
//!
//! The buffer is **planar** and **always 3-channel**. Every estimator
//! consumes and produces a buffer of identical shape — no resizing, no
//! channel reordering — and the encoding of a buffer is tracked alongside
//! it by the caller, never guessed from the data.
//!
//! Identifier sets are closed enums: dispatch is an exhaustive `match`
//! resolved once per request, and an unknown name is a hard error rather
//! than a silent default.
//!
//! ## Crate Structure
//!
//! This crate is the foundation of AWB-RS and has no internal dependencies.
//! All other AWB-RS crates depend on `awb-core`:
//!
//! ```text
//! awb-core (this crate)
//!    ^
//!    |
//!    +-- awb-transfer (sRGB transfer functions)
//!    +-- awb-stats (pixel statistics)
//!    +-- awb-ops (gradients, gain application)
//!    +-- awb-balance (estimators, pipeline)
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` - Enable serialization for the identifier enums

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod ident;
pub mod image;

// Re-exports for convenience
pub use error::*;
pub use ident::*;
pub use image::*;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use awb_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::ident::{Algorithm, ColorSpace};
    pub use crate::image::{ImageBuf, CHANNELS};
}
