//! # awb-ops
//!
//! Image operations for white balance processing.
//!
//! This crate provides the pixel-level operations the estimators are
//! assembled from:
//!
//! - [`sobel_gradients`] - Same-size 3×3 Sobel responses for one plane
//! - [`minkowski_magnitude`] - Gradient magnitude via the Minkowski norm
//! - [`apply_gain`] - Per-channel scale + [0, 1] clamp, the shared final
//!   step of every estimator
//!
//! # Example
//!
//! ```rust
//! use awb_core::ImageBuf;
//! use awb_ops::{apply_gain, minkowski_magnitude, sobel_gradients};
//!
//! let img = ImageBuf::filled(8, 8, [0.4, 0.5, 0.6]);
//! let (gx, gy) = sobel_gradients(img.plane(0), 8, 8).unwrap();
//! let mag = minkowski_magnitude(&gx, &gy, 6.0).unwrap();
//! assert!(mag.iter().all(|&m| m == 0.0)); // flat image, no edges
//!
//! let mut out = img.clone();
//! apply_gain(&mut out, [1.1, 1.0, 0.9]);
//! ```
//!
//! # Dependencies
//!
//! - [`awb-core`] - The [`ImageBuf`](awb_core::ImageBuf) buffer type
//! - [`rayon`] - Per-plane parallelism in gain application
//! - [`tracing`] - Trace-level instrumentation
//!
//! # Used By
//!
//! - `awb-balance` - The edge-based estimator and all gain application

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod gain;
mod gradient;

pub use error::*;
pub use gain::*;
pub use gradient::*;
