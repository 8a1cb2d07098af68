//! Error types for awb-core operations.
//!
//! This module provides the unified error handling for buffer construction
//! and identifier parsing.
//!
//! # Overview
//!
//! The [`Error`] enum covers the failure modes of the foundational types:
//! - Buffer construction from raw data (wrong length, wrong channel count)
//! - Parsing of the closed algorithm / color space identifier sets
//!
//! Identifier parsing fails loudly by design: an unknown algorithm name is a
//! hard error, never a silent fallback to some default estimator.
//!
//! # Usage
//!
//! ```rust
//! use awb_core::{Algorithm, Error};
//!
//! let err = "gray_world".parse::<Algorithm>().unwrap_err();
//! assert!(matches!(err, Error::UnsupportedAlgorithm { .. }));
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation
//!
//! # Used By
//!
//! - [`crate::image::ImageBuf`] - Buffer construction
//! - [`crate::ident`] - Identifier parsing
//! - `awb-balance` - Wrapped into its pipeline error

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the core types.
///
/// This enum uses [`thiserror`] for automatic [`std::error::Error`] and
/// [`std::fmt::Display`] implementations.
#[derive(Debug, Error)]
pub enum Error {
    /// Raw pixel data carries a channel count other than 3.
    ///
    /// The estimators are undefined for anything but 3-channel RGB input —
    /// no alpha, no grayscale.
    #[error("channel mismatch: expected {expected}, got {got}")]
    ChannelMismatch {
        /// Expected channel count (always 3 for RGB).
        expected: u8,
        /// Actual channel count.
        got: u8,
    },

    /// Buffer data length does not match the declared dimensions.
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// Declared width.
        width: u32,
        /// Declared height.
        height: u32,
        /// Reason why the dimensions are invalid.
        reason: String,
    },

    /// Algorithm identifier outside the closed set.
    ///
    /// Valid names are `grey_world`, `white_patch` and `grey_edge`.
    #[error("unsupported algorithm: {name:?}")]
    UnsupportedAlgorithm {
        /// The rejected identifier.
        name: String,
    },

    /// Color space identifier outside the closed set.
    ///
    /// Valid names are `sRGB` and `linear_rgb`.
    #[error("unsupported color space: {name:?}")]
    UnsupportedColorSpace {
        /// The rejected identifier.
        name: String,
    },
}

impl Error {
    /// Creates an [`Error::ChannelMismatch`] error.
    #[inline]
    pub fn channel_mismatch(expected: u8, got: u8) -> Self {
        Self::ChannelMismatch { expected, got }
    }

    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(width: u32, height: u32, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::UnsupportedAlgorithm`] error.
    #[inline]
    pub fn unsupported_algorithm(name: impl Into<String>) -> Self {
        Self::UnsupportedAlgorithm { name: name.into() }
    }

    /// Creates an [`Error::UnsupportedColorSpace`] error.
    #[inline]
    pub fn unsupported_color_space(name: impl Into<String>) -> Self {
        Self::UnsupportedColorSpace { name: name.into() }
    }

    /// Returns `true` if this is an identifier parsing error.
    #[inline]
    pub fn is_identifier_error(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedAlgorithm { .. } | Self::UnsupportedColorSpace { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_mismatch() {
        let err = Error::channel_mismatch(3, 4);
        let msg = err.to_string();
        assert!(msg.contains('3'));
        assert!(msg.contains('4'));
        assert!(!err.is_identifier_error());
    }

    #[test]
    fn test_invalid_dimensions() {
        let err = Error::invalid_dimensions(100, 50, "expected 15000 samples, got 12");
        let msg = err.to_string();
        assert!(msg.contains("100x50"));
        assert!(msg.contains("15000"));
    }

    #[test]
    fn test_unsupported_algorithm() {
        let err = Error::unsupported_algorithm("gray_world");
        assert!(err.to_string().contains("gray_world"));
        assert!(err.is_identifier_error());
    }

    #[test]
    fn test_unsupported_color_space() {
        let err = Error::unsupported_color_space("adobe_rgb");
        assert!(err.to_string().contains("adobe_rgb"));
        assert!(err.is_identifier_error());
    }
}
