//! Closed identifier sets for algorithm and color space selection.
//!
//! Both [`Algorithm`] and [`ColorSpace`] are small closed enums resolved
//! once per request. Dispatching on an enum rather than an open string
//! lookup keeps the set compiler-enforced: adding a fourth algorithm forces
//! every `match` in the workspace to acknowledge it.
//!
//! # Wire Names
//!
//! The [`FromStr`]/[`Display`] round-trip uses the exact names a caller
//! submits:
//!
//! | Variant | Name |
//! |---------|------|
//! | [`Algorithm::GreyWorld`] | `grey_world` |
//! | [`Algorithm::WhitePatch`] | `white_patch` |
//! | [`Algorithm::GreyEdge`] | `grey_edge` |
//! | [`ColorSpace::Srgb`] | `sRGB` |
//! | [`ColorSpace::LinearRgb`] | `linear_rgb` |
//!
//! Anything else is a hard [`Error`] — an unknown algorithm must fail
//! loudly rather than silently fall back to Grey World.
//!
//! # Feature Flags
//!
//! With the `serde` feature enabled both enums derive
//! `Serialize`/`Deserialize` using the wire names above.
//!
//! # Used By
//!
//! - `awb-balance` - Estimator dispatch and pipeline requests

use crate::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Illuminant estimation algorithm.
///
/// Closed set; see the module docs for the wire names.
///
/// # Example
///
/// ```rust
/// use awb_core::Algorithm;
///
/// let algo: Algorithm = "white_patch".parse().unwrap();
/// assert_eq!(algo, Algorithm::WhitePatch);
/// assert_eq!(algo.to_string(), "white_patch");
///
/// assert!("gray_world".parse::<Algorithm>().is_err());
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    /// Gains from global per-channel means (assumes the scene average is grey).
    #[cfg_attr(feature = "serde", serde(rename = "grey_world"))]
    GreyWorld,
    /// Gains from the brightest-pixel region (assumes highlights are neutral).
    #[cfg_attr(feature = "serde", serde(rename = "white_patch"))]
    WhitePatch,
    /// Gains from high-gradient regions (assumes edges average to grey).
    #[cfg_attr(feature = "serde", serde(rename = "grey_edge"))]
    GreyEdge,
}

impl Algorithm {
    /// All algorithms, for exhaustive iteration in tests and tooling.
    pub const ALL: [Algorithm; 3] = [Self::GreyWorld, Self::WhitePatch, Self::GreyEdge];

    /// Returns the canonical wire name.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GreyWorld => "grey_world",
            Self::WhitePatch => "white_patch",
            Self::GreyEdge => "grey_edge",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "grey_world" => Ok(Self::GreyWorld),
            "white_patch" => Ok(Self::WhitePatch),
            "grey_edge" => Ok(Self::GreyEdge),
            other => Err(Error::unsupported_algorithm(other)),
        }
    }
}

/// Color encoding of a pixel buffer.
///
/// A buffer always represents exactly one encoding; the encoding is carried
/// alongside the buffer by the caller, never inferred from the data.
///
/// # Example
///
/// ```rust
/// use awb_core::ColorSpace;
///
/// let space: ColorSpace = "sRGB".parse().unwrap();
/// assert_eq!(space, ColorSpace::Srgb);
/// assert!(!space.is_linear());
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ColorSpace {
    /// Gamma-encoded display sRGB (IEC 61966-2-1).
    #[cfg_attr(feature = "serde", serde(rename = "sRGB"))]
    Srgb,
    /// Linear-light RGB with sRGB primaries.
    #[cfg_attr(feature = "serde", serde(rename = "linear_rgb"))]
    LinearRgb,
}

impl ColorSpace {
    /// All color spaces, for exhaustive iteration in tests and tooling.
    pub const ALL: [ColorSpace; 2] = [Self::Srgb, Self::LinearRgb];

    /// Returns the canonical wire name.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Srgb => "sRGB",
            Self::LinearRgb => "linear_rgb",
        }
    }

    /// Whether this encoding is proportional to physical light intensity.
    #[inline]
    pub fn is_linear(&self) -> bool {
        matches!(self, Self::LinearRgb)
    }
}

impl fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorSpace {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "sRGB" => Ok(Self::Srgb),
            "linear_rgb" => Ok(Self::LinearRgb),
            other => Err(Error::unsupported_color_space(other)),
        }
    }
}
