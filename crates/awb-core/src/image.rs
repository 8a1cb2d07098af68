//! Planar image buffer for white balance processing.
//!
//! This module provides [`ImageBuf`], the single pixel container the whole
//! workspace operates on.
//!
//! # Memory Layout
//!
//! Samples are stored **planar**, one full channel plane after another,
//! each plane in row-major order:
//!
//! ```text
//! Memory: [R R R R ...]  ← R plane (H*W samples)
//!         [G G G G ...]  ← G plane
//!         [B B B B ...]  ← B plane
//! ```
//!
//! The planar layout makes per-channel statistics (means, quantiles,
//! gradient maps) a contiguous-slice operation instead of a strided walk.
//! Channel order is fixed (R, G, B) and the channel count is fixed at 3 by
//! the type — the estimators are undefined for alpha or grayscale data, so
//! no other count is representable.
//!
//! # Value Range
//!
//! Samples are nominally in [0, 1] but are not hard-clamped on input;
//! clamping happens once, when gains are applied.
//!
//! # Memory Management
//!
//! The sample buffer is stored in an [`Arc<Vec<f32>>`], enabling:
//! - Zero-copy cloning (shares underlying data)
//! - Thread-safe sharing for parallel processing
//! - Copy-on-write mutation via [`data_mut`](ImageBuf::data_mut)
//!
//! # Usage
//!
//! ```rust
//! use awb_core::ImageBuf;
//!
//! let mut img = ImageBuf::filled(4, 4, [0.8, 0.5, 0.2]);
//! assert_eq!(img.pixel(0, 0), [0.8, 0.5, 0.2]);
//!
//! // Per-channel plane access
//! assert!(img.plane(2).iter().all(|&b| b == 0.2));
//!
//! // Elementwise mutation
//! img.map_samples(|s| s * 0.5);
//! assert_eq!(img.pixel(3, 3), [0.4, 0.25, 0.1]);
//! ```
//!
//! # Dependencies
//!
//! - [`crate::error::Error`] - Construction errors
//! - [`rayon`] - Parallel elementwise mapping
//!
//! # Used By
//!
//! - `awb-transfer` - Buffer-level transfer functions
//! - `awb-stats` - Per-channel statistics
//! - `awb-ops` - Gradients and gain application
//! - `awb-balance` - Estimators and pipeline

use crate::{Error, Result};
use rayon::prelude::*;
use std::sync::Arc;

/// Number of channels in every buffer (R, G, B).
pub const CHANNELS: usize = 3;

/// Owned planar RGB image buffer.
///
/// See the [module docs](self) for layout and range conventions.
///
/// # Example
///
/// ```rust
/// use awb_core::ImageBuf;
///
/// let img = ImageBuf::new(1920, 1080);
/// assert_eq!(img.dimensions(), (1920, 1080));
/// assert_eq!(img.plane_len(), 1920 * 1080);
/// ```
#[derive(Clone)]
pub struct ImageBuf {
    /// Sample data, `CHANNELS` planes of `width * height` (Arc for cheap cloning).
    data: Arc<Vec<f32>>,
    /// Image width in pixels.
    width: u32,
    /// Image height in pixels.
    height: u32,
}

impl ImageBuf {
    /// Creates a new image filled with zeros.
    ///
    /// # Example
    ///
    /// ```rust
    /// use awb_core::ImageBuf;
    ///
    /// let img = ImageBuf::new(640, 480);
    /// assert_eq!(img.pixel(0, 0), [0.0, 0.0, 0.0]);
    /// ```
    pub fn new(width: u32, height: u32) -> Self {
        let len = width as usize * height as usize * CHANNELS;
        Self {
            data: Arc::new(vec![0.0; len]),
            width,
            height,
        }
    }

    /// Creates an image from planar sample data.
    ///
    /// `data` must hold exactly `3 * width * height` samples laid out as
    /// `[R plane][G plane][B plane]`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if the data length doesn't match.
    ///
    /// # Example
    ///
    /// ```rust
    /// use awb_core::ImageBuf;
    ///
    /// let img = ImageBuf::from_planes(2, 1, vec![1.0, 0.0, 0.5, 0.5, 0.0, 1.0]).unwrap();
    /// assert_eq!(img.pixel(0, 0), [1.0, 0.5, 0.0]);
    /// assert_eq!(img.pixel(1, 0), [0.0, 0.5, 1.0]);
    /// ```
    pub fn from_planes(width: u32, height: u32, data: Vec<f32>) -> Result<Self> {
        let expected = width as usize * height as usize * CHANNELS;
        if data.len() != expected {
            return Err(Error::invalid_dimensions(
                width,
                height,
                format!("expected {} samples, got {}", expected, data.len()),
            ));
        }
        Ok(Self {
            data: Arc::new(data),
            width,
            height,
        })
    }

    /// Creates an image from interleaved (H, W, C) sample data.
    ///
    /// This is the layout most decoders hand out. `channels` must be 3;
    /// anything else — RGBA, grayscale — is rejected rather than coerced.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ChannelMismatch`] for a channel count other than 3,
    /// or [`Error::InvalidDimensions`] if the data length doesn't match.
    ///
    /// # Example
    ///
    /// ```rust
    /// use awb_core::ImageBuf;
    ///
    /// // Two pixels: red, blue
    /// let img = ImageBuf::from_interleaved(2, 1, 3, &[1.0, 0.0, 0.0, 0.0, 0.0, 1.0]).unwrap();
    /// assert_eq!(img.pixel(0, 0), [1.0, 0.0, 0.0]);
    /// assert_eq!(img.pixel(1, 0), [0.0, 0.0, 1.0]);
    /// ```
    pub fn from_interleaved(width: u32, height: u32, channels: u8, data: &[f32]) -> Result<Self> {
        if channels as usize != CHANNELS {
            return Err(Error::channel_mismatch(CHANNELS as u8, channels));
        }
        let plane_len = width as usize * height as usize;
        let expected = plane_len * CHANNELS;
        if data.len() != expected {
            return Err(Error::invalid_dimensions(
                width,
                height,
                format!("expected {} samples, got {}", expected, data.len()),
            ));
        }
        let mut planar = vec![0.0f32; expected];
        for (i, px) in data.chunks_exact(CHANNELS).enumerate() {
            for c in 0..CHANNELS {
                planar[c * plane_len + i] = px[c];
            }
        }
        Ok(Self {
            data: Arc::new(planar),
            width,
            height,
        })
    }

    /// Creates an image filled with a single color.
    ///
    /// # Example
    ///
    /// ```rust
    /// use awb_core::ImageBuf;
    ///
    /// let grey = ImageBuf::filled(10, 10, [0.5, 0.5, 0.5]);
    /// assert_eq!(grey.pixel(9, 9), [0.5, 0.5, 0.5]);
    /// ```
    pub fn filled(width: u32, height: u32, rgb: [f32; 3]) -> Self {
        let plane_len = width as usize * height as usize;
        let mut data = Vec::with_capacity(plane_len * CHANNELS);
        for &v in &rgb {
            data.extend(std::iter::repeat(v).take(plane_len));
        }
        Self {
            data: Arc::new(data),
            width,
            height,
        }
    }

    /// Returns the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the image dimensions as (width, height).
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns the number of pixels in one channel plane.
    #[inline]
    pub fn plane_len(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Returns `true` if the image has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns a reference to the raw planar sample data.
    #[inline]
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Returns a mutable reference to the sample data.
    ///
    /// If the data is shared (Arc refcount > 1), this clones it first to
    /// ensure exclusive access (copy-on-write).
    #[inline]
    pub fn data_mut(&mut self) -> &mut [f32] {
        Arc::make_mut(&mut self.data).as_mut_slice()
    }

    /// Returns one channel plane as a contiguous slice.
    ///
    /// # Panics
    ///
    /// Panics if `channel >= 3`.
    #[inline]
    pub fn plane(&self, channel: usize) -> &[f32] {
        assert!(channel < CHANNELS, "channel out of range");
        let len = self.plane_len();
        &self.data[channel * len..(channel + 1) * len]
    }

    /// Returns one channel plane as a mutable slice (copy-on-write).
    ///
    /// # Panics
    ///
    /// Panics if `channel >= 3`.
    #[inline]
    pub fn plane_mut(&mut self, channel: usize) -> &mut [f32] {
        assert!(channel < CHANNELS, "channel out of range");
        let len = self.plane_len();
        &mut self.data_mut()[channel * len..(channel + 1) * len]
    }

    /// Returns the pixel at (x, y).
    ///
    /// # Panics
    ///
    /// Panics in debug builds if (x, y) is out of bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [f32; 3] {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        let len = self.plane_len();
        let i = y as usize * self.width as usize + x as usize;
        [self.data[i], self.data[len + i], self.data[2 * len + i]]
    }

    /// Sets the pixel at (x, y).
    ///
    /// # Panics
    ///
    /// Panics in debug builds if (x, y) is out of bounds.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, rgb: [f32; 3]) {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        let len = self.plane_len();
        let i = y as usize * self.width as usize + x as usize;
        let data = Arc::make_mut(&mut self.data);
        data[i] = rgb[0];
        data[len + i] = rgb[1];
        data[2 * len + i] = rgb[2];
    }

    /// Applies a function to every sample in place, serially.
    ///
    /// # Example
    ///
    /// ```rust
    /// use awb_core::ImageBuf;
    ///
    /// let mut img = ImageBuf::filled(4, 4, [0.2, 0.4, 0.6]);
    /// img.map_samples(|s| s + 0.1);
    /// assert_eq!(img.pixel(0, 0), [0.3, 0.5, 0.7]);
    /// ```
    pub fn map_samples<F>(&mut self, f: F)
    where
        F: Fn(f32) -> f32,
    {
        for s in self.data_mut() {
            *s = f(*s);
        }
    }

    /// Applies a function to every sample in place, one rayon task per
    /// channel plane.
    ///
    /// Channel-independent elementwise work (transfer functions, gains) is
    /// trivially data-parallel across the 3 planes; no ordering between
    /// channels is observable.
    pub fn par_map_samples<F>(&mut self, f: F)
    where
        F: Fn(f32) -> f32 + Sync,
    {
        let plane_len = self.plane_len();
        if plane_len == 0 {
            return;
        }
        self.data_mut()
            .par_chunks_mut(plane_len)
            .for_each(|plane| {
                for s in plane {
                    *s = f(*s);
                }
            });
    }

    /// Returns the index and value of the first non-finite sample, if any.
    ///
    /// The index is into the planar [`data`](Self::data) layout. Transfer
    /// functions and estimators propagate NaN/∞ instead of panicking, so
    /// the pipeline scans input up front and rejects it.
    ///
    /// # Example
    ///
    /// ```rust
    /// use awb_core::ImageBuf;
    ///
    /// let mut img = ImageBuf::filled(2, 2, [0.5, 0.5, 0.5]);
    /// assert!(img.find_non_finite().is_none());
    ///
    /// img.set_pixel(1, 1, [f32::NAN, 0.5, 0.5]);
    /// assert_eq!(img.find_non_finite().map(|(i, _)| i), Some(3));
    /// ```
    pub fn find_non_finite(&self) -> Option<(usize, f32)> {
        self.data
            .iter()
            .enumerate()
            .find(|(_, s)| !s.is_finite())
            .map(|(i, &s)| (i, s))
    }
}

impl std::fmt::Debug for ImageBuf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageBuf")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("channels", &CHANNELS)
            .finish()
    }
}
