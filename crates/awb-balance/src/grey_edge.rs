//! Grey Edge illuminant estimation.
//!
//! Assumes high-gradient (edge) regions average to neutral grey — a
//! generalization of Grey World that is less thrown off by large uniform
//! colored regions, since flat areas contribute no edges.
//!
//! Each channel is evaluated under its OWN edge mask: a channel's edges
//! are where that channel's signal changes most, so the three edge-mean
//! samples are not pixel-aligned across channels. That is intentional;
//! sharing one mask would trade away per-channel sensitivity.

use crate::{BalanceResult, GreyEdgeParams};
use awb_core::ImageBuf;
use awb_ops::{minkowski_magnitude, sobel_gradients};
use awb_stats::{guard_divisor, masked_mean_or_fallback, quantile_with_seed};

/// Gradient-magnitude quantile that defines the edge region.
const EDGE_QUANTILE: f64 = 0.95;

/// Estimates per-channel gains from gradient-magnitude statistics.
///
/// Per channel: Sobel responses combine into a Minkowski gradient
/// magnitude of order `p`; pixels at or above the 95th percentile of that
/// channel's magnitude distribution form its edge mask; the channel's
/// reference is the mean of its own pixel values under that mask (global
/// mean if the mask is empty). References are zero-guarded, their mean is
/// the target, and each channel is scaled onto it.
///
/// `sigma` is a reserved pre-smoothing slot and is not applied; see
/// [`GreyEdgeParams::sigma`].
///
/// # Errors
///
/// Returns an error if the parameters fail validation.
///
/// # Example
///
/// ```rust
/// use awb_balance::{grey_edge, GreyEdgeParams};
/// use awb_core::ImageBuf;
///
/// let img = ImageBuf::filled(8, 8, [0.6, 0.4, 0.2]);
/// let gains = grey_edge::estimate_gains(&img, &GreyEdgeParams::default()).unwrap();
/// // Flat image: edge statistics degrade to global means
/// assert!(gains[0] < 1.0 && gains[2] > 1.0);
/// ```
pub fn estimate_gains(image: &ImageBuf, params: &GreyEdgeParams) -> BalanceResult<[f32; 3]> {
    params.validate()?;

    let width = image.width() as usize;
    let height = image.height() as usize;

    let mut references = [0.0f32; 3];
    for c in 0..3 {
        let plane = image.plane(c);
        let (gx, gy) = sobel_gradients(plane, width, height)?;
        let magnitude = minkowski_magnitude(&gx, &gy, params.p)?;

        let threshold = quantile_with_seed(&magnitude, EDGE_QUANTILE, params.seed);
        let mask: Vec<bool> = magnitude.iter().map(|&m| m >= threshold).collect();

        references[c] = guard_divisor(masked_mean_or_fallback(plane, &mask));
    }

    let target = (references[0] + references[1] + references[2]) / 3.0;
    Ok([
        target / references[0],
        target / references[1],
        target / references[2],
    ])
}
