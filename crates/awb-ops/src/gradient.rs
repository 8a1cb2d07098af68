//! Single-plane gradient operators.
//!
//! The edge-based estimator scores each pixel by its gradient magnitude.
//! Gradients come from the classic 3×3 Sobel pair:
//!
//! ```text
//! Gx = [ -1  0  1 ]      Gy = [ -1 -2 -1 ]
//!      [ -2  0  2 ]           [  0  0  0 ]
//!      [ -1  0  1 ]           [  1  2  1 ]
//! ```
//!
//! Convolution is same-size with edge-clamped sampling at the borders, and
//! the two directional responses combine into a magnitude via the
//! Minkowski norm `(|gx|^p + |gy|^p)^(1/p)` — `p = 2` is the familiar
//! Euclidean magnitude, higher orders weight the dominant direction more.

use crate::{OpsError, OpsResult};
#[allow(unused_imports)]
use tracing::trace;

/// Horizontal Sobel kernel, row-major.
const SOBEL_X: [f32; 9] = [
    -1.0, 0.0, 1.0, //
    -2.0, 0.0, 2.0, //
    -1.0, 0.0, 1.0,
];

/// Vertical Sobel kernel (transpose of [`SOBEL_X`]), row-major.
const SOBEL_Y: [f32; 9] = [
    -1.0, -2.0, -1.0, //
    0.0, 0.0, 0.0, //
    1.0, 2.0, 1.0,
];

/// Computes horizontal and vertical Sobel responses for one channel plane.
///
/// Output maps are the same size as the input; border pixels sample with
/// edge clamping.
///
/// # Errors
///
/// Returns [`OpsError::InvalidDimensions`] if `plane.len() != width *
/// height` or either dimension is zero.
///
/// # Example
///
/// ```rust
/// use awb_ops::sobel_gradients;
///
/// // Vertical step edge: left half dark, right half bright
/// let plane = [
///     0.0, 0.0, 1.0, 1.0, //
///     0.0, 0.0, 1.0, 1.0, //
///     0.0, 0.0, 1.0, 1.0, //
///     0.0, 0.0, 1.0, 1.0f32,
/// ];
/// let (gx, gy) = sobel_gradients(&plane, 4, 4).unwrap();
/// assert!(gx.iter().any(|&g| g != 0.0));
/// assert!(gy.iter().all(|&g| g == 0.0));
/// ```
pub fn sobel_gradients(plane: &[f32], width: usize, height: usize) -> OpsResult<(Vec<f32>, Vec<f32>)> {
    if width == 0 || height == 0 {
        return Err(OpsError::InvalidDimensions(
            "width and height must be > 0".into(),
        ));
    }
    let expected = width
        .checked_mul(height)
        .ok_or_else(|| OpsError::InvalidDimensions("plane dimensions overflow".into()))?;
    if plane.len() != expected {
        return Err(OpsError::InvalidDimensions(format!(
            "expected {} samples, got {}",
            expected,
            plane.len()
        )));
    }
    trace!(width, height, "sobel_gradients");

    let mut gx = vec![0.0f32; expected];
    let mut gy = vec![0.0f32; expected];

    for y in 0..height {
        for x in 0..width {
            let mut sx = 0.0f32;
            let mut sy = 0.0f32;

            for ky in 0..3usize {
                for kx in 0..3usize {
                    // Source coordinates with edge clamping
                    let px = (x as isize + kx as isize - 1)
                        .max(0)
                        .min(width as isize - 1) as usize;
                    let py = (y as isize + ky as isize - 1)
                        .max(0)
                        .min(height as isize - 1) as usize;

                    let s = plane[py * width + px];
                    sx += s * SOBEL_X[ky * 3 + kx];
                    sy += s * SOBEL_Y[ky * 3 + kx];
                }
            }

            gx[y * width + x] = sx;
            gy[y * width + x] = sy;
        }
    }

    Ok((gx, gy))
}

/// Combines directional responses into a Minkowski gradient magnitude.
///
/// Elementwise `(|gx|^p + |gy|^p)^(1/p)`.
///
/// # Errors
///
/// Returns [`OpsError::InvalidParameter`] if `p` is not finite and
/// positive, or [`OpsError::InvalidDimensions`] if the maps differ in
/// length.
///
/// # Example
///
/// ```rust
/// use awb_ops::minkowski_magnitude;
///
/// let mag = minkowski_magnitude(&[3.0], &[4.0], 2.0).unwrap();
/// assert!((mag[0] - 5.0).abs() < 1e-5);
/// ```
pub fn minkowski_magnitude(gx: &[f32], gy: &[f32], p: f32) -> OpsResult<Vec<f32>> {
    if !p.is_finite() || p <= 0.0 {
        return Err(OpsError::InvalidParameter(format!(
            "norm order must be finite and positive, got {p}"
        )));
    }
    if gx.len() != gy.len() {
        return Err(OpsError::InvalidDimensions(format!(
            "gradient maps differ in length: {} vs {}",
            gx.len(),
            gy.len()
        )));
    }
    let inv_p = 1.0 / p;
    Ok(gx
        .iter()
        .zip(gy)
        .map(|(&a, &b)| (a.abs().powf(p) + b.abs().powf(p)).powf(inv_p))
        .collect())
}
