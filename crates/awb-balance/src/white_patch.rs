//! White Patch illuminant estimation.
//!
//! Assumes the brightest pixels are specular highlights or near-white
//! surfaces that should be neutral. The bright region is cut at a high
//! percentile of per-pixel intensity; the color of that region is the
//! illuminant estimate. Sensitive to clipped highlights, and to noise if
//! the percentile is pushed too aggressive.

use crate::{BalanceResult, WhitePatchParams};
use awb_core::ImageBuf;
use awb_stats::{guard_divisor, masked_max_or_fallback, quantile_with_seed};

/// Estimates per-channel gains from the brightest-pixel region.
///
/// Per-pixel intensity is the mean across the three channels. Pixels at or
/// above the `percentile` quantile of intensity form the patch mask; each
/// channel's reference value is its maximum under that mask (global
/// maximum if the mask is somehow empty — only possible on a degenerate,
/// all-equal intensity map). The largest reference becomes the target and
/// each channel is scaled onto it.
///
/// # Errors
///
/// Returns an error if the percentile is outside (0, 100).
///
/// # Example
///
/// ```rust
/// use awb_balance::{white_patch, WhitePatchParams};
/// use awb_core::ImageBuf;
///
/// // Highlights are slightly blue: R is pulled up to match
/// let mut img = ImageBuf::filled(8, 8, [0.1, 0.1, 0.1]);
/// img.set_pixel(4, 4, [0.8, 0.9, 1.0]);
/// let gains = white_patch::estimate_gains(&img, &WhitePatchParams::default()).unwrap();
/// assert!(gains[0] > gains[2]);
/// assert_eq!(gains[2], 1.0);
/// ```
pub fn estimate_gains(image: &ImageBuf, params: &WhitePatchParams) -> BalanceResult<[f32; 3]> {
    params.validate()?;

    let (r, g, b) = (image.plane(0), image.plane(1), image.plane(2));
    let intensity: Vec<f32> = r
        .iter()
        .zip(g)
        .zip(b)
        .map(|((&r, &g), &b)| (r + g + b) / 3.0)
        .collect();

    let threshold = quantile_with_seed(&intensity, params.percentile as f64 / 100.0, params.seed);
    let mask: Vec<bool> = intensity.iter().map(|&i| i >= threshold).collect();

    let mut values = [0.0f32; 3];
    for c in 0..3 {
        values[c] = guard_divisor(masked_max_or_fallback(image.plane(c), &mask));
    }

    let target = values[0].max(values[1]).max(values[2]);
    Ok([
        target / values[0],
        target / values[1],
        target / values[2],
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_white_highlight_is_identity() {
        // One pure-white pixel among dim grey: the percentile cut selects
        // it, every reference value is 1, all gains are 1
        let mut img = ImageBuf::filled(2, 2, [0.2, 0.2, 0.2]);
        img.set_pixel(1, 1, [1.0, 1.0, 1.0]);
        let gains = estimate_gains(&img, &WhitePatchParams::default()).unwrap();
        assert_eq!(gains, [1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_tinted_highlight_neutralized() {
        let mut img = ImageBuf::filled(4, 4, [0.1, 0.1, 0.1]);
        img.set_pixel(2, 2, [0.5, 0.8, 1.0]);
        let gains = estimate_gains(&img, &WhitePatchParams::default()).unwrap();
        assert_relative_eq!(gains[0], 2.0, epsilon = 1e-6);
        assert_relative_eq!(gains[1], 1.25, epsilon = 1e-6);
        assert_eq!(gains[2], 1.0);
    }

    #[test]
    fn test_degenerate_flat_image_is_identity() {
        // All-equal intensity: threshold equals every pixel, the mask is
        // full, and references equal the flat color itself
        let img = ImageBuf::filled(6, 6, [0.3, 0.3, 0.3]);
        let gains = estimate_gains(&img, &WhitePatchParams::default()).unwrap();
        assert_eq!(gains, [1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_black_channel_gain_is_one() {
        // B plane is all zero: its guarded reference is 1.0, which is also
        // the target, so the black channel keeps gain 1.0
        let img = ImageBuf::filled(4, 4, [0.5, 0.4, 0.0]);
        let gains = estimate_gains(&img, &WhitePatchParams::default()).unwrap();
        assert_eq!(gains[2], 1.0);
        assert!(gains.iter().all(|g| g.is_finite()));
    }

    #[test]
    fn test_percentile_validated() {
        let img = ImageBuf::filled(2, 2, [0.5, 0.5, 0.5]);
        let params = WhitePatchParams {
            percentile: 100.0,
            seed: None,
        };
        assert!(estimate_gains(&img, &params).is_err());
    }

    #[test]
    fn test_lower_percentile_widens_patch() {
        // With a 50th-percentile cut the dim background joins the patch,
        // but per-channel max still comes from the brightest pixel
        let mut img = ImageBuf::filled(4, 4, [0.2, 0.2, 0.2]);
        img.set_pixel(0, 0, [0.4, 0.8, 0.8]);
        let params = WhitePatchParams {
            percentile: 50.0,
            seed: None,
        };
        let gains = estimate_gains(&img, &params).unwrap();
        assert_relative_eq!(gains[0], 2.0, epsilon = 1e-6);
        assert_eq!(gains[1], 1.0);
    }
}
