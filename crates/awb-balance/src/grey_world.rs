//! Grey World illuminant estimation.
//!
//! Assumes the average reflectance of the scene is neutral grey: the three
//! channel means should be equal, and any imbalance between them is the
//! illuminant's color cast. Works well on images with diverse content,
//! poorly on images dominated by a single color (a green forest is not a
//! grey scene).
//!
//! No parameters; deterministic given the input buffer.

use awb_core::ImageBuf;
use awb_stats::{channel_means, guard_divisor};

/// Estimates per-channel gains from the global channel means.
///
/// The target is the mean of the three channel means; each channel's gain
/// scales its mean onto that target. Means are zero-guarded before
/// division, so an essentially black channel cannot blow the gain up.
///
/// # Example
///
/// ```rust
/// use awb_balance::grey_world;
/// use awb_core::ImageBuf;
///
/// // A reddish flat image: R mean is high, gains pull it down
/// let img = ImageBuf::filled(8, 8, [0.8, 0.4, 0.4]);
/// let gains = grey_world::estimate_gains(&img);
/// assert!(gains[0] < 1.0);
/// assert!(gains[1] > 1.0);
/// ```
pub fn estimate_gains(image: &ImageBuf) -> [f32; 3] {
    let means = channel_means(image);
    let target = (means[0] + means[1] + means[2]) / 3.0;
    [
        target / guard_divisor(means[0]),
        target / guard_divisor(means[1]),
        target / guard_divisor(means[2]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_neutral_image_is_identity() {
        let img = ImageBuf::filled(4, 4, [0.5, 0.5, 0.5]);
        assert_eq!(estimate_gains(&img), [1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_uniform_color_maps_to_target() {
        // Every pixel (r, g, b): gains must send each channel to the
        // target t = (r + g + b) / 3
        let (r, g, b) = (0.6, 0.3, 0.3);
        let img = ImageBuf::filled(5, 3, [r, g, b]);
        let gains = estimate_gains(&img);
        let t = (r + g + b) / 3.0;
        assert_relative_eq!(gains[0] * r, t, epsilon = 1e-6);
        assert_relative_eq!(gains[1] * g, t, epsilon = 1e-6);
        assert_relative_eq!(gains[2] * b, t, epsilon = 1e-6);
    }

    #[test]
    fn test_black_channel_does_not_divide_by_zero() {
        let img = ImageBuf::filled(4, 4, [0.6, 0.6, 0.0]);
        let gains = estimate_gains(&img);
        assert!(gains.iter().all(|g| g.is_finite()));
        // Guarded divisor is 1.0, so the gain equals the target itself
        assert_relative_eq!(gains[2], 0.4, epsilon = 1e-6);
    }

    #[test]
    fn test_four_primaries_average_to_identity() {
        // R, G, B and white pixels: every channel mean is 0.5, so the
        // target is 0.5 and all gains collapse to 1
        let mut img = ImageBuf::new(2, 2);
        img.set_pixel(0, 0, [1.0, 0.0, 0.0]);
        img.set_pixel(1, 0, [0.0, 1.0, 0.0]);
        img.set_pixel(0, 1, [0.0, 0.0, 1.0]);
        img.set_pixel(1, 1, [1.0, 1.0, 1.0]);
        assert_eq!(estimate_gains(&img), [1.0, 1.0, 1.0]);
    }
}
