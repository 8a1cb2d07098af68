//! Gain application — the shared final step of every estimator.
//!
//! Whatever statistic an estimator used to derive its gain vector, the
//! application is identical: scale each channel plane by its scalar gain,
//! then clamp the whole buffer to [0, 1]. The clamp is where
//! over-correction from extreme gains is bounded; clamping that changes
//! values is normal behavior, not an error, and raises no warning.

use awb_core::ImageBuf;
use rayon::prelude::*;
use tracing::trace;

/// Scales each channel plane by its gain and clamps the buffer to [0, 1].
///
/// Planes are processed in parallel; channels are independent, so no
/// ordering between them is observable.
///
/// # Example
///
/// ```rust
/// use awb_core::ImageBuf;
/// use awb_ops::apply_gain;
///
/// let mut img = ImageBuf::filled(2, 2, [0.4, 0.5, 0.8]);
/// apply_gain(&mut img, [1.25, 1.0, 2.0]);
/// // B would be 1.6; the clamp bounds it at exactly 1.0
/// assert_eq!(img.pixel(0, 0), [0.5, 0.5, 1.0]);
/// ```
pub fn apply_gain(image: &mut ImageBuf, gains: [f32; 3]) {
    trace!(r = gains[0], g = gains[1], b = gains[2], "apply_gain");
    let plane_len = image.plane_len();
    if plane_len == 0 {
        return;
    }
    image
        .data_mut()
        .par_chunks_mut(plane_len)
        .zip(gains.par_iter())
        .for_each(|(plane, &gain)| {
            for s in plane {
                *s = (*s * gain).clamp(0.0, 1.0);
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_gain() {
        let mut img = ImageBuf::filled(3, 3, [0.1, 0.5, 0.9]);
        let before = img.data().to_vec();
        apply_gain(&mut img, [1.0, 1.0, 1.0]);
        assert_eq!(img.data(), &before[..]);
    }

    #[test]
    fn test_per_channel_scaling() {
        let mut img = ImageBuf::filled(2, 2, [0.2, 0.2, 0.2]);
        apply_gain(&mut img, [2.0, 3.0, 0.5]);
        let px = img.pixel(1, 1);
        assert!((px[0] - 0.4).abs() < 1e-6);
        assert!((px[1] - 0.6).abs() < 1e-6);
        assert!((px[2] - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_clamp_law() {
        // A component pushed above 1.0 must land exactly at 1.0, never above
        let mut img = ImageBuf::filled(2, 2, [0.8, 0.5, 0.3]);
        apply_gain(&mut img, [2.0, 2.0, 2.0]);
        let px = img.pixel(0, 0);
        assert_eq!(px[0], 1.0);
        assert_eq!(px[1], 1.0);
        assert!((px[2] - 0.6).abs() < 1e-6);
        assert!(img.data().iter().all(|&s| (0.0..=1.0).contains(&s)));
    }

    #[test]
    fn test_no_negative_output() {
        let mut img = ImageBuf::from_planes(1, 1, vec![-0.5, 0.5, 0.5]).unwrap();
        apply_gain(&mut img, [1.0, 1.0, 1.0]);
        assert_eq!(img.pixel(0, 0)[0], 0.0);
    }
}
