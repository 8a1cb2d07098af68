//! # awb-tests
//!
//! Integration tests for the AWB-RS crates, plus the small image builders
//! they share. The actual test suites live in `tests/`.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

use awb_core::ImageBuf;

/// Builds a 2×2 image of the three primaries plus white.
///
/// Every channel mean is exactly 0.5, which makes the Grey World estimate
/// an exact identity — handy as a known-answer fixture.
pub fn primaries_and_white() -> ImageBuf {
    let mut img = ImageBuf::new(2, 2);
    img.set_pixel(0, 0, [1.0, 0.0, 0.0]);
    img.set_pixel(1, 0, [0.0, 1.0, 0.0]);
    img.set_pixel(0, 1, [0.0, 0.0, 1.0]);
    img.set_pixel(1, 1, [1.0, 1.0, 1.0]);
    img
}

/// Builds a flat image with a single highlight pixel at the center.
pub fn flat_with_highlight(size: u32, base: [f32; 3], highlight: [f32; 3]) -> ImageBuf {
    let mut img = ImageBuf::filled(size, size, base);
    img.set_pixel(size / 2, size / 2, highlight);
    img
}

/// Builds a left/right split image: `left` color on the left half,
/// `right` on the right half.
pub fn split_image(size: u32, left: [f32; 3], right: [f32; 3]) -> ImageBuf {
    let mut img = ImageBuf::filled(size, size, right);
    for y in 0..size {
        for x in 0..size / 2 {
            img.set_pixel(x, y, left);
        }
    }
    img
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primaries_fixture_means() {
        let img = primaries_and_white();
        assert_eq!(awb_stats::channel_means(&img), [0.5, 0.5, 0.5]);
    }

    #[test]
    fn test_split_fixture_layout() {
        let img = split_image(4, [0.1, 0.1, 0.1], [0.9, 0.9, 0.9]);
        assert_eq!(img.pixel(0, 0), [0.1, 0.1, 0.1]);
        assert_eq!(img.pixel(3, 3), [0.9, 0.9, 0.9]);
    }
}
