//! End-to-end correction pipeline.
//!
//! This is the function-call boundary the surrounding service consumes: a
//! decoded buffer plus identifiers in, a corrected buffer plus reporting
//! statistics out. The pipeline owns the ordering:
//!
//! 1. Reject non-finite input.
//! 2. Record the pre-correction channel means.
//! 3. Decode sRGB to linear light when the request asks to process in
//!    linear (the estimators are defined on linear-light values).
//! 4. Estimate and apply gains for the selected algorithm.
//! 5. Re-encode if step 3 decoded, so the output matches the input
//!    encoding.
//! 6. Record the post-correction channel means.
//!
//! Both average triples are computed in the *input* encoding — they are
//! reporting values, compared against each other, not physical
//! quantities.

use crate::{BalanceError, BalanceParams, BalanceResult, estimate_gains};
use awb_core::{Algorithm, ColorSpace, ImageBuf};
use awb_ops::apply_gain;
use awb_stats::channel_means;
use tracing::debug;

/// A correction request: which algorithm, and how the buffer is encoded.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CorrectionRequest {
    /// Estimation algorithm to run.
    pub algorithm: Algorithm,
    /// Encoding of the submitted buffer.
    pub input_space: ColorSpace,
    /// Encoding the estimator should operate in.
    pub processing_space: ColorSpace,
    /// Estimator parameters (only the selected algorithm's are read).
    pub params: BalanceParams,
}

impl Default for CorrectionRequest {
    /// Grey World over an sRGB buffer, processed in linear light.
    fn default() -> Self {
        Self {
            algorithm: Algorithm::GreyWorld,
            input_space: ColorSpace::Srgb,
            processing_space: ColorSpace::LinearRgb,
            params: BalanceParams::default(),
        }
    }
}

/// The result of one correction.
#[derive(Clone, Debug)]
pub struct Correction {
    /// Corrected buffer, in the same encoding as the input.
    pub image: ImageBuf,
    /// Algorithm that produced it.
    pub algorithm: Algorithm,
    /// Encoding the estimator operated in.
    pub processing_space: ColorSpace,
    /// Per-channel means of the input buffer.
    pub avg_rgb_before: [f32; 3],
    /// Per-channel means of the corrected buffer.
    pub avg_rgb_after: [f32; 3],
    /// The gain vector that was applied (in processing space).
    pub gains: [f32; 3],
}

/// Runs one white balance correction.
///
/// The buffer is decoded to linear light only for the sRGB-input /
/// linear-processing combination; every other combination processes the
/// buffer exactly as submitted. The corrected buffer always comes back in
/// the input encoding.
///
/// # Errors
///
/// - [`BalanceError::NonFiniteSample`] if the input contains NaN/∞.
/// - [`BalanceError::ConversionFailed`] if decoding produced non-finite
///   output (only plausible on malformed input).
/// - [`BalanceError::InvalidParameter`] for out-of-range parameters.
/// - A wrapped core error for a zero-area buffer.
///
/// # Example
///
/// ```rust
/// use awb_balance::{correct, CorrectionRequest};
/// use awb_core::ImageBuf;
///
/// let img = ImageBuf::filled(8, 8, [0.7, 0.5, 0.3]);
/// let result = correct(&img, &CorrectionRequest::default()).unwrap();
/// assert_eq!(result.image.dimensions(), (8, 8));
/// assert_ne!(result.avg_rgb_before, result.avg_rgb_after);
/// ```
pub fn correct(image: &ImageBuf, request: &CorrectionRequest) -> BalanceResult<Correction> {
    if image.is_empty() {
        return Err(awb_core::Error::invalid_dimensions(
            image.width(),
            image.height(),
            "image has zero area",
        )
        .into());
    }
    if let Some((index, value)) = image.find_non_finite() {
        return Err(BalanceError::NonFiniteSample { index, value });
    }

    let avg_rgb_before = channel_means(image);

    let decode = request.input_space == ColorSpace::Srgb
        && request.processing_space == ColorSpace::LinearRgb;

    let mut working = if decode {
        debug!(algorithm = %request.algorithm, "decoding sRGB to linear for processing");
        let linear = awb_transfer::to_linear(image);
        if let Some((index, value)) = linear.find_non_finite() {
            return Err(BalanceError::ConversionFailed(format!(
                "non-finite sample {value} at index {index} after decode"
            )));
        }
        linear
    } else {
        image.clone()
    };

    let gains = estimate_gains(&working, request.algorithm, &request.params)?;
    apply_gain(&mut working, gains);

    let corrected = if decode {
        debug!(algorithm = %request.algorithm, "re-encoding linear to sRGB");
        awb_transfer::to_encoded(&working)
    } else {
        working
    };

    let avg_rgb_after = channel_means(&corrected);

    Ok(Correction {
        image: corrected,
        algorithm: request.algorithm,
        processing_space: request.processing_space,
        avg_rgb_before,
        avg_rgb_after,
        gains,
    })
}
