//! Estimator parameters.
//!
//! Each parameter struct carries the tunables of one estimator together
//! with its validation. Grey World has no parameters; the other two carry
//! their thresholds plus an optional quantile-subsample seed (see
//! `awb_stats::quantile_with_seed` — on images above the sampling cap the
//! threshold is estimated from a random subset, and pinning the seed makes
//! it reproducible).

use crate::{BalanceError, BalanceResult};

/// Parameters for the brightest-region estimator.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WhitePatchParams {
    /// Intensity percentile that defines the bright region, in the open
    /// interval (0, 100).
    pub percentile: f32,
    /// Seed for the quantile subsample on large images. `None` draws from
    /// OS entropy.
    pub seed: Option<u64>,
}

impl Default for WhitePatchParams {
    fn default() -> Self {
        Self {
            percentile: 99.5,
            seed: None,
        }
    }
}

impl WhitePatchParams {
    /// Checks that the percentile lies strictly inside (0, 100).
    pub fn validate(&self) -> BalanceResult<()> {
        if !self.percentile.is_finite() || self.percentile <= 0.0 || self.percentile >= 100.0 {
            return Err(BalanceError::InvalidParameter(format!(
                "percentile must lie in (0, 100), got {}",
                self.percentile
            )));
        }
        Ok(())
    }
}

/// Parameters for the edge-region estimator.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GreyEdgeParams {
    /// Reserved pre-smoothing strength (Gaussian standard deviation).
    ///
    /// Accepted and validated but not currently applied: gradients are
    /// computed directly on the unsmoothed planes, and the estimator's
    /// correctness does not depend on smoothing. The field stays so a
    /// future blur can slot in without an interface change.
    pub sigma: f32,
    /// Minkowski norm order for combining directional gradients.
    pub p: f32,
    /// Seed for the quantile subsample on large images. `None` draws from
    /// OS entropy.
    pub seed: Option<u64>,
}

impl Default for GreyEdgeParams {
    fn default() -> Self {
        Self {
            sigma: 1.0,
            p: 6.0,
            seed: None,
        }
    }
}

impl GreyEdgeParams {
    /// Checks that `sigma` is finite and non-negative and `p` is finite
    /// and positive.
    pub fn validate(&self) -> BalanceResult<()> {
        if !self.sigma.is_finite() || self.sigma < 0.0 {
            return Err(BalanceError::InvalidParameter(format!(
                "sigma must be finite and non-negative, got {}",
                self.sigma
            )));
        }
        if !self.p.is_finite() || self.p <= 0.0 {
            return Err(BalanceError::InvalidParameter(format!(
                "norm order must be finite and positive, got {}",
                self.p
            )));
        }
        Ok(())
    }
}

/// Parameters for all estimators, used by the dispatching entry points.
///
/// Only the parameters of the selected algorithm are read.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct BalanceParams {
    /// Brightest-region estimator parameters.
    pub white_patch: WhitePatchParams,
    /// Edge-region estimator parameters.
    pub grey_edge: GreyEdgeParams,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let p = BalanceParams::default();
        assert_eq!(p.white_patch.percentile, 99.5);
        assert_eq!(p.grey_edge.sigma, 1.0);
        assert_eq!(p.grey_edge.p, 6.0);
        assert_eq!(p.white_patch.seed, None);
    }

    #[test]
    fn test_percentile_bounds() {
        for bad in [0.0, 100.0, -5.0, f32::NAN] {
            let p = WhitePatchParams {
                percentile: bad,
                seed: None,
            };
            assert!(p.validate().is_err(), "{bad}");
        }
        let ok = WhitePatchParams {
            percentile: 50.0,
            seed: None,
        };
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn test_grey_edge_bounds() {
        assert!(
            GreyEdgeParams {
                sigma: -1.0,
                ..Default::default()
            }
            .validate()
            .is_err()
        );
        assert!(
            GreyEdgeParams {
                p: 0.0,
                ..Default::default()
            }
            .validate()
            .is_err()
        );
        assert!(
            GreyEdgeParams {
                sigma: 0.0,
                ..Default::default()
            }
            .validate()
            .is_ok()
        );
    }
}
