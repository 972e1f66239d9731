use crate::error::*;
use crate::params::*;

///A policy for turning a singular value `sigma` into the coefficient
///`sigma+` used when rebuilding the generalized inverse `V diag(sigma+) U^T`.
pub trait Regularizer {
    ///Rejects parameters for which the policy is not well-defined.
    fn validate(&self) -> MathResult<()>;

    fn regularize(&self, sigma : f64) -> f64;

    ///Whether `sigma` counts toward the reported rank.
    fn is_significant(&self, sigma : f64) -> bool;

    ///When `true`, only the leading significant directions are summed
    ///during reconstruction. Singular values arrive sorted in descending
    ///order, so the significant ones form a prefix.
    fn truncates(&self) -> bool;
}

///Hard truncation: `1 / sigma` above the threshold, zero otherwise.
///This is the Moore-Penrose pseudo-inverse up to numerical rank.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HardThreshold {
    pub threshold : f64
}

impl HardThreshold {
    pub fn new(threshold : f64) -> HardThreshold {
        HardThreshold {
            threshold
        }
    }
}

impl Default for HardThreshold {
    fn default() -> HardThreshold {
        HardThreshold::new(DEFAULT_PINV_THRESHOLD)
    }
}

impl Regularizer for HardThreshold {
    fn validate(&self) -> MathResult<()> {
        check_positive("threshold", self.threshold)
    }

    fn regularize(&self, sigma : f64) -> f64 {
        if (self.is_significant(sigma)) {
            1.0 / sigma
        } else {
            0.0
        }
    }

    fn is_significant(&self, sigma : f64) -> bool {
        sigma.abs() > self.threshold
    }

    fn truncates(&self) -> bool {
        true
    }
}

///Tikhonov damping: `sigma / (sigma^2 + lambda^2)`, defined for every
///singular value including zero.
///
///The rank is estimated with the cutoff `0.1 * lambda`, which is looser than
///the damping factor. It is only reported, never used to drop directions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TikhonovDamping {
    pub damping : f64
}

impl TikhonovDamping {
    pub fn new(damping : f64) -> TikhonovDamping {
        TikhonovDamping {
            damping
        }
    }
}

impl Default for TikhonovDamping {
    fn default() -> TikhonovDamping {
        TikhonovDamping::new(DEFAULT_DAMPING)
    }
}

impl Regularizer for TikhonovDamping {
    fn validate(&self) -> MathResult<()> {
        check_positive("damping", self.damping)
    }

    fn regularize(&self, sigma : f64) -> f64 {
        sigma / (sigma * sigma + self.damping * self.damping)
    }

    fn is_significant(&self, sigma : f64) -> bool {
        sigma.abs() > DAMPED_RANK_FRACTION * self.damping
    }

    fn truncates(&self) -> bool {
        false
    }
}

fn check_positive(name : &str, value : f64) -> MathResult<()> {
    if (value.is_finite() && value > 0.0) {
        Ok(())
    } else {
        Err(MathError::dimension(format!("{} must be finite and positive, got {}", name, value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn hard_threshold_drops_small_values() {
        let policy = HardThreshold::default();
        assert_eq!(policy.regularize(4.0), 0.25);
        assert_eq!(policy.regularize(1e-7), 0.0);
        assert_eq!(policy.regularize(0.0), 0.0);
        assert!(!policy.is_significant(1e-6));
        assert!(policy.truncates());
    }

    #[test]
    fn damping_is_smooth_through_zero() {
        let policy = TikhonovDamping::new(0.5);
        assert_eq!(policy.regularize(0.0), 0.0);
        assert_abs_diff_eq!(policy.regularize(1.0), 1.0 / 1.25, epsilon = 1e-15);
        assert!(!policy.truncates());
    }

    #[test]
    fn damping_approaches_reciprocal() {
        let policy = TikhonovDamping::new(1e-8);
        assert_abs_diff_eq!(policy.regularize(2.0), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn damped_rank_uses_looser_cutoff() {
        let policy = TikhonovDamping::new(1.0);
        assert!(policy.is_significant(0.2));
        assert!(!policy.is_significant(0.05));
    }

    #[test]
    fn non_positive_parameters_are_rejected() {
        assert!(HardThreshold::new(0.0).validate().is_err());
        assert!(HardThreshold::new(-1.0).validate().is_err());
        assert!(HardThreshold::new(std::f64::NAN).validate().is_err());
        assert!(TikhonovDamping::new(0.0).validate().is_err());
        assert!(TikhonovDamping::new(std::f64::INFINITY).validate().is_err());
        assert!(TikhonovDamping::new(1e-3).validate().is_ok());
    }
}
