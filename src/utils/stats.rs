//! Statistical utility functions.

use statrs::distribution::{ContinuousCDF, Normal};

/// Quantile function of the standard normal distribution.
///
/// # Arguments
/// * `p` - Probability value (0.0 to 1.0)
///
/// # Returns
/// The z-score corresponding to the given probability. Out-of-range inputs
/// saturate to the infinities.
///
/// # Example
/// ```
/// use baseline_forecast::utils::quantile_normal;
///
/// // 95% confidence level -> z ≈ 1.96
/// let z = quantile_normal(0.975);
/// assert!((z - 1.96).abs() < 0.01);
/// ```
pub fn quantile_normal(p: f64) -> f64 {
    if p <= 0.0 {
        return f64::NEG_INFINITY;
    }
    if p >= 1.0 {
        return f64::INFINITY;
    }
    let normal = Normal::new(0.0, 1.0).unwrap();
    normal.inverse_cdf(p)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn quantile_normal_known_values() {
        assert_abs_diff_eq!(quantile_normal(0.5), 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(quantile_normal(0.9), 1.2816, epsilon = 1e-3);
        assert_abs_diff_eq!(quantile_normal(0.975), 1.9600, epsilon = 1e-3);
        assert_abs_diff_eq!(quantile_normal(0.995), 2.5758, epsilon = 1e-3);
    }

    #[test]
    fn quantile_normal_is_antisymmetric() {
        for p in [0.6, 0.75, 0.9, 0.99] {
            assert_abs_diff_eq!(
                quantile_normal(p),
                -quantile_normal(1.0 - p),
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn quantile_normal_saturates_at_bounds() {
        assert_eq!(quantile_normal(0.0), f64::NEG_INFINITY);
        assert_eq!(quantile_normal(1.0), f64::INFINITY);
    }
}
