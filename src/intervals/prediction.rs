//! Gaussian prediction intervals from residual-based sigma estimates.

use crate::core::ForecastResult;
use crate::error::{ForecastError, Result};
use crate::utils::quantile_normal;

/// Interval bounds keyed by `"lo-<level>"` / `"hi-<level>"` names.
///
/// Entries preserve insertion order: lower bounds for every requested level
/// first, then upper bounds, each group in the order the levels were supplied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PredictionIntervals {
    entries: Vec<(String, Vec<f32>)>,
}

impl PredictionIntervals {
    fn insert(&mut self, name: String, bounds: Vec<f32>) {
        self.entries.push((name, bounds));
    }

    /// Look up a bound series by name, e.g. `"lo-95"`.
    pub fn get(&self, name: &str) -> Option<&[f32]> {
        self.entries
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_slice())
    }

    /// Number of bound series (two per level).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no bounds are present.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(name, bounds)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f32])> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Bound names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

/// Root-mean-square of the residuals, skipping NaN entries.
///
/// `n` is the count of valid residuals and acts as the divisor; a zero count
/// returns 0 instead of dividing by zero.
pub fn sigma(residuals: &[f32], n: usize) -> f32 {
    if n == 0 {
        return 0.0;
    }
    let sum_sq: f64 = residuals
        .iter()
        .filter(|r| !r.is_nan())
        .map(|&r| (r as f64) * (r as f64))
        .sum();
    (sum_sq / n as f64).sqrt() as f32
}

/// Two-sided Gaussian prediction intervals around a point forecast.
///
/// For each confidence level `L` (a percentage in `(0, 100)`), computes
/// `z_L = Φ⁻¹(0.5 + L/200)` and bounds `mean[t] ∓ z_L * sigmah[t]`. Levels
/// outside `(0, 100)` are not rejected; they produce degenerate but
/// well-defined infinite or inverted bounds.
///
/// `sigmah` holds one scale estimate per forecast step; broadcast a scalar
/// scale with `vec![s; h]`.
///
/// # Errors
///
/// Returns [`ForecastError::DimensionMismatch`] when `forecast.mean` or
/// `sigmah` does not have length `h`.
pub fn prediction_intervals(
    forecast: &ForecastResult,
    levels: &[f32],
    h: usize,
    sigmah: &[f32],
) -> Result<PredictionIntervals> {
    if forecast.mean.len() != h {
        return Err(ForecastError::DimensionMismatch {
            expected: h,
            got: forecast.mean.len(),
        });
    }
    if sigmah.len() != h {
        return Err(ForecastError::DimensionMismatch {
            expected: h,
            got: sigmah.len(),
        });
    }

    let z: Vec<f32> = levels
        .iter()
        .map(|&lv| quantile_normal(0.5 + lv as f64 / 200.0) as f32)
        .collect();

    let mut intervals = PredictionIntervals::default();
    for (&lv, &z_lv) in levels.iter().zip(&z) {
        let lower: Vec<f32> = forecast
            .mean
            .iter()
            .zip(sigmah)
            .map(|(m, s)| m - z_lv * s)
            .collect();
        intervals.insert(format!("lo-{lv}"), lower);
    }
    for (&lv, &z_lv) in levels.iter().zip(&z) {
        let upper: Vec<f32> = forecast
            .mean
            .iter()
            .zip(sigmah)
            .map(|(m, s)| m + z_lv * s)
            .collect();
        intervals.insert(format!("hi-{lv}"), upper);
    }
    Ok(intervals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn sigma_of_constant_residuals() {
        assert_eq!(sigma(&[2.0, 2.0, 2.0, 2.0], 4), 2.0);
    }

    #[test]
    fn sigma_zero_count_fallback() {
        assert_eq!(sigma(&[], 0), 0.0);
        assert_eq!(sigma(&[f32::NAN, f32::NAN], 0), 0.0);
    }

    #[test]
    fn sigma_skips_nan_residuals() {
        let residuals = [f32::NAN, 3.0, -3.0, f32::NAN];
        assert_eq!(sigma(&residuals, 2), 3.0);
    }

    #[test]
    fn intervals_match_normal_quantile() {
        let fc = ForecastResult::from_mean(vec![10.0]);
        let intervals = prediction_intervals(&fc, &[80.0], 1, &[1.0]).unwrap();

        let lo = intervals.get("lo-80").unwrap();
        let hi = intervals.get("hi-80").unwrap();
        assert_abs_diff_eq!(lo[0], 8.7184, epsilon = 1e-3);
        assert_abs_diff_eq!(hi[0], 11.2816, epsilon = 1e-3);
    }

    #[test]
    fn intervals_preserve_level_order() {
        let fc = ForecastResult::from_mean(vec![0.0, 0.0]);
        let intervals = prediction_intervals(&fc, &[95.0, 80.0], 2, &[1.0, 2.0]).unwrap();

        let names: Vec<&str> = intervals.names().collect();
        assert_eq!(names, vec!["lo-95", "lo-80", "hi-95", "hi-80"]);
        assert_eq!(intervals.len(), 4);
    }

    #[test]
    fn intervals_scale_with_sigmah_per_step() {
        let fc = ForecastResult::from_mean(vec![5.0, 5.0, 5.0]);
        let intervals = prediction_intervals(&fc, &[95.0], 3, &[1.0, 2.0, 3.0]).unwrap();

        let lo = intervals.get("lo-95").unwrap();
        let hi = intervals.get("hi-95").unwrap();
        for t in 1..3 {
            let width_prev = hi[t - 1] - lo[t - 1];
            let width_curr = hi[t] - lo[t];
            assert!(width_curr > width_prev);
        }
    }

    #[test]
    fn intervals_reject_dimension_mismatch() {
        let fc = ForecastResult::from_mean(vec![1.0, 2.0]);
        assert!(matches!(
            prediction_intervals(&fc, &[80.0], 3, &[1.0, 1.0, 1.0]),
            Err(ForecastError::DimensionMismatch {
                expected: 3,
                got: 2
            })
        ));
        assert!(matches!(
            prediction_intervals(&fc, &[80.0], 2, &[1.0]),
            Err(ForecastError::DimensionMismatch {
                expected: 2,
                got: 1
            })
        ));
    }

    #[test]
    fn missing_level_returns_none() {
        let fc = ForecastResult::from_mean(vec![1.0]);
        let intervals = prediction_intervals(&fc, &[80.0], 1, &[1.0]).unwrap();
        assert!(intervals.get("lo-95").is_none());
        assert!(!intervals.is_empty());
    }
}
