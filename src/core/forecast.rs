//! Forecast result structure for holding predictions.

/// A forecast result containing point predictions and optional fitted values.
///
/// `mean` always has length equal to the requested horizon. `fitted`, when
/// present, has the same length as the input series; positions with no prior
/// observation to retrodict from hold `f32::NAN`. NaN is the crate-wide
/// sentinel for "no value" in output arrays, never zero or omission, so
/// downstream NaN-skipping aggregation stays correct.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ForecastResult {
    /// Point predictions, one per forecast step.
    pub mean: Vec<f32>,
    /// In-sample one-step-ahead retrodictions (optional).
    pub fitted: Option<Vec<f32>>,
}

impl ForecastResult {
    /// Create a forecast from point predictions only.
    pub fn from_mean(mean: Vec<f32>) -> Self {
        Self { mean, fitted: None }
    }

    /// Create a forecast with both point predictions and fitted values.
    pub fn with_fitted(mean: Vec<f32>, fitted: Vec<f32>) -> Self {
        Self {
            mean,
            fitted: Some(fitted),
        }
    }

    /// Get the forecast horizon (number of steps).
    pub fn horizon(&self) -> usize {
        self.mean.len()
    }

    /// Check if the forecast is empty.
    pub fn is_empty(&self) -> bool {
        self.mean.is_empty()
    }

    /// Get the fitted values, if they were computed.
    pub fn fitted(&self) -> Option<&[f32]> {
        self.fitted.as_deref()
    }

    /// Residuals `y[t] - fitted[t]`, if fitted values were computed.
    ///
    /// Positions where the fitted value is NaN stay NaN. Returns `None` when
    /// `series` has a different length than the fitted array.
    pub fn residuals(&self, series: &[f32]) -> Option<Vec<f32>> {
        let fitted = self.fitted.as_deref()?;
        if fitted.len() != series.len() {
            return None;
        }
        Some(
            series
                .iter()
                .zip(fitted)
                .map(|(y, f)| y - f)
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_mean_has_no_fitted_values() {
        let fc = ForecastResult::from_mean(vec![1.0, 2.0, 3.0]);
        assert_eq!(fc.horizon(), 3);
        assert!(!fc.is_empty());
        assert!(fc.fitted().is_none());
    }

    #[test]
    fn with_fitted_exposes_both_arrays() {
        let fc = ForecastResult::with_fitted(vec![5.0; 2], vec![f32::NAN, 1.0, 2.0]);
        assert_eq!(fc.horizon(), 2);
        let fitted = fc.fitted().unwrap();
        assert!(fitted[0].is_nan());
        assert_eq!(&fitted[1..], &[1.0, 2.0]);
    }

    #[test]
    fn residuals_skip_undefined_positions() {
        let fc = ForecastResult::with_fitted(vec![3.0], vec![f32::NAN, 1.0, 2.0]);
        let res = fc.residuals(&[1.0, 2.0, 3.0]).unwrap();
        assert!(res[0].is_nan());
        assert_eq!(&res[1..], &[1.0, 1.0]);
    }

    #[test]
    fn residuals_reject_length_mismatch() {
        let fc = ForecastResult::with_fitted(vec![3.0], vec![f32::NAN, 1.0]);
        assert!(fc.residuals(&[1.0, 2.0, 3.0]).is_none());

        let no_fitted = ForecastResult::from_mean(vec![3.0]);
        assert!(no_fitted.residuals(&[1.0]).is_none());
    }
}
