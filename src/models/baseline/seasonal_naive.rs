//! Seasonal naive forecasting kernel.
//!
//! Forecasts by repeating the value from the same season in the previous
//! cycle.

use crate::core::ForecastResult;
use crate::error::{ForecastError, Result};
use crate::models::baseline::{naive, repeat_val_seas};

/// Forecast by cyclically repeating the last observed seasonal cycle.
///
/// The series is partitioned into `season_length` phase subsequences, offset
/// by `n % season_length` so that the most recent observation falls in the
/// last phase slot. The naive kernel runs on each phase with horizon 1; the
/// per-phase values are then repeated cyclically out to `h` steps.
///
/// A series shorter than one full season has no seasonal pattern to repeat:
/// the result is `h` NaNs and no fitted values.
///
/// # Errors
///
/// Returns [`ForecastError::InvalidParameter`] when `season_length` is zero.
///
/// # Example
/// ```
/// use baseline_forecast::models::baseline::seasonal_naive;
///
/// let y = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
/// let fc = seasonal_naive(&y, 6, false, 3).unwrap();
/// assert_eq!(fc.mean, vec![4.0, 5.0, 6.0, 4.0, 5.0, 6.0]);
/// ```
pub fn seasonal_naive(
    y: &[f32],
    h: usize,
    fitted: bool,
    season_length: usize,
) -> Result<ForecastResult> {
    if season_length == 0 {
        return Err(ForecastError::InvalidParameter(
            "season_length must be positive".to_string(),
        ));
    }
    if y.len() < season_length {
        // Not enough history to establish a seasonal pattern.
        return Ok(ForecastResult::from_mean(vec![f32::NAN; h]));
    }

    let n = y.len();
    // Offset so the last element of the final phase is y[n-1].
    let offset = n % season_length;

    let mut season_vals = vec![0.0_f32; season_length];
    let mut fitted_vals = vec![f32::NAN; n];

    for i in 0..season_length {
        let phase: Vec<f32> = y[(i + offset)..]
            .iter()
            .step_by(season_length)
            .copied()
            .collect();
        let phase_fc = naive(&phase, 1, fitted)?;
        season_vals[i] = phase_fc.mean[0];

        if let Some(phase_fitted) = phase_fc.fitted() {
            // Scatter the phase's fitted values back to their strided
            // positions in the full-length buffer.
            for (k, &val) in phase_fitted.iter().enumerate() {
                fitted_vals[i + offset + k * season_length] = val;
            }
        }
    }

    let mean = repeat_val_seas(&season_vals, h);
    if fitted {
        Ok(ForecastResult::with_fitted(mean, fitted_vals))
    } else {
        Ok(ForecastResult::from_mean(mean))
    }
}
