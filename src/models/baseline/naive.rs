//! Naive forecasting kernel.
//!
//! The naive method simply forecasts the last observed value for all future
//! periods.

use crate::core::ForecastResult;
use crate::error::{ForecastError, Result};
use crate::models::baseline::repeat_val;

/// Forecast by repeating the last observed value.
///
/// `mean` is `y[n-1]` repeated `h` times. When `fitted` is requested, the
/// fitted value at position `i` is `y[i-1]` (the prior observation); position
/// 0 has no prior observation and holds NaN.
///
/// # Errors
///
/// Returns [`ForecastError::EmptyData`] for an empty series.
///
/// # Example
/// ```
/// use baseline_forecast::models::baseline::naive;
///
/// let fc = naive(&[1.0, 2.0, 3.0], 2, false).unwrap();
/// assert_eq!(fc.mean, vec![3.0, 3.0]);
/// ```
pub fn naive(y: &[f32], h: usize, fitted: bool) -> Result<ForecastResult> {
    let last = *y.last().ok_or(ForecastError::EmptyData)?;
    let mean = repeat_val(last, h);

    if !fitted {
        return Ok(ForecastResult::from_mean(mean));
    }

    // Fitted values are shifted history (y_hat[t] = y[t-1])
    let mut fitted_vals = Vec::with_capacity(y.len());
    fitted_vals.push(f32::NAN);
    fitted_vals.extend_from_slice(&y[..y.len() - 1]);

    Ok(ForecastResult::with_fitted(mean, fitted_vals))
}
