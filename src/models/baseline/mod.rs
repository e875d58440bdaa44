//! Baseline forecasting kernels.
//!
//! Simple methods that serve as benchmarks for more complex models.

mod naive;
mod seasonal_naive;

pub use naive::naive;
pub use seasonal_naive::seasonal_naive;

/// Repeat a single value `h` times.
pub(crate) fn repeat_val(val: f32, h: usize) -> Vec<f32> {
    vec![val; h]
}

/// Cyclically repeat a seasonal vector out to length `h`.
///
/// Output index `j` takes `season_vals[j % season_length]`.
pub(crate) fn repeat_val_seas(season_vals: &[f32], h: usize) -> Vec<f32> {
    let season_length = season_vals.len();
    (0..h).map(|j| season_vals[j % season_length]).collect()
}
