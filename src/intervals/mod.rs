//! Prediction-interval construction.
//!
//! Gaussian intervals from residual-based sigma estimates, plus the
//! configuration object for windowed conformal intervals.

mod conformal;
mod prediction;

pub use conformal::{ConformalIntervals, ConformalMethod};
pub use prediction::{prediction_intervals, sigma, PredictionIntervals};
