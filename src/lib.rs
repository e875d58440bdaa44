//! # baseline-forecast
//!
//! Baseline time series forecasting kernels with prediction-interval support.
//!
//! Provides the naive and seasonal naive forecasters, residual-based sigma
//! estimation, Gaussian prediction intervals, and the `ConformalIntervals`
//! configuration consumed by windowed conformal backtesting.

#![allow(clippy::needless_range_loop)]

pub mod core;
pub mod datasets;
pub mod error;
pub mod intervals;
pub mod models;
pub mod utils;

pub use error::{ForecastError, Result};

pub mod prelude {
    pub use crate::core::ForecastResult;
    pub use crate::error::{ForecastError, Result};
    pub use crate::intervals::{
        prediction_intervals, sigma, ConformalIntervals, ConformalMethod, PredictionIntervals,
    };
    pub use crate::models::baseline::{naive, seasonal_naive};
    pub use crate::utils::quantile_normal;
}
