//! Core data structures for baseline forecasting.

mod forecast;

pub use forecast::ForecastResult;
