//! Forecasting models.

pub mod baseline;
