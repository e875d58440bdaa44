//! Configuration for windowed conformal prediction intervals.

use std::fmt;
use std::str::FromStr;

use crate::error::{ForecastError, Result};

/// Recognized conformal-interval methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConformalMethod {
    /// Intervals from the empirical distribution of absolute backtest errors.
    #[default]
    ConformalDistribution,
}

impl ConformalMethod {
    /// Canonical string name of the method.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConformalMethod::ConformalDistribution => "conformal_distribution",
        }
    }
}

impl fmt::Display for ConformalMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConformalMethod {
    type Err = ForecastError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "conformal_distribution" => Ok(ConformalMethod::ConformalDistribution),
            other => Err(ForecastError::InvalidParameter(format!(
                "method must be one of [conformal_distribution], got {other}"
            ))),
        }
    }
}

/// Parameters for computing conformal prediction intervals.
///
/// A passive value object consumed by a windowed backtesting routine:
/// validated once at construction, immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConformalIntervals {
    n_windows: usize,
    h: usize,
    method: ConformalMethod,
}

impl ConformalIntervals {
    /// Create a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ForecastError::InvalidParameter`] when `n_windows < 2`
    /// (at least two backtest windows are needed to compute conformal
    /// intervals), when `h` is zero, or when `method` is not a recognized
    /// method name.
    pub fn new(n_windows: usize, h: usize, method: &str) -> Result<Self> {
        if n_windows < 2 {
            return Err(ForecastError::InvalidParameter(
                "need at least two windows to compute conformal intervals".to_string(),
            ));
        }
        if h == 0 {
            return Err(ForecastError::InvalidParameter(
                "h must be positive".to_string(),
            ));
        }
        let method = method.parse()?;
        Ok(Self {
            n_windows,
            h,
            method,
        })
    }

    /// Number of backtest windows.
    pub fn n_windows(&self) -> usize {
        self.n_windows
    }

    /// Forecast horizon per window.
    pub fn h(&self) -> usize {
        self.h
    }

    /// The conformal method.
    pub fn method(&self) -> ConformalMethod {
        self.method
    }
}

impl Default for ConformalIntervals {
    fn default() -> Self {
        Self {
            n_windows: 2,
            h: 1,
            method: ConformalMethod::default(),
        }
    }
}
