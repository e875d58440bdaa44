//! Shared statistical helpers.

mod stats;

pub use stats::quantile_normal;
