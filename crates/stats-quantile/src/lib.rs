//! Sample quantile estimation
//!
//! This crate implements the nine sample quantile definitions catalogued by
//! Hyndman & Fan (1996) as one parametrized strategy, [`QuantileMethod`],
//! feeding a single boundary-clamped interpolation routine.
//!
//! # Features
//!
//! - **Nine definitions**: types 1-3 (discontinuous) and 4-9 (continuous)
//! - **Non-mutating**: unsorted entry points sort a private copy
//! - **Explicit undefined results**: empty samples and probabilities outside
//!   `[0, 1]` return an [`Error`] rather than panicking
//! - **Spreadsheet percentile**: [`percentile`] is fixed to type 7
//!
//! # Example
//!
//! ```rust
//! use stats_quantile::{percentile, QuantileEstimator, QuantileMethod};
//!
//! let sample = vec![35.0, 20.0, 50.0, 40.0, 15.0];
//!
//! assert_eq!(percentile(&sample, 0.4).unwrap(), 29.0);
//!
//! let median = QuantileMethod::Type8.median(&sample).unwrap();
//! assert_eq!(median, 35.0);
//! ```

pub mod error;
pub mod estimators;
pub mod interpolation;
pub mod methods;
pub mod traits;

// Re-export main types
pub use error::{Error, Result};
pub use estimators::{
    iqr, percentile, quantile, quantile_method, quantiles, quartiles, PERCENTILE_METHOD,
};
pub use interpolation::interpolate;
pub use methods::QuantileMethod;
pub use traits::QuantileEstimator;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{percentile, quantile_method, Error, QuantileEstimator, QuantileMethod, Result};
}
