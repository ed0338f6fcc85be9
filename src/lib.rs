//! Sample statistics: quantiles, normal quantiles and descriptive statistics
//!
//! This crate re-exports the workspace crates behind one facade:
//!
//! - [`stats_quantile`]: the nine Hyndman-Fan sample quantile definitions
//! - [`stats_core`]: errors, the ordering primitive and the normal distribution
//! - [`stats_descriptive`]: means, moments, medians and correlation
//!
//! # Example
//!
//! ```rust
//! use sample_stats::{normal_quantile, percentile, quantile_method};
//!
//! let sample = [35.0, 20.0, 50.0, 40.0, 15.0];
//! assert_eq!(quantile_method(7, &sample, 0.4).unwrap(), 29.0);
//! assert_eq!(percentile(&sample, 0.4).unwrap(), 29.0);
//!
//! let z = normal_quantile(0.975, 0.0, 1.0).unwrap();
//! assert!((z - 1.959_963_984_540_054).abs() < 1e-9);
//! assert_eq!(normal_quantile(1.0, 0.0, 1.0).unwrap(), f64::INFINITY);
//! ```

pub use stats_core;
pub use stats_descriptive;
pub use stats_quantile;

pub use stats_core::math::distributions::normal;
pub use stats_core::NormalParams;
pub use stats_descriptive::*;
pub use stats_quantile::{
    percentile, quantile, quantile_method, quantiles, QuantileEstimator, QuantileMethod,
};

/// Inverse CDF of `N(mean, scale²)`
///
/// `p == 0` and `p == 1` give negative and positive infinity; a non-positive
/// scale or `p` outside `[0, 1]` is an error.
pub fn normal_quantile(p: f64, mean: f64, scale: f64) -> stats_core::Result<f64> {
    normal::quantile(p, mean, scale)
}

/// [`normal_quantile`] with `mean = 0` and `scale = 1`
pub fn standard_normal_quantile(p: f64) -> stats_core::Result<f64> {
    normal::standard_quantile(p)
}

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{normal_quantile, standard_normal_quantile, NormalParams, Summary};
    pub use stats_quantile::prelude::*;
}
