//! Descriptive statistics for finite samples
//!
//! This crate provides the single-pass reductions that sit around the
//! quantile engine:
//! - Location: sum, mean, min, max, range and the median variants
//! - Dispersion: sample and population variance and standard deviation
//! - Moments: central moments, skewness and kurtosis
//! - Paired samples: covariance and Pearson correlation
//! - [`Summary`]: a serializable five-number summary
//!
//! Every function borrows its input and returns a [`stats_core::Result`];
//! an `Err` marks an undefined statistic (empty input, too few observations,
//! mismatched pairs, or a constant sample where spread is required).
//!
//! # Example
//!
//! ```rust
//! use stats_descriptive::{mean, median, std_dev, Summary};
//!
//! let sample = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
//! assert_eq!(mean(&sample).unwrap(), 5.0);
//! assert_eq!(median(&sample).unwrap(), 4.5);
//! assert!((std_dev(&sample).unwrap() - 2.138_089_935).abs() < 1e-9);
//!
//! let summary = Summary::from_sample(&sample).unwrap();
//! assert_eq!(summary.max, 9.0);
//! ```

pub mod correlation;
pub mod dispersion;
pub mod location;
pub mod moments;
pub mod summary;

// Re-exports
pub use correlation::{correlation, covariance, population_covariance};
pub use dispersion::{population_std_dev, population_variance, std_dev, variance};
pub use location::{max, mean, median, median_high, median_low, min, range, sum};
pub use moments::{central_moment, excess_kurtosis, kurtosis, skewness};
pub use summary::Summary;
