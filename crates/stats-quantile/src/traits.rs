//! Core traits for quantile estimation

use crate::{Error, Result};
use stats_core::utils::sorted;

/// Main trait for quantile estimation
///
/// Implementors only provide [`quantile_sorted`](Self::quantile_sorted).
/// The unsorted entry points sort a private copy, so the caller's sample is
/// never reordered.
pub trait QuantileEstimator {
    /// Estimate a single quantile from pre-sorted data
    ///
    /// # Arguments
    /// * `sorted_data` - The data sample, sorted ascending
    /// * `p` - The probability (0.0 to 1.0)
    fn quantile_sorted(&self, sorted_data: &[f64], p: f64) -> Result<f64>;

    /// Estimate a single quantile
    ///
    /// Invalid probabilities and empty samples are rejected before sorting.
    fn quantile(&self, data: &[f64], p: f64) -> Result<f64> {
        Error::check_probability(p)?;
        Error::check_non_empty(data)?;
        self.quantile_sorted(&sorted(data), p)
    }

    /// Estimate multiple quantiles from pre-sorted data
    ///
    /// Fails on the first probability that has no defined quantile.
    fn quantiles_sorted(&self, sorted_data: &[f64], ps: &[f64]) -> Result<Vec<f64>> {
        ps.iter()
            .map(|&p| self.quantile_sorted(sorted_data, p))
            .collect()
    }

    /// Estimate multiple quantiles, sorting the sample once
    fn quantiles(&self, data: &[f64], ps: &[f64]) -> Result<Vec<f64>> {
        Error::check_non_empty(data)?;
        self.quantiles_sorted(&sorted(data), ps)
    }

    /// Estimate the median (p = 0.5)
    fn median(&self, data: &[f64]) -> Result<f64> {
        self.quantile(data, 0.5)
    }
}
