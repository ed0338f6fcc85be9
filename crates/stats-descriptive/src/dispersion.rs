//! Variance and standard deviation

use crate::location::mean;
use stats_core::{Error, Result};

/// Sum of squared deviations from the mean
fn sum_of_squares(sample: &[f64]) -> Result<f64> {
    let m = mean(sample)?;
    Ok(sample
        .iter()
        .map(|&x| {
            let diff = x - m;
            diff * diff
        })
        .sum())
}

/// Sample variance with Bessel's correction (divides by `n - 1`)
///
/// Requires at least two observations.
///
/// # Examples
///
/// ```rust
/// use stats_descriptive::variance;
///
/// let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
/// assert!((variance(&data).unwrap() - 32.0 / 7.0).abs() < 1e-12);
/// ```
pub fn variance(sample: &[f64]) -> Result<f64> {
    Error::check_sample_size(sample, 2)?;
    Ok(sum_of_squares(sample)? / (sample.len() - 1) as f64)
}

/// Population variance (divides by `n`)
pub fn population_variance(sample: &[f64]) -> Result<f64> {
    Error::check_sample_size(sample, 1)?;
    Ok(sum_of_squares(sample)? / sample.len() as f64)
}

/// Sample standard deviation, the square root of [`variance`]
pub fn std_dev(sample: &[f64]) -> Result<f64> {
    variance(sample).map(f64::sqrt)
}

/// Population standard deviation, the square root of [`population_variance`]
pub fn population_std_dev(sample: &[f64]) -> Result<f64> {
    population_variance(sample).map(f64::sqrt)
}
