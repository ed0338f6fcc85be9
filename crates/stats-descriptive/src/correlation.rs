//! Covariance and Pearson correlation of paired samples

use crate::location::mean;
use stats_core::{Error, Result};
use tracing::debug;

/// Sum of cross products of deviations, after checking the pairing
fn cross_products(x: &[f64], y: &[f64], context: &str, min_size: usize) -> Result<f64> {
    if x.len() != y.len() {
        debug!(x = x.len(), y = y.len(), context, "rejected unpaired samples");
        return Err(Error::size_mismatch(x.len(), y.len(), context));
    }
    Error::check_sample_size(x, min_size)?;
    let mx = mean(x)?;
    let my = mean(y)?;
    Ok(x.iter().zip(y).map(|(&a, &b)| (a - mx) * (b - my)).sum())
}

/// Sample covariance (divides by `n - 1`)
///
/// Paired samples of different lengths are undefined.
pub fn covariance(x: &[f64], y: &[f64]) -> Result<f64> {
    let total = cross_products(x, y, "covariance", 2)?;
    Ok(total / (x.len() - 1) as f64)
}

/// Population covariance (divides by `n`)
pub fn population_covariance(x: &[f64], y: &[f64]) -> Result<f64> {
    let total = cross_products(x, y, "population covariance", 1)?;
    Ok(total / x.len() as f64)
}

/// Pearson product-moment correlation coefficient
///
/// Undefined when either sample is constant.
///
/// # Examples
///
/// ```rust
/// use stats_descriptive::correlation;
///
/// let x = [1.0, 2.0, 3.0, 4.0];
/// let y = [2.0, 4.0, 6.0, 8.0];
/// assert!((correlation(&x, &y).unwrap() - 1.0).abs() < 1e-12);
/// assert!(correlation(&x, &y[..3]).is_err());
/// ```
pub fn correlation(x: &[f64], y: &[f64]) -> Result<f64> {
    let sxy = cross_products(x, y, "correlation", 2)?;
    let sxx = cross_products(x, x, "correlation", 2)?;
    let syy = cross_products(y, y, "correlation", 2)?;
    if sxx == 0.0 || syy == 0.0 {
        debug!("rejected constant sample for correlation");
        return Err(Error::zero_variance("correlation"));
    }
    Ok((sxy / (sxx * syy).sqrt()).clamp(-1.0, 1.0))
}
