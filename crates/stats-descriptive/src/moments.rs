//! Central moments, skewness and kurtosis
//!
//! Moments here are population moments: `m_k = mean((x - x̄)^k)`. Skewness
//! and kurtosis are the standardized third and fourth moments without any
//! small-sample correction.

use crate::location::mean;
use stats_core::{Error, Result};
use tracing::debug;

/// The `k`-th central moment, `mean((x - x̄)^k)`
///
/// The zeroth moment is 1 and the first is 0 up to rounding.
pub fn central_moment(sample: &[f64], k: u32) -> Result<f64> {
    let m = mean(sample)?;
    if k == 0 {
        return Ok(1.0);
    }
    let exponent = i32::try_from(k)
        .map_err(|_| Error::InvalidParameter(format!("Moment order {k} is too large")))?;
    let total: f64 = sample.iter().map(|&x| (x - m).powi(exponent)).sum();
    Ok(total / sample.len() as f64)
}

/// Second central moment, rejecting samples without spread
fn spread_moment(sample: &[f64], context: &str) -> Result<f64> {
    let m2 = central_moment(sample, 2)?;
    let constant = sample.iter().all(|&x| x == sample[0]);
    if constant || m2 == 0.0 {
        debug!(n = sample.len(), context, "rejected sample without spread");
        return Err(Error::zero_variance(context));
    }
    Ok(m2)
}

/// Moment coefficient of skewness, `m3 / m2^(3/2)`
///
/// # Examples
///
/// ```rust
/// use stats_descriptive::skewness;
///
/// assert!(skewness(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap().abs() < 1e-12);
/// assert!(skewness(&[1.0, 2.0, 3.0, 4.0, 50.0]).unwrap() > 0.0);
/// assert!(skewness(&[2.0, 2.0, 2.0]).is_err());
/// ```
pub fn skewness(sample: &[f64]) -> Result<f64> {
    let m2 = spread_moment(sample, "skewness")?;
    let m3 = central_moment(sample, 3)?;
    Ok(m3 / m2.powf(1.5))
}

/// Moment coefficient of kurtosis, `m4 / m2²` (3 for a normal distribution)
pub fn kurtosis(sample: &[f64]) -> Result<f64> {
    let m2 = spread_moment(sample, "kurtosis")?;
    let m4 = central_moment(sample, 4)?;
    Ok(m4 / (m2 * m2))
}

/// Excess kurtosis, [`kurtosis`] minus 3
pub fn excess_kurtosis(sample: &[f64]) -> Result<f64> {
    Ok(kurtosis(sample)? - 3.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_central_moments() {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_eq!(central_moment(&data, 0).unwrap(), 1.0);
        assert_abs_diff_eq!(central_moment(&data, 1).unwrap(), 0.0, epsilon = 1e-12);
        assert_eq!(central_moment(&data, 2).unwrap(), 4.0);
        // (-27 - 1 - 1 - 1 + 0 + 0 + 8 + 64) / 8
        assert_eq!(central_moment(&data, 3).unwrap(), 5.25);
        assert!(central_moment(&[], 2).is_err());
    }

    #[test]
    fn test_skewness_symmetric() {
        let data = [-2.0, -1.0, 0.0, 1.0, 2.0];
        assert_abs_diff_eq!(skewness(&data).unwrap(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_skewness_known_value() {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_relative_eq!(skewness(&data).unwrap(), 5.25 / 8.0, max_relative = 1e-12);
    }

    #[test]
    fn test_skewness_sign() {
        assert!(skewness(&[1.0, 2.0, 3.0, 4.0, 5.0, 10.0, 15.0, 20.0]).unwrap() > 0.0);
        assert!(skewness(&[-20.0, -15.0, -10.0, 1.0, 2.0, 3.0]).unwrap() < 0.0);
    }

    #[test]
    fn test_kurtosis_uniform_grid() {
        // Discrete uniform on 1..=5: m2 = 2, m4 = 6.8
        let data = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_relative_eq!(kurtosis(&data).unwrap(), 1.7, max_relative = 1e-12);
        assert_relative_eq!(excess_kurtosis(&data).unwrap(), -1.3, max_relative = 1e-12);
    }

    #[test]
    fn test_zero_variance_is_undefined() {
        assert!(skewness(&[3.0, 3.0, 3.0]).is_err());
        assert!(kurtosis(&[0.1, 0.1, 0.1, 0.1]).is_err());
        assert!(excess_kurtosis(&[1.0]).is_err());
        assert!(skewness(&[]).is_err());
    }
}
