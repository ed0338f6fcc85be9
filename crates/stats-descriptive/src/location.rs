//! Sums, means, extremes and medians

use stats_core::{utils::sorted, Error, Result};

/// Sum of the sample; an empty sample sums to zero
pub fn sum(sample: &[f64]) -> f64 {
    sample.iter().sum()
}

/// Arithmetic mean
///
/// # Examples
///
/// ```rust
/// use stats_descriptive::mean;
///
/// assert_eq!(mean(&[1.0, 2.0, 3.0]).unwrap(), 2.0);
/// assert!(mean(&[]).is_err());
/// ```
pub fn mean(sample: &[f64]) -> Result<f64> {
    if sample.is_empty() {
        return Err(Error::empty_input("mean"));
    }
    Ok(sum(sample) / sample.len() as f64)
}

/// Smallest value
pub fn min(sample: &[f64]) -> Result<f64> {
    sample
        .iter()
        .copied()
        .reduce(f64::min)
        .ok_or_else(|| Error::empty_input("min"))
}

/// Largest value
pub fn max(sample: &[f64]) -> Result<f64> {
    sample
        .iter()
        .copied()
        .reduce(f64::max)
        .ok_or_else(|| Error::empty_input("max"))
}

/// Difference between the largest and smallest value
pub fn range(sample: &[f64]) -> Result<f64> {
    Ok(max(sample)? - min(sample)?)
}

/// Median, averaging the two middle values of an even-sized sample
pub fn median(sample: &[f64]) -> Result<f64> {
    let sorted = sorted_non_empty(sample, "median")?;
    let n = sorted.len();
    if n % 2 == 1 {
        Ok(sorted[n / 2])
    } else {
        Ok((sorted[n / 2 - 1] + sorted[n / 2]) / 2.0)
    }
}

/// Low median: the smaller of the two middle values of an even-sized sample
pub fn median_low(sample: &[f64]) -> Result<f64> {
    let sorted = sorted_non_empty(sample, "median_low")?;
    Ok(sorted[(sorted.len() - 1) / 2])
}

/// High median: the larger of the two middle values of an even-sized sample
pub fn median_high(sample: &[f64]) -> Result<f64> {
    let sorted = sorted_non_empty(sample, "median_high")?;
    Ok(sorted[sorted.len() / 2])
}

fn sorted_non_empty(sample: &[f64], operation: &str) -> Result<Vec<f64>> {
    if sample.is_empty() {
        return Err(Error::empty_input(operation));
    }
    Ok(sorted(sample))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sum() {
        assert_eq!(sum(&[]), 0.0);
        assert_eq!(sum(&[1.5, 2.5, -1.0]), 3.0);
    }

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[4.0]).unwrap(), 4.0);
        assert_relative_eq!(mean(&[1.0, 2.0, 3.0, 4.0]).unwrap(), 2.5);
        assert_eq!(
            mean(&[]),
            Err(Error::InsufficientData { expected: 1, actual: 0 })
        );
    }

    #[test]
    fn test_extremes() {
        let data = [3.0, -1.0, 7.5, 2.0];
        assert_eq!(min(&data).unwrap(), -1.0);
        assert_eq!(max(&data).unwrap(), 7.5);
        assert_eq!(range(&data).unwrap(), 8.5);
        assert!(min(&[]).is_err());
        assert!(max(&[]).is_err());
        assert!(range(&[]).is_err());
    }

    #[test]
    fn test_median_odd() {
        let data = [5.0, 1.0, 3.0];
        assert_eq!(median(&data).unwrap(), 3.0);
        assert_eq!(median_low(&data).unwrap(), 3.0);
        assert_eq!(median_high(&data).unwrap(), 3.0);
    }

    #[test]
    fn test_median_even() {
        let data = [4.0, 1.0, 3.0, 2.0];
        assert_eq!(median(&data).unwrap(), 2.5);
        assert_eq!(median_low(&data).unwrap(), 2.0);
        assert_eq!(median_high(&data).unwrap(), 3.0);
    }

    #[test]
    fn test_median_single_and_empty() {
        assert_eq!(median(&[9.0]).unwrap(), 9.0);
        assert_eq!(median_low(&[9.0]).unwrap(), 9.0);
        assert_eq!(median_high(&[9.0]).unwrap(), 9.0);
        assert!(median(&[]).is_err());
        assert!(median_low(&[]).is_err());
        assert!(median_high(&[]).is_err());
    }

    #[test]
    fn test_median_does_not_mutate() {
        let data = vec![3.0, 1.0, 2.0];
        let _ = median(&data).unwrap();
        assert_eq!(data, vec![3.0, 1.0, 2.0]);
    }
}
