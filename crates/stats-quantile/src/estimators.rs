//! Free-function entry points over [`QuantileMethod`]

use crate::{QuantileEstimator, QuantileMethod, Result};

/// The definition behind [`percentile`]: spreadsheet `PERCENTILE`
pub const PERCENTILE_METHOD: QuantileMethod = QuantileMethod::Type7;

/// Estimate a quantile with the given definition
pub fn quantile(method: QuantileMethod, sample: &[f64], p: f64) -> Result<f64> {
    method.quantile(sample, p)
}

/// Estimate a quantile with the definition numbered `id` (1-9)
///
/// # Examples
///
/// ```rust
/// use stats_quantile::quantile_method;
///
/// let sample = [35.0, 20.0, 50.0, 40.0, 15.0];
/// assert_eq!(quantile_method(7, &sample, 0.4).unwrap(), 29.0);
/// assert!(quantile_method(7, &sample, 1.5).is_err());
/// assert!(quantile_method(12, &sample, 0.5).is_err());
/// ```
pub fn quantile_method(id: u8, sample: &[f64], p: f64) -> Result<f64> {
    QuantileMethod::from_id(id)?.quantile(sample, p)
}

/// Estimate several quantiles with one sort of the sample
pub fn quantiles(method: QuantileMethod, sample: &[f64], ps: &[f64]) -> Result<Vec<f64>> {
    method.quantiles(sample, ps)
}

/// Spreadsheet-compatible percentile, `p` in [0, 1]
pub fn percentile(sample: &[f64], p: f64) -> Result<f64> {
    PERCENTILE_METHOD.quantile(sample, p)
}

/// Lower quartile, median and upper quartile with the given definition
pub fn quartiles(method: QuantileMethod, sample: &[f64]) -> Result<[f64; 3]> {
    let q = method.quantiles(sample, &[0.25, 0.5, 0.75])?;
    Ok([q[0], q[1], q[2]])
}

/// Interquartile range with the given definition
pub fn iqr(method: QuantileMethod, sample: &[f64]) -> Result<f64> {
    let [q1, _, q3] = quartiles(method, sample)?;
    Ok(q3 - q1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    const SAMPLE: [f64; 5] = [35.0, 20.0, 50.0, 40.0, 15.0];

    #[test]
    fn test_quantile_method_by_id() {
        assert_eq!(quantile_method(7, &SAMPLE, 0.4).unwrap(), 29.0);
        assert_eq!(quantile_method(1, &SAMPLE, 0.5).unwrap(), 35.0);
        assert_eq!(quantile_method(3, &SAMPLE, 0.5).unwrap(), 20.0);
        assert_eq!(
            quantile_method(0, &SAMPLE, 0.5),
            Err(Error::InvalidMethod { id: 0 })
        );
    }

    #[test]
    fn test_percentile_is_type7() {
        for p in [0.0, 0.1, 0.33, 0.4, 0.5, 0.9, 1.0] {
            assert_eq!(
                percentile(&SAMPLE, p).unwrap(),
                quantile(QuantileMethod::Type7, &SAMPLE, p).unwrap()
            );
        }
        assert_eq!(percentile(&[], 0.5), Err(Error::EmptyData));
        assert!(percentile(&SAMPLE, 2.0).is_err());
    }

    #[test]
    fn test_quantiles_share_one_sort() {
        let values = quantiles(QuantileMethod::Type7, &SAMPLE, &[0.0, 0.4, 1.0]).unwrap();
        assert_eq!(values, vec![15.0, 29.0, 50.0]);

        let err = quantiles(QuantileMethod::Type7, &SAMPLE, &[0.5, -1.0]).unwrap_err();
        assert_eq!(err, Error::InvalidProbability { p: -1.0 });
        assert!(quantiles(QuantileMethod::Type7, &[], &[0.5]).is_err());
        assert_eq!(
            quantiles(QuantileMethod::Type7, &SAMPLE, &[]).unwrap(),
            Vec::<f64>::new()
        );
    }

    #[test]
    fn test_quartiles_and_iqr() {
        let data: Vec<f64> = (1..=10).map(f64::from).collect();
        assert_eq!(quartiles(QuantileMethod::Type7, &data).unwrap(), [3.25, 5.5, 7.75]);
        assert_eq!(iqr(QuantileMethod::Type7, &data).unwrap(), 4.5);
        assert_eq!(quartiles(QuantileMethod::Type1, &data).unwrap(), [3.0, 5.0, 8.0]);
        assert!(iqr(QuantileMethod::Type7, &[]).is_err());
    }
}
