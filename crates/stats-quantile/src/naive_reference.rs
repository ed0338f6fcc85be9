//! Naive reference implementations of the Hyndman-Fan quantile definitions
//!
//! Each definition is written out on its own, directly from the formulas in
//! the paper, without the shared offset/interpolation machinery. They serve
//! as a reference for verifying `QuantileMethod`.
//!
//! DO NOT USE IN PRODUCTION - these are for testing and debugging only!

/// Naive sample quantiles, one procedure per definition
pub struct NaiveQuantiles;

impl NaiveQuantiles {
    /// Compute a quantile with the definition numbered `id`
    ///
    /// # Arguments
    /// * `data` - The data sample (will be sorted internally)
    /// * `p` - The probability (0.0 to 1.0)
    /// * `id` - The Hyndman-Fan number (1-9)
    pub fn quantile(data: &[f64], p: f64, id: u8) -> f64 {
        assert!(!data.is_empty(), "Cannot compute quantile of empty data");
        assert!((0.0..=1.0).contains(&p), "Probability must be in [0, 1]");

        let mut sorted = data.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());

        match id {
            1 => Self::type1(&sorted, p),
            2 => Self::type2(&sorted, p),
            3 => Self::type3(&sorted, p),
            4 => Self::linear(&sorted, p * sorted.len() as f64),
            5 => Self::linear(&sorted, p * sorted.len() as f64 + 0.5),
            6 => Self::linear(&sorted, p * (sorted.len() as f64 + 1.0)),
            7 => Self::linear(&sorted, (sorted.len() as f64 - 1.0) * p + 1.0),
            8 => Self::linear(
                &sorted,
                (sorted.len() as f64 + 1.0 / 3.0) * p + 1.0 / 3.0,
            ),
            9 => Self::linear(
                &sorted,
                (sorted.len() as f64 + 0.25) * p + 0.375,
            ),
            _ => panic!("Unknown quantile type {id}"),
        }
    }

    /// 1-based order statistic, clamped into the sample
    fn order_stat(sorted: &[f64], i: i64) -> f64 {
        let i = i.clamp(1, sorted.len() as i64) as usize;
        sorted[i - 1]
    }

    /// Inverse EDF: x[ceil(np)]
    fn type1(sorted: &[f64], p: f64) -> f64 {
        let np = p * sorted.len() as f64;
        Self::order_stat(sorted, np.ceil() as i64)
    }

    /// Inverse EDF with averaging where np is a whole number
    fn type2(sorted: &[f64], p: f64) -> f64 {
        let np = p * sorted.len() as f64;
        if np.fract() == 0.0 {
            let j = np as i64;
            0.5 * (Self::order_stat(sorted, j) + Self::order_stat(sorted, j + 1))
        } else {
            Self::order_stat(sorted, np.ceil() as i64)
        }
    }

    /// Nearest order statistic to np, ties to the even one
    fn type3(sorted: &[f64], p: f64) -> f64 {
        let np = p * sorted.len() as f64;
        Self::order_stat(sorted, np.round_ties_even() as i64)
    }

    /// Linear interpolation at 1-based fractional position h
    fn linear(sorted: &[f64], h: f64) -> f64 {
        let n = sorted.len() as f64;
        if h <= 1.0 {
            return sorted[0];
        }
        if h >= n {
            return sorted[sorted.len() - 1];
        }
        let lo = h.floor();
        let x_lo = Self::order_stat(sorted, lo as i64);
        let x_hi = Self::order_stat(sorted, lo as i64 + 1);
        x_lo + (h - lo) * (x_hi - x_lo)
    }
}
