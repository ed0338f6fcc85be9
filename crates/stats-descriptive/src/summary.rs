//! Five-number summary plus mean and standard deviation

use crate::{dispersion, location};
use serde::{Deserialize, Serialize};
use stats_core::{utils::sorted, Error, Result};
use stats_quantile::{QuantileEstimator, QuantileMethod};

/// Summary statistics of one sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation; `None` for a single observation
    pub std_dev: Option<f64>,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
    /// Definition used for the quartiles
    pub method: QuantileMethod,
}

impl Summary {
    /// Summarize a sample, computing quartiles with the default definition
    pub fn from_sample(sample: &[f64]) -> Result<Self> {
        Self::from_sample_with(sample, QuantileMethod::default())
    }

    /// Summarize a sample, computing quartiles with `method`
    pub fn from_sample_with(sample: &[f64], method: QuantileMethod) -> Result<Self> {
        if sample.is_empty() {
            return Err(Error::empty_input("summary"));
        }
        let sorted = sorted(sample);
        let quartiles = method
            .quantiles_sorted(&sorted, &[0.25, 0.5, 0.75])
            .map_err(|e| Error::Computation(format!("Quantile error: {e}")))?;

        Ok(Self {
            count: sample.len(),
            mean: location::mean(sample)?,
            std_dev: dispersion::std_dev(sample).ok(),
            min: location::min(sample)?,
            q1: quartiles[0],
            median: quartiles[1],
            q3: quartiles[2],
            max: location::max(sample)?,
            method,
        })
    }

    /// Interquartile range, `q3 - q1`
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }

    pub fn range(&self) -> f64 {
        self.max - self.min
    }
}
