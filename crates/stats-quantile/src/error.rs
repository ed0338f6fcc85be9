//! Error types for quantile estimation

use thiserror::Error;

/// Errors that can occur during quantile estimation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Empty data provided
    #[error("Cannot compute quantile of empty data")]
    EmptyData,

    /// Invalid quantile probability
    #[error("Quantile probability {p} must be in [0, 1]")]
    InvalidProbability { p: f64 },

    /// Unknown quantile definition
    #[error("Quantile method {id} is not one of the Hyndman-Fan types 1-9")]
    InvalidMethod { id: u8 },

    /// Unparseable quantile method name
    #[error("Unknown quantile method name: {0:?}")]
    UnknownMethodName(String),

    /// Core computation error
    #[error("Core computation error: {0}")]
    Core(#[from] stats_core::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions
impl Error {
    /// Check if probability is valid
    pub fn check_probability(p: f64) -> Result<()> {
        if !(0.0..=1.0).contains(&p) {
            tracing::debug!(p, "quantile probability outside [0, 1]");
            return Err(Error::InvalidProbability { p });
        }
        Ok(())
    }

    /// Check if data is non-empty
    pub fn check_non_empty(data: &[f64]) -> Result<()> {
        if data.is_empty() {
            tracing::debug!("quantile requested for empty sample");
            return Err(Error::EmptyData);
        }
        Ok(())
    }
}
