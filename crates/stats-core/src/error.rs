//! Error types for sample statistics
//!
//! Provides a unified error type for all sample-stats crates. An `Err` is the
//! "undefined" marker: the inputs admit no meaningful result. Mathematical
//! limits such as an infinite normal quantile are returned as `Ok` values.

use thiserror::Error;

/// Core error type for statistical operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for empty input
    pub fn empty_input(operation: &str) -> Self {
        tracing::debug!(operation, "rejected empty sample");
        Self::InsufficientData {
            expected: 1,
            actual: 0,
        }
    }

    /// Create an error for invalid quantile
    pub fn invalid_quantile(p: f64) -> Self {
        Self::InvalidParameter(format!("Quantile {p} must be in [0, 1]"))
    }

    /// Create an error for a non-positive scale parameter
    pub fn invalid_scale(scale: f64) -> Self {
        Self::InvalidParameter(format!("Scale {scale} must be positive"))
    }

    /// Create an error for size mismatch
    pub fn size_mismatch(expected: usize, actual: usize, context: &str) -> Self {
        Self::InvalidInput(format!(
            "Size mismatch in {context}: expected {expected}, got {actual}"
        ))
    }

    /// Create an error for a sample without spread
    pub fn zero_variance(context: &str) -> Self {
        Self::Computation(format!("{context} is undefined for a sample with zero variance"))
    }

    /// Fail with `InsufficientData` unless `data` holds at least `min_size` values
    pub fn check_sample_size(data: &[f64], min_size: usize) -> Result<()> {
        if data.len() < min_size {
            return Err(Self::InsufficientData {
                expected: min_size,
                actual: data.len(),
            });
        }
        Ok(())
    }

    /// Fail unless `p` lies in [0, 1]; NaN is rejected
    pub fn check_probability(p: f64) -> Result<()> {
        if !(0.0..=1.0).contains(&p) {
            tracing::debug!(p, "rejected probability outside [0, 1]");
            return Err(Self::invalid_quantile(p));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidParameter("alpha must be positive".to_string());
        assert_eq!(err.to_string(), "Invalid parameter: alpha must be positive");

        let err = Error::InvalidInput("data contains duplicates".to_string());
        assert_eq!(err.to_string(), "Invalid input: data contains duplicates");

        let err = Error::InsufficientData { expected: 10, actual: 5 };
        assert_eq!(
            err.to_string(),
            "Insufficient data: expected at least 10 samples, got 5"
        );

        let err = Error::Computation("convergence failed".to_string());
        assert_eq!(err.to_string(), "Computation error: convergence failed");
    }

    #[test]
    fn test_error_helper_functions() {
        let err = Error::empty_input("mean");
        assert_eq!(err, Error::InsufficientData { expected: 1, actual: 0 });

        let err = Error::invalid_quantile(1.5);
        assert_eq!(err.to_string(), "Invalid parameter: Quantile 1.5 must be in [0, 1]");

        let err = Error::invalid_scale(-2.0);
        assert_eq!(err.to_string(), "Invalid parameter: Scale -2 must be positive");

        let err = Error::size_mismatch(100, 50, "covariance");
        assert_eq!(
            err.to_string(),
            "Invalid input: Size mismatch in covariance: expected 100, got 50"
        );

        let err = Error::zero_variance("skewness");
        assert!(err.to_string().contains("zero variance"));
    }

    #[test]
    fn test_check_sample_size() {
        assert!(Error::check_sample_size(&[1.0, 2.0], 5).is_err());
        assert!(Error::check_sample_size(&[1.0, 2.0, 3.0, 4.0, 5.0], 5).is_ok());
        assert!(Error::check_sample_size(&[], 0).is_ok());
    }

    #[test]
    fn test_check_probability() {
        assert!(Error::check_probability(0.0).is_ok());
        assert!(Error::check_probability(0.5).is_ok());
        assert!(Error::check_probability(1.0).is_ok());
        assert!(Error::check_probability(1.1).is_err());
        assert!(Error::check_probability(-0.1).is_err());
        assert!(Error::check_probability(f64::NAN).is_err());
    }
}
