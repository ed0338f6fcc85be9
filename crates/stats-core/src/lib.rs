//! Core types and primitives for sample statistics
//!
//! This crate provides the pieces every other sample-stats crate builds on:
//!
//! - [`Error`] / [`Result`]: the shared "undefined result" taxonomy
//! - [`utils::sorted`]: the stable, non-mutating ordering primitive
//! - [`math::distributions::normal`]: the normal quantile (AS241) and CDF
//!
//! # Example
//!
//! ```rust
//! use stats_core::{math::distributions::normal, utils::sorted};
//!
//! let data = vec![3.0, 1.0, 2.0];
//! assert_eq!(sorted(&data), vec![1.0, 2.0, 3.0]);
//!
//! let z = normal::standard_quantile(0.5).unwrap();
//! assert_eq!(z, 0.0);
//! ```

pub mod error;
pub mod math;
pub mod utils;

// Re-export core types
pub use error::{Error, Result};
pub use math::distributions::normal::NormalParams;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::math::distributions::normal;
    pub use crate::utils::sorted;
    pub use crate::NormalParams;
}
