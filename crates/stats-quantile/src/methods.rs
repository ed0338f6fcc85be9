//! The nine Hyndman-Fan sample quantile definitions
//!
//! Every definition follows the same recipe. For a sorted sample of size `n`
//! and probability `p`, compute a method-specific offset `m`, then
//!
//! ```text
//! k = floor(p * n + m)
//! g = p * n + m - k
//! ```
//!
//! optionally replace `g` with a tie-break weight, and interpolate between the
//! `k`-th and `(k + 1)`-th order statistics (see [`interpolate`]).
//!
//! | Type | m | weight override |
//! |------|---|-----------------|
//! | 1 | 0 | 0 on an exact integer, else 1 |
//! | 2 | 0 | 0.5 on an exact integer, else 1 |
//! | 3 | -1/2 | 0 on an exact integer with even `k`, else 1 |
//! | 4 | 0 | - |
//! | 5 | 1/2 | - |
//! | 6 | p | - |
//! | 7 | 1 - p | - |
//! | 8 | (p + 1) / 3 | - |
//! | 9 | p / 4 + 3 / 8 | - |
//!
//! Reference: Hyndman, R. J. & Fan, Y. (1996). "Sample quantiles in
//! statistical packages." *The American Statistician* 50(4), 361-365.

use crate::interpolation::interpolate;
use crate::traits::QuantileEstimator;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::trace;

/// One of the nine Hyndman-Fan sample quantile definitions
///
/// The default is [`QuantileMethod::Type7`], the definition used by R,
/// NumPy and spreadsheet `PERCENTILE` functions.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub enum QuantileMethod {
    /// Inverse of the empirical distribution function
    Type1,
    /// Inverse EDF, averaging at discontinuities
    Type2,
    /// Nearest even order statistic
    Type3,
    /// Linear interpolation of the EDF
    Type4,
    /// Piecewise linear with knots at the midpoints
    Type5,
    /// Interpolates the expected order statistics (Weibull)
    Type6,
    /// Interpolates the modes of the order statistics
    #[default]
    Type7,
    /// Approximately median-unbiased for any distribution
    Type8,
    /// Approximately unbiased for normal data
    Type9,
}

/// How the fractional weight is replaced for the discontinuous definitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TieBreak {
    None,
    Step,
    Average,
    NearestEven,
}

impl QuantileMethod {
    /// All nine definitions in id order
    pub const ALL: [QuantileMethod; 9] = [
        QuantileMethod::Type1,
        QuantileMethod::Type2,
        QuantileMethod::Type3,
        QuantileMethod::Type4,
        QuantileMethod::Type5,
        QuantileMethod::Type6,
        QuantileMethod::Type7,
        QuantileMethod::Type8,
        QuantileMethod::Type9,
    ];

    /// Look up a definition by its Hyndman-Fan number (1-9)
    pub fn from_id(id: u8) -> Result<Self> {
        match id {
            1..=9 => Ok(Self::ALL[usize::from(id) - 1]),
            _ => Err(Error::InvalidMethod { id }),
        }
    }

    /// The Hyndman-Fan number of this definition
    pub fn id(self) -> u8 {
        match self {
            Self::Type1 => 1,
            Self::Type2 => 2,
            Self::Type3 => 3,
            Self::Type4 => 4,
            Self::Type5 => 5,
            Self::Type6 => 6,
            Self::Type7 => 7,
            Self::Type8 => 8,
            Self::Type9 => 9,
        }
    }

    /// Stable short name, e.g. `"type-7"`
    pub fn name(self) -> &'static str {
        match self {
            Self::Type1 => "type-1",
            Self::Type2 => "type-2",
            Self::Type3 => "type-3",
            Self::Type4 => "type-4",
            Self::Type5 => "type-5",
            Self::Type6 => "type-6",
            Self::Type7 => "type-7",
            Self::Type8 => "type-8",
            Self::Type9 => "type-9",
        }
    }

    /// Whether the estimate is continuous in `p`
    ///
    /// Types 1-3 are step functions of `p`; types 4-9 interpolate linearly.
    pub fn is_continuous(self) -> bool {
        self.tie_break() == TieBreak::None
    }

    /// The offset `m` added to `p * n` before splitting into `k` and `g`
    pub fn offset(self, p: f64) -> f64 {
        match self {
            Self::Type1 | Self::Type2 | Self::Type4 => 0.0,
            Self::Type3 => -0.5,
            Self::Type5 => 0.5,
            Self::Type6 => p,
            Self::Type7 => 1.0 - p,
            Self::Type8 => (p + 1.0) / 3.0,
            Self::Type9 => 0.25 * p + 0.375,
        }
    }

    fn tie_break(self) -> TieBreak {
        match self {
            Self::Type1 => TieBreak::Step,
            Self::Type2 => TieBreak::Average,
            Self::Type3 => TieBreak::NearestEven,
            _ => TieBreak::None,
        }
    }

    /// The 1-based order statistic `k` and the weight `g` given to its upper
    /// neighbour, for probability `p` and sample size `n`
    ///
    /// `k` may fall outside `1..n`; [`interpolate`] clamps it. Exact-integer
    /// tests compare `g` with `0.0` exactly.
    pub fn position(self, p: f64, n: usize) -> (i64, f64) {
        let h = p * n as f64 + self.offset(p);
        let floor = h.floor();
        let k = floor as i64;
        let g = h - floor;

        let g = match self.tie_break() {
            TieBreak::None => g,
            TieBreak::Step => {
                if g == 0.0 {
                    0.0
                } else {
                    1.0
                }
            }
            TieBreak::Average => {
                if g == 0.0 {
                    0.5
                } else {
                    1.0
                }
            }
            TieBreak::NearestEven => {
                if g <= 0.0 && k % 2 == 0 {
                    0.0
                } else {
                    1.0
                }
            }
        };
        (k, g)
    }
}

impl QuantileEstimator for QuantileMethod {
    fn quantile_sorted(&self, sorted_data: &[f64], p: f64) -> Result<f64> {
        Error::check_probability(p)?;
        let (k, g) = self.position(p, sorted_data.len());
        trace!(method = self.name(), p, n = sorted_data.len(), k, g, "quantile position");
        interpolate(sorted_data, k, g)
    }
}

impl TryFrom<u8> for QuantileMethod {
    type Error = Error;

    fn try_from(id: u8) -> Result<Self> {
        Self::from_id(id)
    }
}

impl From<QuantileMethod> for u8 {
    fn from(method: QuantileMethod) -> u8 {
        method.id()
    }
}

impl fmt::Display for QuantileMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for QuantileMethod {
    type Err = Error;

    /// Accepts `"7"`, `"type7"`, `"type-7"`, `"type_7"` and `"r7"`, ignoring case
    fn from_str(s: &str) -> Result<Self> {
        let lower = s.trim().to_ascii_lowercase();
        let digits = lower
            .strip_prefix("type")
            .or_else(|| lower.strip_prefix('r'))
            .unwrap_or(&lower);
        let digits = digits.trim_start_matches(|c: char| c == '-' || c == '_');

        digits
            .parse::<u8>()
            .ok()
            .and_then(|id| Self::from_id(id).ok())
            .ok_or_else(|| Error::UnknownMethodName(s.to_string()))
    }
}
