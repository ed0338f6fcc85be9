//! Boundary-clamped interpolation between adjacent order statistics

use crate::{Error, Result};

/// Interpolate between the `k`-th and `(k + 1)`-th order statistics
///
/// `k` is a 1-based position into `sorted_data` and `g` the weight given to
/// the upper neighbour. Positions before the first element clamp to the
/// minimum and positions at or past the last element clamp to the maximum,
/// so results never extrapolate beyond the observed range.
///
/// A weight of exactly 0 or 1 selects the neighbour directly. For finite data
/// this is bit-identical to the weighted sum; it also keeps an infinite
/// neighbour with zero weight from turning the result into NaN.
///
/// The weighted sum is bounded by its two neighbours: `(1 - g) * x + g * x`
/// can round an ulp away from `x`, which would otherwise leave a constant
/// sample's quantile outside its own range.
///
/// # Examples
///
/// ```rust
/// use stats_quantile::interpolation::interpolate;
///
/// let sorted = [10.0, 20.0, 30.0];
/// assert_eq!(interpolate(&sorted, 1, 0.5).unwrap(), 15.0);
/// assert_eq!(interpolate(&sorted, 0, 0.9).unwrap(), 10.0);
/// assert_eq!(interpolate(&sorted, 3, 0.9).unwrap(), 30.0);
/// ```
pub fn interpolate(sorted_data: &[f64], k: i64, g: f64) -> Result<f64> {
    Error::check_non_empty(sorted_data)?;
    let n = sorted_data.len();

    if k < 1 {
        return Ok(sorted_data[0]);
    }
    let k = usize::try_from(k).map_or(n, |k| k);
    if k >= n {
        return Ok(sorted_data[n - 1]);
    }

    let lower = sorted_data[k - 1];
    let upper = sorted_data[k];
    if g == 0.0 {
        Ok(lower)
    } else if g == 1.0 {
        Ok(upper)
    } else {
        Ok(((1.0 - g) * lower + g * upper).max(lower).min(upper))
    }
}
