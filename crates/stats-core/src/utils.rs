//! Utility functions for working with data slices

use ordered_float::OrderedFloat;

/// Sort data and return a new vector
///
/// The sort is stable and the input is left untouched. NaN values are placed
/// at the end; `-0.0` and `0.0` compare equal and keep their input order.
///
/// # Examples
///
/// ```rust
/// use stats_core::utils::sorted;
///
/// let data = vec![3.0, 1.0, 5.0, 2.0, 4.0];
/// assert_eq!(sorted(&data), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
/// assert_eq!(data, vec![3.0, 1.0, 5.0, 2.0, 4.0]);
/// ```
pub fn sorted(data: &[f64]) -> Vec<f64> {
    let mut sorted = data.to_vec();
    sorted.sort_by_key(|&x| OrderedFloat(x));
    sorted
}

/// Check whether data is in non-decreasing order (NaN last)
pub fn is_sorted(data: &[f64]) -> bool {
    data.windows(2)
        .all(|pair| OrderedFloat(pair[0]) <= OrderedFloat(pair[1]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_basic() {
        let data = vec![3.0, 1.0, 5.0, 2.0, 4.0];
        assert_eq!(sorted(&data), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn test_sorted_empty() {
        let data: Vec<f64> = vec![];
        assert_eq!(sorted(&data), Vec::<f64>::new());
    }

    #[test]
    fn test_sorted_single_element() {
        assert_eq!(sorted(&[42.0]), vec![42.0]);
    }

    #[test]
    fn test_sorted_duplicates() {
        let data = vec![3.0, 1.0, 3.0, 2.0, 1.0];
        assert_eq!(sorted(&data), vec![1.0, 1.0, 2.0, 3.0, 3.0]);
    }

    #[test]
    fn test_sorted_with_nan() {
        let data = vec![3.0, f64::NAN, 1.0, 2.0];
        let sorted_data = sorted(&data);

        assert_eq!(&sorted_data[..3], &[1.0, 2.0, 3.0]);
        assert!(sorted_data[3].is_nan());
    }

    #[test]
    fn test_sorted_with_infinity() {
        let data = vec![3.0, f64::INFINITY, 1.0, f64::NEG_INFINITY, 2.0];
        assert_eq!(
            sorted(&data),
            vec![f64::NEG_INFINITY, 1.0, 2.0, 3.0, f64::INFINITY]
        );
    }

    #[test]
    fn test_sorted_is_stable_for_signed_zero() {
        let sorted_data = sorted(&[0.0, -1.0, -0.0]);
        assert_eq!(sorted_data[0], -1.0);
        assert!(sorted_data[1].is_sign_positive());
        assert!(sorted_data[2].is_sign_negative());
    }

    #[test]
    fn test_sorted_preserves_original() {
        let data = vec![3.0, 1.0, 5.0, 2.0, 4.0];
        let original = data.clone();
        let _ = sorted(&data);
        assert_eq!(data, original);
    }

    #[test]
    fn test_is_sorted() {
        assert!(is_sorted(&[]));
        assert!(is_sorted(&[1.0]));
        assert!(is_sorted(&[1.0, 1.0, 2.0, f64::NAN]));
        assert!(!is_sorted(&[2.0, 1.0]));
        assert!(!is_sorted(&[f64::NAN, 1.0]));
    }
}
