use alloc::vec::Vec;

use num_traits::Float;
use ordered_float::{OrderedFloat, PrimitiveFloat};

use crate::Kbn;

/// Returns the median from a sorted slice
///
/// # Arguments
///
/// * `ss` - The sorted slice
///
/// # Returns
///
/// * `Option<T>` - The median, or `None` if the slice is empty
#[inline]
pub fn median_from_sorted_slice<T: Float>(ss: &[T]) -> Option<T> {
    let len = ss.len();
    if len == 0 {
        return None;
    }
    let mid = len / 2;
    let _2 = T::one() + T::one();
    if len % 2 == 0 {
        Some((ss[mid - 1] + ss[mid]) / _2)
    } else {
        Some(ss[mid])
    }
}

/// Returns an ascending copy of the slice, leaving the input untouched
///
/// NaN sorts after every other value.
pub fn sorted_copy<T: PrimitiveFloat + Copy>(values: &[T]) -> Vec<T> {
    let mut sorted: Vec<OrderedFloat<T>> = values.iter().copied().map(OrderedFloat).collect();
    sorted.sort_unstable();
    sorted.into_iter().map(|v| v.0).collect()
}

/// Sums the values with Kahan-Babuska-Neumaier compensation
#[inline]
pub fn compensated_sum<T, I>(values: I) -> T
where
    T: Float + Default,
    I: IntoIterator<Item = T>,
{
    let mut sum = Kbn::<T>::default();
    for value in values {
        sum += value;
    }
    sum.total()
}

/// Rounds to the given number of decimals, ties to even
///
/// # Returns
///
/// * `Option<T>` - The rounded value, or `None` if the scale is not representable in `T`
#[inline]
pub fn round_to<T: Float>(value: T, decimals: i32) -> Option<T> {
    let scale = T::from(10.0)?.powi(decimals);
    let scaled = value * scale;
    let _2 = T::one() + T::one();
    let nearest = scaled.round();
    let rounded = if (nearest - scaled).abs() == T::one() / _2 {
        (scaled / _2).round() * _2
    } else {
        nearest
    };
    Some(rounded / scale)
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;

    use super::*;

    #[test]
    fn median_from_sorted_slice_works() {
        assert_eq!(median_from_sorted_slice(&[1.0, 2.0, 3.0]), Some(2.0));
        assert_eq!(median_from_sorted_slice(&[1.0, 2.0, 3.0, 10.0]), Some(2.5));
        assert_eq!(median_from_sorted_slice(&[7.0]), Some(7.0));
        assert_eq!(median_from_sorted_slice::<f64>(&[]), None);
    }

    #[test]
    fn sorted_copy_works() {
        let values = [200.0, 50.0, 120.0, 50.0];
        assert_eq!(sorted_copy(&values), vec![50.0, 50.0, 120.0, 200.0]);
        assert_eq!(values, [200.0, 50.0, 120.0, 50.0]);
    }

    #[test]
    fn sorted_copy_places_nan_last() {
        let sorted = sorted_copy(&[3.0, f64::NAN, 1.0]);
        assert_eq!(&sorted[..2], &[1.0, 3.0]);
        assert!(sorted[2].is_nan());
    }

    #[test]
    fn compensated_sum_works() {
        let inputs = [1_000_000.1, 1_000_000.2, 1_000_000.3];
        assert_approx_eq!(compensated_sum(inputs), 3_000_000.6, 1e-9);
        assert_eq!(compensated_sum::<f64, _>([]), 0.0);
    }

    #[test]
    fn round_to_works() {
        assert_eq!(round_to(1234.5678_f64, 2), Some(1234.57));
        assert_eq!(round_to(1000.0_f64, 2), Some(1000.0));
    }

    #[test]
    fn round_to_breaks_ties_to_even() {
        assert_eq!(round_to(0.125_f64, 2), Some(0.12));
        assert_eq!(round_to(-0.125_f64, 2), Some(-0.12));
        assert_eq!(round_to(0.375_f64, 2), Some(0.38));
        assert_eq!(round_to(2.5_f64, 0), Some(2.0));
        assert_eq!(round_to(3.5_f64, 0), Some(4.0));
    }
}
