use num_traits::Float;
use ordered_float::PrimitiveFloat;

use crate::helper::{compensated_sum, median_from_sorted_slice, sorted_copy};

/// Descriptive statistics of a single series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryStatistics<T> {
    /// Arithmetic mean
    pub mean: T,
    /// Middle value of the sorted series, or the average of the two middle values
    pub median: T,
    /// Standard deviation, exactly zero for a single element
    pub stddev: T,
}

/// Returns the arithmetic mean of the values
///
/// The sum is accumulated with Kahan-Babuska-Neumaier compensation, which keeps
/// long series of large magnitudes from drifting.
///
/// # Returns
///
/// * `Option<T>` - The mean, or `None` if the slice is empty
///
/// # Examples
///
/// ```
/// use trend_analysis::mean;
/// use assert_approx_eq::assert_approx_eq;
///
/// let sales = [200.0_f64, 50.0, 120.0];
/// assert_approx_eq!(mean(&sales).unwrap(), 123.333333, 1e-6);
/// assert_eq!(mean::<f64>(&[]), None);
/// ```
pub fn mean<T: Float + Default>(values: &[T]) -> Option<T> {
    if values.is_empty() {
        return None;
    }
    let n = T::from(values.len())?;
    Some(compensated_sum(values.iter().copied()) / n)
}

/// Returns the median of the values
///
/// The input is copied and sorted; the slice itself is never reordered.
///
/// # Returns
///
/// * `Option<T>` - The median, or `None` if the slice is empty
///
/// # Examples
///
/// ```
/// use trend_analysis::median;
///
/// assert_eq!(median(&[200.0, 50.0, 120.0]), Some(120.0));
/// assert_eq!(median(&[4.0, 2.0, 5.0, 1.0]), Some(3.0));
/// ```
pub fn median<T: Float + PrimitiveFloat>(values: &[T]) -> Option<T> {
    median_from_sorted_slice(&sorted_copy(values))
}

/// Returns the standard deviation of the values
///
/// With `ddof` set the sum of squared deviations is divided by `n - 1` (sample
/// standard deviation), otherwise by `n`. A single value always has a standard
/// deviation of exactly zero.
///
/// # Returns
///
/// * `Option<T>` - The standard deviation, or `None` if the slice is empty
///
/// # Examples
///
/// ```
/// use trend_analysis::stddev;
/// use assert_approx_eq::assert_approx_eq;
///
/// let price = [10.0_f64, 20.0, 15.0];
/// assert_approx_eq!(stddev(&price, true).unwrap(), 5.0, 1e-12);
/// assert_eq!(stddev(&[5.0], true), Some(0.0));
/// ```
pub fn stddev<T: Float + Default>(values: &[T], ddof: bool) -> Option<T> {
    let mean = mean(values)?;
    let n = values.len();
    if n == 1 {
        return Some(T::zero());
    }

    let sum_sq_dev = compensated_sum(values.iter().map(|&v| (v - mean) * (v - mean)));
    let dof = T::from(if ddof { n - 1 } else { n })?;
    Some((sum_sq_dev / dof).sqrt())
}

/// Computes mean, median and standard deviation of a series in one call
///
/// # Returns
///
/// * `Option<SummaryStatistics<T>>` - The statistics, or `None` if the slice is empty
pub fn summarize_series<T>(values: &[T], ddof: bool) -> Option<SummaryStatistics<T>>
where
    T: Float + Default + PrimitiveFloat,
{
    Some(SummaryStatistics {
        mean: mean(values)?,
        median: median(values)?,
        stddev: stddev(values, ddof)?,
    })
}
