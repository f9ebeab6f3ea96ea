use alloc::vec::Vec;

use num_traits::Float;

use crate::{Kbn, helper::round_to};

/// Ordinary least-squares line fitted to a series against its step index.
///
/// `trend_line[i]` is the fitted value `intercept + slope * i` at every index of
/// the original series.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendFit<T> {
    /// Change of the fitted value per step
    pub slope: T,
    /// Fitted value at index zero
    pub intercept: T,
    /// Fitted value at every index of the series
    pub trend_line: Vec<T>,
}

impl<T: Float> TrendFit<T> {
    /// Returns the number of fitted points
    pub fn len(&self) -> usize {
        self.trend_line.len()
    }

    /// Returns `true` if the fit has no points
    pub fn is_empty(&self) -> bool {
        self.trend_line.is_empty()
    }

    /// Evaluates the fitted line at step `x`
    ///
    /// Steps past the end of the series extrapolate the trend.
    ///
    /// # Examples
    ///
    /// ```
    /// use trend_analysis::fit_linear_trend;
    ///
    /// let fit = fit_linear_trend(&[10.0, 20.0, 30.0]).unwrap();
    /// assert_eq!(fit.value_at(4.0), 50.0);
    /// ```
    pub fn value_at(&self, x: T) -> T {
        self.intercept + self.slope * x
    }

    /// Returns the trend score of the fit, see [`trend_score`]
    pub fn score(&self) -> Option<T> {
        trend_score(self.slope)
    }
}

/// Fits a straight line to the points `(i, values[i])` by ordinary least squares
///
/// Uses the closed form
///
/// ```text
/// slope     = (n·Σxy − Σx·Σy) / (n·Σx² − (Σx)²)
/// intercept = (Σy − slope·Σx) / n
/// ```
///
/// with `x = 0..n-1`. All four sums use Kahan-Babuska-Neumaier compensation.
///
/// A single value has no unique slope; it is fitted as a flat line through that
/// value (slope `0`, intercept equal to the value).
///
/// # Returns
///
/// * `Option<TrendFit<T>>` - The fit, or `None` if the slice is empty or the
///   indices are not representable in `T`
///
/// # Examples
///
/// ```
/// use trend_analysis::fit_linear_trend;
/// use assert_approx_eq::assert_approx_eq;
///
/// let fit = fit_linear_trend(&[10.0_f64, 20.0, 30.0]).unwrap();
/// assert_approx_eq!(fit.slope, 10.0, 1e-9);
/// assert_approx_eq!(fit.intercept, 10.0, 1e-9);
/// assert_eq!(fit.trend_line.len(), 3);
///
/// let flat = fit_linear_trend(&[5.0]).unwrap();
/// assert_eq!((flat.slope, flat.intercept), (0.0, 5.0));
/// ```
pub fn fit_linear_trend<T: Float + Default>(values: &[T]) -> Option<TrendFit<T>> {
    let (&first, rest) = values.split_first()?;
    if rest.is_empty() {
        return Some(TrendFit {
            slope: T::zero(),
            intercept: first,
            trend_line: vec![first],
        });
    }

    let n = T::from(values.len())?;
    let mut sum_x = Kbn::<T>::default();
    let mut sum_y = Kbn::<T>::default();
    let mut sum_xy = Kbn::<T>::default();
    let mut sum_xx = Kbn::<T>::default();
    for (i, &y) in values.iter().enumerate() {
        let x = T::from(i)?;
        sum_x += x;
        sum_y += y;
        sum_xy += x * y;
        sum_xx += x * x;
    }

    let (sum_x, sum_y) = (sum_x.total(), sum_y.total());
    let denom = n * sum_xx.total() - sum_x * sum_x;
    if denom.is_zero() {
        return None;
    }
    let slope = (n * sum_xy.total() - sum_x * sum_y) / denom;
    let intercept = (sum_y - slope * sum_x) / n;

    let trend_line = (0..values.len())
        .map(|i| T::from(i).map(|x| intercept + slope * x))
        .collect::<Option<Vec<T>>>()?;

    Some(TrendFit {
        slope,
        intercept,
        trend_line,
    })
}

/// Converts a slope into a trend score: the slope scaled by 100 and rounded to
/// two decimals, ties to even
///
/// # Examples
///
/// ```
/// use trend_analysis::trend_score;
///
/// assert_eq!(trend_score(0.123456), Some(12.35));
/// assert_eq!(trend_score(-2.5), Some(-250.0));
/// assert_eq!(trend_score(0.00125), Some(0.12));
/// ```
pub fn trend_score<T: Float>(slope: T) -> Option<T> {
    round_to(slope * T::from(100.0)?, 2)
}
