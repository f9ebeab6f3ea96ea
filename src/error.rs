use thiserror::Error;

use crate::SeriesKind;

/// Errors raised while validating or analyzing product series.
///
/// `EmptyData`, `NonNumericData` and `NegativeValue` are only produced by
/// validation. `Computation` is the failure reported when summarizing or
/// predicting is attempted on data that cannot be computed at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// A required series has no elements
    #[error("{series} data is empty")]
    EmptyData {
        /// Offending series
        series: SeriesKind,
    },
    /// A series element is NaN
    #[error("{series} data contains a non-numeric value at index {index}")]
    NonNumericData {
        /// Offending series
        series: SeriesKind,
        /// Position of the first non-numeric element
        index: usize,
    },
    /// A series element is below zero
    #[error("{series} data contains a negative value at index {index}")]
    NegativeValue {
        /// Offending series
        series: SeriesKind,
        /// Position of the first negative element
        index: usize,
    },
    /// Strict alignment is enabled and the series lengths differ
    #[error("series lengths differ (sales: {sales}, satisfaction: {satisfaction}, price: {price})")]
    MismatchedLength {
        /// Length of the sales series
        sales: usize,
        /// Length of the satisfaction series
        satisfaction: usize,
        /// Length of the price series
        price: usize,
    },
    /// The statistic or fit could not be computed
    #[error("cannot compute {series}: {reason}")]
    Computation {
        /// Series being computed
        series: SeriesKind,
        /// What went wrong
        reason: &'static str,
    },
}

/// Result type used throughout the crate
pub type Result<T> = core::result::Result<T, AnalysisError>;

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn display_names_series() {
        let err = AnalysisError::NegativeValue {
            series: SeriesKind::Sales,
            index: 1,
        };
        assert_eq!(err.to_string(), "sales data contains a negative value at index 1");

        let err = AnalysisError::EmptyData {
            series: SeriesKind::Price,
        };
        assert_eq!(err.to_string(), "price data is empty");
    }
}
