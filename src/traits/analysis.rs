use ahash::RandomState;
use hashbrown::HashMap;

use crate::{Result, SeriesKind, SummaryStatistics, TrendFit};

/// Summary statistics keyed by series
pub type Summary<T> = HashMap<SeriesKind, SummaryStatistics<T>, RandomState>;

/// Trend fits keyed by series
pub type Predictions<T> = HashMap<SeriesKind, TrendFit<T>, RandomState>;

/// Validate, summarize and predict contract shared by every analysis
///
/// The three operations are independent queries over data fixed at construction:
/// none of them mutates the analysis, and calling any of them again yields the
/// same result. Callers are expected to run [`Analysis::validate`] first;
/// [`Analysis::summarize`] and [`Analysis::predict`] do not re-validate.
pub trait Analysis<T> {
    /// Checks every series held by the analysis
    ///
    /// # Returns
    ///
    /// * `Result<bool>` - `Ok(true)` when all checks pass, otherwise the first violation found
    fn validate(&self) -> Result<bool>;

    /// Computes descriptive statistics for every series
    ///
    /// # Returns
    ///
    /// * `Result<Summary<T>>` - Statistics keyed by series
    fn summarize(&self) -> Result<Summary<T>>;

    /// Fits a linear trend to every series
    ///
    /// # Returns
    ///
    /// * `Result<Predictions<T>>` - Trend fits keyed by series
    fn predict(&self) -> Result<Predictions<T>>;
}
