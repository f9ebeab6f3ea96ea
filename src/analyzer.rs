use alloc::vec::Vec;

use ahash::RandomState;
use log::{debug, trace, warn};
use num_traits::Float;
use ordered_float::PrimitiveFloat;

use crate::{
    Analysis, AnalysisError, Predictions, Result, SeriesKind, Summary, SummaryStatistics,
    TrendFit, fit_linear_trend, summarize_series,
};

/// Trend analysis over the sales, satisfaction and price series of a product.
///
/// The analyzer owns its three series and never mutates them. Every operation of
/// [`Analysis`] is recomputed on demand, so repeated calls return identical
/// results and the analyzer can be shared read-only between callers.
///
/// The series are not required to have equal lengths unless strict alignment is
/// enabled with [`TrendAnalyzer::set_strict_alignment`].
///
/// # Examples
///
/// ```
/// use trend_analysis::{Analysis, SeriesKind, TrendAnalyzer};
/// use assert_approx_eq::assert_approx_eq;
///
/// let analyzer = TrendAnalyzer::new(
///     vec![100.0_f64, 120.0, 140.0, 160.0, 180.0],
///     vec![7.0, 7.5, 8.0, 8.5, 9.0],
///     vec![50.0, 52.0, 54.0, 56.0, 58.0],
/// );
/// assert_eq!(analyzer.validate(), Ok(true));
///
/// let summary = analyzer.summarize().unwrap();
/// assert_approx_eq!(summary[&SeriesKind::Sales].mean, 140.0, 1e-9);
///
/// let predictions = analyzer.predict().unwrap();
/// assert_approx_eq!(predictions[&SeriesKind::Price].slope, 2.0, 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct TrendAnalyzer<T> {
    /// Units sold per step
    sales: Vec<T>,
    /// Satisfaction score per step
    satisfaction: Vec<T>,
    /// Unit price per step
    price: Vec<T>,
    /// Delta Degrees of Freedom
    ddof: bool,
    /// Require equal series lengths during validation
    strict_alignment: bool,
}

impl<T> TrendAnalyzer<T>
where
    T: Float + Default,
{
    /// Creates a new `TrendAnalyzer` from the three series
    ///
    /// Construction never fails; use [`Analysis::validate`] to check the data.
    ///
    /// # Arguments
    ///
    /// * `sales` - Units sold per step
    /// * `satisfaction` - Satisfaction score per step
    /// * `price` - Unit price per step
    ///
    /// # Returns
    ///
    /// * `Self` - The analyzer, computing sample standard deviations without strict alignment
    pub fn new(
        sales: impl Into<Vec<T>>,
        satisfaction: impl Into<Vec<T>>,
        price: impl Into<Vec<T>>,
    ) -> Self {
        Self {
            sales: sales.into(),
            satisfaction: satisfaction.into(),
            price: price.into(),
            ddof: true,
            strict_alignment: false,
        }
    }

    /// Returns the stored series
    ///
    /// # Arguments
    ///
    /// * `kind` - Series to return
    ///
    /// # Returns
    ///
    /// * `&[T]` - The series values in step order
    pub fn series(&self, kind: SeriesKind) -> &[T] {
        match kind {
            SeriesKind::Sales => &self.sales,
            SeriesKind::Satisfaction => &self.satisfaction,
            SeriesKind::Price => &self.price,
        }
    }

    /// Returns the Delta Degrees of Freedom
    ///
    /// # Returns
    ///
    /// * `bool` - `true` for the sample standard deviation, `false` for the population one
    pub const fn ddof(&self) -> bool {
        self.ddof
    }

    /// Sets the Delta Degrees of Freedom
    ///
    /// # Arguments
    ///
    /// * `ddof` - `true` divides by `n - 1`, `false` divides by `n`
    ///
    /// # Returns
    ///
    /// * `&mut Self` - The analyzer
    pub const fn set_ddof(&mut self, ddof: bool) -> &mut Self {
        self.ddof = ddof;
        self
    }

    /// Returns whether validation requires equal series lengths
    pub const fn strict_alignment(&self) -> bool {
        self.strict_alignment
    }

    /// Sets whether validation requires equal series lengths
    ///
    /// # Arguments
    ///
    /// * `strict` - Fail validation with [`AnalysisError::MismatchedLength`] on unequal lengths
    ///
    /// # Returns
    ///
    /// * `&mut Self` - The analyzer
    pub const fn set_strict_alignment(&mut self, strict: bool) -> &mut Self {
        self.strict_alignment = strict;
        self
    }

    /// Fits a linear trend to a single series
    ///
    /// # Arguments
    ///
    /// * `kind` - Series to fit
    ///
    /// # Returns
    ///
    /// * `Result<TrendFit<T>>` - The fit, or [`AnalysisError::Computation`] if the series is empty
    pub fn fit(&self, kind: SeriesKind) -> Result<TrendFit<T>> {
        let values = self.series(kind);
        if values.is_empty() {
            return Err(AnalysisError::Computation {
                series: kind,
                reason: "cannot fit a trend to an empty series",
            });
        }
        let fit = fit_linear_trend(values).ok_or(AnalysisError::Computation {
            series: kind,
            reason: "least-squares fit is not representable",
        })?;
        trace!(
            "{kind}: slope {:?}, intercept {:?}",
            fit.slope.to_f64(),
            fit.intercept.to_f64()
        );
        Ok(fit)
    }

    // Emptiness, then type, then sign; each check covers the whole series.
    fn check_series(kind: SeriesKind, values: &[T]) -> Result<()> {
        if values.is_empty() {
            return Err(AnalysisError::EmptyData { series: kind });
        }
        if let Some(index) = values.iter().position(|v| v.is_nan()) {
            return Err(AnalysisError::NonNumericData {
                series: kind,
                index,
            });
        }
        if let Some(index) = values.iter().position(|v| *v < T::zero()) {
            return Err(AnalysisError::NegativeValue {
                series: kind,
                index,
            });
        }
        Ok(())
    }

    fn check_alignment(&self) -> Result<()> {
        let (sales, satisfaction, price) = (
            self.sales.len(),
            self.satisfaction.len(),
            self.price.len(),
        );
        if sales == satisfaction && satisfaction == price {
            Ok(())
        } else {
            Err(AnalysisError::MismatchedLength {
                sales,
                satisfaction,
                price,
            })
        }
    }
}

impl<T> TrendAnalyzer<T>
where
    T: Float + Default + PrimitiveFloat,
{
    /// Computes mean, median and standard deviation of a single series
    ///
    /// # Arguments
    ///
    /// * `kind` - Series to summarize
    ///
    /// # Returns
    ///
    /// * `Result<SummaryStatistics<T>>` - The statistics, or [`AnalysisError::Computation`] if the series is empty
    pub fn statistics(&self, kind: SeriesKind) -> Result<SummaryStatistics<T>> {
        summarize_series(self.series(kind), self.ddof).ok_or(AnalysisError::Computation {
            series: kind,
            reason: "cannot summarize an empty series",
        })
    }
}

impl<T> Analysis<T> for TrendAnalyzer<T>
where
    T: Float + Default + PrimitiveFloat,
{
    fn validate(&self) -> Result<bool> {
        for kind in SeriesKind::ALL {
            Self::check_series(kind, self.series(kind))
                .inspect_err(|e| warn!("validation failed: {e}"))?;
        }
        if self.strict_alignment {
            self.check_alignment()
                .inspect_err(|e| warn!("validation failed: {e}"))?;
        }
        debug!(
            "validated series (sales: {}, satisfaction: {}, price: {})",
            self.sales.len(),
            self.satisfaction.len(),
            self.price.len()
        );
        Ok(true)
    }

    fn summarize(&self) -> Result<Summary<T>> {
        let mut summary =
            Summary::with_capacity_and_hasher(SeriesKind::ALL.len(), RandomState::default());
        for kind in SeriesKind::ALL {
            summary.insert(kind, self.statistics(kind)?);
        }
        debug!("summarized {} series", summary.len());
        Ok(summary)
    }

    fn predict(&self) -> Result<Predictions<T>> {
        let mut predictions =
            Predictions::with_capacity_and_hasher(SeriesKind::ALL.len(), RandomState::default());
        for kind in SeriesKind::ALL {
            predictions.insert(kind, self.fit(kind)?);
        }
        debug!("fitted trends for {} series", predictions.len());
        Ok(predictions)
    }
}
