use alloc::{boxed::Box, vec::Vec};
use core::fmt;

use log::{debug, trace};
use num_traits::Float;

use crate::{Analysis, AnalysisError, Predictions, Result, SeriesKind, Summary};

/// Runs a set of analyses through the validate, summarize and predict pipeline.
///
/// Analyses are kept in registration order. The first one registered is the
/// primary analysis, whose trends drive [`TrendEngine::trend_score`].
///
/// # Examples
///
/// ```
/// use trend_analysis::{SeriesKind, TrendAnalyzer, TrendEngine};
///
/// let mut engine = TrendEngine::default();
/// engine.push(TrendAnalyzer::new(
///     vec![100.0, 120.0, 150.0],
///     vec![4.0, 4.2, 4.5],
///     vec![20.0, 21.0, 22.0],
/// ));
///
/// assert_eq!(engine.run_validation(), Ok(true));
/// assert_eq!(engine.trend_score(SeriesKind::Sales), Ok(2500.0));
/// ```
pub struct TrendEngine<T> {
    /// Registered analyses, primary first
    analyses: Vec<Box<dyn Analysis<T>>>,
}

impl<T> TrendEngine<T> {
    /// Creates a new `TrendEngine` over the given analyses
    ///
    /// # Arguments
    ///
    /// * `analyses` - Analyses in registration order, primary first
    ///
    /// # Returns
    ///
    /// * `Self` - The engine
    pub fn new(analyses: Vec<Box<dyn Analysis<T>>>) -> Self {
        Self { analyses }
    }

    /// Registers another analysis after the existing ones
    ///
    /// # Returns
    ///
    /// * `&mut Self` - The engine
    pub fn push(&mut self, analysis: impl Analysis<T> + 'static) -> &mut Self {
        self.analyses.push(Box::new(analysis));
        self
    }

    /// Returns the number of registered analyses
    pub fn len(&self) -> usize {
        self.analyses.len()
    }

    /// Returns `true` if no analysis is registered
    pub fn is_empty(&self) -> bool {
        self.analyses.is_empty()
    }

    /// Validates every registered analysis in order
    ///
    /// # Returns
    ///
    /// * `Result<bool>` - `Ok(true)` when all analyses pass, otherwise the first failure
    pub fn run_validation(&self) -> Result<bool> {
        for (i, analysis) in self.analyses.iter().enumerate() {
            trace!("validating analysis {i}");
            analysis.validate()?;
        }
        debug!("validated {} analyses", self.analyses.len());
        Ok(true)
    }

    /// Collects the summary of every registered analysis, in registration order
    pub fn collect_summaries(&self) -> Result<Vec<Summary<T>>> {
        self.analyses.iter().map(|a| a.summarize()).collect()
    }

    /// Collects the predictions of every registered analysis, in registration order
    pub fn collect_predictions(&self) -> Result<Vec<Predictions<T>>> {
        self.analyses.iter().map(|a| a.predict()).collect()
    }
}

impl<T: Float> TrendEngine<T> {
    /// Returns the trend score of a series in the primary analysis
    ///
    /// The score is the fitted slope scaled by 100 and rounded to two decimals.
    /// Every registered analysis is predicted first, so any prediction failure
    /// fails the score. An engine without analyses, or a primary analysis that
    /// does not predict the series, scores zero.
    ///
    /// # Arguments
    ///
    /// * `kind` - Series whose trend is scored
    ///
    /// # Returns
    ///
    /// * `Result<T>` - The score, or the first prediction failure among the analyses
    pub fn trend_score(&self, kind: SeriesKind) -> Result<T> {
        let predictions = self.collect_predictions()?;
        let Some(primary) = predictions.first() else {
            return Ok(T::zero());
        };
        let Some(fit) = primary.get(&kind) else {
            return Ok(T::zero());
        };
        fit.score().ok_or(AnalysisError::Computation {
            series: kind,
            reason: "trend score is not representable",
        })
    }
}

impl<T> Default for TrendEngine<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T> fmt::Debug for TrendEngine<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrendEngine")
            .field("analyses", &self.analyses.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use ahash::RandomState;
    use assert_approx_eq::assert_approx_eq;

    use super::*;
    use crate::{TrendAnalyzer, TrendFit};

    fn consumer() -> TrendAnalyzer<f64> {
        TrendAnalyzer::new(vec![100.0, 120.0, 150.0], vec![4.0, 4.2, 4.5], vec![20.0, 21.0, 22.0])
    }

    /// Analysis that only ever predicts a sales trend
    struct SalesOnly(f64);

    impl Analysis<f64> for SalesOnly {
        fn validate(&self) -> Result<bool> {
            Ok(true)
        }

        fn summarize(&self) -> Result<Summary<f64>> {
            Ok(Summary::with_hasher(RandomState::default()))
        }

        fn predict(&self) -> Result<Predictions<f64>> {
            let mut predictions = Predictions::with_hasher(RandomState::default());
            predictions.insert(
                SeriesKind::Sales,
                TrendFit {
                    slope: self.0,
                    intercept: 0.0,
                    trend_line: vec![0.0],
                },
            );
            Ok(predictions)
        }
    }

    #[test]
    fn run_validation_works() {
        let engine = TrendEngine::new(vec![Box::new(consumer()) as Box<dyn Analysis<f64>>]);
        assert_eq!(engine.len(), 1);
        assert_eq!(engine.run_validation(), Ok(true));
    }

    #[test]
    fn run_validation_propagates_first_failure() {
        let mut engine = TrendEngine::default();
        engine
            .push(consumer())
            .push(TrendAnalyzer::new(vec![1.0], vec![-1.0], vec![1.0]))
            .push(TrendAnalyzer::new(vec![], vec![1.0], vec![1.0]));
        assert_eq!(
            engine.run_validation(),
            Err(AnalysisError::NegativeValue {
                series: SeriesKind::Satisfaction,
                index: 0
            })
        );
    }

    #[test]
    fn run_validation_of_empty_engine_passes() {
        let engine = TrendEngine::<f64>::default();
        assert!(engine.is_empty());
        assert_eq!(engine.run_validation(), Ok(true));
    }

    #[test]
    fn collect_summaries_works() {
        let mut engine = TrendEngine::default();
        engine.push(consumer()).push(SalesOnly(1.0));

        let summaries = engine.collect_summaries().unwrap();
        assert_eq!(summaries.len(), 2);
        assert_approx_eq!(summaries[0][&SeriesKind::Price].mean, 21.0, 1e-9);
        assert!(summaries[1].is_empty());
    }

    #[test]
    fn collect_predictions_works() {
        let mut engine = TrendEngine::default();
        engine.push(consumer()).push(SalesOnly(-0.5));

        let predictions = engine.collect_predictions().unwrap();
        assert_eq!(predictions.len(), 2);
        assert_approx_eq!(predictions[0][&SeriesKind::Sales].slope, 25.0, 1e-9);
        assert_eq!(predictions[1][&SeriesKind::Sales].slope, -0.5);
    }

    #[test]
    fn collect_predictions_fails_as_a_whole() {
        let mut engine = TrendEngine::default();
        engine.push(consumer()).push(TrendAnalyzer::new(vec![1.0], vec![], vec![1.0]));
        assert!(engine.collect_predictions().is_err());
    }

    #[test]
    fn trend_score_works() {
        let mut engine = TrendEngine::default();
        engine.push(consumer());
        assert_eq!(engine.trend_score(SeriesKind::Sales), Ok(2500.0));
        assert_approx_eq!(engine.trend_score(SeriesKind::Satisfaction).unwrap(), 25.0, 1e-9);
        assert_approx_eq!(engine.trend_score(SeriesKind::Price).unwrap(), 100.0, 1e-9);
    }

    #[test]
    fn trend_score_uses_primary_analysis() {
        let mut engine = TrendEngine::default();
        engine.push(SalesOnly(0.123456)).push(consumer());
        assert_eq!(engine.trend_score(SeriesKind::Sales), Ok(12.35));
        assert_eq!(engine.trend_score(SeriesKind::Price), Ok(0.0));
    }

    #[test]
    fn trend_score_fails_when_any_prediction_fails() {
        let mut engine = TrendEngine::default();
        engine.push(consumer()).push(TrendAnalyzer::new(vec![], vec![1.0], vec![1.0]));
        assert!(matches!(
            engine.trend_score(SeriesKind::Sales),
            Err(AnalysisError::Computation {
                series: SeriesKind::Sales,
                ..
            })
        ));
    }

    #[test]
    fn trend_score_of_empty_engine_is_zero() {
        let engine = TrendEngine::<f64>::default();
        assert_eq!(engine.trend_score(SeriesKind::Sales), Ok(0.0));
    }
}
