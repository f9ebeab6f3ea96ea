#![doc = include_str!("../README.md")]
#![no_std]
#![deny(
    unsafe_code,
    unused_imports,
    unused_variables,
    unused_must_use,
    missing_docs,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::dbg_macro,
    clippy::todo,
    clippy::unimplemented
)]
#![allow(clippy::just_underscores_and_digits)]

#[macro_use]
extern crate alloc;

pub(crate) type Kbn<T> = compensated_summation::KahanBabuskaNeumaier<T>;

mod utils;
pub(crate) use utils::helper;

mod error;
pub use error::{AnalysisError, Result};

mod series;
pub use series::SeriesKind;

mod summary;
pub use summary::{SummaryStatistics, mean, median, stddev, summarize_series};

mod trend;
pub use trend::{TrendFit, fit_linear_trend, trend_score};

mod traits;
pub use traits::{Analysis, Predictions, Summary};

mod analyzer;
pub use analyzer::TrendAnalyzer;

mod engine;
pub use engine::TrendEngine;
