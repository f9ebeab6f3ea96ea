use core::fmt;

/// Names one of the three consumer product series held by an analyzer.
///
/// The canonical order, used for validation and for every per-series
/// iteration, is sales, satisfaction, price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SeriesKind {
    /// Units sold per step
    Sales,
    /// Customer satisfaction score per step
    Satisfaction,
    /// Unit price per step
    Price,
}

impl SeriesKind {
    /// All series in canonical order
    pub const ALL: [SeriesKind; 3] = [
        SeriesKind::Sales,
        SeriesKind::Satisfaction,
        SeriesKind::Price,
    ];

    /// Returns the canonical lowercase name of the series
    ///
    /// # Examples
    ///
    /// ```
    /// use trend_analysis::SeriesKind;
    ///
    /// assert_eq!(SeriesKind::Satisfaction.as_str(), "satisfaction");
    /// ```
    pub const fn as_str(self) -> &'static str {
        match self {
            SeriesKind::Sales => "sales",
            SeriesKind::Satisfaction => "satisfaction",
            SeriesKind::Price => "price",
        }
    }
}

impl fmt::Display for SeriesKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
