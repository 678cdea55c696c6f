use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::SeriesType;
use crate::timeseries::reshape::ScoreDimension;

/// One line of a per-dimension chart: a series type's observed scores over time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartLine {
    /// Whose scores the line plots.
    pub series_type: SeriesType,
    /// Which score dimension the line plots.
    pub dimension: ScoreDimension,
    /// `(timestamp, score)` pairs in table order.
    pub points: Vec<(DateTime<Utc>, f64)>,
}

impl ChartLine {
    /// Legend label, e.g. `"peer group"`.
    #[must_use]
    pub const fn legend(&self) -> &'static str {
        self.series_type.label()
    }

    /// Most recent observation by timestamp, if any.
    #[must_use]
    pub fn latest(&self) -> Option<(DateTime<Utc>, f64)> {
        self.points.iter().copied().max_by_key(|(ts, _)| *ts)
    }
}
