use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{ScorePoint, Series, SeriesType};
use crate::timeseries::filter::{Timestamped, retain_since};
use crate::timeseries::reshape::ScoreDimension;

/// One observation laid out as a table row and stamped with its series type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedRow {
    /// Observation instant.
    pub timestamp: DateTime<Utc>,
    /// Company or peer-group tag copied from the source series.
    pub series_type: SeriesType,
    /// Composite ESG score, null when missing upstream.
    pub esg_score: Option<f64>,
    /// Governance score, null when missing upstream.
    pub governance_score: Option<f64>,
    /// Environment score, null when missing upstream.
    pub environment_score: Option<f64>,
    /// Social score, null when missing upstream.
    pub social_score: Option<f64>,
}

impl NormalizedRow {
    fn from_point(series_type: SeriesType, p: &ScorePoint) -> Self {
        Self {
            timestamp: p.timestamp,
            series_type,
            esg_score: p.esg_score,
            governance_score: p.governance_score,
            environment_score: p.environment_score,
            social_score: p.social_score,
        }
    }

    /// Score for a single dimension.
    #[must_use]
    pub const fn score(&self, dimension: ScoreDimension) -> Option<f64> {
        match dimension {
            ScoreDimension::Esg => self.esg_score,
            ScoreDimension::Governance => self.governance_score,
            ScoreDimension::Environment => self.environment_score,
            ScoreDimension::Social => self.social_score,
        }
    }
}

impl Timestamped for NormalizedRow {
    fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

/// Wide table with one row per observation, in source order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NormalizedTable {
    rows: Vec<NormalizedRow>,
}

impl NormalizedTable {
    /// Column set of every normalized table, empty ones included.
    pub const COLUMNS: [&'static str; 6] = [
        "timestamp",
        "series_type",
        "esgScore",
        "governanceScore",
        "environmentScore",
        "socialScore",
    ];

    /// Build a table from rows that are already laid out.
    #[must_use]
    pub const fn from_rows(rows: Vec<NormalizedRow>) -> Self {
        Self { rows }
    }

    /// Column names, in display order.
    #[must_use]
    pub const fn columns(&self) -> &'static [&'static str] {
        &Self::COLUMNS
    }

    /// Rows in source order.
    #[must_use]
    pub fn rows(&self) -> &[NormalizedRow] {
        &self.rows
    }

    /// Iterate rows in source order.
    pub fn iter(&self) -> std::slice::Iter<'_, NormalizedRow> {
        self.rows.iter()
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the table holds no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows observed at or after `cutoff`.
    #[must_use]
    pub fn since(&self, cutoff: DateTime<Utc>) -> Self {
        Self {
            rows: retain_since(&self.rows, cutoff),
        }
    }

    /// Consume the table and return its rows.
    #[must_use]
    pub fn into_rows(self) -> Vec<NormalizedRow> {
        self.rows
    }
}

impl<'a> IntoIterator for &'a NormalizedTable {
    type Item = &'a NormalizedRow;
    type IntoIter = std::slice::Iter<'a, NormalizedRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// Lay a series out as a normalized table.
///
/// Rows are neither reordered nor dropped; missing scores stay null here and
/// are only discarded by [`reshape`](crate::reshape).
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        target = "esgchart::normalize",
        level = "trace",
        skip(series),
        fields(series_type = %series.series_type, points = series.points.len()),
    )
)]
#[must_use]
pub fn normalize(series: &Series) -> NormalizedTable {
    let rows = series
        .points
        .iter()
        .map(|p| NormalizedRow::from_point(series.series_type, p))
        .collect();
    NormalizedTable { rows }
}
