use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::SeriesType;
use crate::timeseries::chart::ChartLine;
use crate::timeseries::filter::{Timestamped, retain_since};
use crate::timeseries::normalize::NormalizedTable;

/// One of the four scored ESG dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreDimension {
    /// Composite ESG score.
    Esg,
    /// Governance pillar.
    Governance,
    /// Environment pillar.
    Environment,
    /// Social pillar.
    Social,
}

impl ScoreDimension {
    /// Every dimension, in the order the score columns appear upstream.
    pub const ALL: [Self; 4] = [
        Self::Esg,
        Self::Governance,
        Self::Environment,
        Self::Social,
    ];

    /// Short label used in the long table's `score_dimension` column.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Esg => "esg",
            Self::Governance => "governance",
            Self::Environment => "environment",
            Self::Social => "social",
        }
    }

    /// Name of the wide column this dimension is unpivoted from.
    #[must_use]
    pub const fn source_column(self) -> &'static str {
        match self {
            Self::Esg => "esgScore",
            Self::Governance => "governanceScore",
            Self::Environment => "environmentScore",
            Self::Social => "socialScore",
        }
    }
}

impl fmt::Display for ScoreDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single observed score in long format. `score` is never null.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LongRow {
    /// Observation instant.
    pub timestamp: DateTime<Utc>,
    /// Company or peer-group tag.
    pub series_type: SeriesType,
    /// Which of the four score columns this row came from.
    pub score_dimension: ScoreDimension,
    /// Observed score.
    pub score: f64,
}

impl Timestamped for LongRow {
    fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

/// Unpivoted table of `(timestamp, series_type, score_dimension, score)` rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LongTable {
    rows: Vec<LongRow>,
}

impl LongTable {
    /// Column set of every long table.
    pub const COLUMNS: [&'static str; 4] =
        ["timestamp", "series_type", "score_dimension", "score"];

    /// Build a table from rows that are already in long format.
    #[must_use]
    pub const fn from_rows(rows: Vec<LongRow>) -> Self {
        Self { rows }
    }

    /// Column names, in display order.
    #[must_use]
    pub const fn columns(&self) -> &'static [&'static str] {
        &Self::COLUMNS
    }

    /// Rows in reshape order.
    #[must_use]
    pub fn rows(&self) -> &[LongRow] {
        &self.rows
    }

    /// Iterate rows in reshape order.
    pub fn iter(&self) -> std::slice::Iter<'_, LongRow> {
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

    /// Line series for one dimension, one line per series type present.
    ///
    /// Company comes before peer group; points keep table order. This replaces
    /// a separate chart builder per dimension with one parametrized call.
    #[must_use]
    pub fn chart_series(&self, dimension: ScoreDimension) -> Vec<ChartLine> {
        [SeriesType::Company, SeriesType::PeerGroup]
            .into_iter()
            .filter_map(|series_type| {
                let points: Vec<(DateTime<Utc>, f64)> = self
                    .rows
                    .iter()
                    .filter(|r| r.score_dimension == dimension && r.series_type == series_type)
                    .map(|r| (r.timestamp, r.score))
                    .collect();
                (!points.is_empty()).then_some(ChartLine {
                    series_type,
                    dimension,
                    points,
                })
            })
            .collect()
    }

    /// Consume the table and return its rows.
    #[must_use]
    pub fn into_rows(self) -> Vec<LongRow> {
        self.rows
    }
}

impl<'a> IntoIterator for &'a LongTable {
    type Item = &'a LongRow;
    type IntoIter = std::slice::Iter<'a, LongRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// Concatenate `company` then `peer` and unpivot the four score columns.
///
/// Output is grouped by dimension in [`ScoreDimension::ALL`] order; within a
/// dimension rows keep concatenation order. Rows whose score is missing are
/// dropped so charts only connect real observations.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        target = "esgchart::reshape",
        level = "trace",
        skip(company, peer),
        fields(company = company.len(), peer = peer.len()),
    )
)]
#[must_use]
pub fn reshape(company: &NormalizedTable, peer: &NormalizedTable) -> LongTable {
    let joined: Vec<_> = company.iter().chain(peer.iter()).collect();
    let mut rows = Vec::with_capacity(joined.len() * ScoreDimension::ALL.len());
    for dimension in ScoreDimension::ALL {
        rows.extend(joined.iter().filter_map(|r| {
            r.score(dimension).map(|score| LongRow {
                timestamp: r.timestamp,
                series_type: r.series_type,
                score_dimension: dimension,
                score,
            })
        }));
    }
    LongTable { rows }
}

/// [`reshape`] followed by the date-floor post-filter.
#[must_use]
pub fn reshape_since(
    company: &NormalizedTable,
    peer: &NormalizedTable,
    cutoff: DateTime<Utc>,
) -> LongTable {
    reshape(company, peer).since(cutoff)
}
