use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::EsgError;
use crate::timeseries::reshape::ScoreDimension;

/// Exchange symbol used to look up ESG coverage.
///
/// The only validation is non-emptiness; the string is otherwise passed
/// through to the upstream verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Ticker(String);

impl Ticker {
    /// Build a ticker from any string-like value.
    ///
    /// # Errors
    /// Returns `InvalidArg` when the symbol is empty.
    pub fn new(symbol: impl Into<String>) -> Result<Self, EsgError> {
        let symbol = symbol.into();
        if symbol.is_empty() {
            return Err(EsgError::InvalidArg("ticker must not be empty".into()));
        }
        Ok(Self(symbol))
    }

    /// Borrow the raw symbol.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Ticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Ticker {
    type Error = EsgError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Ticker {
    type Error = EsgError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Ticker> for String {
    fn from(t: Ticker) -> Self {
        t.0
    }
}

/// Discriminator between the company's own scores and its peer-group average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SeriesType {
    /// Scores of the looked-up ticker.
    #[serde(rename = "company")]
    Company,
    /// Average scores of the ticker's peer group.
    #[serde(rename = "peer group")]
    PeerGroup,
}

impl SeriesType {
    /// Label used in tables and chart legends.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Company => "company",
            Self::PeerGroup => "peer group",
        }
    }
}

impl fmt::Display for SeriesType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One ESG observation. Every score is nullable upstream.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScorePoint {
    /// Observation instant, decoded from epoch seconds.
    pub timestamp: DateTime<Utc>,
    /// Composite ESG risk score.
    pub esg_score: Option<f64>,
    /// Governance risk score.
    pub governance_score: Option<f64>,
    /// Environment risk score.
    pub environment_score: Option<f64>,
    /// Social risk score.
    pub social_score: Option<f64>,
}

impl ScorePoint {
    /// A point with every score missing.
    #[must_use]
    pub const fn empty(timestamp: DateTime<Utc>) -> Self {
        Self {
            timestamp,
            esg_score: None,
            governance_score: None,
            environment_score: None,
            social_score: None,
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

/// Ordered sequence of observations for a ticker or its peer group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    /// Whose scores these are.
    pub series_type: SeriesType,
    /// Peer cohort name; only set on peer-group series.
    pub peer_group_label: Option<String>,
    /// Observations in upstream order.
    pub points: Vec<ScorePoint>,
}

impl Series {
    /// Company series for the looked-up ticker.
    #[must_use]
    pub const fn company(points: Vec<ScorePoint>) -> Self {
        Self {
            series_type: SeriesType::Company,
            peer_group_label: None,
            points,
        }
    }

    /// Peer-group series labelled with its cohort name.
    pub fn peer_group(label: impl Into<String>, points: Vec<ScorePoint>) -> Self {
        Self {
            series_type: SeriesType::PeerGroup,
            peer_group_label: Some(label.into()),
            points,
        }
    }

    /// Number of observations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when the series holds no observations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// The complete result of one fetch: the peer-group label plus both series.
///
/// A connector either returns the whole triple or an error; there is no
/// partially populated chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EsgChart {
    /// Ticker the chart was fetched for.
    pub ticker: Ticker,
    /// Name of the industry cohort used as benchmark.
    pub peer_group: String,
    /// The ticker's own scores.
    pub company: Series,
    /// The peer group's average scores.
    pub peer: Series,
}
