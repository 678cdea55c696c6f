//! Serde model of the upstream `esgChart` payload and its conversion into [`EsgChart`].
//!
//! Series arrive either as an array of records or as an object of parallel
//! columns; both decode to the same points.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use esgchart_core::{EsgChart, EsgError, ScorePoint, Series, Ticker};

/// Top-level response document.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EsgChartEnvelope {
    /// Absent when the upstream answered with an unrelated document.
    pub esg_chart: Option<EsgChartBody>,
}

/// The `esgChart` object.
#[derive(Debug, Clone, Deserialize)]
pub struct EsgChartBody {
    /// Zero or one entries. Missing, null and empty all mean no coverage.
    #[serde(default)]
    pub result: Option<Vec<EsgChartResult>>,
}

/// One entry of `esgChart.result`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EsgChartResult {
    /// Peer cohort name; its absence means the ticker has no coverage.
    #[serde(default)]
    pub peer_group: Option<String>,
    /// The ticker's own scores.
    #[serde(default)]
    pub symbol_series: Option<WireSeries>,
    /// The peer group's average scores.
    #[serde(default)]
    pub peer_series: Option<WireSeries>,
}

/// A score series in either of the two layouts the upstream uses.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum WireSeries {
    /// `[{"timestamp": .., "esgScore": ..}, ..]`
    Records(Vec<WireRecord>),
    /// `{"timestamp": [..], "esgScore": [..], ..}`
    Columns(WireColumns),
}

/// One record of a record-layout series. Unknown fields are ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireRecord {
    /// Epoch seconds.
    pub timestamp: i64,
    /// Composite ESG risk score.
    #[serde(default)]
    pub esg_score: Option<f64>,
    /// Governance risk score.
    #[serde(default)]
    pub governance_score: Option<f64>,
    /// Environment risk score.
    #[serde(default)]
    pub environment_score: Option<f64>,
    /// Social risk score.
    #[serde(default)]
    pub social_score: Option<f64>,
}

/// Column-layout series. Missing score columns decode as all-null.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireColumns {
    /// Epoch seconds.
    pub timestamp: Vec<i64>,
    /// Composite ESG risk score.
    #[serde(default)]
    pub esg_score: Option<Vec<Option<f64>>>,
    /// Governance risk score.
    #[serde(default)]
    pub governance_score: Option<Vec<Option<f64>>>,
    /// Environment risk score.
    #[serde(default)]
    pub environment_score: Option<Vec<Option<f64>>>,
    /// Social risk score.
    #[serde(default)]
    pub social_score: Option<Vec<Option<f64>>>,
}

fn decode_ts(secs: i64) -> Result<DateTime<Utc>, EsgError> {
    DateTime::from_timestamp(secs, 0)
        .ok_or_else(|| EsgError::Data(format!("timestamp out of range: {secs}")))
}

fn column_at(
    col: Option<&Vec<Option<f64>>>,
    name: &str,
    len: usize,
    i: usize,
) -> Result<Option<f64>, EsgError> {
    match col {
        None => Ok(None),
        Some(v) if v.len() != len => Err(EsgError::Data(format!(
            "column {name} has {} values, expected {len}",
            v.len()
        ))),
        Some(v) => Ok(v[i]),
    }
}

impl WireSeries {
    /// Decode into score points, preserving upstream order.
    ///
    /// # Errors
    /// Returns `Data` for timestamps outside the representable range or
    /// column-layout series whose columns disagree in length.
    pub fn into_points(self) -> Result<Vec<ScorePoint>, EsgError> {
        match self {
            Self::Records(records) => records
                .into_iter()
                .map(|r| {
                    Ok(ScorePoint {
                        timestamp: decode_ts(r.timestamp)?,
                        esg_score: r.esg_score,
                        governance_score: r.governance_score,
                        environment_score: r.environment_score,
                        social_score: r.social_score,
                    })
                })
                .collect(),
            Self::Columns(cols) => {
                let len = cols.timestamp.len();
                let mut out = Vec::with_capacity(len);
                for (i, &secs) in cols.timestamp.iter().enumerate() {
                    out.push(ScorePoint {
                        timestamp: decode_ts(secs)?,
                        esg_score: column_at(cols.esg_score.as_ref(), "esgScore", len, i)?,
                        governance_score: column_at(
                            cols.governance_score.as_ref(),
                            "governanceScore",
                            len,
                            i,
                        )?,
                        environment_score: column_at(
                            cols.environment_score.as_ref(),
                            "environmentScore",
                            len,
                            i,
                        )?,
                        social_score: column_at(cols.social_score.as_ref(), "socialScore", len, i)?,
                    });
                }
                Ok(out)
            }
        }
    }
}

impl EsgChartEnvelope {
    /// Convert the payload into a complete chart for `ticker`.
    ///
    /// # Errors
    /// `NotFound` when the document carries no result or no peer group;
    /// `Data` when a peer group is present but a series is missing or malformed.
    pub fn into_chart(self, ticker: &Ticker) -> Result<EsgChart, EsgError> {
        let not_found = || EsgError::not_found(format!("esg chart for {ticker}"));

        let result = self
            .esg_chart
            .and_then(|body| body.result)
            .and_then(|results| results.into_iter().next())
            .ok_or_else(not_found)?;
        let peer_group = result.peer_group.ok_or_else(not_found)?;

        let company = result
            .symbol_series
            .ok_or_else(|| EsgError::Data(format!("missing symbolSeries for {ticker}")))?
            .into_points()?;
        let peer = result
            .peer_series
            .ok_or_else(|| EsgError::Data(format!("missing peerSeries for {ticker}")))?
            .into_points()?;

        Ok(EsgChart {
            ticker: ticker.clone(),
            peer: Series::peer_group(peer_group.clone(), peer),
            company: Series::company(company),
            peer_group,
        })
    }
}
