//! Polars export for normalized and long tables.

use polars::prelude::{Column, DataFrame, DataType, NamedFrom, PolarsResult, Series, TimeUnit};

use crate::timeseries::normalize::NormalizedTable;
use crate::timeseries::reshape::LongTable;

/// Convert a table into a polars `DataFrame` with the table's column set.
pub trait ToDataFrame {
    /// Build the frame.
    ///
    /// # Errors
    /// Returns a polars error if a column cannot be constructed or cast.
    fn to_dataframe(&self) -> PolarsResult<DataFrame>;
}

fn timestamp_column<I>(timestamps: I) -> PolarsResult<Column>
where
    I: Iterator<Item = chrono::DateTime<chrono::Utc>>,
{
    let millis: Vec<i64> = timestamps.map(|ts| ts.timestamp_millis()).collect();
    let s = Series::new("timestamp".into(), millis)
        .cast(&DataType::Datetime(TimeUnit::Milliseconds, None))?;
    Ok(Column::from(s))
}

impl ToDataFrame for NormalizedTable {
    fn to_dataframe(&self) -> PolarsResult<DataFrame> {
        let series_type: Vec<&str> = self.iter().map(|r| r.series_type.label()).collect();
        let esg: Vec<Option<f64>> = self.iter().map(|r| r.esg_score).collect();
        let governance: Vec<Option<f64>> = self.iter().map(|r| r.governance_score).collect();
        let environment: Vec<Option<f64>> = self.iter().map(|r| r.environment_score).collect();
        let social: Vec<Option<f64>> = self.iter().map(|r| r.social_score).collect();

        DataFrame::new(vec![
            timestamp_column(self.iter().map(|r| r.timestamp))?,
            Column::from(Series::new("series_type".into(), series_type)),
            Column::from(Series::new("esgScore".into(), esg)),
            Column::from(Series::new("governanceScore".into(), governance)),
            Column::from(Series::new("environmentScore".into(), environment)),
            Column::from(Series::new("socialScore".into(), social)),
        ])
    }
}

impl ToDataFrame for LongTable {
    fn to_dataframe(&self) -> PolarsResult<DataFrame> {
        let series_type: Vec<&str> = self.iter().map(|r| r.series_type.label()).collect();
        let dimension: Vec<&str> = self.iter().map(|r| r.score_dimension.label()).collect();
        let score: Vec<f64> = self.iter().map(|r| r.score).collect();

        DataFrame::new(vec![
            timestamp_column(self.iter().map(|r| r.timestamp))?,
            Column::from(Series::new("series_type".into(), series_type)),
            Column::from(Series::new("score_dimension".into(), dimension)),
            Column::from(Series::new("score".into(), score)),
        ])
    }
}
