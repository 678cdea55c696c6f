//! esgchart-core
//!
//! Core types, traits, and pipeline stages shared across the esgchart workspace.
//!
//! - `model`: tickers, score points, company/peer series, and the fetched `EsgChart`.
//! - `connector`: the `EsgConnector` trait and the `EsgChartProvider` role trait.
//! - `middleware`: the trait implemented by connector wrappers (caching).
//! - `timeseries`: the Normalizer, the Reshaper, date-floor filtering, and chart series.
//!
//! Data flows strictly fetch → normalize → reshape; nothing in this crate performs I/O.
#![warn(missing_docs)]

/// Connector capability trait and the primary `EsgConnector` interface.
pub mod connector;
/// Optional polars export of normalized and long tables.
#[cfg(feature = "dataframe")]
pub mod dataframe;
/// Middleware trait implemented by connector wrappers.
pub mod middleware;
/// Tickers, score points, and series.
pub mod model;
/// Normalize, reshape, filter, and chart helpers.
pub mod timeseries;
pub mod types;

pub use connector::{EsgChartProvider, EsgConnector};
pub use middleware::Middleware;
pub use model::{EsgChart, ScorePoint, Series, SeriesType, Ticker};
pub use timeseries::chart::ChartLine;
pub use timeseries::filter::{Timestamped, retain_since};
pub use timeseries::normalize::{NormalizedRow, NormalizedTable, normalize};
pub use timeseries::reshape::{LongRow, LongTable, ScoreDimension, reshape, reshape_since};
pub use types::*;

#[cfg(feature = "dataframe")]
pub use dataframe::ToDataFrame;
