//! esgchart looks up a company's ESG risk scores and benchmarks them against its peer group.
//!
//! Overview
//! - Fetches the peer-group label plus company and peer score series through
//!   connectors implementing the `esgchart_core` contracts.
//! - Normalizes each series into a wide table, then unpivots both into a long
//!   table keyed by score dimension, dropping missing scores.
//! - Optionally restricts every table to observations on or after a date floor.
//! - Turns any failure into a single user-facing "no data" outcome, while
//!   keeping the underlying error available for callers that need to branch.
//!
//! Key behaviors
//! - No coverage is a hard stop: nothing downstream of the fetch runs and no
//!   partial tables are produced.
//! - Each connector call is bounded by `provider_timeout`; there is no retry.
//! - Caching is opt-in and explicit: wrap a connector with
//!   `ConnectorBuilder::with_cache` before registering it.
//!
//! Examples
//! ```rust,ignore
//! use std::sync::Arc;
//! use esgchart::{CacheConfig, ConnectorBuilder, DateView, EsgScope};
//!
//! let yf = esgchart_yahoo::YahooConnector::cached().build()?;
//! let scope = EsgScope::builder().with_connector(yf).build()?;
//!
//! match scope.render_outcome("AAPL", DateView::SinceFloor).await {
//!     esgchart::Outcome::Report(r) => println!("{}: {} rows", r.company_heading(), r.company.len()),
//!     other => println!("{}", other.message().unwrap_or_default()),
//! }
//! ```
//!
//! See `demos/examples/` for runnable end-to-end demonstrations.
#![warn(missing_docs)]

pub(crate) mod core;
mod pipeline;
mod report;

pub use crate::core::{EsgScope, EsgScopeBuilder};
pub use report::{BatchEntry, BatchReport, EsgReport, Outcome};

pub use esgchart_middleware::{CacheMiddleware, CachingConnector, ConnectorBuilder};

// Re-export core types for convenience
pub use esgchart_core::{
    CacheConfig, CacheLifetime, ChartLine, DateView, EsgChart, EsgChartProvider, EsgConfig,
    EsgConnector, EsgError, LongRow, LongTable, NormalizedRow, NormalizedTable, ScoreDimension,
    ScorePoint, Series, SeriesType, Ticker,
};

#[cfg(feature = "dataframe")]
pub use esgchart_core::ToDataFrame;
