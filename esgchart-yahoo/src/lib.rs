//! esgchart-yahoo
//!
//! Public connector that implements `EsgConnector` on top of Yahoo Finance's
//! `esgChart` endpoint: one GET per ticker, decoded into the peer-group label
//! plus the company and peer-group score series.
#![warn(missing_docs)]

/// Adapter definitions and the production adapter backed by `reqwest`.
pub mod adapter;
/// Builders wiring the connector into a middleware stack.
pub mod builder;
/// Serde model of the upstream payload.
pub mod wire;

#[cfg(not(feature = "test-adapters"))]
use std::sync::Arc;

#[cfg(feature = "test-adapters")]
use adapter::CloneArcAdapters;
use adapter::{RealAdapter, YfEsgChart};
use async_trait::async_trait;
use esgchart_core::{
    EsgChart, EsgConfig, EsgError, Ticker,
    connector::{EsgChartProvider, EsgConnector},
};
use esgchart_types::ConnectorKey;

pub use builder::YahooConnectorBuilder;

#[cfg(feature = "test-adapters")]
type EsgAdapter = std::sync::Arc<dyn YfEsgChart>;
#[cfg(not(feature = "test-adapters"))]
type EsgAdapter = Arc<RealAdapter>;

/// Public connector type. Production users will construct with `YahooConnector::new_default()`.
pub struct YahooConnector {
    esg: EsgAdapter,
}

impl YahooConnector {
    /// Static connector key used in logs and errors.
    pub const KEY: ConnectorKey = ConnectorKey::new("esgchart-yahoo");

    /// Attribute untyped adapter failures to this connector. Typed variants,
    /// including `NotFound`, pass through unchanged.
    fn normalize_error(e: EsgError) -> EsgError {
        match e {
            EsgError::Other(msg) => EsgError::connector(Self::KEY.as_str(), msg),
            other => other,
        }
    }

    /// Build against the public endpoint with default settings.
    #[must_use]
    pub fn new_default() -> Self {
        let a = RealAdapter::new_default();
        Self::from_adapter(&a)
    }

    /// Build from configuration: endpoint prefix, user agent, and request timeout.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn with_config(cfg: &EsgConfig) -> Result<Self, EsgError> {
        let a = RealAdapter::try_from_config(cfg)?;
        Ok(Self::from_adapter(&a))
    }

    /// For tests/injection (requires the `test-adapters` feature).
    ///
    /// Accepts a borrowed adapter to avoid unnecessary moves.
    #[cfg(feature = "test-adapters")]
    pub fn from_adapter<A: CloneArcAdapters + 'static>(adapter: &A) -> Self {
        Self {
            esg: adapter.clone_arc_esg_chart(),
        }
    }

    #[cfg(not(feature = "test-adapters"))]
    /// Build from a concrete `RealAdapter` by cloning it into a shared handle.
    pub fn from_adapter(adapter: &RealAdapter) -> Self {
        Self {
            esg: Arc::new(adapter.clone()),
        }
    }
}

#[async_trait]
impl EsgChartProvider for YahooConnector {
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "esgchart_yahoo::esg_chart",
            skip(self),
            fields(ticker = %ticker),
        )
    )]
    async fn esg_chart(&self, ticker: &Ticker) -> Result<EsgChart, EsgError> {
        let envelope = self
            .esg
            .esg_chart(ticker.as_str())
            .await
            .map_err(Self::normalize_error)?;
        envelope.into_chart(ticker)
    }
}

impl EsgConnector for YahooConnector {
    fn name(&self) -> &'static str {
        Self::KEY.as_str()
    }

    fn vendor(&self) -> &'static str {
        "Yahoo"
    }

    fn as_esg_chart_provider(&self) -> Option<&dyn EsgChartProvider> {
        Some(self as &dyn EsgChartProvider)
    }
}
