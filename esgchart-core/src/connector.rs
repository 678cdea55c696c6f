use async_trait::async_trait;

use crate::model::{EsgChart, Ticker};
use crate::{ConnectorKey, EsgError};

/// Focused role trait for connectors that provide ESG score charts.
#[async_trait]
pub trait EsgChartProvider: Send + Sync {
    /// Fetch the peer-group label and the company/peer score series for `ticker`.
    ///
    /// Implementations return `EsgError::NotFound` when the upstream has no
    /// coverage for the ticker and never return a partially populated chart.
    async fn esg_chart(&self, ticker: &Ticker) -> Result<EsgChart, EsgError>;
}

/// Primary connector interface.
///
/// A connector advertises its capabilities by returning trait objects from the
/// `as_*_provider` accessors. The default implementations advertise nothing.
#[async_trait]
pub trait EsgConnector: Send + Sync {
    /// A stable identifier (e.g., "esgchart-yahoo", "esgchart-mock").
    fn name(&self) -> &'static str;

    /// Canonical connector key constructed from the static name.
    fn key(&self) -> ConnectorKey {
        ConnectorKey::new(self.name())
    }

    /// Human-friendly vendor string.
    fn vendor(&self) -> &'static str {
        "unknown"
    }

    /// Advertise ESG chart capability by returning a usable trait object reference when supported.
    fn as_esg_chart_provider(&self) -> Option<&dyn EsgChartProvider> {
        None
    }
}
