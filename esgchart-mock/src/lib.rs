//! Mock connectors for esgchart tests and demos.
//!
//! - [`MockConnector`]: static fixtures for `AAPL`, `MSFT`, and `TSLA`.
//! - [`DynamicMockConnector`]: per-ticker behaviour scripted at runtime, with call counting.
use async_trait::async_trait;
use esgchart_core::connector::{EsgChartProvider, EsgConnector};
use esgchart_core::{EsgChart, EsgError, Ticker};

mod dynamic;
mod fixtures;

pub use dynamic::{DynamicMockConnector, DynamicMockController, MockBehavior};

/// Mock connector for CI-safe demos. Provides deterministic data from static fixtures.
///
/// `FAIL` produces a connector error, `TIMEOUT` sleeps briefly before answering,
/// and any ticker without a fixture is reported as not found.
pub struct MockConnector;

impl Default for MockConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl MockConnector {
    /// Create the fixture connector.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Tickers with fixture coverage.
    pub const COVERED: [&'static str; 3] = ["AAPL", "MSFT", "TSLA"];

    async fn maybe_fail_or_timeout(ticker: &str) -> Result<(), EsgError> {
        match ticker {
            "FAIL" => Err(EsgError::connector(
                "esgchart-mock",
                "forced failure: esg_chart",
            )),
            "TIMEOUT" => {
                // brief; the orchestrator may time out depending on config
                tokio::time::sleep(std::time::Duration::from_millis(200)).await;
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

impl EsgConnector for MockConnector {
    fn name(&self) -> &'static str {
        "esgchart-mock"
    }

    fn vendor(&self) -> &'static str {
        "Mock"
    }

    fn as_esg_chart_provider(&self) -> Option<&dyn EsgChartProvider> {
        Some(self as &dyn EsgChartProvider)
    }
}

#[async_trait]
impl EsgChartProvider for MockConnector {
    async fn esg_chart(&self, ticker: &Ticker) -> Result<EsgChart, EsgError> {
        let t = ticker.as_str();
        Self::maybe_fail_or_timeout(t).await?;
        fixtures::esg::by_ticker(t).ok_or_else(|| EsgError::not_found(format!("esg chart for {t}")))
    }
}
