#![allow(dead_code)]
#![allow(clippy::type_complexity)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use esgchart_core::connector::{EsgChartProvider, EsgConnector};
use esgchart_core::{EsgChart, EsgError, Ticker};
use tokio::time::{Duration, sleep};

/// Simple in-memory connector used by integration tests.
/// Tailor behavior per test via the builder; every call is counted.
pub struct MockConnector {
    pub name: &'static str,
    pub delay_ms: u64,
    pub esg_capable: bool,
    pub chart_fn: Option<Arc<dyn Fn(&Ticker) -> Result<EsgChart, EsgError> + Send + Sync>>,
    calls: AtomicUsize,
}

impl MockConnector {
    pub fn builder() -> MockConnectorBuilder {
        MockConnectorBuilder::default()
    }

    /// Number of `esg_chart` calls that reached this connector.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

pub struct MockConnectorBuilder {
    name: &'static str,
    delay_ms: u64,
    esg_capable: bool,
    chart_fn: Option<Arc<dyn Fn(&Ticker) -> Result<EsgChart, EsgError> + Send + Sync>>,
}

impl Default for MockConnectorBuilder {
    fn default() -> Self {
        Self {
            name: "mock",
            delay_ms: 0,
            esg_capable: true,
            chart_fn: None,
        }
    }
}

impl MockConnectorBuilder {
    pub fn name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    pub fn delay_ms(mut self, ms: u64) -> Self {
        self.delay_ms = ms;
        self
    }

    /// Connector that advertises no ESG capability at all.
    pub fn without_esg(mut self) -> Self {
        self.esg_capable = false;
        self
    }

    pub fn returns_chart_ok(self, chart: EsgChart) -> Self {
        self.with_chart_fn(move |_| Ok(chart.clone()))
    }

    pub fn returns_not_found(self) -> Self {
        self.with_chart_fn(|t| Err(EsgError::not_found(format!("esg chart for {t}"))))
    }

    pub fn returns_error(self, err: EsgError) -> Self {
        self.with_chart_fn(move |_| Err(err.clone()))
    }

    pub fn with_chart_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(&Ticker) -> Result<EsgChart, EsgError> + Send + Sync + 'static,
    {
        self.chart_fn = Some(Arc::new(f));
        self
    }

    pub fn build(self) -> Arc<MockConnector> {
        Arc::new(MockConnector {
            name: self.name,
            delay_ms: self.delay_ms,
            esg_capable: self.esg_capable,
            chart_fn: self.chart_fn,
            calls: AtomicUsize::new(0),
        })
    }
}

impl EsgConnector for MockConnector {
    fn name(&self) -> &'static str {
        self.name
    }

    fn vendor(&self) -> &'static str {
        "test"
    }

    fn as_esg_chart_provider(&self) -> Option<&dyn EsgChartProvider> {
        if self.esg_capable {
            Some(self as &dyn EsgChartProvider)
        } else {
            None
        }
    }
}

#[async_trait]
impl EsgChartProvider for MockConnector {
    async fn esg_chart(&self, ticker: &Ticker) -> Result<EsgChart, EsgError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.delay_ms > 0 {
            sleep(Duration::from_millis(self.delay_ms)).await;
        }
        match &self.chart_fn {
            Some(f) => f(ticker),
            None => Err(EsgError::unsupported("esg_chart")),
        }
    }
}
