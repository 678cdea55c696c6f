use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;

use esgchart_core::connector::{EsgChartProvider, EsgConnector};
use esgchart_core::{EsgChart, EsgError, Ticker};

/// Instruction for how a lookup should behave for a given ticker.
#[derive(Clone)]
pub enum MockBehavior<T> {
    /// Return the provided value immediately.
    Return(T),
    /// Return the provided value after sleeping.
    ReturnAfter(T, Duration),
    /// Fail immediately with the provided error.
    Fail(EsgError),
    /// Hang indefinitely (simulate a stalled upstream).
    Hang,
}

#[derive(Default)]
struct InternalState {
    esg_rules: HashMap<String, MockBehavior<EsgChart>>,
    calls: HashMap<String, usize>,
}

/// Controller handle used by tests to drive the dynamic mock from the outside.
pub struct DynamicMockController {
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockController {
    /// Set the behavior for `esg_chart` calls for a specific ticker.
    pub async fn set_esg_behavior(&self, ticker: &str, behavior: MockBehavior<EsgChart>) {
        let mut guard = self.state.lock().await;
        guard.esg_rules.insert(ticker.to_string(), behavior);
    }

    /// Number of `esg_chart` calls observed for `ticker`.
    pub async fn calls(&self, ticker: &str) -> usize {
        let guard = self.state.lock().await;
        guard.calls.get(ticker).copied().unwrap_or(0)
    }

    /// Total number of `esg_chart` calls across all tickers.
    pub async fn total_calls(&self) -> usize {
        let guard = self.state.lock().await;
        guard.calls.values().sum()
    }
}

/// Connector whose per-ticker behaviour is scripted through a [`DynamicMockController`].
///
/// Tickers without a rule are reported as not found.
pub struct DynamicMockConnector {
    name: &'static str,
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockConnector {
    /// Create a connector named `name` and the controller that drives it.
    #[must_use]
    pub fn new_with_controller(name: &'static str) -> (Arc<Self>, DynamicMockController) {
        let state = Arc::new(Mutex::new(InternalState::default()));
        let connector = Arc::new(Self {
            name,
            state: Arc::clone(&state),
        });
        (connector, DynamicMockController { state })
    }
}

impl EsgConnector for DynamicMockConnector {
    fn name(&self) -> &'static str {
        self.name
    }

    fn vendor(&self) -> &'static str {
        "Mock"
    }

    fn as_esg_chart_provider(&self) -> Option<&dyn EsgChartProvider> {
        Some(self as &dyn EsgChartProvider)
    }
}

#[async_trait]
impl EsgChartProvider for DynamicMockConnector {
    async fn esg_chart(&self, ticker: &Ticker) -> Result<EsgChart, EsgError> {
        let behavior = {
            let mut guard = self.state.lock().await;
            *guard.calls.entry(ticker.as_str().to_string()).or_insert(0) += 1;
            guard.esg_rules.get(ticker.as_str()).cloned()
        };

        match behavior {
            Some(MockBehavior::Return(chart)) => Ok(chart),
            Some(MockBehavior::ReturnAfter(chart, delay)) => {
                tokio::time::sleep(delay).await;
                Ok(chart)
            }
            Some(MockBehavior::Fail(e)) => Err(e),
            Some(MockBehavior::Hang) => std::future::pending().await,
            None => Err(EsgError::not_found(format!("esg chart for {ticker}"))),
        }
    }
}
