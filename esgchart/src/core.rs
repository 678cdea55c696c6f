use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use esgchart_core::{EsgConfig, EsgConnector, EsgError};

/// Orchestrator that runs the fetch → normalize → reshape pipeline over registered connectors.
pub struct EsgScope {
    pub(crate) connectors: Vec<Arc<dyn EsgConnector>>,
    pub(crate) cfg: EsgConfig,
}

/// Builder for constructing an `EsgScope` with custom configuration.
pub struct EsgScopeBuilder {
    connectors: Vec<Arc<dyn EsgConnector>>,
    cfg: EsgConfig,
}

impl Default for EsgScopeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl EsgScopeBuilder {
    /// Create a new builder with default configuration.
    ///
    /// Starts with no connectors; you must register at least one via [`with_connector`].
    ///
    /// [`with_connector`]: Self::with_connector
    #[must_use]
    pub fn new() -> Self {
        Self {
            connectors: vec![],
            cfg: EsgConfig::default(),
        }
    }

    /// Register a connector.
    ///
    /// Connectors are tried in registration order. A connector that reports
    /// `NotFound` or fails hands the ticker to the next one; the first chart
    /// returned wins.
    #[must_use]
    pub fn with_connector(mut self, c: Arc<dyn EsgConnector>) -> Self {
        self.connectors.push(c);
        self
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, cfg: EsgConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Tickers visited by [`EsgScope::lookup_samples`], in order.
    #[must_use]
    pub fn sample_tickers<I, S>(mut self, tickers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cfg.sample_tickers = tickers.into_iter().map(Into::into).collect();
        self
    }

    /// Cutoff date used by [`DateView::SinceFloor`](esgchart_core::DateView::SinceFloor).
    #[must_use]
    pub const fn date_floor(mut self, floor: NaiveDate) -> Self {
        self.cfg.date_floor = floor;
        self
    }

    /// Upper bound for a single connector call. Expiry is reported as a
    /// `Connector` error; there is no retry.
    #[must_use]
    pub const fn provider_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.provider_timeout = timeout;
        self
    }

    /// Build the `EsgScope` orchestrator.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no connectors have been registered via [`with_connector`].
    ///
    /// [`with_connector`]: Self::with_connector
    pub fn build(self) -> Result<EsgScope, EsgError> {
        if self.connectors.is_empty() {
            return Err(EsgError::InvalidArg(
                "no connectors registered; add at least one via with_connector(...)".to_string(),
            ));
        }
        Ok(EsgScope {
            connectors: self.connectors,
            cfg: self.cfg,
        })
    }
}

impl EsgScope {
    /// Start building a new `EsgScope`.
    ///
    /// ```rust,ignore
    /// use std::sync::Arc;
    /// use esgchart::{DateView, EsgScope};
    ///
    /// let scope = EsgScope::builder()
    ///     .with_connector(Arc::new(esgchart_mock::MockConnector::new()))
    ///     .sample_tickers(["AAPL", "MSFT"])
    ///     .build()?;
    /// let report = scope.lookup(&"AAPL".try_into()?, DateView::SinceFloor).await?;
    /// ```
    #[must_use]
    pub fn builder() -> EsgScopeBuilder {
        EsgScopeBuilder::new()
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &EsgConfig {
        &self.cfg
    }

    /// Wrap a connector future with a timeout and standardized timeout error mapping.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "esgchart::core::provider_call_with_timeout",
            skip(fut),
            fields(
                connector = connector_name,
                timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            ),
        )
    )]
    pub(crate) async fn provider_call_with_timeout<T, Fut>(
        connector_name: &'static str,
        timeout: Duration,
        fut: Fut,
    ) -> Result<T, EsgError>
    where
        Fut: core::future::Future<Output = Result<T, EsgError>>,
    {
        (tokio::time::timeout(timeout, fut).await).unwrap_or_else(|_| {
            Err(EsgError::connector(
                connector_name,
                format!(
                    "timed out after {} ms: esg_chart",
                    timeout.as_millis()
                ),
            ))
        })
    }
}
