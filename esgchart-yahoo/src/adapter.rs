#[cfg(feature = "test-adapters")]
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::StatusCode;
use reqwest::header::USER_AGENT;
use url::Url;

use esgchart_core::{EsgConfig, EsgError};

use crate::wire::EsgChartEnvelope;

/// ESG chart abstraction (so we can inject canned payloads in tests).
#[async_trait]
pub trait YfEsgChart: Send + Sync {
    /// Fetch and decode the raw `esgChart` document for `symbol`.
    async fn esg_chart(&self, symbol: &str) -> Result<EsgChartEnvelope, EsgError>;
}

/// Real adapter backed by a single `reqwest::Client`.
/// `reqwest::Client` is `Clone + Send + Sync`, so no external locking is needed.
#[derive(Clone)]
pub struct RealAdapter {
    client: reqwest::Client,
    endpoint_prefix: String,
    user_agent: String,
}

impl RealAdapter {
    /// Build an adapter for the public endpoint with a browser-like user agent.
    #[must_use]
    pub fn new_default() -> Self {
        Self::new(reqwest::Client::new(), &EsgConfig::default())
    }

    /// Wrap an existing HTTP client, taking the endpoint and user agent from `cfg`.
    #[must_use]
    pub fn new(client: reqwest::Client, cfg: &EsgConfig) -> Self {
        Self {
            client,
            endpoint_prefix: cfg.endpoint_prefix.clone(),
            user_agent: cfg.user_agent.clone(),
        }
    }

    /// Build a dedicated client whose requests give up after `cfg.provider_timeout`.
    ///
    /// # Errors
    /// Returns `Other` if the HTTP client cannot be constructed.
    pub fn try_from_config(cfg: &EsgConfig) -> Result<Self, EsgError> {
        let client = reqwest::Client::builder()
            .timeout(cfg.provider_timeout)
            .build()
            .map_err(|e| EsgError::Other(e.to_string()))?;
        Ok(Self::new(client, cfg))
    }

    /// Request URL for `symbol`: the endpoint prefix with the symbol appended verbatim.
    ///
    /// # Errors
    /// Returns `InvalidArg` when the result is not a valid URL.
    pub fn url_for(&self, symbol: &str) -> Result<Url, EsgError> {
        Url::parse(&format!("{}{symbol}", self.endpoint_prefix))
            .map_err(|e| EsgError::InvalidArg(format!("invalid esg chart url for {symbol}: {e}")))
    }
}

fn transport_err(e: &reqwest::Error, context: &str) -> EsgError {
    if e.is_timeout() {
        EsgError::connector("esgchart-yahoo", format!("timed out: {context}"))
    } else {
        EsgError::connector("esgchart-yahoo", format!("{e}: {context}"))
    }
}

#[async_trait]
impl YfEsgChart for RealAdapter {
    async fn esg_chart(&self, symbol: &str) -> Result<EsgChartEnvelope, EsgError> {
        let context = format!("esg chart for {symbol}");
        let url = self.url_for(symbol)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(target: "esgchart::yahoo", %url, "requesting esg chart");

        let resp = self
            .client
            .get(url)
            .header(USER_AGENT, &self.user_agent)
            .send()
            .await
            .map_err(|e| transport_err(&e, &context))?;

        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            return Err(EsgError::not_found(context));
        }
        if !status.is_success() {
            return Err(EsgError::connector(
                "esgchart-yahoo",
                format!("status {status}: {context}"),
            ));
        }

        let body = resp
            .bytes()
            .await
            .map_err(|e| transport_err(&e, &context))?;
        serde_json::from_slice(&body)
            .map_err(|e| EsgError::Data(format!("invalid json in {context}: {e}")))
    }
}

/* -------- Test-only lightweight adapter constructors ------- */

#[cfg(feature = "test-adapters")]
impl dyn YfEsgChart {
    /// Build a `YfEsgChart` from a closure (tests only).
    pub fn from_fn<F>(f: F) -> Arc<dyn YfEsgChart>
    where
        F: Send + Sync + 'static + Fn(String) -> Result<EsgChartEnvelope, EsgError>,
    {
        struct FnEsgChart<F>(F);
        #[async_trait]
        impl<F> YfEsgChart for FnEsgChart<F>
        where
            F: Send + Sync + 'static + Fn(String) -> Result<EsgChartEnvelope, EsgError>,
        {
            async fn esg_chart(&self, symbol: &str) -> Result<EsgChartEnvelope, EsgError> {
                (self.0)(symbol.to_string())
            }
        }
        Arc::new(FnEsgChart(f))
    }
}

/// Helper trait to split a concrete adapter into arc trait objects.
#[cfg(feature = "test-adapters")]
pub trait CloneArcAdapters {
    /// Clone as `Arc<dyn YfEsgChart>`.
    fn clone_arc_esg_chart(&self) -> Arc<dyn YfEsgChart> {
        <dyn YfEsgChart>::from_fn(|_| Err(EsgError::unsupported("esg_chart")))
    }
}

#[cfg(feature = "test-adapters")]
impl CloneArcAdapters for RealAdapter {
    fn clone_arc_esg_chart(&self) -> Arc<dyn YfEsgChart> {
        Arc::new(self.clone()) as Arc<dyn YfEsgChart>
    }
}
