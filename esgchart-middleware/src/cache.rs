//! Ticker-keyed cache for ESG charts.
//!
//! Only successful charts are stored; `NotFound` and transport failures always
//! reach the inner connector again on the next lookup.

use std::sync::Arc;

use async_trait::async_trait;
use esgchart_core::connector::{EsgChartProvider, EsgConnector};
use esgchart_core::{EsgChart, EsgError, Middleware, Ticker};
use esgchart_types::{CacheConfig, CacheLifetime};
use moka::future::Cache;

/// Declarative wrapper that applies caching when building a connector stack.
pub struct CacheMiddleware {
    cfg: CacheConfig,
}

impl CacheMiddleware {
    /// Create the middleware from a cache configuration.
    #[must_use]
    pub const fn new(cfg: CacheConfig) -> Self {
        Self { cfg }
    }
}

impl Middleware for CacheMiddleware {
    fn apply(self: Box<Self>, inner: Arc<dyn EsgConnector>) -> Arc<dyn EsgConnector> {
        let Self { cfg } = *self;
        Arc::new(CachingConnector::new(inner, &cfg))
    }

    fn name(&self) -> &'static str {
        CachingConnector::LAYER_NAME
    }

    fn config_json(&self) -> serde_json::Value {
        lifetime_json(&self.cfg)
    }
}

fn lifetime_json(cfg: &CacheConfig) -> serde_json::Value {
    match cfg.lifetime {
        CacheLifetime::Session(ttl) => serde_json::json!({
            "lifetime": "session",
            "ttl_ms": u64::try_from(ttl.as_millis()).unwrap_or(u64::MAX),
            "max_entries": cfg.max_entries,
        }),
        _ => serde_json::json!({
            "lifetime": "process",
            "max_entries": cfg.max_entries,
        }),
    }
}

/// Connector wrapper that memoizes ESG charts per ticker.
///
/// Concurrent lookups for the same ticker share one in-flight fetch, so the
/// inner connector sees at most one request per key while the entry is being
/// computed. The cache lives exactly as long as this wrapper.
pub struct CachingConnector {
    inner: Arc<dyn EsgConnector>,
    charts: Cache<String, EsgChart>,
    cfg: CacheConfig,
}

impl CachingConnector {
    /// Name reported by the cache layer in middleware stacks.
    pub const LAYER_NAME: &'static str = "CachingConnector";

    /// Wrap `inner` with a cache governed by `cfg`.
    #[must_use]
    pub fn new(inner: Arc<dyn EsgConnector>, cfg: &CacheConfig) -> Self {
        let mut builder = Cache::<String, EsgChart>::builder();
        if let Some(max) = cfg.max_entries {
            builder = builder.max_capacity(max);
        }
        if let CacheLifetime::Session(ttl) = cfg.lifetime {
            builder = builder.time_to_live(ttl);
        }
        Self {
            inner,
            charts: builder.build(),
            cfg: cfg.clone(),
        }
    }

    /// Access the inner connector.
    pub fn inner(&self) -> &Arc<dyn EsgConnector> {
        &self.inner
    }

    /// Configuration this cache was built with.
    #[must_use]
    pub const fn config(&self) -> &CacheConfig {
        &self.cfg
    }

    /// Number of cached tickers after pending maintenance has run.
    pub async fn entry_count(&self) -> u64 {
        self.charts.run_pending_tasks().await;
        self.charts.entry_count()
    }

    /// Drop every cached chart.
    pub fn invalidate_all(&self) {
        self.charts.invalidate_all();
    }
}

impl EsgConnector for CachingConnector {
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    fn vendor(&self) -> &'static str {
        self.inner.vendor()
    }

    fn as_esg_chart_provider(&self) -> Option<&dyn EsgChartProvider> {
        self.inner
            .as_esg_chart_provider()
            .map(|_| self as &dyn EsgChartProvider)
    }
}

#[async_trait]
impl EsgChartProvider for CachingConnector {
    async fn esg_chart(&self, ticker: &Ticker) -> Result<EsgChart, EsgError> {
        let inner = self
            .inner
            .as_esg_chart_provider()
            .ok_or_else(|| EsgError::unsupported("esg_chart"))?;

        let key = ticker.as_str().to_string();
        if let Some(hit) = self.charts.get(&key).await {
            #[cfg(feature = "tracing")]
            tracing::debug!(target: "esgchart::cache", ticker = %ticker, "cache hit");
            return Ok(hit);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(target: "esgchart::cache", ticker = %ticker, "cache miss");

        self.charts
            .try_get_with(key, inner.esg_chart(ticker))
            .await
            .map_err(|e| (*e).clone())
    }
}
