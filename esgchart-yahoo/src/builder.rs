use std::sync::Arc;

use esgchart_core::connector::EsgConnector;
use esgchart_middleware::ConnectorBuilder as GenericConnectorBuilder;
use esgchart_types::CacheConfig;

use crate::YahooConnector;

/// Builder type alias specialized for Yahoo connectors.
pub type YahooConnectorBuilder = GenericConnectorBuilder;

impl YahooConnector {
    /// Returns an unconfigured builder with the default connector.
    ///
    /// Customize with the builder methods before calling `.build()`.
    #[must_use]
    pub fn new() -> YahooConnectorBuilder {
        let raw: Arc<dyn EsgConnector> = Arc::new(Self::new_default());
        GenericConnectorBuilder::new(raw)
    }

    /// Returns a builder with a process-lifetime ticker cache, so each ticker
    /// is fetched at most once.
    #[must_use]
    pub fn cached() -> YahooConnectorBuilder {
        let raw: Arc<dyn EsgConnector> = Arc::new(Self::new_default());
        GenericConnectorBuilder::new(raw).with_cache(&CacheConfig::process())
    }

    /// Expert-only: construct an unwrapped connector for manual composition.
    #[must_use]
    pub fn new_raw() -> Self {
        Self::new_default()
    }
}
