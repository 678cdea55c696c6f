//! Builder for composing connectors with middleware layers.
//!
//! Middleware layers form an "onion" around the raw connector. The `layers`
//! vector stores middleware in **outermost-first** order (last added =
//! outermost) and is applied in reverse during `build()`:
//!
//! ```text
//! builder.with_cache(..).layer(custom)
//!
//! Storage: [Custom, Cache]      (outermost first)
//! Applied: Raw -> Cache -> Custom
//! Result:  Custom(Cache(Raw))
//! ```

use std::collections::HashSet;
use std::sync::Arc;

use esgchart_core::connector::EsgConnector;
use esgchart_core::{EsgError, Middleware};
use esgchart_types::{CacheConfig, MiddlewareLayer, MiddlewareStack};
use serde_json::json;

use crate::cache::{CacheMiddleware, CachingConnector};

/// Generic middleware builder for composing a connector with layered wrappers.
pub struct ConnectorBuilder {
    raw: Arc<dyn EsgConnector>,
    /// Middleware layers in outermost-first order.
    layers: Vec<Box<dyn Middleware>>,
}

impl ConnectorBuilder {
    /// Create a new builder from a raw, unwrapped connector.
    #[must_use]
    pub fn new(raw: Arc<dyn EsgConnector>) -> Self {
        Self {
            raw,
            layers: Vec::new(),
        }
    }

    /// Add or replace the ticker cache.
    ///
    /// The cache is inserted at the outermost position so hits never reach
    /// any other layer. An existing cache layer is replaced.
    #[must_use]
    pub fn with_cache(mut self, cfg: &CacheConfig) -> Self {
        self.layers.retain(|m| m.name() != CachingConnector::LAYER_NAME);
        self.layers
            .insert(0, Box::new(CacheMiddleware::new(cfg.clone())));
        self
    }

    /// Remove the cache if present.
    #[must_use]
    pub fn without_cache(mut self) -> Self {
        self.layers.retain(|m| m.name() != CachingConnector::LAYER_NAME);
        self
    }

    /// Add an arbitrary middleware layer at the outermost position.
    #[must_use]
    pub fn layer(mut self, layer: Box<dyn Middleware>) -> Self {
        self.layers.insert(0, layer);
        self
    }

    /// Export the current middleware stack configuration for inspection.
    ///
    /// The raw connector is appended as the innermost "layer" for observability.
    #[must_use]
    pub fn to_stack(&self) -> MiddlewareStack {
        let raw = MiddlewareLayer {
            name: "RawConnector".to_string(),
            config: json!({ "name": self.raw.name() }),
        };
        let layers = self
            .layers
            .iter()
            .map(|m| MiddlewareLayer {
                name: m.name().to_string(),
                config: m.config_json(),
            })
            .chain(std::iter::once(raw))
            .collect();
        MiddlewareStack { layers }
    }

    /// Build the wrapped connector.
    ///
    /// # Errors
    /// Returns `InvalidMiddlewareStack` when the same layer appears twice.
    pub fn build(self) -> Result<Arc<dyn EsgConnector>, EsgError> {
        let mut seen = HashSet::new();
        for layer in &self.layers {
            if !seen.insert(layer.name()) {
                return Err(EsgError::InvalidMiddlewareStack {
                    message: format!("duplicate middleware layer: {}", layer.name()),
                });
            }
        }

        let mut acc: Arc<dyn EsgConnector> = Arc::clone(&self.raw);
        // innermost first
        for m in self.layers.into_iter().rev() {
            acc = m.apply(acc);
        }
        Ok(acc)
    }
}
