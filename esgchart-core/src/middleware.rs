//! Middleware trait for wrapping `EsgConnector` implementations.

use std::sync::Arc;

use crate::connector::EsgConnector;

/// Trait implemented by connector middleware layers.
///
/// A middleware consumes an inner `EsgConnector` and returns a wrapped connector
/// that augments its behavior (e.g., caching).
pub trait Middleware: Send + Sync {
    /// Apply this middleware to wrap an inner connector and return the wrapped connector.
    fn apply(self: Box<Self>, inner: Arc<dyn EsgConnector>) -> Arc<dyn EsgConnector>;

    /// Human-readable middleware name for introspection/logging.
    fn name(&self) -> &'static str;

    /// Opaque configuration snapshot for serialization/inspection.
    fn config_json(&self) -> serde_json::Value;
}
