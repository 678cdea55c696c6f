//! esgchart-specific error taxonomy, configuration values, and connector metadata.
#![warn(missing_docs)]

mod config;
mod connector;
mod error;
mod middleware;

pub use config::{CacheConfig, CacheLifetime, DateView, EsgConfig};
pub use connector::ConnectorKey;
pub use error::EsgError;
pub use middleware::{MiddlewareLayer, MiddlewareStack};
