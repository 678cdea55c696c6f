//! Re-export of foundational types from `esgchart-types`.
// Consolidated re-exports so downstream crates can depend on `esgchart-core` only

pub use esgchart_types::{
    CacheConfig, CacheLifetime, ConnectorKey, DateView, EsgConfig, EsgError, MiddlewareLayer,
    MiddlewareStack,
};
