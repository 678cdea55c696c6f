//! esgchart-middleware
//!
//! Middleware wrappers for esgchart connectors and the builder that stacks them.

mod builder;
mod cache;

pub use crate::builder::ConnectorBuilder;
pub use crate::cache::{CacheMiddleware, CachingConnector};
